//! Two-channel drum voice: trigger handling, envelopes and output blending.

use crate::envelope::DecayEnvelope;
use crate::noise::SampleHoldNoise;
use crate::oscillator::{PhaseOscillator, Waveform};
use crate::params::{Param, Params, MAX_PARAM};
use crate::utils::proportion;
use crate::{TickRate, CARRIER_FULL_SCALE, MAX_LEVEL};

/// Lowest bass carrier frequency in milli-hertz (tone parameter at zero).
const BASS_FREQ_MIN_MILLIHZ: i32 = 3000;

/// Frequency span covered as the tone parameter rises to its maximum.
const BASS_FREQ_SPAN_MILLIHZ: i32 = 3000;

/// Bass carrier frequency in milli-hertz for a tone parameter in `0..=63`.
pub fn bass_frequency_millihz(tone: i32) -> u32 {
    (proportion(tone, MAX_PARAM, BASS_FREQ_SPAN_MILLIHZ) + BASS_FREQ_MIN_MILLIHZ) as u32
}

/// Host-supplied configuration, passed in explicitly at init.
#[derive(Debug, Clone, Copy)]
pub struct VoiceConfig {
    /// Base envelope peak per channel, in signal units. The two output paths
    /// of the original hardware have different available voltage spans, so
    /// these are two independent constants with no shared derivation.
    pub full_scale: [i32; 2],
    /// Rate at which the host calls `tick()`.
    pub tick_rate: TickRate,
    /// Seed for the noise generator.
    pub noise_seed: u32,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            full_scale: [MAX_LEVEL, CARRIER_FULL_SCALE],
            tick_rate: TickRate::default(),
            noise_seed: 0x21,
        }
    }
}

/// Control inputs sampled by the host for one tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct TickInputs {
    /// Physical trigger edges; a set flag retriggers that channel's envelope.
    pub trigger: [bool; 2],
    /// CV inputs in signal units, attenuating the channel's envelope peak.
    pub cv: [i32; 2],
}

/// The drum voice: a triangle-carrier bass channel and a sample-and-hold
/// noise snare channel, each gated by a one-shot decay envelope, cross-blended
/// into two outputs.
///
/// `tick()` runs once per controller tick and performs no allocation. Edits
/// (`nudge`, `load`) only mutate parameters and generator configuration; the
/// host guarantees they never overlap a tick.
#[derive(Debug)]
pub struct DrumVoice {
    config: VoiceConfig,
    params: Params,
    bass: PhaseOscillator,
    envelope: [DecayEnvelope; 2],
    noise: SampleHoldNoise,
    last_cv: [i32; 2],
}

impl DrumVoice {
    pub fn new() -> Self {
        Self {
            config: VoiceConfig::default(),
            params: Params::default(),
            bass: PhaseOscillator::new(Waveform::Triangle),
            envelope: [DecayEnvelope::new(), DecayEnvelope::new()],
            noise: SampleHoldNoise::new(),
            last_cv: [0; 2],
        }
    }

    /// Initialize with host configuration and default parameters.
    pub fn init(&mut self, config: VoiceConfig) {
        self.params = Params::default();
        self.bass.init(config.tick_rate);
        self.bass.set_scale(CARRIER_FULL_SCALE);
        self.noise.init(config.noise_seed);
        for (envelope, full_scale) in self.envelope.iter_mut().zip(config.full_scale) {
            envelope.init(config.tick_rate, full_scale);
        }
        self.last_cv = [0; 2];
        self.config = config;
        self.apply_all();
    }

    /// Restore defaults, keeping the host configuration.
    pub fn reset(&mut self) {
        self.init(self.config);
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Relative edit of one parameter, clamped into `0..=63`, then applied
    /// to the generator it configures.
    pub fn nudge(&mut self, param: Param, delta: i32) {
        self.params.nudge(param, delta);
        self.apply(param);
    }

    /// Current preset as the 30-bit packed word.
    pub fn save(&self) -> u32 {
        self.params.pack()
    }

    /// Replace all parameters from a packed preset word.
    pub fn load(&mut self, data: u32) {
        self.params = Params::unpack(data);
        self.apply_all();
    }

    /// Last read envelope level, e.g. for a host level display. Holds its
    /// value once the envelope has finished.
    pub fn level(&self, channel: usize) -> i32 {
        self.envelope[channel].level()
    }

    /// Produce one pair of output samples.
    pub fn tick(&mut self, inputs: &TickInputs) -> [i32; 2] {
        for ch in 0..2 {
            if inputs.cv[ch] != self.last_cv[ch] {
                self.last_cv[ch] = inputs.cv[ch];
                self.envelope[ch]
                    .set_peak(self.config.full_scale[ch] - inputs.cv[ch]);
            }
            if inputs.trigger[ch] {
                self.envelope[ch].trigger();
            }
        }

        // A finished envelope silences its channel; the carrier phase only
        // advances while the bass envelope is live.
        let mut bd_signal = 0;
        if !self.envelope[0].finished() {
            let level = self.envelope[0].next();
            bd_signal = proportion(level, MAX_LEVEL, self.bass.next());
        }

        self.noise.tick();
        let mut sd_signal = 0;
        if !self.envelope[1].finished() {
            let level = self.envelope[1].next();
            sd_signal = proportion(level, MAX_LEVEL, self.noise.value());
        }

        let blend = self.params.blend;
        let out_a = proportion((MAX_PARAM - blend) + MAX_PARAM, MAX_PARAM * 2, bd_signal)
            + proportion(blend, MAX_PARAM * 2, sd_signal);
        let out_b = proportion((MAX_PARAM - blend) + MAX_PARAM, MAX_PARAM * 2, sd_signal)
            + proportion(blend, MAX_PARAM * 2, bd_signal);
        [out_a, out_b]
    }

    fn apply(&mut self, param: Param) {
        match param {
            Param::Tone0 => self
                .bass
                .set_frequency_millihz(bass_frequency_millihz(self.params.tone[0])),
            Param::Decay0 => self.envelope[0].set_decay(self.params.decay[0]),
            Param::Tone1 => self.noise.set_tone(self.params.tone[1]),
            Param::Decay1 => self.envelope[1].set_decay(self.params.decay[1]),
            Param::Blend => (),
        }
    }

    fn apply_all(&mut self) {
        for param in Param::ALL {
            self.apply(param);
        }
    }
}

impl Default for DrumVoice {
    fn default() -> Self {
        Self::new()
    }
}
