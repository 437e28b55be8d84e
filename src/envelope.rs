//! One-shot decay envelope, one per drum channel.

use crate::oscillator::{PhaseOscillator, Waveform};
use crate::params::MAX_PARAM;
use crate::utils::proportion;
use crate::TickRate;

/// Longest decay period in milliseconds (decay parameter at zero).
const PERIOD_MAX_MS: i32 = 1000;

/// Span subtracted from the maximum period as the decay parameter rises.
const PERIOD_SPAN_MS: i32 = 900;

/// Decay period in milliseconds for a decay parameter in `0..=63`.
/// Higher decay values give shorter periods, so the envelope falls faster.
pub fn decay_period_ms(decay: i32) -> i32 {
    PERIOD_MAX_MS - proportion(decay, MAX_PARAM, PERIOD_SPAN_MS)
}

/// Retriggerable falling ramp from a peak level down to zero.
///
/// While the ramp is live, `next()` is called once per tick and the level it
/// returns is cached. Once the ramp finishes, the cached level is held as-is
/// until the next trigger; it is not forced to zero.
#[derive(Debug)]
pub struct DecayEnvelope {
    ramp: PhaseOscillator,
    peak: i32,
    level: i32,
}

impl DecayEnvelope {
    pub fn new() -> Self {
        Self {
            ramp: PhaseOscillator::new(Waveform::Ramp),
            peak: 0,
            level: 0,
        }
    }

    pub fn init(&mut self, tick_rate: TickRate, peak: i32) {
        self.ramp.set_one_shot(true);
        self.ramp.init(tick_rate);
        self.set_peak(peak);
        self.level = 0;
    }

    pub fn set_decay(&mut self, decay: i32) {
        let period_ms = decay_period_ms(decay);
        self.ramp
            .set_frequency_millihz((1_000_000 / period_ms) as u32);
    }

    /// Reconfigure the peak amplitude, e.g. for CV attenuation. An in-flight
    /// ramp is rescaled, not restarted.
    pub fn set_peak(&mut self, peak: i32) {
        self.peak = peak;
        self.ramp.set_scale(peak);
    }

    pub fn peak(&self) -> i32 {
        self.peak
    }

    /// Reset to the peak level; the next read returns the peak exactly.
    pub fn trigger(&mut self) {
        self.ramp.start();
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.ramp.eoc()
    }

    /// Advance one tick and cache the level. Callers skip this once
    /// `finished()` reports true, freezing the level at its last value.
    #[inline]
    pub fn next(&mut self) -> i32 {
        self.level = self.ramp.next();
        self.level
    }

    #[inline]
    pub fn level(&self) -> i32 {
        self.level
    }
}

impl Default for DecayEnvelope {
    fn default() -> Self {
        Self::new()
    }
}
