//! Fixed-point phase-accumulating oscillator for carriers and envelope ramps.

use crate::TickRate;

/// Waveform shapes available to the phase accumulator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// Bipolar triangle, `-scale..=scale`.
    #[default]
    Triangle,
    /// Falling ramp, `scale` down to zero over one cycle.
    Ramp,
}

/// Per-waveform configuration, resolved through a lookup table keyed by the
/// `Waveform` discriminant instead of an open-ended match at the call sites.
struct ShapeConfig {
    sample: fn(phase: u32, scale: i32) -> i32,
}

const SHAPES: [ShapeConfig; 2] = [
    ShapeConfig {
        sample: triangle_sample,
    },
    ShapeConfig {
        sample: ramp_sample,
    },
];

impl Waveform {
    #[inline]
    fn config(self) -> &'static ShapeConfig {
        &SHAPES[self as usize]
    }
}

fn triangle_sample(phase: u32, scale: i32) -> i32 {
    // Fold the phase so it rises over the first half cycle and falls back
    // over the second, spanning 0..=2^32.
    let folded = if phase < 1 << 31 {
        (phase as u64) << 1
    } else {
        ((1u64 << 32) - phase as u64) << 1
    };
    (((folded as i64 * scale as i64) >> 31) - scale as i64) as i32
}

fn ramp_sample(phase: u32, scale: i32) -> i32 {
    let remaining = (1i64 << 32) - phase as i64;
    ((remaining * scale as i64) >> 32) as i32
}

/// 32-bit phase accumulator with an optional one-shot mode.
///
/// `next()` returns the sample at the current phase and then advances, so the
/// first read after `start()` is the exact waveform origin. In one-shot mode
/// the phase pins at the end of the cycle and the end-of-cycle flag is
/// raised; a fresh one-shot starts in the completed state until `start()`.
#[derive(Debug, Default)]
pub struct PhaseOscillator {
    waveform: Waveform,
    phase: u32,
    increment: u32,
    scale: i32,
    one_shot: bool,
    eoc: bool,
    ticks_per_second: u32,
}

impl PhaseOscillator {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            waveform,
            ..Default::default()
        }
    }

    pub fn init(&mut self, tick_rate: TickRate) {
        self.phase = 0;
        self.increment = 0;
        self.eoc = self.one_shot;
        self.ticks_per_second = tick_rate.ticks_per_second;
    }

    /// Set the cycle frequency in milli-hertz.
    pub fn set_frequency_millihz(&mut self, millihz: u32) {
        self.increment =
            (((millihz as u64) << 32) / (1000 * self.ticks_per_second as u64)) as u32;
    }

    /// Set the peak amplitude in signal units. Takes effect on the next read,
    /// rescaling an in-flight cycle without restarting it.
    pub fn set_scale(&mut self, scale: i32) {
        self.scale = scale;
    }

    pub fn set_one_shot(&mut self, one_shot: bool) {
        self.one_shot = one_shot;
        if one_shot {
            // Idle until started.
            self.phase = u32::MAX;
            self.eoc = true;
        }
    }

    /// Restart the cycle from its origin.
    pub fn start(&mut self) {
        self.phase = 0;
        self.eoc = false;
    }

    #[inline]
    pub fn eoc(&self) -> bool {
        self.eoc
    }

    #[inline]
    pub fn next(&mut self) -> i32 {
        let value = (self.waveform.config().sample)(self.phase, self.scale);
        if self.one_shot {
            if !self.eoc {
                let (phase, wrapped) = self.phase.overflowing_add(self.increment);
                if wrapped {
                    self.phase = u32::MAX;
                    self.eoc = true;
                } else {
                    self.phase = phase;
                }
            }
        } else {
            self.phase = self.phase.wrapping_add(self.increment);
        }
        value
    }
}
