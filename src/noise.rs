//! Sample-and-hold noise source for the snare voice.

use crate::params::MAX_PARAM;
use crate::utils::random::Lcg;
use crate::CARRIER_FULL_SCALE;

/// Noise that is redrawn every few ticks and held in between.
///
/// The tone parameter sets the hold length, not a filter: high tone values
/// redraw nearly every tick (bright), low values hold each sample longer
/// (dark). Holding the last value between redraws is the intended behavior.
#[derive(Debug)]
pub struct SampleHoldNoise {
    countdown: i32,
    hold_ticks: i32,
    value: i32,
    rng: Lcg,
}

impl SampleHoldNoise {
    pub fn new() -> Self {
        Self {
            countdown: 1,
            hold_ticks: 1,
            value: 0,
            rng: Lcg::default(),
        }
    }

    pub fn init(&mut self, seed: u32) {
        self.countdown = 1;
        self.hold_ticks = 1;
        self.value = 0;
        self.rng = Lcg::new(seed);
    }

    /// Set the hold length from the tone parameter in `0..=63`. Tone 63 gives
    /// a one-tick hold (fastest regeneration). Applies from the next redraw.
    pub fn set_tone(&mut self, tone: i32) {
        self.hold_ticks = MAX_PARAM - tone + 1;
    }

    #[inline]
    pub fn tick(&mut self) {
        self.countdown -= 1;
        if self.countdown == 0 {
            let span = (2 * CARRIER_FULL_SCALE) as u32;
            self.value = (self.rng.next_word() % span) as i32 - CARRIER_FULL_SCALE;
            self.countdown = self.hold_ticks;
        }
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Default for SampleHoldNoise {
    fn default() -> Self {
        Self::new()
    }
}
