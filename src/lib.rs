#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

pub mod envelope;
pub mod noise;
pub mod oscillator;
pub mod params;
pub mod utils;
pub mod voice;

/// Signal units per volt in the fixed-point representation.
pub const UNITS_PER_VOLT: i32 = 12 << 7;

/// Symmetric carrier and noise swing (±3 V).
pub const CARRIER_FULL_SCALE: i32 = 3 * UNITS_PER_VOLT;

/// Envelope level at full scale (5 V span). Also the denominator used when
/// an envelope level scales a carrier in the mixer.
pub const MAX_LEVEL: i32 = 5 * UNITS_PER_VOLT;

/// Tick rate context for the per-tick generators.
#[derive(Debug, Clone, Copy)]
pub struct TickRate {
    /// Controller invocations per second
    pub ticks_per_second: u32,
}

impl TickRate {
    /// Create a new tick rate context.
    pub fn new(ticks_per_second: u32) -> Self {
        Self { ticks_per_second }
    }
}

impl Default for TickRate {
    fn default() -> Self {
        // Timer interrupt rate of the original hardware.
        Self::new(16_666)
    }
}
