//! Fast seedable pseudo random number generator.

// Numerical Recipes LCG constants, as used on the original hardware.
const MULTIPLIER: u32 = 1664525;
const INCREMENT: u32 = 1013904223;

/// Linear congruential generator owned by the component that draws from it,
/// so tests can seed each instance deterministically.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    #[inline]
    pub fn next_word(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        self.state
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(0x21)
    }
}
