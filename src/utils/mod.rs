//! Integer helpers shared by the synthesis modules.

pub mod random;

/// Scale `numerator` out of `denominator` into a range of size `out_of`.
///
/// Intermediate math is 64-bit so the expected operand ranges (denominators
/// and spans up to tens of thousands of signal units) cannot overflow. The
/// division truncates toward zero; the frequency and period mappings rely on
/// that truncation, so this must not round.
#[inline]
pub fn proportion(numerator: i32, denominator: i32, out_of: i32) -> i32 {
    (numerator as i64 * out_of as i64 / denominator as i64) as i32
}
