//! Generators whose native output is a 32-bit value.
//!
//! Each generator exposes an inherent `next_u32` and implements
//! [`UniformRandomProvider`](crate::UniformRandomProvider) and
//! [`RestorableState`](crate::RestorableState). Array-seeded generators
//! accept a slice of any length: a short seed is expanded with
//! [`fill_state`], a long one is truncated.
//!
//! ## Module Structure
//!
//! - [`jdk`]: Linear congruential generator of `java.util.Random`
//! - [`well`]: WELL family (512a, 1024a, 19937a/c, 44497a/b)
//! - [`mersenne_twister`]: MT19937
//! - [`isaac`]: ISAAC
//! - [`kiss`]: Marsaglia's KISS
//! - [`mwc256`]: Multiply-with-carry with a lag of 256

pub mod isaac;
pub mod jdk;
pub mod kiss;
pub mod mersenne_twister;
pub mod mwc256;
pub mod well;

pub use isaac::IsaacRandom;
pub use jdk::JdkRandom;
pub use kiss::KissRandom;
pub use mersenne_twister::MersenneTwister;
pub use mwc256::MultiplyWithCarry256;
pub use well::{Well1024a, Well19937a, Well19937c, Well44497a, Well44497b, Well512a};

/// Copies `seed` into `state`, expanding a short seed.
///
/// Elements past the end of `seed` are derived from earlier elements with the
/// Knuth multiplier used by the MT19937 initialiser, so the result depends
/// only on `seed`.
pub fn fill_state(state: &mut [u32], seed: &[u32]) {
    let n = seed.len().min(state.len());
    state[..n].copy_from_slice(&seed[..n]);
    for i in n..state.len() {
        let v = state[i - n];
        state[i] = 1_812_433_253u32
            .wrapping_mul(v ^ (v >> 30))
            .wrapping_add(i as u32);
    }
}

/// Word expanded into a state that would otherwise be all zero.
pub(crate) const NON_ZERO_SEED: u32 = 0x9e37_79b9;

/// Replaces an all-zero `state` with the expansion of [`NON_ZERO_SEED`].
///
/// All zero is a fixed point of the linear recurrences that use this.
pub(crate) fn ensure_non_zero(state: &mut [u32]) {
    if state.iter().all(|&w| w == 0) {
        fill_state(state, &[NON_ZERO_SEED]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_state_copies_full_seed() {
        let mut state = [0u32; 3];
        fill_state(&mut state, &[7, 8, 9, 10]);
        assert_eq!(state, [7, 8, 9]);
    }

    #[test]
    fn test_fill_state_expands_short_seed() {
        let mut a = [0u32; 8];
        let mut b = [0u32; 8];
        fill_state(&mut a, &[1, 2]);
        fill_state(&mut b, &[1, 2]);
        assert_eq!(a, b);
        assert_eq!(&a[..2], &[1, 2]);
        assert_eq!(a[2], 1_812_433_253u32.wrapping_mul(1).wrapping_add(2));
    }

    #[test]
    fn test_fill_state_empty_seed() {
        let mut state = [0u32; 4];
        fill_state(&mut state, &[]);
        assert_eq!(state, [0, 1, 2, 3]);
    }

    #[test]
    fn test_ensure_non_zero_replaces_zero_state() {
        let mut state = [0u32; 5];
        ensure_non_zero(&mut state);
        let mut expected = [0u32; 5];
        fill_state(&mut expected, &[NON_ZERO_SEED]);
        assert_eq!(state, expected);
        assert_ne!(state, [0; 5]);
    }

    #[test]
    fn test_ensure_non_zero_keeps_other_states() {
        let mut state = [0, 0, 1, 0];
        ensure_non_zero(&mut state);
        assert_eq!(state, [0, 0, 1, 0]);
    }
}
