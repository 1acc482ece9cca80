//! Generators whose native output is a 64-bit value.
//!
//! Each generator exposes an inherent `next_u64` and implements
//! [`UniformRandomProvider`](crate::UniformRandomProvider) and
//! [`RestorableState`](crate::RestorableState).
//!
//! ## Module Structure
//!
//! - [`split_mix64`]: SplitMix64, also the auxiliary seed expander used by `rng_simple`
//! - [`xor_shift1024_star`]: XorShift1024*
//! - [`two_cmres`]: Sum of two CMRES subcycle generators
//! - [`mersenne_twister64`]: MT19937-64

pub mod mersenne_twister64;
pub mod split_mix64;
pub mod two_cmres;
pub mod xor_shift1024_star;

pub use mersenne_twister64::MersenneTwister64;
pub use split_mix64::SplitMix64;
pub use two_cmres::TwoCmres;
pub use xor_shift1024_star::XorShift1024Star;

/// Copies `seed` into `state`, expanding a short seed.
///
/// The 64-bit counterpart of [`crate::source32::fill_state`].
pub fn fill_state(state: &mut [u64], seed: &[u64]) {
    let n = seed.len().min(state.len());
    state[..n].copy_from_slice(&seed[..n]);
    for i in n..state.len() {
        let v = state[i - n];
        state[i] = 1_812_433_253u64
            .wrapping_mul(v ^ (v >> 30))
            .wrapping_add(i as u64);
    }
}

/// Replaces an all-zero `state` with the expansion of a fixed non-zero word.
///
/// The 64-bit counterpart of [`crate::source32::ensure_non_zero`].
pub(crate) fn ensure_non_zero(state: &mut [u64]) {
    if state.iter().all(|&w| w == 0) {
        fill_state(state, &[0x9e37_79b9_7f4a_7c15]);
    }
}
