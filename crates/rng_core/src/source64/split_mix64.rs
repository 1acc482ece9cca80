//! SplitMix64.
//!
//! Steele, G. L., Lea, D. & Flood, C. H. (2014). "Fast Splittable
//! Pseudorandom Number Generators". A Weyl sequence passed through the
//! Stafford "Mix13" finaliser.

use crate::error::RngError;
use crate::provider::long_provider;
use crate::state::{RandomProviderState, RestorableState, StateReader, StateWriter};

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// SplitMix64 generator seeded with a single 64-bit value.
///
/// # Examples
///
/// ```rust
/// use rng_core::source64::SplitMix64;
///
/// let mut rng = SplitMix64::new(0);
/// assert_eq!(rng.next_u64(), 0xe220_a839_7b1d_cdaf);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Algorithm tag stored in captured states.
    pub const NAME: &'static str = "SplitMix64";

    /// Creates a generator from a 64-bit seed.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Returns the next 64-bit output.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        Self::mix(self.state)
    }

    /// Stafford's "Mix13" 64-bit finaliser.
    ///
    /// A bijection with good avalanche, usable on its own to hash seed words.
    #[inline]
    pub fn mix(z: u64) -> u64 {
        let z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        let z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

long_provider!(SplitMix64);

impl RestorableState for SplitMix64 {
    fn save_state(&self) -> RandomProviderState {
        StateWriter::new(Self::NAME).u64(self.state).finish()
    }

    fn restore_state(&mut self, state: &RandomProviderState) -> Result<(), RngError> {
        let mut reader = StateReader::open(state, Self::NAME, 8)?;
        self.state = reader.u64();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UniformRandomProvider;

    #[test]
    fn test_reference_vector_seed_zero() {
        let mut rng = SplitMix64::new(0);
        assert_eq!(rng.next_u64(), 0xe220_a839_7b1d_cdaf);
        assert_eq!(rng.next_u64(), 0x6e78_9e6a_a1b9_65f4);
    }

    #[test]
    fn test_next_int_is_high_half() {
        let mut a = SplitMix64::new(99);
        let mut b = SplitMix64::new(99);
        assert_eq!(a.next_int(), (b.next_u64() >> 32) as i32);
    }

    #[test]
    fn test_restore_rejects_foreign_state() {
        let mut rng = SplitMix64::new(1);
        let foreign = StateWriter::new("Other").u64(5).finish();
        assert!(rng.restore_state(&foreign).is_err());
        // Unchanged after the failed restore.
        assert_eq!(rng, SplitMix64::new(1));
    }
}
