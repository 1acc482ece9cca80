//! The 48-bit linear congruential generator of `java.util.Random`.

use crate::error::RngError;
use crate::provider::int_provider;
use crate::state::{RandomProviderState, RestorableState, StateReader, StateWriter};

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// Linear congruential generator with a 48-bit state.
///
/// Seeded with a single 64-bit value and scrambled exactly as the JDK does,
/// so `JdkRandom::new(s)` reproduces `new java.util.Random(s).nextInt()`.
///
/// # Examples
///
/// ```rust
/// use rng_core::source32::JdkRandom;
/// use rng_core::UniformRandomProvider;
///
/// let mut rng = JdkRandom::new(42);
/// assert_eq!(rng.next_int(), -1170105035);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JdkRandom {
    seed: u64,
}

impl JdkRandom {
    /// Algorithm tag stored in captured states.
    pub const NAME: &'static str = "JDKRandom";

    /// Creates a generator from a 64-bit seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed: (seed ^ MULTIPLIER) & MASK,
        }
    }

    /// Returns the next 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        (self.seed >> 16) as u32
    }
}

int_provider!(JdkRandom);

impl RestorableState for JdkRandom {
    fn save_state(&self) -> RandomProviderState {
        StateWriter::new(Self::NAME).u64(self.seed).finish()
    }

    fn restore_state(&mut self, state: &RandomProviderState) -> Result<(), RngError> {
        let mut reader = StateReader::open(state, Self::NAME, 8)?;
        self.seed = reader.u64() & MASK;
        Ok(())
    }
}
