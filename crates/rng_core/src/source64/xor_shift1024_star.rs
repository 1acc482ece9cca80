//! XorShift1024*.
//!
//! Vigna, S. (2016). "An experimental exploration of Marsaglia's xorshift
//! generators, scrambled". ACM Transactions on Mathematical Software 42(4).

use crate::error::RngError;
use crate::provider::long_provider;
use crate::source64::{ensure_non_zero, fill_state};
use crate::state::{RandomProviderState, RestorableState, StateReader, StateWriter};

const SEED_SIZE: usize = 16;
const MULTIPLIER: u64 = 1_181_783_497_276_652_981;

/// XorShift1024* generator with a 16-word seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XorShift1024Star {
    state: [u64; SEED_SIZE],
    index: usize,
}

impl XorShift1024Star {
    /// Algorithm tag stored in captured states.
    pub const NAME: &'static str = "XorShift1024Star";

    /// Number of 64-bit words in the native seed.
    pub const SEED_SIZE: usize = SEED_SIZE;

    /// Creates a generator from a seed of any length.
    pub fn new(seed: &[u64]) -> Self {
        let mut state = [0u64; SEED_SIZE];
        fill_state(&mut state, seed);
        ensure_non_zero(&mut state);
        Self { state, index: 0 }
    }

    /// Returns the next 64-bit output.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[self.index];
        self.index = (self.index + 1) & (SEED_SIZE - 1);
        let mut s1 = self.state[self.index];
        s1 ^= s1 << 31;
        self.state[self.index] = s1 ^ s0 ^ (s1 >> 11) ^ (s0 >> 30);
        self.state[self.index].wrapping_mul(MULTIPLIER)
    }
}

long_provider!(XorShift1024Star);

impl RestorableState for XorShift1024Star {
    fn save_state(&self) -> RandomProviderState {
        StateWriter::new(Self::NAME)
            .u64s(&self.state)
            .u32(self.index as u32)
            .finish()
    }

    fn restore_state(&mut self, state: &RandomProviderState) -> Result<(), RngError> {
        let mut reader = StateReader::open(state, Self::NAME, SEED_SIZE * 8 + 4)?;
        let mut words = [0u64; SEED_SIZE];
        reader.u64s(&mut words);
        let index = reader.u32() as usize;
        if index >= SEED_SIZE {
            return Err(RngError::IncompatibleState {
                expected: Self::NAME,
                reason: format!("index {} out of range", index),
            });
        }
        self.state = words;
        self.index = index;
        Ok(())
    }
}
