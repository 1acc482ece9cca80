//! Multiply-with-carry generator with a lag of 256.
//!
//! Marsaglia, G. (2003). "Random Number Generators". Journal of Modern
//! Applied Statistical Methods 2(1). The first seed word initialises the
//! carry, the remaining 256 words the lag table.

use crate::error::RngError;
use crate::provider::int_provider;
use crate::source32::{fill_state, NON_ZERO_SEED};
use crate::state::{RandomProviderState, RestorableState, StateReader, StateWriter};

const MULTIPLIER: u64 = 809_430_660;
const Q_SIZE: usize = 256;
const SEED_SIZE: usize = Q_SIZE + 1;

/// MWC-256 generator with a 257-word seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiplyWithCarry256 {
    state: Box<[u32; Q_SIZE]>,
    index: usize,
    carry: u32,
}

impl MultiplyWithCarry256 {
    /// Algorithm tag stored in captured states.
    pub const NAME: &'static str = "MultiplyWithCarry256";

    /// Number of 32-bit words in the native seed.
    pub const SEED_SIZE: usize = SEED_SIZE;

    /// Creates a generator from a seed of any length.
    pub fn new(seed: &[u32]) -> Self {
        let mut tmp = [0u32; SEED_SIZE];
        fill_state(&mut tmp, seed);
        if Self::carry_from(tmp[0]) == 0 && tmp[1..].iter().all(|&w| w == 0) {
            // Zero carry over a zero table never leaves zero.
            fill_state(&mut tmp, &[NON_ZERO_SEED]);
        }
        let mut state = Box::new([0u32; Q_SIZE]);
        state.copy_from_slice(&tmp[1..]);
        Self {
            state,
            index: Q_SIZE,
            carry: Self::carry_from(tmp[0]),
        }
    }

    /// The carry must stay below the multiplier.
    fn carry_from(word: u32) -> u32 {
        ((word as i32).unsigned_abs() as u64 % MULTIPLIER) as u32
    }

    /// Returns the next 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if self.index == Q_SIZE {
            self.index = 0;
        }
        let t = MULTIPLIER * self.state[self.index] as u64 + self.carry as u64;
        self.carry = (t >> 32) as u32;
        self.state[self.index] = t as u32;
        self.index += 1;
        t as u32
    }
}

int_provider!(MultiplyWithCarry256);

impl RestorableState for MultiplyWithCarry256 {
    fn save_state(&self) -> RandomProviderState {
        StateWriter::new(Self::NAME)
            .u32s(&self.state[..])
            .u32(self.index as u32)
            .u32(self.carry)
            .finish()
    }

    fn restore_state(&mut self, state: &RandomProviderState) -> Result<(), RngError> {
        let mut reader = StateReader::open(state, Self::NAME, (Q_SIZE + 2) * 4)?;
        let mut table = Box::new([0u32; Q_SIZE]);
        reader.u32s(&mut table[..]);
        let index = reader.u32() as usize;
        if index > Q_SIZE {
            return Err(RngError::IncompatibleState {
                expected: Self::NAME,
                reason: format!("index {} out of range", index),
            });
        }
        self.state = table;
        self.index = index;
        self.carry = reader.u32();
        Ok(())
    }
}
