//! Marsaglia's KISS ("Keep It Simple Stupid") generator.
//!
//! Combines two multiply-with-carry generators, a 3-shift register and a
//! congruential generator (Marsaglia, 1999, sci.stat.math).

use crate::error::RngError;
use crate::provider::int_provider;
use crate::source32::fill_state;
use crate::state::{RandomProviderState, RestorableState, StateReader, StateWriter};

/// KISS generator with a 4-word seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KissRandom {
    z: u32,
    w: u32,
    jsr: u32,
    jcong: u32,
}

impl KissRandom {
    /// Algorithm tag stored in captured states.
    pub const NAME: &'static str = "KISSRandom";

    /// Number of 32-bit words in the native seed.
    pub const SEED_SIZE: usize = 4;

    /// Creates a generator from a seed of any length.
    pub fn new(seed: &[u32]) -> Self {
        let mut s = [0u32; Self::SEED_SIZE];
        fill_state(&mut s, seed);
        Self {
            z: s[0],
            w: s[1],
            jsr: s[2],
            jcong: s[3],
        }
    }

    /// Returns the next 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.z = mwc(36969, self.z);
        self.w = mwc(18000, self.w);
        let mwc = (self.z << 16).wrapping_add(self.w);

        self.jsr ^= self.jsr << 17;
        self.jsr ^= self.jsr >> 13;
        self.jsr ^= self.jsr << 5;

        self.jcong = self.jcong.wrapping_mul(69069).wrapping_add(1_234_567);

        (mwc ^ self.jcong).wrapping_add(self.jsr)
    }
}

#[inline]
fn mwc(multiplier: u32, previous: u32) -> u32 {
    multiplier
        .wrapping_mul(previous & 0xffff)
        .wrapping_add(previous >> 16)
}

int_provider!(KissRandom);

impl RestorableState for KissRandom {
    fn save_state(&self) -> RandomProviderState {
        StateWriter::new(Self::NAME)
            .u32s(&[self.z, self.w, self.jsr, self.jcong])
            .finish()
    }

    fn restore_state(&mut self, state: &RandomProviderState) -> Result<(), RngError> {
        let mut reader = StateReader::open(state, Self::NAME, 16)?;
        let mut s = [0u32; 4];
        reader.u32s(&mut s);
        *self = Self {
            z: s[0],
            w: s[1],
            jsr: s[2],
            jcong: s[3],
        };
        Ok(())
    }
}
