//! MT19937, the 32-bit Mersenne Twister.
//!
//! Matsumoto, M. & Nishimura, T. (1998). "Mersenne Twister: A
//! 623-dimensionally equidistributed uniform pseudo-random number generator".
//! Seeding follows the reference `init_by_array` procedure.

use crate::error::RngError;
use crate::provider::int_provider;
use crate::state::{RandomProviderState, RestorableState, StateReader, StateWriter};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// 32-bit Mersenne Twister with a 624-word state.
///
/// # Examples
///
/// ```rust
/// use rng_core::source32::MersenneTwister;
///
/// let mut rng = MersenneTwister::new(&[0x123, 0x234, 0x345, 0x456]);
/// assert_eq!(rng.next_u32(), 1067595299);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MersenneTwister {
    mt: Box<[u32; N]>,
    mti: usize,
}

impl MersenneTwister {
    /// Algorithm tag stored in captured states.
    pub const NAME: &'static str = "MersenneTwister";

    /// Number of 32-bit words in the native seed.
    pub const SEED_SIZE: usize = N;

    /// Creates a generator with the reference `init_by_array` procedure.
    ///
    /// Every element of `key` is mixed into the state regardless of its
    /// length; an empty key behaves like `[0]`.
    pub fn new(key: &[u32]) -> Self {
        let key: &[u32] = if key.is_empty() { &[0] } else { key };
        let mut mt = Box::new([0u32; N]);
        init_genrand(&mut mt, 19_650_218);

        let mut i = 1;
        let mut j = 0;
        for _ in 0..N.max(key.len()) {
            let prev = mt[i - 1] ^ (mt[i - 1] >> 30);
            mt[i] = (mt[i] ^ prev.wrapping_mul(1_664_525))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= N {
                mt[0] = mt[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..N - 1 {
            let prev = mt[i - 1] ^ (mt[i - 1] >> 30);
            mt[i] = (mt[i] ^ prev.wrapping_mul(1_566_083_941)).wrapping_sub(i as u32);
            i += 1;
            if i >= N {
                mt[0] = mt[N - 1];
                i = 1;
            }
        }
        // MSB is 1, assuring a non-zero initial array.
        mt[0] = 0x8000_0000;

        Self { mt, mti: N }
    }

    /// Returns the next 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if self.mti >= N {
            self.twist();
        }
        let mut y = self.mt[self.mti];
        self.mti += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    fn twist(&mut self) {
        let mt = &mut self.mt;
        for k in 0..N {
            let y = (mt[k] & UPPER_MASK) | (mt[(k + 1) % N] & LOWER_MASK);
            let mag = if y & 1 == 0 { 0 } else { MATRIX_A };
            mt[k] = mt[(k + M) % N] ^ (y >> 1) ^ mag;
        }
        self.mti = 0;
    }
}

fn init_genrand(mt: &mut [u32; N], seed: u32) {
    mt[0] = seed;
    for i in 1..N {
        let prev = mt[i - 1] ^ (mt[i - 1] >> 30);
        mt[i] = 1_812_433_253u32.wrapping_mul(prev).wrapping_add(i as u32);
    }
}

int_provider!(MersenneTwister);

impl RestorableState for MersenneTwister {
    fn save_state(&self) -> RandomProviderState {
        StateWriter::new(Self::NAME)
            .u32s(&self.mt[..])
            .u32(self.mti as u32)
            .finish()
    }

    fn restore_state(&mut self, state: &RandomProviderState) -> Result<(), RngError> {
        let mut reader = StateReader::open(state, Self::NAME, (N + 1) * 4)?;
        let mut mt = Box::new([0u32; N]);
        reader.u32s(&mut mt[..]);
        let mti = reader.u32() as usize;
        if mti > N {
            return Err(RngError::IncompatibleState {
                expected: Self::NAME,
                reason: format!("position {} out of range", mti),
            });
        }
        self.mt = mt;
        self.mti = mti;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// First outputs of `mt19937ar.c` for `init_by_array({0x123, 0x234, 0x345, 0x456})`.
    #[test]
    fn test_reference_vector() {
        let mut rng = MersenneTwister::new(&[0x123, 0x234, 0x345, 0x456]);
        let expected: [u32; 5] = [1067595299, 955945823, 477289528, 4107218783, 4228976476];
        for &e in &expected {
            assert_eq!(rng.next_u32(), e);
        }
    }

    #[test]
    fn test_empty_key_is_usable() {
        let mut a = MersenneTwister::new(&[]);
        let mut b = MersenneTwister::new(&[0]);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_save_restore_across_twist() {
        let mut rng = MersenneTwister::new(&[5489]);
        for _ in 0..620 {
            rng.next_u32();
        }
        let state = rng.save_state();
        let expected: Vec<u32> = (0..10).map(|_| rng.next_u32()).collect();
        rng.restore_state(&state).unwrap();
        let replay: Vec<u32> = (0..10).map(|_| rng.next_u32()).collect();
        assert_eq!(expected, replay);
    }
}
