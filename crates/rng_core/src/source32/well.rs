//! WELL generators (Well Equidistributed Long-period Linear).
//!
//! Panneton, F., L'Ecuyer, P. & Matsumoto, M. (2006). "Improved Long-Period
//! Generators Based on Linear Recurrences Modulo 2". ACM Transactions on
//! Mathematical Software 32(1). The recurrences below include the errata
//! published for the original article.
//!
//! All six variants share a circular buffer of `r = ceil(k / 32)` words and
//! differ only in their transition function (and, for the `c`/`b` variants,
//! a final tempering step).

use crate::error::RngError;
use crate::provider::int_provider;
use crate::source32::{ensure_non_zero, fill_state};
use crate::state::{RandomProviderState, RestorableState, StateReader, StateWriter};

/// Number of 32-bit words needed for a state of `k` bits.
const fn block_count(k: usize) -> usize {
    (k + 31) / 32
}

/// Circular state buffer shared by all WELL variants.
#[derive(Clone, Debug, PartialEq, Eq)]
struct WellState {
    v: Box<[u32]>,
    index: usize,
}

impl WellState {
    fn new(k: usize, seed: &[u32]) -> Self {
        let mut v = vec![0u32; block_count(k)].into_boxed_slice();
        fill_state(&mut v, seed);
        ensure_non_zero(&mut v);
        Self { v, index: 0 }
    }

    /// Index `m` positions ahead of the current one.
    #[inline]
    fn ahead(&self, m: usize) -> usize {
        let i = self.index + m;
        if i >= self.v.len() {
            i - self.v.len()
        } else {
            i
        }
    }

    /// Index `n` positions behind the current one (`n` is 1 or 2).
    #[inline]
    fn behind(&self, n: usize) -> usize {
        (self.index + self.v.len() - n) % self.v.len()
    }

    fn save(&self, algorithm: &'static str) -> RandomProviderState {
        StateWriter::new(algorithm)
            .u32s(&self.v)
            .u32(self.index as u32)
            .finish()
    }

    fn restore(
        &mut self,
        algorithm: &'static str,
        state: &RandomProviderState,
    ) -> Result<(), RngError> {
        let mut reader = StateReader::open(state, algorithm, (self.v.len() + 1) * 4)?;
        let mut v = vec![0u32; self.v.len()];
        reader.u32s(&mut v);
        let index = reader.u32() as usize;
        if index >= v.len() {
            return Err(RngError::IncompatibleState {
                expected: algorithm,
                reason: format!("index {} out of range", index),
            });
        }
        self.v.copy_from_slice(&v);
        self.index = index;
        Ok(())
    }
}

/// Declares a WELL variant: the struct, its constructor and state capture.
macro_rules! well_generator {
    ($(#[$meta:meta])* $name:ident, $k:expr, $tag:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            state: WellState,
        }

        impl $name {
            /// Algorithm tag stored in captured states.
            pub const NAME: &'static str = $tag;

            /// Number of 32-bit words in the native seed.
            pub const SEED_SIZE: usize = block_count($k);

            /// Creates a generator from a seed of any length.
            pub fn new(seed: &[u32]) -> Self {
                Self {
                    state: WellState::new($k, seed),
                }
            }
        }

        int_provider!($name);

        impl RestorableState for $name {
            fn save_state(&self) -> RandomProviderState {
                self.state.save(Self::NAME)
            }

            fn restore_state(&mut self, state: &RandomProviderState) -> Result<(), RngError> {
                self.state.restore(Self::NAME, state)
            }
        }
    };
}

well_generator!(
    /// WELL512a: 512-bit state, period 2^512 - 1.
    Well512a,
    512,
    "Well512a"
);

well_generator!(
    /// WELL1024a: 1024-bit state, period 2^1024 - 1.
    Well1024a,
    1024,
    "Well1024a"
);

well_generator!(
    /// WELL19937a: 19937-bit state, period 2^19937 - 1.
    Well19937a,
    19937,
    "Well19937a"
);

well_generator!(
    /// WELL19937c: WELL19937a with Matsumoto-Kurita tempering.
    Well19937c,
    19937,
    "Well19937c"
);

well_generator!(
    /// WELL44497a: 44497-bit state, period 2^44497 - 1.
    Well44497a,
    44497,
    "Well44497a"
);

well_generator!(
    /// WELL44497b: WELL44497a with Matsumoto-Kurita tempering.
    Well44497b,
    44497,
    "Well44497b"
);

impl Well512a {
    /// Returns the next 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let s = &mut self.state;
        let rm1 = s.behind(1);
        let vi = s.v[s.index];
        let vi1 = s.v[s.ahead(13)];
        let vi2 = s.v[s.ahead(9)];
        let z0 = s.v[rm1];

        let z1 = (vi ^ (vi << 16)) ^ (vi1 ^ (vi1 << 15));
        let z2 = vi2 ^ (vi2 >> 11);
        let z3 = z1 ^ z2;
        let z4 = (z0 ^ (z0 << 2)) ^ (z1 ^ (z1 << 18)) ^ (z2 << 28) ^ (z3 ^ ((z3 << 5) & 0xda44_2d24));

        s.v[s.index] = z3;
        s.v[rm1] = z4;
        s.index = rm1;
        z4
    }
}

impl Well1024a {
    /// Returns the next 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let s = &mut self.state;
        let rm1 = s.behind(1);
        let v0 = s.v[s.index];
        let vm1 = s.v[s.ahead(3)];
        let vm2 = s.v[s.ahead(24)];
        let vm3 = s.v[s.ahead(10)];
        let z0 = s.v[rm1];

        let z1 = v0 ^ (vm1 ^ (vm1 >> 8));
        let z2 = (vm2 ^ (vm2 << 19)) ^ (vm3 ^ (vm3 << 14));
        let z3 = z1 ^ z2;
        let z4 = (z0 ^ (z0 << 11)) ^ (z1 ^ (z1 << 7)) ^ (z2 ^ (z2 << 13));

        s.v[s.index] = z3;
        s.v[rm1] = z4;
        s.index = rm1;
        z4
    }
}

/// Untempered WELL19937 transition shared by the `a` and `c` variants.
#[inline]
fn well19937_step(s: &mut WellState) -> u32 {
    let rm1 = s.behind(1);
    let rm2 = s.behind(2);
    let v0 = s.v[s.index];
    let vm1 = s.v[s.ahead(70)];
    let vm2 = s.v[s.ahead(179)];
    let vm3 = s.v[s.ahead(449)];

    let z0 = (0x8000_0000 & s.v[rm1]) ^ (0x7fff_ffff & s.v[rm2]);
    let z1 = (v0 ^ (v0 << 25)) ^ (vm1 ^ (vm1 >> 27));
    let z2 = (vm2 >> 9) ^ (vm3 ^ (vm3 >> 1));
    let z3 = z1 ^ z2;
    let z4 = z0 ^ (z1 ^ (z1 << 9)) ^ (z2 ^ (z2 << 21)) ^ (z3 ^ (z3 >> 21));

    s.v[s.index] = z3;
    s.v[rm1] = z4;
    s.v[rm2] &= 0x8000_0000;
    s.index = rm1;
    z4
}

impl Well19937a {
    /// Returns the next 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        well19937_step(&mut self.state)
    }
}

impl Well19937c {
    /// Returns the next 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut z4 = well19937_step(&mut self.state);
        z4 ^= (z4 << 7) & 0xe46e_1700;
        z4 ^= (z4 << 15) & 0x9b86_8000;
        z4
    }
}

/// Untempered WELL44497 transition shared by the `a` and `b` variants.
#[inline]
fn well44497_step(s: &mut WellState) -> u32 {
    let rm1 = s.behind(1);
    let rm2 = s.behind(2);
    let v0 = s.v[s.index];
    let vm1 = s.v[s.ahead(23)];
    let vm2 = s.v[s.ahead(481)];
    let vm3 = s.v[s.ahead(229)];

    let z0 = (0xffff_8000 & s.v[rm1]) ^ (0x0000_7fff & s.v[rm2]);
    let z1 = (v0 ^ (v0 << 24)) ^ (vm1 ^ (vm1 >> 30));
    let z2 = (vm2 ^ (vm2 << 10)) ^ (vm3 << 26);
    let z3 = z1 ^ z2;
    let z2_prime = ((z2 << 9) ^ (z2 >> 23)) & 0xfbff_ffff;
    let z2_second = if z2 & 0x0002_0000 != 0 {
        z2_prime ^ 0xb729_fcec
    } else {
        z2_prime
    };
    let z4 = z0 ^ (z1 ^ (z1 >> 20)) ^ z2_second ^ z3;

    s.v[s.index] = z3;
    s.v[rm1] = z4;
    s.v[rm2] &= 0xffff_8000;
    s.index = rm1;
    z4
}

impl Well44497a {
    /// Returns the next 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        well44497_step(&mut self.state)
    }
}

impl Well44497b {
    /// Returns the next 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut z4 = well44497_step(&mut self.state);
        z4 ^= (z4 << 7) & 0x93dd_1400;
        z4 ^= (z4 << 15) & 0xfa11_8000;
        z4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UniformRandomProvider;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(Well512a::SEED_SIZE, 16);
        assert_eq!(Well1024a::SEED_SIZE, 32);
        assert_eq!(Well19937a::SEED_SIZE, 624);
        assert_eq!(Well19937c::SEED_SIZE, 624);
        assert_eq!(Well44497a::SEED_SIZE, 1391);
        assert_eq!(Well44497b::SEED_SIZE, 1391);
    }

    #[test]
    fn test_zero_seed_is_not_stuck() {
        let mut r512 = Well512a::new(&[0; 16]);
        assert!((0..64).any(|_| r512.next_u32() != 0));
        let mut r44497 = Well44497a::new(&[0; 1391]);
        assert!((0..64).any(|_| r44497.next_u32() != 0));
        assert_eq!(Well1024a::new(&[0; 32]), Well1024a::new(&[0; 32]));
    }

    #[test]
    fn test_index_wraps_around_buffer() {
        let mut rng = Well512a::new(&[1, 2, 3]);
        // More draws than the buffer holds exercises every wrap-around branch.
        for _ in 0..100 {
            rng.next_u32();
            assert!(rng.state.index < Well512a::SEED_SIZE);
        }
    }

    #[test]
    fn test_tempered_variants_differ_from_untempered() {
        let seed: Vec<u32> = (0..624).collect();
        let mut a = Well19937a::new(&seed);
        let mut c = Well19937c::new(&seed);
        let va: Vec<i32> = (0..10).map(|_| a.next_int()).collect();
        let vc: Vec<i32> = (0..10).map(|_| c.next_int()).collect();
        assert_ne!(va, vc);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let seed: Vec<u32> = (100..1491).collect();
        let mut r1 = Well44497b::new(&seed);
        let mut r2 = Well44497b::new(&seed);
        for _ in 0..3000 {
            assert_eq!(r1.next_u32(), r2.next_u32());
        }
    }

    #[test]
    fn test_restore_rejects_other_variant() {
        let a = Well19937a::new(&[1]);
        let mut c = Well19937c::new(&[1]);
        let err = c.restore_state(&a.save_state()).unwrap_err();
        assert!(matches!(err, RngError::IncompatibleState { expected: "Well19937c", .. }));
    }

    #[test]
    fn test_save_restore_mid_sequence() {
        let mut rng = Well1024a::new(&[9, 8, 7]);
        for _ in 0..45 {
            rng.next_u32();
        }
        let state = rng.save_state();
        let expected: Vec<u32> = (0..50).map(|_| rng.next_u32()).collect();
        rng.restore_state(&state).unwrap();
        let replay: Vec<u32> = (0..50).map(|_| rng.next_u32()).collect();
        assert_eq!(expected, replay);
    }
}
