//! ISAAC: Indirection, Shift, Accumulate, Add and Count.
//!
//! Jenkins, R. J. (1996). "ISAAC". Fast Software Encryption. Output is
//! consumed from the end of each 256-word result block, as in the reference
//! implementation.

use crate::error::RngError;
use crate::provider::int_provider;
use crate::state::{RandomProviderState, RestorableState, StateReader, StateWriter};

const SIZE: usize = 256;
const HALF_SIZE: usize = SIZE / 2;
const MASK: u32 = ((SIZE - 1) << 2) as u32;
const GOLDEN_RATIO: u32 = 0x9e37_79b9;

/// ISAAC generator with a 256-word seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IsaacRandom {
    rsl: Box<[u32; SIZE]>,
    mem: Box<[u32; SIZE]>,
    /// Outputs remaining in `rsl`; consumed from the top down.
    count: usize,
    a: u32,
    b: u32,
    c: u32,
}

impl IsaacRandom {
    /// Algorithm tag stored in captured states.
    pub const NAME: &'static str = "ISAACRandom";

    /// Number of 32-bit words in the native seed.
    pub const SEED_SIZE: usize = SIZE;

    /// Creates a generator from a seed of any length.
    pub fn new(seed: &[u32]) -> Self {
        let mut rsl = Box::new([0u32; SIZE]);
        let n = seed.len().min(SIZE);
        rsl[..n].copy_from_slice(&seed[..n]);
        if n < SIZE {
            for j in n..SIZE {
                let k = rsl[j - n];
                rsl[j] = 0x6c07_8965u32
                    .wrapping_mul(k ^ (k >> 30))
                    .wrapping_add(j as u32);
            }
        }
        let mut rng = Self {
            rsl,
            mem: Box::new([0u32; SIZE]),
            count: 0,
            a: 0,
            b: 0,
            c: 0,
        };
        rng.init_state();
        rng
    }

    /// Returns the next 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if self.count == 0 {
            self.isaac();
            self.count = SIZE;
        }
        self.count -= 1;
        self.rsl[self.count]
    }

    fn init_state(&mut self) {
        self.a = 0;
        self.b = 0;
        self.c = 0;
        let mut arr = [GOLDEN_RATIO; 8];
        for _ in 0..4 {
            shuffle(&mut arr);
        }
        // Fill in mem with messy stuff.
        for j in (0..SIZE).step_by(8) {
            for (x, r) in arr.iter_mut().zip(&self.rsl[j..j + 8]) {
                *x = x.wrapping_add(*r);
            }
            shuffle(&mut arr);
            self.mem[j..j + 8].copy_from_slice(&arr);
        }
        // Second pass makes all of the seed affect all of mem.
        for j in (0..SIZE).step_by(8) {
            for (x, m) in arr.iter_mut().zip(&self.mem[j..j + 8]) {
                *x = x.wrapping_add(*m);
            }
            shuffle(&mut arr);
            self.mem[j..j + 8].copy_from_slice(&arr);
        }
        self.isaac();
        self.count = SIZE;
    }

    /// Generates the next block of 256 results.
    fn isaac(&mut self) {
        self.c = self.c.wrapping_add(1);
        self.b = self.b.wrapping_add(self.c);
        let mut i = 0;
        let mut j = HALF_SIZE;
        while i < HALF_SIZE {
            self.round(&mut i, &mut j);
        }
        j = 0;
        while j < HALF_SIZE {
            self.round(&mut i, &mut j);
        }
    }

    /// Four steps of the main loop with the shift schedule 13, 6, 2, 16.
    #[inline]
    fn round(&mut self, i: &mut usize, j: &mut usize) {
        self.a ^= self.a << 13;
        self.step(i, j);
        self.a ^= self.a >> 6;
        self.step(i, j);
        self.a ^= self.a << 2;
        self.step(i, j);
        self.a ^= self.a >> 16;
        self.step(i, j);
    }

    #[inline]
    fn step(&mut self, i: &mut usize, j: &mut usize) {
        let x = self.mem[*i];
        self.a = self.a.wrapping_add(self.mem[*j]);
        *j += 1;
        let y = self.mem[((x & MASK) >> 2) as usize]
            .wrapping_add(self.a)
            .wrapping_add(self.b);
        self.mem[*i] = y;
        self.b = self.mem[(((y >> 8) & MASK) >> 2) as usize].wrapping_add(x);
        self.rsl[*i] = self.b;
        *i += 1;
    }
}

fn shuffle(arr: &mut [u32; 8]) {
    arr[0] ^= arr[1] << 11;
    arr[3] = arr[3].wrapping_add(arr[0]);
    arr[1] = arr[1].wrapping_add(arr[2]);
    arr[1] ^= arr[2] >> 2;
    arr[4] = arr[4].wrapping_add(arr[1]);
    arr[2] = arr[2].wrapping_add(arr[3]);
    arr[2] ^= arr[3] << 8;
    arr[5] = arr[5].wrapping_add(arr[2]);
    arr[3] = arr[3].wrapping_add(arr[4]);
    arr[3] ^= arr[4] >> 16;
    arr[6] = arr[6].wrapping_add(arr[3]);
    arr[4] = arr[4].wrapping_add(arr[5]);
    arr[4] ^= arr[5] << 10;
    arr[7] = arr[7].wrapping_add(arr[4]);
    arr[5] = arr[5].wrapping_add(arr[6]);
    arr[5] ^= arr[6] >> 4;
    arr[0] = arr[0].wrapping_add(arr[5]);
    arr[6] = arr[6].wrapping_add(arr[7]);
    arr[6] ^= arr[7] << 8;
    arr[1] = arr[1].wrapping_add(arr[6]);
    arr[7] = arr[7].wrapping_add(arr[0]);
    arr[7] ^= arr[0] >> 9;
    arr[2] = arr[2].wrapping_add(arr[7]);
    arr[0] = arr[0].wrapping_add(arr[1]);
}

int_provider!(IsaacRandom);

impl RestorableState for IsaacRandom {
    fn save_state(&self) -> RandomProviderState {
        StateWriter::new(Self::NAME)
            .u32s(&self.rsl[..])
            .u32s(&self.mem[..])
            .u32(self.count as u32)
            .u32(self.a)
            .u32(self.b)
            .u32(self.c)
            .finish()
    }

    fn restore_state(&mut self, state: &RandomProviderState) -> Result<(), RngError> {
        let mut reader = StateReader::open(state, Self::NAME, (2 * SIZE + 4) * 4)?;
        let mut rsl = Box::new([0u32; SIZE]);
        let mut mem = Box::new([0u32; SIZE]);
        reader.u32s(&mut rsl[..]);
        reader.u32s(&mut mem[..]);
        let count = reader.u32() as usize;
        if count > SIZE {
            return Err(RngError::IncompatibleState {
                expected: Self::NAME,
                reason: format!("count {} out of range", count),
            });
        }
        self.rsl = rsl;
        self.mem = mem;
        self.count = count;
        self.a = reader.u32();
        self.b = reader.u32();
        self.c = reader.u32();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_seed_is_expanded_deterministically() {
        let mut r1 = IsaacRandom::new(&[1, 2, 3]);
        let mut r2 = IsaacRandom::new(&[1, 2, 3]);
        for _ in 0..600 {
            assert_eq!(r1.next_u32(), r2.next_u32());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut r1 = IsaacRandom::new(&[1]);
        let mut r2 = IsaacRandom::new(&[2]);
        let v1: Vec<u32> = (0..8).map(|_| r1.next_u32()).collect();
        let v2: Vec<u32> = (0..8).map(|_| r2.next_u32()).collect();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_save_restore_across_block_boundary() {
        let mut rng = IsaacRandom::new(&[42; 256]);
        for _ in 0..250 {
            rng.next_u32();
        }
        let state = rng.save_state();
        let expected: Vec<u32> = (0..20).map(|_| rng.next_u32()).collect();
        rng.restore_state(&state).unwrap();
        let replay: Vec<u32> = (0..20).map(|_| rng.next_u32()).collect();
        assert_eq!(expected, replay);
    }
}
