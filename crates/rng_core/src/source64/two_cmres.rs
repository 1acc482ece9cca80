//! Sum of two CMRES (Cycle Multiply, Rotate, Eliminate, Subtract) generators.
//!
//! O'Neill, M. E. "Two CMRES generators" proposal. Each subcycle applies
//! `s -> rotl(s * multiplier, rotation) - s`; the output is the sum of the
//! two subcycle states. Seeding walks each subcycle a seed-dependent number
//! of steps away from a point known to lie on the cycle.

use crate::error::RngError;
use crate::provider::long_provider;
use crate::state::{RandomProviderState, RestorableState, StateReader, StateWriter};

/// Added to the seed-derived walk lengths so neither walk is empty.
const SEED_GUARD: u32 = 0xd83f_ed5b;

/// A single CMRES subcycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cmres {
    multiplier: u64,
    rotation: u32,
    start: u64,
}

impl Cmres {
    #[inline]
    fn transform(&self, state: u64) -> u64 {
        state
            .wrapping_mul(self.multiplier)
            .rotate_left(self.rotation)
            .wrapping_sub(state)
    }
}

/// Subcycles with known long periods: (multiplier, rotation, start).
const SUBCYCLES: [Cmres; 14] = [
    Cmres { multiplier: 0xedce_4468_14d3_b3d9, rotation: 33, start: 0x13b5_72e7 },
    Cmres { multiplier: 0xc5b3_cf78_6c80_6df7, rotation: 33, start: 0x13c8_e18a },
    Cmres { multiplier: 0xdd91_bbb8_ab9e_0e65, rotation: 31, start: 0x06dd_03a6 },
    Cmres { multiplier: 0x7b69_342c_0790_221d, rotation: 31, start: 0x1646_bb8b },
    Cmres { multiplier: 0x0c72_c0d1_8614_c32b, rotation: 33, start: 0x0601_4a3d },
    Cmres { multiplier: 0xd8d9_8c13_bebe_26c9, rotation: 33, start: 0x014e_8475 },
    Cmres { multiplier: 0xcb03_9dc3_28bb_c40f, rotation: 31, start: 0x0086_84bd },
    Cmres { multiplier: 0x858c_5ef3_c021_ed2f, rotation: 32, start: 0x0dc8_d622 },
    Cmres { multiplier: 0x4c8b_e96b_fc23_b127, rotation: 33, start: 0x0b6b_20cc },
    Cmres { multiplier: 0x11ea_b77f_808c_f641, rotation: 32, start: 0x0653_4421 },
    Cmres { multiplier: 0xbc9b_d788_10fd_28fd, rotation: 31, start: 0x1d9b_a40d },
    Cmres { multiplier: 0x0f15_05c7_8068_8cb5, rotation: 33, start: 0x0b7b_7b67 },
    Cmres { multiplier: 0xadc1_74ba_bc20_53af, rotation: 31, start: 0x267f_4197 },
    Cmres { multiplier: 0x900b_6b82_b316_86d9, rotation: 31, start: 0x023c_6985 },
];

/// Sum of two CMRES subcycles, seeded with a single 32-bit value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwoCmres {
    x: Cmres,
    y: Cmres,
    xx: u64,
    yy: u64,
}

impl TwoCmres {
    /// Algorithm tag stored in captured states.
    pub const NAME: &'static str = "TwoCmres";

    /// Number of selectable subcycles.
    pub const SUBCYCLE_COUNT: usize = SUBCYCLES.len();

    /// Creates a generator over the default subcycles 0 and 1.
    pub fn new(seed: u32) -> Self {
        Self::build(seed, 0, 1)
    }

    /// Creates a generator over the subcycles `i` and `j`.
    ///
    /// Returns `None` if either index is not below
    /// [`SUBCYCLE_COUNT`](Self::SUBCYCLE_COUNT) or if `i == j`.
    pub fn with_subcycles(seed: u32, i: usize, j: usize) -> Option<Self> {
        if i >= SUBCYCLES.len() || j >= SUBCYCLES.len() || i == j {
            return None;
        }
        Some(Self::build(seed, i, j))
    }

    fn build(seed: u32, i: usize, j: usize) -> Self {
        let x = SUBCYCLES[i];
        let y = SUBCYCLES[j];
        // Two 16-bit walk lengths from the seed, each offset by part of the guard.
        let x_steps = (seed & 0xffff) + (SEED_GUARD & 0xff);
        let y_steps = (seed >> 16) + (SEED_GUARD >> 24);

        let mut xx = x.start;
        for _ in 0..x_steps {
            xx = x.transform(xx);
        }
        let mut yy = y.start;
        for _ in 0..y_steps {
            yy = y.transform(yy);
        }
        Self { x, y, xx, yy }
    }

    /// Returns the next 64-bit output.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.xx = self.x.transform(self.xx);
        self.yy = self.y.transform(self.yy);
        self.xx.wrapping_add(self.yy)
    }

    fn subcycle_index(cmres: &Cmres) -> usize {
        SUBCYCLES
            .iter()
            .position(|c| c == cmres)
            .unwrap_or_default()
    }
}

long_provider!(TwoCmres);

impl RestorableState for TwoCmres {
    fn save_state(&self) -> RandomProviderState {
        StateWriter::new(Self::NAME)
            .u32(Self::subcycle_index(&self.x) as u32)
            .u32(Self::subcycle_index(&self.y) as u32)
            .u64(self.xx)
            .u64(self.yy)
            .finish()
    }

    /// Restores the subcycle states. The snapshot must come from a generator
    /// over the same pair of subcycles.
    fn restore_state(&mut self, state: &RandomProviderState) -> Result<(), RngError> {
        let mut reader = StateReader::open(state, Self::NAME, 24)?;
        let i = reader.u32() as usize;
        let j = reader.u32() as usize;
        if SUBCYCLES.get(i) != Some(&self.x) || SUBCYCLES.get(j) != Some(&self.y) {
            return Err(RngError::IncompatibleState {
                expected: Self::NAME,
                reason: format!("state uses subcycles ({}, {})", i, j),
            });
        }
        self.xx = reader.u64();
        self.yy = reader.u64();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcycle_selection_validation() {
        assert!(TwoCmres::with_subcycles(1, 0, 0).is_none());
        assert!(TwoCmres::with_subcycles(1, 0, 14).is_none());
        assert!(TwoCmres::with_subcycles(1, 13, 2).is_some());
    }

    #[test]
    fn test_default_equals_subcycles_zero_one() {
        let mut a = TwoCmres::new(1234);
        let mut b = TwoCmres::with_subcycles(1234, 0, 1).unwrap();
        for _ in 0..10 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_restore_rejects_other_subcycles() {
        let a = TwoCmres::with_subcycles(5, 2, 3).unwrap();
        let mut b = TwoCmres::new(5);
        assert!(b.restore_state(&a.save_state()).is_err());
    }

    #[test]
    fn test_save_restore() {
        let mut rng = TwoCmres::with_subcycles(77, 4, 9).unwrap();
        let state = rng.save_state();
        let expected: Vec<u64> = (0..8).map(|_| rng.next_u64()).collect();
        rng.restore_state(&state).unwrap();
        let replay: Vec<u64> = (0..8).map(|_| rng.next_u64()).collect();
        assert_eq!(expected, replay);
    }
}
