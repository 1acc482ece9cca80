//! The uniform draw capability shared by every generator.
//!
//! [`UniformRandomProvider`] is the only surface a consumer (for example a
//! distribution sampler) may depend on. Implementors supply the three native
//! operations; bounded draws, floating-point values and booleans are derived
//! from them by the provided methods.
//!
//! The free functions in this module are the building blocks generators use
//! to derive the non-native width from their native output.

use crate::error::RngError;

/// 2^-53, the spacing of doubles in [0, 1) built from 53 random bits.
const DOUBLE_MULTIPLIER: f64 = 1.0 / (1u64 << 53) as f64;

/// 2^-24, the spacing of floats in [0, 1) built from 24 random bits.
const FLOAT_MULTIPLIER: f32 = 1.0 / (1u32 << 24) as f32;

/// Uniform random draws.
///
/// Implementations are plain mutable state machines: no internal locking is
/// performed, so a single instance must not be shared between threads without
/// external synchronisation.
///
/// # Examples
///
/// ```rust
/// use rng_core::source32::KissRandom;
/// use rng_core::UniformRandomProvider;
///
/// let mut rng = KissRandom::new(&[1, 2, 3, 4]);
/// let mut buffer = [0u8; 7];
/// rng.fill_bytes(&mut buffer);
///
/// let x = rng.next_double();
/// assert!((0.0..1.0).contains(&x));
/// ```
pub trait UniformRandomProvider {
    /// Returns a uniformly distributed 32-bit value.
    fn next_int(&mut self) -> i32;

    /// Returns a uniformly distributed 64-bit value.
    fn next_long(&mut self) -> i64;

    /// Fills `bytes` with uniformly distributed bytes.
    ///
    /// Buffers of any length are accepted; an empty buffer is a no-op.
    fn fill_bytes(&mut self, bytes: &mut [u8]);

    /// Returns a value uniformly distributed in `[0, bound)`.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::InvalidBound`] if `bound <= 0`. No value is drawn
    /// in that case.
    fn next_int_bounded(&mut self, bound: i32) -> Result<i32, RngError> {
        if bound <= 0 {
            return Err(RngError::InvalidBound(bound.to_string()));
        }
        if bound & bound.wrapping_neg() == bound {
            // Power of two: take the high bits.
            let bits = (self.next_int() as u32 >> 1) as i64;
            return Ok(((bound as i64 * bits) >> 31) as i32);
        }
        loop {
            let bits = (self.next_int() as u32 >> 1) as i32;
            let value = bits % bound;
            // Reject the partial block at the top of the range.
            if (bits - value).checked_add(bound - 1).is_some() {
                return Ok(value);
            }
        }
    }

    /// Returns a value uniformly distributed in `[0, bound)`.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::InvalidBound`] if `bound <= 0`.
    fn next_long_bounded(&mut self, bound: i64) -> Result<i64, RngError> {
        if bound <= 0 {
            return Err(RngError::InvalidBound(bound.to_string()));
        }
        if bound & bound.wrapping_neg() == bound {
            return Ok((self.next_long() as u64 >> 1) as i64 & (bound - 1));
        }
        loop {
            let bits = (self.next_long() as u64 >> 1) as i64;
            let value = bits % bound;
            if (bits - value).checked_add(bound - 1).is_some() {
                return Ok(value);
            }
        }
    }

    /// Returns a value uniformly distributed in `[0, 1)` with 53 bits of precision.
    #[inline]
    fn next_double(&mut self) -> f64 {
        make_double(self.next_long())
    }

    /// Returns a value uniformly distributed in `[0, 1)` with 24 bits of precision.
    #[inline]
    fn next_float(&mut self) -> f32 {
        (self.next_int() as u32 >> 8) as f32 * FLOAT_MULTIPLIER
    }

    /// Returns a uniformly distributed boolean.
    #[inline]
    fn next_boolean(&mut self) -> bool {
        self.next_int() < 0
    }
}

impl<R: UniformRandomProvider + ?Sized> UniformRandomProvider for &mut R {
    #[inline]
    fn next_int(&mut self) -> i32 {
        (**self).next_int()
    }

    #[inline]
    fn next_long(&mut self) -> i64 {
        (**self).next_long()
    }

    #[inline]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        (**self).fill_bytes(bytes)
    }

    fn next_int_bounded(&mut self, bound: i32) -> Result<i32, RngError> {
        (**self).next_int_bounded(bound)
    }

    fn next_long_bounded(&mut self, bound: i64) -> Result<i64, RngError> {
        (**self).next_long_bounded(bound)
    }

    #[inline]
    fn next_double(&mut self) -> f64 {
        (**self).next_double()
    }

    #[inline]
    fn next_float(&mut self) -> f32 {
        (**self).next_float()
    }

    #[inline]
    fn next_boolean(&mut self) -> bool {
        (**self).next_boolean()
    }
}

impl<R: UniformRandomProvider + ?Sized> UniformRandomProvider for Box<R> {
    #[inline]
    fn next_int(&mut self) -> i32 {
        (**self).next_int()
    }

    #[inline]
    fn next_long(&mut self) -> i64 {
        (**self).next_long()
    }

    #[inline]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        (**self).fill_bytes(bytes)
    }

    fn next_int_bounded(&mut self, bound: i32) -> Result<i32, RngError> {
        (**self).next_int_bounded(bound)
    }

    fn next_long_bounded(&mut self, bound: i64) -> Result<i64, RngError> {
        (**self).next_long_bounded(bound)
    }

    #[inline]
    fn next_double(&mut self) -> f64 {
        (**self).next_double()
    }

    #[inline]
    fn next_float(&mut self) -> f32 {
        (**self).next_float()
    }

    #[inline]
    fn next_boolean(&mut self) -> bool {
        (**self).next_boolean()
    }
}

/// Builds a double in `[0, 1)` from the upper 53 bits of `v`.
#[inline]
pub fn make_double(v: i64) -> f64 {
    (v as u64 >> 11) as f64 * DOUBLE_MULTIPLIER
}

/// Combines two 32-bit outputs into one 64-bit value, `high` first.
#[inline]
pub fn make_long(high: u32, low: u32) -> i64 {
    (((high as u64) << 32) | low as u64) as i64
}

/// Fills `bytes` with little-endian chunks of successive 32-bit outputs.
///
/// A trailing partial chunk consumes one extra output and keeps its low bytes.
pub fn fill_bytes_via_u32<F: FnMut() -> u32>(bytes: &mut [u8], mut next: F) {
    let mut chunks = bytes.chunks_exact_mut(4);
    for chunk in &mut chunks {
        chunk.copy_from_slice(&next().to_le_bytes());
    }
    let tail = chunks.into_remainder();
    if !tail.is_empty() {
        let len = tail.len();
        tail.copy_from_slice(&next().to_le_bytes()[..len]);
    }
}

/// Fills `bytes` with little-endian chunks of successive 64-bit outputs.
pub fn fill_bytes_via_u64<F: FnMut() -> u64>(bytes: &mut [u8], mut next: F) {
    let mut chunks = bytes.chunks_exact_mut(8);
    for chunk in &mut chunks {
        chunk.copy_from_slice(&next().to_le_bytes());
    }
    let tail = chunks.into_remainder();
    if !tail.is_empty() {
        let len = tail.len();
        tail.copy_from_slice(&next().to_le_bytes()[..len]);
    }
}

/// Implements [`UniformRandomProvider`] for a generator whose native output
/// is a `u32` returned by its inherent `next_u32` method.
macro_rules! int_provider {
    ($ty:ty) => {
        impl $crate::UniformRandomProvider for $ty {
            #[inline]
            fn next_int(&mut self) -> i32 {
                self.next_u32() as i32
            }

            #[inline]
            fn next_long(&mut self) -> i64 {
                let high = self.next_u32();
                let low = self.next_u32();
                $crate::provider::make_long(high, low)
            }

            fn fill_bytes(&mut self, bytes: &mut [u8]) {
                $crate::provider::fill_bytes_via_u32(bytes, || self.next_u32())
            }
        }
    };
}

/// Implements [`UniformRandomProvider`] for a generator whose native output
/// is a `u64` returned by its inherent `next_u64` method.
macro_rules! long_provider {
    ($ty:ty) => {
        impl $crate::UniformRandomProvider for $ty {
            #[inline]
            fn next_int(&mut self) -> i32 {
                (self.next_u64() >> 32) as i32
            }

            #[inline]
            fn next_long(&mut self) -> i64 {
                self.next_u64() as i64
            }

            fn fill_bytes(&mut self, bytes: &mut [u8]) {
                $crate::provider::fill_bytes_via_u64(bytes, || self.next_u64())
            }
        }
    };
}

pub(crate) use int_provider;
pub(crate) use long_provider;

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of 32-bit outputs.
    struct Scripted {
        values: Vec<u32>,
        position: usize,
    }

    impl Scripted {
        fn new(values: &[u32]) -> Self {
            Self {
                values: values.to_vec(),
                position: 0,
            }
        }

        fn next_u32(&mut self) -> u32 {
            let v = self.values[self.position % self.values.len()];
            self.position += 1;
            v
        }
    }

    int_provider!(Scripted);

    #[test]
    fn test_make_long_orders_high_then_low() {
        assert_eq!(make_long(1, 2), (1i64 << 32) | 2);
        assert_eq!(make_long(u32::MAX, u32::MAX), -1);
    }

    #[test]
    fn test_make_double_range() {
        assert_eq!(make_double(0), 0.0);
        let max = make_double(-1);
        assert!(max < 1.0);
        assert!(max > 0.999_999);
    }

    #[test]
    fn test_long_from_two_ints() {
        let mut rng = Scripted::new(&[0xdead_beef, 0x0123_4567]);
        assert_eq!(rng.next_long(), 0xdead_beef_0123_4567_u64 as i64);
    }

    #[test]
    fn test_fill_bytes_little_endian_with_tail() {
        let mut rng = Scripted::new(&[0x0403_0201, 0x0807_0605]);
        let mut buffer = [0u8; 6];
        rng.fill_bytes(&mut buffer);
        assert_eq!(buffer, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_fill_bytes_empty_buffer_draws_nothing() {
        let mut rng = Scripted::new(&[7]);
        let mut empty: [u8; 0] = [];
        rng.fill_bytes(&mut empty);
        assert_eq!(rng.position, 0);
    }

    #[test]
    fn test_invalid_bound_leaves_generator_usable() {
        let mut rng = Scripted::new(&[5, 6]);
        assert_eq!(
            rng.next_int_bounded(0),
            Err(RngError::InvalidBound("0".to_string()))
        );
        assert!(rng.next_int_bounded(-4).is_err());
        assert!(rng.next_long_bounded(0).is_err());
        assert_eq!(rng.position, 0);
        assert_eq!(rng.next_int(), 5);
    }

    #[test]
    fn test_bounded_power_of_two_uses_high_bits() {
        // 0xC0000000 >>> 1 = 0x60000000; (4 * 0x60000000) >> 31 = 3
        let mut rng = Scripted::new(&[0xC000_0000]);
        assert_eq!(rng.next_int_bounded(4).unwrap(), 3);
    }

    #[test]
    fn test_boolean_from_sign_bit() {
        let mut rng = Scripted::new(&[0x8000_0000, 0x7fff_ffff]);
        assert!(rng.next_boolean());
        assert!(!rng.next_boolean());
    }

    #[test]
    fn test_forwarding_through_box_and_reference() {
        let mut boxed: Box<dyn UniformRandomProvider> = Box::new(Scripted::new(&[9, 10]));
        let by_ref: &mut dyn UniformRandomProvider = &mut boxed;
        assert_eq!(by_ref.next_int(), 9);
        assert_eq!(boxed.next_int(), 10);
    }
}
