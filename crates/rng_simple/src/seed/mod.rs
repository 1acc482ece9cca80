//! Seed representations.
//!
//! - [`SeedMaterial`]: whatever the caller supplies (nothing, a scalar, bytes
//!   or an array of either width)
//! - [`NativeSeed`]: the exact shape an algorithm's constructor accepts
//! - [`converter`]: deterministic normalisation from the former to the latter
//! - [`entropy`]: the entropy source used when no seed is supplied

pub mod converter;
pub mod entropy;

use std::any::Any;

use crate::registry::NativeSeedKind;

pub use converter::SeedConverter;
pub use entropy::{EntropyError, EntropySource, OsEntropy};

/// A seed in an algorithm's native shape.
///
/// # Examples
///
/// ```rust
/// use rng_simple::NativeSeed;
///
/// let seed = NativeSeed::Array32(vec![1, 2, 3, 4]);
/// assert_eq!(seed.len(), 4);
/// assert_eq!(seed.truncated(1), NativeSeed::Array32(vec![1]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NativeSeed {
    /// A single 32-bit value.
    Scalar32(u32),
    /// A single 64-bit value.
    Scalar64(u64),
    /// An array of 32-bit values.
    Array32(Vec<u32>),
    /// An array of 64-bit values.
    Array64(Vec<u64>),
}

impl NativeSeed {
    /// Shape of this seed.
    pub fn kind(&self) -> NativeSeedKind {
        match self {
            NativeSeed::Scalar32(_) => NativeSeedKind::Scalar32,
            NativeSeed::Scalar64(_) => NativeSeedKind::Scalar64,
            NativeSeed::Array32(_) => NativeSeedKind::Array32,
            NativeSeed::Array64(_) => NativeSeedKind::Array64,
        }
    }

    /// Number of elements; scalars count as one.
    pub fn len(&self) -> usize {
        match self {
            NativeSeed::Scalar32(_) | NativeSeed::Scalar64(_) => 1,
            NativeSeed::Array32(v) => v.len(),
            NativeSeed::Array64(v) => v.len(),
        }
    }

    /// Whether this is an empty array.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the first `len` elements.
    ///
    /// Pure prefix: no element is altered. Scalars and arrays already no
    /// longer than `len` are returned unchanged.
    pub fn truncated(&self, len: usize) -> NativeSeed {
        match self {
            NativeSeed::Array32(v) => NativeSeed::Array32(v[..len.min(v.len())].to_vec()),
            NativeSeed::Array64(v) => NativeSeed::Array64(v[..len.min(v.len())].to_vec()),
            scalar => scalar.clone(),
        }
    }

    /// Moves the underlying value into a type-erased box.
    ///
    /// The box holds a `u32`, `u64`, `Vec<u32>` or `Vec<u64>`; this is the
    /// form consumed by [`ProviderFactory::construct_dynamic`](crate::ProviderFactory::construct_dynamic).
    pub fn into_any(self) -> Box<dyn Any + Send> {
        match self {
            NativeSeed::Scalar32(v) => Box::new(v),
            NativeSeed::Scalar64(v) => Box::new(v),
            NativeSeed::Array32(v) => Box::new(v),
            NativeSeed::Array64(v) => Box::new(v),
        }
    }

    /// Recovers a native seed from a type-erased value.
    ///
    /// Accepts the four element types produced by [`into_any`](Self::into_any)
    /// as well as a boxed `NativeSeed`. Returns the box unchanged on failure.
    pub fn from_any(value: Box<dyn Any + Send>) -> Result<NativeSeed, Box<dyn Any + Send>> {
        let value = match value.downcast::<NativeSeed>() {
            Ok(seed) => return Ok(*seed),
            Err(value) => value,
        };
        let value = match value.downcast::<u32>() {
            Ok(v) => return Ok(NativeSeed::Scalar32(*v)),
            Err(value) => value,
        };
        let value = match value.downcast::<u64>() {
            Ok(v) => return Ok(NativeSeed::Scalar64(*v)),
            Err(value) => value,
        };
        let value = match value.downcast::<Vec<u32>>() {
            Ok(v) => return Ok(NativeSeed::Array32(*v)),
            Err(value) => value,
        };
        match value.downcast::<Vec<u64>>() {
            Ok(v) => Ok(NativeSeed::Array64(*v)),
            Err(value) => Err(value),
        }
    }

    pub(crate) fn as_scalar32(&self) -> Option<u32> {
        match self {
            NativeSeed::Scalar32(v) => Some(*v),
            _ => None,
        }
    }

    pub(crate) fn as_scalar64(&self) -> Option<u64> {
        match self {
            NativeSeed::Scalar64(v) => Some(*v),
            _ => None,
        }
    }

    pub(crate) fn as_array32(&self) -> Option<&[u32]> {
        match self {
            NativeSeed::Array32(v) => Some(v),
            _ => None,
        }
    }

    pub(crate) fn as_array64(&self) -> Option<&[u64]> {
        match self {
            NativeSeed::Array64(v) => Some(v),
            _ => None,
        }
    }
}

/// Seed material supplied by a caller.
///
/// Any variant is accepted for any algorithm; [`SeedConverter`] turns it into
/// the algorithm's [`NativeSeed`].
///
/// # Examples
///
/// ```rust
/// use rng_simple::SeedMaterial;
///
/// assert_eq!(SeedMaterial::from(42u64), SeedMaterial::Scalar(42));
/// assert_eq!(SeedMaterial::from(vec![1u32, 2]), SeedMaterial::IntArray(vec![1, 2]));
/// assert_eq!(SeedMaterial::default(), SeedMaterial::Absent);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SeedMaterial {
    /// No seed: draw the native seed from the entropy source.
    #[default]
    Absent,
    /// A single integer.
    Scalar(u64),
    /// Raw bytes, read little-endian.
    Bytes(Vec<u8>),
    /// 32-bit values.
    IntArray(Vec<u32>),
    /// 64-bit values.
    LongArray(Vec<u64>),
}

impl From<u64> for SeedMaterial {
    fn from(v: u64) -> Self {
        SeedMaterial::Scalar(v)
    }
}

impl From<i64> for SeedMaterial {
    fn from(v: i64) -> Self {
        SeedMaterial::Scalar(v as u64)
    }
}

impl From<u32> for SeedMaterial {
    fn from(v: u32) -> Self {
        SeedMaterial::Scalar(u64::from(v))
    }
}

impl From<i32> for SeedMaterial {
    /// Sign-extends, as widening a signed integer does.
    fn from(v: i32) -> Self {
        SeedMaterial::Scalar(i64::from(v) as u64)
    }
}

impl From<Vec<u8>> for SeedMaterial {
    fn from(v: Vec<u8>) -> Self {
        SeedMaterial::Bytes(v)
    }
}

impl From<&[u8]> for SeedMaterial {
    fn from(v: &[u8]) -> Self {
        SeedMaterial::Bytes(v.to_vec())
    }
}

impl From<Vec<u32>> for SeedMaterial {
    fn from(v: Vec<u32>) -> Self {
        SeedMaterial::IntArray(v)
    }
}

impl From<&[u32]> for SeedMaterial {
    fn from(v: &[u32]) -> Self {
        SeedMaterial::IntArray(v.to_vec())
    }
}

impl From<Vec<u64>> for SeedMaterial {
    fn from(v: Vec<u64>) -> Self {
        SeedMaterial::LongArray(v)
    }
}

impl From<&[u64]> for SeedMaterial {
    fn from(v: &[u64]) -> Self {
        SeedMaterial::LongArray(v.to_vec())
    }
}

impl From<NativeSeed> for SeedMaterial {
    fn from(seed: NativeSeed) -> Self {
        match seed {
            NativeSeed::Scalar32(v) => SeedMaterial::Scalar(u64::from(v)),
            NativeSeed::Scalar64(v) => SeedMaterial::Scalar(v),
            NativeSeed::Array32(v) => SeedMaterial::IntArray(v),
            NativeSeed::Array64(v) => SeedMaterial::LongArray(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_is_prefix() {
        let seed = NativeSeed::Array64(vec![9, 8, 7]);
        assert_eq!(seed.truncated(2), NativeSeed::Array64(vec![9, 8]));
        assert_eq!(seed.truncated(10), seed);
        assert_eq!(seed.truncated(0), NativeSeed::Array64(vec![]));
        assert_eq!(NativeSeed::Scalar32(5).truncated(0), NativeSeed::Scalar32(5));
    }

    #[test]
    fn test_any_round_trip() {
        let seeds = [
            NativeSeed::Scalar32(1),
            NativeSeed::Scalar64(2),
            NativeSeed::Array32(vec![3, 4]),
            NativeSeed::Array64(vec![5]),
        ];
        for seed in seeds {
            let back = NativeSeed::from_any(seed.clone().into_any()).unwrap();
            assert_eq!(back, seed);
        }
        let boxed: Box<dyn Any + Send> = Box::new(NativeSeed::Scalar32(9));
        assert_eq!(NativeSeed::from_any(boxed).unwrap(), NativeSeed::Scalar32(9));
    }

    #[test]
    fn test_from_any_rejects_other_types() {
        let value: Box<dyn Any + Send> = Box::new("seed");
        assert!(NativeSeed::from_any(value).is_err());
        let value: Box<dyn Any + Send> = Box::new(7i32);
        assert!(NativeSeed::from_any(value).is_err());
    }

    #[test]
    fn test_signed_scalars_sign_extend() {
        assert_eq!(SeedMaterial::from(-1i32), SeedMaterial::Scalar(u64::MAX));
        assert_eq!(SeedMaterial::from(-1i64), SeedMaterial::Scalar(u64::MAX));
        assert_eq!(SeedMaterial::from(u32::MAX), SeedMaterial::Scalar(0xffff_ffff));
    }

    #[test]
    fn test_native_seed_into_material() {
        let material: SeedMaterial = NativeSeed::Array32(vec![1, 2]).into();
        assert_eq!(material, SeedMaterial::IntArray(vec![1, 2]));
    }
}
