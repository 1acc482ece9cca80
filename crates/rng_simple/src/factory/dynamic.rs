//! Constructor lookup by runtime seed type.
//!
//! The slower of the two dispatch paths: the seed arrives type-erased, its
//! concrete type is recovered by downcasting, and the registry is scanned
//! for an entry accepting that seed kind. [`resolve_constructor`] exposes the
//! lookup on its own so callers can cache the result across constructions.

use std::any::Any;

use super::Provider;
use crate::error::SourceError;
use crate::registry::{descriptors, AlgorithmDescriptor, NativeSeedKind};
use crate::seed::NativeSeed;
use crate::source::RandomSource;

/// A constructor located by seed kind.
#[derive(Clone, Copy, Debug)]
pub struct DynamicConstructor {
    descriptor: &'static AlgorithmDescriptor,
}

impl DynamicConstructor {
    /// Algorithm this constructor builds.
    pub fn source(&self) -> RandomSource {
        self.descriptor.source()
    }

    /// Seed kind this constructor accepts.
    pub fn seed_kind(&self) -> NativeSeedKind {
        self.descriptor.native_seed_kind()
    }

    /// Builds a generator from a type-erased native seed.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::ConstructionFailure`] if `seed` is not a native
    /// seed type, or does not have the exact kind and length.
    pub fn new_instance(
        &self,
        seed: Box<dyn Any + Send>,
        args: &[usize],
    ) -> Result<Provider, SourceError> {
        let seed = downcast_seed(self.source(), seed)?;
        self.descriptor.construct(seed, args)
    }
}

/// Finds the constructor of `source` accepting seeds of `kind`.
///
/// # Errors
///
/// Returns [`SourceError::ConstructionFailure`] if no registry entry matches.
pub fn resolve_constructor(
    source: RandomSource,
    kind: NativeSeedKind,
) -> Result<DynamicConstructor, SourceError> {
    descriptors()
        .iter()
        .find(|d| d.source() == source && d.native_seed_kind() == kind)
        .map(|descriptor| DynamicConstructor { descriptor })
        .ok_or_else(|| {
            SourceError::construction(source, format!("no constructor accepts a {} seed", kind))
        })
}

/// Builds a generator, locating the constructor from the seed's runtime type.
///
/// `seed` must hold a `u32`, `u64`, `Vec<u32>`, `Vec<u64>` or [`NativeSeed`].
///
/// # Errors
///
/// Returns [`SourceError::ConstructionFailure`] if the seed type or shape
/// does not fit `source`, or if `args` are rejected.
pub fn construct_dynamic(
    source: RandomSource,
    seed: Box<dyn Any + Send>,
    args: &[usize],
) -> Result<Provider, SourceError> {
    let seed = downcast_seed(source, seed)?;
    let constructor = resolve_constructor(source, seed.kind())?;
    constructor.descriptor.construct(seed, args)
}

fn downcast_seed(source: RandomSource, seed: Box<dyn Any + Send>) -> Result<NativeSeed, SourceError> {
    NativeSeed::from_any(seed)
        .map_err(|_| SourceError::construction(source, "seed is not of a native seed type"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rng_core::UniformRandomProvider;

    #[test]
    fn test_resolve_matches_registered_kind() {
        let constructor = resolve_constructor(RandomSource::Mt64, NativeSeedKind::Array64).unwrap();
        assert_eq!(constructor.source(), RandomSource::Mt64);
        assert_eq!(constructor.seed_kind(), NativeSeedKind::Array64);

        assert!(matches!(
            resolve_constructor(RandomSource::Mt64, NativeSeedKind::Array32),
            Err(SourceError::ConstructionFailure { .. })
        ));
    }

    #[test]
    fn test_construct_from_plain_values() {
        let mut rng = construct_dynamic(RandomSource::Jdk, Box::new(42u64), &[]).unwrap();
        assert_eq!(rng.next_int(), -1170105035);

        let rng = construct_dynamic(RandomSource::Kiss, Box::new(vec![1u32, 2, 3, 4]), &[]);
        assert!(rng.is_ok());
    }

    #[test]
    fn test_construct_rejects_foreign_types() {
        assert!(matches!(
            construct_dynamic(RandomSource::Jdk, Box::new(42i32), &[]),
            Err(SourceError::ConstructionFailure { .. })
        ));
        assert!(matches!(
            construct_dynamic(RandomSource::Jdk, Box::new(42u32), &[]),
            Err(SourceError::ConstructionFailure { .. })
        ));
    }

    #[test]
    fn test_cached_constructor_reused() {
        let constructor = resolve_constructor(RandomSource::SplitMix64, NativeSeedKind::Scalar64).unwrap();
        let mut a = constructor.new_instance(Box::new(7u64), &[]).unwrap();
        let mut b = constructor.new_instance(Box::new(7u64), &[]).unwrap();
        assert_eq!(a.next_long(), b.next_long());

        assert!(constructor.new_instance(Box::new(vec![7u64]), &[]).is_err());
    }
}
