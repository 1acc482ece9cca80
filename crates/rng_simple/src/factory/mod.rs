//! Provider construction.
//!
//! [`ProviderFactory`] is the orchestration point of the crate:
//!
//! 1. look up the [`AlgorithmDescriptor`](crate::AlgorithmDescriptor) for the identifier
//! 2. normalise the caller's seed material with a [`SeedConverter`]
//! 3. hand the native seed to the algorithm's constructor, located either
//!    through the registry table ([`DispatchStrategy::Direct`]) or by runtime
//!    seed-type inspection ([`DispatchStrategy::Dynamic`], see [`dynamic`])
//!
//! Both dispatch paths end in the same constructor, so they yield generators
//! with identical output for identical native seeds.

pub(crate) mod constructors;
pub mod dynamic;

use std::any::Any;

use rng_core::RestorableUniformRandomProvider;
use tracing::debug;

use crate::config::{DispatchStrategy, FactoryConfig};
use crate::error::SourceError;
use crate::registry::describe;
use crate::seed::{EntropySource, NativeSeed, OsEntropy, SeedConverter, SeedMaterial};
use crate::source::RandomSource;

pub use dynamic::{construct_dynamic, resolve_constructor, DynamicConstructor};

/// A constructed generator: uniform draws plus state capture.
pub type Provider = Box<dyn RestorableUniformRandomProvider>;

/// Builds generators from identifiers and seed material.
///
/// A factory holds no mutable state and may be shared between threads; each
/// call returns a new, independently owned generator.
///
/// # Examples
///
/// ```rust
/// use rng_simple::{ProviderFactory, RandomSource};
/// use rng_core::UniformRandomProvider;
///
/// let factory = ProviderFactory::new();
/// let mut a = factory.create_with_seed(RandomSource::Jdk, 42u64).unwrap();
/// let mut b = factory.create_with_seed(RandomSource::Jdk, 42u64).unwrap();
/// assert_eq!(a.next_int(), b.next_int());
/// ```
#[derive(Clone, Debug)]
pub struct ProviderFactory<E = OsEntropy> {
    converter: SeedConverter<E>,
    dispatch: DispatchStrategy,
}

impl ProviderFactory<OsEntropy> {
    /// Creates a factory with the default configuration.
    pub fn new() -> Self {
        Self {
            converter: SeedConverter::new(),
            dispatch: DispatchStrategy::default(),
        }
    }

    /// Creates a factory from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Config`] if the configuration is invalid.
    pub fn with_config(config: &FactoryConfig) -> Result<Self, SourceError> {
        config.validate()?;
        Ok(Self {
            converter: SeedConverter::from_config(config),
            dispatch: config.dispatch(),
        })
    }
}

impl Default for ProviderFactory<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntropySource> ProviderFactory<E> {
    /// Creates a factory over a custom seed converter.
    pub fn with_converter(converter: SeedConverter<E>, dispatch: DispatchStrategy) -> Self {
        Self {
            converter,
            dispatch,
        }
    }

    /// The seed converter in use.
    pub fn converter(&self) -> &SeedConverter<E> {
        &self.converter
    }

    /// The dispatch strategy in use.
    pub fn dispatch(&self) -> DispatchStrategy {
        self.dispatch
    }

    /// Creates a self-seeded generator.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::EntropyUnavailable`] if the entropy source fails.
    pub fn create(&self, source: RandomSource) -> Result<Provider, SourceError> {
        self.create_with_args(source, SeedMaterial::Absent, &[])
    }

    /// Creates a generator from seed material.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::EntropyUnavailable`] if `seed` is absent and the
    /// entropy source fails.
    pub fn create_with_seed(
        &self,
        source: RandomSource,
        seed: impl Into<SeedMaterial>,
    ) -> Result<Provider, SourceError> {
        self.create_with_args(source, seed, &[])
    }

    /// Creates a generator from seed material and constructor arguments.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::ConstructionFailure`] if `args` are rejected,
    /// or [`SourceError::EntropyUnavailable`] if self-seeding fails.
    pub fn create_with_args(
        &self,
        source: RandomSource,
        seed: impl Into<SeedMaterial>,
        args: &[usize],
    ) -> Result<Provider, SourceError> {
        let descriptor = describe(source);
        let native = self.converter.normalize(seed.into(), descriptor)?;
        match self.dispatch {
            DispatchStrategy::Direct => self.construct_with_args(source, native, args),
            DispatchStrategy::Dynamic => self.construct_dynamic(source, native.into_any(), args),
        }
    }

    /// Builds a generator from an exact-shape native seed through the
    /// registry table.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::ConstructionFailure`] if the seed does not have
    /// the registered kind and length.
    pub fn construct(&self, source: RandomSource, seed: NativeSeed) -> Result<Provider, SourceError> {
        self.construct_with_args(source, seed, &[])
    }

    /// Like [`construct`](Self::construct) with constructor arguments.
    pub fn construct_with_args(
        &self,
        source: RandomSource,
        seed: NativeSeed,
        args: &[usize],
    ) -> Result<Provider, SourceError> {
        debug!(
            algorithm = source.name(),
            seed_kind = %seed.kind(),
            seed_len = seed.len(),
            args = args.len(),
            dispatch = "direct",
            "constructing provider"
        );
        describe(source).construct(seed, args)
    }

    /// Builds a generator, locating the constructor by the seed's runtime type.
    ///
    /// # Errors
    ///
    /// See [`dynamic::construct_dynamic`].
    pub fn construct_dynamic(
        &self,
        source: RandomSource,
        seed: Box<dyn Any + Send>,
        args: &[usize],
    ) -> Result<Provider, SourceError> {
        debug!(
            algorithm = source.name(),
            args = args.len(),
            dispatch = "dynamic",
            "constructing provider"
        );
        dynamic::construct_dynamic(source, seed, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rng_core::UniformRandomProvider;

    #[test]
    fn test_construct_rejects_wrong_length() {
        let factory = ProviderFactory::new();
        let result = factory.construct(RandomSource::Well512A, NativeSeed::Array32(vec![1; 15]));
        assert!(matches!(
            result,
            Err(SourceError::ConstructionFailure { algorithm: RandomSource::Well512A, .. })
        ));
    }

    #[test]
    fn test_construct_dynamic_rejects_wrong_length() {
        let factory = ProviderFactory::new();
        let result = factory.construct_dynamic(RandomSource::Kiss, Box::new(vec![1u32; 3]), &[]);
        assert!(matches!(result, Err(SourceError::ConstructionFailure { .. })));
    }

    #[test]
    fn test_dispatch_strategies_agree() {
        let direct = ProviderFactory::new();
        let dynamic = ProviderFactory::with_config(
            &FactoryConfig::builder()
                .dispatch(DispatchStrategy::Dynamic)
                .build()
                .unwrap(),
        )
        .unwrap();
        assert_eq!(dynamic.dispatch(), DispatchStrategy::Dynamic);

        let mut a = direct.create_with_seed(RandomSource::Mt, 123u64).unwrap();
        let mut b = dynamic.create_with_seed(RandomSource::Mt, 123u64).unwrap();
        for _ in 0..10 {
            assert_eq!(a.next_int(), b.next_int());
        }
    }

    #[test]
    fn test_create_with_args_selects_subcycles() {
        let factory = ProviderFactory::new();
        let mut a = factory
            .create_with_args(RandomSource::TwoCmresSelect, 5u64, &[2, 7])
            .unwrap();
        let mut b = factory
            .create_with_args(RandomSource::TwoCmresSelect, 5u64, &[7, 2])
            .unwrap();
        assert_ne!(
            (0..4).map(|_| a.next_long()).collect::<Vec<_>>(),
            (0..4).map(|_| b.next_long()).collect::<Vec<_>>()
        );

        assert!(matches!(
            factory.create_with_args(RandomSource::TwoCmresSelect, 5u64, &[2, 2]),
            Err(SourceError::ConstructionFailure { .. })
        ));
        assert!(matches!(
            factory.create_with_args(RandomSource::Mt, 5u64, &[1]),
            Err(SourceError::ConstructionFailure { .. })
        ));
    }
}
