//! # rng_simple: Algorithm Registry and Provider Construction
//!
//! ## Layer 2 Role
//!
//! rng_simple turns an algorithm identifier and arbitrary seed material into
//! a ready-to-use generator from `rng_core`:
//! - Closed set of identifiers: [`RandomSource`] (`source`)
//! - Static registry of native seed shapes: [`AlgorithmDescriptor`] (`registry`)
//! - Seed normalisation and self-seeding: [`SeedConverter`] (`seed`)
//! - Direct and dynamic constructor dispatch: [`ProviderFactory`] (`factory`)
//! - Factory configuration: [`FactoryConfig`] (`config`)
//! - Error type: [`SourceError`] (`error`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use rng_simple::{create_with_seed, describe, RandomSource};
//! use rng_core::{RestorableState, UniformRandomProvider};
//!
//! let mut rng = create_with_seed(RandomSource::Well19937C, 12345u64).unwrap();
//! let state = rng.save_state();
//! let first = rng.next_double();
//! rng.restore_state(&state).unwrap();
//! assert_eq!(rng.next_double(), first);
//!
//! assert_eq!(describe(RandomSource::Well19937C).native_seed_length(), 624);
//! ```
//!
//! ## Logging
//!
//! Construction emits `tracing` events (`debug` per construction, `trace`
//! per normalisation, `warn`/`error` on entropy failures). The library never
//! installs a subscriber.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable deserialisation of [`FactoryConfig`] and serialisation
//!   of captured generator states

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod factory;
pub mod registry;
pub mod seed;
pub mod source;

pub use config::{ConfigError, DispatchStrategy, FactoryConfig, FactoryConfigBuilder};
pub use error::SourceError;
pub use factory::{Provider, ProviderFactory};
pub use registry::{describe, describe_by_name, AlgorithmDescriptor, NativeSeedKind};
pub use seed::{EntropyError, EntropySource, NativeSeed, OsEntropy, SeedConverter, SeedMaterial};
pub use source::RandomSource;

/// Creates a self-seeded generator with the default factory.
///
/// # Errors
///
/// Returns [`SourceError::EntropyUnavailable`] if the entropy source fails.
pub fn create(source: RandomSource) -> Result<Provider, SourceError> {
    ProviderFactory::new().create(source)
}

/// Creates a generator from seed material with the default factory.
///
/// # Errors
///
/// Returns [`SourceError::EntropyUnavailable`] if `seed` is absent and the
/// entropy source fails.
pub fn create_with_seed(
    source: RandomSource,
    seed: impl Into<SeedMaterial>,
) -> Result<Provider, SourceError> {
    ProviderFactory::new().create_with_seed(source, seed)
}

/// Creates a generator from seed material and constructor arguments with the
/// default factory.
///
/// # Errors
///
/// Returns [`SourceError::ConstructionFailure`] if `args` are rejected.
pub fn create_with_args(
    source: RandomSource,
    seed: impl Into<SeedMaterial>,
    args: &[usize],
) -> Result<Provider, SourceError> {
    ProviderFactory::new().create_with_args(source, seed, args)
}
