//! # rng_sampling: Distribution Samplers
//!
//! ## Layer 3 Role
//!
//! rng_sampling draws non-uniform deviates from any
//! [`UniformRandomProvider`](rng_core::UniformRandomProvider):
//! - Sampler capabilities: [`ContinuousSampler`], [`DiscreteSampler`] (`distribution`)
//! - Beta distribution (Cheng's algorithms BB and BC): [`ChengBetaSampler`]
//! - Zipf distribution (rejection-inversion): [`RejectionInversionZipfSampler`]
//! - Bridge to the `rand` ecosystem: [`ProviderRng`] (`adapter`)
//! - Error type: [`SamplerError`] (`error`)
//!
//! Samplers borrow their provider mutably for their whole lifetime. Parameters
//! are validated at construction; a rejected construction draws nothing.
//!
//! ## Usage Examples
//!
//! ```rust
//! use rng_core::source64::SplitMix64;
//! use rng_sampling::{ChengBetaSampler, ContinuousSampler};
//!
//! let mut rng = SplitMix64::new(7);
//! let mut beta = ChengBetaSampler::new(&mut rng, 2.0, 5.0).unwrap();
//! let x = beta.sample();
//! assert!((0.0..=1.0).contains(&x));
//! ```

#![warn(missing_docs)]

pub mod adapter;
pub mod distribution;
pub mod error;

pub use adapter::ProviderRng;
pub use distribution::{
    ChengBetaSampler, ContinuousSampler, DiscreteSampler, RejectionInversionZipfSampler,
};
pub use error::SamplerError;
