//! Sampler capabilities and implementations.
//!
//! ## Module Structure
//!
//! - [`beta`]: Beta distribution via Cheng's algorithms
//! - [`zipf`]: Zipf distribution via rejection-inversion

pub mod beta;
pub mod zipf;

pub use beta::ChengBetaSampler;
pub use zipf::RejectionInversionZipfSampler;

/// Draws real-valued deviates.
pub trait ContinuousSampler {
    /// Returns the next deviate.
    fn sample(&mut self) -> f64;
}

/// Draws integer-valued deviates.
pub trait DiscreteSampler {
    /// Returns the next deviate.
    fn sample(&mut self) -> i32;
}
