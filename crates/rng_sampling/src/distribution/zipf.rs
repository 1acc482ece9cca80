//! Zipf distribution sampler.
//!
//! W. Hörmann and G. Derflinger (1996). "Rejection-inversion to generate
//! variates from monotone discrete distributions". ACM Transactions on
//! Modeling and Computer Simulation 6(3). The algorithm is provided by
//! [`rand_distr::Zipf`].

use std::fmt;

use rand_distr::{Distribution, Zipf};
use rng_core::UniformRandomProvider;

use super::DiscreteSampler;
use crate::adapter::ProviderRng;
use crate::error::SamplerError;

/// Zipf deviates in `[1, number_of_elements]` with probability proportional
/// to `k^-exponent`.
pub struct RejectionInversionZipfSampler<'a, R: ?Sized> {
    rng: &'a mut R,
    number_of_elements: i32,
    exponent: f64,
    distribution: Zipf<f64>,
}

impl<'a, R: UniformRandomProvider + ?Sized> RejectionInversionZipfSampler<'a, R> {
    /// Creates a sampler drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidDistributionParameter`] if
    /// `number_of_elements < 1` or `exponent` is not strictly positive.
    /// Nothing is drawn from `rng`.
    pub fn new(rng: &'a mut R, number_of_elements: i32, exponent: f64) -> Result<Self, SamplerError> {
        if number_of_elements < 1 {
            return Err(SamplerError::invalid(
                "number_of_elements",
                format!("{} (must be >= 1)", number_of_elements),
            ));
        }
        if exponent.is_nan() || exponent <= 0.0 {
            return Err(SamplerError::invalid(
                "exponent",
                format!("{} (must be > 0)", exponent),
            ));
        }
        let distribution = Zipf::new(number_of_elements as u64, exponent)
            .map_err(|e| SamplerError::invalid("exponent", e.to_string()))?;
        Ok(Self {
            rng,
            number_of_elements,
            exponent,
            distribution,
        })
    }

    /// Number of elements.
    #[inline]
    pub fn number_of_elements(&self) -> i32 {
        self.number_of_elements
    }

    /// Exponent.
    #[inline]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }
}

impl<R: UniformRandomProvider + ?Sized> DiscreteSampler for RejectionInversionZipfSampler<'_, R> {
    fn sample(&mut self) -> i32 {
        let k = self.distribution.sample(&mut ProviderRng::new(&mut *self.rng));
        (k as i32).clamp(1, self.number_of_elements)
    }
}

impl<R: ?Sized> fmt::Debug for RejectionInversionZipfSampler<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RejectionInversionZipfSampler")
            .field("number_of_elements", &self.number_of_elements)
            .field("exponent", &self.exponent)
            .finish_non_exhaustive()
    }
}

impl<R: ?Sized> fmt::Display for RejectionInversionZipfSampler<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rejection inversion Zipf deviate [n={}, s={}]",
            self.number_of_elements, self.exponent
        )
    }
}
