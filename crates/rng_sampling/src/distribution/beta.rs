//! Beta distribution sampler.
//!
//! R. C. H. Cheng (1978). "Generating beta variates with nonintegral shape
//! parameters". Communications of the ACM 21(4). Algorithm BB is used when
//! both shapes exceed one, BC otherwise; both are provided by
//! [`rand_distr::Beta`].

use std::fmt;

use rand_distr::{Beta, Distribution};
use rng_core::UniformRandomProvider;

use super::ContinuousSampler;
use crate::adapter::ProviderRng;
use crate::error::SamplerError;

/// Beta deviates with shapes `alpha` and `beta`.
///
/// # Examples
///
/// ```rust
/// use rng_core::source64::SplitMix64;
/// use rng_sampling::{ChengBetaSampler, SamplerError};
///
/// let mut rng = SplitMix64::new(1);
/// assert!(matches!(
///     ChengBetaSampler::new(&mut rng, 0.0, 1.0),
///     Err(SamplerError::InvalidDistributionParameter { name: "alpha", .. })
/// ));
/// ```
pub struct ChengBetaSampler<'a, R: ?Sized> {
    rng: &'a mut R,
    alpha: f64,
    beta: f64,
    distribution: Beta<f64>,
}

impl<'a, R: UniformRandomProvider + ?Sized> ChengBetaSampler<'a, R> {
    /// Creates a sampler drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidDistributionParameter`] if either shape
    /// is not strictly positive (NaN included). Nothing is drawn from `rng`.
    pub fn new(rng: &'a mut R, alpha: f64, beta: f64) -> Result<Self, SamplerError> {
        if alpha.is_nan() || alpha <= 0.0 {
            return Err(SamplerError::invalid("alpha", format!("{} (must be > 0)", alpha)));
        }
        if beta.is_nan() || beta <= 0.0 {
            return Err(SamplerError::invalid("beta", format!("{} (must be > 0)", beta)));
        }
        let distribution = Beta::new(alpha, beta)
            .map_err(|e| SamplerError::invalid("alpha/beta", e.to_string()))?;
        Ok(Self {
            rng,
            alpha,
            beta,
            distribution,
        })
    }

    /// First shape parameter.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Second shape parameter.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl<R: UniformRandomProvider + ?Sized> ContinuousSampler for ChengBetaSampler<'_, R> {
    fn sample(&mut self) -> f64 {
        self.distribution.sample(&mut ProviderRng::new(&mut *self.rng))
    }
}

impl<R: ?Sized> fmt::Debug for ChengBetaSampler<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChengBetaSampler")
            .field("alpha", &self.alpha)
            .field("beta", &self.beta)
            .finish_non_exhaustive()
    }
}

impl<R: ?Sized> fmt::Display for ChengBetaSampler<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cheng Beta deviate [alpha={}, beta={}]", self.alpha, self.beta)
    }
}
