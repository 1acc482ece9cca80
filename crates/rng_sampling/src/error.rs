//! Sampler error types.

use thiserror::Error;

/// Errors raised when constructing a sampler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SamplerError {
    /// A distribution parameter is outside its domain.
    #[error("Invalid distribution parameter {name}: {value}")]
    InvalidDistributionParameter {
        /// Parameter name.
        name: &'static str,
        /// Rejected value, with the violated constraint.
        value: String,
    },
}

impl SamplerError {
    pub(crate) fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        SamplerError::InvalidDistributionParameter {
            name,
            value: value.into(),
        }
    }
}
