//! Error types for uniform random providers.
//!
//! This module provides [`RngError`], raised by the bounded draw operations
//! and by state restoration. Both are fatal to the offending call only: the
//! generator is left untouched and remains usable afterwards.

use thiserror::Error;

/// Errors raised by a [`UniformRandomProvider`](crate::UniformRandomProvider)
/// or a [`RestorableState`](crate::RestorableState) implementation.
///
/// # Examples
/// ```
/// use rng_core::RngError;
///
/// let err = RngError::InvalidBound("-3".to_string());
/// assert_eq!(format!("{}", err), "Invalid bound -3: must be strictly positive");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RngError {
    /// A bounded draw was requested with a non-positive bound.
    #[error("Invalid bound {0}: must be strictly positive")]
    InvalidBound(String),

    /// A captured state does not belong to the algorithm it was applied to.
    #[error("Incompatible state for {expected}: {reason}")]
    IncompatibleState {
        /// Algorithm tag of the generator being restored.
        expected: &'static str,
        /// Description of the mismatch.
        reason: String,
    },
}

impl RngError {
    /// Creates an [`RngError::IncompatibleState`] for the given generator.
    pub(crate) fn incompatible(expected: &'static str, reason: impl Into<String>) -> Self {
        RngError::IncompatibleState {
            expected,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RngError::InvalidBound("0".to_string());
        assert!(err.to_string().contains("Invalid bound 0"));

        let err = RngError::incompatible("MersenneTwister", "tag KISSRandom");
        assert_eq!(
            err.to_string(),
            "Incompatible state for MersenneTwister: tag KISSRandom"
        );
    }
}
