//! Error types for provider construction.
//!
//! [`SourceError`] covers every failure of the construction API:
//! unknown identifiers, native seeds of the wrong shape, exhausted entropy
//! and invalid configuration. All are fatal to the call that raised them;
//! no partially built generator is ever returned.

use thiserror::Error;

use crate::config::ConfigError;
use crate::source::RandomSource;

/// Errors raised while describing or constructing a generator.
///
/// # Examples
/// ```
/// use rng_simple::SourceError;
///
/// let err = SourceError::UnknownAlgorithm("WELL_1_A".to_string());
/// assert_eq!(format!("{}", err), "Unknown algorithm: WELL_1_A");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Identifier outside the closed set of registered algorithms.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The native seed (or constructor arguments) do not fit the algorithm.
    ///
    /// Signals a caller contract violation; never retried.
    #[error("Cannot construct {algorithm}: {reason}")]
    ConstructionFailure {
        /// Algorithm being constructed.
        algorithm: RandomSource,
        /// Description of the mismatch.
        reason: String,
    },

    /// The entropy source failed on every permitted attempt.
    #[error("Entropy unavailable after {attempts} attempt(s): {reason}")]
    EntropyUnavailable {
        /// Number of attempts made.
        attempts: u32,
        /// Last failure reported by the entropy source.
        reason: String,
    },

    /// Invalid factory configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SourceError {
    pub(crate) fn construction(algorithm: RandomSource, reason: impl Into<String>) -> Self {
        SourceError::ConstructionFailure {
            algorithm,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SourceError::construction(RandomSource::Mt, "expected 624 elements, got 3");
        assert_eq!(
            err.to_string(),
            "Cannot construct MT: expected 624 elements, got 3"
        );

        let err = SourceError::EntropyUnavailable {
            attempts: 3,
            reason: "device busy".to_string(),
        };
        assert!(err.to_string().contains("after 3 attempt(s)"));

        let err: SourceError = ConfigError::InvalidEntropyAttempts(0).into();
        assert!(err.to_string().contains("entropy attempts"));
    }
}
