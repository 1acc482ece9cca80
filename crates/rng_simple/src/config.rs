//! Factory configuration.
//!
//! [`FactoryConfig`] selects the construction dispatch strategy and bounds
//! the number of entropy draws attempted when self-seeding. It can be built
//! programmatically or read from environment variables:
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `RNG_DISPATCH` | `direct`, `dynamic` | `direct` |
//! | `RNG_ENTROPY_ATTEMPTS` | 1 to 16 | 3 |

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Environment variable selecting the dispatch strategy.
pub const ENV_DISPATCH: &str = "RNG_DISPATCH";

/// Environment variable bounding entropy attempts.
pub const ENV_ENTROPY_ATTEMPTS: &str = "RNG_ENTROPY_ATTEMPTS";

/// Default number of entropy draws before giving up.
pub const DEFAULT_ENTROPY_ATTEMPTS: u32 = 3;

/// Largest accepted entropy attempt bound.
pub const MAX_ENTROPY_ATTEMPTS: u32 = 16;

/// Configuration error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Unrecognised dispatch strategy name.
    #[error("Invalid dispatch strategy: {0}. Must be one of: direct, dynamic")]
    InvalidDispatch(String),

    /// Entropy attempt bound outside `1..=16`.
    #[error("Invalid entropy attempts: {0}. Must be between 1 and 16")]
    InvalidEntropyAttempts(u32),

    /// Environment variable present but unparsable.
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// How a constructor is located for a native seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(rename_all = "lowercase"))]
pub enum DispatchStrategy {
    /// Registry-table lookup by identifier.
    #[default]
    Direct,
    /// Lookup by runtime inspection of the seed's type.
    Dynamic,
}

impl FromStr for DispatchStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(DispatchStrategy::Direct),
            "dynamic" => Ok(DispatchStrategy::Dynamic),
            _ => Err(ConfigError::InvalidDispatch(s.to_string())),
        }
    }
}

impl fmt::Display for DispatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchStrategy::Direct => write!(f, "direct"),
            DispatchStrategy::Dynamic => write!(f, "dynamic"),
        }
    }
}

/// Configuration for [`ProviderFactory`](crate::ProviderFactory).
///
/// # Examples
///
/// ```rust
/// use rng_simple::{DispatchStrategy, FactoryConfig};
///
/// let config = FactoryConfig::builder()
///     .dispatch(DispatchStrategy::Dynamic)
///     .entropy_attempts(5)
///     .build()
///     .expect("valid config");
/// assert_eq!(config.entropy_attempts(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(try_from = "RawFactoryConfig")
)]
pub struct FactoryConfig {
    dispatch: DispatchStrategy,
    entropy_attempts: u32,
}

/// Unvalidated fields of a deserialised [`FactoryConfig`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawFactoryConfig {
    dispatch: DispatchStrategy,
    entropy_attempts: u32,
}

#[cfg(feature = "serde")]
impl Default for RawFactoryConfig {
    fn default() -> Self {
        let config = FactoryConfig::default();
        Self {
            dispatch: config.dispatch,
            entropy_attempts: config.entropy_attempts,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawFactoryConfig> for FactoryConfig {
    type Error = ConfigError;

    fn try_from(raw: RawFactoryConfig) -> Result<Self, Self::Error> {
        let config = Self {
            dispatch: raw.dispatch,
            entropy_attempts: raw.entropy_attempts,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            dispatch: DispatchStrategy::Direct,
            entropy_attempts: DEFAULT_ENTROPY_ATTEMPTS,
        }
    }
}

impl FactoryConfig {
    /// Creates a new builder.
    #[inline]
    pub fn builder() -> FactoryConfigBuilder {
        FactoryConfigBuilder::default()
    }

    /// Dispatch strategy.
    #[inline]
    pub fn dispatch(&self) -> DispatchStrategy {
        self.dispatch
    }

    /// Entropy attempt bound.
    #[inline]
    pub fn entropy_attempts(&self) -> u32 {
        self.entropy_attempts
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEntropyAttempts`] if the attempt bound is
    /// outside `1..=16`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_ENTROPY_ATTEMPTS).contains(&self.entropy_attempts) {
            return Err(ConfigError::InvalidEntropyAttempts(self.entropy_attempts));
        }
        Ok(())
    }

    /// Loads configuration from environment variables, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dispatch) = lookup(ENV_DISPATCH) {
            config.dispatch = dispatch.parse()?;
        }

        if let Some(attempts) = lookup(ENV_ENTROPY_ATTEMPTS) {
            config.entropy_attempts = attempts.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!(
                    "{} must be an integer, got '{}'",
                    ENV_ENTROPY_ATTEMPTS, attempts
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Builder for [`FactoryConfig`].
#[derive(Clone, Debug, Default)]
pub struct FactoryConfigBuilder {
    dispatch: DispatchStrategy,
    entropy_attempts: Option<u32>,
}

impl FactoryConfigBuilder {
    /// Sets the dispatch strategy.
    #[inline]
    pub fn dispatch(mut self, dispatch: DispatchStrategy) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Sets the entropy attempt bound.
    ///
    /// # Arguments
    ///
    /// * `attempts` - Number of draws in [1, 16]
    #[inline]
    pub fn entropy_attempts(mut self, attempts: u32) -> Self {
        self.entropy_attempts = Some(attempts);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the entropy attempt bound is out of range.
    pub fn build(self) -> Result<FactoryConfig, ConfigError> {
        let config = FactoryConfig {
            dispatch: self.dispatch,
            entropy_attempts: self.entropy_attempts.unwrap_or(DEFAULT_ENTROPY_ATTEMPTS),
        };
        config.validate()?;
        Ok(config)
    }
}
