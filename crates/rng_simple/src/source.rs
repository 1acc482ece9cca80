//! The closed set of algorithm identifiers.
//!
//! [`RandomSource`] names every registered generator. Its textual form
//! (`"WELL_44497_A"`, `"SPLIT_MIX_64"`, ...) round-trips through
//! [`Display`](std::fmt::Display) and [`FromStr`]; any other string is an
//! [`SourceError::UnknownAlgorithm`].

use std::fmt;
use std::str::FromStr;

use crate::error::SourceError;
use crate::factory::{Provider, ProviderFactory};
use crate::registry::{self, AlgorithmDescriptor};
use crate::seed::SeedMaterial;

/// Identifier of a registered generator algorithm.
///
/// # Examples
///
/// ```rust
/// use rng_simple::RandomSource;
///
/// let source: RandomSource = "WELL_44497_A".parse().unwrap();
/// assert_eq!(source, RandomSource::Well44497A);
/// assert_eq!(source.describe().native_seed_length(), 1391);
/// assert!("WELL_1_A".parse::<RandomSource>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RandomSource {
    /// `java.util.Random` linear congruential generator.
    Jdk,
    /// WELL512a.
    Well512A,
    /// WELL1024a.
    Well1024A,
    /// WELL19937a.
    Well19937A,
    /// WELL19937c.
    Well19937C,
    /// WELL44497a.
    Well44497A,
    /// WELL44497b.
    Well44497B,
    /// 32-bit Mersenne Twister.
    Mt,
    /// ISAAC.
    Isaac,
    /// SplitMix64.
    SplitMix64,
    /// XorShift1024*.
    XorShift1024S,
    /// Two CMRES subcycles 0 and 1.
    TwoCmres,
    /// Two CMRES subcycles selected by constructor arguments.
    TwoCmresSelect,
    /// 64-bit Mersenne Twister.
    Mt64,
    /// Multiply-with-carry, lag 256.
    Mwc256,
    /// Marsaglia's KISS.
    Kiss,
}

impl RandomSource {
    /// Every registered identifier, in registry order.
    pub const ALL: [RandomSource; 16] = [
        RandomSource::Jdk,
        RandomSource::Well512A,
        RandomSource::Well1024A,
        RandomSource::Well19937A,
        RandomSource::Well19937C,
        RandomSource::Well44497A,
        RandomSource::Well44497B,
        RandomSource::Mt,
        RandomSource::Isaac,
        RandomSource::SplitMix64,
        RandomSource::XorShift1024S,
        RandomSource::TwoCmres,
        RandomSource::TwoCmresSelect,
        RandomSource::Mt64,
        RandomSource::Mwc256,
        RandomSource::Kiss,
    ];

    /// Returns the canonical textual identifier.
    pub fn name(&self) -> &'static str {
        match self {
            RandomSource::Jdk => "JDK",
            RandomSource::Well512A => "WELL_512_A",
            RandomSource::Well1024A => "WELL_1024_A",
            RandomSource::Well19937A => "WELL_19937_A",
            RandomSource::Well19937C => "WELL_19937_C",
            RandomSource::Well44497A => "WELL_44497_A",
            RandomSource::Well44497B => "WELL_44497_B",
            RandomSource::Mt => "MT",
            RandomSource::Isaac => "ISAAC",
            RandomSource::SplitMix64 => "SPLIT_MIX_64",
            RandomSource::XorShift1024S => "XOR_SHIFT_1024_S",
            RandomSource::TwoCmres => "TWO_CMRES",
            RandomSource::TwoCmresSelect => "TWO_CMRES_SELECT",
            RandomSource::Mt64 => "MT_64",
            RandomSource::Mwc256 => "MWC_256",
            RandomSource::Kiss => "KISS",
        }
    }

    /// Returns the registry entry for this algorithm.
    #[inline]
    pub fn describe(self) -> &'static AlgorithmDescriptor {
        registry::describe(self)
    }

    /// Creates a self-seeded generator.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::EntropyUnavailable`] if the entropy source fails.
    pub fn create(self) -> Result<Provider, SourceError> {
        ProviderFactory::new().create(self)
    }

    /// Creates a generator from caller-supplied seed material.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::EntropyUnavailable`] if `seed` is absent and the
    /// entropy source fails.
    pub fn create_with_seed(self, seed: impl Into<SeedMaterial>) -> Result<Provider, SourceError> {
        ProviderFactory::new().create_with_seed(self, seed)
    }

    /// Creates a generator from seed material and constructor arguments.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::ConstructionFailure`] if `args` do not fit the
    /// algorithm.
    pub fn create_with_args(
        self,
        seed: impl Into<SeedMaterial>,
        args: &[usize],
    ) -> Result<Provider, SourceError> {
        ProviderFactory::new().create_with_args(self, seed, args)
    }
}

impl fmt::Display for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RandomSource {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RandomSource::ALL
            .iter()
            .copied()
            .find(|source| source.name() == s)
            .ok_or_else(|| SourceError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for source in RandomSource::ALL {
            assert_eq!(source.name().parse::<RandomSource>().unwrap(), source);
            assert_eq!(source.to_string(), source.name());
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "MT_128".parse::<RandomSource>(),
            Err(SourceError::UnknownAlgorithm("MT_128".to_string()))
        );
        // Identifiers are case-sensitive.
        assert!("mt".parse::<RandomSource>().is_err());
    }

    #[test]
    fn test_all_in_discriminant_order() {
        for (i, source) in RandomSource::ALL.iter().enumerate() {
            assert_eq!(*source as usize, i);
        }
    }
}
