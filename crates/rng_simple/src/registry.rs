//! Static algorithm registry.
//!
//! One [`AlgorithmDescriptor`] per [`RandomSource`], indexed by the enum
//! discriminant, so [`describe`] is a constant-time table read. The table is
//! immutable and safe to read from any thread.

use std::fmt;

use crate::error::SourceError;
use crate::factory::constructors::{self, Constructor};
use crate::factory::Provider;
use crate::seed::NativeSeed;
use crate::source::RandomSource;

/// Shape of the seed an algorithm accepts natively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NativeSeedKind {
    /// A single 32-bit value.
    Scalar32,
    /// A single 64-bit value.
    Scalar64,
    /// An array of 32-bit values.
    Array32,
    /// An array of 64-bit values.
    Array64,
}

impl NativeSeedKind {
    /// Size in bytes of one seed element.
    #[inline]
    pub fn element_byte_size(&self) -> usize {
        match self {
            NativeSeedKind::Scalar32 | NativeSeedKind::Array32 => 4,
            NativeSeedKind::Scalar64 | NativeSeedKind::Array64 => 8,
        }
    }

    /// Whether the seed is an array rather than a scalar.
    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, NativeSeedKind::Array32 | NativeSeedKind::Array64)
    }
}

impl fmt::Display for NativeSeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeSeedKind::Scalar32 => write!(f, "32-bit scalar"),
            NativeSeedKind::Scalar64 => write!(f, "64-bit scalar"),
            NativeSeedKind::Array32 => write!(f, "32-bit array"),
            NativeSeedKind::Array64 => write!(f, "64-bit array"),
        }
    }
}

/// Registry entry describing one algorithm.
///
/// Descriptors are `'static` and never change at runtime.
///
/// # Examples
///
/// ```rust
/// use rng_simple::{describe, NativeSeedKind, RandomSource};
///
/// let mt = describe(RandomSource::Mt);
/// assert_eq!(mt.native_seed_kind(), NativeSeedKind::Array32);
/// assert_eq!(mt.native_seed_length(), 624);
/// assert_eq!(mt.element_byte_size(), 4);
/// ```
#[derive(Clone, Copy)]
pub struct AlgorithmDescriptor {
    source: RandomSource,
    seed_kind: NativeSeedKind,
    seed_length: usize,
    constructor: Constructor,
}

impl AlgorithmDescriptor {
    const fn new(
        source: RandomSource,
        seed_kind: NativeSeedKind,
        seed_length: usize,
        constructor: Constructor,
    ) -> Self {
        Self {
            source,
            seed_kind,
            seed_length,
            constructor,
        }
    }

    /// Algorithm identifier.
    #[inline]
    pub fn source(&self) -> RandomSource {
        self.source
    }

    /// Canonical textual identifier.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.source.name()
    }

    /// Native seed shape.
    #[inline]
    pub fn native_seed_kind(&self) -> NativeSeedKind {
        self.seed_kind
    }

    /// Number of elements in the native seed (1 for scalar kinds).
    #[inline]
    pub fn native_seed_length(&self) -> usize {
        self.seed_length
    }

    /// Byte size of one native seed element.
    #[inline]
    pub fn element_byte_size(&self) -> usize {
        self.seed_kind.element_byte_size()
    }

    /// Checks that `seed` has exactly the native kind and length.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::ConstructionFailure`] on mismatch.
    pub fn check_seed(&self, seed: &NativeSeed) -> Result<(), SourceError> {
        if seed.kind() != self.seed_kind {
            return Err(SourceError::construction(
                self.source,
                format!("expected a {} seed, got a {}", self.seed_kind, seed.kind()),
            ));
        }
        if seed.len() != self.seed_length {
            return Err(SourceError::construction(
                self.source,
                format!(
                    "expected {} seed elements, got {}",
                    self.seed_length,
                    seed.len()
                ),
            ));
        }
        Ok(())
    }

    /// Builds a generator from an exact-shape native seed.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::ConstructionFailure`] if the seed shape or the
    /// constructor arguments do not fit.
    pub fn construct(&self, seed: NativeSeed, args: &[usize]) -> Result<Provider, SourceError> {
        self.check_seed(&seed)?;
        (self.constructor)(seed, args)
    }
}

impl fmt::Debug for AlgorithmDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmDescriptor")
            .field("source", &self.source)
            .field("seed_kind", &self.seed_kind)
            .field("seed_length", &self.seed_length)
            .finish_non_exhaustive()
    }
}

use NativeSeedKind::{Array32, Array64, Scalar32, Scalar64};

/// Indexed by `RandomSource as usize`.
static REGISTRY: [AlgorithmDescriptor; 16] = [
    AlgorithmDescriptor::new(RandomSource::Jdk, Scalar64, 1, constructors::jdk),
    AlgorithmDescriptor::new(RandomSource::Well512A, Array32, 16, constructors::well512a),
    AlgorithmDescriptor::new(RandomSource::Well1024A, Array32, 32, constructors::well1024a),
    AlgorithmDescriptor::new(RandomSource::Well19937A, Array32, 624, constructors::well19937a),
    AlgorithmDescriptor::new(RandomSource::Well19937C, Array32, 624, constructors::well19937c),
    AlgorithmDescriptor::new(RandomSource::Well44497A, Array32, 1391, constructors::well44497a),
    AlgorithmDescriptor::new(RandomSource::Well44497B, Array32, 1391, constructors::well44497b),
    AlgorithmDescriptor::new(RandomSource::Mt, Array32, 624, constructors::mt),
    AlgorithmDescriptor::new(RandomSource::Isaac, Array32, 256, constructors::isaac),
    AlgorithmDescriptor::new(RandomSource::SplitMix64, Scalar64, 1, constructors::split_mix64),
    AlgorithmDescriptor::new(RandomSource::XorShift1024S, Array64, 16, constructors::xor_shift1024s),
    AlgorithmDescriptor::new(RandomSource::TwoCmres, Scalar32, 1, constructors::two_cmres),
    AlgorithmDescriptor::new(
        RandomSource::TwoCmresSelect,
        Scalar32,
        1,
        constructors::two_cmres_select,
    ),
    AlgorithmDescriptor::new(RandomSource::Mt64, Array64, 312, constructors::mt64),
    AlgorithmDescriptor::new(RandomSource::Mwc256, Array32, 257, constructors::mwc256),
    AlgorithmDescriptor::new(RandomSource::Kiss, Array32, 4, constructors::kiss),
];

/// Returns the descriptor for `source`.
#[inline]
pub fn describe(source: RandomSource) -> &'static AlgorithmDescriptor {
    &REGISTRY[source as usize]
}

/// Looks up a descriptor by its textual identifier.
///
/// # Errors
///
/// Returns [`SourceError::UnknownAlgorithm`] for names outside the registry.
pub fn describe_by_name(name: &str) -> Result<&'static AlgorithmDescriptor, SourceError> {
    name.parse::<RandomSource>().map(describe)
}

/// All descriptors, in registry order.
pub fn descriptors() -> &'static [AlgorithmDescriptor] {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use rng_core::source32::{IsaacRandom, KissRandom, MersenneTwister, MultiplyWithCarry256};
    use rng_core::source32::{Well1024a, Well19937a, Well44497a, Well512a};
    use rng_core::source64::{MersenneTwister64, XorShift1024Star};

    #[test]
    fn test_table_indexed_by_discriminant() {
        for (i, descriptor) in descriptors().iter().enumerate() {
            assert_eq!(descriptor.source() as usize, i);
            assert!(std::ptr::eq(describe(descriptor.source()), descriptor));
        }
    }

    #[test]
    fn test_seed_lengths_match_generators() {
        assert_eq!(describe(RandomSource::Well512A).native_seed_length(), Well512a::SEED_SIZE);
        assert_eq!(describe(RandomSource::Well1024A).native_seed_length(), Well1024a::SEED_SIZE);
        assert_eq!(describe(RandomSource::Well19937A).native_seed_length(), Well19937a::SEED_SIZE);
        assert_eq!(describe(RandomSource::Well44497A).native_seed_length(), Well44497a::SEED_SIZE);
        assert_eq!(describe(RandomSource::Mt).native_seed_length(), MersenneTwister::SEED_SIZE);
        assert_eq!(describe(RandomSource::Isaac).native_seed_length(), IsaacRandom::SEED_SIZE);
        assert_eq!(describe(RandomSource::Mwc256).native_seed_length(), MultiplyWithCarry256::SEED_SIZE);
        assert_eq!(describe(RandomSource::Kiss).native_seed_length(), KissRandom::SEED_SIZE);
        assert_eq!(describe(RandomSource::Mt64).native_seed_length(), MersenneTwister64::SEED_SIZE);
        assert_eq!(
            describe(RandomSource::XorShift1024S).native_seed_length(),
            XorShift1024Star::SEED_SIZE
        );
    }

    #[test]
    fn test_scalar_kinds_have_length_one() {
        for descriptor in descriptors() {
            if !descriptor.native_seed_kind().is_array() {
                assert_eq!(descriptor.native_seed_length(), 1, "{}", descriptor.name());
            }
        }
    }

    #[test]
    fn test_describe_by_name() {
        let descriptor = describe_by_name("WELL_44497_A").unwrap();
        assert_eq!(descriptor.source(), RandomSource::Well44497A);
        assert_eq!(descriptor.native_seed_length(), 1391);
        assert_eq!(descriptor.element_byte_size(), 4);

        assert!(matches!(
            describe_by_name("WELL_44497_Z"),
            Err(SourceError::UnknownAlgorithm(name)) if name == "WELL_44497_Z"
        ));
    }

    #[test]
    fn test_check_seed_rejects_wrong_shape() {
        let kiss = describe(RandomSource::Kiss);
        assert!(kiss.check_seed(&NativeSeed::Array32(vec![1, 2, 3, 4])).is_ok());
        assert!(matches!(
            kiss.check_seed(&NativeSeed::Array32(vec![1, 2, 3])),
            Err(SourceError::ConstructionFailure { .. })
        ));
        assert!(matches!(
            kiss.check_seed(&NativeSeed::Array64(vec![1, 2, 3, 4])),
            Err(SourceError::ConstructionFailure { .. })
        ));
    }

    #[test]
    fn test_debug_omits_constructor() {
        let text = format!("{:?}", describe(RandomSource::Jdk));
        assert!(text.contains("Jdk"));
        assert!(text.contains("Scalar64"));
    }
}
