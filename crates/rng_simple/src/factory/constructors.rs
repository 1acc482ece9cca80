//! Per-algorithm constructors referenced by the registry.
//!
//! Each takes an exact-shape [`NativeSeed`] and the constructor arguments.
//! Shape has already been checked by the caller; the constructors still
//! refuse a seed of the wrong kind rather than panicking.

use rng_core::source32::{
    IsaacRandom, JdkRandom, KissRandom, MersenneTwister, MultiplyWithCarry256, Well1024a,
    Well19937a, Well19937c, Well44497a, Well44497b, Well512a,
};
use rng_core::source64::{MersenneTwister64, SplitMix64, TwoCmres, XorShift1024Star};

use super::Provider;
use crate::error::SourceError;
use crate::seed::NativeSeed;
use crate::source::RandomSource;

/// Builds a generator from a native seed and constructor arguments.
pub(crate) type Constructor = fn(NativeSeed, &[usize]) -> Result<Provider, SourceError>;

fn reject_args(source: RandomSource, args: &[usize]) -> Result<(), SourceError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(SourceError::construction(
            source,
            format!("takes no constructor arguments, got {}", args.len()),
        ))
    }
}

fn wrong_kind(source: RandomSource, seed: &NativeSeed) -> SourceError {
    SourceError::construction(source, format!("unexpected {} seed", seed.kind()))
}

macro_rules! array32_constructor {
    ($name:ident, $source:expr, $ty:ty) => {
        pub(crate) fn $name(seed: NativeSeed, args: &[usize]) -> Result<Provider, SourceError> {
            reject_args($source, args)?;
            let words = seed.as_array32().ok_or_else(|| wrong_kind($source, &seed))?;
            Ok(Box::new(<$ty>::new(words)))
        }
    };
}

macro_rules! array64_constructor {
    ($name:ident, $source:expr, $ty:ty) => {
        pub(crate) fn $name(seed: NativeSeed, args: &[usize]) -> Result<Provider, SourceError> {
            reject_args($source, args)?;
            let words = seed.as_array64().ok_or_else(|| wrong_kind($source, &seed))?;
            Ok(Box::new(<$ty>::new(words)))
        }
    };
}

array32_constructor!(well512a, RandomSource::Well512A, Well512a);
array32_constructor!(well1024a, RandomSource::Well1024A, Well1024a);
array32_constructor!(well19937a, RandomSource::Well19937A, Well19937a);
array32_constructor!(well19937c, RandomSource::Well19937C, Well19937c);
array32_constructor!(well44497a, RandomSource::Well44497A, Well44497a);
array32_constructor!(well44497b, RandomSource::Well44497B, Well44497b);
array32_constructor!(mt, RandomSource::Mt, MersenneTwister);
array32_constructor!(isaac, RandomSource::Isaac, IsaacRandom);
array32_constructor!(mwc256, RandomSource::Mwc256, MultiplyWithCarry256);
array32_constructor!(kiss, RandomSource::Kiss, KissRandom);
array64_constructor!(xor_shift1024s, RandomSource::XorShift1024S, XorShift1024Star);
array64_constructor!(mt64, RandomSource::Mt64, MersenneTwister64);

pub(crate) fn jdk(seed: NativeSeed, args: &[usize]) -> Result<Provider, SourceError> {
    reject_args(RandomSource::Jdk, args)?;
    let v = seed
        .as_scalar64()
        .ok_or_else(|| wrong_kind(RandomSource::Jdk, &seed))?;
    Ok(Box::new(JdkRandom::new(v)))
}

pub(crate) fn split_mix64(seed: NativeSeed, args: &[usize]) -> Result<Provider, SourceError> {
    reject_args(RandomSource::SplitMix64, args)?;
    let v = seed
        .as_scalar64()
        .ok_or_else(|| wrong_kind(RandomSource::SplitMix64, &seed))?;
    Ok(Box::new(SplitMix64::new(v)))
}

pub(crate) fn two_cmres(seed: NativeSeed, args: &[usize]) -> Result<Provider, SourceError> {
    reject_args(RandomSource::TwoCmres, args)?;
    let v = seed
        .as_scalar32()
        .ok_or_else(|| wrong_kind(RandomSource::TwoCmres, &seed))?;
    Ok(Box::new(TwoCmres::new(v)))
}

/// Subcycle indices come from `args`; none selects `(0, 1)`.
pub(crate) fn two_cmres_select(seed: NativeSeed, args: &[usize]) -> Result<Provider, SourceError> {
    let source = RandomSource::TwoCmresSelect;
    let v = seed.as_scalar32().ok_or_else(|| wrong_kind(source, &seed))?;
    let (i, j) = match *args {
        [] => (0, 1),
        [i, j] => (i, j),
        _ => {
            return Err(SourceError::construction(
                source,
                format!("expects two subcycle indices, got {} arguments", args.len()),
            ))
        }
    };
    let rng = TwoCmres::with_subcycles(v, i, j).ok_or_else(|| {
        SourceError::construction(
            source,
            format!(
                "subcycle indices ({}, {}) must be distinct and below {}",
                i,
                j,
                TwoCmres::SUBCYCLE_COUNT
            ),
        )
    })?;
    Ok(Box::new(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rng_core::UniformRandomProvider;

    #[test]
    fn test_rejects_unexpected_args() {
        assert!(matches!(
            jdk(NativeSeed::Scalar64(1), &[3]),
            Err(SourceError::ConstructionFailure { algorithm: RandomSource::Jdk, .. })
        ));
        assert!(matches!(
            kiss(NativeSeed::Array32(vec![1, 2, 3, 4]), &[0, 1]),
            Err(SourceError::ConstructionFailure { .. })
        ));
    }

    #[test]
    fn test_rejects_wrong_kind() {
        assert!(matches!(
            mt64(NativeSeed::Array32(vec![1; 312]), &[]),
            Err(SourceError::ConstructionFailure { .. })
        ));
        assert!(matches!(
            two_cmres(NativeSeed::Scalar64(1), &[]),
            Err(SourceError::ConstructionFailure { .. })
        ));
    }

    #[test]
    fn test_two_cmres_select_args() {
        let mut default = two_cmres_select(NativeSeed::Scalar32(9), &[]).unwrap();
        let mut explicit = two_cmres_select(NativeSeed::Scalar32(9), &[0, 1]).unwrap();
        let mut plain = two_cmres(NativeSeed::Scalar32(9), &[]).unwrap();
        for _ in 0..5 {
            let v = default.next_long();
            assert_eq!(v, explicit.next_long());
            assert_eq!(v, plain.next_long());
        }

        assert!(two_cmres_select(NativeSeed::Scalar32(9), &[3, 12]).is_ok());
        assert!(two_cmres_select(NativeSeed::Scalar32(9), &[3, 3]).is_err());
        assert!(two_cmres_select(NativeSeed::Scalar32(9), &[0, 14]).is_err());
        assert!(two_cmres_select(NativeSeed::Scalar32(9), &[1]).is_err());
        assert!(two_cmres_select(NativeSeed::Scalar32(9), &[1, 2, 3]).is_err());
    }

    #[test]
    fn test_jdk_matches_generator() {
        let mut provider = jdk(NativeSeed::Scalar64(42), &[]).unwrap();
        assert_eq!(provider.next_int(), -1170105035);
        assert_eq!(provider.next_int(), 234785527);
    }
}
