//! Integration tests for sampler parameter validation.
//!
//! Samplers are driven by providers built through `rng_simple`. A counting
//! wrapper checks that rejected constructions never consume randomness.

use proptest::prelude::*;
use rng_core::UniformRandomProvider;
use rng_sampling::{
    ChengBetaSampler, ContinuousSampler, DiscreteSampler, RejectionInversionZipfSampler,
    SamplerError,
};
use rng_simple::{create, create_with_seed, RandomSource};

/// Forwards to an inner provider and counts every draw.
struct Counting<R> {
    inner: R,
    draws: usize,
}

impl<R: UniformRandomProvider> Counting<R> {
    fn new(inner: R) -> Self {
        Self { inner, draws: 0 }
    }
}

impl<R: UniformRandomProvider> UniformRandomProvider for Counting<R> {
    fn next_int(&mut self) -> i32 {
        self.draws += 1;
        self.inner.next_int()
    }

    fn next_long(&mut self) -> i64 {
        self.draws += 1;
        self.inner.next_long()
    }

    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.draws += 1;
        self.inner.fill_bytes(bytes)
    }
}

#[test]
fn test_beta_zero_alpha_rejected_before_drawing() {
    let mut rng = Counting::new(create(RandomSource::SplitMix64).unwrap());
    let result = ChengBetaSampler::new(&mut rng, 0.0, 1.0);
    assert!(matches!(
        result,
        Err(SamplerError::InvalidDistributionParameter { name: "alpha", .. })
    ));
    assert_eq!(rng.draws, 0);
}

#[test]
fn test_beta_zero_beta_rejected() {
    let mut rng = Counting::new(create(RandomSource::SplitMix64).unwrap());
    let result = ChengBetaSampler::new(&mut rng, 1.0, 0.0);
    assert!(matches!(
        result,
        Err(SamplerError::InvalidDistributionParameter { name: "beta", .. })
    ));
    assert_eq!(rng.draws, 0);
}

#[test]
fn test_zipf_zero_exponent_rejected() {
    let mut rng = Counting::new(create(RandomSource::SplitMix64).unwrap());
    let result = RejectionInversionZipfSampler::new(&mut rng, 1, 0.0);
    assert!(matches!(
        result,
        Err(SamplerError::InvalidDistributionParameter { name: "exponent", .. })
    ));
    assert_eq!(rng.draws, 0);
}

#[test]
fn test_zipf_zero_elements_rejected() {
    let mut rng = Counting::new(create(RandomSource::SplitMix64).unwrap());
    let result = RejectionInversionZipfSampler::new(&mut rng, 0, 1.0);
    assert!(matches!(
        result,
        Err(SamplerError::InvalidDistributionParameter { name: "number_of_elements", .. })
    ));
    assert_eq!(rng.draws, 0);
}

#[test]
fn test_valid_construction_draws_nothing_until_sampled() {
    let mut rng = Counting::new(create(RandomSource::SplitMix64).unwrap());
    {
        let _sampler = ChengBetaSampler::new(&mut rng, 2.0, 3.0).unwrap();
    }
    assert_eq!(rng.draws, 0);

    let mut sampler = RejectionInversionZipfSampler::new(&mut rng, 50, 1.2).unwrap();
    sampler.sample();
    drop(sampler);
    assert!(rng.draws > 0);
}

#[test]
fn test_samplers_reproducible_from_seed() {
    for source in RandomSource::ALL {
        let mut a = create_with_seed(source, 31u64).unwrap();
        let mut b = create_with_seed(source, 31u64).unwrap();
        let mut beta_a = ChengBetaSampler::new(&mut a, 0.5, 0.5).unwrap();
        let mut beta_b = ChengBetaSampler::new(&mut b, 0.5, 0.5).unwrap();
        for _ in 0..20 {
            assert_eq!(beta_a.sample().to_bits(), beta_b.sample().to_bits(), "{}", source);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_non_positive_shapes_always_rejected(
        alpha in -10.0f64..=0.0,
        beta in 0.01f64..10.0,
    ) {
        let mut rng = Counting::new(create_with_seed(RandomSource::Kiss, 1u64).unwrap());
        prop_assert!(ChengBetaSampler::new(&mut rng, alpha, beta).is_err());
        prop_assert!(ChengBetaSampler::new(&mut rng, beta, alpha).is_err());
        prop_assert_eq!(rng.draws, 0);
    }

    #[test]
    fn test_zipf_in_range(n in 1i32..500, s in 0.1f64..4.0, seed in any::<u64>()) {
        let mut rng = create_with_seed(RandomSource::XorShift1024S, seed).unwrap();
        let mut sampler = RejectionInversionZipfSampler::new(&mut rng, n, s).unwrap();
        for _ in 0..50 {
            let k = sampler.sample();
            prop_assert!((1..=n).contains(&k));
        }
    }
}
