//! Concurrent construction from a shared factory.

use rayon::prelude::*;
use rng_core::UniformRandomProvider;
use rng_simple::{ProviderFactory, RandomSource};

#[test]
fn test_parallel_construction_matches_sequential() {
    let factory = ProviderFactory::new();

    let sequential: Vec<Vec<i64>> = (0..64u64)
        .map(|seed| {
            let source = RandomSource::ALL[seed as usize % RandomSource::ALL.len()];
            let mut rng = factory.create_with_seed(source, seed).unwrap();
            (0..8).map(|_| rng.next_long()).collect()
        })
        .collect();

    let parallel: Vec<Vec<i64>> = (0..64u64)
        .into_par_iter()
        .map(|seed| {
            let source = RandomSource::ALL[seed as usize % RandomSource::ALL.len()];
            let mut rng = factory.create_with_seed(source, seed).unwrap();
            (0..8).map(|_| rng.next_long()).collect()
        })
        .collect();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_parallel_self_seeding() {
    let factory = ProviderFactory::new();
    let firsts: Vec<i64> = (0..32)
        .into_par_iter()
        .map(|_| {
            let mut rng = factory.create(RandomSource::XorShift1024S).unwrap();
            rng.next_long()
        })
        .collect();

    let mut unique = firsts.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), firsts.len());
}

#[test]
fn test_providers_move_between_threads() {
    let factory = ProviderFactory::new();
    let providers: Vec<_> = RandomSource::ALL
        .iter()
        .map(|&source| factory.create_with_seed(source, 11u64).unwrap())
        .collect();

    let draws: Vec<i32> = providers
        .into_par_iter()
        .map(|mut rng| rng.next_int())
        .collect();
    assert_eq!(draws.len(), RandomSource::ALL.len());
}
