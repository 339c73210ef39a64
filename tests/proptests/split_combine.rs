//! Property tests for split/reconstruct workflows

use horcrux::{Share, make_shares, reconstruct};
use num_bigint::BigUint;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand::seq::{SliceRandom, index};
use rand_chacha::ChaCha8Rng;

/// Wrapper for arbitrary secrets up to 256 bits
#[derive(Clone, Debug)]
struct Secret(BigUint);

impl Arbitrary for Secret {
    fn arbitrary(g: &mut Gen) -> Self {
        // Between 0 and 8 32-bit digits
        let digit_count = usize::arbitrary(g) % 9;
        let digits = (0..digit_count).map(|_| u32::arbitrary(g)).collect();
        Secret(BigUint::new(digits))
    }
}

/// Wrapper for share counts between 1 and 9 (keeps subset enumeration small)
#[derive(Clone, Copy, Debug)]
struct ShareCountParam(usize);

impl Arbitrary for ShareCountParam {
    fn arbitrary(g: &mut Gen) -> Self {
        ShareCountParam(usize::arbitrary(g) % 9 + 1)
    }
}

/// All index subsets of `0..n` with exactly `k` elements
fn subsets(n: usize, k: usize) -> impl Iterator<Item = Vec<usize>> {
    (0u32..1 << n)
        .filter(move |mask| mask.count_ones() as usize == k)
        .map(move |mask| (0..n).filter(|i| mask & (1 << i) != 0).collect())
}

/// Test that every strict majority of the shares recovers the secret
#[quickcheck]
fn prop_every_majority_recovers_secret(secret: Secret, count: ShareCountParam, seed: u64) -> bool {
    let Secret(secret) = secret;
    let ShareCountParam(n) = count;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let Ok(split) = make_shares(&secret, n, &mut rng) else {
        return false;
    };
    if split.threshold != n / 2 + 1 || split.prime <= secret {
        return false;
    }

    subsets(n, split.threshold).all(|indices| {
        let quorum: Vec<Share> = indices.iter().map(|&i| split.shares[i].clone()).collect();
        reconstruct(&quorum, &split.prime).is_ok_and(|value| value == secret)
    })
}

/// Test that more than a majority also recovers the secret
#[quickcheck]
fn prop_superset_of_majority_recovers_secret(secret: Secret, count: ShareCountParam, seed: u64) -> bool {
    let Secret(secret) = secret;
    let ShareCountParam(n) = count;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let Ok(split) = make_shares(&secret, n, &mut rng) else {
        return false;
    };

    (split.threshold..=n).all(|size| {
        reconstruct(&split.shares[..size], &split.prime).is_ok_and(|value| value == secret)
    })
}

/// Test that one share short of a majority does not recover a large secret
#[quickcheck]
fn prop_minority_does_not_recover_secret(low: u64, count: ShareCountParam, seed: u64) -> bool {
    let ShareCountParam(n) = count;
    if n < 3 {
        return true; // Need at least one share in the minority
    }

    // Large field so an accidental match is negligible
    let secret = (BigUint::from(1u32) << 128u32) + low;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let Ok(split) = make_shares(&secret, n, &mut rng) else {
        return false;
    };

    let indices = index::sample(&mut rng, n, split.threshold - 1);
    let minority: Vec<Share> = indices.iter().map(|i| split.shares[i].clone()).collect();

    reconstruct(&minority, &split.prime).is_ok_and(|value| value != secret)
}

/// Test that reconstruction does not depend on share order
#[quickcheck]
fn prop_reconstruction_ignores_order(secret: Secret, count: ShareCountParam, seed: u64) -> bool {
    let Secret(secret) = secret;
    let ShareCountParam(n) = count;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let Ok(split) = make_shares(&secret, n, &mut rng) else {
        return false;
    };

    let mut quorum: Vec<Share> = split.shares[..split.threshold].to_vec();
    let Ok(expected) = reconstruct(&quorum, &split.prime) else {
        return false;
    };

    quorum.shuffle(&mut rng);
    reconstruct(&quorum, &split.prime).is_ok_and(|value| value == expected)
}

/// Test that x-coordinates are exactly 1..=n and every y is reduced
#[quickcheck]
fn prop_x_coordinates_are_distinct(secret: Secret, count: ShareCountParam, seed: u64) -> bool {
    let Secret(secret) = secret;
    let ShareCountParam(n) = count;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let Ok(split) = make_shares(&secret, n, &mut rng) else {
        return false;
    };

    split.shares.len() == n
        && split
            .shares
            .iter()
            .enumerate()
            .all(|(i, share)| share.x == BigUint::from(i + 1) && share.y < split.prime)
}
