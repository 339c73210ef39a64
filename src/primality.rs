//! Miller-Rabin primality testing and random prime search
//!
//! The test is probabilistic: a composite passes a single witness round with
//! probability at most 1/4, so `confidence` bits of certainty need about
//! `confidence / 2` rounds. Primes always pass.

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::Rng;
use tracing::debug;

use crate::error::{Result, SharingError};

/// Default certainty: false-positive probability at most 2^-128
pub const DEFAULT_CONFIDENCE: u32 = 128;

/// Number of witness rounds run for a given confidence
#[must_use]
pub fn witness_rounds(confidence: u32) -> u32 {
    confidence.div_ceil(2) + 1
}

/// Tests whether `n` is probably prime.
///
/// Returns `false` as soon as a witness proves `n` composite, and `true` if
/// all [`witness_rounds`] rounds pass. There are no false negatives; the
/// false-positive probability is bounded by 2^-`confidence`.
///
/// # Examples
///
/// ```rust
/// use horcrux::primality::{is_probable_prime, DEFAULT_CONFIDENCE};
/// use num_bigint::BigUint;
///
/// let mut rng = rand::thread_rng();
/// assert!(is_probable_prime(&BigUint::from(7919u32), DEFAULT_CONFIDENCE, &mut rng));
/// assert!(!is_probable_prime(&BigUint::from(7917u32), DEFAULT_CONFIDENCE, &mut rng));
/// ```
pub fn is_probable_prime<R: Rng + ?Sized>(n: &BigUint, confidence: u32, rng: &mut R) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u32);
    let three = BigUint::from(3u32);

    if *n == two || *n == three {
        return true;
    }
    if *n <= one || !n.bit(0) {
        return false;
    }

    let n_minus_one = n - &one;
    let (d, r) = split_power_of_two(&n_minus_one);

    (0..witness_rounds(confidence)).all(|_| {
        // a in [2, n - 2]
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        passes_witness(n, &n_minus_one, &a, &d, r)
    })
}

/// Writes `value` as `2^r * d` with `d` odd. `value` must be non-zero.
fn split_power_of_two(value: &BigUint) -> (BigUint, u64) {
    let mut d = value.clone();
    let mut r = 0;
    while !d.bit(0) {
        d >>= 1;
        r += 1;
    }
    (d, r)
}

/// One Miller-Rabin round; `false` means `a` proves `n` composite.
fn passes_witness(n: &BigUint, n_minus_one: &BigUint, a: &BigUint, d: &BigUint, r: u64) -> bool {
    let mut x = a.modpow(d, n);
    if x.is_one() || x == *n_minus_one {
        return true;
    }
    for _ in 1..r {
        x = &x * &x % n;
        if x == *n_minus_one {
            return true;
        }
    }
    false
}

/// Draws uniform candidates from `[2^bits, 2^(bits+1))` until one is
/// probably prime.
///
/// Terminates almost surely provided `rng` is uniform over the range; prime
/// density means the expected number of candidates is about `0.7 * bits`.
///
/// # Errors
/// Returns [`SharingError::InvalidBitLength`] if `bits` is zero, since
/// `[1, 2)` holds no prime.
pub fn find_prime<R: Rng + ?Sized>(bits: u64, rng: &mut R) -> Result<BigUint> {
    if bits == 0 {
        return Err(SharingError::InvalidBitLength(bits));
    }

    let lo = BigUint::one() << bits;
    let hi = BigUint::one() << (bits + 1);

    let mut attempts: u64 = 0;
    loop {
        attempts += 1;
        let candidate = rng.gen_biguint_range(&lo, &hi);
        if is_probable_prime(&candidate, DEFAULT_CONFIDENCE, rng) {
            debug!(bits, attempts, "found probable prime");
            return Ok(candidate);
        }
    }
}
