//! Field modulus selection
//!
//! The prime is drawn from `[2^b, 2^(b+1))` where `b` is the bit length of
//! the value it must exceed. Every value of bit length `b` is below `2^b`, so
//! the prime is always strictly larger than the secret and reconstruction
//! returns the secret itself rather than `secret mod p`.

use num_bigint::BigUint;
use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::primality::find_prime;

/// Number of bits needed to write `value` in binary.
///
/// Zero is written `0` and so takes one bit.
#[must_use]
pub fn bit_length(value: &BigUint) -> u64 {
    value.bits().max(1)
}

/// Picks a prime with the same bit length as `secret`.
///
/// If the drawn prime were ever not strictly larger than `secret`, the search
/// moves up one bit and tries again instead of truncating the secret.
///
/// # Errors
/// Propagates errors from [`find_prime`].
pub fn select_prime<R: Rng + ?Sized>(secret: &BigUint, rng: &mut R) -> Result<BigUint> {
    prime_above(secret, bit_length(secret), rng)
}

/// Picks a prime that exceeds both `secret` and `share_count`.
///
/// The prime must exceed the share count too, otherwise the x-coordinates
/// `1..=share_count` would collide modulo the prime.
///
/// # Errors
/// Propagates errors from [`find_prime`].
pub fn select_field_prime<R: Rng + ?Sized>(
    secret: &BigUint,
    share_count: usize,
    rng: &mut R,
) -> Result<BigUint> {
    let count = BigUint::from(share_count);
    let bound = if count > *secret { &count } else { secret };
    prime_above(bound, bit_length(bound), rng)
}

fn prime_above<R: Rng + ?Sized>(bound: &BigUint, bits: u64, rng: &mut R) -> Result<BigUint> {
    let mut bits = bits;
    loop {
        let prime = find_prime(bits, rng)?;
        if prime > *bound {
            return Ok(prime);
        }
        debug!(bits, "prime does not exceed bound, widening search");
        bits += 1;
    }
}
