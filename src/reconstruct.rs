//! Secret reconstruction by Lagrange interpolation at x = 0
//!
//! All arithmetic stays in the prime field. Division is multiplication by a
//! Fermat inverse, so large secrets are recovered exactly.

use std::collections::HashSet;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{Result, SharingError};
use crate::sharing::Share;

/// Inverse of `value` modulo `prime`, computed as `value^(prime - 2)`.
///
/// `prime` must be prime and at least 2.
///
/// # Errors
/// - [`SharingError::InvalidPrime`] if `prime < 2`
/// - [`SharingError::NotInvertible`] if `value` is zero modulo `prime`
pub fn mod_inverse(value: &BigUint, prime: &BigUint) -> Result<BigUint> {
    check_modulus(prime)?;
    if (value % prime).is_zero() {
        return Err(SharingError::NotInvertible {
            value: value.clone(),
            prime: prime.clone(),
        });
    }
    let exponent = prime - BigUint::from(2u32);
    Ok(value.modpow(&exponent, prime))
}

/// Recovers the constant term of the polynomial through `shares`.
///
/// Quorum size is not checked: with fewer shares than the threshold the
/// result is some field element unrelated to the secret. The order of
/// `shares` does not matter. The result lies in `[0, prime)`.
///
/// # Errors
/// - [`SharingError::InvalidPrime`] if `prime < 2`
/// - [`SharingError::NoShares`] if `shares` is empty
/// - [`SharingError::ZeroAbscissa`] if a share has `x ≡ 0 (mod prime)`
/// - [`SharingError::DuplicateAbscissa`] if two shares have the same `x` modulo `prime`
///
/// # Examples
///
/// ```rust
/// use horcrux::{Share, reconstruct};
/// use num_bigint::BigUint;
///
/// // f(x) = 5 + 3x over GF(11)
/// let shares = [Share::new(2u32, 0u32), Share::new(3u32, 3u32)];
/// let secret = reconstruct(&shares, &BigUint::from(11u32)).unwrap();
/// assert_eq!(secret, BigUint::from(5u32));
/// ```
pub fn reconstruct(shares: &[Share], prime: &BigUint) -> Result<BigUint> {
    check_modulus(prime)?;
    if shares.is_empty() {
        return Err(SharingError::NoShares);
    }

    let xs = reduced_abscissas(shares, prime)?;

    let mut secret = BigUint::zero();
    for (i, (xi, share)) in xs.iter().zip(shares).enumerate() {
        let mut basis = BigUint::one();
        for (j, xj) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            // (0 - xj) / (xi - xj)
            let numerator = prime - xj;
            let denominator = (xi + prime - xj) % prime;
            basis = basis * numerator % prime * mod_inverse(&denominator, prime)? % prime;
        }
        secret = (secret + &share.y % prime * basis) % prime;
    }

    Ok(secret)
}

fn check_modulus(prime: &BigUint) -> Result<()> {
    if *prime < BigUint::from(2u32) {
        return Err(SharingError::InvalidPrime(prime.clone()));
    }
    Ok(())
}

/// Reduces every x-coordinate modulo `prime`, rejecting zeros and repeats.
fn reduced_abscissas(shares: &[Share], prime: &BigUint) -> Result<Vec<BigUint>> {
    let mut seen = HashSet::with_capacity(shares.len());
    shares
        .iter()
        .map(|share| {
            let x = &share.x % prime;
            if x.is_zero() {
                return Err(SharingError::ZeroAbscissa(share.x.clone()));
            }
            if !seen.insert(x.clone()) {
                return Err(SharingError::DuplicateAbscissa(share.x.clone()));
            }
            Ok(x)
        })
        .collect()
}
