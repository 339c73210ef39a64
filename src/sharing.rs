//! Share generation
//!
//! The secret becomes the constant term of a random polynomial of degree
//! `k - 1` over a prime field, and each share is one point on it. With
//! `k = n / 2 + 1`, any strict majority of the `n` shares pins the polynomial
//! down, while a minority is consistent with every possible secret.

use num_bigint::BigUint;
use rand::Rng;
use tracing::info;

use crate::domain::SplitConfig;
use crate::error::{Result, SharingError};
use crate::field::select_field_prime;
use crate::polynomial::{create_polynomial, sample_polynomial};

/// A point `(x, f(x) mod p)` on the secret-encoding polynomial
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Share {
    /// The x-coordinate, never 0
    pub x: BigUint,
    /// The polynomial evaluated at `x`, reduced modulo the field prime
    pub y: BigUint,
}

impl Share {
    pub fn new(x: impl Into<BigUint>, y: impl Into<BigUint>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// The output of a split: the shares plus the public field parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedSecret {
    /// One share per holder, at `x = 1..=n`
    pub shares: Vec<Share>,
    /// The field modulus; public, needed for reconstruction
    pub prime: BigUint,
    /// Number of shares needed to reconstruct
    pub threshold: usize,
}

/// Strict majority of `share_count`: `share_count / 2 + 1`
#[must_use]
pub fn threshold_for(share_count: usize) -> usize {
    share_count / 2 + 1
}

/// Splits `secret` into `share_count` shares, any strict majority of which
/// reconstructs it.
///
/// The field prime is chosen larger than both the secret and the share
/// count, so reconstruction yields the secret exactly.
///
/// # Errors
/// Returns [`SharingError::InvalidShareCount`] if `share_count` is zero.
///
/// # Examples
///
/// ```rust
/// use horcrux::{make_shares, reconstruct};
/// use num_bigint::BigUint;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let secret = BigUint::from(1_234_567_890u32);
/// let split = make_shares(&secret, 7, &mut rand::thread_rng())?;
/// assert_eq!(split.threshold, 4);
///
/// let recovered = reconstruct(&split.shares[2..6], &split.prime)?;
/// assert_eq!(recovered, secret);
/// # Ok(())
/// # }
/// ```
pub fn make_shares<R: Rng + ?Sized>(
    secret: &BigUint,
    share_count: usize,
    rng: &mut R,
) -> Result<SharedSecret> {
    if share_count < 1 {
        return Err(SharingError::InvalidShareCount(share_count));
    }

    let threshold = threshold_for(share_count);
    let prime = select_field_prime(secret, share_count, rng)?;

    let mut poly = Vec::with_capacity(threshold);
    poly.push(secret.clone());
    poly.extend(create_polynomial(threshold - 1, &prime, rng));

    let shares = sample_polynomial(&poly, share_count, &prime);

    info!(
        share_count,
        threshold,
        prime_bits = prime.bits(),
        "split secret into shares"
    );

    Ok(SharedSecret {
        shares,
        prime,
        threshold,
    })
}

/// Splits `secret` according to a validated [`SplitConfig`].
///
/// # Errors
/// Propagates errors from [`make_shares`].
pub fn make_shares_with<R: Rng + ?Sized>(
    secret: &BigUint,
    config: SplitConfig,
    rng: &mut R,
) -> Result<SharedSecret> {
    let split = make_shares(secret, *config.share_count(), rng)?;
    debug_assert_eq!(split.threshold, *config.threshold());
    Ok(split)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShareCount;
    use crate::primality::{DEFAULT_CONFIDENCE, is_probable_prime};
    use crate::reconstruct::reconstruct;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_threshold_for() {
        assert_eq!(threshold_for(1), 1);
        assert_eq!(threshold_for(2), 2);
        assert_eq!(threshold_for(3), 2);
        assert_eq!(threshold_for(7), 4);
        assert_eq!(threshold_for(10), 6);
    }

    #[test]
    fn test_make_shares_rejects_zero_count() {
        let result = make_shares(&BigUint::from(5u32), 0, &mut rng());
        assert_eq!(result, Err(SharingError::InvalidShareCount(0)));
    }

    #[test]
    fn test_make_shares_shape() {
        let mut rng = rng();
        let secret = BigUint::from(1_234_567_890u32);
        let split = make_shares(&secret, 7, &mut rng).unwrap();

        assert_eq!(split.shares.len(), 7);
        assert_eq!(split.threshold, 4);
        assert!(split.prime > secret);
        assert!(is_probable_prime(&split.prime, DEFAULT_CONFIDENCE, &mut rng));

        let xs: HashSet<_> = split.shares.iter().map(|s| s.x.clone()).collect();
        assert_eq!(xs.len(), 7);
        for (i, share) in split.shares.iter().enumerate() {
            assert_eq!(share.x, BigUint::from(i + 1));
            assert!(share.y < split.prime);
        }
    }

    #[test]
    fn test_make_shares_single_share_is_the_secret() {
        // n = 1 gives k = 1: a constant polynomial
        let secret = BigUint::from(99u32);
        let split = make_shares(&secret, 1, &mut rng()).unwrap();
        assert_eq!(split.threshold, 1);
        assert_eq!(split.shares, vec![Share::new(1u32, 99u32)]);
    }

    #[test]
    fn test_make_shares_zero_secret() {
        let secret = BigUint::from(0u32);
        let split = make_shares(&secret, 7, &mut rng()).unwrap();
        assert!(split.prime > BigUint::from(7u32));
        assert_eq!(reconstruct(&split.shares[..4], &split.prime).unwrap(), secret);
    }

    #[test]
    fn test_make_shares_with_config() {
        let config = SplitConfig::new(ShareCount::new(5).unwrap());
        let secret = BigUint::from(31_337u32);
        let split = make_shares_with(&secret, config, &mut rng()).unwrap();
        assert_eq!(split.shares.len(), 5);
        assert_eq!(split.threshold, 3);
        assert_eq!(reconstruct(&split.shares[2..], &split.prime).unwrap(), secret);
    }

    #[test]
    fn test_make_shares_large_secret() {
        let secret = (BigUint::from(1u32) << 300u32) - 12_345u32;
        let split = make_shares(&secret, 9, &mut rng()).unwrap();
        assert!(split.prime > secret);
        assert_eq!(reconstruct(&split.shares[..5], &split.prime).unwrap(), secret);
    }
}
