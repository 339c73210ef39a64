//! Polynomials over a prime field
//!
//! A polynomial is its coefficient list `[a0, a1, ..., a_d]`, lowest degree
//! first.

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;

use crate::sharing::Share;

/// Draws `degree` random coefficients, each uniform in `[1, prime - 1]`.
///
/// `prime` must be at least 2.
pub fn create_polynomial<R: Rng + ?Sized>(
    degree: usize,
    prime: &BigUint,
    rng: &mut R,
) -> Vec<BigUint> {
    let one = BigUint::one();
    (0..degree)
        .map(|_| rng.gen_biguint_range(&one, prime))
        .collect()
}

/// Evaluates `poly` at `x`, reduced modulo `prime`.
#[must_use]
pub fn evaluate(poly: &[BigUint], x: &BigUint, prime: &BigUint) -> BigUint {
    // Horner: reducing at each step is congruent to reducing the full sum once
    poly.iter()
        .rev()
        .fold(BigUint::zero(), |acc, coefficient| (acc * x + coefficient) % prime)
}

/// Samples `poly` at `x = 1, 2, ..., n`.
///
/// # Examples
///
/// ```rust
/// use horcrux::polynomial::sample_polynomial;
/// use num_bigint::BigUint;
///
/// // f(x) = 5 + 3x over GF(11)
/// let poly = [BigUint::from(5u32), BigUint::from(3u32)];
/// let points = sample_polynomial(&poly, 3, &BigUint::from(11u32));
///
/// let ys: Vec<_> = points.iter().map(|p| p.y.clone()).collect();
/// assert_eq!(ys, [8u32, 0, 3].map(BigUint::from));
/// ```
#[must_use]
pub fn sample_polynomial(poly: &[BigUint], n: usize, prime: &BigUint) -> Vec<Share> {
    (1..=n)
        .map(|x| {
            let x = BigUint::from(x);
            let y = evaluate(poly, &x, prime);
            Share { x, y }
        })
        .collect()
}
