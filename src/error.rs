//! Error types for secret sharing operations

use num_bigint::BigUint;
use thiserror::Error;

/// The Result type for secret sharing operations.
pub type Result<T> = std::result::Result<T, SharingError>;

/// Errors raised by the sharing core.
///
/// Every malformed input maps to its own variant so callers can tell a bad
/// share set apart from a bad parameter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharingError {
    /// At least one share must be produced
    #[error("share count must be at least 1 (got {0})")]
    InvalidShareCount(usize),

    /// The prime search range [2^bits, 2^(bits+1)) must contain a prime
    #[error("bit length must be at least 1 (got {0})")]
    InvalidBitLength(u64),

    /// The field modulus must be a prime of at least 2
    #[error("invalid field modulus {0}: must be a prime >= 2")]
    InvalidPrime(BigUint),

    /// Reconstruction was called with an empty share set
    #[error("no shares provided")]
    NoShares,

    /// A share sits at x = 0 (mod p), which is where the secret lives
    #[error("share x-coordinate {0} is zero modulo the field prime")]
    ZeroAbscissa(BigUint),

    /// Two shares have the same x-coordinate modulo the field prime
    #[error("duplicate share x-coordinate {0} (modulo the field prime)")]
    DuplicateAbscissa(BigUint),

    /// Modular inverse of a value that is zero modulo the prime
    #[error("{value} has no inverse modulo {prime}")]
    NotInvertible { value: BigUint, prime: BigUint },
}
