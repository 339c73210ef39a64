//! Majority-threshold secret sharing over a prime field
//!
//! A secret integer is split into `n` shares; any `n / 2 + 1` of them
//! recover it exactly, fewer reveal nothing. The field prime is found with a
//! Miller-Rabin search, shares are points on a random polynomial whose
//! constant term is the secret, and reconstruction is Lagrange interpolation
//! at zero.
//!
//! Every function that needs randomness takes the generator as an argument.
//! Use a cryptographically secure one (such as `rand::rngs::OsRng`) for real
//! secrets; seeded generators are only for reproducible tests.

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod field;
pub mod polynomial;
pub mod primality;
pub mod reconstruct;
pub mod sharing;

pub use error::{Result, SharingError};
pub use primality::{DEFAULT_CONFIDENCE, find_prime, is_probable_prime};
pub use reconstruct::reconstruct;
pub use sharing::{Share, SharedSecret, make_shares};
