//! Text encoding for shares
//!
//! A share is printed as a single line with embedded metadata:
//!
//! ```text
//! horcrux-<threshold>-<x>-<y as lowercase hex>
//! ```
//!
//! - A version word (`"horcrux"`) to identify the format
//! - The threshold in decimal, so a combine can check it has enough shares
//! - The x-coordinate in decimal
//! - The y-coordinate in hex
//!
//! The field prime is public and travels separately.
//!
//! # Examples
//!
//! ```rust
//! use horcrux::codec::{encode_share, parse_share};
//! use horcrux::domain::Threshold;
//! use horcrux::Share;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let share = Share::new(3u32, 0xbeefu32);
//! let threshold = Threshold::new(4)?;
//!
//! let encoded = encode_share(&share, threshold);
//! assert_eq!(encoded.as_str(), "horcrux-4-3-beef");
//!
//! let (parsed_threshold, parsed_share) = parse_share(encoded.as_str())?;
//! assert_eq!(parsed_threshold, threshold);
//! assert_eq!(parsed_share, share);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result, bail};
use num_bigint::BigUint;
use num_traits::{Num, Zero};
use zeroize::Zeroizing;

use crate::domain::Threshold;
use crate::sharing::Share;

/// Version word that identifies the horcrux share format
pub const VERSION_WORD: &str = "horcrux";

const SEPARATOR: char = '-';

/// A share encoded as text
///
/// Wraps the string in `Zeroizing` to ensure secure memory cleanup.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedShare(Zeroizing<String>);

impl EncodedShare {
    /// Gets the encoded share as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EncodedShare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &*self.0)
    }
}

/// Encodes a share together with the threshold it was split with
#[must_use]
pub fn encode_share(share: &Share, threshold: Threshold) -> EncodedShare {
    EncodedShare(Zeroizing::new(format!(
        "{VERSION_WORD}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}",
        *threshold,
        share.x,
        share.y.to_str_radix(16)
    )))
}

/// Parses an encoded share back into its threshold and point
///
/// Surrounding whitespace is ignored and hex digits may be upper case.
///
/// # Errors
/// Returns an error if the version word is missing, a field is missing or
/// malformed, the threshold is zero, or the x-coordinate is zero
pub fn parse_share(encoded: &str) -> Result<(Threshold, Share)> {
    let mut fields = encoded.trim().split(SEPARATOR);

    let version = fields.next().unwrap_or_default();
    if version != VERSION_WORD {
        bail!("Invalid version word: expected '{VERSION_WORD}', got '{version}'");
    }

    let (Some(threshold), Some(x), Some(y), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        bail!("Expected {VERSION_WORD}-<threshold>-<x>-<y>");
    };

    let threshold = parse_digits(threshold, 10)
        .with_context(|| format!("Invalid threshold '{threshold}'"))?;
    let threshold = usize::try_from(threshold).context("Threshold is too large")?;
    let threshold = Threshold::new(threshold)?;

    let x = parse_digits(x, 10).with_context(|| format!("Invalid x-coordinate '{x}'"))?;
    if x.is_zero() {
        bail!("Share x-coordinate must not be 0");
    }

    let y = parse_digits(y, 16).context("Invalid share value: expected hex digits")?;

    Ok((threshold, Share { x, y }))
}

/// Parses a field prime written in decimal or as `0x`-prefixed hex
///
/// # Errors
/// Returns an error if the text is not a non-negative integer
pub fn parse_prime(text: &str) -> Result<BigUint> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => parse_digits(hex, 16),
        None => parse_digits(text, 10),
    };
    parsed.with_context(|| format!("Invalid prime '{text}'"))
}

/// Parses a secret written in decimal
///
/// # Errors
/// Returns an error if the secret is negative or not a decimal integer
pub fn parse_secret(text: &str) -> Result<BigUint> {
    let text = text.trim();
    if text.starts_with('-') {
        bail!("Secret must be a non-negative integer");
    }
    parse_digits(text, 10).context("Secret must be a decimal integer")
}

/// Parses a non-empty run of plain digits in `radix`
///
/// `from_str_radix` alone also takes a leading `+` and `_` separators.
fn parse_digits(text: &str, radix: u32) -> Result<BigUint> {
    if text.is_empty() {
        bail!("expected digits, got nothing");
    }
    if let Some(bad) = text.chars().find(|c| !c.is_digit(radix)) {
        bail!("unexpected character '{bad}'");
    }
    Ok(BigUint::from_str_radix(text, radix)?)
}
