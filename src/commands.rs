use anyhow::{Context, Result, anyhow, bail};
use num_bigint::BigUint;
use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::codec;
use crate::domain::{ShareCount, SplitConfig};
use crate::primality::{DEFAULT_CONFIDENCE, is_probable_prime};
use crate::reconstruct::reconstruct;
use crate::sharing::{Share, make_shares_with};

/// Secret used by the demo when none is given
pub const DEMO_SECRET: u64 = 1_234_567_890;

/// Number of shares used by the demo when none is given
pub const DEMO_SHARE_COUNT: usize = 7;

/// Result of a split operation (for JSON serialization)
#[derive(Debug, Serialize, Deserialize)]
pub struct SplitResult {
    /// The field prime in decimal; public, required to combine
    pub prime: String,
    /// Threshold required to reconstruct
    pub threshold: usize,
    /// Number of shares generated
    pub share_count: usize,
    /// The generated shares in `horcrux-<threshold>-<x>-<y>` form
    pub shares: Vec<String>,
}

impl SplitResult {
    /// Serializes the result as pretty-printed JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize split result")
    }
}

/// Outcome of a demo run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOutcome {
    pub secret: BigUint,
    pub prime: BigUint,
    pub threshold: usize,
    /// The shares picked for reconstruction, sorted by x
    pub quorum: Vec<Share>,
    pub recovered: BigUint,
}

/// Split a decimal secret into shares encoded as text
///
/// # Errors
/// Returns an error if the secret is not a non-negative decimal integer or
/// share creation fails
pub fn split_secret<R: Rng + ?Sized>(
    secret_str: &str,
    config: SplitConfig,
    rng: &mut R,
) -> Result<SplitResult> {
    let secret = codec::parse_secret(secret_str).context("Failed to parse secret")?;

    let split = make_shares_with(&secret, config, rng).context("Failed to create shares")?;

    let shares = split
        .shares
        .iter()
        .map(|share| codec::encode_share(share, config.threshold()).to_string())
        .collect();

    Ok(SplitResult {
        prime: split.prime.to_string(),
        threshold: split.threshold,
        share_count: *config.share_count(),
        shares,
    })
}

/// Combine encoded shares to reconstruct the original secret
///
/// Returns the reconstructed secret in decimal.
///
/// # Errors
/// Returns an error if the prime is not prime, share decoding fails, the
/// shares disagree on the threshold, a share lies outside the x range of a
/// split with that threshold, fewer shares than the threshold are given, or
/// reconstruction rejects the share set
pub fn combine_shares(share_strings: &[String], prime_str: &str) -> Result<String> {
    if share_strings.is_empty() {
        bail!("No shares provided");
    }

    let prime = codec::parse_prime(prime_str)?;
    if !is_probable_prime(&prime, DEFAULT_CONFIDENCE, &mut rand::thread_rng()) {
        bail!("Field prime {prime} is not prime");
    }

    let mut parsed_shares = Vec::with_capacity(share_strings.len());
    let mut threshold_from_shares = None;

    for (idx, share_str) in share_strings.iter().enumerate() {
        let (threshold, share) = codec::parse_share(share_str)
            .with_context(|| format!("Failed to parse share #{}", idx + 1))?;

        // Validate threshold consistency
        match threshold_from_shares {
            None => {
                threshold_from_shares = Some(threshold);
            }
            Some(t) if t != threshold => {
                bail!(
                    "Share #{} has inconsistent threshold: expected {}, got {}",
                    idx + 1,
                    *t,
                    *threshold
                );
            }
            _ => {}
        }

        parsed_shares.push(share);
    }

    let threshold = threshold_from_shares.ok_or_else(|| anyhow!("No valid shares found"))?;

    let widest = BigUint::from(threshold.widest_share_count());
    if let Some(share) = parsed_shares.iter().find(|share| share.x > widest) {
        bail!(
            "Share x-coordinate {} is out of range for threshold {} (at most {})",
            share.x,
            *threshold,
            widest
        );
    }

    if parsed_shares.len() < *threshold {
        bail!(
            "Insufficient shares: need at least {}, but only {} provided",
            *threshold,
            parsed_shares.len()
        );
    }
    if parsed_shares.len() > *threshold {
        warn!(
            provided = parsed_shares.len(),
            threshold = *threshold,
            "more shares than needed, using all of them"
        );
    }

    let recovered = reconstruct(&parsed_shares, &prime).context("Failed to recover secret")?;

    Ok(recovered.to_string())
}

/// Split a secret, pick a random strict majority of the shares and recover it
///
/// # Errors
/// Returns an error if the share count is invalid or splitting or
/// reconstruction fails
pub fn run_demo<R: Rng + ?Sized>(
    secret: &BigUint,
    share_count: usize,
    rng: &mut R,
) -> Result<DemoOutcome> {
    let config = SplitConfig::new(ShareCount::new(share_count)?);
    let split = make_shares_with(secret, config, rng).context("Failed to create shares")?;

    let mut quorum: Vec<Share> = index::sample(rng, split.shares.len(), split.threshold)
        .into_iter()
        .map(|i| split.shares[i].clone())
        .collect();
    quorum.sort_by(|a, b| a.x.cmp(&b.x));

    let recovered = reconstruct(&quorum, &split.prime).context("Failed to recover secret")?;
    info!(quorum = quorum.len(), "demo reconstruction finished");

    Ok(DemoOutcome {
        secret: secret.clone(),
        prime: split.prime,
        threshold: split.threshold,
        quorum,
        recovered,
    })
}
