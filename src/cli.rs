use clap::{Parser, Subcommand};
use num_bigint::BigUint;

use crate::codec;
use crate::commands::{DEMO_SECRET, DEMO_SHARE_COUNT};
use crate::domain::ShareCount;

/// Parses a demo secret of any size
fn parse_demo_secret(s: &str) -> Result<BigUint, String> {
    codec::parse_secret(s).map_err(|e| e.to_string())
}

/// Validates that the share count is within 1..=1024
fn validate_share_count(s: &str) -> Result<ShareCount, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    ShareCount::new(value).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "horcrux")]
#[command(about = "Split a secret integer into shares; any strict majority of them recovers it")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a secret (read from stdin) into shares
    Split {
        /// Number of shares to create; a strict majority is needed to reconstruct
        #[arg(short, long, value_parser = validate_share_count)]
        shares: ShareCount,
    },
    /// Combine shares (read from stdin) to reconstruct the secret
    Combine {
        /// Field prime printed by `split`, in decimal or 0x-prefixed hex
        #[arg(short, long)]
        prime: String,
    },
    /// Split a secret, recover it from a random majority and print both
    Demo {
        /// Secret to split
        #[arg(long, value_parser = parse_demo_secret, default_value_t = BigUint::from(DEMO_SECRET))]
        secret: BigUint,

        /// Number of shares to create
        #[arg(short, long, default_value_t = DEMO_SHARE_COUNT)]
        shares: usize,
    },
}
