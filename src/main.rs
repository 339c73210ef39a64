use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::OsRng;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use horcrux::cli::{Cli, Commands};
use horcrux::codec;
use horcrux::commands::{combine_shares, run_demo, split_secret};
use horcrux::domain::{SplitConfig, Threshold};

/// Read the secret securely from stdin (hidden input when TTY available)
fn read_secret() -> Result<String> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter secret (non-negative integer):");
        rpassword::read_password().context("Failed to read secret from stdin")
    } else {
        // Non-interactive mode (piped input) - read directly from stdin
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        let mut secret = String::new();
        handle
            .read_line(&mut secret)
            .context("Failed to read secret from stdin")?;
        Ok(secret.trim().to_string())
    }
}

/// Read shares securely from stdin (hidden input when TTY available)
/// User should input shares one per line, followed by an empty line to finish
fn read_shares() -> Result<Vec<String>> {
    let mut shares = Vec::new();

    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter shares (one per line, empty line to finish):");

        loop {
            let share = rpassword::read_password().context("Failed to read share from stdin")?;

            // Empty line signals we're done
            if share.trim().is_empty() {
                break;
            }

            shares.push(share.trim().to_string());
        }
    } else {
        let stdin = io::stdin();
        let handle = stdin.lock();

        for line in handle.lines() {
            let line = line.context("Failed to read line from stdin")?;
            let trimmed = line.trim();

            // Empty line signals we're done
            if trimmed.is_empty() {
                break;
            }

            shares.push(trimmed.to_string());
        }
    }

    if shares.is_empty() {
        anyhow::bail!("No shares provided");
    }

    Ok(shares)
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Split { shares } => {
            let secret = Zeroizing::new(read_secret()?);
            let config = SplitConfig::new(shares);

            let result = split_secret(&secret, config, &mut OsRng)?;
            println!("{}", result.to_json()?);
        }
        Commands::Combine { prime } => {
            let shares = read_shares()?;
            let secret = Zeroizing::new(combine_shares(&shares, &prime)?);
            println!("{}", &*secret);
        }
        Commands::Demo { secret, shares } => {
            println!("The secret is {secret}");

            let outcome = run_demo(&secret, shares, &mut OsRng)?;
            println!("Field prime is {}", outcome.prime);
            let threshold = Threshold::new(outcome.threshold)?;
            for share in &outcome.quorum {
                println!("Using share {}", codec::encode_share(share, threshold));
            }
            println!("The decrypted secret is {}", outcome.recovered);
        }
    }

    Ok(())
}
