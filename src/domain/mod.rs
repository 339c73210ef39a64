//! Domain types for majority-threshold secret sharing
//!
//! This module contains validated newtypes and configuration for splitting:
//! - [`ShareCount`] - Total number of shares to create (1..=1024)
//! - [`Threshold`] - Minimum shares required for reconstruction (a strict majority)
//! - [`SplitConfig`] - Validated share count and threshold pair

mod config;
mod share_count;
mod threshold;

pub use config::SplitConfig;
pub use share_count::ShareCount;
pub use threshold::Threshold;
