//! Threshold newtype for secret sharing

use anyhow::Result;

use super::ShareCount;

/// Number of shares needed to reconstruct a secret
///
/// Invariant: threshold >= 1. Splits always use a strict majority of the
/// share count, see [`Threshold::majority_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(usize);

impl Threshold {
    /// Creates a threshold from a raw value, returning an error if value < 1
    ///
    /// # Errors
    /// Returns an error if the threshold is zero
    ///
    /// # Examples
    ///
    /// ```rust
    /// use horcrux::domain::Threshold;
    ///
    /// let threshold = Threshold::new(4).unwrap();
    /// assert_eq!(*threshold, 4);
    ///
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value < 1 {
            anyhow::bail!("Threshold must be at least 1 (got {value})");
        }
        Ok(Self(value))
    }

    /// Strict majority of `count`: `count / 2 + 1`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use horcrux::domain::{ShareCount, Threshold};
    ///
    /// assert_eq!(*Threshold::majority_of(ShareCount::new(7).unwrap()), 4);
    /// assert_eq!(*Threshold::majority_of(ShareCount::new(6).unwrap()), 4);
    /// assert_eq!(*Threshold::majority_of(ShareCount::new(1).unwrap()), 1);
    /// ```
    #[must_use]
    pub fn majority_of(count: ShareCount) -> Self {
        Self(crate::sharing::threshold_for(*count))
    }

    /// Largest share count whose majority is this threshold: `2k - 1`
    ///
    /// Shares from such a split sit at `x = 1..=2k - 1`, so an x-coordinate
    /// past this bound cannot come from a split with this threshold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use horcrux::domain::Threshold;
    ///
    /// assert_eq!(Threshold::new(4).unwrap().widest_share_count(), 7);
    /// assert_eq!(Threshold::new(1).unwrap().widest_share_count(), 1);
    /// ```
    #[must_use]
    pub fn widest_share_count(self) -> usize {
        self.0.saturating_mul(2) - 1
    }
}

impl std::ops::Deref for Threshold {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
