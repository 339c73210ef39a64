//! Configuration validation for secret sharing splits

use super::{ShareCount, Threshold};

/// Validated pair of share count and threshold
///
/// Enforces the invariant that the threshold is the strict majority of the
/// share count, which is the only threshold the sharing scheme produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitConfig {
    threshold: Threshold,
    share_count: ShareCount,
}

impl SplitConfig {
    /// Creates a split configuration with the majority threshold
    ///
    /// # Examples
    ///
    /// ```rust
    /// use horcrux::domain::{ShareCount, SplitConfig};
    ///
    /// let config = SplitConfig::new(ShareCount::new(7).unwrap());
    ///
    /// assert_eq!(*config.threshold(), 4);
    /// assert_eq!(*config.share_count(), 7);
    /// ```
    #[must_use]
    pub fn new(share_count: ShareCount) -> Self {
        Self {
            threshold: Threshold::majority_of(share_count),
            share_count,
        }
    }

    /// Gets the threshold value
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the share count value
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }
}
