//! `ShareCount` newtype for secret sharing

use anyhow::{Result, bail};

/// Number of shares to create (1..=1024)
///
/// Each share is evaluated at its own x-coordinate `1..=n`, so the count also
/// bounds the largest x-coordinate handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(usize);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: usize = 1;

    /// Maximum valid share count
    pub const MAX: usize = 1024;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns an error if count is 0 or above [`ShareCount::MAX`]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use horcrux::domain::ShareCount;
    ///
    /// let count = ShareCount::new(7).unwrap();
    /// assert_eq!(*count, 7);
    ///
    /// let max_count = ShareCount::new(ShareCount::MAX).unwrap();
    /// assert_eq!(*max_count, 1024);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// assert!(ShareCount::new(1025).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value < Self::MIN {
            bail!("Share count must be at least {}", Self::MIN);
        }
        if value > Self::MAX {
            bail!("Share count maximum is {} (got {value})", Self::MAX);
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
