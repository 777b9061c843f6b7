//! `ShareCount` newtype for secret sharing

use crate::error::{Result, ValidationError};

/// Number of shares to create (at least 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u16);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: u16 = 1;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns [`ValidationError::ShareCountZero`] if count is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir384::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// ```
    pub fn new(value: u16) -> Result<Self> {
        if value < Self::MIN {
            return Err(ValidationError::ShareCountZero.into());
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u16;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
