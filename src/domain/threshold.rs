//! Threshold newtype for secret sharing

use crate::error::{Result, ValidationError};

/// Threshold for secret sharing (at least 1)
///
/// Invariant: threshold >= 1 (enforced at construction)
/// A threshold of 1 is allowed: the sharing polynomial is then the constant secret
/// and every share reveals it on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u16);

impl Threshold {
    /// Minimum valid threshold
    pub const MIN: u16 = 1;

    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns [`ValidationError::ThresholdTooSmall`] if the threshold is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir384::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// // Invalid: threshold must be at least 1
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: u16) -> Result<Self> {
        if value < Self::MIN {
            return Err(ValidationError::ThresholdTooSmall.into());
        }
        Ok(Self(value))
    }

    /// Degree of the sharing polynomial
    #[must_use]
    pub fn degree(self) -> usize {
        usize::from(self.0) - 1
    }
}

impl std::ops::Deref for Threshold {
    type Target = u16;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rejected() {
        assert_eq!(
            Threshold::new(0).unwrap_err().to_string(),
            "Threshold must be at least 1"
        );
    }

    #[test]
    fn test_degree() {
        assert_eq!(Threshold::new(1).unwrap().degree(), 0);
        assert_eq!(Threshold::new(5).unwrap().degree(), 4);
    }
}
