//! Error types for splitting and combining secrets

use thiserror::Error;

/// Input rejected before any arithmetic takes place
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Threshold must be at least 1
    #[error("Threshold must be at least 1")]
    ThresholdTooSmall,

    /// More shares would be required than exist
    #[error("Threshold {threshold} cannot exceed share count {total}")]
    ThresholdExceedsTotal { threshold: u16, total: u16 },

    #[error("Share count must be at least 1")]
    ShareCountZero,

    #[error("Secret is empty")]
    EmptySecret,

    #[error("Secret is not a valid hex string")]
    InvalidSecretHex,

    /// Secrets are fixed at 256 bits
    #[error("Secret is {bits} bits wide, maximum is 256")]
    SecretTooWide { bits: u64 },

    #[error("Share must be {expected} hex characters, got {actual}")]
    InvalidShareLength { expected: usize, actual: usize },

    #[error("Share contains a non-hex character at position {position}")]
    InvalidShareHex { position: usize },

    /// A decoded coordinate is not below the field modulus
    #[error("Share coordinate is outside the field")]
    CoordinateOutOfRange,

    #[error("Share has x-coordinate 0, which is reserved for the secret")]
    ZeroCoordinate,

    #[error("Two shares have the same x-coordinate")]
    DuplicateCoordinate,

    #[error("No shares provided")]
    NoShares,
}

/// Field arithmetic fault
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Zero has no multiplicative inverse")]
    ZeroInverse,
}

/// Error type for all library operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

pub type Result<T> = std::result::Result<T, Error>;
