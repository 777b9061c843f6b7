//! `Secret` newtype holding the value being shared

use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::error::{Result, ValidationError};
use crate::field::FieldElement;

/// Fixed secret width in bits
pub const SECRET_BITS: u64 = 256;

/// Fixed secret width in bytes
pub const SECRET_BYTES: usize = 32;

/// A secret integer of at most 256 bits
///
/// Stored as big-endian bytes, left-padded to [`SECRET_BYTES`], inside `Zeroizing`.
/// A secret recovered from too few shares may be wider than 256 bits; it is then
/// kept at its full byte width rather than truncated.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Zeroizing<Vec<u8>>);

impl Secret {
    /// Parses a hex-encoded secret
    ///
    /// An optional `0x` prefix is accepted. The value may use any number of hex
    /// digits as long as it fits in 256 bits.
    ///
    /// # Errors
    /// Returns a validation error if the string is empty, is not hex, or encodes a
    /// value wider than 256 bits
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir384::domain::Secret;
    ///
    /// let secret = Secret::from_hex("00").unwrap();
    /// assert_eq!(secret.to_hex().as_str(), "0".repeat(64));
    ///
    /// assert!(Secret::from_hex("").is_err());
    /// assert!(Secret::from_hex("xyz").is_err());
    /// assert!(Secret::from_hex(&"f".repeat(65)).is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix("0x")
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);

        if digits.is_empty() {
            return Err(ValidationError::EmptySecret.into());
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidSecretHex.into());
        }

        let value = BigUint::parse_bytes(digits.as_bytes(), 16)
            .ok_or(ValidationError::InvalidSecretHex)?;
        Self::from_value(&value)
    }

    /// Wraps big-endian bytes as a secret
    ///
    /// # Errors
    /// Returns [`ValidationError::SecretTooWide`] if the value exceeds 256 bits
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_value(&BigUint::from_bytes_be(bytes))
    }

    fn from_value(value: &BigUint) -> Result<Self> {
        let bits = value.bits();
        if bits > SECRET_BITS {
            return Err(ValidationError::SecretTooWide { bits }.into());
        }
        Ok(Self::padded(value))
    }

    /// Builds a secret from a recovered field element without a width check
    pub(crate) fn from_field_element(element: &FieldElement) -> Self {
        Self::padded(element.as_biguint())
    }

    fn padded(value: &BigUint) -> Self {
        let raw = Zeroizing::new(value.to_bytes_be());
        let width = raw.len().max(SECRET_BYTES);
        let mut bytes = Zeroizing::new(vec![0u8; width]);
        bytes[width - raw.len()..].copy_from_slice(&raw);
        Self(bytes)
    }

    /// The secret as a field element (the constant term of the sharing polynomial)
    #[must_use]
    pub fn to_field_element(&self) -> FieldElement {
        FieldElement::from_bytes_be(self.as_bytes())
    }

    /// Big-endian bytes, at least [`SECRET_BYTES`] long
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex rendering, at least 64 characters
    #[must_use]
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.as_bytes()))
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret([REDACTED])")
    }
}
