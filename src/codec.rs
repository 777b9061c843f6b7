//! Share string encoding
//!
//! A share packs one [`Point`] into a single integer `x + y * 2^384` and renders it as
//! a fixed-width big-endian hex string.
//!
//! # Layout
//!
//! The integer is padded to `384 * 2 / 8 + 1 = 97` bytes (768 bits of coordinates plus
//! one guard byte), each byte rendered as two lowercase hex characters:
//!
//! ```text
//! | guard (1 byte) | y (48 bytes) | x (48 bytes) |
//! ```
//!
//! Since both coordinates are below the field modulus, the guard byte of a well-formed
//! share is always zero.
//!
//! # Examples
//!
//! ```rust
//! use shamir384::codec::{SHARE_HEX_LEN, decode, encode};
//! use shamir384::field::FieldElement;
//! use shamir384::point::Point;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let point = Point::new(FieldElement::from(7), FieldElement::from(42));
//! let share = encode(&point);
//!
//! assert_eq!(share.as_str().len(), SHARE_HEX_LEN);
//! assert_eq!(decode(share.as_str())?, point);
//! # Ok(())
//! # }
//! ```

use hex::FromHexError;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize, Serializer};
use zeroize::Zeroizing;

use crate::error::{Result, ValidationError};
use crate::field::{FIELD_BYTES, FieldElement};
use crate::point::Point;

/// Number of bytes in a packed share: two coordinates plus one guard byte
pub const SHARE_BYTES: usize = 2 * FIELD_BYTES + 1;

/// Number of hex characters in a share string
pub const SHARE_HEX_LEN: usize = SHARE_BYTES * 2;

/// An encoded share
///
/// Wraps the string in `Zeroizing` to ensure secure memory cleanup.
/// Deserializing validates the string with [`decode`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Share(Zeroizing<String>);

impl Share {
    /// Gets the share as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Share {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &*self.0)
    }
}

impl TryFrom<String> for Share {
    type Error = crate::error::Error;

    fn try_from(value: String) -> Result<Self> {
        let value = Zeroizing::new(value);
        decode(&value)?;
        Ok(Self(value))
    }
}

impl Serialize for Share {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl AsRef<str> for Share {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Writes `value` right-aligned into `slot`
///
/// `value` must fit in `slot`, which holds for any field element in a coordinate slot.
fn write_right_aligned(slot: &mut [u8], value: &BigUint) {
    let bytes = Zeroizing::new(value.to_bytes_be());
    let offset = slot.len() - bytes.len();
    slot[offset..].copy_from_slice(&bytes);
}

/// Encodes a point as a share string
#[must_use]
pub fn encode(point: &Point) -> Share {
    let mut packed = Zeroizing::new([0u8; SHARE_BYTES]);
    let (high, low) = packed.split_at_mut(SHARE_BYTES - FIELD_BYTES);
    write_right_aligned(high, point.y.as_biguint());
    write_right_aligned(low, point.x.as_biguint());

    Share(Zeroizing::new(hex::encode(packed.as_slice())))
}

/// Parses a hex string into the packed share bytes, reporting the first offending character
fn parse_hex_bytes(share: &str) -> Result<Zeroizing<[u8; SHARE_BYTES]>> {
    if share.len() != SHARE_HEX_LEN {
        return Err(ValidationError::InvalidShareLength {
            expected: SHARE_HEX_LEN,
            actual: share.len(),
        }
        .into());
    }

    let mut bytes = Zeroizing::new([0u8; SHARE_BYTES]);
    hex::decode_to_slice(share, bytes.as_mut_slice()).map_err(|err| match err {
        FromHexError::InvalidHexCharacter { index, .. } => {
            ValidationError::InvalidShareHex { position: index }
        }
        // Length was checked above
        _ => {
            ValidationError::InvalidShareLength {
                expected: SHARE_HEX_LEN,
                actual: share.len(),
            }
        }
    })?;
    Ok(bytes)
}

/// Decodes a share string back into a point
///
/// Both lowercase and uppercase hex digits are accepted; [`encode`] always emits lowercase.
///
/// # Errors
/// Returns a validation error if the string is not [`SHARE_HEX_LEN`] bytes long, contains non-hex
/// characters, or carries a coordinate outside the field
pub fn decode(share: &str) -> Result<Point> {
    let bytes = parse_hex_bytes(share)?;
    let (high, low) = bytes.as_slice().split_at(SHARE_BYTES - FIELD_BYTES);

    let x = FieldElement::from_canonical(BigUint::from_bytes_be(low))
        .ok_or(ValidationError::CoordinateOutOfRange)?;
    let y = FieldElement::from_canonical(BigUint::from_bytes_be(high))
        .ok_or(ValidationError::CoordinateOutOfRange)?;

    Ok(Point::new(x, y))
}
