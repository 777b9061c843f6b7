//! Arithmetic in the prime field of the NIST P-384 curve
//!
//! Every [`FieldElement`] is normalized into `[0, P)` on construction, where
//! `P = 2^384 - 2^128 - 2^96 + 2^32 - 1`.

use std::ops::{Add, Mul, Sub};
use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::ArithmeticError;

/// Bit width of the field modulus
pub const FIELD_BITS: usize = 384;

/// Byte width of a fully padded field element
pub const FIELD_BYTES: usize = FIELD_BITS / 8;

/// The P-384 prime (FIPS 186-4, D.1.2.4)
static PRIME: LazyLock<BigUint> = LazyLock::new(|| {
    let one = BigUint::one();
    (&one << 384) - (&one << 128) - (&one << 96) + (&one << 32) - one
});

/// `P - 2`, the exponent for Fermat inversion
static INVERSE_EXPONENT: LazyLock<BigUint> = LazyLock::new(|| &*PRIME - BigUint::from(2u8));

/// Returns the field modulus `P`
#[must_use]
pub fn modulus() -> &'static BigUint {
    &PRIME
}

/// An integer modulo `P`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldElement(BigUint);

impl FieldElement {
    /// Creates a field element, reducing `value` modulo `P`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use num_bigint::BigUint;
    /// use shamir384::field::{FieldElement, modulus};
    ///
    /// let wrapped = FieldElement::new(modulus() + BigUint::from(5u8));
    /// assert_eq!(wrapped, FieldElement::from(5u64));
    /// ```
    #[must_use]
    pub fn new(value: BigUint) -> Self {
        if value < *PRIME {
            Self(value)
        } else {
            Self(value % &*PRIME)
        }
    }

    /// Interprets big-endian bytes as an integer and reduces it modulo `P`
    #[must_use]
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self::new(BigUint::from_bytes_be(bytes))
    }

    /// Wraps `value` only if it is already below `P`
    #[must_use]
    pub fn from_canonical(value: BigUint) -> Option<Self> {
        (value < *PRIME).then_some(Self(value))
    }

    #[must_use]
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    #[must_use]
    pub fn one() -> Self {
        Self(BigUint::one())
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Borrows the underlying integer, always in `[0, P)`
    #[must_use]
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Raises the element to a small non-negative power
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        Self(self.0.modpow(&BigUint::from(exponent), &PRIME))
    }

    /// Multiplicative inverse
    ///
    /// # Errors
    /// Returns [`ArithmeticError::ZeroInverse`] if the element is zero
    pub fn inverse(&self) -> Result<Self, ArithmeticError> {
        if self.is_zero() {
            return Err(ArithmeticError::ZeroInverse);
        }
        Ok(Self(self.0.modpow(&INVERSE_EXPONENT, &PRIME)))
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self::new(BigUint::from(value))
    }
}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &FieldElement) -> FieldElement {
        FieldElement::new(&self.0 + &rhs.0)
    }
}

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &FieldElement) -> FieldElement {
        // Both operands are below P, so adding P keeps the difference non-negative
        FieldElement::new(&self.0 + &*PRIME - &rhs.0)
    }
}

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &FieldElement) -> FieldElement {
        FieldElement::new(&self.0 * &rhs.0)
    }
}

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: FieldElement) -> FieldElement {
        &self + &rhs
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: FieldElement) -> FieldElement {
        &self - &rhs
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: FieldElement) -> FieldElement {
        &self * &rhs
    }
}
