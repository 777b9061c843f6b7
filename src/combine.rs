//! Recovering a secret from shares
//!
//! Shares are decoded into points, collected into a [`PointSet`], and the
//! interpolating polynomial is evaluated at `x = 0` with the Lagrange formula.
//!
//! No threshold travels with the shares: supplying fewer shares than the split
//! required yields a wrong value, not an error.

use std::collections::HashSet;

use crate::codec;
use crate::domain::Secret;
use crate::error::{ArithmeticError, Result, ValidationError};
use crate::field::FieldElement;
use crate::point::Point;

/// Points keyed by x-coordinate
///
/// Insertion rejects an x of zero and any x already present. A repeated x is
/// never overwritten, even when the y values agree.
#[derive(Debug, Default)]
pub struct PointSet {
    points: Vec<Point>,
    xs: HashSet<FieldElement>,
}

impl PointSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a point
    ///
    /// # Errors
    /// Returns [`ValidationError::ZeroCoordinate`] for `x = 0` and
    /// [`ValidationError::DuplicateCoordinate`] if `x` was already inserted
    pub fn insert(&mut self, point: Point) -> Result<()> {
        if point.x.is_zero() {
            return Err(ValidationError::ZeroCoordinate.into());
        }
        if !self.xs.insert(point.x.clone()) {
            return Err(ValidationError::DuplicateCoordinate.into());
        }
        self.points.push(point);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in insertion order
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Evaluates the polynomial through `points` at `x = 0`
///
/// Computes `sum_i y_i * prod_{j != i} (0 - x_j) / (x_i - x_j)`.
///
/// # Errors
/// Returns [`ArithmeticError::ZeroInverse`] if two points share an x-coordinate
pub fn interpolate_at_zero(points: &[Point]) -> std::result::Result<FieldElement, ArithmeticError> {
    let zero = FieldElement::zero();
    let mut secret = FieldElement::zero();

    for (i, point_i) in points.iter().enumerate() {
        let mut numerator = FieldElement::one();
        let mut denominator = FieldElement::one();

        for (j, point_j) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = &numerator * &(&zero - &point_j.x);
            denominator = &denominator * &(&point_i.x - &point_j.x);
        }

        let basis = &numerator * &denominator.inverse()?;
        secret = &secret + &(&point_i.y * &basis);
    }

    Ok(secret)
}

/// Recovers the secret from a set of points
///
/// # Errors
/// Returns [`ValidationError::NoShares`] for an empty set
pub fn combine_points(points: &PointSet) -> Result<Secret> {
    if points.is_empty() {
        return Err(ValidationError::NoShares.into());
    }
    let value = interpolate_at_zero(points.points())?;
    Ok(Secret::from_field_element(&value))
}

/// Recovers the secret from encoded shares
///
/// # Errors
/// Returns a validation error if no shares are given, a share cannot be decoded,
/// a share has x-coordinate 0, or two shares have the same x-coordinate
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use shamir384::combine::combine;
/// use shamir384::split::split_hex;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let shares = split_hex("00", 2, 3, &mut OsRng)?;
/// let secret = combine(&[&shares[0], &shares[2]])?;
/// assert_eq!(secret.to_hex().as_str(), "0".repeat(64));
/// # Ok(())
/// # }
/// ```
pub fn combine<S: AsRef<str>>(shares: &[S]) -> Result<Secret> {
    let mut points = PointSet::new();
    for share in shares {
        points.insert(codec::decode(share.as_ref())?)?;
    }
    combine_points(&points)
}
