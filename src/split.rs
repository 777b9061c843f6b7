//! Splitting a secret into shares
//!
//! The secret becomes the constant term of a random polynomial of degree
//! `threshold - 1`; each share is one evaluation of that polynomial at a random,
//! nonzero, unique x-coordinate.

use std::collections::HashSet;

use num_bigint::{BigUint, RandBigInt};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::codec::{self, Share};
use crate::domain::{SECRET_BITS, SECRET_BYTES, Secret, SplitConfig};
use crate::error::Result;
use crate::field::{FieldElement, modulus};
use crate::point::Point;

/// Bytes of entropy drawn for each random coefficient
const COEFFICIENT_BYTES: usize = SECRET_BYTES;

/// Sharing polynomial, lowest degree first
///
/// `coefficients[0]` is the secret. Never leaves this module.
struct Polynomial {
    coefficients: Vec<FieldElement>,
}

impl Polynomial {
    /// Builds `f(x) = c_d x^d + ... + c_1 x + secret` with `degree` random coefficients
    fn random<R: RngCore + CryptoRng>(secret: FieldElement, degree: usize, rng: &mut R) -> Self {
        let mut coefficients = Vec::with_capacity(degree + 1);
        coefficients.push(secret);

        let mut entropy = Zeroizing::new([0u8; COEFFICIENT_BYTES]);
        for _ in 0..degree {
            rng.fill_bytes(&mut entropy[..]);
            let value = BigUint::from_bytes_be(&entropy[..]);
            // 256-bit values are always below the 384-bit modulus
            debug_assert!(value.bits() <= SECRET_BITS && value < *modulus());
            coefficients.push(FieldElement::new(value));
        }

        Self { coefficients }
    }

    /// Evaluates the polynomial with Horner's rule
    fn evaluate(&self, x: &FieldElement) -> FieldElement {
        self.coefficients
            .iter()
            .rev()
            .fold(FieldElement::zero(), |acc, coefficient| {
                &(&acc * x) + coefficient
            })
    }
}

/// Draws a uniformly random x in `[1, P)` not present in `used`
fn draw_unique_x<R: RngCore + CryptoRng>(
    rng: &mut R,
    used: &mut HashSet<FieldElement>,
) -> FieldElement {
    loop {
        let candidate = FieldElement::new(rng.gen_biguint_range(&BigUint::from(1u8), modulus()));
        if used.insert(candidate.clone()) {
            return candidate;
        }
    }
}

/// Splits a secret into points on a random polynomial
///
/// Returns `config.share_count()` points with pairwise distinct, nonzero x-coordinates.
/// Any `config.threshold()` of them determine the secret.
pub fn split_points<R: RngCore + CryptoRng>(
    secret: &Secret,
    config: SplitConfig,
    rng: &mut R,
) -> Vec<Point> {
    let polynomial = Polynomial::random(
        secret.to_field_element(),
        config.threshold().degree(),
        rng,
    );

    let share_count = usize::from(*config.share_count());
    let mut used = HashSet::with_capacity(share_count);

    (0..share_count)
        .map(|_| {
            let x = draw_unique_x(rng, &mut used);
            let y = polynomial.evaluate(&x);
            Point::new(x, y)
        })
        .collect()
}

/// Splits a secret into encoded shares
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use shamir384::combine::combine;
/// use shamir384::domain::{Secret, SplitConfig};
/// use shamir384::split::split;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let secret = Secret::from_hex("c0ffee")?;
/// let config = SplitConfig::from_raw(2, 3)?;
///
/// let shares = split(&secret, config, &mut OsRng);
/// assert_eq!(shares.len(), 3);
///
/// let recovered = combine(&shares[1..])?;
/// assert_eq!(recovered, secret);
/// # Ok(())
/// # }
/// ```
pub fn split<R: RngCore + CryptoRng>(
    secret: &Secret,
    config: SplitConfig,
    rng: &mut R,
) -> Vec<Share> {
    split_points(secret, config, rng)
        .iter()
        .map(codec::encode)
        .collect()
}

/// Validates raw inputs, then splits
///
/// # Errors
/// Returns a validation error if the secret is malformed or wider than 256 bits,
/// if `threshold < 1`, or if `threshold > total`
pub fn split_hex<R: RngCore + CryptoRng>(
    secret_hex: &str,
    threshold: u16,
    total: u16,
    rng: &mut R,
) -> Result<Vec<Share>> {
    let config = SplitConfig::from_raw(threshold, total)?;
    let secret = Secret::from_hex(secret_hex)?;
    Ok(split(&secret, config, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ValidationError};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_polynomial_constant_term_is_secret() {
        let secret = FieldElement::from(1234);
        let polynomial = Polynomial::random(secret.clone(), 4, &mut rng());
        assert_eq!(polynomial.coefficients.len(), 5);
        assert_eq!(polynomial.evaluate(&FieldElement::zero()), secret);
    }

    #[test]
    fn test_polynomial_evaluation_matches_power_sum() {
        let polynomial = Polynomial::random(FieldElement::from(9), 3, &mut rng());
        let x = FieldElement::from(0xdead_beef);
        let expected = polynomial
            .coefficients
            .iter()
            .zip(0u32..)
            .fold(FieldElement::zero(), |acc, (c, power)| {
                &acc + &(c * &x.pow(power))
            });
        assert_eq!(polynomial.evaluate(&x), expected);
    }

    #[test]
    fn test_coefficients_fit_in_256_bits() {
        let polynomial = Polynomial::random(FieldElement::zero(), 64, &mut rng());
        for coefficient in &polynomial.coefficients[1..] {
            assert!(coefficient.as_biguint().bits() <= SECRET_BITS);
        }
    }

    #[test]
    fn test_degree_zero_shares_carry_secret() {
        let secret = Secret::from_hex("42").unwrap();
        let config = SplitConfig::from_raw(1, 4).unwrap();
        for point in split_points(&secret, config, &mut rng()) {
            assert_eq!(point.y, secret.to_field_element());
        }
    }

    #[test]
    fn test_x_coordinates_unique_and_nonzero() {
        let secret = Secret::from_hex("01").unwrap();
        let config = SplitConfig::from_raw(3, 50).unwrap();
        let points = split_points(&secret, config, &mut rng());
        let xs: HashSet<_> = points.iter().map(|p| p.x.clone()).collect();
        assert_eq!(xs.len(), 50);
        assert!(xs.iter().all(|x| !x.is_zero()));
    }

    #[test]
    fn test_seeded_split_is_deterministic() {
        let secret = Secret::from_hex("abcdef").unwrap();
        let config = SplitConfig::from_raw(2, 3).unwrap();
        assert_eq!(
            split(&secret, config, &mut rng()),
            split(&secret, config, &mut rng())
        );
    }

    #[test]
    fn test_split_hex_rejects_threshold_above_total() {
        assert_eq!(
            split_hex("abcd", 5, 3, &mut rng()).unwrap_err(),
            Error::Validation(ValidationError::ThresholdExceedsTotal {
                threshold: 5,
                total: 3
            })
        );
    }

    #[test]
    fn test_split_hex_rejects_bad_secret() {
        assert!(matches!(
            split_hex("not hex", 2, 3, &mut rng()),
            Err(Error::Validation(ValidationError::InvalidSecretHex))
        ));
    }
}
