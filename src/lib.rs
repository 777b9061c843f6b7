//! Threshold secret sharing over the NIST P-384 prime field
//!
//! A 256-bit secret is split into `N` hex-encoded shares such that any `K` of them
//! recover it and fewer reveal nothing.
//!
//! ```rust
//! use rand::rngs::OsRng;
//! use shamir384::{combine, split_hex};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let shares = split_hex("5ec7e7", 3, 5, &mut OsRng)?;
//! let secret = combine(&shares[..3])?;
//! assert!(secret.to_hex().ends_with("5ec7e7"));
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod combine;
pub mod commands;
pub mod domain;
pub mod error;
pub mod field;
pub mod point;
pub mod split;

pub use codec::Share;
pub use combine::combine;
pub use domain::{Secret, ShareCount, SplitConfig, Threshold};
pub use error::{ArithmeticError, Error, Result, ValidationError};
pub use split::{split, split_hex};
