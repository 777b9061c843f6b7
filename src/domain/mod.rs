//! Domain types for threshold secret sharing
//!
//! This module contains validated newtypes and configuration for splitting a secret:
//! - [`Threshold`] - Minimum shares required for reconstruction (at least 1)
//! - [`ShareCount`] - Total number of shares to create (at least 1)
//! - [`SplitConfig`] - Validated threshold and share count pair
//! - [`Secret`] - A secret of at most 256 bits

mod config;
mod secret;
mod share_count;
mod threshold;

pub use config::SplitConfig;
pub use secret::{SECRET_BITS, SECRET_BYTES, Secret};
pub use share_count::ShareCount;
pub use threshold::Threshold;
