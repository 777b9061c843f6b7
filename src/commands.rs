use anyhow::{Context, Result, bail};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::codec::{self, Share};
use crate::combine::{PointSet, combine_points};
use crate::domain::{Secret, SplitConfig};
use crate::split;

/// Result of a split operation (for JSON serialization)
#[derive(Debug, Serialize, Deserialize)]
pub struct SplitResult {
    /// The generated shares, 194 hex characters each
    pub shares: Vec<Share>,
    /// Number of shares generated
    pub share_count: u16,
    /// Threshold required to reconstruct
    pub threshold: u16,
}

/// Result of a combine operation (for JSON serialization)
#[derive(Debug, Serialize, Deserialize)]
pub struct CombineResult {
    /// The reconstructed secret as hex
    pub secret: Zeroizing<String>,
}

/// Split a hex secret into shares using the operating system's random source
///
/// # Errors
/// Returns an error if the secret is not valid hex or is wider than 256 bits
pub fn split_secret(secret_hex: &str, config: SplitConfig) -> Result<SplitResult> {
    let secret = Secret::from_hex(secret_hex).context("Failed to parse secret")?;

    let shares = split::split(&secret, config, &mut OsRng);

    Ok(SplitResult {
        shares,
        share_count: *config.share_count(),
        threshold: *config.threshold(),
    })
}

/// Combine shares to reconstruct the original secret
///
/// Returns the reconstructed secret as hex, at least 64 characters long.
///
/// # Errors
/// Returns an error if no shares are given, or if any share is malformed,
/// has x-coordinate zero, or repeats another share's x-coordinate
pub fn combine_shares<S: AsRef<str>>(share_strings: &[S]) -> Result<Zeroizing<String>> {
    if share_strings.is_empty() {
        bail!("No shares provided");
    }

    let mut points = PointSet::new();
    for (idx, share_str) in share_strings.iter().enumerate() {
        // Decode share string into a point
        let point = codec::decode(share_str.as_ref().trim())
            .with_context(|| format!("Failed to decode share #{}", idx + 1))?;

        // Reject zero and repeated x-coordinates
        points
            .insert(point)
            .with_context(|| format!("Share #{} cannot be used", idx + 1))?;
    }

    // Interpolate at x = 0
    let secret = combine_points(&points).context("Failed to recover secret")?;
    Ok(secret.to_hex())
}
