//! Property tests for split/combine workflows

use std::collections::HashSet;

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use shamir384::domain::{SECRET_BYTES, Secret, SplitConfig};
use shamir384::split::{split, split_points};
use shamir384::combine;

/// Wrapper for secrets of 1 to 32 bytes
#[derive(Clone, Debug)]
struct ValidSecret(Vec<u8>);

impl Arbitrary for ValidSecret {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = (usize::arbitrary(g) % SECRET_BYTES) + 1;
        ValidSecret((0..len).map(|_| u8::arbitrary(g)).collect())
    }
}

/// Wrapper for valid threshold and share count pairs
#[derive(Clone, Copy, Debug)]
struct ValidParams {
    threshold: u16,
    num_shares: u16,
}

impl Arbitrary for ValidParams {
    fn arbitrary(g: &mut Gen) -> Self {
        // Share count between 1 and 50
        let num_shares = (u16::arbitrary(g) % 50) + 1;

        // Threshold between 1 and num_shares
        let threshold = (u16::arbitrary(g) % num_shares) + 1;

        ValidParams {
            threshold,
            num_shares,
        }
    }
}

impl ValidParams {
    fn config(self) -> SplitConfig {
        SplitConfig::from_raw(self.threshold, self.num_shares).unwrap()
    }
}

/// Test that any threshold-sized subset of shares recovers the secret
#[quickcheck]
fn prop_split_combine_round_trip(secret: ValidSecret, params: ValidParams, seed: u64) -> bool {
    let secret = Secret::from_bytes(&secret.0).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    let mut shares = split(&secret, params.config(), &mut rng);
    if shares.len() != usize::from(params.num_shares) {
        return false;
    }

    // Random selection of exactly threshold shares
    shares.shuffle(&mut rng);
    let selected = &shares[..usize::from(params.threshold)];

    combine(selected).as_ref() == Ok(&secret)
}

/// Test that using every share (more than threshold) still recovers the secret
#[quickcheck]
fn prop_all_shares_recover(secret: ValidSecret, params: ValidParams, seed: u64) -> bool {
    let secret = Secret::from_bytes(&secret.0).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    let shares = split(&secret, params.config(), &mut rng);
    combine(&shares).as_ref() == Ok(&secret)
}

/// Test that one share fewer than the threshold does not recover the secret
#[quickcheck]
fn prop_insufficient_shares_yield_wrong_secret(
    secret: ValidSecret,
    params: ValidParams,
    seed: u64,
) -> bool {
    if params.threshold < 2 {
        return true;
    }
    let secret = Secret::from_bytes(&secret.0).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    let shares = split(&secret, params.config(), &mut rng);
    let insufficient = &shares[..usize::from(params.threshold - 1)];

    // Wrong answer, not an error
    matches!(combine(insufficient), Ok(recovered) if recovered != secret)
}

/// Test that every split hands out distinct, nonzero x-coordinates
#[quickcheck]
fn prop_x_coordinates_distinct(params: ValidParams, seed: u64) -> bool {
    let secret = Secret::from_hex("00").unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    let points = split_points(&secret, params.config(), &mut rng);
    let xs: HashSet<_> = points.iter().map(|p| p.x.clone()).collect();

    xs.len() == points.len() && xs.iter().all(|x| !x.is_zero())
}
