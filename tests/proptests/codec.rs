//! Property tests for share encoding/decoding

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shamir384::codec::{self, SHARE_HEX_LEN};
use shamir384::field::{FIELD_BYTES, FieldElement};
use shamir384::point::Point;

/// Wrapper for arbitrary field elements
#[derive(Clone, Debug)]
struct ArbitraryElement(FieldElement);

impl Arbitrary for ArbitraryElement {
    fn arbitrary(g: &mut Gen) -> Self {
        // Bias towards short values so small coordinates are exercised too
        let len = usize::arbitrary(g) % (FIELD_BYTES + 1);
        let bytes: Vec<u8> = (0..len).map(|_| u8::arbitrary(g)).collect();
        ArbitraryElement(FieldElement::from_bytes_be(&bytes))
    }
}

/// Test that decoding an encoded point returns the same point
#[quickcheck]
fn prop_point_round_trip(x: ArbitraryElement, y: ArbitraryElement) -> bool {
    let point = Point::new(x.0, y.0);
    let share = codec::encode(&point);

    share.as_str().len() == SHARE_HEX_LEN && codec::decode(share.as_str()).as_ref() == Ok(&point)
}

/// Test that a decoded share re-encodes to the identical string
#[quickcheck]
fn prop_share_string_round_trip(x: ArbitraryElement, y: ArbitraryElement) -> bool {
    let share = codec::encode(&Point::new(x.0, y.0));
    let Ok(decoded) = codec::decode(share.as_str()) else {
        return false;
    };
    codec::encode(&decoded) == share
}

/// Test that encoding is deterministic and output is lowercase hex
#[quickcheck]
fn prop_encoding_is_canonical(x: ArbitraryElement, y: ArbitraryElement) -> bool {
    let point = Point::new(x.0, y.0);
    let first = codec::encode(&point);
    let second = codec::encode(&point);

    first == second
        && first
            .as_str()
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

/// Test that arbitrary strings never panic the decoder
#[quickcheck]
fn prop_decode_arbitrary_string_does_not_panic(input: String) -> bool {
    let _ = codec::decode(&input);
    true
}
