//! UInt invariant tests
//!
//! Concrete scenarios for construction, ordering, rendering and the wire
//! layout, exercised through the public facade.

use crate::common::*;

#[test]
fn of_returns_stored_value() {
    for v in [0, 1, 17, 42, 65_535, i32::MAX] {
        assert_eq!(uint(v).value(), v);
    }
}

#[test]
fn of_minus_one_names_the_value() {
    let err = UInt::of(-1).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("-1"));
    assert!(err.to_string().contains("negative"));
}

#[test]
fn no_clamping_to_zero() {
    for v in [-1, -3, -1000, i32::MIN] {
        assert!(UInt::of(v).is_err(), "{} must be rejected", v);
    }
}

#[test]
fn ordering_is_by_value() {
    assert!(uint(3) < uint(5));
    assert_eq!(uint(5), uint(5));
    assert_eq!(uint(5).cmp(&uint(5)), std::cmp::Ordering::Equal);

    let values = [uint(9), uint(0), uint(4)];
    assert_eq!(values.iter().min(), Some(&UInt::ZERO));
    assert_eq!(values.iter().max(), Some(&uint(9)));
}

#[test]
fn canonical_text_form() {
    assert_eq!(uint(0).to_string(), "0");
    assert_eq!(uint(42).to_string(), "42");
    assert_eq!(uint(100).to_string(), "100");

    for v in [0, 5, 10, 1_000_000, i32::MAX] {
        let text = uint(v).to_string();
        assert!(!text.starts_with('+'));
        assert!(text == "0" || !text.starts_with('0'));
        assert!(!text.contains(','));
    }
}

#[test]
fn encode_seventeen_scenario() {
    let bytes = encode(uint(17));
    assert_eq!(bytes, [0x00, 0x00, 0x00, 0x11]);
    assert_eq!(decode(&bytes).unwrap(), uint(17));
}

#[test]
fn nullable_absent_scenario() {
    let bytes = encode_nullable(None);
    assert_eq!(bytes, [0xFF, 0xFF, 0xFF, 0xFF]);
    assert_eq!(decode_nullable(&bytes).unwrap(), None);
}

#[test]
fn non_nullable_decode_rejects_negative_cells() {
    for v in [-1, -2, i32::MIN] {
        let err = decode(&v.to_be_bytes()).unwrap_err();
        assert!(err.is_invalid_argument(), "{} must be rejected", v);
    }
}

#[test]
fn nullable_decode_rejects_non_sentinel_negatives() {
    for v in [-2, -17, i32::MIN] {
        let err = decode_nullable(&v.to_be_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { value } if value == v as i64));
    }
}

#[test]
fn sentinel_is_never_a_valid_present_value() {
    assert!(UInt::of(NULL_SENTINEL).is_err());
}

#[test]
fn shared_across_threads() {
    let v = uint(7);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || encode(v)))
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), [0, 0, 0, 7]);
    }
}

#[test]
fn json_document_field() {
    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Waypoint {
        name: String,
        sat: Option<UInt>,
    }

    let wpt = Waypoint {
        name: "summit".to_string(),
        sat: Some(uint(8)),
    };
    let json = serde_json::to_string(&wpt).unwrap();
    assert_eq!(json, r#"{"name":"summit","sat":8}"#);
    assert_eq!(serde_json::from_str::<Waypoint>(&json).unwrap(), wpt);

    let bad = r#"{"name":"summit","sat":-4}"#;
    let err = serde_json::from_str::<Waypoint>(bad).unwrap_err();
    assert!(err.to_string().contains("-4 is negative."));
}
