//! JSON form of the value types.

use super::common::number;
use odometer::{CompositeDigit, Number};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Ticket {
    id: Number,
    shelf: CompositeDigit,
}

#[test]
fn test_struct_round_trip() {
    let ticket = Ticket {
        id: number("B3-K7-A1"),
        shelf: "E4".parse().unwrap(),
    };
    let json = serde_json::to_string(&ticket).unwrap();
    assert_eq!(json, r#"{"id":"B3-K7-A1","shelf":"E4"}"#);
    let back: Ticket = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ticket);
}

#[test]
fn test_invalid_id_is_an_error_not_a_fallback() {
    let err = serde_json::from_str::<Ticket>(r#"{"id":"B3-K0","shelf":"E4"}"#).unwrap_err();
    assert!(err.to_string().contains("not an allowed numeral"), "{}", err);
}
