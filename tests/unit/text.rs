//! Parsing and formatting.

use super::common::{maximum_text, number, repeated};
use odometer::{Digit, Number, ParseError, MAX_DIGITS};

#[test]
fn test_empty_is_minimum() {
    assert_eq!(Number::parse_or_minimum("").to_string(), "A1");
    assert_eq!(Number::parse(""), Err(ParseError::Empty));
}

#[test]
fn test_round_trip_examples() {
    for text in ["A1", "Z9", "B3-K7-A1", "E4-H5-I6-K7-L8", maximum_text().as_str()] {
        assert_eq!(number(text).to_string(), text);
    }
}

#[test]
fn test_identifier_matches_display() {
    let n = number("C2-X8");
    assert_eq!(n.identifier(), "C2-X8");
}

#[test]
fn test_malformed_inputs_fall_back() {
    let cases = [
        "a1",
        "A",
        "A0",
        "D1",
        "A1-",
        "-A1",
        "A1B2",
        "A1-B2-",
        "A1 - B2",
        " A1",
        "A1\n",
        "AA-11",
        "Ж1",
    ];
    for text in cases {
        assert!(Number::parse(text).is_err(), "{:?} should be rejected", text);
        assert_eq!(Number::parse_or_minimum(text), Number::minimum(), "{:?}", text);
    }
}

#[test]
fn test_too_many_groups() {
    let text = repeated("A1", MAX_DIGITS + 1);
    assert_eq!(
        Number::parse(&text),
        Err(ParseError::TooManyGroups { max: MAX_DIGITS })
    );
}

#[test]
fn test_digits_are_in_text_order() {
    let n = number("B2-C3-E4");
    let texts: Vec<String> = n.digits().map(|d| d.to_string()).collect();
    assert_eq!(texts, ["B2", "C3", "E4"]);
    assert_eq!(n.digits().len(), 3);
}

#[test]
fn test_error_messages() {
    let err = Number::parse("A1-D2").unwrap_err();
    assert_eq!(err.to_string(), "'D' at position 3 is not an allowed letter");
    let err = Number::parse("A1B2").unwrap_err();
    assert_eq!(err.to_string(), "expected '-' at position 2, found 'B'");
}
