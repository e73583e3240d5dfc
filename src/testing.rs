//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::digit::{CompositeDigit, LetterDigit, NumeralDigit};
use crate::number::{Number, MAX_DIGITS};

/// Parse a number that the test knows is valid.
pub fn number(text: &str) -> Number {
    Number::parse(text).unwrap_or_else(|e| panic!("bad test number {:?}: {}", text, e))
}

/// `group` repeated `count` times, joined by separators.
pub fn repeated(group: &str, count: usize) -> String {
    vec![group; count].join("-")
}

/// Text of the largest value, `Z9` repeated [`MAX_DIGITS`] times.
pub fn maximum_text() -> String {
    repeated("Z9", MAX_DIGITS)
}

/// Every composite digit in increment order, `A1` through `Z9`.
pub fn all_composites() -> Vec<CompositeDigit> {
    LetterDigit::ALPHABET
        .chars()
        .flat_map(|letter| {
            NumeralDigit::ALPHABET
                .chars()
                .map(move |numeral| CompositeDigit::from_chars(letter, numeral))
        })
        .collect::<Result<_, _>>()
        .expect("alphabet constants are valid")
}

/// Advance `number` by `steps` and return the final value.
pub fn advance(mut number: Number, steps: usize) -> Number {
    for _ in 0..steps {
        let _ = number.increment();
    }
    number
}
