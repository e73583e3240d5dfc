// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for runs of increments from arbitrary starting values.
//!
//! Every step must stay valid, grow by at most one group, and report
//! overflow only when leaving the maximum.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use odometer::{CompositeDigit, Digit, LetterDigit, Number, NumeralDigit, MAX_DIGITS};

#[derive(Debug, Arbitrary)]
struct Input {
    groups: Vec<(u8, u8)>,
    steps: u16,
}

fn composite((letter, numeral): (u8, u8)) -> CompositeDigit {
    let letters: Vec<char> = LetterDigit::ALPHABET.chars().collect();
    let numerals: Vec<char> = NumeralDigit::ALPHABET.chars().collect();
    CompositeDigit::from_chars(
        letters[letter as usize % letters.len()],
        numerals[numeral as usize % numerals.len()],
    )
    .expect("alphabet characters are valid")
}

fuzz_target!(|input: Input| {
    let digits: Vec<CompositeDigit> = input
        .groups
        .into_iter()
        .take(MAX_DIGITS)
        .map(composite)
        .collect();
    let Some(mut number) = Number::from_digits(&digits) else {
        return;
    };

    for _ in 0..input.steps {
        let before = number;
        let carry = number.increment();
        assert!(number.is_valid());
        if carry.is_overflow() {
            assert!(before.is_maximum());
            assert_eq!(number, Number::minimum());
        } else {
            assert!(number.len() == before.len() || number.len() == before.len() + 1);
        }
    }
});
