// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for number text parsing.
//!
//! The parser sees user input directly. It must return Err on garbage, never
//! panic, and anything it accepts must format back to the exact input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use odometer::{Digit, Number, MAX_DIGITS};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    match Number::parse(text) {
        Ok(number) => {
            assert!(number.is_valid(), "parsed invalid number from {:?}", text);
            assert!((1..=MAX_DIGITS).contains(&number.len()));
            assert_eq!(number.to_string(), text, "round trip changed the text");
        }
        Err(_) => {
            assert_eq!(Number::parse_or_minimum(text), Number::minimum());
        }
    }
});
