// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Serde support. Every value type serializes as its text form and
//! deserializes through the strict parser, so invalid text is an error
//! rather than a silent `A1`.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::digit::{CompositeDigit, LetterDigit, NumeralDigit};
use crate::number::Number;

macro_rules! text_serde {
    ($ty:ty, $parse:expr) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                $parse(text.as_str()).map_err(de::Error::custom)
            }
        }
    };
}

fn single_char(text: &str) -> Result<char, String> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(format!("expected a single character, got {:?}", text)),
    }
}

text_serde!(LetterDigit, |text: &str| {
    single_char(text).and_then(|ch| LetterDigit::new(ch).map_err(|e| e.to_string()))
});
text_serde!(NumeralDigit, |text: &str| {
    single_char(text).and_then(|ch| NumeralDigit::new(ch).map_err(|e| e.to_string()))
});
text_serde!(CompositeDigit, |text: &str| text.parse::<CompositeDigit>());
text_serde!(Number, Number::parse);
