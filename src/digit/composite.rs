// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use super::{Carry, Digit, DigitError, LetterDigit, NumeralDigit};

/// One letter plus one numeral, written letter first (`A1`, `K7`, `Z9`).
///
/// The numeral is the less significant half: incrementing `A9` gives `B1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompositeDigit {
    letter: LetterDigit,
    numeral: NumeralDigit,
}

impl CompositeDigit {
    pub const MIN: CompositeDigit = CompositeDigit::new(LetterDigit::MIN, NumeralDigit::MIN);
    pub const MAX: CompositeDigit = CompositeDigit::new(LetterDigit::MAX, NumeralDigit::MAX);

    /// Number of distinct composite values (19 letters x 9 numerals).
    pub const RADIX: usize = LetterDigit::ALPHABET.len() * NumeralDigit::ALPHABET.len();

    pub const fn new(letter: LetterDigit, numeral: NumeralDigit) -> Self {
        CompositeDigit { letter, numeral }
    }

    /// Build from two characters, letter first.
    pub fn from_chars(letter: char, numeral: char) -> Result<Self, DigitError> {
        Ok(CompositeDigit::new(
            LetterDigit::new(letter)?,
            NumeralDigit::new(numeral)?,
        ))
    }

    #[inline]
    pub const fn letter(self) -> LetterDigit {
        self.letter
    }

    #[inline]
    pub const fn numeral(self) -> NumeralDigit {
        self.numeral
    }
}

impl Digit for CompositeDigit {
    #[inline]
    fn is_valid(&self) -> bool {
        self.letter.is_valid() && self.numeral.is_valid()
    }

    #[inline]
    fn set_minimum(&mut self) {
        self.letter.set_minimum();
        self.numeral.set_minimum();
    }

    #[inline]
    fn is_maximum(&self) -> bool {
        self.letter.is_maximum() && self.numeral.is_maximum()
    }

    fn advance_raw(&mut self) -> Carry {
        if self.numeral.increment().is_overflow() {
            self.letter.increment()
        } else {
            Carry::Absorbed
        }
    }
}

impl fmt::Display for CompositeDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.numeral)
    }
}

impl FromStr for CompositeDigit {
    type Err = DigitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), Some(numeral), None) => CompositeDigit::from_chars(letter, numeral),
            _ => Err(DigitError::BadLength(s.chars().count())),
        }
    }
}
