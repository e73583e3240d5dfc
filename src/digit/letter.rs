// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use super::{Carry, Digit, DigitError};

/// An uppercase letter from the restricted alphabet.
///
/// `D F G J M Q V` are excluded, which leaves 19 values from `A` to `Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterDigit(u8);

impl LetterDigit {
    /// Allowed letters in increment order.
    pub const ALPHABET: &'static str = "ABCEHIKLNOPRSTUWXYZ";
    pub const MIN: LetterDigit = LetterDigit(b'A');
    pub const MAX: LetterDigit = LetterDigit(b'Z');

    /// Checked construction.
    pub fn new(ch: char) -> Result<Self, DigitError> {
        if ch.is_ascii() && Self::allows(ch as u8) {
            Ok(LetterDigit(ch as u8))
        } else {
            Err(DigitError::InvalidLetter(ch))
        }
    }

    #[inline]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    const fn allows(byte: u8) -> bool {
        matches!(
            byte,
            b'A'..=b'C' | b'E' | b'H' | b'I' | b'K' | b'L' | b'N'..=b'P' | b'R'..=b'U' | b'W'..=b'Z'
        )
    }
}

impl Default for LetterDigit {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<char> for LetterDigit {
    type Error = DigitError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch)
    }
}

impl Digit for LetterDigit {
    #[inline]
    fn is_valid(&self) -> bool {
        Self::allows(self.0)
    }

    #[inline]
    fn set_minimum(&mut self) {
        *self = Self::MIN;
    }

    #[inline]
    fn is_maximum(&self) -> bool {
        *self == Self::MAX
    }

    #[inline]
    fn advance_raw(&mut self) -> Carry {
        self.0 = self.0.wrapping_add(1);
        Carry::Absorbed
    }
}

impl fmt::Display for LetterDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
