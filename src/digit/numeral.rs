// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use super::{Carry, Digit, DigitError};

/// A decimal numeral from `1` to `9`. Zero is never valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumeralDigit(u8);

impl NumeralDigit {
    /// Allowed numerals in increment order.
    pub const ALPHABET: &'static str = "123456789";
    pub const MIN: NumeralDigit = NumeralDigit(b'1');
    pub const MAX: NumeralDigit = NumeralDigit(b'9');

    /// Checked construction.
    pub fn new(ch: char) -> Result<Self, DigitError> {
        if ch.is_ascii() && Self::allows(ch as u8) {
            Ok(NumeralDigit(ch as u8))
        } else {
            Err(DigitError::InvalidNumeral(ch))
        }
    }

    #[inline]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Numeric value, `1..=9` for a valid numeral.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0.wrapping_sub(b'0')
    }

    const fn allows(byte: u8) -> bool {
        matches!(byte, b'1'..=b'9')
    }
}

impl Default for NumeralDigit {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<char> for NumeralDigit {
    type Error = DigitError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch)
    }
}

impl Digit for NumeralDigit {
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

impl fmt::Display for NumeralDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
