// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The shared digit contract and the one increment algorithm built on it.
//!
//! Every level of the counter is a [`Digit`]: the single-character alphabets,
//! the letter/numeral pair, and the whole [`Number`](crate::Number). They all
//! increment the same way:
//!
//! ```text
//! repeat:
//!     if is_maximum(): set_minimum(); carry = Overflow
//!     else:            carry |= advance_raw()
//! until is_valid()
//! ```
//!
//! Carry propagation falls out of `advance_raw`. A composite digit's raw step
//! increments its numeral and, if that overflowed, its letter. A number's raw
//! step increments its least significant composite and walks upward while the
//! composites keep overflowing. No level re-implements rollover.
//!
//! # Alphabets
//!
//! | Type             | Allowed                                   | Min | Max |
//! |------------------|-------------------------------------------|-----|-----|
//! | [`LetterDigit`]  | `A`-`Z` except `D F G J M Q V`            | `A` | `Z` |
//! | [`NumeralDigit`] | `1`-`9`                                   | `1` | `9` |
//! | [`CompositeDigit`] | letter then numeral, `A1`..`Z9`         | `A1`| `Z9`|

mod composite;
mod letter;
mod numeral;

pub use composite::CompositeDigit;
pub use letter::LetterDigit;
pub use numeral::NumeralDigit;

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Outcome of one increment.
///
/// `Overflow` means the digit rolled over from its maximum back to its
/// minimum. For a [`Number`](crate::Number) that only happens when the global
/// maximum wraps to `A1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[must_use]
pub enum Carry {
    /// The step was absorbed at this level.
    #[default]
    Absorbed,
    /// The digit wrapped to its minimum and the next level must advance.
    Overflow,
}

impl Carry {
    #[inline]
    pub const fn is_overflow(self) -> bool {
        matches!(self, Carry::Overflow)
    }
}

impl BitOr for Carry {
    type Output = Carry;

    #[inline]
    fn bitor(self, rhs: Carry) -> Carry {
        if self.is_overflow() || rhs.is_overflow() {
            Carry::Overflow
        } else {
            Carry::Absorbed
        }
    }
}

impl BitOrAssign for Carry {
    #[inline]
    fn bitor_assign(&mut self, rhs: Carry) {
        *self = *self | rhs;
    }
}

/// A digit-like value with a bounded, possibly sparse, range.
///
/// Implementors describe their range with `is_valid`, `set_minimum` and
/// `is_maximum`, and provide `advance_raw`, an unchecked step to the next raw
/// value. [`increment`] combines them into a checked increment.
pub trait Digit: fmt::Display {
    /// True if the current value belongs to the digit's range.
    fn is_valid(&self) -> bool;

    /// Reset to the smallest value of the range.
    fn set_minimum(&mut self);

    /// True if the current value is the largest value of the range.
    fn is_maximum(&self) -> bool;

    /// Step to the next raw value without checking the range.
    ///
    /// The result may be invalid (a letter can land on `D`); [`increment`]
    /// keeps stepping until it is not. Returns the carry coming out of any
    /// child digit that had to wrap.
    fn advance_raw(&mut self) -> Carry;

    /// Textual form of the current value.
    fn identifier(&self) -> String {
        self.to_string()
    }

    /// Advance to the next valid value. See [`increment`].
    fn increment(&mut self) -> Carry
    where
        Self: Sized,
    {
        increment(self)
    }
}

/// Advance `digit` to its next valid value, wrapping to the minimum after the
/// maximum.
///
/// Returns [`Carry::Overflow`] if the digit wrapped, either directly or through
/// a raw step that reported one.
pub fn increment<D: Digit + ?Sized>(digit: &mut D) -> Carry {
    let mut carry = Carry::Absorbed;
    loop {
        if digit.is_maximum() {
            digit.set_minimum();
            carry = Carry::Overflow;
        } else {
            carry |= digit.advance_raw();
        }
        if digit.is_valid() {
            return carry;
        }
    }
}

/// Error for checked construction of a single digit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DigitError {
    #[error("'{0}' is not an allowed letter")]
    InvalidLetter(char),
    #[error("'{0}' is not an allowed numeral")]
    InvalidNumeral(char),
    #[error("a composite digit is 2 characters, got {0}")]
    BadLength(usize),
}
