// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The bounded sequence of composite digits.
//!
//! A [`Number`] is 1 to [`MAX_DIGITS`] composite digits written most
//! significant first and joined by [`SEPARATOR`]: `A1`, `B3-Z9`,
//! `K2-A1-E7`. Internally slot 0 is the least significant digit.
//!
//! Incrementing works like an odometer with one twist: when the most
//! significant digit overflows, the number grows by one digit (`Z9` becomes
//! `A1-A1`) until it holds [`MAX_DIGITS`] digits. At that length a `Z9` in
//! the most significant position is the maximum, and the next increment
//! wraps back to `A1` and reports [`Carry::Overflow`].

use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::contracts;
use crate::digit::{self, Carry, CompositeDigit, Digit};

/// Maximum number of composite digits.
pub const MAX_DIGITS: usize = 10;

/// Separator between composite digits in text.
pub const SEPARATOR: char = '-';

/// A counter value of 1 to [`MAX_DIGITS`] composite digits.
///
/// # Invariants
/// - `1 <= len <= MAX_DIGITS`
/// - every occupied slot holds a valid digit
/// - every unoccupied slot holds [`CompositeDigit::MIN`], so the derived
///   equality and hash only see the occupied value
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Number {
    slots: [CompositeDigit; MAX_DIGITS],
    len: usize,
}

impl Number {
    /// `A1`.
    pub const fn minimum() -> Self {
        Number {
            slots: [CompositeDigit::MIN; MAX_DIGITS],
            len: 1,
        }
    }

    /// `Z9` repeated [`MAX_DIGITS`] times, the largest of the values that
    /// [`Digit::is_maximum`] accepts.
    pub const fn maximum() -> Self {
        Number {
            slots: [CompositeDigit::MAX; MAX_DIGITS],
            len: MAX_DIGITS,
        }
    }

    /// Build from digits listed most significant first.
    ///
    /// Returns `None` for an empty slice, more than [`MAX_DIGITS`] digits, or
    /// an invalid digit.
    pub fn from_digits(digits: &[CompositeDigit]) -> Option<Self> {
        if digits.is_empty() || digits.len() > MAX_DIGITS || !digits.iter().all(Digit::is_valid) {
            return None;
        }
        let mut number = Number::minimum();
        for (slot, digit) in number.slots.iter_mut().zip(digits.iter().rev()) {
            *slot = *digit;
        }
        number.len = digits.len();
        contracts::check_number_well_formed(&number);
        Some(number)
    }

    /// Number of composite digits.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Digits from most to least significant, in text order.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = CompositeDigit> + ExactSizeIterator + '_ {
        self.slots[..self.len].iter().rev().copied()
    }

    /// Digit by significance: `0` is the least significant.
    pub fn digit(&self, significance: usize) -> Option<CompositeDigit> {
        self.slots[..self.len].get(significance).copied()
    }

    /// Advance by one. Returns [`Carry::Overflow`] only when the maximum
    /// wrapped back to the minimum.
    pub fn increment(&mut self) -> Carry {
        let before = *self;
        let carry = digit::increment(self);
        contracts::check_successor(&before, self, carry);
        carry
    }

    /// Reset to `A1`.
    pub fn reset(&mut self) {
        self.set_minimum();
    }

    /// Iterator over the values following this one.
    ///
    /// Ends after yielding the wrapped minimum.
    pub fn successors(self) -> Successors {
        Successors {
            current: self,
            wrapped: false,
        }
    }

    pub(crate) fn slots(&self) -> &[CompositeDigit; MAX_DIGITS] {
        &self.slots
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::minimum()
    }
}

impl Digit for Number {
    fn is_valid(&self) -> bool {
        (1..=MAX_DIGITS).contains(&self.len) && self.slots[..self.len].iter().all(Digit::is_valid)
    }

    fn set_minimum(&mut self) {
        *self = Number::minimum();
    }

    /// Full length with the most significant digit at `Z9`; the lower digits
    /// do not matter.
    fn is_maximum(&self) -> bool {
        self.len == MAX_DIGITS && self.slots[MAX_DIGITS - 1].is_maximum()
    }

    /// Carry chain: bump slot 0 and keep going while slots overflow. An
    /// overflow out of the top slot grows the number, or wraps it once it is
    /// already [`MAX_DIGITS`] long.
    fn advance_raw(&mut self) -> Carry {
        for index in 0..self.len {
            if !self.slots[index].increment().is_overflow() {
                return Carry::Absorbed;
            }
            if index + 1 < self.len {
                continue;
            }
            if self.len == MAX_DIGITS {
                debug!("number saturated at {} digits, wrapping", MAX_DIGITS);
                *self = Number::minimum();
                return Carry::Overflow;
            }
            self.slots[self.len] = CompositeDigit::MIN;
            self.len += 1;
            trace!(len = self.len, "number grew");
            return Carry::Absorbed;
        }
        Carry::Absorbed
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digit) in self.digits().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Number").field(&self.to_string()).finish()
    }
}

/// Iterator returned by [`Number::successors`].
#[derive(Debug, Clone)]
pub struct Successors {
    current: Number,
    wrapped: bool,
}

impl Iterator for Successors {
    type Item = Number;

    fn next(&mut self) -> Option<Number> {
        if self.wrapped {
            return None;
        }
        self.wrapped = self.current.increment().is_overflow();
        Some(self.current)
    }
}

impl FusedIterator for Successors {}
