// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text to [`Number`].
//!
//! The accepted grammar is
//!
//! ```text
//! number    := group ( "-" group ){0,9}
//! group     := letter numeral
//! letter    := one of ABCEHIKLNOPRSTUWXYZ
//! numeral   := one of 123456789
//! ```
//!
//! Anything else is rejected as a whole, including a valid prefix followed by
//! garbage (`A1B2`, `A1-`). [`Number::parse_or_minimum`] turns every rejection
//! into `A1`.

use std::str::FromStr;

use tracing::debug;

use crate::digit::{CompositeDigit, LetterDigit, NumeralDigit};
use crate::number::{Number, MAX_DIGITS, SEPARATOR};

/// Why a string is not a [`Number`]. Positions are character offsets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("'{found}' at position {position} is not an allowed letter")]
    InvalidLetter { position: usize, found: char },
    #[error("'{found}' at position {position} is not an allowed numeral")]
    InvalidNumeral { position: usize, found: char },
    #[error("group starting at position {position} is missing its numeral")]
    TruncatedGroup { position: usize },
    #[error("expected '-' at position {position}, found '{found}'")]
    MissingSeparator { position: usize, found: char },
    #[error("separator at position {position} is not followed by a group")]
    TrailingSeparator { position: usize },
    #[error("more than {max} groups")]
    TooManyGroups { max: usize },
}

impl Number {
    /// Strict parse of `XY-XY-...-XY`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut chars = text.chars().enumerate().peekable();
        let mut groups = [CompositeDigit::MIN; MAX_DIGITS];
        let mut count = 0;

        loop {
            if count == MAX_DIGITS {
                return Err(ParseError::TooManyGroups { max: MAX_DIGITS });
            }

            // only the first group can start at the end of input
            let Some((position, found)) = chars.next() else {
                return Err(ParseError::Empty);
            };
            let letter = LetterDigit::new(found)
                .map_err(|_| ParseError::InvalidLetter { position, found })?;

            let Some((numeral_position, found)) = chars.next() else {
                return Err(ParseError::TruncatedGroup { position });
            };
            let numeral = NumeralDigit::new(found).map_err(|_| ParseError::InvalidNumeral {
                position: numeral_position,
                found,
            })?;

            groups[count] = CompositeDigit::new(letter, numeral);
            count += 1;

            match chars.next() {
                None => break,
                Some((position, SEPARATOR)) => {
                    if chars.peek().is_none() {
                        return Err(ParseError::TrailingSeparator { position });
                    }
                }
                Some((position, found)) => {
                    return Err(ParseError::MissingSeparator { position, found });
                }
            }
        }

        // count is within 1..=MAX_DIGITS here
        Number::from_digits(&groups[..count]).ok_or(ParseError::Empty)
    }

    /// Lenient parse: any rejected input, including the empty string, gives
    /// the minimum `A1`.
    ///
    /// Callers that need to know whether the input was accepted should use
    /// [`Number::parse`] instead.
    pub fn parse_or_minimum(text: &str) -> Self {
        match Number::parse(text) {
            Ok(number) => number,
            Err(error) => {
                debug!(input = text, %error, "rejected number text, using minimum");
                Number::minimum()
            }
        }
    }
}

impl FromStr for Number {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Number::parse(s)
    }
}
