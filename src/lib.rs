//! A mixed-radix counter built from letter/numeral digits.
//!
//! A value looks like `B3-K7-A1`: up to ten composite digits, most significant
//! first, each one a restricted letter followed by a numeral `1`-`9`. The
//! counter parses, validates, formats and increments these values like an
//! odometer that grows a digit whenever its top digit rolls over, and wraps
//! back to `A1` once a ten-digit value has `Z9` on top.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌────────────────┐   ┌────────────┐
//! │ LetterDigit  │──▶│CompositeDigit│──▶│     Number     │──▶│SharedNumber│
//! │ NumeralDigit │   │  (A1..Z9)    │   │ (1..=10 digits)│   │  (Mutex)   │
//! └──────────────┘   └──────────────┘   └────────────────┘   └────────────┘
//!        │                  │                   │
//!        ▼                  ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │          digit::Digit + digit::increment            │
//! │   (one rollover algorithm, carry via advance_raw)   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use odometer::{Carry, Number};
//!
//! let mut n = Number::parse("A9").unwrap();
//! assert_eq!(n.increment(), Carry::Absorbed);
//! assert_eq!(n.to_string(), "B1");
//!
//! let mut n = Number::parse("Z9").unwrap();
//! let _ = n.increment();
//! assert_eq!(n.to_string(), "A1-A1");
//!
//! // Malformed text falls back to the minimum
//! assert_eq!(Number::parse_or_minimum("A1B2").to_string(), "A1");
//! ```

// Module declarations
pub mod contracts;
pub mod digit;
mod number;
mod parse;
mod serialize;
mod shared;
pub mod testing;

// Re-exports for public API
pub use digit::{
    increment, Carry, CompositeDigit, Digit, DigitError, LetterDigit, NumeralDigit,
};
pub use number::{Number, Successors, MAX_DIGITS, SEPARATOR};
pub use parse::ParseError;
pub use shared::SharedNumber;
