// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for [`Number`].
//!
//! These are `debug_assert!` checks: zero-cost in release builds, loud in
//! tests. They are called from the constructors and from
//! [`Number::increment`], so every value that leaves the crate has passed
//! them at least once in a debug build.
//!
//! | Contract                   | Property                                         |
//! |----------------------------|--------------------------------------------------|
//! | `check_number_well_formed` | length in range, occupied valid, rest minimum    |
//! | `check_successor`          | overflow only from the maximum, length +0 or +1  |

use crate::digit::{Carry, CompositeDigit, Digit, LetterDigit, NumeralDigit};
use crate::number::{Number, MAX_DIGITS};

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    assert!(MAX_DIGITS >= 1);
    assert!(LetterDigit::ALPHABET.len() == 19);
    assert!(NumeralDigit::ALPHABET.len() == 9);
    assert!(CompositeDigit::RADIX == 171);
};

// ============================================================================
// NUMBER CONTRACTS
// ============================================================================

/// Check the structural invariants of a number.
///
/// # Panics (debug builds only)
/// Panics if the length is out of range, an occupied slot is invalid, or an
/// unoccupied slot is not the minimum digit.
#[inline]
pub fn check_number_well_formed(number: &Number) {
    let len = number.len();
    debug_assert!(
        (1..=MAX_DIGITS).contains(&len),
        "Contract violation: number length {} outside 1..={}",
        len,
        MAX_DIGITS
    );

    for (i, slot) in number.slots().iter().enumerate() {
        if i < len {
            debug_assert!(
                slot.is_valid(),
                "Contract violation: slot {} holds invalid digit {}",
                i,
                slot
            );
        } else {
            debug_assert!(
                *slot == CompositeDigit::MIN,
                "Contract violation: unoccupied slot {} holds {} instead of the minimum",
                i,
                slot
            );
        }
    }
}

/// Check that `after` is a legal successor of `before`.
///
/// # Panics (debug builds only)
/// Panics if overflow was reported anywhere but on the maximum, if the
/// length changed by anything other than +0 or +1 without a wrap, or if the
/// result is not well-formed.
#[inline]
pub fn check_successor(before: &Number, after: &Number, carry: Carry) {
    check_number_well_formed(after);

    if carry.is_overflow() {
        debug_assert!(
            before.is_maximum() && *after == Number::minimum(),
            "Contract violation: overflow from {} to {}",
            before,
            after
        );
    } else {
        debug_assert!(
            after.len() == before.len() || after.len() == before.len() + 1,
            "Contract violation: length went from {} to {}",
            before.len(),
            after.len()
        );
        debug_assert!(
            after != before,
            "Contract violation: increment left {} unchanged",
            before
        );
    }
}
