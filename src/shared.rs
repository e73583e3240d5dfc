// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A [`Number`] behind one lock.
//!
//! The increment scan may grow or wrap the number, so a reader must never see
//! it half way. Each method below takes the lock once for the whole logical
//! operation and never calls back into another locked method, which keeps a
//! plain (non-reentrant) mutex sufficient. The digit types underneath have no
//! locking of their own.

use parking_lot::Mutex;

use crate::digit::{Carry, Digit};
use crate::number::Number;

/// Thread-safe counter handle. Share it with `Arc<SharedNumber>`.
#[derive(Debug, Default)]
pub struct SharedNumber {
    inner: Mutex<Number>,
}

impl SharedNumber {
    pub fn new(number: Number) -> Self {
        Self {
            inner: Mutex::new(number),
        }
    }

    /// See [`Number::parse_or_minimum`].
    pub fn parse_or_minimum(text: &str) -> Self {
        Self::new(Number::parse_or_minimum(text))
    }

    /// Current value as text.
    pub fn identifier(&self) -> String {
        self.inner.lock().to_string()
    }

    pub fn is_valid(&self) -> bool {
        self.inner.lock().is_valid()
    }

    pub fn is_maximum(&self) -> bool {
        self.inner.lock().is_maximum()
    }

    /// Advance by one and return the carry.
    pub fn increment(&self) -> Carry {
        self.inner.lock().increment()
    }

    /// Advance by one and return the new value.
    pub fn next_value(&self) -> (Number, Carry) {
        let mut guard = self.inner.lock();
        let carry = guard.increment();
        (*guard, carry)
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Copy of the current value.
    pub fn snapshot(&self) -> Number {
        *self.inner.lock()
    }

    /// Run `f` with exclusive access for the duration of the call.
    pub fn with<R>(&self, f: impl FnOnce(&mut Number) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn into_inner(self) -> Number {
        self.inner.into_inner()
    }
}

impl From<Number> for SharedNumber {
    fn from(number: Number) -> Self {
        Self::new(number)
    }
}
