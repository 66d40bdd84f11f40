// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised by bounds-checked sequence operations.
//!
//! There are exactly two ways to misuse a [`Sequence`](crate::Sequence): ask for
//! a position that is not there, or describe a half-open range whose lower bound
//! sits past its upper bound. Both are returned at the point of violation and
//! nothing in this crate catches them, so the immediate caller always decides.

use std::fmt;

/// Error type for sequence contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringError {
    /// `index` (or a slice start) is not within the sequence.
    OutOfRange { index: usize },
    /// A `[begin, end)` range was built with `begin > end`.
    InvalidRange,
}

impl StringError {
    /// Human-readable description, identical to the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The offending position, if this error carries one.
    pub fn index(&self) -> Option<usize> {
        match self {
            StringError::OutOfRange { index } => Some(*index),
            StringError::InvalidRange => None,
        }
    }
}

impl fmt::Display for StringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringError::OutOfRange { index } => {
                write!(f, "String error: Index out of range: {}", index)
            }
            StringError::InvalidRange => write!(f, "String error: Invalid pointer range."),
        }
    }
}

impl std::error::Error for StringError {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StringError>;
