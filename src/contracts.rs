// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the exact-size storage model.
//!
//! These are debug-mode assertions over the results of structural operations.
//! They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. State the **size and tiling rules** the algebra promises its callers
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! Every function here checks one promise made by [`crate::algebra`] or
//! [`crate::Sequence`]. `cargo xtask verify` requires an `INVARIANT:` marker
//! in every contract.
//!
//! | Contract Function        | Promise                                         |
//! |--------------------------|-------------------------------------------------|
//! | `check_exact_len`        | result holds exactly the computed element count |
//! | `check_concat`           | `a ++ b` starts with `a` and ends with `b`      |
//! | `check_tiling`           | `repeat(a, t)[k*len + i] == a[i]`               |
//! | `check_slice`            | slice length is `min(len, size - start)`        |
//!
//! # Usage
//!
//! ```ignore
//! use strand::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_tiling(&source, &repeated, 3);
//!
//! // In release builds, this is a no-op
//! ```

use crate::Sequence;

// ============================================================================
// SIZE CONTRACTS
// ============================================================================

/// Check that a freshly built sequence has the length its builder computed.
///
/// # Panics (debug builds only)
/// Panics if `seq.len() != expected`.
#[inline]
pub fn check_exact_len<T>(seq: &Sequence<T>, expected: usize, operation: &str) {
    // INVARIANT: storage is allocated to exactly the final length, never more
    debug_assert_eq!(
        seq.len(),
        expected,
        "Contract violation: {} produced {} elements, expected {}",
        operation,
        seq.len(),
        expected
    );
}

/// Check that a slice result is clamped, not truncated or overrun.
#[inline]
pub fn check_slice<T>(source: &Sequence<T>, result: &Sequence<T>, start: usize, len: usize) {
    // INVARIANT: slice start was validated before any copy happened
    debug_assert!(
        start <= source.len(),
        "Contract violation: slice start {} > len {}",
        start,
        source.len()
    );

    // INVARIANT: slice length is min(len, size - start)
    let expected = len.min(source.len().saturating_sub(start));
    check_exact_len(result, expected, "slice");
}

// ============================================================================
// ALGEBRA CONTRACTS
// ============================================================================

/// Check that `result` is `a` followed by `b`.
///
/// # Panics (debug builds only)
/// Panics on a length mismatch or if any element is out of place.
#[inline]
pub fn check_concat<T: PartialEq>(a: &Sequence<T>, b: &Sequence<T>, result: &Sequence<T>) {
    check_exact_len(result, a.len() + b.len(), "concat");

    if cfg!(debug_assertions) {
        // INVARIANT: concatenation preserves both operands in order
        let in_order = result
            .iter()
            .zip(a.iter().chain(b.iter()))
            .all(|(got, want)| got == want);
        debug_assert!(in_order, "Contract violation: concat reordered its operands");
    }
}

/// Check that `result` is `source` tiled `times` times.
#[inline]
pub fn check_tiling<T: PartialEq>(source: &Sequence<T>, result: &Sequence<T>, times: usize) {
    check_exact_len(result, source.len() * times, "repeat");

    if cfg!(debug_assertions) && !source.is_empty() {
        // INVARIANT: element k*len + i equals source[i]
        for (position, element) in result.iter().enumerate() {
            let offset = position % source.len();
            debug_assert!(
                source.at(offset).is_ok_and(|expected| expected == element),
                "Contract violation: repeat tile broken at position {}",
                position
            );
        }
    }
}
