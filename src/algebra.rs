// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Concatenation, repetition and comparison over sequences.
//!
//! Everything here is a free function over `&Sequence<T>` using only the public
//! contract plus the exact-size bulk constructor. The `std::ops` and `std::cmp`
//! impls at the bottom are thin wrappers so sequences read naturally in
//! expressions:
//!
//! | Expression     | Function                 |
//! |----------------|--------------------------|
//! | `&a + &b`      | [`concat`]               |
//! | `a += e`       | [`Sequence::append`]     |
//! | `&a * n`       | [`repeat`]               |
//! | `n * &a`       | [`repeat`]               |
//! | `a == b`       | [`equals`]               |
//! | `a < b`        | [`less`]                 |
//!
//! Only [`less`] and [`equals`] compare elements. The other four comparisons are
//! derived from them by swapping operands or negating, so they can never
//! disagree with each other.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Mul};

use crate::contracts;
use crate::Sequence;

// ============================================================================
// CONCATENATION
// ============================================================================

/// `a` followed by `b`, allocated at exactly `a.len() + b.len()`.
pub fn concat<T: Clone + PartialEq>(a: &Sequence<T>, b: &Sequence<T>) -> Sequence<T> {
    let result = Sequence::from_exact(a.len() + b.len(), a.iter().chain(b.iter()).cloned());

    contracts::check_concat(a, b, &result);
    result
}

/// Copy of `a` with `element` appended.
pub fn append_element<T: Clone>(a: &Sequence<T>, element: T) -> Sequence<T> {
    let mut result = a.clone();
    result.append(element);
    result
}

/// `element` followed by `a`.
pub fn prepend_element<T: Clone + PartialEq>(element: T, a: &Sequence<T>) -> Sequence<T> {
    concat(&Sequence::filled(1, element), a)
}

// ============================================================================
// REPETITION
// ============================================================================

/// `a` tiled `times` times. Non-positive `times` gives an empty sequence.
///
/// # Panics
///
/// Panics if `a.len() * times` overflows `usize`.
pub fn repeat<T: Clone + PartialEq>(a: &Sequence<T>, times: i64) -> Sequence<T> {
    if times <= 0 || a.is_empty() {
        return Sequence::new();
    }

    let tiles = usize::try_from(times).expect("capacity overflow");
    let total = a.len().checked_mul(tiles).expect("capacity overflow");
    let result = Sequence::from_exact(total, a.iter().cycle().take(total).cloned());

    contracts::check_tiling(a, &result, tiles);
    result
}

// ============================================================================
// COMPARISON
// ============================================================================

/// Same length and pairwise equal elements.
pub fn equals<T: PartialEq>(a: &Sequence<T>, b: &Sequence<T>) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

pub fn not_equals<T: PartialEq>(a: &Sequence<T>, b: &Sequence<T>) -> bool {
    !equals(a, b)
}

/// Lexicographic order: the first differing element decides, and on a shared
/// prefix the shorter sequence is less.
pub fn less<T: PartialOrd>(a: &Sequence<T>, b: &Sequence<T>) -> bool {
    for (x, y) in a.iter().zip(b.iter()) {
        if x < y {
            return true;
        }
        if x > y {
            return false;
        }
    }
    a.len() < b.len()
}

pub fn greater<T: PartialOrd>(a: &Sequence<T>, b: &Sequence<T>) -> bool {
    less(b, a)
}

pub fn less_equal<T: PartialOrd>(a: &Sequence<T>, b: &Sequence<T>) -> bool {
    !greater(a, b)
}

pub fn greater_equal<T: PartialOrd>(a: &Sequence<T>, b: &Sequence<T>) -> bool {
    !less(a, b)
}

// ============================================================================
// TRAIT SURFACE
// ============================================================================

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other)
    }
}

impl<T: Eq> Eq for Sequence<T> {}

// Length then elements, the same things `equals` looks at.
impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

// Looser bound than `Ord`, so it cannot delegate to `cmp`.
#[allow(clippy::non_canonical_partial_ord_impl)]
impl<T: PartialOrd> PartialOrd for Sequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if less(self, other) {
            Some(Ordering::Less)
        } else if less(other, self) {
            Some(Ordering::Greater)
        } else if equals(self, other) {
            Some(Ordering::Equal)
        } else {
            // Only reachable with incomparable elements (e.g. NaN).
            None
        }
    }
}

impl<T: Ord> Ord for Sequence<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        if less(self, other) {
            Ordering::Less
        } else if less(other, self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<T: Clone + PartialEq> Add for &Sequence<T> {
    type Output = Sequence<T>;

    fn add(self, rhs: Self) -> Sequence<T> {
        concat(self, rhs)
    }
}

impl<T> AddAssign<T> for Sequence<T> {
    fn add_assign(&mut self, element: T) {
        self.append(element);
    }
}

impl<T: Clone + PartialEq> Mul<i64> for &Sequence<T> {
    type Output = Sequence<T>;

    fn mul(self, times: i64) -> Sequence<T> {
        repeat(self, times)
    }
}

impl<T: Clone + PartialEq> Mul<&Sequence<T>> for i64 {
    type Output = Sequence<T>;

    fn mul(self, seq: &Sequence<T>) -> Sequence<T> {
        repeat(seq, self)
    }
}
