// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Element-wise transformations.
//!
//! A [`Transformer`] maps one element to another. Sequences accept them two ways:
//! as `&dyn Transformer<T>` through [`Sequence::apply_in_place`] when the choice is
//! made at runtime, and as a generic parameter through [`Sequence::modify`] when
//! it is known at compile time. Any `Fn(&T) -> T` closure is a transformer.
//!
//! [`Sequence::apply_in_place`]: crate::Sequence::apply_in_place
//! [`Sequence::modify`]: crate::Sequence::modify

/// Map one element to another.
pub trait Transformer<T> {
    fn transform(&self, original: &T) -> T;
}

impl<T, F> Transformer<T> for F
where
    F: Fn(&T) -> T,
{
    #[inline]
    fn transform(&self, original: &T) -> T {
        self(original)
    }
}

/// ASCII upper-casing. Lower-case letters `a..=z` become `A..=Z`; everything
/// else passes through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToUpper;

impl Transformer<u8> for ToUpper {
    #[inline]
    fn transform(&self, original: &u8) -> u8 {
        original.to_ascii_uppercase()
    }
}

impl Transformer<char> for ToUpper {
    #[inline]
    fn transform(&self, original: &char) -> char {
        original.to_ascii_uppercase()
    }
}

/// ASCII lower-casing, the inverse of [`ToUpper`] on letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToLower;

impl Transformer<u8> for ToLower {
    #[inline]
    fn transform(&self, original: &u8) -> u8 {
        original.to_ascii_lowercase()
    }
}

impl Transformer<char> for ToLower {
    #[inline]
    fn transform(&self, original: &char) -> char {
        original.to_ascii_lowercase()
    }
}
