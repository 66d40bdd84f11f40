// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The owning sequence container.
//!
//! A [`Sequence<T>`] owns one heap array sized to exactly its length. There is no
//! spare capacity: every structural change (append, slice, concat, repeat)
//! allocates a fresh array of the final size and copies into it. Repeated
//! single-element appends are therefore quadratic. That cost model is part of
//! the contract, so `Vec`'s amortized growth is intentionally not used for
//! storage.
//!
//! ```text
//!   Sequence<T>
//!   ┌────────────────┐      ┌────┬────┬────┐
//!   │ data: Box<[T]> │─────▶│ e0 │ e1 │ e2 │   len == allocation == 3
//!   └────────────────┘      └────┴────┴────┘
//! ```
//!
//! Indexed access goes through [`Sequence::at`] only. There is no `Index` impl
//! because it would have to panic on a bad position instead of returning
//! [`StringError::OutOfRange`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cast::CastFrom;
use crate::contracts;
use crate::error::{Result, StringError};
use crate::transform::Transformer;

/// Exact-size, exclusively owned sequence of `T`.
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence<T> {
    data: Box<[T]>,
}

impl<T> Sequence<T> {
    /// Empty sequence. Owns no allocation.
    pub fn new() -> Self {
        Self {
            data: Box::default(),
        }
    }

    /// `count` copies of `value`.
    pub fn filled(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_exact(count, std::iter::repeat(value).take(count))
    }

    /// Build a sequence of exactly `len` elements drawn in order from
    /// `elements`.
    ///
    /// This is the bulk constructor the algebra builds on: the final size is
    /// known up front, so there is one allocation and no growth. Callers pass
    /// an iterator that yields at least `len` items.
    pub(crate) fn from_exact(len: usize, elements: impl IntoIterator<Item = T>) -> Self {
        if len > 0 {
            log::trace!("allocating exact storage for {} elements", len);
        }
        let mut storage = Vec::with_capacity(len);
        storage.extend(elements.into_iter().take(len));

        let seq = Self {
            data: storage.into_boxed_slice(),
        };
        contracts::check_exact_len(&seq, len, "from_exact");
        seq
    }

    /// Move the contents out, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Copy `source` up to (not including) the first `T::default()` sentinel.
    ///
    /// Without a sentinel the whole slice is copied.
    pub fn from_terminated(source: &[T]) -> Self
    where
        T: Default + PartialEq + Clone,
    {
        let sentinel = T::default();
        let len = source
            .iter()
            .position(|element| *element == sentinel)
            .unwrap_or(source.len());
        Self::from(&source[..len])
    }

    /// Copy the half-open range `[begin, end)` of `source`.
    ///
    /// `begin > end` is [`StringError::InvalidRange`]; `end` past the source is
    /// [`StringError::OutOfRange`]. `begin == end` gives an empty sequence.
    pub fn from_range(source: &[T], begin: usize, end: usize) -> Result<Self>
    where
        T: Clone,
    {
        if begin > end {
            return Err(StringError::InvalidRange);
        }
        if end > source.len() {
            return Err(StringError::OutOfRange { index: end });
        }
        Ok(Self::from(&source[begin..end]))
    }

    /// Element-wise explicit conversion from a sequence of another type.
    ///
    /// Each element goes through [`CastFrom`], i.e. an `as` cast, so narrowing
    /// truncates exactly as `as` does.
    pub fn cast_from<U>(other: &Sequence<U>) -> Self
    where
        T: CastFrom<U>,
        U: Clone,
    {
        Self::from_exact(other.len(), other.iter().cloned().map(T::cast_from))
    }

    /// `Sequence::<U>::cast_from(self)`, in method position.
    pub fn cast<U>(&self) -> Sequence<U>
    where
        U: CastFrom<T>,
        T: Clone,
    {
        Sequence::<U>::cast_from(self)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Release the storage. Idempotent.
    pub fn clear(&mut self) {
        self.data = Box::default();
    }

    /// Element at `index`, or [`StringError::OutOfRange`].
    pub fn at(&self, index: usize) -> Result<&T> {
        self.data.get(index).ok_or(StringError::OutOfRange { index })
    }

    /// Mutable element at `index`, or [`StringError::OutOfRange`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.data
            .get_mut(index)
            .ok_or(StringError::OutOfRange { index })
    }

    /// Up to `len` elements starting at `start`, as a new sequence.
    ///
    /// `len` is clamped to what remains, so it never causes an error. `start`
    /// may equal `self.len()` (empty result) but not exceed it.
    pub fn slice(&self, start: usize, len: usize) -> Result<Self>
    where
        T: Clone,
    {
        if start > self.len() {
            return Err(StringError::OutOfRange { index: start });
        }
        let actual = len.min(self.len() - start);
        let result = Self::from_range(&self.data, start, start + actual)?;

        contracts::check_slice(self, &result, start, len);
        Ok(result)
    }

    /// Grow by one element.
    ///
    /// Allocates `len + 1`, moves the existing elements over and releases the
    /// old array. Every call reallocates.
    pub fn append(&mut self, element: T) {
        let len = self.len();
        log::trace!("append: reallocating {} -> {}", len, len + 1);

        let mut grown = Vec::with_capacity(len + 1);
        grown.extend(std::mem::take(&mut self.data).into_vec());
        grown.push(element);
        self.data = grown.into_boxed_slice();

        contracts::check_exact_len(self, len + 1, "append");
    }

    /// Replace every element with `transformer`'s output, ascending index order.
    ///
    /// Runtime-selected transformers come through here as trait objects.
    pub fn apply_in_place(&mut self, transformer: &dyn Transformer<T>) {
        self.modify(transformer);
    }

    /// Statically dispatched counterpart of [`Sequence::apply_in_place`].
    pub fn modify<F>(&mut self, transformer: &F)
    where
        F: Transformer<T> + ?Sized,
    {
        for element in self.data.iter_mut() {
            *element = transformer.transform(&*element);
        }
    }

    /// Fallible in-place transformation.
    ///
    /// Stops at the first error. Elements before the failing index keep their
    /// new values, the rest are left as they were. Nothing is rolled back.
    pub fn try_modify<E, F>(&mut self, mut transformer: F) -> std::result::Result<(), E>
    where
        F: FnMut(&T) -> std::result::Result<T, E>,
    {
        for element in self.data.iter_mut() {
            *element = transformer(&*element)?;
        }
        Ok(())
    }

    /// Transformed copy; the receiver is not modified.
    pub fn mapped<F>(&self, transformer: &F) -> Self
    where
        F: Transformer<T> + ?Sized,
    {
        Self::from_exact(self.len(), self.iter().map(|element| transformer.transform(element)))
    }

    /// Elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        // into_boxed_slice drops any spare capacity
        Self {
            data: elements.into_boxed_slice(),
        }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(elements: &[T]) -> Self {
        Self {
            data: Box::from(elements),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self {
            data: Box::new(elements),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_vec().into_iter()
    }
}
