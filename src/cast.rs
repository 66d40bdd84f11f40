// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Explicit per-element conversion for [`Sequence::cast_from`].
//!
//! `From` only covers lossless conversions, and a sequence conversion here is
//! deliberately allowed to narrow, widen or truncate. `CastFrom<U>` is the
//! `as` operator lifted into a trait so it can be named in a generic bound.
//! It is never used implicitly.
//!
//! [`Sequence::cast_from`]: crate::Sequence::cast_from

/// Convert a `U` into `Self` with `as` semantics.
pub trait CastFrom<U>: Sized {
    fn cast_from(value: U) -> Self;
}

macro_rules! cast_impls {
    (@from $src:ty => $($dst:ty),*) => {
        $(
            impl CastFrom<$src> for $dst {
                #[inline]
                fn cast_from(value: $src) -> Self {
                    value as $dst
                }
            }
        )*
    };
    ($($src:ty),*) => {
        $(
            cast_impls!(@from $src => u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
        )*
    };
}

cast_impls!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

// char only casts to integers, and only u8 casts back to char.
cast_impls!(@from char => u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, char);
cast_impls!(@from u8 => char);
