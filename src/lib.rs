// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact-size owning sequences with a small operator algebra.
//!
//! [`Sequence<T>`] is a value-semantic, heap-backed "string" over any element
//! type. Its storage is always exactly as long as its contents; every
//! structural change allocates the final size and copies. Bounds violations are
//! returned as [`StringError`], never panics.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌─────────────┐
//! │  error.rs   │   │ transform.rs │   │   cast.rs   │
//! │(StringError)│   │(Transformer) │   │ (CastFrom)  │
//! └─────────────┘   └──────────────┘   └─────────────┘
//!        │                 │                  │
//!        ▼                 ▼                  ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    sequence.rs                      │
//! │   (Sequence<T>: at, slice, append, apply, cast)     │
//! └─────────────────────────────────────────────────────┘
//!        │                                    │
//!        ▼                                    ▼
//! ┌──────────────┐                     ┌─────────────┐
//! │  algebra.rs  │                     │   text.rs   │
//! │(concat, rep, │                     │ (read/write │
//! │  ordering)   │                     │  adapters)  │
//! └──────────────┘                     └─────────────┘
//! ```
//!
//! `contracts.rs` sits beside all of this and asserts the size and tiling
//! invariants in debug builds.
//!
//! # Usage
//!
//! ```
//! use strand::{concat, repeat, Sequence, ToUpper};
//!
//! let mut word = Sequence::from("abc");
//! word.apply_in_place(&ToUpper);
//! assert_eq!(word.to_string(), "ABC");
//!
//! assert_eq!(concat(&Sequence::from("ab"), &Sequence::from("cd")).to_string(), "abcd");
//! assert_eq!(repeat(&Sequence::from("xy"), 3).to_string(), "xyxyxy");
//! assert!(word.at(5).is_err());
//! ```

// Module declarations
pub mod algebra;
pub mod cast;
pub mod contracts;
mod error;
mod sequence;
pub mod text;
mod transform;

// Re-exports for public API
pub use algebra::{
    append_element, concat, equals, greater, greater_equal, less, less_equal, not_equals,
    prepend_element, repeat,
};
pub use cast::CastFrom;
pub use error::{Result, StringError};
pub use sequence::Sequence;
pub use text::{read_token, write_text};
pub use transform::{ToLower, ToUpper, Transformer};
