// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the whitespace token reader.
//!
//! Reading every token out of arbitrary bytes must agree with splitting on
//! ASCII whitespace and must never panic. Once the input is exhausted the
//! target is left empty.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use strand::{read_token, Sequence};

fuzz_target!(|data: &[u8]| {
    let mut input = Cursor::new(data);
    let mut seq = Sequence::from("stale");
    let mut tokens: Vec<Vec<u8>> = Vec::new();

    while read_token(&mut input, &mut seq).expect("reading from memory cannot fail") {
        assert!(!seq.is_empty());
        tokens.push(seq.iter().copied().collect());
    }
    assert!(seq.is_empty());

    let expected: Vec<Vec<u8>> = data
        .split(|b| b.is_ascii_whitespace())
        .filter(|t| !t.is_empty())
        .map(<[u8]>::to_vec)
        .collect();
    assert_eq!(tokens, expected);
});
