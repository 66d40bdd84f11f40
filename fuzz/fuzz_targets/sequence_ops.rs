// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for sequence operations against a `Vec<u8>` model.
//!
//! Every operation is applied to both a `Sequence<u8>` and a plain `Vec<u8>`.
//! After each step the two must hold the same bytes, and every error the
//! sequence returns must be one the model predicts.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strand::{concat, prepend_element, repeat, Sequence, StringError, ToUpper};

#[derive(Debug, Arbitrary)]
enum Op {
    Append(u8),
    Prepend(u8),
    Concat(Vec<u8>),
    Repeat(i8),
    Slice { start: u8, len: u8 },
    At(u8),
    Upper,
    Clear,
    Range { begin: u8, end: u8 },
}

fuzz_target!(|ops: Vec<Op>| {
    let mut seq: Sequence<u8> = Sequence::new();
    let mut model: Vec<u8> = Vec::new();

    for op in ops {
        match op {
            Op::Append(byte) => {
                seq.append(byte);
                model.push(byte);
            }
            Op::Prepend(byte) => {
                seq = prepend_element(byte, &seq);
                model.insert(0, byte);
            }
            Op::Concat(bytes) => {
                seq = concat(&seq, &Sequence::from(bytes.as_slice()));
                model.extend_from_slice(&bytes);
            }
            Op::Repeat(times) => {
                // Keep the model small: repetition compounds across steps
                if model.len() * (times.max(0) as usize) > 4096 {
                    continue;
                }
                seq = repeat(&seq, i64::from(times));
                model = if times <= 0 { Vec::new() } else { model.repeat(times as usize) };
            }
            Op::Slice { start, len } => {
                let (start, len) = (start as usize, len as usize);
                match seq.slice(start, len) {
                    Ok(part) => {
                        assert!(start <= model.len());
                        let end = (start + len).min(model.len());
                        assert!(part.iter().eq(model[start..end].iter()));
                    }
                    Err(err) => {
                        assert!(start > model.len());
                        assert_eq!(err, StringError::OutOfRange { index: start });
                    }
                }
            }
            Op::At(index) => {
                let index = index as usize;
                assert_eq!(seq.at(index).ok(), model.get(index));
            }
            Op::Upper => {
                seq.apply_in_place(&ToUpper);
                model.make_ascii_uppercase();
            }
            Op::Clear => {
                seq.clear();
                model.clear();
            }
            Op::Range { begin, end } => {
                let (begin, end) = (begin as usize, end as usize);
                let built = Sequence::from_range(&model, begin, end);
                if begin > end {
                    assert_eq!(built, Err(StringError::InvalidRange));
                } else if end > model.len() {
                    assert_eq!(built, Err(StringError::OutOfRange { index: end }));
                } else {
                    assert_eq!(built, Ok(Sequence::from(&model[begin..end])));
                }
            }
        }

        assert_eq!(seq.len(), model.len());
        assert!(seq.iter().eq(model.iter()));
    }
});
