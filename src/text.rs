// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Byte-stream adapters for `Sequence<u8>`.
//!
//! These are the only bridge between a sequence and the outside world. There
//! is no encoding awareness: a byte is a character.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::Sequence;

/// Write every byte of `seq` in order. No separators, no terminator.
pub fn write_text<W: Write + ?Sized>(seq: &Sequence<u8>, out: &mut W) -> io::Result<()> {
    for byte in seq {
        out.write_all(std::slice::from_ref(byte))?;
    }
    Ok(())
}

/// Replace `target` with the next whitespace-delimited token from `input`.
///
/// Leading ASCII whitespace is skipped; the whitespace byte that ends the token
/// is left in the stream. Whatever `target` held before is discarded, even when
/// the input is exhausted: then `target` ends up empty and `false` is returned.
pub fn read_token<R: BufRead + ?Sized>(input: &mut R, target: &mut Sequence<u8>) -> io::Result<bool> {
    let mut token = Vec::new();

    loop {
        let (used, finished) = {
            let available = match input.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }

            let mut used = 0;
            let mut finished = false;
            for &byte in available {
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        finished = true;
                        break;
                    }
                } else {
                    token.push(byte);
                }
                used += 1;
            }
            (used, finished)
        };

        input.consume(used);
        if finished {
            break;
        }
    }

    log::trace!("read_token: {} bytes", token.len());
    *target = Sequence::from(token);
    Ok(!target.is_empty())
}

impl fmt::Display for Sequence<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self {
            fmt::Write::write_char(f, char::from(*byte))?;
        }
        Ok(())
    }
}

impl From<&str> for Sequence<u8> {
    fn from(text: &str) -> Self {
        Sequence::from(text.as_bytes())
    }
}

impl FromStr for Sequence<u8> {
    type Err = std::convert::Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Sequence::from(text))
    }
}
