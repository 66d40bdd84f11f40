// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the strand command-line interface.
//!
//! One subcommand per sequence operation. Each takes the working text as its
//! first argument; `-` reads one whitespace-delimited token from stdin instead.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};

/// Argument value that means "read the token from stdin".
pub const STDIN_MARKER: &str = "-";

#[derive(Parser)]
#[command(
    name = "strand",
    about = "Exact-size sequence operations on a single token",
    version
)]
pub struct Cli {
    /// Emit a JSON report instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the text unchanged
    Show {
        /// Working text, or "-" for stdin
        text: String,
    },

    /// Print the number of bytes in the text
    Len {
        /// Working text, or "-" for stdin
        text: String,
    },

    /// Print the byte at an index
    At {
        /// Working text, or "-" for stdin
        text: String,

        /// Zero-based position
        index: usize,
    },

    /// Print up to LEN bytes starting at START
    ///
    /// START may equal the text length (empty result) but not exceed it.
    /// LEN is clamped to what remains.
    Slice {
        /// Working text, or "-" for stdin
        text: String,

        /// Zero-based position of the first byte
        start: usize,

        /// Maximum number of bytes to take
        len: usize,
    },

    /// Append one character
    Push {
        /// Working text, or "-" for stdin
        text: String,

        /// Single ASCII character to append
        ch: char,
    },

    /// Concatenate another token onto the text
    Concat {
        /// Working text, or "-" for stdin
        text: String,

        /// Token appended after the text
        other: String,
    },

    /// Repeat the text TIMES times (zero or negative gives an empty result)
    Repeat {
        /// Working text, or "-" for stdin
        text: String,

        #[arg(allow_negative_numbers = true)]
        times: i64,
    },

    /// Upper-case ASCII letters in place
    Upper {
        /// Working text, or "-" for stdin
        text: String,
    },

    /// Evaluate all six comparisons between two tokens
    Compare {
        /// Working text, or "-" for stdin
        text: String,

        /// Right-hand side of every comparison
        other: String,
    },
}

impl Commands {
    /// Subcommand name, for logging and JSON reports.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Show { .. } => "show",
            Commands::Len { .. } => "len",
            Commands::At { .. } => "at",
            Commands::Slice { .. } => "slice",
            Commands::Push { .. } => "push",
            Commands::Concat { .. } => "concat",
            Commands::Repeat { .. } => "repeat",
            Commands::Upper { .. } => "upper",
            Commands::Compare { .. } => "compare",
        }
    }

    /// The working-text argument every subcommand carries.
    pub fn text(&self) -> &str {
        match self {
            Commands::Show { text }
            | Commands::Len { text }
            | Commands::At { text, .. }
            | Commands::Slice { text, .. }
            | Commands::Push { text, .. }
            | Commands::Concat { text, .. }
            | Commands::Repeat { text, .. }
            | Commands::Upper { text }
            | Commands::Compare { text, .. } => text.as_str(),
        }
    }
}
