// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use clap::Parser;
use serde::{Serialize, Serializer};
use strand::{
    concat, equals, greater, greater_equal, less, less_equal, not_equals, read_token, repeat,
    write_text, Sequence, ToUpper,
};

mod cli;
use cli::display::error_line;
use cli::{Cli, Commands, STDIN_MARKER};

/// Result of one subcommand, printed as text or as a JSON report.
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Outcome {
    Text {
        #[serde(serialize_with = "as_text")]
        value: Sequence<u8>,
    },
    Length {
        value: usize,
    },
    Element {
        index: usize,
        #[serde(serialize_with = "as_char")]
        value: u8,
    },
    Comparison {
        relations: Vec<Relation>,
    },
}

#[derive(Serialize)]
struct Relation {
    op: &'static str,
    holds: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    command: &'a str,
    #[serde(flatten)]
    outcome: &'a Outcome,
}

fn as_text<S: Serializer>(seq: &Sequence<u8>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(seq)
}

fn as_char<S: Serializer>(byte: &u8, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_char(char::from(*byte))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}", error_line(&e));
        std::process::exit(1);
    }
}

/// Install env_logger at a level picked by `-v` count unless RUST_LOG is set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> Result<(), String> {
    log::debug!("dispatching {}", cli.command.name());

    let text = working_text(cli.command.text())?;
    let outcome = execute(&cli.command, text)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        let report = Report {
            command: cli.command.name(),
            outcome: &outcome,
        };
        serde_json::to_writer(&mut out, &report).map_err(|e| e.to_string())?;
        writeln!(out).map_err(|e| e.to_string())?;
    } else {
        print_outcome(&mut out, &outcome).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// The working text: the argument verbatim, or one token from stdin for `-`.
fn working_text(arg: &str) -> Result<Sequence<u8>, String> {
    if arg != STDIN_MARKER {
        return Ok(Sequence::from(arg));
    }

    let mut seq = Sequence::new();
    let stdin = io::stdin();
    if !read_token(&mut stdin.lock(), &mut seq).map_err(|e| e.to_string())? {
        log::debug!("stdin held no token, working text is empty");
    }
    Ok(seq)
}

fn execute(command: &Commands, mut seq: Sequence<u8>) -> Result<Outcome, String> {
    let outcome = match command {
        Commands::Show { .. } => Outcome::Text { value: seq },
        Commands::Len { .. } => Outcome::Length { value: seq.len() },
        Commands::At { index, .. } => {
            let byte = seq.at(*index).map_err(|e| e.to_string())?;
            Outcome::Element {
                index: *index,
                value: *byte,
            }
        }
        Commands::Slice { start, len, .. } => Outcome::Text {
            value: seq.slice(*start, *len).map_err(|e| e.to_string())?,
        },
        Commands::Push { ch, .. } => {
            if !ch.is_ascii() {
                return Err(format!("'{}' is not an ASCII character", ch));
            }
            seq += *ch as u8;
            Outcome::Text { value: seq }
        }
        Commands::Concat { other, .. } => Outcome::Text {
            value: concat(&seq, &Sequence::from(other.as_str())),
        },
        Commands::Repeat { times, .. } => Outcome::Text {
            value: repeat(&seq, *times),
        },
        Commands::Upper { .. } => {
            seq.apply_in_place(&ToUpper);
            Outcome::Text { value: seq }
        }
        Commands::Compare { other, .. } => {
            let other = Sequence::from(other.as_str());
            Outcome::Comparison {
                relations: vec![
                    Relation { op: "==", holds: equals(&seq, &other) },
                    Relation { op: "!=", holds: not_equals(&seq, &other) },
                    Relation { op: "<", holds: less(&seq, &other) },
                    Relation { op: ">", holds: greater(&seq, &other) },
                    Relation { op: "<=", holds: less_equal(&seq, &other) },
                    Relation { op: ">=", holds: greater_equal(&seq, &other) },
                ],
            }
        }
    };
    Ok(outcome)
}

fn print_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Text { value } => {
            write_text(value, out)?;
            writeln!(out)
        }
        Outcome::Length { value } => writeln!(out, "{}", value),
        Outcome::Element { value, .. } => {
            out.write_all(&[*value])?;
            writeln!(out)
        }
        Outcome::Comparison { relations } => {
            for relation in relations {
                let expression = format!("a {} b", relation.op);
                writeln!(out, "{}", cli::display::relation_row(&expression, relation.holds))?;
            }
            Ok(())
        }
    }
}
