//! Custom cargo commands for the strand crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target briefly

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets declared in fuzz/Cargo.toml
const FUZZ_TARGETS: &[&str] = &["sequence_ops", "read_token"];

/// Seconds each fuzz target runs under `cargo xtask fuzz`
const FUZZ_SECONDS: u32 = 30;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + tests + clippy + no-default build)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run every fuzz target for {FUZZ_SECONDS}s (requires cargo-fuzz, nightly)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("strand Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Building library without the CLI...");
    run_cargo(&["build", "--quiet", "--lib", "--no-default-features"])?;
    println!("✓ Library builds standalone\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run each fuzz target for a fixed time budget
fn fuzz() -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);

    for target in FUZZ_TARGETS {
        println!("Fuzzing {} for {}s...", target, FUZZ_SECONDS);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", &max_time])
            .current_dir(&fuzz_dir)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

        if !status.success() {
            bail!("fuzz target {} failed", target);
        }
    }

    println!("\n✓ Fuzz targets clean");
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Every `check_*` contract in src/contracts.rs must carry at least one
/// `INVARIANT:` marker, so adding a contract without one fails `verify`.
fn check_invariant_markers() -> Result<()> {
    let path = project_root()?.join("src").join("contracts.rs");
    let source = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let (contracts, unmarked) = unmarked_contracts(&source);
    if contracts == 0 {
        bail!("No contracts found in {}", path.display());
    }
    if !unmarked.is_empty() {
        bail!(
            "Contracts without an INVARIANT marker: {}. Someone may have removed safety comments!",
            unmarked.join(", ")
        );
    }

    println!("  {} contracts, all marked", contracts);
    Ok(())
}

/// Number of `pub fn check_*` contracts outside the test module, and the
/// names of those whose body has no `INVARIANT:` marker.
fn unmarked_contracts(source: &str) -> (usize, Vec<String>) {
    let body = source.split("#[cfg(test)]").next().unwrap_or_default();
    let mut contracts = 0;
    let mut unmarked = Vec::new();

    for chunk in body.split("pub fn check_").skip(1) {
        contracts += 1;
        if !chunk.contains("INVARIANT:") {
            let name: String = chunk
                .chars()
                .take_while(|c| c.is_alphanumeric() || *c == '_')
                .collect();
            unmarked.push(format!("check_{}", name));
        }
    }

    (contracts, unmarked)
}
