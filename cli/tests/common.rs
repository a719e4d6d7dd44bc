//! # Solace CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every command is run
//! inside a temporary directory that doubles as `HOME` and `XDG_CONFIG_HOME`, so
//! a real user configuration on the test machine can never leak into results.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get Solace Command (`solace_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `solace` binary, isolated
/// to `dir` (working directory, home and config home).
///
/// ## Panics
/// Panics if the `solace` binary cannot be found via `Command::cargo_bin`.
pub fn solace_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("solace").expect("Failed to find solace binary for testing");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("SOLACE_SEED")
        .env_remove("SOLACE_NAME")
        .env_remove("RUST_LOG");
    cmd
}
