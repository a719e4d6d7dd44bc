//! # Solace CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Top-level behavior of the `solace` binary: `--help`, `--version`, unknown
//! subcommands and configuration failures.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_help_lists_commands() {
    let dir = tempdir().unwrap();
    solace_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("chat")
                .and(predicate::str::contains("classify"))
                .and(predicate::str::contains("strategy")),
        );
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    solace_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_fails() {
    let dir = tempdir().unwrap();
    solace_cmd(dir.path())
        .arg("journal")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_invalid_project_config_reports_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".solace.toml"), "[chat]\nbot_label = \"\"\n").unwrap();

    solace_cmd(dir.path())
        .args(["strategy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:").and(predicate::str::contains("bot_label")));
}

#[test]
fn test_unknown_config_key_reports_error() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[engine]\nkeywords = []\n").unwrap();

    solace_cmd(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["classify", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML"));
}
