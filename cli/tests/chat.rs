//! # Solace CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Drives `solace chat` end to end through piped stdin, plus a few checks of the
//! library API the chat is built on (mood tiers and the session summary).
//!

mod common;
use chrono::{Duration, TimeZone, Utc};
use common::*;
use predicates::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use solace::engine::{Engine, FixedClock, MoodScore, Session};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_chat_session_end_to_end() {
    let dir = tempdir().unwrap();
    solace_cmd(dir.path())
        .args(["--seed", "1", "chat"])
        .write_stdin("Sam\nI'm so stressed about work\nmood\n2\nmood\n5\nmood\n9\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Nice to meet you, Sam!")
                .and(predicate::str::contains("Coping Strategy:"))
                .and(predicate::str::contains("A score of 2 suggests"))
                .and(predicate::str::contains("A 5 suggests"))
                .and(predicate::str::contains("with a score of 9!"))
                .and(predicate::str::contains("• Messages exchanged: 1"))
                .and(predicate::str::contains("• Average mood score: 5.3/10")),
        );
}

#[test]
fn test_chat_crisis_message() {
    let dir = tempdir().unwrap();
    solace_cmd(dir.path())
        .args(["chat", "--name", "Sam"])
        .write_stdin("I think about suicide\nbye\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("🆘 IMMEDIATE HELP:")
                .and(predicate::str::contains("Average mood").not()),
        );
}

#[test]
fn test_chat_end_of_input() {
    let dir = tempdir().unwrap();
    solace_cmd(dir.path())
        .arg("chat")
        .write_stdin("Sam\nhello\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("I understand you need to go.")
                .and(predicate::str::contains("Goodbye, Sam.")),
        );
}

#[test]
fn test_chat_uses_project_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(".solace.toml"),
        "[chat]\ndefault_name = \"Robin\"\nbot_label = \"Solace\"\nsuggest_strategies = false\n",
    )
    .unwrap();

    solace_cmd(dir.path())
        .arg("chat")
        .write_stdin("I'm anxious\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Nice to meet you, Robin!")
                .and(predicate::str::contains("Solace: Take care, Robin!"))
                .and(predicate::str::contains("What would you like me to call you?").not())
                .and(predicate::str::contains("Coping Strategy").not()),
        );
}

#[test]
fn test_engine_mood_and_summary() {
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    let mut engine = Engine::new(StdRng::seed_from_u64(3), FixedClock(start + Duration::minutes(7)));
    let mut session = Session::start(start);

    for value in [2, 5, 9] {
        engine.mood_check_in(&mut session, MoodScore::new(value).unwrap());
    }
    session.record_turn("thanks");

    let summary = engine.end_session_summary(&session);
    assert!(summary.contains("• Duration: 7 minutes"));
    assert!(summary.contains("• Messages exchanged: 1"));
    assert!(summary.contains("• Average mood score: 5.3/10"));
}

#[test]
fn test_engine_summary_without_moods() {
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    let engine = Engine::new(StdRng::seed_from_u64(3), FixedClock(start));
    let session = engine.start_session();

    let summary = engine.end_session_summary(&session);
    assert!(summary.contains("• Duration: 0 minutes"));
    assert!(!summary.contains("Average mood score"));
}
