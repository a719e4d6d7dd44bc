//! # Conversation Session
//!
//! File: cli/src/engine/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A `Session` holds everything one interactive run accumulates: the user's
//! messages, their self-reported mood scores and the time the session started.
//! It lives in memory only and is dropped when the chat ends.
//!
//! Both logs are append-only. There is no API to remove or edit a
//! recorded turn or mood score.
//!
//! `MoodScore` is a validated 1-10 integer; constructing one is the only place a
//! score can be rejected.
//!
use crate::core::error::SolaceError;
use chrono::{DateTime, Utc};
use std::fmt;
use tracing::debug;

/// A self-reported mood between 1 (very low) and 10 (excellent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoodScore(u8);

/// Framing used for a mood check-in reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodTier {
    /// 1-3
    Low,
    /// 4-6
    Mid,
    /// 7-10
    High,
}

impl MoodScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Validates `value` against the 1-10 scale.
    pub fn new(value: i64) -> Result<Self, SolaceError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(MoodScore(value as u8))
        } else {
            Err(SolaceError::InvalidMoodScore { value })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn tier(self) -> MoodTier {
        match self.0 {
            0..=3 => MoodTier::Low,
            4..=6 => MoodTier::Mid,
            _ => MoodTier::High,
        }
    }
}

impl TryFrom<i64> for MoodScore {
    type Error = SolaceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        MoodScore::new(value)
    }
}

impl fmt::Display for MoodScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State for one conversation, from start to explicit termination.
#[derive(Debug, Clone)]
pub struct Session {
    user_name: Option<String>,
    turns: Vec<String>,
    mood_scores: Vec<MoodScore>,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Opens an empty session that began at `started_at`.
    pub fn start(started_at: DateTime<Utc>) -> Self {
        debug!("Session started at {}", started_at);
        Self {
            user_name: None,
            turns: Vec::new(),
            mood_scores: Vec::new(),
            started_at,
        }
    }

    /// Sets the name the user asked to be called. Blank names are ignored.
    pub fn set_user_name(&mut self, name: &str) {
        let trimmed = name.trim();
        self.user_name = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// Appends one user message to the turn log.
    pub fn record_turn(&mut self, text: &str) {
        self.turns.push(text.to_string());
    }

    /// Appends a mood score. Scores are never removed.
    pub fn record_mood(&mut self, score: MoodScore) {
        debug!("Recording mood score {}", score);
        self.mood_scores.push(score);
    }

    pub fn turns(&self) -> &[String] {
        &self.turns
    }

    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// The most recent user message, used as context for `strategy` requests.
    pub fn last_turn(&self) -> Option<&str> {
        self.turns.last().map(String::as_str)
    }

    pub fn mood_scores(&self) -> &[MoodScore] {
        &self.mood_scores
    }

    /// Arithmetic mean of all recorded mood scores, if any were recorded.
    pub fn average_mood(&self) -> Option<f64> {
        if self.mood_scores.is_empty() {
            return None;
        }
        let total: u32 = self.mood_scores.iter().map(|s| u32::from(s.get())).sum();
        Some(f64::from(total) / self.mood_scores.len() as f64)
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Whole minutes between the session start and `now`, truncated.
    /// A `now` earlier than the start reports zero.
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> i64 {
        (now - self.started_at).num_minutes().max(0)
    }
}
