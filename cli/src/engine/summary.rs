//! # Session Summary
//!
//! File: cli/src/engine/summary.rs
//! Author: Christi Mahu
//!
//! Renders the end-of-session report: duration in whole minutes, number of
//! messages, the average mood when at least one score was recorded, and a fixed
//! closing block of encouragement.
//!
use crate::engine::session::Session;
use chrono::{DateTime, Utc};
use tracing::debug;

const CLOSING_BLOCK: &str = "
🌟 Remember:
• Your feelings are valid
• It's okay to ask for help
• Small steps count
• You're not alone in this journey

Take care of yourself! 💙
";

/// Builds the summary for `session` as of `now`.
pub fn render_summary(session: &Session, now: DateTime<Utc>) -> String {
    debug!(
        "Summarizing session started at {} as of {}",
        session.started_at(),
        now
    );
    let mut summary = format!(
        "\n📋 Session Summary:\n• Duration: {} minutes\n• Messages exchanged: {}\n",
        session.elapsed_minutes(now),
        session.turn_count()
    );

    if let Some(average) = session.average_mood() {
        summary.push_str(&format!("• Average mood score: {:.1}/10\n", average));
    }

    summary.push_str(CLOSING_BLOCK);
    summary
}
