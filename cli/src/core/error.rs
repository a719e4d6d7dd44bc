//! # Solace Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout Solace. The conversation
//! engine itself is infallible: every input, including empty or unrecognized
//! text, has a defined fallback reply. Errors only arise at the edges:
//! - Configuration files that fail to parse or validate
//! - Mood scores typed into the REPL that fall outside 1-10
//! - Category names passed on the command line that do not exist
//! - Terminal I/O failures while chatting
//!
//! ## Architecture
//!
//! - `SolaceError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Reject a mood score outside the accepted scale
//! let score = MoodScore::new(11);
//! assert!(matches!(score, Err(SolaceError::InvalidMoodScore { value: 11 })));
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the Solace application.
#[derive(Error, Debug)]
pub enum SolaceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Mood score {value} is out of range. Expected a whole number between 1 and 10.")]
    InvalidMoodScore { value: i64 },

    #[error("Unknown emotion category '{name}'.")]
    UnknownCategory { name: String },

    #[error("Terminal I/O failed")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
