//! # Solace Conversation Engine
//!
//! File: cli/src/engine/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The engine classifies free text into coarse emotional categories by keyword
//! matching and answers with canned responses, coping strategies and mood-tier
//! framing. It performs no I/O: the `chat` command owns the terminal and hands
//! the engine plain strings and validated mood scores.
//!
//! ## Architecture
//!
//! - `category`: The `EmotionCategory` enum and its table lookups
//! - `tables`: Static keywords, responses, strategies and crisis phrases
//! - `classifier`: `classify` and `detect_crisis`
//! - `responder`: `Engine`, which selects replies using an injected RNG and clock
//! - `session`: Per-conversation state and the `MoodScore` type
//! - `summary`: End-of-session report rendering
//! - `clock`: The `Clock` trait and its system/fixed implementations
//!
pub mod category;
pub mod classifier;
pub mod clock;
pub mod responder;
pub mod session;
pub mod summary;
pub mod tables;

pub use category::EmotionCategory;
pub use classifier::{classify, detect_crisis};
pub use clock::{Clock, FixedClock, SystemClock};
pub use responder::Engine;
pub use session::{MoodScore, MoodTier, Session};
