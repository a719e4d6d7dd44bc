//! # Solace Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the Solace CLI and the
//! options shared by all of them.
//!
//! ## Commands
//!
//! - `chat`: The interactive support conversation (REPL)
//! - `classify`: One-shot classification of a piece of text
//! - `strategy`: Print a coping strategy for a category
//!
//! Each command defines its own arguments struct and a `handle_*` function.
//!
use std::path::PathBuf;

/// Interactive conversation with mood check-ins and coping strategies.
pub mod chat;
/// One-shot emotion classification and crisis detection.
pub mod classify;
/// One-shot coping strategy suggestion.
pub mod strategy;

/// Options accepted before any subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Seed for reply selection. Overrides `[engine] seed` from configuration.
    pub seed: Option<u64>,
    /// Explicit configuration file, replacing the user and project files.
    pub config: Option<PathBuf>,
}
