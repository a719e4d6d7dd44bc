//! # Solace Chat Command
//!
//! File: cli/src/commands/chat/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements `solace chat`, the interactive support conversation.
//! It resolves settings from configuration and command-line flags, builds the
//! engine, and hands stdin/stdout to the loop in `repl.rs`.
//!
//! ## Examples
//!
//! ```bash
//! # Start a conversation (asks what to call you)
//! solace chat
//!
//! # Skip the name question and disable appended coping tips
//! solace chat --name Sam --no-strategies
//!
//! # Reproducible replies
//! solace --seed 42 chat
//! ```
//!
use crate::commands::GlobalOpts;
use crate::core::{config, error::Result};
use crate::engine::Engine;
use anyhow::Context;
use clap::Parser;
use std::io;
use tracing::{debug, info};

pub mod repl;

pub use repl::{run_chat, run_chat_with_fallback, ChatSettings};

/// # Chat Arguments (`ChatArgs`)
///
/// Command-line options for `solace chat`. Each one overrides the matching
/// `[chat]` setting from the configuration files.
#[derive(Parser, Debug, Default)]
#[command(about = "Start an interactive support conversation")]
pub struct ChatArgs {
    /// Name to call you by. Skips the question at startup.
    #[arg(long, env = "SOLACE_NAME")]
    pub name: Option<String>,
    /// Do not append coping strategies to replies.
    #[arg(long)]
    pub no_strategies: bool,
    /// Label shown in front of the bot's replies.
    #[arg(long)]
    pub bot_label: Option<String>,
}

/// Merges configuration with command-line flags. Flags win.
fn resolve_settings(args: &ChatArgs, cfg: &config::Config) -> ChatSettings {
    ChatSettings {
        bot_label: args
            .bot_label
            .clone()
            .unwrap_or_else(|| cfg.chat.bot_label.clone()),
        preset_name: args.name.clone().or_else(|| cfg.chat.default_name.clone()),
        suggest_strategies: cfg.chat.suggest_strategies && !args.no_strategies,
    }
}

/// # Handle Chat Command (`handle_chat`)
///
/// Loads configuration, then runs one conversation on the process's stdin and
/// stdout until the user quits or input ends. If the conversation fails, an
/// apology and the crisis hotline are printed before the error is returned.
pub fn handle_chat(args: ChatArgs, global: &GlobalOpts) -> Result<()> {
    info!("Handling chat command...");
    debug!("Chat args: {:?}", args);

    let cfg = config::load_config(global.config.as_deref())
        .context("Failed to load Solace configuration")?;
    let settings = resolve_settings(&args, &cfg);
    let mut engine = Engine::with_seed(global.seed.or(cfg.engine.seed));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    let session = run_chat_with_fallback(
        &mut engine,
        &settings,
        &mut input,
        &mut output,
        &mut io::stdout(),
    )?;

    debug!(
        "Chat finished with {} turn(s) recorded",
        session.turn_count()
    );
    Ok(())
}
