//! # Solace Strategy Command
//!
//! File: cli/src/commands/strategy.rs
//! Author: Christi Mahu
//!
//! `solace strategy [--category NAME]` prints one coping strategy. Names that do
//! not match a category fall back to the general list rather than failing.
//!
use crate::commands::GlobalOpts;
use crate::core::{config, error::Result};
use crate::engine::Engine;
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// # Strategy Arguments (`StrategyArgs`)
#[derive(Parser, Debug)]
#[command(about = "Print a coping strategy")]
pub struct StrategyArgs {
    /// Emotion category (anxiety, depression, stress, anger, positive, general).
    #[arg(long, short, default_value = "general")]
    pub category: String,
}

/// # Handle Strategy Command (`handle_strategy`)
pub fn handle_strategy(args: StrategyArgs, global: &GlobalOpts) -> Result<()> {
    info!("Handling strategy command for '{}'", args.category);
    let cfg = config::load_config(global.config.as_deref())
        .context("Failed to load Solace configuration")?;
    let mut engine = Engine::with_seed(global.seed.or(cfg.engine.seed));

    let suggestion = engine.suggest_coping_strategy_named(&args.category);
    println!("{}", suggestion.trim_start());
    Ok(())
}
