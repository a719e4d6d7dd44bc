//! # Solace Classify Command
//!
//! File: cli/src/commands/classify.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `solace classify` runs the keyword classifier on a single piece of text and
//! prints the detected category and whether a crisis phrase was found. With
//! `--respond` it also prints the reply the chat would give.
//!
//! ## Usage
//!
//! ```bash
//! solace classify I feel so anxious and scared about tomorrow
//! # category: anxiety
//! # crisis: false
//! ```
//!
use crate::commands::GlobalOpts;
use crate::core::{config, error::Result};
use crate::engine::{Clock, Engine};
use anyhow::Context;
use clap::Parser;
use rand::Rng;
use std::io::{self, Write};
use tracing::info;

/// # Classify Arguments (`ClassifyArgs`)
#[derive(Parser, Debug)]
#[command(about = "Classify a piece of text into an emotion category")]
pub struct ClassifyArgs {
    /// The text to classify. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
    /// Also print the response the chat would give.
    #[arg(long)]
    pub respond: bool,
}

/// # Handle Classify Command (`handle_classify`)
pub fn handle_classify(args: ClassifyArgs, global: &GlobalOpts) -> Result<()> {
    info!("Handling classify command...");
    let cfg = config::load_config(global.config.as_deref())
        .context("Failed to load Solace configuration")?;
    let mut engine = Engine::with_seed(global.seed.or(cfg.engine.seed));

    let text = args.text.join(" ");
    let mut stdout = io::stdout().lock();
    write_classification(&mut engine, &text, args.respond, &mut stdout)
}

fn write_classification<R: Rng, C: Clock, O: Write>(
    engine: &mut Engine<R, C>,
    text: &str,
    respond: bool,
    output: &mut O,
) -> Result<()> {
    writeln!(output, "category: {}", engine.classify(text))?;
    writeln!(output, "crisis: {}", engine.detect_crisis(text))?;
    if respond {
        writeln!(output, "response: {}", engine.generate_response(text).trim())?;
    }
    Ok(())
}
