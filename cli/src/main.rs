//! # Solace Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Solace CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Examples
//!
//! ```bash
//! # Talk
//! solace chat
//!
//! # Classify text with debug logging
//! solace -vv classify "I feel overwhelmed"
//! ```
//!
//! Logs go to stderr so they never interleave with the conversation on stdout.
//!
use clap::{Parser, Subcommand};
use solace::commands::{self, GlobalOpts};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "solace",
    about = "💙 Solace: a supportive companion for your terminal",
    long_about = "Talk through how you're feeling. Solace listens for emotional keywords,\n\
                  answers with supportive replies and coping strategies, and tracks your\n\
                  mood for the length of one session. Nothing is saved.\n\n\
                  If you are in crisis, call or text 988 (US) or visit befrienders.org.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Seed for reproducible reply selection.
    #[arg(long, global = true, env = "SOLACE_SEED")]
    seed: Option<u64>,
    /// Use this configuration file instead of the user and project files.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    Classify(commands::classify::ClassifyArgs),
    Strategy(commands::strategy::StrategyArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let global = GlobalOpts {
        seed: cli.seed,
        config: cli.config,
    };

    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args, &global),
        Commands::Classify(args) => commands::classify::handle_classify(args, &global),
        Commands::Strategy(args) => commands::strategy::handle_strategy(args, &global),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
