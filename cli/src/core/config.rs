//! # Solace Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for Solace, handling loading,
//! merging, validation, and access to configuration data. Configuration only
//! tunes the chat surface (names, labels, whether coping tips are appended) and
//! the random seed. The keyword, response and strategy tables are compiled in and
//! cannot be changed from configuration.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config <PATH>` (replaces the two below)
//! 2. Project-specific `.solace.toml` in current directory or ancestors
//! 3. User-specific `~/.config/solace/config.toml`
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [chat]
//! default_name = "Sam"
//! bot_label = "Solace"
//! suggest_strategies = false
//!
//! [engine]
//! seed = 42
//! ```
//!
use crate::core::error::{Result, SolaceError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Settings for the interactive `solace chat` session.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Name to address the user by. When set, the REPL skips asking for one.
    #[serde(default)]
    pub default_name: Option<String>,
    /// Append a coping strategy to replies for distressing emotions.
    #[serde(default = "default_suggest_strategies")]
    pub suggest_strategies: bool,
    /// Label printed in front of every bot reply.
    #[serde(default = "default_bot_label")]
    pub bot_label: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_name: None,
            suggest_strategies: default_suggest_strategies(),
            bot_label: default_bot_label(),
        }
    }
}

/// Settings for the conversation engine.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Fixed seed for response selection. Random per run when absent.
    pub seed: Option<u64>,
}

fn default_suggest_strategies() -> bool {
    true
}
fn default_bot_label() -> String {
    "Bot".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".solace.toml";

/// Loads configuration from the user and project files, or from `explicit` alone
/// when it is given.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
            info!("Loading configuration from: {}", expanded.display());
            load_config_from_path(&expanded)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Solace", "solace") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.solace.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.solace.toml`,
/// stopping at the first directory that holds a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.chat.default_name = project_cfg.chat.default_name.or(user.chat.default_name);
    // A project can only switch suggestions off; it cannot re-enable what the user disabled.
    merged.chat.suggest_strategies =
        project_cfg.chat.suggest_strategies && user.chat.suggest_strategies;
    merged.chat.bot_label = if project_cfg.chat.bot_label != default_bot_label() {
        project_cfg.chat.bot_label
    } else {
        user.chat.bot_label
    };
    merged.engine.seed = project_cfg.engine.seed.or(user.engine.seed);
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.chat.bot_label.trim().is_empty() {
        return Err(anyhow!(SolaceError::Config(
            "chat.bot_label must not be empty.".to_string()
        )));
    }
    if let Some(name) = &config.chat.default_name {
        if name.trim().is_empty() {
            return Err(anyhow!(SolaceError::Config(
                "chat.default_name is set but empty. Remove it to be asked at startup."
                    .to_string()
            )));
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}
