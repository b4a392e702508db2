//! # chatrs Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for chatrs, handling loading,
//! merging, validation, and access to configuration data. Everything in it is
//! optional: with no files present the chatbot runs on built-in defaults.
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (applied by the individual command handlers)
//! 2. Project-specific `.chatrs.toml` in current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/chatrs/config.toml` on Linux)
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! [transcript]
//! console_file = "chat_history.json"
//! window_file = "gui_chat_history.json"
//!
//! [responder]
//! seed = 7
//! catalog_file = "~/.config/chatrs/catalog.toml"
//!
//! [window]
//! exit_grace_ms = 2000
//! ```
//!
//! Loading and using configuration:
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let transcript = &cfg.transcript.console_file;
//! let grace = cfg.window.exit_grace_ms;
//! ```
//!
use crate::core::error::{ChatError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Upper bound for the window farewell grace period.
const MAX_EXIT_GRACE_MS: u64 = 10_000;

const PROJECT_CONFIG_FILENAME: &str = ".chatrs.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub transcript: TranscriptConfig,
    #[serde(default)]
    pub responder: ResponderConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

/// Where each front end writes its session transcript.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TranscriptConfig {
    /// Transcript file for `chatrs chat` (can use ~). Will be expanded.
    #[serde(default = "default_console_file")]
    pub console_file: String,
    /// Transcript file for `chatrs window` (can use ~). Will be expanded.
    #[serde(default = "default_window_file")]
    pub window_file: String,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            console_file: default_console_file(),
            window_file: default_window_file(),
        }
    }
}

/// Settings for reply selection.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ResponderConfig {
    /// Fixed RNG seed for reproducible replies. Random per session when unset.
    pub seed: Option<u64>,
    /// Custom catalog TOML file (can use ~). The built-in catalog is used when unset.
    pub catalog_file: Option<String>,
}

/// Settings for the terminal window front end.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
    /// How long the farewell stays on screen before the window closes.
    #[serde(default = "default_exit_grace_ms")]
    pub exit_grace_ms: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            exit_grace_ms: default_exit_grace_ms(),
        }
    }
}

fn default_console_file() -> String {
    "chat_history.json".to_string()
}
fn default_window_file() -> String {
    "gui_chat_history.json".to_string()
}
fn default_exit_grace_ms() -> u64 {
    2000
}

/// Loads, merges, expands and validates the configuration for this run.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let project_config = load_project_config(&current_dir)?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "ChatRS", "chatrs") {
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

fn load_project_config(start_dir: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.chatrs.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start_dir` towards the filesystem root looking for `.chatrs.toml`.
/// The search stops at the first directory containing `.git`.
fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path: &Path = start_dir;
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

/// Project values win whenever they differ from the built-in default.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.transcript.console_file = if project_cfg.transcript.console_file != default_console_file() {
        project_cfg.transcript.console_file
    } else {
        user.transcript.console_file
    };
    merged.transcript.window_file = if project_cfg.transcript.window_file != default_window_file() {
        project_cfg.transcript.window_file
    } else {
        user.transcript.window_file
    };
    merged.responder.seed = project_cfg.responder.seed.or(user.responder.seed);
    merged.responder.catalog_file = project_cfg
        .responder
        .catalog_file
        .or(user.responder.catalog_file);
    merged.window.exit_grace_ms = if project_cfg.window.exit_grace_ms != default_exit_grace_ms() {
        project_cfg.window.exit_grace_ms
    } else {
        user.window.exit_grace_ms
    };
    merged
}

fn expand_config_paths(config: &mut Config) {
    config.transcript.console_file = shellexpand::tilde(&config.transcript.console_file).into_owned();
    config.transcript.window_file = shellexpand::tilde(&config.transcript.window_file).into_owned();
    if let Some(catalog) = config.responder.catalog_file.as_mut() {
        *catalog = shellexpand::tilde(catalog).into_owned();
        debug!("Expanded catalog file: {}", catalog);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if config.transcript.console_file.trim().is_empty()
        || config.transcript.window_file.trim().is_empty()
    {
        return Err(anyhow!(ChatError::Config(
            "Transcript file names cannot be empty.".to_string()
        )));
    }
    if config.window.exit_grace_ms > MAX_EXIT_GRACE_MS {
        return Err(anyhow!(ChatError::Config(format!(
            "exit_grace_ms must be at most {} (got {}).",
            MAX_EXIT_GRACE_MS, config.window.exit_grace_ms
        ))));
    }
    if let Some(catalog) = &config.responder.catalog_file {
        let catalog_path = Path::new(catalog);
        if catalog_path.is_dir() {
            return Err(anyhow!(ChatError::Config(format!(
                "Configured catalog path '{}' is a directory, expected a TOML file.",
                catalog_path.display()
            ))));
        }
    }
    Ok(())
}
