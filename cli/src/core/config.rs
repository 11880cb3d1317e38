//! # Responder Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the configuration that tells the
//! responder where its two source files live.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence, highest first):
//! 1. An explicit file passed with `--config` (or `RESPONDER_CONFIG`)
//! 2. Project-specific `.responder.toml` in the current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! Command-line flags (`--triggers`, `--defaults`) are applied on top of the
//! merged result by the command layer.
//!
//! ## Format
//!
//! ```toml
//! [triggers]
//! file = "~/responder/keyvalue.txt"  # omit to use the built-in table
//! include_builtin = true             # load built-ins first, file overrides
//!
//! [defaults]
//! file = "default.txt"
//! ```
//!
//! Relative paths are resolved against the current working directory when the
//! files are opened. A configured file that does not exist is not an error
//! here: the loaders report it and fall back.
//!
use crate::common::fs::io::read_file_to_string;
use crate::core::error::{ResponderError, Result};
use crate::responder::Sources;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub triggers: TriggersConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Where trigger records come from.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TriggersConfig {
    /// Trigger file (can use ~). When absent the built-in table is used.
    #[serde(default)]
    pub file: Option<String>,
    /// Load the built-in groups before the file. Unset means false.
    #[serde(default)]
    pub include_builtin: Option<bool>,
}

/// Where default responses come from.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Default responses file (can use ~). Unset means `default.txt`.
    #[serde(default)]
    pub file: Option<String>,
}

const DEFAULT_DEFAULTS_FILE: &str = "default.txt";

impl Config {
    /// Whether built-in groups are loaded before the trigger file.
    pub fn include_builtin(&self) -> bool {
        self.triggers.include_builtin.unwrap_or(false)
    }

    /// The default responses file, falling back to `default.txt`.
    pub fn defaults_file(&self) -> &str {
        self.defaults.file.as_deref().unwrap_or(DEFAULT_DEFAULTS_FILE)
    }

    /// Converts the configuration into loader sources.
    pub fn to_sources(&self, seed: Option<u64>) -> Sources {
        Sources {
            triggers: self.triggers.file.as_ref().map(PathBuf::from),
            include_builtin: self.include_builtin(),
            defaults: Some(PathBuf::from(self.defaults_file())),
            seed,
        }
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".responder.toml";

/// Loads, merges, expands and validates the configuration.
///
/// `explicit` is a file named on the command line; unlike the user and
/// project files it must exist.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged = merge_configs(user_config.unwrap_or_default(), project_config);
    if let Some(path) = explicit {
        info!("Loading configuration from: {}", path.display());
        let explicit_config = load_config_from_path(path)?;
        merged = merge_configs(merged, Some(explicit_config));
    }
    expand_config_paths(&mut merged);
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("dev", "Responder", "responder") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!("User configuration file not found at {}", config_path.display());
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(path) = find_project_config_path(&current_dir) {
        info!("Loading project configuration from: {}", path.display());
        load_config_from_path(&path).map(Some)
    } else {
        debug!(
            "No {} found in current directory or ancestors.",
            PROJECT_CONFIG_FILENAME
        );
        Ok(None)
    }
}

/// Walks up from `start` looking for `.responder.toml`, stopping at the first
/// directory that contains `.git`.
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
    let content = read_file_to_string(path)?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Layers `overlay` on top of `base`. Every field set in the overlay wins,
/// including values equal to the built-in defaults.
fn merge_configs(base: Config, overlay: Option<Config>) -> Config {
    let overlay = match overlay {
        Some(o) => o,
        None => return base,
    };
    Config {
        triggers: TriggersConfig {
            file: overlay.triggers.file.or(base.triggers.file),
            include_builtin: overlay.triggers.include_builtin.or(base.triggers.include_builtin),
        },
        defaults: DefaultsConfig {
            file: overlay.defaults.file.or(base.defaults.file),
        },
    }
}

/// Expands `~` in every configured path.
pub fn expand_config_paths(config: &mut Config) {
    if let Some(file) = &mut config.triggers.file {
        *file = shellexpand::tilde(file.as_str()).into_owned();
        debug!("Expanded trigger file path: {}", file);
    }
    if let Some(file) = &mut config.defaults.file {
        *file = shellexpand::tilde(file.as_str()).into_owned();
        debug!("Expanded default responses path: {}", file);
    }
}

/// Checks that every configured path is usable as a source file.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(file) = &config.triggers.file {
        validate_source_path("triggers.file", file)?;
    }
    validate_source_path("defaults.file", config.defaults_file())?;
    debug!("Configuration validation successful.");
    Ok(())
}

fn validate_source_path(key: &str, file: &str) -> Result<()> {
    if file.trim().is_empty() {
        return Err(anyhow!(ResponderError::Config(format!(
            "'{}' cannot be an empty path.",
            key
        ))));
    }
    let path = Path::new(file);
    if path.is_dir() {
        return Err(anyhow!(ResponderError::Config(format!(
            "'{}' points at '{}', which is a directory.",
            key,
            path.display()
        ))));
    }
    if !path.exists() {
        warn!("Configured {} '{}' does not exist.", key, path.display());
    }
    Ok(())
}
