//! Configuration file loading with precedence handling.

use crate::layout::{CellSize, LayoutConstants};
use crate::model::seed::demo_user;
use crate::model::HeaderNav;
use crate::state::sidebar::DEFAULT_ACTIVE_PATH;
use crate::state::{DEFAULT_NOTICE_CAPACITY, MAX_NOTICE_CAPACITY};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FEEDSHELL_CONFIG";

/// Environment variable overriding the signed-in user's display name.
pub const USER_ENV_VAR: &str = "FEEDSHELL_USER";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A key parsed but its value is not acceptable.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue {
        /// Offending key.
        key: &'static str,
        /// Offending value, as written.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/feedshell/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Display name of the signed-in user.
    #[serde(default)]
    pub user_name: Option<String>,

    /// Highlighted sidebar path.
    #[serde(default)]
    pub active_path: Option<String>,

    /// Highlighted header link (`"home"` or `"friends"`).
    #[serde(default)]
    pub active_nav: Option<String>,

    /// Start with the Explore section expanded.
    #[serde(default)]
    pub explore_expanded: Option<bool>,

    /// Sidebar width in pixels.
    #[serde(default)]
    pub sidebar_width: Option<u32>,

    /// Rail width in pixels.
    #[serde(default)]
    pub rail_width: Option<u32>,

    /// Header height in pixels.
    #[serde(default)]
    pub header_height: Option<u32>,

    /// Width of one terminal cell in pixels.
    #[serde(default)]
    pub cell_width_px: Option<u32>,

    /// Height of one terminal cell in pixels.
    #[serde(default)]
    pub cell_height_px: Option<u32>,

    /// Number of notices retained for the header.
    #[serde(default)]
    pub notice_capacity: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Display name of the signed-in user.
    pub user_name: String,
    /// Highlighted sidebar path.
    pub active_path: String,
    /// Highlighted header link.
    pub active_nav: HeaderNav,
    /// Start with the Explore section expanded.
    pub explore_expanded: bool,
    /// Fixed region sizes.
    pub layout: LayoutConstants,
    /// Pixel size of one terminal cell.
    pub cell_size: CellSize,
    /// Number of notices retained.
    pub notice_capacity: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            user_name: demo_user().name().to_string(),
            active_path: DEFAULT_ACTIVE_PATH.to_string(),
            active_nav: HeaderNav::default(),
            explore_expanded: false,
            layout: LayoutConstants::default(),
            cell_size: CellSize::default(),
            notice_capacity: DEFAULT_NOTICE_CAPACITY,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/feedshell/feedshell.log` on Unix-like systems,
/// or the platform state directory elsewhere. Falls back to the current
/// directory when no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("feedshell").join("feedshell.log")
    } else {
        PathBuf::from("feedshell.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/feedshell/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("feedshell").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FEEDSHELL_CONFIG` environment variable
/// 3. Default path `~/.config/feedshell/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for an unknown `active_nav`, a
/// blank `user_name`, a zero cell dimension, or a `notice_capacity` above
/// [`MAX_NOTICE_CAPACITY`].
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let active_nav = match config.active_nav {
        Some(raw) => HeaderNav::parse(&raw).ok_or(ConfigError::InvalidValue {
            key: "active_nav",
            value: raw,
        })?,
        None => defaults.active_nav,
    };

    let user_name = match config.user_name {
        Some(name) if name.trim().is_empty() => {
            return Err(ConfigError::InvalidValue {
                key: "user_name",
                value: name,
            })
        }
        Some(name) => name,
        None => defaults.user_name,
    };

    let cell_size = CellSize::new(
        nonzero("cell_width_px", config.cell_width_px)?.unwrap_or(defaults.cell_size.width),
        nonzero("cell_height_px", config.cell_height_px)?.unwrap_or(defaults.cell_size.height),
    );

    let notice_capacity = match config.notice_capacity {
        Some(capacity) if capacity > MAX_NOTICE_CAPACITY => {
            return Err(ConfigError::InvalidValue {
                key: "notice_capacity",
                value: capacity.to_string(),
            })
        }
        Some(capacity) => capacity,
        None => defaults.notice_capacity,
    };

    Ok(ResolvedConfig {
        user_name,
        active_path: config.active_path.unwrap_or(defaults.active_path),
        active_nav,
        explore_expanded: config.explore_expanded.unwrap_or(defaults.explore_expanded),
        layout: LayoutConstants {
            sidebar_width: config.sidebar_width.unwrap_or(defaults.layout.sidebar_width),
            rail_width: config.rail_width.unwrap_or(defaults.layout.rail_width),
            header_height: config.header_height.unwrap_or(defaults.layout.header_height),
        },
        cell_size,
        notice_capacity,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

fn nonzero(key: &'static str, value: Option<u32>) -> Result<Option<u32>, ConfigError> {
    match value {
        Some(0) => Err(ConfigError::InvalidValue {
            key,
            value: "0".to_string(),
        }),
        other => Ok(other),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FEEDSHELL_USER`: Override the signed-in user's name (ignored when blank)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(user) = std::env::var(USER_ENV_VAR) {
        if !user.trim().is_empty() {
            config.user_name = user;
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Arguments
///
/// * `config` - Base resolved config (already merged with defaults, file, and env vars)
/// * `user_override` - Optional user name from `--user`
/// * `explore_override` - `Some(true)` when `--explore` was passed
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    user_override: Option<String>,
    explore_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(user) = user_override.filter(|u| !u.trim().is_empty()) {
        config.user_name = user;
    }

    if let Some(explore) = explore_override {
        config.explore_expanded = explore;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
