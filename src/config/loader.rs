//! Configuration file loading with precedence handling.

use crate::symbology::RenderOptions;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "BARBOARD_CONFIG";

/// Environment variable overriding the log file path.
pub const LOG_ENV_VAR: &str = "BARBOARD_LOG";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/barboard/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Bar height of grid barcodes, in terminal rows.
    #[serde(default)]
    pub grid_bar_height: Option<u16>,

    /// Module width of grid barcodes, in half-cells.
    #[serde(default)]
    pub grid_module_width: Option<u16>,

    /// Bar height of the modal barcode, in terminal rows.
    #[serde(default)]
    pub modal_bar_height: Option<u16>,

    /// Module width of the modal barcode, in half-cells.
    #[serde(default)]
    pub modal_module_width: Option<u16>,

    /// Print the human-readable value under each barcode.
    #[serde(default)]
    pub show_text: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Bar height of grid cards, in terminal rows.
    pub grid_bar_height: u16,
    /// Module width of grid cards, in half-cells.
    pub grid_module_width: u16,
    /// Bar height of the details modal, in terminal rows.
    pub modal_bar_height: u16,
    /// Module width of the details modal, in half-cells.
    pub modal_module_width: u16,
    /// Print the human-readable value under each barcode.
    pub show_text: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            grid_bar_height: 3,
            grid_module_width: 1,
            modal_bar_height: 8,
            modal_module_width: 2,
            show_text: true,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Display size requested for grid cards.
    pub fn grid_render_options(&self) -> RenderOptions {
        RenderOptions::new(self.grid_bar_height, self.grid_module_width)
    }

    /// Display size requested for the modal.
    pub fn modal_render_options(&self) -> RenderOptions {
        RenderOptions::new(self.modal_bar_height, self.modal_module_width)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/barboard/barboard.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("barboard").join("barboard.log"),
        None => PathBuf::from("barboard.log"),
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
/// Returns `~/.config/barboard/config.toml` on Unix, appropriate path on
/// other platforms. `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("barboard").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `BARBOARD_CONFIG` environment variable
/// 3. Default path `~/.config/barboard/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed,
/// or if `BARBOARD_CONFIG` is not valid unicode.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_ENV_VAR) {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `BARBOARD_LOG`: Override log file path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(path) = std::env::var_os(LOG_ENV_VAR) {
        if !path.is_empty() {
            config.log_file_path = PathBuf::from(path);
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        grid_bar_height: config.grid_bar_height.unwrap_or(defaults.grid_bar_height),
        grid_module_width: config
            .grid_module_width
            .unwrap_or(defaults.grid_module_width),
        modal_bar_height: config.modal_bar_height.unwrap_or(defaults.modal_bar_height),
        modal_module_width: config
            .modal_module_width
            .unwrap_or(defaults.modal_module_width),
        show_text: config.show_text.unwrap_or(defaults.show_text),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    grid_height_override: Option<u16>,
    modal_height_override: Option<u16>,
) -> ResolvedConfig {
    if let Some(height) = grid_height_override {
        config.grid_bar_height = height;
    }

    if let Some(height) = modal_height_override {
        config.modal_bar_height = height;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
