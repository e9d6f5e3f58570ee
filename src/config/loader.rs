//! Configuration file loading with precedence handling.

use crate::model::LayoutMode;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG_PATH: &str = "FLICKR_CAROUSEL_CONFIG";
/// Environment variable overriding the API key.
pub const ENV_API_KEY: &str = "FLICKR_API_KEY";
/// Environment variable overriding the debounce window, in milliseconds.
pub const ENV_DEBOUNCE_MS: &str = "FLICKR_CAROUSEL_DEBOUNCE_MS";

/// Flickr REST endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.flickr.com/services/rest/";

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
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/flickr-carousel/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Flickr API key.
    #[serde(default)]
    pub api_key: Option<String>,

    /// REST endpoint, mostly useful for pointing at a proxy.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Photos requested per search.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Quiet period after the last keystroke before searching.
    #[serde(default)]
    pub debounce_ms: Option<u64>,

    /// HTTP request timeout.
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,

    /// `"linear"` or `"circular"`.
    #[serde(default)]
    pub layout: Option<LayoutMode>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub page_size: usize,
    pub debounce_ms: u64,
    pub request_timeout_ms: u64,
    pub layout: LayoutMode,
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: 15,
            debounce_ms: 750,
            request_timeout_ms: 10_000,
            layout: LayoutMode::Circular,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/flickr-carousel/flickr-carousel.log` on Linux, the
/// platform state directory elsewhere, or the current directory as a fallback.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("flickr-carousel").join("flickr-carousel.log")
    } else {
        PathBuf::from("flickr-carousel.log")
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

    // Missing file is not an error - use defaults
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
/// Returns `~/.config/flickr-carousel/config.toml` on Linux.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("flickr-carousel").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FLICKR_CAROUSEL_CONFIG` environment variable
/// 3. Default path `~/.config/flickr-carousel/config.toml`
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

    if let Ok(env_path) = std::env::var(ENV_CONFIG_PATH) {
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
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        api_key: config.api_key.unwrap_or(defaults.api_key),
        api_base_url: config.api_base_url.unwrap_or(defaults.api_base_url),
        page_size: config.page_size.unwrap_or(defaults.page_size),
        debounce_ms: config.debounce_ms.unwrap_or(defaults.debounce_ms),
        request_timeout_ms: config
            .request_timeout_ms
            .unwrap_or(defaults.request_timeout_ms),
        layout: config.layout.unwrap_or(defaults.layout),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FLICKR_API_KEY`: Override API key
/// - `FLICKR_CAROUSEL_DEBOUNCE_MS`: Override debounce window (ignored unless numeric)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(api_key) = std::env::var(ENV_API_KEY) {
        config.api_key = api_key;
    }

    if let Some(debounce_ms) = std::env::var(ENV_DEBOUNCE_MS)
        .ok()
        .and_then(|value| value.trim().parse().ok())
    {
        config.debounce_ms = debounce_ms;
    }

    config
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub api_key: Option<String>,
    pub debounce_ms: Option<u64>,
    pub layout: Option<LayoutMode>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(api_key) = overrides.api_key {
        config.api_key = api_key;
    }

    if let Some(debounce_ms) = overrides.debounce_ms {
        config.debounce_ms = debounce_ms;
    }

    if let Some(layout) = overrides.layout {
        config.layout = layout;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
