//! Configuration file loading with precedence handling.

use crate::model::{GeoPoint, MapStyle};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable selecting the config file.
pub const CONFIG_ENV: &str = "TUCUMAP_CONFIG";
/// Environment variable selecting the route catalog file.
pub const CATALOG_ENV: &str = "TUCUMAP_CATALOG";
/// Environment variable selecting the map style.
pub const MAP_STYLE_ENV: &str = "TUCUMAP_MAP_STYLE";

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

    /// Config file contains invalid TOML syntax or values.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// An environment variable holds a value that cannot be used.
    #[error("Invalid value '{value}' for {variable}")]
    InvalidEnvValue {
        /// Variable name.
        variable: &'static str,
        /// Offending value.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tucumap/config.toml`:
///
/// ```toml
/// catalog_path = "/usr/share/tucumap/lines.json"
/// map_style = "satellite"
/// device_location = { latitude = -26.83, longitude = -65.2 }
/// log_file_path = "/tmp/tucumap.log"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Route catalog JSON file. Built-in lines when absent.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Base map layer on startup.
    #[serde(default)]
    pub map_style: Option<MapStyle>,

    /// Position reported by the device location lookup.
    #[serde(default)]
    pub device_location: Option<GeoPoint>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Route catalog file; `None` selects the built-in lines.
    pub catalog_path: Option<PathBuf>,
    /// Base map layer on startup.
    pub map_style: MapStyle,
    /// Device position; `None` means no position source.
    pub device_location: Option<GeoPoint>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            map_style: MapStyle::Standard,
            device_location: None,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tucumap/tucumap.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tucumap").join("tucumap.log")
    } else {
        PathBuf::from("tucumap.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
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
/// Returns `~/.config/tucumap/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tucumap").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `TUCUMAP_CONFIG` environment variable
/// 3. Default path `~/.config/tucumap/config.toml`
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

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{CONFIG_ENV} is empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TUCUMAP_CATALOG`: Override catalog file
/// - `TUCUMAP_MAP_STYLE`: Override map style (`standard` or `satellite`)
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvValue` for an unknown map style.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(catalog) = std::env::var(CATALOG_ENV) {
        if !catalog.is_empty() {
            config.catalog_path = Some(PathBuf::from(catalog));
        }
    }

    if let Ok(style) = std::env::var(MAP_STYLE_ENV) {
        config.map_style = MapStyle::parse(&style).ok_or(ConfigError::InvalidEnvValue {
            variable: MAP_STYLE_ENV,
            value: style.clone(),
        })?;
    }

    Ok(config)
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
        catalog_path: config.catalog_path.or(defaults.catalog_path),
        map_style: config.map_style.unwrap_or(defaults.map_style),
        device_location: config.device_location.or(defaults.device_location),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Command-line overrides, each `None`/`false` when the flag was not given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    /// `--catalog <path>`
    pub catalog_path: Option<PathBuf>,
    /// `--location <lat,lon>`
    pub device_location: Option<GeoPoint>,
    /// `--no-location`
    pub no_location: bool,
    /// `--satellite`
    pub satellite: bool,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
/// `--no-location` wins over any configured or given position.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(path) = cli.catalog_path {
        config.catalog_path = Some(path);
    }

    if let Some(point) = cli.device_location {
        config.device_location = Some(point);
    }

    if cli.no_location {
        config.device_location = None;
    }

    if cli.satellite {
        config.map_style = MapStyle::Satellite;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
