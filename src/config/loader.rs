//! Configuration file loading with precedence handling.
//!
//! Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest).

use crate::model::{InvalidMode, Mode, ParameterSet};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "BALCALC_CONFIG";

/// Environment variable overriding the start mode.
pub const ENV_MODE: &str = "BALCALC_MODE";

/// Environment variable overriding the unit label.
pub const ENV_UNIT: &str = "BALCALC_UNIT";

/// Unit label shown when nothing else is configured.
pub const DEFAULT_UNIT_LABEL: &str = "cm";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config path names something that cannot hold a config file.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A `[defaults]` value is infinite or NaN.
    #[error("Invalid value in {path}: {field} must be a finite number")]
    NonFiniteValue {
        /// Config file holding the value.
        path: PathBuf,
        /// Key of the offending value.
        field: &'static str,
    },

    /// A mode override from the environment is not a known mode.
    #[error("Invalid {ENV_MODE}: {0}")]
    InvalidMode(#[from] InvalidMode),
}

/// TOML configuration file structure.
///
/// All fields are optional. Corresponds to `~/.config/balcalc/config.toml`:
///
/// ```toml
/// mode = "triangle"
/// unit_label = "in"
///
/// [defaults]
/// rail_length = 96.0
/// baluster_width = 1.5
/// spacing = 3.5
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Mode shown at startup.
    #[serde(default)]
    pub mode: Option<Mode>,

    /// Label printed after every length.
    #[serde(default)]
    pub unit_label: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Starting parameter values; also what the reset key restores.
    #[serde(default)]
    pub defaults: Option<ParameterOverrides>,
}

/// Optional replacements for the numeric parameters.
///
/// Used for the `[defaults]` table of the config file and for the numeric
/// command line flags.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ParameterOverrides {
    /// Flat rail length.
    #[serde(default)]
    pub rail_length: Option<f64>,
    /// Baluster width.
    #[serde(default)]
    pub baluster_width: Option<f64>,
    /// Space between balusters.
    #[serde(default)]
    pub spacing: Option<f64>,
    /// Triangle base length.
    #[serde(default)]
    pub triangle_base: Option<f64>,
    /// Manual triangle height.
    #[serde(default)]
    pub triangle_height: Option<f64>,
    /// Triangle angle in degrees.
    #[serde(default)]
    pub triangle_angle_degrees: Option<f64>,
}

impl ParameterOverrides {
    /// Key of the first override that is infinite or NaN.
    ///
    /// TOML accepts `inf` and `nan` as floats; the command line and the form
    /// reject them, so the config file must too.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        [
            ("rail_length", self.rail_length),
            ("baluster_width", self.baluster_width),
            ("spacing", self.spacing),
            ("triangle_base", self.triangle_base),
            ("triangle_height", self.triangle_height),
            ("triangle_angle_degrees", self.triangle_angle_degrees),
        ]
        .into_iter()
        .find(|(_, value)| value.is_some_and(|v| !v.is_finite()))
        .map(|(field, _)| field)
    }

    /// Replace every field of `params` that has an override.
    pub fn apply_to(&self, params: ParameterSet) -> ParameterSet {
        ParameterSet {
            mode: params.mode,
            rail_length: self.rail_length.unwrap_or(params.rail_length),
            baluster_width: self.baluster_width.unwrap_or(params.baluster_width),
            spacing: self.spacing.unwrap_or(params.spacing),
            triangle_base: self.triangle_base.unwrap_or(params.triangle_base),
            triangle_height: self.triangle_height.unwrap_or(params.triangle_height),
            triangle_angle_degrees: self
                .triangle_angle_degrees
                .unwrap_or(params.triangle_angle_degrees),
        }
    }
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Label printed after every length.
    pub unit_label: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Starting parameters, including the start mode.
    pub defaults: ParameterSet,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            unit_label: DEFAULT_UNIT_LABEL.to_string(),
            log_file_path: default_log_path(),
            defaults: ParameterSet::default(),
        }
    }
}

impl ResolvedConfig {
    /// Mode shown at startup.
    pub fn mode(&self) -> Mode {
        self.defaults.mode
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/balcalc/balcalc.log` on Linux, the platform state
/// directory elsewhere, or `balcalc.log` in the current directory when no
/// state directory is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("balcalc").join("balcalc.log")
    } else {
        PathBuf::from("balcalc.log")
    }
}

/// Resolve default config file path.
///
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("balcalc").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist; defaults apply.
///
/// # Errors
///
/// Returns error if the file exists but has read or parse errors, or if a
/// `[defaults]` value is not a finite number.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    if path.is_dir() {
        return Err(ConfigError::InvalidPath(format!(
            "{} is a directory",
            path.display()
        )));
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    if let Some(field) = config
        .defaults
        .as_ref()
        .and_then(ParameterOverrides::first_non_finite)
    {
        return Err(ConfigError::NonFiniteValue { path, field });
    }

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `BALCALC_CONFIG` environment variable
/// 3. Default path `~/.config/balcalc/config.toml`
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

    if let Some(env_path) = std::env::var_os(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let mut params = defaults.defaults;
    if let Some(mode) = config.mode {
        params.mode = mode;
    }
    if let Some(overrides) = config.defaults {
        params = overrides.apply_to(params);
    }

    ResolvedConfig {
        unit_label: config.unit_label.unwrap_or(defaults.unit_label),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        defaults: params,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `BALCALC_MODE` and `BALCALC_UNIT`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidMode`] when `BALCALC_MODE` names no mode.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(mode) = std::env::var(ENV_MODE) {
        config.defaults.mode = mode.parse()?;
    }

    if let Ok(unit) = std::env::var(ENV_UNIT) {
        config.unit_label = unit;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// Only flags the user actually passed are `Some`.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    mode_override: Option<Mode>,
    parameter_overrides: &ParameterOverrides,
) -> ResolvedConfig {
    if let Some(mode) = mode_override {
        config.defaults.mode = mode;
    }
    config.defaults = parameter_overrides.apply_to(config.defaults);
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
