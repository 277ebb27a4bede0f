//! Configuration file loading with precedence handling.

use crate::model::ThemePreference;
use crate::store::default_preferences_path;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
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
}

/// Where evaluation errors are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorDisplay {
    /// Notification only; the buffer is left as it was.
    #[default]
    Notify,
    /// Notification, and the buffer is replaced with the error text.
    Buffer,
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/gridcalc/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Theme used when nothing is stored and the terminal gives no hint.
    #[serde(default)]
    pub default_theme: Option<ThemePreference>,

    /// Show the history panel on startup.
    #[serde(default)]
    pub show_history: Option<bool>,

    /// How long a notification stays on screen.
    #[serde(default)]
    pub notification_timeout_ms: Option<u64>,

    /// Maximum notifications visible at once.
    #[serde(default)]
    pub notification_capacity: Option<usize>,

    /// Where evaluation errors are shown.
    #[serde(default)]
    pub error_display: Option<ErrorDisplay>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Path to the preferences file holding the theme flag.
    #[serde(default)]
    pub preferences_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Fallback theme.
    pub default_theme: ThemePreference,
    /// Theme forced for this session (env or CLI); bypasses the store on startup.
    pub theme_override: Option<ThemePreference>,
    /// History panel visible on startup.
    pub show_history: bool,
    /// Notification lifetime in milliseconds.
    pub notification_timeout_ms: u64,
    /// Notification queue capacity.
    pub notification_capacity: usize,
    /// Evaluation error display policy.
    pub error_display: ErrorDisplay,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Path to the preferences file.
    pub preferences_path: PathBuf,
    /// Whether theme changes are written to the preferences file.
    pub persist_preferences: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemePreference::Light,
            theme_override: None,
            show_history: true,
            notification_timeout_ms: 4000,
            notification_capacity: 5,
            error_display: ErrorDisplay::Notify,
            log_file_path: default_log_path(),
            preferences_path: default_preferences_path(),
            persist_preferences: true,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/gridcalc/gridcalc.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("gridcalc").join("gridcalc.log")
    } else {
        PathBuf::from("gridcalc.log")
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
/// Returns `~/.config/gridcalc/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gridcalc").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `GRIDCALC_CONFIG` environment variable
/// 3. Default path `~/.config/gridcalc/config.toml`
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

    if let Ok(env_path) = std::env::var("GRIDCALC_CONFIG") {
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
        default_theme: config.default_theme.unwrap_or(defaults.default_theme),
        theme_override: defaults.theme_override,
        show_history: config.show_history.unwrap_or(defaults.show_history),
        notification_timeout_ms: config
            .notification_timeout_ms
            .unwrap_or(defaults.notification_timeout_ms),
        notification_capacity: config
            .notification_capacity
            .unwrap_or(defaults.notification_capacity),
        error_display: config.error_display.unwrap_or(defaults.error_display),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        preferences_path: config.preferences_path.unwrap_or(defaults.preferences_path),
        persist_preferences: defaults.persist_preferences,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `GRIDCALC_THEME`: force the session theme. Unrecognized values are
///   logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(theme) = std::env::var("GRIDCALC_THEME") {
        match theme.parse::<ThemePreference>() {
            Ok(theme) => config.theme_override = Some(theme),
            Err(e) => warn!(error = %e, "Ignoring GRIDCALC_THEME"),
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
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    theme_override: Option<ThemePreference>,
    no_persist: bool,
) -> ResolvedConfig {
    if let Some(theme) = theme_override {
        config.theme_override = Some(theme);
    }

    if no_persist {
        config.persist_preferences = false;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

#[cfg(test)]
mod log_path_tests {
    use super::*;

    #[test]
    fn default_log_path_ends_with_gridcalc_log() {
        let path = default_log_path();
        assert!(
            path.to_string_lossy().ends_with("gridcalc.log"),
            "Default log path should end with 'gridcalc.log', got: {:?}",
            path
        );
    }

    #[test]
    fn resolved_config_default_includes_log_path() {
        let config = ResolvedConfig::default();
        assert!(
            !config.log_file_path.as_os_str().is_empty(),
            "Default config should have non-empty log_file_path"
        );
    }

    #[test]
    fn config_file_log_path_overrides_default() {
        let custom_path = PathBuf::from("/custom/path/to/app.log");
        let config_file = ConfigFile {
            log_file_path: Some(custom_path.clone()),
            ..ConfigFile::default()
        };

        let resolved = merge_config(Some(config_file));
        assert_eq!(
            resolved.log_file_path, custom_path,
            "Config file log_file_path should override default"
        );
    }

    #[test]
    fn missing_config_file_log_path_uses_default() {
        let resolved = merge_config(Some(ConfigFile::default()));
        assert_eq!(
            resolved.log_file_path,
            default_log_path(),
            "Missing log_file_path in config should use default"
        );
    }
}
