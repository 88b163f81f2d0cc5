//! Configuration file loading with precedence handling.

use crate::model::Platform;
use crate::source::{CommandSpec, ShutdownPolicy, default_command, since_timestamp};
use chrono::Local;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "DEVLOG_CONFIG";

/// Environment variable overriding the log file path.
pub const LOG_FILE_ENV_VAR: &str = "DEVLOG_LOG_FILE";

const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
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

    /// A command override is empty or has a blank program name.
    #[error("Config key `{key}` must name a program")]
    EmptyCommand {
        /// Offending key.
        key: &'static str,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, built-in defaults are used.
/// Corresponds to `~/.config/devlog/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Replacement for `adb logcat -T {since}`.
    #[serde(default)]
    pub android_command: Option<Vec<String>>,

    /// Replacement for `xcrun simctl spawn booted log stream`.
    #[serde(default)]
    pub ios_command: Option<Vec<String>>,

    /// Kill the log process on quit instead of waiting for it.
    #[serde(default)]
    pub kill_on_quit: Option<bool>,

    /// Terminal poll interval in milliseconds.
    #[serde(default)]
    pub tick_rate_ms: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Disable colors.
    #[serde(default)]
    pub no_color: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Android log command, placeholders unresolved.
    pub android_command: CommandSpec,
    /// iOS log command, placeholders unresolved.
    pub ios_command: CommandSpec,
    /// Kill the log process on quit.
    pub kill_on_quit: bool,
    /// Terminal poll interval in milliseconds, at least 1.
    pub tick_rate_ms: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Colors disabled by config or CLI.
    pub no_color: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            android_command: default_command(Platform::Android),
            ios_command: default_command(Platform::Ios),
            kill_on_quit: true,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            log_file_path: default_log_path(),
            no_color: false,
        }
    }
}

impl ResolvedConfig {
    /// Command for `platform` with `{since}` resolved to the current time.
    pub fn command_for(&self, platform: Platform) -> CommandSpec {
        let spec = match platform {
            Platform::Android => &self.android_command,
            Platform::Ios => &self.ios_command,
        };
        spec.clone().with_since(&since_timestamp(Local::now()))
    }

    /// How to stop the log process when the viewer quits.
    pub fn shutdown_policy(&self) -> ShutdownPolicy {
        ShutdownPolicy::from_kill_on_quit(self.kill_on_quit)
    }

    /// Terminal poll interval.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/devlog/devlog.log` on Linux, or the platform
/// equivalent. Falls back to the current directory when no state directory
/// exists (macOS has none).
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("devlog").join("devlog.log")
    } else {
        PathBuf::from("devlog.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/devlog/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("devlog").join("config.toml"))
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

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `DEVLOG_CONFIG` environment variable
/// 3. Default path `~/.config/devlog/config.toml`
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

    if let Some(env_path) = std::env::var_os(CONFIG_ENV_VAR) {
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
/// `ConfigError::EmptyCommand` if a command override has no program.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    Ok(ResolvedConfig {
        android_command: command_override(
            config.android_command,
            "android_command",
            defaults.android_command,
        )?,
        ios_command: command_override(config.ios_command, "ios_command", defaults.ios_command)?,
        kill_on_quit: config.kill_on_quit.unwrap_or(defaults.kill_on_quit),
        tick_rate_ms: config
            .tick_rate_ms
            .unwrap_or(defaults.tick_rate_ms)
            .max(1),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        no_color: config.no_color.unwrap_or(defaults.no_color),
    })
}

fn command_override(
    argv: Option<Vec<String>>,
    key: &'static str,
    default: CommandSpec,
) -> Result<CommandSpec, ConfigError> {
    match argv {
        None => Ok(default),
        Some(argv) => CommandSpec::from_argv(&argv).ok_or(ConfigError::EmptyCommand { key }),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `DEVLOG_LOG_FILE`: Override log file path
///
/// `NO_COLOR` is honored separately when the theme is built.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(path) = std::env::var_os(LOG_FILE_ENV_VAR) {
        if !path.is_empty() {
            config.log_file_path = PathBuf::from(path);
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// `--no-color` can only turn colors off; leaving it unset keeps the
/// config file's choice.
pub fn apply_cli_overrides(mut config: ResolvedConfig, no_color_flag: bool) -> ResolvedConfig {
    if no_color_flag {
        config.no_color = true;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
