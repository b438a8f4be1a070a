//! Configuration loading from TOML files.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. TOML file specified via --config CLI flag
//! 2. ./muxpilot.toml in the current directory
//! 3. Built-in defaults
//!
//! Everything here has a working default; a config file only overrides the
//! tunables (restart fallback command, settle delay, capture depth, extra
//! server process names).

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::classify::ServerCatalog;
use crate::error::ConfigError;

const DEFAULT_CONFIG_FILE: &str = "muxpilot.toml";
const DEFAULT_RESTART_COMMAND: &str = "bun dev";
const DEFAULT_SETTLE_DELAY_MS: u64 = 1000;
const DEFAULT_CAPTURE_LINES: u32 = 50;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub restart: RestartConfig,
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub servers: ServersConfig,
}

/// Restart-operation tunables.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RestartConfig {
    /// Fallback command when the host supplies none.
    #[serde(default = "default_restart_command")]
    pub default_command: String,
    /// Delay between interrupt and replacement command, in milliseconds.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            default_command: default_restart_command(),
            settle_delay_ms: default_settle_delay_ms(),
        }
    }
}

impl RestartConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

/// Log-capture tunables.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LogsConfig {
    /// Scrollback lines captured when the host supplies no count.
    #[serde(default = "default_capture_lines")]
    pub default_lines: u32,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            default_lines: default_capture_lines(),
        }
    }
}

/// Server-classification extension.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServersConfig {
    /// Process names appended to the built-in server allow-list.
    #[serde(default)]
    pub extra_processes: Vec<String>,
}

impl Config {
    /// Server catalog combining the built-in allow-list with configured extras.
    pub fn server_catalog(&self) -> ServerCatalog {
        ServerCatalog::with_extras(self.servers.extra_processes.clone())
    }
}

fn default_restart_command() -> String {
    DEFAULT_RESTART_COMMAND.to_string()
}

fn default_settle_delay_ms() -> u64 {
    DEFAULT_SETTLE_DELAY_MS
}

fn default_capture_lines() -> u32 {
    DEFAULT_CAPTURE_LINES
}

/// Load configuration with the documented precedence.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    if let Some(path) = path {
        let text = std::fs::read_to_string(path)?;
        return parse_config(&text);
    }
    if Path::new(DEFAULT_CONFIG_FILE).is_file() {
        let text = std::fs::read_to_string(DEFAULT_CONFIG_FILE)?;
        return parse_config(&text);
    }
    Ok(Config::default())
}

fn parse_config(text: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(text)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.restart.default_command.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "restart.default_command must not be empty".into(),
        ));
    }
    if config.logs.default_lines == 0 {
        return Err(ConfigError::Invalid(
            "logs.default_lines must be at least 1".into(),
        ));
    }
    Ok(())
}
