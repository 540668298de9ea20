//! Configuration schema definitions.
//!
//! All sections use `#[serde(default)]`, so a config file only needs the
//! keys it changes.

use super::error::{ConfigError, ConfigResult};
use crate::command::DEFAULT_CAPACITY;
use crate::state::{NO_PORT, PORT_NAME_MAX_LEN};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Theme names accepted by `console.theme`.
pub const THEME_NAMES: &[&str] = &["dark", "light", "solarized", "nord"];

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Console (event loop and input) configuration
    pub console: ConsoleConfig,
    /// Initial session values
    pub session: SessionConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Check values that would break the console invariants.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.console.refresh_rate_ms == 0 {
            return Err(ConfigError::validation(
                "console.refresh_rate_ms",
                "must be greater than 0",
            ));
        }
        if self.console.command_buffer_size < 2 {
            return Err(ConfigError::validation(
                "console.command_buffer_size",
                "must be at least 2",
            ));
        }
        if !THEME_NAMES.contains(&self.console.theme.as_str()) {
            return Err(ConfigError::validation(
                "console.theme",
                format!("unknown theme '{}'", self.console.theme),
            ));
        }
        if self.session.port_name.len() > PORT_NAME_MAX_LEN {
            return Err(ConfigError::validation(
                "session.port_name",
                format!("longer than {PORT_NAME_MAX_LEN} characters"),
            ));
        }
        Ok(())
    }
}

/// Console configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Tick period in milliseconds
    pub refresh_rate_ms: u64,
    /// Block on input instead of polling once per tick
    pub blocking_input: bool,
    /// Command-line buffer capacity, including the reserved slot
    pub command_buffer_size: usize,
    /// Theme name: "dark", "light", "solarized", "nord"
    pub theme: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: 16,
            blocking_input: false,
            command_buffer_size: DEFAULT_CAPACITY,
            theme: "dark".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Get the tick period as Duration
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_rate_ms)
    }
}

/// Initial values for the session status model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub port_name: String,
    pub baud: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            port_name: NO_PORT.to_string(),
            baud: 0,
        }
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path. Without one, nothing is logged: the console owns the terminal.
    pub file: Option<PathBuf>,
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Log format: "pretty" or "compact"
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line format
    #[default]
    Pretty,
    /// Single-line format
    Compact,
}
