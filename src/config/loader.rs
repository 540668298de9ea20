//! Configuration loader with file resolution and environment override support.

use super::error::{ConfigError, ConfigResult};
use super::schema::Config;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable prefix for overrides
const ENV_PREFIX: &str = "SIM";

/// Config file name in the working directory
const LOCAL_CONFIG_FILE_NAME: &str = "sim.toml";

/// Config file name inside the platform config directory
const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable for explicit config path
const CONFIG_PATH_ENV: &str = "SIM_CONFIG";

/// Configuration loader with resolution and override logic.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Resolved config file path (if any)
    pub config_path: Option<PathBuf>,
    /// The loaded configuration
    pub config: Config,
}

impl ConfigLoader {
    /// Load configuration using standard resolution order.
    ///
    /// Resolution priority (highest to lowest):
    /// 1. `SIM_CONFIG` environment variable (explicit path)
    /// 2. `./sim.toml` (current directory)
    /// 3. `<platform config dir>/sim/config.toml`
    /// 4. Built-in defaults (no file required)
    ///
    /// Environment variables override any config file values.
    pub fn load() -> ConfigResult<Self> {
        let config_path = resolve_config_path();

        let mut config = if let Some(ref path) = config_path {
            load_from_file(path)?
        } else {
            Config::default()
        };

        apply_env_overrides(&mut config)?;
        config.validate()?;

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(ConfigError::NotFound(path));
        }
        let mut config = load_from_file(&path)?;
        apply_env_overrides(&mut config)?;
        config.validate()?;

        Ok(Self {
            config_path: Some(path),
            config,
        })
    }

    /// Create a loader with default configuration (no file).
    pub fn with_defaults() -> Self {
        let mut config = Config::default();
        // Still apply env overrides even with defaults
        if apply_env_overrides(&mut config).is_err() || config.validate().is_err() {
            config = Config::default();
        }

        Self {
            config_path: None,
            config,
        }
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the loader and return the configuration.
    pub fn into_config(self) -> Config {
        self.config
    }
}

/// Resolve the configuration file path using standard locations.
pub fn resolve_config_path() -> Option<PathBuf> {
    // 1. Explicit environment variable
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    // 2. Current directory
    let cwd_config = PathBuf::from(LOCAL_CONFIG_FILE_NAME);
    if cwd_config.exists() {
        return Some(cwd_config);
    }

    // 3. Platform config directory
    if let Some(app_config) = get_default_config_path() {
        if app_config.exists() {
            return Some(app_config);
        }
    }

    None
}

/// Get the platform config directory for this application.
pub fn get_default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "sim").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the default config file path.
pub fn get_default_config_path() -> Option<PathBuf> {
    get_default_config_dir().map(|d| d.join(CONFIG_FILE_NAME))
}

/// Load configuration from a file.
fn load_from_file(path: &Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&content).map_err(ConfigError::ParseError)
}

/// Read `SIM_<key>` and parse it, if set.
fn env_value<T: FromStr>(key: &str, message: &str) -> ConfigResult<Option<T>> {
    let var = format!("{ENV_PREFIX}_{key}");
    match std::env::var(&var) {
        Ok(val) => val
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::env_parse(var, message)),
        Err(_) => Ok(None),
    }
}

/// Apply environment variable overrides to the configuration.
///
/// Environment variables follow the pattern: `SIM_<SECTION>_<KEY>`
/// For example:
/// - `SIM_CONSOLE_REFRESH_RATE_MS=33`
/// - `SIM_SESSION_PORT_NAME=/dev/ttyUSB0`
/// - `SIM_LOGGING_FILE=/tmp/sim.log`
fn apply_env_overrides(config: &mut Config) -> ConfigResult<()> {
    // Console overrides
    if let Some(val) = env_value("CONSOLE_REFRESH_RATE_MS", "Invalid refresh rate")? {
        config.console.refresh_rate_ms = val;
    }
    if let Ok(val) = std::env::var(format!("{ENV_PREFIX}_CONSOLE_BLOCKING_INPUT")) {
        config.console.blocking_input = val.to_lowercase() == "true" || val == "1";
    }
    if let Some(val) = env_value("CONSOLE_COMMAND_BUFFER_SIZE", "Invalid buffer size")? {
        config.console.command_buffer_size = val;
    }
    if let Some(val) = env_value("CONSOLE_THEME", "Invalid theme")? {
        config.console.theme = val;
    }

    // Session overrides
    if let Some(val) = env_value("SESSION_PORT_NAME", "Invalid port name")? {
        config.session.port_name = val;
    }
    if let Some(val) = env_value("SESSION_BAUD", "Invalid baud rate")? {
        config.session.baud = val;
    }

    // Logging overrides
    if let Some(val) = env_value::<PathBuf>("LOGGING_FILE", "Invalid path")? {
        config.logging.file = Some(val);
    }
    if let Some(val) = env_value("LOGGING_LEVEL", "Invalid level")? {
        config.logging.level = val;
    }

    Ok(())
}
