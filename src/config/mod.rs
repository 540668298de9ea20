//! Configuration module for the sim console.
//!
//! This module provides TOML-based configuration with environment variable overrides.
//!
//! # Configuration Resolution
//!
//! Configuration is loaded from the following locations (in order of priority):
//!
//! 1. `--config <PATH>` on the command line
//! 2. `SIM_CONFIG` environment variable (explicit path)
//! 3. `./sim.toml` (current directory)
//! 4. `~/.config/sim/config.toml` (or the platform equivalent)
//! 5. Built-in defaults (no file required)
//!
//! # Environment Overrides
//!
//! The pattern is: `SIM_<SECTION>_<KEY>`
//!
//! Examples:
//! - `SIM_CONSOLE_REFRESH_RATE_MS=33`
//! - `SIM_CONSOLE_BLOCKING_INPUT=true`
//! - `SIM_SESSION_BAUD=115200`
//!
//! # Example
//!
//! ```rust,ignore
//! use serial_sim::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load()?;
//! let config = loader.config();
//!
//! println!("Tick: {:?}", config.console.tick_interval());
//! ```

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    get_default_config_dir, get_default_config_path, resolve_config_path, ConfigLoader,
};
pub use schema::{
    Config, ConsoleConfig, LogFormat, LoggingConfig, SessionConfig, THEME_NAMES,
};
