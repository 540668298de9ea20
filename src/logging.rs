//! Tracing subscriber setup.
//!
//! The console owns the terminal, so logs never go to stdout or stderr.
//! Without a configured log file no subscriber is installed and every
//! `tracing` macro is a no-op.

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{AppError, AppResult};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber described by `config`.
///
/// Returns `Ok(false)` when logging is disabled. `RUST_LOG` takes precedence
/// over `config.level`.
pub fn init(config: &LoggingConfig) -> AppResult<bool> {
    let Some(ref path) = config.file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::Logging(format!("{}: {e}", path.display())))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AppError::Logging(e.to_string()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false);

    let installed = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    installed.map_err(|e| AppError::Logging(e.to_string()))?;
    Ok(true)
}
