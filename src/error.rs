//! Process-level errors.
//!
//! Command failures never reach this type: they are recorded on the session
//! as [`crate::command::CommandError`] and shown in the status line. `AppError`
//! covers the few things that stop the program from starting or from
//! handing the terminal back.

use crate::config::ConfigError;
use thiserror::Error;

/// Unified application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal setup, drawing, input polling or teardown failed.
    #[error("An I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration could not be loaded or failed validation.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// The log file could not be opened or the subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

/// A specialized `Result` type for the binary and event loop.
pub type AppResult<T> = Result<T, AppError>;
