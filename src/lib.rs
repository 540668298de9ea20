//! Serial Interface Monitor library
//!
//! The interactive front-end of a terminal serial-port monitor: a modal
//! console where single keys act immediately and `:` opens a command line
//! whose commands configure the serial session.
//!
//! # Modules
//!
//! - `command`: Edit buffer, command table, parser and dispatcher
//! - `controller`: Normal / command-line mode state machine
//! - `state`: Session status model shown in the status line
//! - `config`: Configuration management with TOML support
//! - `error`: Process-level errors
//! - `logging`: File-backed tracing setup
//! - `tui`: Terminal event loop and rendering (when `tui` feature is enabled)

pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod state;

// TUI module
#[cfg(feature = "tui")]
pub mod tui;

// Re-export commonly used types for convenience
pub use command::{dispatch, parse, Command, CommandError, Flow, InputBuffer};
pub use config::{Config, ConfigError, ConfigLoader, ConfigResult};
pub use controller::{Key, Mode, ModeController};
pub use error::{AppError, AppResult};
pub use state::{Framing, SessionState};
