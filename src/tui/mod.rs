//! Terminal front-end for the sim console.
//!
//! This module wires the core (session state, mode controller, command
//! grammar) to a real terminal: crossterm supplies keys, ratatui draws the
//! serial output area and the status/command line.
//!
//! # Example
//!
//! ```rust,ignore
//! use serial_sim::config::ConfigLoader;
//!
//! let config = ConfigLoader::load()?.into_config();
//! serial_sim::tui::run(&config)?;
//! ```

mod app;
mod event;
mod theme;
mod ui;

pub use app::{App, TickOutcome};
pub use event::{translate, CrosstermInput, InputSource};
pub use theme::{Theme, THEMES};
pub use ui::{render, Display, TerminalGuard, View};

use crate::config::Config;
use crate::error::AppResult;
use tracing::info;

/// Take over the terminal and run the console until it quits.
///
/// The terminal is restored when the guard drops, including when the loop
/// returns an error.
pub fn run(config: &Config) -> AppResult<()> {
    let mut input = CrosstermInput::new(config.console.blocking_input);
    info!(blocking = input.is_blocking(), "reading keys from terminal");
    let mut app = App::new(config);

    let mut guard = TerminalGuard::acquire()?;
    app.run(&mut input, guard.terminal_mut())?;
    Ok(())
}
