//! Session status model.
//!
//! `SessionState` is the configuration/status record the status line renders
//! and a (future) transport layer reads. It is owned by the event loop and
//! only mutated through [`crate::command::dispatch`] and the Normal-mode
//! Escape key.

use crate::command::{CommandError, STRING_ARG_LIMIT};
use crate::config::SessionConfig;

/// Port name shown before any `set_port` command has run.
pub const NO_PORT: &str = "NO_PORT";

/// Longest port name the session will hold.
pub const PORT_NAME_MAX_LEN: usize = STRING_ARG_LIMIT - 1;

/// Serial character framing as shown in the status line (`data-start-parity`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Framing {
    pub data_bits: u8,
    pub start_bits: u8,
    pub parity_bit: bool,
}

/// Current configuration and status of the monitored serial session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub port_name: String,
    pub baud: u64,
    pub framing: Framing,
    pub is_open: bool,
    pub recording_to_file: bool,
    /// Last command error, shown until cleared with Escape in Normal mode.
    pub last_error: Option<CommandError>,
    /// Fault reported by the transport layer, if any.
    pub io_error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            port_name: NO_PORT.to_string(),
            baud: 0,
            framing: Framing::default(),
            is_open: false,
            recording_to_file: false,
            last_error: None,
            io_error: None,
        }
    }
}

impl SessionState {
    /// Build the initial session from the `[session]` config section.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            port_name: config.port_name.clone(),
            baud: config.baud,
            ..Self::default()
        }
    }

    /// Clear every displayed error.
    pub fn clear_errors(&mut self) {
        self.last_error = None;
        self.io_error = None;
    }

    /// Status fields: `[O|C] [R] PORT BAUD D-S-P `.
    pub fn status_fields(&self) -> String {
        let mut line = String::new();
        line.push(if self.is_open { 'O' } else { 'C' });
        line.push(' ');
        if self.recording_to_file {
            line.push_str("R ");
        }
        line.push_str(&format!(
            "{} {} {}-{}-{} ",
            self.port_name,
            self.baud,
            self.framing.data_bits,
            self.framing.start_bits,
            u8::from(self.framing.parity_bit)
        ));
        line
    }

    /// Error text for the status line. A command error hides an I/O error.
    pub fn status_error(&self) -> Option<String> {
        self.last_error
            .map(|err| err.to_string())
            .or_else(|| self.io_error.clone())
    }

    /// Full status line: fields followed by the error text, if any.
    pub fn status_line(&self) -> String {
        let mut line = self.status_fields();
        if let Some(err) = self.status_error() {
            line.push_str(&err);
        }
        line
    }
}
