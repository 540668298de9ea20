//! Modal input state machine.
//!
//! The console is either in `Normal` mode, where single keys act
//! immediately, or in `CommandLine` mode, where keys are collected into an
//! [`InputBuffer`] until Enter commits the line to the parser.

use crate::command::{self, Flow, InputBuffer};
use crate::state::SessionState;
use tracing::debug;

/// Console input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    CommandLine,
}

/// Input events the controller understands, independent of the terminal
/// backend that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    /// The terminal was resized. Never changes mode.
    Resize,
    /// Ctrl+C. Quits from either mode.
    Interrupt,
    /// Anything else (function keys, arrows, modified keys).
    Other,
}

/// Drives mode transitions and the command-line buffer.
#[derive(Debug, Clone)]
pub struct ModeController {
    mode: Mode,
    buffer: InputBuffer,
}

impl ModeController {
    pub fn new(buffer_capacity: usize) -> Self {
        Self {
            mode: Mode::Normal,
            buffer: InputBuffer::new(buffer_capacity),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    /// The text cursor is shown only while a command line is being edited.
    pub fn cursor_visible(&self) -> bool {
        self.mode == Mode::CommandLine
    }

    /// Consume one key. Returns `Flow::Quit` when the key (or the command
    /// it committed) asks the loop to stop.
    pub fn handle_key(&mut self, key: Key, state: &mut SessionState) -> Flow {
        if key == Key::Interrupt {
            debug!("interrupt key");
            return Flow::Quit;
        }

        let before = self.mode;
        let flow = match self.mode {
            Mode::Normal => self.handle_normal_key(key, state),
            Mode::CommandLine => self.handle_command_line_key(key, state),
        };
        if before != self.mode {
            debug!(from = ?before, to = ?self.mode, "mode changed");
        }
        flow
    }

    fn handle_normal_key(&mut self, key: Key, state: &mut SessionState) -> Flow {
        match key {
            Key::Char(':') => {
                self.buffer.clear();
                self.mode = Mode::CommandLine;
            }
            Key::Char('q') => return Flow::Quit,
            Key::Escape => state.clear_errors(),
            _ => {}
        }
        Flow::Continue
    }

    fn handle_command_line_key(&mut self, key: Key, state: &mut SessionState) -> Flow {
        match key {
            Key::Escape => self.leave_command_line(),
            Key::Enter => {
                let flow = if self.buffer.is_empty() {
                    Flow::Continue
                } else {
                    command::dispatch(command::parse(self.buffer.as_str()), state)
                };
                self.leave_command_line();
                return flow;
            }
            Key::Backspace => {
                if self.buffer.remove_last().is_none() {
                    self.leave_command_line();
                }
            }
            Key::Char(c) if is_printable(c) => {
                // A full buffer drops the key silently.
                self.buffer.append(c);
            }
            _ => {}
        }
        Flow::Continue
    }

    fn leave_command_line(&mut self) {
        self.buffer.clear();
        self.mode = Mode::Normal;
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(command::DEFAULT_CAPACITY)
    }
}

fn is_printable(c: char) -> bool {
    c.is_ascii_graphic() || c == ' '
}
