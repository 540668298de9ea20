//! Shared test utilities for the console tests.
//!
//! - Scripted input source that replays keys one per tick
//! - Helpers to type whole command lines
//! - Row extraction from ratatui's `TestBackend`

#![allow(dead_code)]

use serial_sim::controller::{Key, ModeController};
use serial_sim::state::SessionState;
use serial_sim::Flow;
#[cfg(feature = "tui")]
use std::collections::VecDeque;
#[cfg(feature = "tui")]
use std::io;

/// Keys for `:<line><Enter>`.
pub fn command_keys(line: &str) -> Vec<Key> {
    let mut keys = vec![Key::Char(':')];
    keys.extend(line.chars().map(Key::Char));
    keys.push(Key::Enter);
    keys
}

/// Feed every key to `controller`, returning the flow of the last one.
pub fn feed(controller: &mut ModeController, state: &mut SessionState, keys: &[Key]) -> Flow {
    let mut flow = Flow::Continue;
    for key in keys {
        flow = controller.handle_key(*key, state);
    }
    flow
}

/// Input source that hands out one queued key per poll, then nothing.
#[cfg(feature = "tui")]
#[derive(Debug, Default)]
pub struct ScriptedInput {
    keys: VecDeque<Key>,
    /// Number of polls made so far.
    pub polls: usize,
}

#[cfg(feature = "tui")]
impl ScriptedInput {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            polls: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(feature = "tui")]
impl serial_sim::tui::InputSource for ScriptedInput {
    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        self.polls += 1;
        Ok(self.keys.pop_front())
    }
}

/// Text of row `y` of a `TestBackend` screen.
#[cfg(feature = "tui")]
pub fn screen_row(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}
