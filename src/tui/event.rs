//! Input collaborator: turns crossterm events into controller keys.

use crate::controller::Key;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// Source of at most one key per tick.
pub trait InputSource {
    /// Return the next key, or `None` when nothing is pending. Blocking
    /// sources wait for an event instead of returning `None` early.
    fn poll_key(&mut self) -> io::Result<Option<Key>>;
}

/// Reads keys from the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermInput {
    blocking: bool,
}

impl CrosstermInput {
    pub fn new(blocking: bool) -> Self {
        Self { blocking }
    }

    pub fn is_blocking(&self) -> bool {
        self.blocking
    }
}

impl InputSource for CrosstermInput {
    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        if !self.blocking && !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        Ok(translate(event::read()?))
    }
}

/// Map a terminal event to a key. Mouse, focus and paste events, and key
/// releases, produce nothing.
pub fn translate(event: CrosstermEvent) -> Option<Key> {
    match event {
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(translate_key(key)),
        CrosstermEvent::Resize(_, _) => Some(Key::Resize),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Key {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Key::Other
        }
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        _ => Key::Other,
    }
}
