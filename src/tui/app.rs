//! Console event loop.

use super::event::InputSource;
use super::theme::Theme;
use super::ui::{Display, View};
use crate::command::Flow;
use crate::config::Config;
use crate::controller::{Key, ModeController};
use crate::state::SessionState;
use std::io;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The terminal size differed from the previous tick.
    pub resized: bool,
    /// The key consumed this tick, if any.
    pub key: Option<Key>,
    /// A redraw was requested from the display.
    pub redrawn: bool,
}

/// The console: session state, mode controller and tick loop.
pub struct App {
    /// Session status model
    pub state: SessionState,
    /// Mode state machine and command-line buffer
    pub controller: ModeController,
    /// Current theme
    pub theme: Theme,
    tick_interval: Duration,
    running: bool,
    /// Size seen on the previous tick, as `(rows, cols)`.
    last_size: Option<(u16, u16)>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let theme = Theme::by_name(&config.console.theme)
            .cloned()
            .unwrap_or_default();

        Self {
            state: SessionState::from_config(&config.session),
            controller: ModeController::new(config.console.command_buffer_size),
            theme,
            tick_interval: config.console.tick_interval(),
            running: true,
            last_size: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run ticks until a quit is requested, sleeping out the remainder of
    /// each tick period.
    pub fn run<I, D>(&mut self, input: &mut I, display: &mut D) -> io::Result<()>
    where
        I: InputSource,
        D: Display,
    {
        info!(tick = ?self.tick_interval, "console started");
        while self.running {
            let started = Instant::now();
            self.tick(input, display)?;
            if let Some(rest) = self.tick_interval.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
        info!("console stopped");
        Ok(())
    }

    /// One iteration: detect a resize, consume at most one key, redraw if
    /// anything visible changed.
    ///
    /// A resize is drawn before polling, so a blocking input source never
    /// waits in front of a stale or blank screen.
    pub fn tick<I, D>(&mut self, input: &mut I, display: &mut D) -> io::Result<TickOutcome>
    where
        I: InputSource,
        D: Display,
    {
        let size = display.terminal_size()?;
        let resized = self.last_size != Some(size);
        self.last_size = Some(size);
        if resized {
            debug!(rows = size.0, cols = size.1, "terminal size changed");
            self.draw(display)?;
        }

        let key = input.poll_key()?;
        if let Some(key) = key {
            if key == Key::Resize {
                // Re-read dimensions next tick.
                self.last_size = None;
            }
            if self.controller.handle_key(key, &mut self.state) == Flow::Quit {
                self.running = false;
            }
            if key == Key::Enter {
                debug!(status = %self.state.status_line(), "command line committed");
            }
            // Serial data would also force a redraw here once a transport exists.
            self.draw(display)?;
        }

        Ok(TickOutcome {
            resized,
            key,
            redrawn: resized || key.is_some(),
        })
    }

    fn draw<D: Display>(&self, display: &mut D) -> io::Result<()> {
        display.draw_view(&View {
            state: &self.state,
            controller: &self.controller,
            theme: &self.theme,
        })
    }
}
