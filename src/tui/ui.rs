//! Display collaborator: terminal acquisition and rendering.

use super::theme::Theme;
use crate::controller::{Mode, ModeController};
use crate::state::SessionState;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};

/// Everything a frame is drawn from.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub state: &'a SessionState,
    pub controller: &'a ModeController,
    pub theme: &'a Theme,
}

/// Screen the event loop draws to.
pub trait Display {
    /// Current size as `(rows, cols)`.
    fn terminal_size(&mut self) -> io::Result<(u16, u16)>;

    /// Redraw the whole screen from `view`.
    fn draw_view(&mut self, view: &View<'_>) -> io::Result<()>;
}

impl<B: Backend> Display for Terminal<B> {
    fn terminal_size(&mut self) -> io::Result<(u16, u16)> {
        let size = self.size()?;
        Ok((size.height, size.width))
    }

    fn draw_view(&mut self, view: &View<'_>) -> io::Result<()> {
        self.draw(|frame| render(view, frame))?;
        Ok(())
    }
}

/// Owns the terminal in raw mode on the alternate screen. Dropping the
/// guard restores cooked mode, the main screen and a visible cursor.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Set up the terminal for console rendering.
    pub fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(e)
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Render the entire screen.
pub fn render(view: &View<'_>, frame: &mut Frame) {
    let size = frame.area();
    if size.height == 0 || size.width == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Serial output
            Constraint::Length(1), // Status / command line
        ])
        .split(size);

    render_output(view, frame, chunks[0]);
    match view.controller.mode() {
        Mode::Normal => render_status_line(view, frame, chunks[1]),
        Mode::CommandLine => render_command_line(view, frame, chunks[1]),
    }
}

fn render_output(view: &View<'_>, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let theme = view.theme;
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "no serial data",
        Style::default().fg(theme.inactive),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" sim ")
            .style(Style::default().bg(theme.bg)),
    );
    frame.render_widget(placeholder, area);
}

fn render_status_line(view: &View<'_>, frame: &mut Frame, area: Rect) {
    let theme = view.theme;
    let marker_style = if view.state.is_open {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg)
    };

    let fields = view.state.status_fields();
    let (marker, rest) = fields.split_at(1);
    let mut spans = vec![
        Span::styled(marker.to_string(), marker_style),
        Span::styled(rest.to_string(), Style::default().fg(theme.fg)),
    ];
    if let Some(err) = view.state.status_error() {
        spans.push(Span::styled(
            err,
            Style::default()
                .fg(theme.error_color)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.status_bg));
    frame.render_widget(status, area);
}

fn render_command_line(view: &View<'_>, frame: &mut Frame, area: Rect) {
    let theme = view.theme;
    let visible = visible_tail(view.controller.buffer().as_str(), area.width);

    let line = Line::from(vec![
        Span::styled(":", Style::default().fg(theme.accent)),
        Span::styled(visible.to_string(), Style::default().fg(theme.fg)),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme.status_bg)),
        area,
    );

    if view.controller.cursor_visible() {
        let cursor_x = area.x + 1 + visible.len() as u16;
        frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
    }
}

/// The end of `text` that fits after the prompt with one cell left for the
/// cursor.
fn visible_tail(text: &str, width: u16) -> &str {
    let room = usize::from(width).saturating_sub(2);
    let skip = text.len().saturating_sub(room);
    // The buffer only holds ASCII, so any byte offset is a char boundary.
    &text[skip..]
}
