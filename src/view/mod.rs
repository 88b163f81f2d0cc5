//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod filter_bar;
mod header;
mod help_line;
mod layout;
mod log_body;
mod styles;
pub mod terminal;

pub use filter_bar::FilterBar;
pub use header::Header;
pub use help_line::HelpLine;
pub use layout::ScreenLayout;
pub use log_body::LogBody;
pub use styles::{ColorConfig, Theme};

use crate::model::RenderError;
use crate::source::LogStream;
use crate::state::{AppEvent, AppState, Control};
use constants::FALLBACK_SIZE;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io::{self, IsTerminal};
use std::time::Duration;
use terminal::TerminalGuard;
use tracing::{debug, info};

/// Upper bound on source events applied between two terminal polls, so a
/// flood of log lines cannot starve key handling.
const MAX_SOURCE_EVENTS_PER_TICK: usize = 4096;

/// Render the whole screen. Pure: derives everything from `state`.
pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let layout = ScreenLayout::split(frame.area());
    frame.render_widget(Header::new(state, theme), layout.header);
    frame.render_widget(LogBody::new(state, theme), layout.body);
    frame.render_widget(FilterBar::new(state, theme), layout.filter);
    frame.render_widget(HelpLine::new(state.focus(), theme), layout.help);
}

/// Translate a terminal event into a state machine event.
///
/// Returns `None` for events the viewer does not react to (mouse, focus,
/// paste, key releases).
pub fn translate_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(AppEvent::Key(key)),
        Event::Resize(width, height) => Some(AppEvent::Resize { width, height }),
        _ => None,
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    stream: LogStream,
    theme: Theme,
    tick: Duration,
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create an application drawing to `terminal`.
    pub fn new(
        terminal: Terminal<B>,
        state: AppState,
        stream: LogStream,
        theme: Theme,
        tick: Duration,
    ) -> Self {
        Self {
            terminal,
            state,
            stream,
            theme,
            tick,
        }
    }

    /// Run the event loop until the user quits.
    ///
    /// Each iteration waits up to one tick for a terminal event, applies it,
    /// then applies pending log lines one at a time. The screen is redrawn
    /// only when something changed.
    pub fn run(&mut self) -> Result<(), RenderError> {
        self.draw()?;

        loop {
            let mut dirty = false;

            if event::poll(self.tick)? {
                if let Some(app_event) = translate_event(event::read()?) {
                    if self.state.handle_event(app_event) == Control::Quit {
                        info!(lines = self.state.buffer().len(), "quit requested");
                        return Ok(());
                    }
                    dirty = true;
                }
            }

            dirty |= self.drain_source() > 0;

            if dirty {
                self.draw()?;
            }
        }
    }

    /// Apply pending source events; returns how many were applied.
    pub fn drain_source(&mut self) -> usize {
        let mut applied = 0;
        while applied < MAX_SOURCE_EVENTS_PER_TICK {
            let Some(event) = self.stream.try_next() else {
                break;
            };
            // Source events never end the session.
            let _ = self.state.handle_event(event.into());
            applied += 1;
        }
        if applied > 0 {
            debug!(applied, "source events applied");
        }
        applied
    }

    /// Draw the current state.
    pub fn draw(&mut self) -> Result<(), RenderError> {
        let Self {
            terminal,
            state,
            theme,
            ..
        } = self;
        terminal.draw(|frame| render(frame, state, theme))?;
        Ok(())
    }

    /// Current viewer state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The terminal being drawn to.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Run an interactive session on the real terminal.
///
/// Owns terminal setup and teardown; the terminal is restored before this
/// returns, whether the session ended normally or with an error.
///
/// # Errors
///
/// - `RenderError::NotATerminal` if stdout is not a terminal
/// - `RenderError::Io` for any terminal I/O failure
pub fn run_tui(
    mut state: AppState,
    stream: LogStream,
    theme: Theme,
    tick: Duration,
) -> Result<(), RenderError> {
    let mut stdout = io::stdout();
    if !stdout.is_terminal() {
        return Err(RenderError::NotATerminal);
    }

    let _guard = TerminalGuard::enter(&mut stdout)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let (width, height) = match terminal.size() {
        Ok(size) if size.width > 0 => (size.width, size.height),
        _ => FALLBACK_SIZE,
    };
    state.resize(width, height);

    TuiApp::new(terminal, state, stream, theme, tick).run()
}
