//! Application state and transitions.
//!
//! AppState is the root state type containing all viewer state. It is
//! driven exclusively from the event loop, one [`AppEvent`] at a time, so
//! nothing in here needs synchronization.

use crate::config::KeyBindings;
use crate::model::{KeyAction, LogLine, Platform};
use crate::source::SourceEvent;
use crate::state::{
    FilterInput, FilterView, LogBuffer, ViewportState, WrappedRow, handle_scroll_action,
};
use crate::view::constants::{FILTER_INPUT_MARGIN, RESERVED_ROWS};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

// ===== Focus =====

/// Which region receives keyboard input.
/// Sum type enforces exactly one focused region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Log body: scroll, clear and follow bindings are live.
    #[default]
    Body,
    /// Filter input: keys edit the filter text.
    Filter,
}

// ===== StreamStatus =====

/// Whether the log source can still deliver lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StreamStatus {
    /// The source is running.
    #[default]
    Live,
    /// The source closed its output; no more lines will arrive.
    Ended {
        /// Read error that ended the stream, if any.
        reason: Option<String>,
    },
}

// ===== Events =====

/// Input to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A key press.
    Key(KeyEvent),
    /// The terminal was resized to the given size.
    Resize {
        /// Terminal width in columns.
        width: u16,
        /// Terminal height in rows.
        height: u16,
    },
    /// A new line from the log source.
    Line(LogLine),
    /// The log source ended.
    StreamClosed {
        /// Read error that ended the stream, if any.
        error: Option<String>,
    },
}

impl From<SourceEvent> for AppEvent {
    fn from(event: SourceEvent) -> Self {
        match event {
            SourceEvent::Line(line) => AppEvent::Line(line),
            SourceEvent::Closed { error } => AppEvent::StreamClosed { error },
        }
    }
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// End the session.
    Quit,
}

// ===== AppState =====

/// Viewer state. Pure data, no I/O.
///
/// # State Machine
///
/// Focus is `Body` or `Filter`:
/// - `/` in `Body` -> `Filter`; `/` in `Filter` is ignored
/// - `Esc` in `Filter` -> `Body`; `Esc` in `Body` is ignored
/// - other keys in `Filter` edit the filter text
/// - `q` and `Ctrl+c` quit from either focus
///
/// # Ordering
///
/// Lines are displayed in arrival order. Filtering keeps that order. A new
/// line moves the window only while auto-follow is not paused.
#[derive(Debug, Clone)]
pub struct AppState {
    platform: Platform,
    buffer: LogBuffer,
    filter_input: FilterInput,
    view: FilterView,
    viewport: ViewportState,
    focus: Focus,
    stream: StreamStatus,
    input_width: u16,
    key_bindings: KeyBindings,
}

impl AppState {
    /// Create the state for a session sized to a `width` x `height` terminal.
    pub fn new(platform: Platform, width: u16, height: u16) -> Self {
        Self {
            platform,
            buffer: LogBuffer::new(),
            filter_input: FilterInput::default(),
            view: FilterView::new(usize::from(width)),
            viewport: ViewportState::new(width, height.saturating_sub(RESERVED_ROWS)),
            focus: Focus::Body,
            stream: StreamStatus::Live,
            input_width: width.saturating_sub(FILTER_INPUT_MARGIN),
            key_bindings: KeyBindings::default(),
        }
    }

    /// Start with `filter` already applied.
    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filter_input = FilterInput::with_text(filter);
        self.refilter();
        self
    }

    // ===== Transitions =====

    /// Process one event to completion.
    pub fn handle_event(&mut self, event: AppEvent) -> Control {
        match event {
            AppEvent::Key(key) => return self.handle_key(key),
            AppEvent::Resize { width, height } => self.resize(width, height),
            AppEvent::Line(line) => self.push_line(line),
            AppEvent::StreamClosed { error } => self.close_stream(error),
        }
        Control::Continue
    }

    /// Dispatch a key according to the current focus.
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind == KeyEventKind::Release {
            return Control::Continue;
        }
        if is_quit_key(key) {
            return Control::Quit;
        }

        match self.focus {
            Focus::Filter => self.handle_filter_key(key),
            Focus::Body => return self.handle_body_key(key),
        }
        Control::Continue
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.focus = Focus::Body,
            KeyCode::Char('/') => {}
            _ => {
                if self.filter_input.handle_key(key) {
                    self.refilter();
                }
            }
        }
    }

    fn handle_body_key(&mut self, key: KeyEvent) -> Control {
        let Some(action) = self.key_bindings.get(key) else {
            return Control::Continue;
        };

        match action {
            KeyAction::Quit => return Control::Quit,
            KeyAction::FocusFilter => self.focus = Focus::Filter,
            KeyAction::Clear => self.clear(),
            scroll => {
                handle_scroll_action(&mut self.viewport, scroll, self.view.rows().len());
            }
        }
        Control::Continue
    }

    /// Append a line from the source.
    pub fn push_line(&mut self, line: LogLine) {
        let index = self.buffer.push(line);
        if let Some(line) = self.buffer.get(index) {
            if self.view.push(index, line) {
                self.viewport.sync(self.view.rows().len());
            }
        }
    }

    /// Mark the source as ended.
    pub fn close_stream(&mut self, error: Option<String>) {
        info!(lines = self.buffer.len(), error = ?error, "log stream closed");
        self.stream = StreamStatus::Ended { reason: error };
    }

    /// Apply new terminal dimensions.
    pub fn resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "resize");
        self.input_width = width.saturating_sub(FILTER_INPUT_MARGIN);
        self.view.set_width(usize::from(width), &self.buffer);
        self.viewport.resize(
            width,
            height.saturating_sub(RESERVED_ROWS),
            self.view.rows().len(),
        );
    }

    /// Drop every buffered line and resume auto-follow.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.view.clear();
        self.viewport.scroll_to_bottom(0);
    }

    fn refilter(&mut self) {
        self.view.set_filter(self.filter_input.text(), &self.buffer);
        self.viewport.sync(self.view.rows().len());
    }

    // ===== Accessors =====

    /// Platform being tailed.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Every line received this session.
    pub fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }

    /// Filtered, highlighted, wrapped view.
    pub fn view(&self) -> &FilterView {
        &self.view
    }

    /// Scroll state.
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Filter text and cursor.
    pub fn filter_input(&self) -> &FilterInput {
        &self.filter_input
    }

    /// Focused region.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Source status.
    pub fn stream(&self) -> &StreamStatus {
        &self.stream
    }

    /// Width available to the filter text.
    pub fn input_width(&self) -> u16 {
        self.input_width
    }

    /// Rows currently on screen.
    pub fn visible_rows(&self) -> &[WrappedRow] {
        let rows = self.view.rows();
        &rows[self.viewport.visible_range(rows.len())]
    }
}

fn is_quit_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') => !key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
