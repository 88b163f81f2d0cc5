//! Log body widget: the visible window of the filtered, wrapped view.

use super::styles::Theme;
use crate::state::{AppState, StreamStatus, WrappedRow};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Log body widget.
///
/// Rows arrive already wrapped to the viewport width, so no further
/// wrapping happens here.
pub struct LogBody<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> LogBody<'a> {
    /// Create a body for `state`.
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn row_line(&self, row: &'a WrappedRow) -> Line<'a> {
        Line::from(
            row.fragments
                .iter()
                .map(|fragment| {
                    if fragment.highlighted {
                        Span::styled(fragment.text.as_str(), self.theme.highlight)
                    } else {
                        Span::raw(fragment.text.as_str())
                    }
                })
                .collect::<Vec<_>>(),
        )
    }

    fn empty_message(&self) -> Option<String> {
        if !self.state.view().rows().is_empty() {
            return None;
        }
        if self.state.buffer().is_empty() {
            return match self.state.stream() {
                StreamStatus::Live => Some("Waiting for logs...".to_string()),
                StreamStatus::Ended { .. } => Some("Log stream ended.".to_string()),
            };
        }
        Some(format!(
            "No lines match \"{}\"",
            self.state.filter_input().text()
        ))
    }
}

impl Widget for LogBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(message) = self.empty_message() {
            Paragraph::new(Span::styled(message, self.theme.placeholder)).render(area, buf);
            return;
        }

        let lines: Vec<Line> = self
            .state
            .visible_rows()
            .iter()
            .map(|row| self.row_line(row))
            .collect();
        Paragraph::new(lines).render(area, buf);
    }
}
