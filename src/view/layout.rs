//! Screen layout.
//!
//! Pure layout logic: four stacked regions with fixed chrome heights and
//! the log body taking whatever is left.

use super::constants::{FILTER_INPUT_HEIGHT, HEADER_HEIGHT, HELP_LINE_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Bordered header with the platform label.
    pub header: Rect,
    /// Scrollable log body.
    pub body: Rect,
    /// Filter input line.
    pub filter: Rect,
    /// Key binding help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Split `area` into the four regions.
    pub fn split(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FILTER_INPUT_HEIGHT),
                Constraint::Length(HELP_LINE_HEIGHT),
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            filter: chunks[2],
            help: chunks[3],
        }
    }
}
