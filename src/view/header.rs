//! Header widget: bordered platform label, a rule to the right edge and the
//! stream status tag.

use super::styles::Theme;
use crate::state::{AppState, StreamStatus};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Rounded border whose right edge joins the horizontal rule.
const TITLE_BORDER: border::Set = border::Set {
    vertical_right: "├",
    ..border::ROUNDED
};

const RULE: &str = "─";

/// Header widget.
pub struct Header<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    /// Create a header for `state`.
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn status(&self) -> (String, ratatui::style::Style) {
        let counts = format!(
            "{}/{}",
            self.state.view().matched_count(),
            self.state.buffer().len()
        );
        match self.state.stream() {
            StreamStatus::Ended { reason: Some(reason) } => (
                format!(" ENDED: {reason} · {counts} "),
                self.theme.status_ended,
            ),
            StreamStatus::Ended { reason: None } => {
                (format!(" ENDED · {counts} "), self.theme.status_ended)
            }
            StreamStatus::Live if self.state.viewport().is_paused() => {
                (format!(" PAUSED · {counts} "), self.theme.status_paused)
            }
            StreamStatus::Live => (format!(" LIVE · {counts} "), self.theme.status_live),
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label = self.state.platform().label();
        // label + horizontal padding + two borders
        let box_width = (label.width() as u16 + 4).min(area.width);
        let title_area = Rect {
            width: box_width,
            ..area
        };

        Paragraph::new(Span::styled(label, self.theme.header_title))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(TITLE_BORDER)
                    .border_style(self.theme.header_border)
                    .padding(Padding::horizontal(1)),
            )
            .render(title_area, buf);

        let rule_width = usize::from(area.width - box_width);
        if rule_width == 0 {
            return;
        }
        let rule_area = Rect {
            x: area.x + box_width,
            y: area.y + area.height / 2,
            width: area.width - box_width,
            height: 1,
        };

        let (status, status_style) = self.status();
        let status_width = status.width();
        let line = if status_width + 1 < rule_width {
            Line::from(vec![
                Span::styled(
                    RULE.repeat(rule_width - status_width - 1),
                    self.theme.header_rule,
                ),
                Span::styled(status, status_style),
                Span::styled(RULE, self.theme.header_rule),
            ])
        } else {
            Line::from(Span::styled(RULE.repeat(rule_width), self.theme.header_rule))
        };
        line.render(rule_area, buf);
    }
}
