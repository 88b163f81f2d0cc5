//! Static key binding help line.

use super::styles::Theme;
use crate::state::Focus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

const BODY_HELP: &[(&str, &str)] = &[
    ("/", "filter"),
    ("j/k", "scroll"),
    ("^u/^d", "half page"),
    ("g/G", "top/bottom"),
    ("f", "follow"),
    ("c", "clear"),
    ("q", "quit"),
];

const FILTER_HELP: &[(&str, &str)] = &[
    ("esc", "done"),
    ("^u", "clear filter"),
    ("q/^c", "quit"),
];

/// Help line widget listing the bindings for the focused region.
pub struct HelpLine<'a> {
    focus: Focus,
    theme: &'a Theme,
}

impl<'a> HelpLine<'a> {
    /// Create a help line for `focus`.
    pub fn new(focus: Focus, theme: &'a Theme) -> Self {
        Self { focus, theme }
    }
}

impl Widget for HelpLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let entries = match self.focus {
            Focus::Body => BODY_HELP,
            Focus::Filter => FILTER_HELP,
        };

        let mut spans = Vec::with_capacity(entries.len() * 3);
        for (i, (key, desc)) in entries.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" • ", self.theme.help_text));
            }
            spans.push(Span::styled(*key, self.theme.help_key));
            spans.push(Span::styled(format!(" {desc}"), self.theme.help_text));
        }
        Line::from(spans).render(area, buf);
    }
}
