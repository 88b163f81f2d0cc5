//! Filter input widget.

use super::styles::Theme;
use crate::state::{AppState, FILTER_PLACEHOLDER, Focus};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

const PROMPT: &str = "> ";

/// Filter input widget.
///
/// Shows `> ` followed by the filter text, or a placeholder while the
/// filter is empty and unfocused. When focused, the cursor cell is drawn
/// and the text scrolls horizontally to keep it visible.
pub struct FilterBar<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> FilterBar<'a> {
    /// Create a filter bar for `state`.
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let input = self.state.filter_input();
        let focused = self.state.focus() == Focus::Filter;
        let prompt_style = if focused {
            self.theme.prompt_focused
        } else {
            self.theme.prompt
        };

        let mut spans = vec![Span::styled(PROMPT, prompt_style)];

        if !focused {
            if input.text().is_empty() {
                spans.push(Span::styled(FILTER_PLACEHOLDER, self.theme.placeholder));
            } else {
                spans.push(Span::raw(input.text()));
            }
            Line::from(spans).render(area, buf);
            return;
        }

        let chars: Vec<char> = input.text().chars().collect();
        let cursor = input.cursor().min(chars.len());
        let room = usize::from(self.state.input_width()).max(1);
        let start = (cursor + 1).saturating_sub(room);

        let before: String = chars[start..cursor].iter().collect();
        let under = chars.get(cursor).map_or_else(|| " ".to_string(), char::to_string);
        let after: String = chars.iter().skip(cursor + 1).collect();

        spans.push(Span::raw(before));
        spans.push(Span::styled(under, self.theme.cursor));
        spans.push(Span::raw(after));
        Line::from(spans).render(area, buf);
    }
}
