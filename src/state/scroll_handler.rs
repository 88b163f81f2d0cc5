//! Vertical scrolling keyboard action handler.
//!
//! Pure function that moves a [`ViewportState`] in response to scroll
//! actions and maintains the pause-on-scroll rules:
//! - moving up (line, half page, top) pauses auto-follow
//! - reaching the last row (line/half page down, bottom) resumes it
//! - `Resume` always resumes and jumps to the newest row

use crate::model::KeyAction;
use crate::state::ViewportState;

/// Apply a scroll action over a view of `total` rows.
///
/// Returns `true` if the action was a scroll action. Other actions leave
/// the viewport untouched and return `false`.
pub fn handle_scroll_action(viewport: &mut ViewportState, action: KeyAction, total: usize) -> bool {
    match action {
        KeyAction::ScrollUp => viewport.scroll_up(1),
        KeyAction::ScrollDown => viewport.scroll_down(1, total),
        KeyAction::HalfPageUp => {
            let rows = viewport.half_page();
            viewport.scroll_up(rows);
        }
        KeyAction::HalfPageDown => {
            let rows = viewport.half_page();
            viewport.scroll_down(rows, total);
        }
        KeyAction::ScrollToTop => viewport.scroll_to_top(),
        KeyAction::ScrollToBottom | KeyAction::Resume => viewport.scroll_to_bottom(total),
        KeyAction::Clear | KeyAction::FocusFilter | KeyAction::Quit => return false,
    }
    true
}
