//! Fixed-width wrapping of highlighted lines.
//!
//! Widths are terminal columns (`unicode-width`). Every row holds at least
//! one char, so a char wider than the viewport still makes progress.

use super::filter::{Fragment, strip_markup};
use unicode_width::UnicodeWidthChar;

/// Split fragments into rows of at most `width` columns.
///
/// Highlighting is carried across row boundaries. An empty line yields one
/// empty row; a width of zero disables wrapping and yields one row.
pub fn wrap_fragments(fragments: &[Fragment], width: usize) -> Vec<Vec<Fragment>> {
    if width == 0 {
        return vec![fragments.to_vec()];
    }

    let mut rows: Vec<Vec<Fragment>> = vec![Vec::new()];
    let mut row_width = 0;

    for fragment in fragments {
        for ch in fragment.text.chars() {
            let w = ch.width().unwrap_or(0);
            if row_width > 0 && row_width + w > width {
                rows.push(Vec::new());
                row_width = 0;
            }
            // rows is never empty: it starts with one row and only grows.
            if let Some(row) = rows.last_mut() {
                push_char(row, ch, fragment.highlighted);
            }
            row_width += w;
        }
    }

    rows
}

/// Wrap plain text into rows of at most `width` columns.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let fragments = if text.is_empty() {
        Vec::new()
    } else {
        vec![Fragment::plain(text)]
    };
    wrap_fragments(&fragments, width)
        .iter()
        .map(|row| strip_markup(row))
        .collect()
}

fn push_char(row: &mut Vec<Fragment>, ch: char, highlighted: bool) {
    match row.last_mut() {
        Some(last) if last.highlighted == highlighted => last.text.push(ch),
        _ => row.push(Fragment {
            text: ch.to_string(),
            highlighted,
        }),
    }
}
