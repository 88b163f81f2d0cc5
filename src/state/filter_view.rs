//! Derived filtered, highlighted and wrapped view of the log buffer.

use super::buffer::LogBuffer;
use super::filter::{Fragment, Matcher, strip_markup};
use super::wrap::wrap_fragments;
use crate::model::LogLine;

/// One screen row of the wrapped view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedRow {
    /// Index of the source line in the [`LogBuffer`].
    pub line: usize,
    /// Highlighted fragments making up this row.
    pub fragments: Vec<Fragment>,
}

impl WrappedRow {
    /// Row text without highlight markup.
    pub fn text(&self) -> String {
        strip_markup(&self.fragments)
    }
}

/// Filtered view of a [`LogBuffer`].
///
/// Always a subsequence of the buffer in arrival order. Rebuilt when the
/// filter or width changes; new lines are appended incrementally, which
/// yields the same rows as a full rebuild.
#[derive(Debug, Clone, Default)]
pub struct FilterView {
    matcher: Matcher,
    width: usize,
    matched: usize,
    rows: Vec<WrappedRow>,
}

impl FilterView {
    /// Create an empty view with no filter.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Recompute everything from `buffer` with a new filter.
    pub fn set_filter(&mut self, filter: &str, buffer: &LogBuffer) {
        self.matcher = Matcher::new(filter);
        self.rebuild(buffer);
    }

    /// Recompute everything from `buffer` with a new wrap width.
    pub fn set_width(&mut self, width: usize, buffer: &LogBuffer) {
        if width != self.width {
            self.width = width;
            self.rebuild(buffer);
        }
    }

    /// Add the line stored at `index` in the buffer, if it matches.
    ///
    /// Returns whether the line joined the view.
    pub fn push(&mut self, index: usize, line: &LogLine) -> bool {
        if !self.matcher.matches(line.as_str()) {
            return false;
        }
        self.matched += 1;
        let fragments = self.matcher.highlight(line.as_str());
        self.rows.extend(
            wrap_fragments(&fragments, self.width)
                .into_iter()
                .map(|fragments| WrappedRow {
                    line: index,
                    fragments,
                }),
        );
        true
    }

    /// Drop every row and match.
    pub fn clear(&mut self) {
        self.matched = 0;
        self.rows.clear();
    }

    /// Wrapped rows, oldest first.
    pub fn rows(&self) -> &[WrappedRow] {
        &self.rows
    }

    /// Number of lines in the view.
    pub fn matched_count(&self) -> usize {
        self.matched
    }

    fn rebuild(&mut self, buffer: &LogBuffer) {
        self.clear();
        for (index, line) in buffer.lines().iter().enumerate() {
            self.push(index, line);
        }
    }
}
