//! Scroll position and auto-follow over the wrapped view.
//!
//! Offsets count wrapped rows. Callers pass the current row total, so the
//! viewport never holds a stale copy of it.

use std::ops::Range;

/// Visible window over the filtered, wrapped rows.
///
/// # Invariants
///
/// - Not paused: the window ends at the last row (`offset == max_offset`).
/// - Paused: `offset` only changes through explicit scrolling, resizing or
///   a shrinking view; new rows never move it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportState {
    width: u16,
    height: u16,
    offset: usize,
    paused: bool,
}

impl ViewportState {
    /// Create a following viewport of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            offset: 0,
            paused: false,
        }
    }

    /// Width in columns.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in rows.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// First visible row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether auto-follow is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Largest useful offset for `total` rows.
    pub fn max_offset(&self, total: usize) -> usize {
        total.saturating_sub(usize::from(self.height))
    }

    /// Rows of the view that are on screen.
    pub fn visible_range(&self, total: usize) -> Range<usize> {
        let start = self.offset.min(total);
        let end = (start + usize::from(self.height)).min(total);
        start..end
    }

    /// Whether the last row is on screen.
    pub fn at_bottom(&self, total: usize) -> bool {
        self.offset >= self.max_offset(total)
    }

    /// Rows moved by a half-page scroll (at least one).
    pub fn half_page(&self) -> usize {
        usize::from(self.height / 2).max(1)
    }

    /// Apply new dimensions.
    pub fn resize(&mut self, width: u16, height: u16, total: usize) {
        self.width = width;
        self.height = height;
        self.sync(total);
    }

    /// Re-establish the invariants after the row total changed.
    ///
    /// Following: jump to the end. Paused: only clamp, so appended rows
    /// leave the offset untouched.
    pub fn sync(&mut self, total: usize) {
        let max = self.max_offset(total);
        if self.paused {
            self.offset = self.offset.min(max);
        } else {
            self.offset = max;
        }
    }

    /// Scroll up and pause auto-follow.
    pub fn scroll_up(&mut self, rows: usize) {
        self.paused = true;
        self.offset = self.offset.saturating_sub(rows);
    }

    /// Scroll down; reaching the last row resumes auto-follow.
    pub fn scroll_down(&mut self, rows: usize, total: usize) {
        let max = self.max_offset(total);
        self.offset = self.offset.saturating_add(rows).min(max);
        if self.offset >= max {
            self.paused = false;
        }
    }

    /// Jump to the first row and pause auto-follow.
    pub fn scroll_to_top(&mut self) {
        self.paused = true;
        self.offset = 0;
    }

    /// Jump to the last row and resume auto-follow.
    pub fn scroll_to_bottom(&mut self, total: usize) {
        self.paused = false;
        self.offset = self.max_offset(total);
    }
}
