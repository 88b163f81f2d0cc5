//! Session log buffer.

use crate::model::LogLine;

/// Ordered, append-only store of every line received this session.
///
/// Only [`LogBuffer::clear`] removes lines, and it removes all of them.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    lines: Vec<LogLine>,
}

impl LogBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line; returns its index.
    pub fn push(&mut self, line: LogLine) -> usize {
        self.lines.push(line);
        self.lines.len() - 1
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in arrival order.
    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// Line at `index`.
    pub fn get(&self, index: usize) -> Option<&LogLine> {
        self.lines.get(index)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the buffer holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
