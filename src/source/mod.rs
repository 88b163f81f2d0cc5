//! Log input sources.
//!
//! This module runs the external log-producing command and turns its
//! standard output into a stream of [`LogLine`] events:
//! - [`CommandSpec`] describes the command (and per-platform defaults)
//! - [`ProcessSource`] owns the child process and reaps it after the session
//! - [`LogStream`] is the consumer end of the line channel
//!
//! The reader runs on its own thread and only ever pushes completed lines
//! into an unbounded channel; the viewer drains that channel from its event
//! loop. Nothing else is shared between the two.

use crate::model::LogLine;
use std::sync::mpsc::{Receiver, TryRecvError};

pub mod command;
pub mod process;
pub mod reader;

pub use command::{CommandSpec, SINCE_PLACEHOLDER, default_command, since_timestamp};
pub use process::{ProcessSource, ShutdownPolicy};
pub use reader::spawn_line_reader;

/// Event produced by a log source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEvent {
    /// A complete line of output, in arrival order.
    Line(LogLine),
    /// The output stream ended. No further events follow.
    ///
    /// `error` is `None` on a clean end-of-stream and carries the read
    /// error message otherwise.
    Closed {
        /// Read error that ended the stream, if any.
        error: Option<String>,
    },
}

/// Consumer end of a log source.
///
/// Yields events in exactly the order the reader produced them.
#[derive(Debug)]
pub struct LogStream {
    rx: Receiver<SourceEvent>,
    closed: bool,
}

impl LogStream {
    pub(crate) fn new(rx: Receiver<SourceEvent>) -> Self {
        Self { rx, closed: false }
    }

    /// Take the next pending event without blocking.
    ///
    /// If the producer disappears without announcing the end of the stream,
    /// a single synthetic `Closed` event is returned so the viewer never
    /// stalls silently.
    pub fn try_next(&mut self) -> Option<SourceEvent> {
        if self.closed {
            return None;
        }
        match self.rx.try_recv() {
            Ok(event) => Some(self.observe(event)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(self.observe(SourceEvent::Closed {
                error: None,
            })),
        }
    }

    fn observe(&mut self, event: SourceEvent) -> SourceEvent {
        if matches!(event, SourceEvent::Closed { .. }) {
            self.closed = true;
        }
        event
    }
}
