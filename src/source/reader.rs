//! Background line readers for child process pipes.

use super::SourceEvent;
use crate::model::LogLine;
use std::io::{self, BufRead, BufReader, Read};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// Spawn a thread that forwards every line of `reader` into `tx`.
///
/// The thread ends after sending `SourceEvent::Closed`, or silently when the
/// receiving side has been dropped.
///
/// # Errors
///
/// Returns the OS error if the thread cannot be spawned.
pub fn spawn_line_reader<R>(reader: R, tx: Sender<SourceEvent>) -> io::Result<JoinHandle<()>>
where
    R: Read + Send + 'static,
{
    thread::Builder::new()
        .name("log-reader".to_string())
        .spawn(move || pump_lines(BufReader::new(reader), &tx))
}

/// Spawn a thread that writes every line of `reader` to the tracing log.
///
/// Used for the child's stderr, which must never reach the terminal the
/// viewer is drawing on.
pub(crate) fn spawn_stderr_logger<R>(reader: R, command: String) -> io::Result<JoinHandle<()>>
where
    R: Read + Send + 'static,
{
    thread::Builder::new()
        .name("log-stderr".to_string())
        .spawn(move || {
            let mut reader = BufReader::new(reader);
            while let Ok(Some(line)) = read_line(&mut reader) {
                warn!(command = %command, "{}", line);
            }
        })
}

/// Read `reader` to the end, sending one `Line` event per line.
///
/// Returns after the final `Closed` event was sent (or could not be).
pub(crate) fn pump_lines<R: BufRead>(mut reader: R, tx: &Sender<SourceEvent>) {
    let mut count: u64 = 0;
    loop {
        let event = match read_line(&mut reader) {
            Ok(Some(line)) => {
                count += 1;
                SourceEvent::Line(LogLine::new(line))
            }
            Ok(None) => {
                debug!(lines = count, "log stream reached end of file");
                let _ = tx.send(SourceEvent::Closed { error: None });
                return;
            }
            Err(err) => {
                warn!(lines = count, error = %err, "log stream read failed");
                let _ = tx.send(SourceEvent::Closed {
                    error: Some(err.to_string()),
                });
                return;
            }
        };

        if tx.send(event).is_err() {
            debug!(lines = count, "viewer gone, stopping log reader");
            return;
        }
    }
}

/// Read one complete line, without its `\n` or `\r\n` terminator.
///
/// Invalid UTF-8 is replaced rather than treated as an error. A trailing
/// line without a terminator is returned as-is once the input ends.
/// Returns `Ok(None)` at end of input.
fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    let read = loop {
        match reader.read_until(b'\n', &mut buf) {
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            other => break other?,
        }
    };
    if read == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
