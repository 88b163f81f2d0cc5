//! A single line of device log output.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;
use std::sync::Arc;

/// Width a tab character expands to when a line is created.
const TAB_WIDTH: usize = 4;

const ESC: char = '\u{1b}';
const BEL: char = '\u{7}';

/// One line of log output, the unit of transport and display.
///
/// Created once by the log source for every newline-terminated read and never
/// mutated afterwards. Cloning is cheap: the text is shared.
///
/// Tabs are expanded to spaces; ANSI escape sequences (colors from
/// `logcat -v color`) and remaining control characters are dropped at
/// construction, so every char occupies a predictable number of terminal
/// columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogLine(Arc<str>);

impl LogLine {
    /// Create a log line from raw text (without the trailing newline).
    pub fn new(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref();
        if !raw.chars().any(char::is_control) {
            return Self(Arc::from(raw));
        }

        let mut clean = String::with_capacity(raw.len());
        let mut chars = raw.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\t' => clean.extend(std::iter::repeat_n(' ', TAB_WIDTH)),
                ESC => skip_escape(&mut chars),
                c if c.is_control() => {}
                c => clean.push(c),
            }
        }
        Self(Arc::from(clean))
    }

    /// The line's text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the line has no text.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LogLine {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for LogLine {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for LogLine {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Consume the rest of an escape sequence whose `ESC` was already read.
///
/// - CSI `ESC [ params intermediates final`, final byte in `@..=~`
/// - OSC `ESC ] text`, ended by `BEL` or `ESC \\`
/// - two-char escapes `ESC <byte in @..=_>`
///
/// A sequence cut short by the end of the line is dropped as far as it goes.
fn skip_escape(chars: &mut Peekable<Chars<'_>>) {
    match chars.peek() {
        Some('[') => {
            chars.next();
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        }
        Some(']') => {
            chars.next();
            while let Some(c) = chars.next() {
                if c == BEL {
                    break;
                }
                if c == ESC && chars.next_if_eq(&'\\').is_some() {
                    break;
                }
            }
        }
        Some(&c) if ('@'..='_').contains(&c) => {
            chars.next();
        }
        _ => {}
    }
}
