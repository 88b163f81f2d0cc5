//! External log command descriptions.

use crate::model::Platform;
use chrono::{DateTime, Local};
use std::fmt;
use std::process::Command;

/// Placeholder replaced by [`since_timestamp`] when a command is resolved.
pub const SINCE_PLACEHOLDER: &str = "{since}";

/// `adb logcat -T` time format (`MM-DD hh:mm:ss.mmm`).
const LOGCAT_TIME_FORMAT: &str = "%m-%d %H:%M:%S%.3f";

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    /// Create a command from a program and its arguments.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a command from an argv vector.
    ///
    /// Returns `None` if the vector is empty or the program name is blank.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        if program.trim().is_empty() {
            return None;
        }
        Some(Self::new(program.clone(), args.iter().cloned()))
    }

    /// Program name or path.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Replace every `{since}` placeholder in the arguments.
    pub fn with_since(mut self, since: &str) -> Self {
        for arg in &mut self.args {
            if arg.contains(SINCE_PLACEHOLDER) {
                *arg = arg.replace(SINCE_PLACEHOLDER, since);
            }
        }
        self
    }

    /// Build the std command. Stdio configuration is left to the caller.
    pub(crate) fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Built-in log command for a platform, placeholders unresolved.
///
/// - Android: `adb logcat -T {since}` (only lines logged from now on)
/// - iOS: `xcrun simctl spawn booted log stream`
pub fn default_command(platform: Platform) -> CommandSpec {
    match platform {
        Platform::Android => CommandSpec::new("adb", ["logcat", "-T", SINCE_PLACEHOLDER]),
        Platform::Ios => CommandSpec::new("xcrun", ["simctl", "spawn", "booted", "log", "stream"]),
    }
}

/// Format a point in time the way `adb logcat -T` expects it.
pub fn since_timestamp(now: DateTime<Local>) -> String {
    now.format(LOGCAT_TIME_FORMAT).to_string()
}
