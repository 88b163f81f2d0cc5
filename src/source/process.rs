//! Child process ownership for a log source.

use super::reader::{spawn_line_reader, spawn_stderr_logger};
use super::{CommandSpec, LogStream};
use crate::model::SourceError;
use std::process::{Child, Stdio};
use std::sync::mpsc;
use tracing::{debug, info, warn};

/// What to do with a still-running child when the session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShutdownPolicy {
    /// Kill the child if it is still running, then reap it.
    #[default]
    Kill,
    /// Block until the child exits by itself.
    ///
    /// A command that never exits (like `adb logcat`) blocks teardown
    /// indefinitely.
    Wait,
}

impl ShutdownPolicy {
    /// Policy from the `kill_on_quit` setting.
    pub fn from_kill_on_quit(kill_on_quit: bool) -> Self {
        if kill_on_quit {
            ShutdownPolicy::Kill
        } else {
            ShutdownPolicy::Wait
        }
    }
}

/// A running external log command.
///
/// Owns the child process for the lifetime of the session. The matching
/// [`LogStream`] is returned separately by [`ProcessSource::start`] so the
/// viewer never touches the process itself.
#[derive(Debug)]
pub struct ProcessSource {
    child: Child,
    command: String,
}

impl ProcessSource {
    /// Start `spec` and begin reading its standard output line by line.
    ///
    /// # Errors
    ///
    /// - `SourceError::Spawn` if the process cannot be created
    /// - `SourceError::Pipe` if its stdout cannot be attached
    /// - `SourceError::ReaderThread` if the reader thread cannot start
    ///
    /// In the last two cases the child is killed and reaped before returning.
    pub fn start(spec: &CommandSpec) -> Result<(Self, LogStream), SourceError> {
        let command = spec.to_string();
        let mut child = spec
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SourceError::Spawn {
                command: command.clone(),
                source,
            })?;

        let Some(stdout) = child.stdout.take() else {
            discard(&mut child);
            return Err(SourceError::Pipe { command });
        };

        let (tx, rx) = mpsc::channel();
        // Detached: the reader ends on its own once the pipe closes.
        if let Err(source) = spawn_line_reader(stdout, tx) {
            discard(&mut child);
            return Err(SourceError::ReaderThread { command, source });
        }

        if let Some(stderr) = child.stderr.take() {
            if let Err(err) = spawn_stderr_logger(stderr, command.clone()) {
                warn!(command = %command, error = %err, "stderr of log command will be dropped");
            }
        }

        info!(command = %command, pid = child.id(), "log command started");

        Ok((
            Self { child, command },
            LogStream::new(rx),
        ))
    }

    /// OS process id of the child.
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Reap the child after the session ends.
    ///
    /// A child killed here because of [`ShutdownPolicy::Kill`] is a normal
    /// ending; only a child that exited by itself with a failure status is
    /// reported.
    ///
    /// # Errors
    ///
    /// - `SourceError::Wait` if waiting on or killing the child fails
    /// - `SourceError::AbnormalExit` if the child exited with a failure status
    pub fn finish(mut self, policy: ShutdownPolicy) -> Result<(), SourceError> {
        let status = match (policy, self.try_status()?) {
            (_, Some(status)) => Some(status),
            (ShutdownPolicy::Wait, None) => {
                debug!(command = %self.command, "waiting for log command to exit");
                Some(self.child.wait().map_err(|source| self.wait_error(source))?)
            }
            (ShutdownPolicy::Kill, None) => {
                debug!(command = %self.command, "killing log command");
                // The child may exit between try_wait and kill; wait() below
                // still reaps it either way.
                let _ = self.child.kill();
                self.child.wait().map_err(|source| self.wait_error(source))?;
                None
            }
        };

        match status {
            Some(status) if !status.success() => Err(SourceError::AbnormalExit {
                command: self.command,
                status,
            }),
            Some(status) => {
                info!(command = %self.command, %status, "log command exited");
                Ok(())
            }
            None => {
                info!(command = %self.command, "log command stopped");
                Ok(())
            }
        }
    }

    fn try_status(&mut self) -> Result<Option<std::process::ExitStatus>, SourceError> {
        self.child
            .try_wait()
            .map_err(|source| self.wait_error(source))
    }

    fn wait_error(&self, source: std::io::Error) -> SourceError {
        SourceError::Wait {
            command: self.command.clone(),
            source,
        }
    }
}

/// Kill and reap a child that will not be handed out.
fn discard(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

#[cfg(all(test, unix))]
#[path = "process_tests.rs"]
mod tests;
