//! Terminal setup and teardown.

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Stdout};
use tracing::warn;

/// Raw mode and alternate screen for the lifetime of the guard.
///
/// Dropping the guard restores the terminal, including on early returns
/// and panics unwinding through the event loop.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enable raw mode and switch to the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the terminal refuses either change. Raw
    /// mode is undone before returning in that case.
    pub fn enter(stdout: &mut Stdout) -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(err) = stdout.execute(EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = io::stdout().execute(LeaveAlternateScreen) {
            warn!(error = %err, "failed to leave alternate screen");
        }
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "failed to disable raw mode");
        }
    }
}
