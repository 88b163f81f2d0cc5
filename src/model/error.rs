//! Error types for devlog.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose
//! via `?` and `From` conversions up to [`AppError`], which `main` reports to
//! the user before exiting with a failure status.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`SourceError`] - Starting, reading or reaping the external log process
//!   - [`RenderError`] - The interactive terminal surface cannot run
//!   - [`ConfigError`] - Config file cannot be read or parsed
//!   - [`LoggingError`] - Tracing subscriber cannot be installed
//!
//! # Recovery Strategy
//!
//! Nothing is retried. Start-up failures abort the session. Read errors in
//! the middle of a session are not errors at this level: the reader reports
//! them as a closed stream and the viewer shows them in its header.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::process::ExitStatus;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// The external log command failed to start or exited abnormally.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The terminal could not be driven.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error(transparent)]
    Logging(#[from] LoggingError),
}

/// Errors raised while driving the external log-producing process.
///
/// `Spawn` and `Pipe` happen at start-up; `Wait` and `AbnormalExit` are
/// reported after the interactive session ends, when the child is reaped.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The process could not be created (binary missing, permissions).
    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        /// Command line that was attempted.
        command: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The process started but its standard output could not be attached.
    #[error("Failed to attach to the output of `{command}`")]
    Pipe {
        /// Command line whose stdout was unavailable.
        command: String,
    },

    /// The background reader thread could not be spawned.
    #[error("Failed to start reader thread for `{command}`: {source}")]
    ReaderThread {
        /// Command line being read.
        command: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Waiting on (or killing) the process failed.
    #[error("Failed waiting for `{command}`: {source}")]
    Wait {
        /// Command line being reaped.
        command: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The process exited on its own with a failure status.
    #[error("`{command}` exited abnormally ({status})")]
    AbnormalExit {
        /// Command line that exited.
        command: String,
        /// Exit status reported by the OS.
        status: ExitStatus,
    },
}

/// Errors raised by the interactive terminal surface.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Standard output is not an interactive terminal.
    #[error("Standard output is not a terminal; devlog needs an interactive terminal")]
    NotATerminal,

    /// Terminal I/O failed (raw mode, alternate screen, drawing, event read).
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
}
