//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod key_action;
pub mod log_line;
pub mod platform;

// Re-export for convenience
pub use error::{AppError, RenderError, SourceError};
pub use key_action::KeyAction;
pub use log_line::LogLine;
pub use platform::Platform;
