//! Viewer state machine (pure).
//!
//! All state transitions are plain functions over owned data, testable
//! without a terminal.

pub mod app_state;
pub mod buffer;
pub mod filter;
pub mod filter_input;
pub mod filter_view;
pub mod scroll_handler;
pub mod viewport;
pub mod wrap;

// Re-export for convenience
pub use app_state::{AppEvent, AppState, Control, Focus, StreamStatus};
pub use buffer::LogBuffer;
pub use filter::{Fragment, Matcher, strip_markup};
pub use filter_input::{FILTER_PLACEHOLDER, FilterInput};
pub use filter_view::{FilterView, WrappedRow};
pub use scroll_handler::handle_scroll_action;
pub use viewport::ViewportState;
pub use wrap::{wrap_fragments, wrap_text};
