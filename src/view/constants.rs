//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values so the state
//! machine and the renderer agree on how much room the log body gets.

/// Height of the header in lines (rounded border around the platform label).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the filter input line.
pub const FILTER_INPUT_HEIGHT: u16 = 1;

/// Height of the key binding help line.
pub const HELP_LINE_HEIGHT: u16 = 1;

/// Rows of the terminal not available to the log body.
pub const RESERVED_ROWS: u16 = HEADER_HEIGHT + FILTER_INPUT_HEIGHT + HELP_LINE_HEIGHT;

/// Columns of the filter line taken by the prompt and cursor padding.
pub const FILTER_INPUT_MARGIN: u16 = 4;

/// Terminal size assumed when the real size cannot be read.
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);
