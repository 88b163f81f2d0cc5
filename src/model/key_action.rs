//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Only consulted while the log body has focus; the filter input consumes
/// keys itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the log body up by one row and pause auto-follow. Default: k/↑
    ScrollUp,
    /// Scroll the log body down by one row. Default: j/↓
    ScrollDown,
    /// Scroll up by half a page and pause auto-follow. Default: Ctrl+u/Page Up
    HalfPageUp,
    /// Scroll down by half a page. Default: Ctrl+d/Page Down
    HalfPageDown,
    /// Jump to the oldest row and pause auto-follow. Default: g/Home
    ScrollToTop,
    /// Jump to the newest row and resume auto-follow. Default: G/End
    ScrollToBottom,

    // Follow
    /// Resume auto-follow and jump to the newest row. Default: f
    Resume,

    // Buffer
    /// Drop every buffered line. Default: c
    Clear,

    // Focus
    /// Move focus to the filter input. Default: /
    FocusFilter,

    // Application
    /// Exit the session. Default: q/Ctrl+c
    Quit,
}
