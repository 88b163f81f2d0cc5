//! devlog
//!
//! TUI application for tailing Android (`adb logcat`) and iOS simulator
//! device logs with live filtering.
//!
//! The library follows a pure core / impure shell split: `state` holds the
//! viewer as a plain state machine, while `source` and `view` own the child
//! process and the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod session;
pub mod source;
pub mod state;
pub mod view;
