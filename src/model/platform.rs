//! Device platforms whose logs can be tailed.

use std::fmt;

/// Device platform selected on the command line.
///
/// Sum type enforces exactly one platform per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Platform {
    /// Android device or emulator, read through `adb logcat`.
    Android,
    /// Booted iOS simulator, read through `simctl`'s `log stream`.
    Ios,
}

impl Platform {
    /// Label shown in the viewer header.
    pub fn label(self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
