//! Theme configuration.
//!
//! All styles used by the renderer live in one [`Theme`] value that is
//! passed into rendering explicitly.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag or `no_color` config key
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `no_color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Theme =====

/// Styles for every region of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Rounded border around the platform label.
    pub header_border: Style,
    /// Platform label text.
    pub header_title: Style,
    /// Horizontal rule filling the header to the right edge.
    pub header_rule: Style,
    /// Status tag while following new lines.
    pub status_live: Style,
    /// Status tag while auto-follow is paused.
    pub status_paused: Style,
    /// Status tag once the source has ended.
    pub status_ended: Style,
    /// Occurrences of the filter text in the log body.
    pub highlight: Style,
    /// Filter prompt (`> `).
    pub prompt: Style,
    /// Prompt while the filter input has focus.
    pub prompt_focused: Style,
    /// Placeholder shown while the filter is empty.
    pub placeholder: Style,
    /// Cursor cell in the filter input.
    pub cursor: Style,
    /// Key names in the help line.
    pub help_key: Style,
    /// Descriptions in the help line.
    pub help_text: Style,
}

impl Theme {
    /// Build the theme for the given color configuration.
    ///
    /// Without colors, emphasis falls back to modifiers only so highlights
    /// and the cursor stay visible.
    pub fn new(colors: ColorConfig) -> Self {
        if colors.colors_enabled() {
            Self {
                header_border: Style::default().fg(Color::DarkGray),
                header_title: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                header_rule: Style::default().fg(Color::DarkGray),
                status_live: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                status_paused: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                status_ended: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                highlight: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                prompt: Style::default().fg(Color::DarkGray),
                prompt_focused: Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
                placeholder: Style::default().fg(Color::DarkGray),
                cursor: Style::default().bg(Color::White).fg(Color::Black),
                help_key: Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                help_text: Style::default().fg(Color::DarkGray),
            }
        } else {
            let bold = Style::default().add_modifier(Modifier::BOLD);
            Self {
                header_border: Style::default(),
                header_title: bold,
                header_rule: Style::default(),
                status_live: bold,
                status_paused: bold,
                status_ended: bold,
                highlight: bold.add_modifier(Modifier::UNDERLINED),
                prompt: Style::default(),
                prompt_focused: bold,
                placeholder: Style::default().add_modifier(Modifier::DIM),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
                help_key: bold,
                help_text: Style::default(),
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ColorConfig::new(true))
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(no_color_env)]
    fn color_config_respects_no_color_flag() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(!config.colors_enabled(), "--no-color flag should disable colors");
    }

    #[test]
    #[serial(no_color_env)]
    fn color_config_respects_no_color_env_var() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(!config.colors_enabled(), "NO_COLOR env var should disable colors");
    }

    #[test]
    #[serial(no_color_env)]
    fn color_config_no_color_env_any_value_disables() {
        std::env::set_var("NO_COLOR", "");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(!config.colors_enabled(), "NO_COLOR with empty string should disable colors");
    }

    #[test]
    #[serial(no_color_env)]
    fn color_config_enables_colors_by_default() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(false);
        assert!(config.colors_enabled(), "Colors should be enabled by default");
    }

    #[test]
    fn colored_theme_highlights_with_color() {
        let theme = Theme::new(ColorConfig::new(true));
        assert_eq!(theme.highlight.fg, Some(Color::Yellow));
        assert!(theme.highlight.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn monochrome_theme_has_no_colors_but_keeps_emphasis() {
        let theme = Theme::new(ColorConfig::new(false));
        assert_eq!(theme.highlight.fg, None);
        assert!(theme.highlight.add_modifier.contains(Modifier::BOLD));
        assert!(theme.cursor.add_modifier.contains(Modifier::REVERSED));
    }
}
