//! Dashboard styling configuration.
//!
//! Colors are optional; selection and headings stay visible without them
//! through modifiers alone.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on or off regardless of the environment.
    pub fn fixed(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== FeedStyles =====

/// Styles shared by every region widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedStyles {
    /// Section and card headings.
    pub heading: Style,
    /// Secondary text: timestamps, subtitles, placeholders.
    pub dim: Style,
    /// Author names and the signed-in user.
    pub emphasis: Style,
    /// Selected row of the focused widget.
    pub selected: Style,
    /// Active sidebar link and header link.
    pub active: Style,
    /// Unread and overflow badges.
    pub badge: Style,
    /// Online indicator and unviewed story marker.
    pub online: Style,
    /// Latest notice in the header.
    pub notice: Style,
    /// Text cursor inside an input field.
    pub cursor: Style,
    /// Border of the region holding focus.
    pub focused_border: Style,
    /// Border of every other region.
    pub border: Style,
}

impl FeedStyles {
    /// Styles for the current environment (honours `NO_COLOR`).
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Styles for an explicit color configuration.
    ///
    /// Without colors every style falls back to modifiers.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let reversed = Style::default().add_modifier(Modifier::REVERSED);

        if config.colors_enabled() {
            Self {
                heading: bold.fg(Color::Cyan),
                dim: Style::default().fg(Color::DarkGray),
                emphasis: bold,
                selected: Style::default().bg(Color::Blue).fg(Color::White),
                active: bold.fg(Color::LightBlue),
                badge: bold.bg(Color::Red).fg(Color::White),
                online: Style::default().fg(Color::Green),
                notice: Style::default().fg(Color::Yellow),
                cursor: bold.bg(Color::White).fg(Color::Black),
                focused_border: Style::default().fg(Color::Cyan),
                border: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                heading: bold,
                dim: Style::default(),
                emphasis: bold,
                selected: reversed,
                active: bold.add_modifier(Modifier::UNDERLINED),
                badge: bold,
                online: Style::default(),
                notice: Style::default(),
                cursor: reversed,
                focused_border: bold,
                border: Style::default(),
            }
        }
    }
}

impl Default for FeedStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====
