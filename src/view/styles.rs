//! Color and style configuration for the calculator screen.

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
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== UiStyles =====

/// Styles shared by every panel.
///
/// With colors disabled only modifiers (bold, reversed, dim) remain, so
/// focus and errors stay visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiStyles {
    /// Panel titles and the selected mode tab.
    pub accent: Style,
    /// The focused form field.
    pub focused: Style,
    /// Text being typed into a field.
    pub editing: Style,
    /// Footnotes and hints.
    pub muted: Style,
    /// Rejected input messages.
    pub error: Style,
    /// Key names in the help overlay.
    pub key: Style,
    /// Section headers in the help overlay and table headers.
    pub header: Style,
    /// Color of preview drawings.
    pub drawing: Color,
    /// Color of the rail bar and hypotenuse.
    pub guide: Color,
}

impl UiStyles {
    /// Styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                accent: Style::default().fg(Color::Cyan),
                focused: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                editing: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow),
                muted: Style::default().fg(Color::DarkGray),
                error: Style::default().fg(Color::Red),
                key: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                header: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                drawing: Color::White,
                guide: Color::Gray,
            }
        } else {
            Self {
                accent: Style::default(),
                focused: Style::default().add_modifier(Modifier::BOLD),
                editing: Style::default().add_modifier(Modifier::REVERSED),
                muted: Style::default().add_modifier(Modifier::DIM),
                error: Style::default().add_modifier(Modifier::BOLD),
                key: Style::default().add_modifier(Modifier::BOLD),
                header: Style::default().add_modifier(Modifier::BOLD),
                drawing: Color::Reset,
                guide: Color::Reset,
            }
        }
    }
}

impl Default for UiStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
