//! Light and dark palettes.
//!
//! Every widget takes its styles from a [`Palette`] built for the active
//! theme, so toggling the theme only requires a redraw.

use crate::model::{Token, ThemePreference};
use crate::state::NotificationLevel;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether color output is allowed.
///
/// Disabled by the `--no-color` flag or any value of `NO_COLOR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on, regardless of the environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Whether styles should carry colors.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background and default text.
    pub base: Style,
    /// The display line.
    pub display: Style,
    /// Panel borders.
    pub border: Style,
    /// Panel and overlay titles.
    pub title: Style,
    /// Hints and placeholder text.
    pub muted: Style,
    /// Digit, operator and function buttons.
    pub button: Style,
    /// `=` and `Delete`.
    pub accent_button: Style,
    /// Keys in the help overlay.
    pub key: Style,
    /// Error toasts and the error sentinel.
    pub error: Style,
    /// Warning toasts.
    pub warning: Style,
    /// Info toasts.
    pub info: Style,
}

impl Palette {
    /// Palette for `theme`, or the plain palette when colors are off.
    pub fn new(theme: ThemePreference, colors: ColorConfig) -> Self {
        if !colors.colors_enabled() {
            return Self::plain();
        }
        match theme {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
        }
    }

    fn light() -> Self {
        Self {
            base: Style::default().fg(Color::Black).bg(Color::White),
            display: Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            button: Style::default().fg(Color::White).bg(Color::Blue),
            accent_button: Style::default().fg(Color::White).bg(Color::Red),
            key: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            error: Style::default().fg(Color::Red),
            warning: Style::default().fg(Color::Yellow),
            info: Style::default().fg(Color::Blue),
        }
    }

    fn dark() -> Self {
        Self {
            base: Style::default().fg(Color::White).bg(Color::Black),
            display: Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Gray),
            title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::Gray),
            button: Style::default().fg(Color::White).bg(Color::Blue),
            accent_button: Style::default().fg(Color::White).bg(Color::LightRed),
            key: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            error: Style::default().fg(Color::LightRed),
            warning: Style::default().fg(Color::LightYellow),
            info: Style::default().fg(Color::LightCyan),
        }
    }

    /// No colors at all; only modifiers survive.
    fn plain() -> Self {
        let plain = Style::default();
        let bold = Style::default().add_modifier(Modifier::BOLD);
        Self {
            base: plain,
            display: bold,
            border: plain,
            title: bold,
            muted: plain,
            button: plain,
            accent_button: bold,
            key: bold,
            error: bold,
            warning: plain,
            info: plain,
        }
    }

    /// Style for a keypad button.
    pub fn button_style(&self, token: Token) -> Style {
        match token {
            Token::Evaluate | Token::Delete => self.accent_button,
            _ => self.button,
        }
    }

    /// Border and text style for a toast of `level`.
    pub fn notification_style(&self, level: NotificationLevel) -> Style {
        match level {
            NotificationLevel::Error => self.error,
            NotificationLevel::Warning => self.warning,
            NotificationLevel::Info => self.info,
        }
    }
}

// ===== Tests =====
