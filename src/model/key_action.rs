//! Domain-level actions independent of key bindings.

use super::token::Token;

/// User intent produced by a key press or a keypad click.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` is handled
/// by `KeyBindings`; keypad clicks map through the keypad layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Feed a token to the calculator. Default: digits, operators, Enter, Backspace
    Press(Token),
    /// Show or hide the history panel. Default: h
    ToggleHistory,
    /// Switch between light and dark themes. Default: t
    ToggleTheme,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Dismiss all visible notifications. Default: Esc
    DismissNotifications,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether this action can change the buffer or the history.
    pub fn touches_calculator(self) -> bool {
        matches!(self, Self::Press(_))
    }
}
