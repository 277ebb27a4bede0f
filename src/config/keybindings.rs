//! Keyboard bindings configuration.

use crate::model::{BinaryOperator, KeyAction, Token, UnaryFunction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Character keys are matched without the SHIFT modifier, since terminals
/// disagree on whether `+`, `%`, or `?` arrive with SHIFT set.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let normalized = match key.code {
            KeyCode::Char(_) => KeyEvent::new(key.code, key.modifiers - KeyModifiers::SHIFT),
            _ => KeyEvent::new(key.code, key.modifiers),
        };
        self.bindings.get(&normalized).copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }

    fn bind_char(&mut self, c: char, action: KeyAction) {
        self.bind(KeyCode::Char(c), KeyModifiers::NONE, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Digits
        for d in 0..=9u8 {
            keys.bind_char(char::from(b'0' + d), KeyAction::Press(Token::Digit(d)));
        }
        keys.bind_char('.', KeyAction::Press(Token::Decimal));
        keys.bind_char(',', KeyAction::Press(Token::Decimal));

        // Binary operators
        let add = KeyAction::Press(Token::Operator(BinaryOperator::Add));
        let subtract = KeyAction::Press(Token::Operator(BinaryOperator::Subtract));
        let multiply = KeyAction::Press(Token::Operator(BinaryOperator::Multiply));
        let divide = KeyAction::Press(Token::Operator(BinaryOperator::Divide));
        keys.bind_char('+', add);
        keys.bind_char('-', subtract);
        keys.bind_char('*', multiply);
        keys.bind_char('x', multiply);
        keys.bind_char('×', multiply);
        keys.bind_char('/', divide);
        keys.bind_char('÷', divide);

        // Unary functions
        keys.bind_char('r', KeyAction::Press(Token::Unary(UnaryFunction::SquareRoot)));
        keys.bind_char('s', KeyAction::Press(Token::Unary(UnaryFunction::Square)));
        keys.bind_char('%', KeyAction::Press(Token::Unary(UnaryFunction::Percent)));

        // Editing
        keys.bind(KeyCode::Backspace, KeyModifiers::NONE, KeyAction::Press(Token::Delete));
        keys.bind(KeyCode::Delete, KeyModifiers::NONE, KeyAction::Press(Token::Clear));
        keys.bind_char('c', KeyAction::Press(Token::Clear));

        // Evaluate
        keys.bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::Press(Token::Evaluate));
        keys.bind_char('=', KeyAction::Press(Token::Evaluate));

        // Panels and theme
        keys.bind_char('h', KeyAction::ToggleHistory);
        keys.bind_char('t', KeyAction::ToggleTheme);
        keys.bind_char('?', KeyAction::Help);
        keys.bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::DismissNotifications);

        // Application
        keys.bind_char('q', KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
