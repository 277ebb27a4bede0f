//! Input buffer state machine.
//!
//! [`apply_token`] is the only way the buffer changes in response to a
//! button press. It is total: every (buffer, token) pair has a defined
//! result, and rejected inputs return the buffer unchanged.
//!
//! # Rules
//!
//! - An error buffer is reset to empty before the token is applied.
//! - Operators and unary functions are rejected on an empty buffer and
//!   directly after another operator.
//! - Unary functions rewrite the whole buffer (`sqrt(..)`, `pow(.., 2)`,
//!   `.. / 100`); digits and operators append.
//! - `Delete` removes one character, `Clear` empties the buffer.
//! - `Evaluate` is routed to the evaluator by the caller and leaves the
//!   buffer unchanged here.

use crate::model::{Buffer, Token};

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;

/// Apply one token to `current` and return the new buffer.
pub fn apply_token(current: &Buffer, token: Token) -> Buffer {
    if current.is_error() {
        return match token {
            Token::Clear | Token::Delete => Buffer::new(),
            other => apply_token(&Buffer::new(), other),
        };
    }

    match token {
        Token::Digit(d) => {
            let mut next = current.clone();
            next.push(char::from(b'0' + d.min(9)));
            next
        }
        Token::Decimal => append_decimal(current),
        Token::Operator(op) => {
            if rejects_operator(current) {
                return current.clone();
            }
            let mut next = current.clone();
            next.push(op.glyph());
            next
        }
        Token::Unary(function) => {
            if rejects_operator(current) {
                return current.clone();
            }
            Buffer::from(function.wrap(current.as_str()))
        }
        Token::Delete => {
            let mut next = current.clone();
            next.pop();
            next
        }
        Token::Clear => Buffer::new(),
        Token::Evaluate => current.clone(),
    }
}

/// Fold a sequence of tokens over an initial buffer.
pub fn apply_tokens(initial: &Buffer, tokens: impl IntoIterator<Item = Token>) -> Buffer {
    tokens
        .into_iter()
        .fold(initial.clone(), |buffer, token| apply_token(&buffer, token))
}

fn rejects_operator(current: &Buffer) -> bool {
    current.is_empty() || current.ends_with_operator()
}

/// Append `.` to the trailing number, or start a new `0.` literal.
///
/// No-op if the trailing number already has a decimal point or the buffer
/// ends in something a number cannot follow (a closing parenthesis).
fn append_decimal(current: &Buffer) -> Buffer {
    let trailing = current.trailing_number();
    if trailing.contains('.') {
        return current.clone();
    }

    let mut next = current.clone();
    match current.last_char() {
        Some(c) if c.is_ascii_digit() => next.push('.'),
        Some(')') => return current.clone(),
        _ => next.push_str("0."),
    }
    next
}
