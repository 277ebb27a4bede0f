//! The in-progress expression shown on the display line.

use std::fmt;

/// Prefix marking a buffer that holds an error message instead of an expression.
pub const ERROR_MARKER: &str = "Error: ";

/// Characters treated as binary operators when inspecting the buffer tail.
const OPERATOR_CHARS: [char; 6] = ['+', '-', '×', '÷', '*', '/'];

/// Returns true if `c` is a binary operator glyph.
pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(&c)
}

/// Current expression text, or the error sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Buffer(String);

impl Buffer {
    /// Empty buffer.
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Buffer holding the error sentinel for `message`.
    pub fn error(message: impl fmt::Display) -> Self {
        Self(format!("{ERROR_MARKER}{message}"))
    }

    /// Whether this buffer holds the error sentinel.
    pub fn is_error(&self) -> bool {
        self.0.starts_with(ERROR_MARKER)
    }

    /// Whether the buffer has no text at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Empty, whitespace-only, or the error sentinel.
    pub fn is_blank(&self) -> bool {
        self.is_error() || self.0.trim().is_empty()
    }

    /// Raw buffer text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last character, if any.
    pub fn last_char(&self) -> Option<char> {
        self.0.chars().next_back()
    }

    /// Whether the last character is a binary operator.
    pub fn ends_with_operator(&self) -> bool {
        self.last_char().is_some_and(is_operator_char)
    }

    /// Characters of the trailing numeric literal, if any.
    pub fn trailing_number(&self) -> &str {
        let start = self
            .0
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
            .last()
            .map(|(i, _)| i)
            .unwrap_or(self.0.len());
        &self.0[start..]
    }

    pub(crate) fn push(&mut self, c: char) {
        self.0.push(c);
    }

    pub(crate) fn push_str(&mut self, s: &str) {
        self.0.push_str(s);
    }

    pub(crate) fn pop(&mut self) -> Option<char> {
        self.0.pop()
    }
}

impl From<&str> for Buffer {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Buffer {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_buffer_carries_marker() {
        let buffer = Buffer::error("bad input");
        assert!(buffer.is_error());
        assert_eq!(buffer.as_str(), "Error: bad input");
        assert!(buffer.is_blank());
    }

    #[test]
    fn whitespace_only_is_blank() {
        assert!(Buffer::from("   ").is_blank());
        assert!(!Buffer::from(" 1 ").is_blank());
    }

    #[test]
    fn ends_with_operator_recognizes_display_glyphs() {
        assert!(Buffer::from("5×").ends_with_operator());
        assert!(Buffer::from("5÷").ends_with_operator());
        assert!(Buffer::from("5-").ends_with_operator());
        assert!(!Buffer::from("sqrt(5)").ends_with_operator());
        assert!(!Buffer::new().ends_with_operator());
    }

    #[test]
    fn trailing_number_stops_at_operator() {
        assert_eq!(Buffer::from("12+3.5").trailing_number(), "3.5");
        assert_eq!(Buffer::from("12×").trailing_number(), "");
        assert_eq!(Buffer::from("42").trailing_number(), "42");
    }

    #[test]
    fn pop_removes_whole_multibyte_glyph() {
        let mut buffer = Buffer::from("3×");
        assert_eq!(buffer.pop(), Some('×'));
        assert_eq!(buffer.as_str(), "3");
    }
}
