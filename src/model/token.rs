//! Discrete calculator inputs.
//!
//! A [`Token`] is one button press. The set is closed so every consumer
//! matches exhaustively instead of comparing label strings.

/// Binary arithmetic operators available on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`×`)
    Multiply,
    /// Division (`÷`)
    Divide,
}

impl BinaryOperator {
    /// Glyph appended to the buffer for this operator.
    pub fn glyph(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// All operators, in keypad order.
    pub const ALL: [BinaryOperator; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];
}

/// Unary functions. These rewrite the whole buffer instead of appending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryFunction {
    /// `sqrt(<buffer>)`
    SquareRoot,
    /// `pow(<buffer>, 2)`
    Square,
    /// `<buffer> / 100`
    Percent,
}

impl UnaryFunction {
    /// Rewrite `expression` with this function applied to all of it.
    pub fn wrap(self, expression: &str) -> String {
        match self {
            Self::SquareRoot => format!("sqrt({expression})"),
            Self::Square => format!("pow({expression}, 2)"),
            Self::Percent => format!("{expression} / 100"),
        }
    }
}

/// One discrete user input action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A single decimal digit, 0 through 9.
    Digit(u8),
    /// Decimal point.
    Decimal,
    /// Binary operator.
    Operator(BinaryOperator),
    /// Unary function applied to the whole buffer.
    Unary(UnaryFunction),
    /// Reset the buffer to empty.
    Clear,
    /// Remove the last character.
    Delete,
    /// Hand the buffer to the evaluator.
    Evaluate,
}

impl Token {
    /// Build a digit token. Returns `None` for values above 9.
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self::Digit(value))
    }

    /// Label shown on the keypad button for this token.
    pub fn label(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Self::Digit(d) => DIGITS.get(usize::from(d)).copied().unwrap_or("?"),
            Self::Decimal => ".",
            Self::Operator(BinaryOperator::Add) => "+",
            Self::Operator(BinaryOperator::Subtract) => "-",
            Self::Operator(BinaryOperator::Multiply) => "×",
            Self::Operator(BinaryOperator::Divide) => "÷",
            Self::Unary(UnaryFunction::SquareRoot) => "√",
            Self::Unary(UnaryFunction::Square) => "x²",
            Self::Unary(UnaryFunction::Percent) => "%",
            Self::Clear => "C",
            Self::Delete => "Delete",
            Self::Evaluate => "=",
        }
    }
}
