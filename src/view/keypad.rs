//! On-screen keypad.
//!
//! The button grid is four columns wide. Rendering and mouse hit-testing
//! share [`button_rects`] so a click always lands on the button drawn there.

use crate::model::{BinaryOperator, Token, UnaryFunction};
use crate::view::styles::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Columns in the grid.
pub const KEYPAD_COLUMNS: u16 = 4;

/// A button and the number of columns it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// Token emitted when the button is pressed.
    pub token: Token,
    /// Columns the button covers.
    pub span: u16,
}

const fn button(token: Token) -> KeypadButton {
    KeypadButton { token, span: 1 }
}

const fn wide(token: Token, span: u16) -> KeypadButton {
    KeypadButton { token, span }
}

/// Button rows, top to bottom. Each row's spans sum to [`KEYPAD_COLUMNS`].
pub const KEYPAD_ROWS: [&[KeypadButton]; 6] = [
    &[
        button(Token::Digit(7)),
        button(Token::Digit(8)),
        button(Token::Digit(9)),
        button(Token::Clear),
    ],
    &[
        button(Token::Digit(4)),
        button(Token::Digit(5)),
        button(Token::Digit(6)),
        button(Token::Operator(BinaryOperator::Multiply)),
    ],
    &[
        button(Token::Digit(1)),
        button(Token::Digit(2)),
        button(Token::Digit(3)),
        button(Token::Operator(BinaryOperator::Subtract)),
    ],
    &[
        button(Token::Digit(0)),
        button(Token::Operator(BinaryOperator::Divide)),
        button(Token::Unary(UnaryFunction::SquareRoot)),
        button(Token::Operator(BinaryOperator::Add)),
    ],
    &[
        button(Token::Unary(UnaryFunction::Square)),
        button(Token::Unary(UnaryFunction::Percent)),
        button(Token::Decimal),
        button(Token::Evaluate),
    ],
    &[wide(Token::Delete, 4)],
];

/// Screen rectangle of every button inside `area`, in row-major order.
pub fn button_rects(area: Rect) -> Vec<(Rect, Token)> {
    let row_count = KEYPAD_ROWS.len() as u32;
    let rows = Layout::vertical(vec![Constraint::Ratio(1, row_count); KEYPAD_ROWS.len()])
        .split(area);
    let column_constraints = vec![Constraint::Ratio(1, u32::from(KEYPAD_COLUMNS)); usize::from(KEYPAD_COLUMNS)];

    let mut rects = Vec::new();
    for (row_area, buttons) in rows.iter().zip(KEYPAD_ROWS) {
        let columns = Layout::horizontal(column_constraints.clone()).split(*row_area);
        let mut column = 0usize;
        for b in buttons.iter() {
            let first = columns[column];
            let last_index = (column + usize::from(b.span)).min(columns.len()) - 1;
            rects.push((first.union(columns[last_index]), b.token));
            column += usize::from(b.span);
        }
    }
    rects
}

/// The token under a screen position, if any.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Token> {
    let position = ratatui::layout::Position::new(column, row);
    button_rects(area)
        .into_iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, token)| token)
}

/// Render the grid into `area`.
pub fn render_keypad(frame: &mut Frame, area: Rect, palette: &Palette) {
    for (rect, token) in button_rects(area) {
        let style = palette.button_style(token);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border)
            .style(style);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        // Vertically center the label in the remaining space.
        let label_area = Rect {
            y: inner.y + inner.height.saturating_sub(1) / 2,
            height: inner.height.min(1),
            ..inner
        };
        frame.render_widget(
            Paragraph::new(token.label())
                .style(style)
                .alignment(Alignment::Center),
            label_area,
        );
    }
}
