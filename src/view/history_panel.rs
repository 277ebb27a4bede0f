//! Session history panel.

use crate::model::History;
use crate::view::styles::Palette;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Placeholder shown before the first evaluation.
pub const EMPTY_HISTORY_TEXT: &str = "There's no history yet.";

/// Lines to show for `history` in a panel with `visible_rows` rows.
///
/// Oldest first; when the history overflows, the newest entries win.
pub fn visible_lines(history: &History, visible_rows: usize) -> Vec<String> {
    if history.is_empty() {
        return vec![EMPTY_HISTORY_TEXT.to_string()];
    }
    let lines = history.lines();
    let skip = lines.len().saturating_sub(visible_rows);
    lines.into_iter().skip(skip).collect()
}

/// Draw the history panel, keeping the newest entries when space is short.
pub fn render_history_panel(frame: &mut Frame, area: Rect, history: &History, palette: &Palette) {
    let block = Block::default()
        .title(" History ")
        .title_style(palette.title)
        .borders(Borders::ALL)
        .border_style(palette.border)
        .style(palette.base);
    let inner = block.inner(area);

    let style = if history.is_empty() {
        palette.muted
    } else {
        palette.base
    };
    let lines: Vec<Line> = visible_lines(history, usize::from(inner.height))
        .into_iter()
        .map(Line::from)
        .collect();

    frame.render_widget(Paragraph::new(lines).style(style).block(block), area);
}
