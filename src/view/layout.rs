//! Screen layout.
//!
//! Header on top, status bar at the bottom. Between them the calculator
//! (display line above the keypad) and, when visible, the history panel
//! to its right.

use crate::state::AppState;
use crate::view::constants::{
    DISPLAY_HEIGHT, HEADER_HEIGHT, HISTORY_PANEL_WIDTH_PERCENT, STATUS_BAR_HEIGHT,
};
use crate::view::styles::{ColorConfig, Palette};
use crate::view::{help, history_panel, keypad, notifications};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Areas of every screen region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub header: Rect,
    /// Boxed display line.
    pub display: Rect,
    /// Button grid.
    pub keypad: Rect,
    /// History panel, when visible.
    pub history: Option<Rect>,
    /// Bottom status bar.
    pub status: Rect,
}

/// Split `area` into screen regions.
pub fn compute_layout(area: Rect, history_visible: bool) -> ScreenLayout {
    let [header, content, status] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(area);

    let (calculator, history) = if history_visible {
        let [calculator, history] = Layout::horizontal([
            Constraint::Percentage(100 - HISTORY_PANEL_WIDTH_PERCENT),
            Constraint::Percentage(HISTORY_PANEL_WIDTH_PERCENT),
        ])
        .areas(content);
        (calculator, Some(history))
    } else {
        (content, None)
    };

    let [display, keypad] =
        Layout::vertical([Constraint::Length(DISPLAY_HEIGHT), Constraint::Min(0)])
            .areas(calculator);

    ScreenLayout {
        header,
        display,
        keypad,
        history,
        status,
    }
}

/// Render the whole screen. Returns the keypad area for mouse hit-testing.
pub fn render_layout(frame: &mut Frame, state: &AppState, colors: ColorConfig) -> Rect {
    let palette = Palette::new(state.theme(), colors);
    let layout = compute_layout(frame.area(), state.history_visible);

    frame.render_widget(Block::default().style(palette.base), frame.area());

    render_header(frame, layout.header, &palette);
    render_display(frame, layout.display, state, &palette);
    keypad::render_keypad(frame, layout.keypad, &palette);
    if let Some(history_area) = layout.history {
        history_panel::render_history_panel(frame, history_area, state.history(), &palette);
    }
    render_status_bar(frame, layout.status, state, &palette);

    let toast_region = Rect {
        y: layout.header.bottom(),
        height: layout.status.y.saturating_sub(layout.header.bottom()),
        ..frame.area()
    };
    notifications::render_notifications(frame, toast_region, state.notifications(), &palette);

    if state.help_visible {
        help::render_help_overlay(frame, &palette);
    }

    layout.keypad
}

fn render_header(frame: &mut Frame, area: Rect, palette: &Palette) {
    let header = Paragraph::new(Line::from(Span::styled(" Calculator ", palette.title)))
        .alignment(Alignment::Center)
        .style(palette.base);
    frame.render_widget(header, area);
}

/// The display line, right-aligned. An empty buffer shows `0`.
fn render_display(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border)
        .style(palette.display);
    let inner = block.inner(area);

    let text = if state.buffer().is_empty() {
        "0"
    } else {
        state.buffer().as_str()
    };
    let style = if state.buffer().is_error() {
        palette.error
    } else {
        palette.display
    };

    let paragraph = Paragraph::new(fit_right(text, usize::from(inner.width)))
        .style(style)
        .alignment(Alignment::Right)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Keep the tail of `text` that fits in `width` terminal columns.
///
/// Long expressions scroll off the left edge so the most recent input stays
/// visible.
pub fn fit_right(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut start = text.len();
    for (index, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = index;
    }
    text[start..].to_string()
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let status = Line::from(vec![
        Span::styled(format!(" {} ", state.theme()), palette.key),
        Span::styled(
            "| h: history | t: theme | ?: help | q: quit",
            palette.muted,
        ),
    ]);
    frame.render_widget(Paragraph::new(status).style(palette.base), area);
}
