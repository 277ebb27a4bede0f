//! Help overlay listing keyboard shortcuts.
//!
//! Toggled by `?`, dismissed by `Esc` or `?`.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups: (heading, [(keys, description)]).
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Input",
        &[
            ("0-9 .", "Digits and decimal point"),
            ("+ - * /", "Operators (x also multiplies)"),
            ("r", "Square root of the expression"),
            ("s", "Square the expression"),
            ("%", "Divide the expression by 100"),
        ],
    ),
    (
        "Editing",
        &[
            ("Enter =", "Evaluate"),
            ("Backspace", "Delete last character"),
            ("c Delete", "Clear"),
        ],
    ),
    (
        "View",
        &[
            ("h", "Toggle history panel"),
            ("t", "Toggle light/dark theme"),
            ("Esc", "Dismiss notifications"),
            ("Mouse", "Click keypad buttons"),
        ],
    ),
    ("Application", &[("?", "Toggle this help"), ("q Ctrl+C", "Quit")]),
];

/// Draw the keyboard shortcut overlay centered over the screen.
pub fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let help = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .title_style(palette.title)
                .borders(Borders::ALL)
                .border_style(palette.border)
                .style(palette.base),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(help, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: popup_area.height.min(1),
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        palette.muted.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// Rect centered in `area` covering the given percentages.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = area.width.saturating_sub(popup_width) / 2;
    let popup_y = area.height.saturating_sub(popup_height) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, (heading, entries)) in SHORTCUTS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*heading, palette.title)));
        for (keys, description) in entries.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<12}"), palette.key),
                Span::styled(*description, palette.base),
            ]));
        }
    }
    lines
}
