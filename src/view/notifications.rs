//! Notification toasts, stacked in the top-right corner.

use crate::state::NotificationQueue;
use crate::view::constants::{NOTIFICATION_HEIGHT, NOTIFICATION_WIDTH};
use crate::view::styles::Palette;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Areas for up to `count` toasts inside `area`, newest at the top.
///
/// Toasts that would not fit vertically are omitted.
pub fn toast_areas(area: Rect, count: usize) -> Vec<Rect> {
    let width = NOTIFICATION_WIDTH.min(area.width);
    let x = area.x + area.width - width;
    let fits = usize::from(area.height / NOTIFICATION_HEIGHT);

    (0..count.min(fits))
        .map(|i| Rect {
            x,
            // i < fits, so this stays within area.height
            y: area.y + NOTIFICATION_HEIGHT * i as u16,
            width,
            height: NOTIFICATION_HEIGHT,
        })
        .collect()
}

/// Draw the queued notifications as toasts, newest at the top.
pub fn render_notifications(
    frame: &mut Frame,
    area: Rect,
    queue: &NotificationQueue,
    palette: &Palette,
) {
    let newest_first: Vec<_> = queue.iter().rev().collect();
    for (notification, toast) in newest_first.iter().zip(toast_areas(area, newest_first.len())) {
        let style = palette.notification_style(notification.level);
        let block = Block::default()
            .title(format!(" {} ", notification.level.label()))
            .borders(Borders::ALL)
            .border_style(style)
            .style(palette.base);

        frame.render_widget(Clear, toast);
        frame.render_widget(
            Paragraph::new(notification.message.as_str())
                .style(style)
                .wrap(Wrap { trim: true })
                .block(block),
            toast,
        );
    }
}
