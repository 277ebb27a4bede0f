//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values.

use std::time::Duration;

/// Height of the title bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the display line including its border.
pub const DISPLAY_HEIGHT: u16 = 3;

/// Width percentage of the history panel when visible.
pub const HISTORY_PANEL_WIDTH_PERCENT: u16 = 40;

/// Width of a notification toast, including borders.
pub const NOTIFICATION_WIDTH: u16 = 44;

/// Height of a single notification toast, including borders.
pub const NOTIFICATION_HEIGHT: u16 = 3;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Event poll timeout. Also the granularity of notification expiry.
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);
