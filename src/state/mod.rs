//! UI state machine.
//!
//! Transitions are testable without a terminal.

pub mod app_state;
pub mod notifications;

pub use app_state::{initial_theme, AppState};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};
