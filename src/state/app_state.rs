//! Application state and transitions.
//!
//! `AppState` owns everything the calculator screen shows: the buffer, the
//! session history, the active theme, panel visibility and the notification
//! queue. Transitions are plain methods; the only side effect is the theme
//! write through the injected [`PreferenceStore`].

use crate::calc::{apply_token, evaluate};
use crate::config::{ErrorDisplay, ResolvedConfig};
use crate::model::{
    Buffer, EvaluationError, History, HistoryEntry, KeyAction, ThemePreference, Token, THEME_KEY,
};
use crate::state::notifications::{NotificationLevel, NotificationQueue};
use crate::store::PreferenceStore;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Root UI state.
pub struct AppState {
    buffer: Buffer,
    history: History,
    theme: ThemePreference,
    notifications: NotificationQueue,
    error_display: ErrorDisplay,
    store: Box<dyn PreferenceStore>,

    /// Whether the history panel is shown.
    pub history_visible: bool,

    /// Whether the help overlay is shown.
    pub help_visible: bool,
}

impl AppState {
    /// Build state from resolved config, reading the system theme signal
    /// from the environment.
    pub fn new(config: &ResolvedConfig, store: Box<dyn PreferenceStore>) -> Self {
        Self::with_system_theme(config, store, ThemePreference::from_system())
    }

    /// Build state with an explicit system theme signal.
    pub fn with_system_theme(
        config: &ResolvedConfig,
        store: Box<dyn PreferenceStore>,
        system: Option<ThemePreference>,
    ) -> Self {
        let theme = initial_theme(
            config.theme_override,
            &*store,
            system,
            config.default_theme,
        );
        info!(%theme, "Starting with theme");

        Self {
            buffer: Buffer::new(),
            history: History::new(),
            theme,
            notifications: NotificationQueue::new(
                config.notification_capacity,
                Duration::from_millis(config.notification_timeout_ms),
            ),
            error_display: config.error_display,
            store,
            history_visible: config.show_history,
            help_visible: false,
        }
    }

    /// Current buffer.
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Session history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Active theme.
    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    /// Live notifications.
    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// Feed one token. `Evaluate` runs the evaluator; everything else goes
    /// through the buffer controller.
    pub fn press(&mut self, token: Token) {
        match token {
            Token::Evaluate => self.evaluate(),
            other => {
                self.buffer = apply_token(&self.buffer, other);
                debug!(?other, buffer = self.buffer.as_str(), "Applied token");
            }
        }
    }

    /// Evaluate the buffer.
    ///
    /// On success the entry `"<buffer> = <result>"` is appended to history and
    /// the buffer becomes the result. A negative square root is committed too,
    /// with a warning. On failure history is untouched and the error goes to
    /// the notification queue; the buffer is kept or replaced by the error
    /// sentinel depending on [`ErrorDisplay`].
    pub fn evaluate(&mut self) {
        match evaluate(&self.buffer) {
            Ok(evaluation) => {
                let entry = HistoryEntry::new(self.buffer.as_str(), evaluation.display.as_str());
                info!(entry = %entry, "Evaluated");
                self.history.push(entry);
                self.buffer = Buffer::from(evaluation.display);

                if let Some(warning) = evaluation.warning {
                    warn!(%warning, "Committed non-real square root");
                    self.notifications
                        .notify(NotificationLevel::Warning, warning.to_string());
                }
            }
            Err(error) => self.report_evaluation_error(error),
        }
    }

    fn report_evaluation_error(&mut self, error: EvaluationError) {
        warn!(%error, buffer = self.buffer.as_str(), "Evaluation failed");
        self.notifications
            .notify(NotificationLevel::Error, error.to_string());
        if self.error_display == ErrorDisplay::Buffer {
            self.buffer = Buffer::error(&error);
        }
    }

    /// Flip the theme and persist it.
    ///
    /// A failed write leaves the new theme active for this session and
    /// raises a warning notification.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        info!(theme = %self.theme, "Theme toggled");

        if let Err(error) = self.store.set(THEME_KEY, self.theme.as_str()) {
            warn!(%error, "Failed to persist theme");
            self.notifications.notify(
                NotificationLevel::Warning,
                format!("Theme could not be saved: {error}"),
            );
        }
    }

    /// Show or hide the history panel.
    pub fn toggle_history(&mut self) {
        self.history_visible = !self.history_visible;
    }

    /// Show or hide the shortcut overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Close help if it is open, otherwise clear notifications.
    pub fn dismiss(&mut self) {
        if self.help_visible {
            self.help_visible = false;
        } else {
            self.notifications.dismiss_all();
        }
    }

    /// Drop expired notifications. Returns `true` when a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notifications.expire(now)
    }

    /// Apply a user action. Returns `true` when the app should quit.
    pub fn dispatch(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Press(token) => self.press(token),
            KeyAction::ToggleHistory => self.toggle_history(),
            KeyAction::ToggleTheme => self.toggle_theme(),
            KeyAction::Help => self.toggle_help(),
            KeyAction::DismissNotifications => self.dismiss(),
            KeyAction::Quit => return true,
        }
        false
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("buffer", &self.buffer)
            .field("history", &self.history)
            .field("theme", &self.theme)
            .field("notifications", &self.notifications)
            .field("error_display", &self.error_display)
            .field("history_visible", &self.history_visible)
            .field("help_visible", &self.help_visible)
            .finish_non_exhaustive()
    }
}

/// Pick the startup theme.
///
/// Order: session override, stored value, system signal, configured default.
/// A stored value that cannot be read or parsed is logged and skipped.
pub fn initial_theme(
    session_override: Option<ThemePreference>,
    store: &dyn PreferenceStore,
    system: Option<ThemePreference>,
    default: ThemePreference,
) -> ThemePreference {
    if let Some(theme) = session_override {
        return theme;
    }

    let stored = match store.get(THEME_KEY) {
        Ok(value) => value,
        Err(error) => {
            warn!(%error, "Could not read stored theme");
            None
        }
    };

    let stored = stored.and_then(|value| match value.parse::<ThemePreference>() {
        Ok(theme) => Some(theme),
        Err(error) => {
            warn!(%error, "Ignoring stored theme");
            None
        }
    });

    stored.or(system).unwrap_or(default)
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
