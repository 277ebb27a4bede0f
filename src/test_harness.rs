//! Acceptance Test Harness for TUI testing
//!
//! Wraps TuiApp<TestBackend> with methods that simulate user interaction:
//! typing, clicking keypad buttons, and rendering to plain text.

use crate::config::ResolvedConfig;
use crate::model::Token;
use crate::state::AppState;
use crate::store::{MemoryStore, PreferenceStore};
use crate::view::{keypad, TuiApp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Instant;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Empty trailing lines are removed to keep snapshots clean.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Default config, in-memory store, light theme, 80x24 terminal.
    pub fn new() -> Self {
        Self::with_config(ResolvedConfig::default(), Box::new(MemoryStore::new()), 80, 24)
    }

    /// Harness over an explicit config and store. The system theme signal
    /// is ignored so results do not depend on the host terminal.
    pub fn with_config(
        config: ResolvedConfig,
        store: Box<dyn PreferenceStore>,
        width: u16,
        height: u16,
    ) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("TestBackend never fails");
        let state = AppState::with_system_theme(&config, store, None);
        Self {
            app: TuiApp::new_for_test(terminal, state),
            running: true,
        }
    }

    /// Send a single key event. Returns `true` if the app quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Type text one character at a time, stopping if the app quits.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the notification clock to `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.app.app_state_mut().tick(now)
    }

    /// Render the current frame and return it as text.
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Left-click at a screen position, after rendering so the keypad
    /// area is known.
    pub fn click_at(&mut self, column: u16, row: u16) {
        if !self.running {
            return;
        }
        let _ = self.app.render_test();

        self.app.handle_mouse_test(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    /// Click the on-screen button for `token`.
    pub fn click_button(&mut self, token: Token) {
        let _ = self.app.render_test();
        let area = self.app.terminal().backend().buffer().area;
        let keypad_area = crate::view::compute_layout(area, self.state().history_visible).keypad;
        let (rect, _) = keypad::button_rects(keypad_area)
            .into_iter()
            .find(|(_, t)| *t == token)
            .expect("token has a keypad button");
        self.click_at(rect.x + rect.width / 2, rect.y + rect.height / 2);
    }
}
