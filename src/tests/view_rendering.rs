//! Rendered screen content.

use crate::config::ResolvedConfig;
use crate::store::MemoryStore;
use crate::test_harness::AcceptanceTestHarness;
use crate::view::EMPTY_HISTORY_TEXT;
use crossterm::event::KeyCode;

#[test]
fn initial_screen_shows_zero_keypad_and_empty_history() {
    let mut harness = AcceptanceTestHarness::new();

    let output = harness.render_to_string();

    assert!(output.contains("Calculator"));
    assert!(output.contains("History"));
    assert!(output.contains(EMPTY_HISTORY_TEXT));
    assert!(output.contains("Delete"));
    for label in ["7", "8", "9", "C", "×", "÷", "√", "x²", "%", "="] {
        assert!(output.contains(label), "keypad should show {label}");
    }
    assert!(output.contains("light"), "status bar shows theme");
}

#[test]
fn display_shows_buffer_and_history_shows_entries() {
    let mut harness = AcceptanceTestHarness::new();
    harness.type_text("12+30");
    harness.send_key(KeyCode::Enter);
    harness.type_text("×2");

    let output = harness.render_to_string();

    assert!(output.contains("42×2"));
    assert!(output.contains("12+30 = 42"));
    assert!(!output.contains(EMPTY_HISTORY_TEXT));
}

#[test]
fn hidden_history_panel_is_not_rendered() {
    let config = ResolvedConfig {
        show_history: false,
        ..ResolvedConfig::default()
    };
    let mut harness =
        AcceptanceTestHarness::with_config(config, Box::new(MemoryStore::new()), 80, 24);

    let output = harness.render_to_string();

    assert!(!output.contains(EMPTY_HISTORY_TEXT));
}

#[test]
fn status_bar_follows_theme_toggle() {
    let mut harness = AcceptanceTestHarness::new();
    harness.send_key(KeyCode::Char('t'));

    let output = harness.render_to_string();
    let status = output.lines().last().unwrap_or_default();

    assert!(status.contains("dark"), "status line was {status:?}");
}

#[test]
fn tiny_terminal_renders_without_panic() {
    let mut harness =
        AcceptanceTestHarness::with_config(ResolvedConfig::default(), Box::new(MemoryStore::new()), 10, 4);
    harness.type_text("1+2=");
    harness.send_key(KeyCode::Char('?'));

    let _ = harness.render_to_string();
}
