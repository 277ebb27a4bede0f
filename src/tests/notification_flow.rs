//! Notification lifecycle through the full app.

use crate::config::ResolvedConfig;
use crate::state::NotificationLevel;
use crate::store::MemoryStore;
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

#[test]
fn empty_evaluate_shows_error_toast() {
    let mut harness = AcceptanceTestHarness::new();

    harness.send_key(KeyCode::Enter);

    let output = harness.render_to_string();
    assert!(output.contains("Please enter a value"));
    assert!(output.contains("Error"));
    assert!(harness.state().history().is_empty());
}

#[test]
fn escape_dismisses_toasts() {
    let mut harness = AcceptanceTestHarness::new();
    harness.send_key(KeyCode::Enter);

    harness.send_key(KeyCode::Esc);

    assert!(harness.state().notifications().is_empty());
    assert!(!harness.render_to_string().contains("Please enter a value"));
}

#[test]
fn toasts_expire_after_configured_timeout() {
    let config = ResolvedConfig {
        notification_timeout_ms: 500,
        ..ResolvedConfig::default()
    };
    let mut harness =
        AcceptanceTestHarness::with_config(config, Box::new(MemoryStore::new()), 80, 24);
    harness.send_key(KeyCode::Enter);

    assert!(!harness.tick(Instant::now()));
    assert_eq!(harness.state().notifications().len(), 1);

    assert!(harness.tick(Instant::now() + Duration::from_millis(600)));
    assert!(harness.state().notifications().is_empty());
}

#[test]
fn invalid_expression_keeps_buffer_and_notifies() {
    let mut harness = AcceptanceTestHarness::new();
    harness.type_text("5+");

    harness.send_key(KeyCode::Enter);

    assert_eq!(harness.state().buffer().as_str(), "5+");
    assert_eq!(
        harness.state().notifications().max_level(),
        Some(NotificationLevel::Error)
    );
}
