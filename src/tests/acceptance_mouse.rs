//! Mouse-driven calculator sessions.

use crate::model::{BinaryOperator, Token, UnaryFunction};
use crate::test_harness::AcceptanceTestHarness;

#[test]
fn clicking_buttons_builds_and_evaluates_expression() {
    let mut harness = AcceptanceTestHarness::new();

    for token in [
        Token::Digit(1),
        Token::Digit(2),
        Token::Operator(BinaryOperator::Add),
        Token::Digit(3),
        Token::Digit(0),
        Token::Evaluate,
    ] {
        harness.click_button(token);
    }

    assert_eq!(harness.state().buffer().as_str(), "42");
    assert_eq!(harness.state().history().lines(), vec!["12+30 = 42"]);
}

#[test]
fn clicking_square_root_on_negative_commits_nan() {
    let mut harness = AcceptanceTestHarness::new();
    harness.type_text("0-16");

    harness.click_button(Token::Unary(UnaryFunction::SquareRoot));
    harness.click_button(Token::Evaluate);

    assert_eq!(harness.state().buffer().as_str(), "NaN");
    assert_eq!(harness.state().history().lines(), vec!["sqrt(0-16) = NaN"]);
    assert_eq!(harness.state().notifications().len(), 1);
}

#[test]
fn clicking_delete_and_clear() {
    let mut harness = AcceptanceTestHarness::new();
    harness.type_text("123");

    harness.click_button(Token::Delete);
    assert_eq!(harness.state().buffer().as_str(), "12");

    harness.click_button(Token::Clear);
    assert!(harness.state().buffer().is_empty());
}

#[test]
fn clicking_outside_keypad_does_nothing() {
    let mut harness = AcceptanceTestHarness::new();

    // Header row and status bar row.
    harness.click_at(5, 0);
    harness.click_at(5, 23);

    assert!(harness.state().buffer().is_empty());
}

#[test]
fn clicks_follow_layout_when_history_hidden() {
    let mut harness = AcceptanceTestHarness::new();
    harness.type_text("h");

    harness.click_button(Token::Digit(9));

    assert_eq!(harness.state().buffer().as_str(), "9");
}
