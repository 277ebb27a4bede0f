//! Calculator core (pure).
//!
//! - [`controller`]: buffer transitions for button presses
//! - [`sanitize`]: display syntax to evaluator syntax
//! - [`evaluator`]: evaluation and result classification

pub mod controller;
pub mod evaluator;
pub mod sanitize;

pub use controller::{apply_token, apply_tokens};
pub use evaluator::{evaluate, format_value, Evaluation};
pub use sanitize::{sanitize, Sanitized};
