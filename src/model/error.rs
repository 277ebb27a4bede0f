//! Error types for gridcalc.
//!
//! Errors are `thiserror` enums that compose through `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`EvaluationError`] - evaluating the buffer failed. Never fatal: the
//!   application state converts it into a notification.
//! - [`NegativeSqrtWarning`] - not an error. Attached to a successful
//!   evaluation whose square root had a negative argument.
//! - [`StoreError`] - reading or writing the preference store failed. Neither
//!   is fatal: a failed read falls back to the system theme, a failed write
//!   produces a warning notification.

use std::path::PathBuf;
use thiserror::Error;

/// Why the buffer could not be evaluated.
///
/// Buffer and history are left untouched for every variant.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvaluationError {
    /// Buffer was empty or whitespace at evaluate time.
    #[error("Please enter a value")]
    EmptyInput,

    /// The buffer contains text the sanitizer does not recognize.
    #[error("Unrecognized input '{text}' at position {position}")]
    Syntax {
        /// Offending text.
        text: String,
        /// Character offset into the buffer.
        position: usize,
    },

    /// The evaluator rejected the sanitized expression.
    #[error("{message}")]
    Evaluator {
        /// Message produced by the evaluator.
        message: String,
    },

    /// The expression evaluated to infinity or NaN.
    #[error("Result is not a finite number ({value})")]
    NonFinite {
        /// The offending value.
        value: f64,
    },
}

/// Square root of a negative number. The value is still committed.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("Negative input for square root")]
pub struct NegativeSqrtWarning;

/// Errors from the preference key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Backing file is not a flat JSON object of strings.
    #[error("Malformed preferences in {path}: {source}")]
    Json {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
}
