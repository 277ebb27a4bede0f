//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod buffer;
pub mod error;
pub mod history;
pub mod key_action;
pub mod theme;
pub mod token;

// Re-export for convenience
pub use buffer::{Buffer, ERROR_MARKER};
pub use error::{EvaluationError, NegativeSqrtWarning, StoreError};
pub use history::{History, HistoryEntry};
pub use key_action::KeyAction;
pub use theme::{ThemePreference, UnknownTheme, THEME_KEY};
pub use token::{BinaryOperator, Token, UnaryFunction};
