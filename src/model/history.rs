//! Session history of completed evaluations.

use chrono::{DateTime, Utc};
use std::fmt;

/// One completed evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    expression: String,
    result: String,
    evaluated_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Entry stamped with the current time.
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self::with_timestamp(expression, result, Utc::now())
    }

    /// Entry with an explicit timestamp.
    pub fn with_timestamp(
        expression: impl Into<String>,
        result: impl Into<String>,
        evaluated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
            evaluated_at,
        }
    }

    /// The buffer text as it was submitted.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Display form of the computed value.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// When the evaluation happened.
    pub fn evaluated_at(&self) -> DateTime<Utc> {
        self.evaluated_at
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

/// Append-only, order-preserving log of evaluations (most recent last).
///
/// Lives for the session only; never persisted.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been evaluated yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Rendered lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}
