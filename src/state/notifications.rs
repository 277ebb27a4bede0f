//! Transient notification queue.
//!
//! Notifications stack newest-last, drop the oldest once the queue is full,
//! and expire after a fixed lifetime. Expiry is driven by the caller passing
//! the current instant, so the queue never reads the clock itself.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Severity of a notification. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NotificationLevel {
    /// Informational message.
    Info,
    /// Something went wrong but the action still took effect.
    Warning,
    /// The action failed.
    Error,
}

impl NotificationLevel {
    /// Title shown on the toast border.
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// A single message shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Text shown to the user.
    pub message: String,
    /// When the notification was raised; expiry counts from here.
    pub created_at: Instant,
}

impl Notification {
    /// Create a notification raised at `created_at`.
    pub fn new(level: NotificationLevel, message: impl Into<String>, created_at: Instant) -> Self {
        Self {
            level,
            message: message.into(),
            created_at,
        }
    }

    fn is_expired(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= timeout
    }
}

/// Bounded queue of live notifications (oldest at front).
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    entries: VecDeque<Notification>,
    capacity: usize,
    timeout: Duration,
}

impl NotificationQueue {
    /// A capacity of zero silently discards every notification.
    pub fn new(capacity: usize, timeout: Duration) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            timeout,
        }
    }

    /// Add a notification, evicting the oldest if at capacity.
    pub fn push(&mut self, notification: Notification) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(notification);
    }

    /// Convenience for `push` stamped with the current time.
    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.push(Notification::new(level, message, Instant::now()));
    }

    /// Drop every notification older than the timeout.
    ///
    /// Returns `true` if anything was removed, so callers know to redraw.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.entries.len();
        let timeout = self.timeout;
        self.entries.retain(|n| !n.is_expired(now, timeout));
        self.entries.len() != before
    }

    /// Remove everything. Returns `true` if the queue was non-empty.
    pub fn dismiss_all(&mut self) -> bool {
        let had_any = !self.entries.is_empty();
        self.entries.clear();
        had_any
    }

    /// Live notifications, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Number of live notifications.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently pushed notification.
    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    /// Highest severity currently queued.
    pub fn max_level(&self) -> Option<NotificationLevel> {
        self.entries.iter().map(|n| n.level).max()
    }

    /// Lifetime of each notification.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
