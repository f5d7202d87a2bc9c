//! Transient notifications for UI feedback.
//!
//! Each roster operation posts a [`Notification`]. A renderer shows the
//! newest one until it is older than the queue's TTL or a newer one
//! supersedes it. Text front-ends drain them with
//! [`NotificationQueue::take_unseen`] instead.

use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;

/// How long a notification stays on screen.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3);

/// Number of notifications kept in history.
const HISTORY_LIMIT: usize = 64;

/// Severity of a notification, which also picks its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
}

impl NotificationKind {
    /// Upper-case tag used by the line-oriented front-end.
    pub fn tag(self) -> &'static str {
        match self {
            NotificationKind::Success => "SUCCESS",
            NotificationKind::Error => "ERROR",
            NotificationKind::Warning => "WARNING",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub posted_at: Instant,
}

impl Notification {
    /// Whether the notification has outlived `ttl` at `now`.
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.posted_at) >= ttl
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Bounded history of notifications with a display TTL.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    entries: VecDeque<Notification>,
    ttl: Duration,
    unseen: usize,
    dismissed: bool,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl NotificationQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_LIMIT),
            ttl,
            unseen: 0,
            dismissed: false,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn set_ttl(&mut self, ttl: Duration) {
        self.ttl = ttl;
    }

    /// Post a notification stamped with the current time.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.push_at(kind, message, Instant::now());
    }

    /// Post a notification stamped with `posted_at`.
    pub fn push_at(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        posted_at: Instant,
    ) {
        if self.entries.len() == HISTORY_LIMIT {
            self.entries.pop_front();
        }
        self.entries.push_back(Notification {
            kind,
            message: message.into(),
            posted_at,
        });
        self.unseen = (self.unseen + 1).min(self.entries.len());
        self.dismissed = false;
    }

    /// The notification to display at `now`, if any.
    ///
    /// Only the newest entry is ever shown; older ones are superseded even
    /// when they have not expired.
    pub fn current(&self, now: Instant) -> Option<&Notification> {
        if self.dismissed {
            return None;
        }
        self.entries
            .back()
            .filter(|n| !n.is_expired(now, self.ttl))
    }

    /// Hide the current notification before its TTL runs out.
    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    /// Newest notification regardless of age.
    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    /// Notifications posted since the last call, oldest first.
    pub fn take_unseen(&mut self) -> Vec<Notification> {
        let skip = self.entries.len() - self.unseen;
        self.unseen = 0;
        self.entries.iter().skip(skip).cloned().collect()
    }

    /// Retained notifications, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Notification> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
