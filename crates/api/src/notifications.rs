// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Short-lived cache of notifications received in the background.
//!
//! The cache is owned by its caller; sharing it across tasks is the caller's
//! concern (the server wraps it in a mutex).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Days a notification is kept after it was received.
pub const NOTIFICATION_RETENTION_DAYS: i64 = 3;

/// A notification delivered while the app was not in the foreground.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Provider message id; duplicates are ignored.
    pub id: String,
    /// Title line.
    #[serde(default)]
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub body: String,
    /// Arbitrary payload.
    #[serde(default)]
    pub data: serde_json::Value,
    /// When the notification arrived.
    pub received_at: DateTime<Utc>,
}

/// In-memory notification store with time-based eviction.
#[derive(Debug, Clone, Default)]
pub struct NotificationCache {
    entries: Vec<Notification>,
}

impl NotificationCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn evict_expired(&mut self, now: DateTime<Utc>) {
        let cutoff: DateTime<Utc> = now - Duration::days(NOTIFICATION_RETENTION_DAYS);
        let before: usize = self.entries.len();
        self.entries.retain(|entry| entry.received_at >= cutoff);
        let evicted: usize = before - self.entries.len();
        if evicted > 0 {
            debug!(evicted, "Evicted expired notifications");
        }
    }

    /// Records a notification.
    ///
    /// # Returns
    ///
    /// `true` if the notification was stored, `false` if one with the same id
    /// was already cached or it is already past retention.
    pub fn record(&mut self, notification: Notification, now: DateTime<Utc>) -> bool {
        self.evict_expired(now);
        if self.entries.iter().any(|entry| entry.id == notification.id) {
            return false;
        }
        if notification.received_at < now - Duration::days(NOTIFICATION_RETENTION_DAYS) {
            return false;
        }
        self.entries.push(notification);
        true
    }

    /// Returns the retained notifications, oldest first.
    pub fn list(&mut self, now: DateTime<Utc>) -> Vec<Notification> {
        self.evict_expired(now);
        self.entries.clone()
    }

    /// Returns the number of cached notifications, expired ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the cache holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
