//! Notification presenter.
//!
//! Transient toasts and center popups. The controller asks for them through
//! [`Action::Notify`](crate::app::Action::Notify); the presenter owns their
//! lifecycle: ids, timestamps and expiry.

use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// Kind of notification, which also fixes how long it stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Toast,
    ShareSuccess,
    SharePopup,
    DownloadPopup,
}

impl NotificationKind {
    /// Display duration in milliseconds.
    #[must_use]
    pub const fn duration_ms(self) -> i64 {
        match self {
            Self::Toast | Self::SharePopup => 3000,
            Self::ShareSuccess => 2500,
            Self::DownloadPopup => 3500,
        }
    }

    /// Message used when the caller does not provide one.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::Toast => "",
            Self::ShareSuccess => "✅ Link copied to clipboard!",
            Self::SharePopup => "🔗 Link copied to clipboard!\nReady to share this amazing wallpaper!",
            Self::DownloadPopup => "📥 Your download will start in a few seconds...\nPreparing your wallpaper!",
        }
    }

    #[must_use]
    pub const fn is_popup(self) -> bool {
        matches!(self, Self::SharePopup | Self::DownloadPopup)
    }
}

/// A displayed notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::milliseconds(self.kind.duration_ms())
    }

    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Ordered queue of visible notifications.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notification and returns its id.
    ///
    /// An empty `message` is replaced by the kind's default message.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>, now: DateTime<Utc>) -> u64 {
        let mut message = message.into();
        if message.is_empty() {
            message = kind.default_message().to_string();
        }

        self.next_id += 1;
        let id = self.next_id;
        tracing::debug!(id, kind = ?kind, "notification shown");
        self.items.push(Notification {
            id,
            kind,
            message,
            created_at: now,
        });
        id
    }

    /// Drops every notification whose display time has elapsed.
    ///
    /// Returns how many were removed.
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.items.len();
        self.items.retain(|n| !n.is_expired(now));
        before - self.items.len()
    }

    /// Removes one notification. Returns `false` if the id is unknown.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        before != self.items.len()
    }

    #[must_use]
    pub fn active(&self) -> &[Notification] {
        &self.items
    }

    /// Removes and returns everything currently queued.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.items)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
