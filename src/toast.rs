//! Transient toast notifications
//!
//! Toasts expire on their own after a per-kind duration. A zero duration
//! keeps the toast until it is dismissed.

use chrono::{DateTime, Utc};
use std::time::Duration;
use uuid::Uuid;

/// Default lifetime for success, info and warning toasts
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Errors stay up longer
pub const ERROR_DURATION: Duration = Duration::from_millis(5000);

/// Maximum number of toasts rendered at once
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Info => "ℹ",
            Self::Warning => "⚠",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
    pub created_at: DateTime<Utc>,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind, duration: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            created_at: Utc::now(),
            duration,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        if self.duration.is_zero() {
            return false;
        }
        let Ok(lifetime) = chrono::Duration::from_std(self.duration) else {
            return false;
        };
        now >= self.created_at + lifetime
    }
}

#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Adds a toast and returns its id
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind, duration: Duration) -> Uuid {
        let toast = Toast::new(message, kind, duration);
        let id = toast.id;
        tracing::debug!("Toast ({:?}): {}", kind, toast.message);
        self.toasts.push(toast);
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> Uuid {
        self.push(message, ToastKind::Success, DEFAULT_DURATION)
    }

    pub fn error(&mut self, message: impl Into<String>) -> Uuid {
        self.push(message, ToastKind::Error, ERROR_DURATION)
    }

    pub fn info(&mut self, message: impl Into<String>) -> Uuid {
        self.push(message, ToastKind::Info, DEFAULT_DURATION)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> Uuid {
        self.push(message, ToastKind::Warning, DEFAULT_DURATION)
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drops every expired toast
    pub fn prune(&mut self, now: DateTime<Utc>) {
        self.toasts.retain(|t| !t.is_expired(now));
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Oldest first, capped at [`MAX_VISIBLE`]
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().take(MAX_VISIBLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_toasts_last_longer() {
        let mut queue = ToastQueue::default();
        queue.success("saved");
        queue.error("failed");
        let durations: Vec<_> = queue.visible().map(|t| t.duration).collect();
        assert_eq!(durations, vec![DEFAULT_DURATION, ERROR_DURATION]);
    }

    #[test]
    fn test_prune_removes_only_expired() {
        let mut queue = ToastQueue::default();
        queue.success("short");
        queue.error("long");
        let later = Utc::now() + chrono::Duration::milliseconds(3500);
        queue.prune(later);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.visible().next().map(|t| t.kind), Some(ToastKind::Error));
    }

    #[test]
    fn test_zero_duration_is_sticky() {
        let mut queue = ToastQueue::default();
        queue.push("sticky", ToastKind::Info, Duration::ZERO);
        queue.prune(Utc::now() + chrono::Duration::days(1));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut queue = ToastQueue::default();
        let keep = queue.info("keep");
        let drop = queue.warning("drop");
        queue.dismiss(drop);
        assert_eq!(queue.visible().map(|t| t.id).collect::<Vec<_>>(), vec![keep]);
    }

    #[test]
    fn test_visible_is_capped() {
        let mut queue = ToastQueue::default();
        for i in 0..5 {
            queue.info(format!("toast {i}"));
        }
        assert_eq!(queue.visible().count(), MAX_VISIBLE);
    }
}
