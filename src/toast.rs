//! Transient notifications.
//!
//! Toasts expire after a TTL and the queue keeps only the newest few.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Oldest toasts are dropped beyond this many
pub const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub created: Instant,
}

#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Duration::from_secs(4))
    }
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::with_capacity(MAX_TOASTS),
            ttl,
        }
    }

    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.push_at(level, message, Instant::now());
    }

    pub fn push_at(&mut self, level: ToastLevel, message: impl Into<String>, now: Instant) {
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            level,
            message: message.into(),
            created: now,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }

    /// Drop toasts older than the TTL
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created) < ttl);
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_bounded() {
        let mut q = ToastQueue::default();
        for i in 0..8 {
            q.info(format!("toast {}", i));
        }
        assert_eq!(q.len(), MAX_TOASTS);
        assert_eq!(q.iter().next().unwrap().message, "toast 3");
        assert_eq!(q.latest().unwrap().message, "toast 7");
    }

    #[test]
    fn test_prune_drops_expired() {
        let start = Instant::now();
        let mut q = ToastQueue::new(Duration::from_secs(2));
        q.push_at(ToastLevel::Error, "old", start);
        q.push_at(ToastLevel::Success, "new", start + Duration::from_secs(1));

        q.prune(start + Duration::from_secs(2));
        assert_eq!(q.len(), 1);
        assert_eq!(q.latest().unwrap().message, "new");
    }
}
