//! Short-lived messages shown at the bottom of the screen. Nothing waits on
//! them; they simply disappear once their time is up.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const CAPACITY: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level { Info, Error }

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: Level,
    pub message: String,
    created_at: Instant,
}

#[derive(Debug, Clone)]
pub struct Notifications {
    queue: VecDeque<Toast>,
    ttl: Duration,
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self { Self { queue: VecDeque::new(), ttl } }

    pub fn push(&mut self, level: Level, message: impl Into<String>) {
        self.push_at(level, message, Instant::now());
    }

    pub fn push_at(&mut self, level: Level, message: impl Into<String>, now: Instant) {
        if self.queue.len() == CAPACITY {
            self.queue.pop_front();
        }
        self.queue.push_back(Toast { level, message: message.into(), created_at: now });
    }

    /// Drops expired toasts. Returns true if anything was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.queue.len();
        let ttl = self.ttl;
        self.queue.retain(|t| now.saturating_duration_since(t.created_at) < ttl);
        self.queue.len() != before
    }

    pub fn latest(&self) -> Option<&Toast> { self.queue.back() }

    pub fn len(&self) -> usize { self.queue.len() }

    pub fn is_empty(&self) -> bool { self.queue.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_ttl() {
        let start = Instant::now();
        let mut toasts = Notifications::new(Duration::from_millis(100));
        toasts.push_at(Level::Error, "first", start);
        toasts.push_at(Level::Info, "second", start + Duration::from_millis(50));

        assert!(!toasts.prune(start + Duration::from_millis(99)));
        assert_eq!(toasts.latest().unwrap().message, "second");

        assert!(toasts.prune(start + Duration::from_millis(100)));
        assert_eq!(toasts.len(), 1);

        assert!(toasts.prune(start + Duration::from_millis(150)));
        assert!(toasts.is_empty());
        assert!(toasts.latest().is_none());
    }

    #[test]
    fn queue_is_bounded() {
        let now = Instant::now();
        let mut toasts = Notifications::new(Duration::from_secs(10));
        for i in 0..20 {
            toasts.push_at(Level::Info, format!("m{i}"), now);
        }
        assert_eq!(toasts.len(), CAPACITY);
        assert_eq!(toasts.latest().unwrap().message, "m19");
    }
}
