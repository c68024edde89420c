//! Toast notification payloads.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Severity of a toast notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// Informational message (account/network changes, disconnect).
    Info,
    /// Successful operation (connected).
    Success,
    /// Failed operation (rejection, invalid address, provider errors).
    Error,
}

/// A single toast notification with a unique ID.
#[derive(Clone, Debug)]
pub struct Notice {
    /// Unique ID for efficient keying in For loops and for dismissal.
    pub id: usize,
    pub kind: NoticeKind,
    pub message: String,
}

// Global counter for generating unique IDs
static NOTICE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl Notice {
    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            id: NOTICE_COUNTER.fetch_add(1, Ordering::Relaxed),
            kind,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }
}

impl PartialEq for Notice {
    fn eq(&self, other: &Self) -> bool {
        // Only compare content, not ID
        self.kind == other.kind && self.message == other.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = Notice::info("one");
        let b = Notice::info("two");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_eq_ignores_id() {
        let a = Notice::error("boom");
        let b = Notice::error("boom");
        assert_ne!(a.id, b.id);
        assert_eq!(a, b);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Notice::info("x").kind, NoticeKind::Info);
        assert_eq!(Notice::success("x").kind, NoticeKind::Success);
        assert_eq!(Notice::error("x").kind, NoticeKind::Error);
    }
}
