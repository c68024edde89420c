//! Toast notification feed.
//!
//! The notification channel between the session manager and the display
//! layer: operations push notices here, the toast overlay decides how to
//! render them.

use leptos::prelude::*;

use crate::config::MAX_NOTICES;
use crate::models::Notice;

/// Bounded reactive feed of toast notifications.
///
/// # Note
///
/// This struct is `Copy` because it only wraps a Leptos signal; copies
/// share the same underlying feed.
#[derive(Clone, Copy)]
pub struct NoticeFeed {
    notices: RwSignal<Vec<Notice>>,
}

impl NoticeFeed {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
        }
    }

    /// Read handle for the display layer.
    pub fn notices(&self) -> RwSignal<Vec<Notice>> {
        self.notices
    }

    /// Append a notice, dropping the oldest beyond `MAX_NOTICES`.
    pub fn push(&self, notice: Notice) {
        self.notices.update(|list| {
            list.push(notice);
            if list.len() > MAX_NOTICES {
                let excess = list.len() - MAX_NOTICES;
                list.drain(..excess);
            }
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(Notice::info(message));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Notice::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Notice::error(message));
    }

    /// Remove a notice by ID (auto-dismiss timer or user click).
    pub fn dismiss(&self, id: usize) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }
}

impl Default for NoticeFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed() -> (Owner, NoticeFeed) {
        let owner = Owner::new();
        owner.set();
        (owner, NoticeFeed::new())
    }

    #[test]
    fn test_push_and_dismiss() {
        let (_owner, feed) = feed();
        feed.error("boom");
        feed.info("hello");

        let notices = feed.notices().get_untracked();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].message, "boom");

        feed.dismiss(notices[0].id);
        let notices = feed.notices().get_untracked();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, "hello");
    }

    #[test]
    fn test_oldest_notices_are_dropped_beyond_cap() {
        let (_owner, feed) = feed();
        for i in 0..MAX_NOTICES + 2 {
            feed.info(format!("notice {i}"));
        }

        let notices = feed.notices().get_untracked();
        assert_eq!(notices.len(), MAX_NOTICES);
        assert_eq!(notices[0].message, "notice 2");
    }

    #[test]
    fn test_dismissing_unknown_id_is_a_noop() {
        let (_owner, feed) = feed();
        feed.info("kept");
        feed.dismiss(usize::MAX);
        assert_eq!(feed.notices().get_untracked().len(), 1);
    }
}
