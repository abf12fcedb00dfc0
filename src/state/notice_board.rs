//! Bounded ring of user-facing notices.
//!
//! The terminal shell's presenter. Every pushed feed event that has a
//! human-readable notice lands here; the header shows the newest one.

use crate::state::events::{FeedEvent, FeedSnapshot, Presenter};
use std::collections::VecDeque;

/// Default number of notices retained.
pub const DEFAULT_NOTICE_CAPACITY: usize = 20;

/// Largest notice capacity accepted from configuration.
pub const MAX_NOTICE_CAPACITY: usize = 10_000;

/// Presenter that keeps the most recent notices (oldest at front).
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    notices: VecDeque<String>,
    capacity: usize,
    updates_received: usize,
    dismissed: bool,
}

impl NoticeBoard {
    /// Create a board retaining at most `capacity` notices.
    ///
    /// A capacity of zero still counts updates but keeps no text. Storage
    /// grows on demand past the default size.
    pub fn new(capacity: usize) -> Self {
        Self {
            notices: VecDeque::with_capacity(capacity.min(DEFAULT_NOTICE_CAPACITY)),
            capacity,
            updates_received: 0,
            dismissed: false,
        }
    }

    /// Add a notice, evicting the oldest when full.
    pub fn push(&mut self, notice: String) {
        if self.capacity == 0 {
            return;
        }
        if self.notices.len() >= self.capacity {
            self.notices.pop_front();
        }
        self.notices.push_back(notice);
        self.dismissed = false;
    }

    /// Newest notice, unless it was dismissed.
    pub fn latest(&self) -> Option<&str> {
        if self.dismissed {
            None
        } else {
            self.notices.back().map(String::as_str)
        }
    }

    /// Hide the newest notice until another one arrives.
    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    /// All retained notices, oldest first.
    pub fn notices(&self) -> &VecDeque<String> {
        &self.notices
    }

    /// Number of presenter updates received, including silent ones.
    pub fn updates_received(&self) -> usize {
        self.updates_received
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_CAPACITY)
    }
}

impl Presenter for NoticeBoard {
    fn present(&mut self, _snapshot: &FeedSnapshot, event: &FeedEvent) {
        self.updates_received += 1;
        if let Some(notice) = event.notice() {
            self.push(notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = NoticeBoard::new(3);
        assert!(board.notices().is_empty());
        assert_eq!(board.latest(), None);
    }

    #[test]
    fn push_keeps_order_and_evicts_oldest() {
        let mut board = NoticeBoard::new(2);
        board.push("first".to_string());
        board.push("second".to_string());
        board.push("third".to_string());

        let kept: Vec<_> = board.notices().iter().map(String::as_str).collect();
        assert_eq!(kept, vec!["second", "third"]);
        assert_eq!(board.latest(), Some("third"));
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut board = NoticeBoard::new(0);
        board.push("lost".to_string());
        assert!(board.notices().is_empty());
    }

    #[test]
    fn huge_capacity_does_not_preallocate() {
        let mut board = NoticeBoard::new(usize::MAX);
        assert!(board.notices().capacity() < 1024);
        board.push("still works".to_string());
        assert_eq!(board.latest(), Some("still works"));
    }

    #[test]
    fn dismiss_hides_until_next_notice() {
        let mut board = NoticeBoard::new(5);
        board.push("one".to_string());
        board.dismiss();
        assert_eq!(board.latest(), None);
        board.push("two".to_string());
        assert_eq!(board.latest(), Some("two"));
    }
}
