//! Push boundary between the controller and the presentation layer.
//!
//! After every applied mutation the controller calls [`Presenter::present`]
//! with the new [`FeedSnapshot`] and the [`FeedEvent`] that produced it.
//! Presenters never get a mutable handle on the collections and never poll.

use crate::collections::Collections;
use crate::model::{ChatContact, ContactId, GroupId, Group, Post, PostId, Story, StoryId};
use crate::state::draft::PostText;
use std::sync::Arc;

// ===== FeedEvent =====

/// What changed. Carries display names so presenters need no lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// A post received one more like.
    PostLiked {
        /// Liked post.
        post_id: PostId,
        /// Author of the liked post.
        author: String,
        /// Like count after the increment.
        likes: u32,
    },
    /// A story was opened (also emitted when re-opening a viewed story).
    StoryViewed {
        /// Opened story.
        story_id: StoryId,
        /// Owner of the story.
        user_name: String,
    },
    /// The user asked to join a group. No membership state is recorded.
    GroupJoinRequested {
        /// Requested group.
        group_id: GroupId,
        /// Group name.
        name: String,
    },
    /// A contact's unread counter changed.
    UnreadCountChanged {
        /// Affected contact.
        contact_id: ContactId,
        /// Contact display name.
        display_name: String,
        /// Counter after clamping.
        unread: u32,
    },
    /// The composer draft text changed.
    DraftChanged,
    /// A non-blank post was submitted and the draft cleared.
    PostSubmitted {
        /// Submitted text, exactly as entered.
        text: PostText,
    },
    /// The contact filter query changed.
    ContactFilterChanged {
        /// New query.
        query: String,
        /// Number of contacts now visible.
        matches: usize,
    },
}

impl FeedEvent {
    /// One-line human readable notice for the header.
    ///
    /// `None` for events that are visible on their own (typing, filtering).
    pub fn notice(&self) -> Option<String> {
        match self {
            FeedEvent::PostLiked { author, likes, .. } => {
                Some(format!("You liked {author}'s post ({likes} likes)"))
            }
            FeedEvent::StoryViewed { user_name, .. } => Some(format!("Viewing {user_name}'s story")),
            FeedEvent::GroupJoinRequested { name, .. } => {
                Some(format!("Asked to join {name}"))
            }
            FeedEvent::UnreadCountChanged {
                display_name,
                unread: 0,
                ..
            } => Some(format!("Opened chat with {display_name}")),
            FeedEvent::UnreadCountChanged {
                display_name,
                unread,
                ..
            } => Some(format!("{display_name}: {unread} unread")),
            FeedEvent::PostSubmitted { text } => Some(format!("Posted: {}", text.as_str().trim())),
            FeedEvent::DraftChanged | FeedEvent::ContactFilterChanged { .. } => None,
        }
    }
}

// ===== FeedSnapshot =====

/// Immutable view of everything the presentation layer renders from the feed.
///
/// Cheap to clone: all collections are shared `Arc`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSnapshot {
    collections: Collections,
    visible_contacts: Arc<[ChatContact]>,
    contact_filter: Arc<str>,
    draft: Arc<str>,
}

impl FeedSnapshot {
    pub(crate) fn new(
        collections: Collections,
        visible_contacts: Arc<[ChatContact]>,
        contact_filter: Arc<str>,
        draft: Arc<str>,
    ) -> Self {
        Self {
            collections,
            visible_contacts,
            contact_filter,
            draft,
        }
    }

    /// All posts in feed order.
    pub fn posts(&self) -> Arc<[Post]> {
        self.collections.posts()
    }

    /// All stories.
    pub fn stories(&self) -> Arc<[Story]> {
        self.collections.stories()
    }

    /// All suggested groups.
    pub fn groups(&self) -> Arc<[Group]> {
        self.collections.groups()
    }

    /// All contacts, ignoring the filter.
    pub fn all_contacts(&self) -> Arc<[ChatContact]> {
        self.collections.contacts()
    }

    /// Contacts matching the current filter, in canonical order.
    pub fn visible_contacts(&self) -> Arc<[ChatContact]> {
        Arc::clone(&self.visible_contacts)
    }

    /// Current contact filter query.
    pub fn contact_filter(&self) -> &str {
        &self.contact_filter
    }

    /// Current composer draft.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Underlying collections value.
    pub fn collections(&self) -> &Collections {
        &self.collections
    }
}

// ===== Presenter =====

/// Receiver of pushed feed updates.
pub trait Presenter {
    /// Called once per applied mutation, after the new state is in place.
    fn present(&mut self, snapshot: &FeedSnapshot, event: &FeedEvent);
}

/// Presenter that drops every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present(&mut self, _snapshot: &FeedSnapshot, _event: &FeedEvent) {}
}

/// Presenter that records every update in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    updates: Vec<(FeedSnapshot, FeedEvent)>,
}

impl RecordingPresenter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded updates, oldest first.
    pub fn updates(&self) -> &[(FeedSnapshot, FeedEvent)] {
        &self.updates
    }

    /// Recorded events only, oldest first.
    pub fn events(&self) -> Vec<&FeedEvent> {
        self.updates.iter().map(|(_, e)| e).collect()
    }

    /// Most recent snapshot, if any update was recorded.
    pub fn last_snapshot(&self) -> Option<&FeedSnapshot> {
        self.updates.last().map(|(s, _)| s)
    }
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, snapshot: &FeedSnapshot, event: &FeedEvent) {
        self.updates.push((snapshot.clone(), event.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_notice_mentions_author_and_count() {
        let event = FeedEvent::PostLiked {
            post_id: PostId::new("1").unwrap(),
            author: "Julia Fillory".to_string(),
            likes: 126,
        };
        assert_eq!(
            event.notice().as_deref(),
            Some("You liked Julia Fillory's post (126 likes)")
        );
    }

    #[test]
    fn cleared_unread_reads_as_opened_chat() {
        let event = FeedEvent::UnreadCountChanged {
            contact_id: ContactId::new("u1").unwrap(),
            display_name: "Alice Johnson".to_string(),
            unread: 0,
        };
        assert_eq!(event.notice().as_deref(), Some("Opened chat with Alice Johnson"));
    }

    #[test]
    fn nonzero_unread_reports_count() {
        let event = FeedEvent::UnreadCountChanged {
            contact_id: ContactId::new("u1").unwrap(),
            display_name: "Alice Johnson".to_string(),
            unread: 3,
        };
        assert_eq!(event.notice().as_deref(), Some("Alice Johnson: 3 unread"));
    }

    #[test]
    fn typing_and_filtering_have_no_notice() {
        assert_eq!(FeedEvent::DraftChanged.notice(), None);
        let filter = FeedEvent::ContactFilterChanged {
            query: "al".to_string(),
            matches: 2,
        };
        assert_eq!(filter.notice(), None);
    }

    #[test]
    fn submitted_notice_trims_text() {
        let event = FeedEvent::PostSubmitted {
            text: PostText::new("  hello  ").unwrap(),
        };
        assert_eq!(event.notice().as_deref(), Some("Posted: hello"));
    }
}
