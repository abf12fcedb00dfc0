//! User intents accepted by the feed controller.

use crate::model::{ContactId, GroupId, PostId, StoryId};
use crate::state::draft::PostText;

/// A single user intent: kind, target id and payload in one value.
///
/// Rows in the presentation layer dispatch these instead of owning closures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add one like to a post.
    Like(PostId),
    /// Open a story, marking it viewed.
    ViewStory(StoryId),
    /// Ask to join a group.
    JoinGroup(GroupId),
    /// Open a chat, clearing the contact's unread count.
    OpenContact(ContactId),
    /// Add `delta` to a contact's unread count (clamped at zero).
    AdjustUnread {
        /// Target contact.
        contact: ContactId,
        /// Signed change.
        delta: i64,
    },
    /// Replace the composer draft.
    ComposeDraft(String),
    /// Submit the given text as a post.
    SubmitPost(String),
    /// Submit whatever the draft currently holds.
    SubmitDraft,
    /// Replace the contact filter query.
    SetContactFilter(String),
}

/// Result of [`FeedController::dispatch`](crate::state::FeedController::dispatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The action changed state (or emitted its notification).
    Applied,
    /// The action named an unknown id; nothing happened.
    Ignored,
    /// A post was submitted with this text.
    Submitted(PostText),
    /// Submission was blank; nothing happened.
    NotSubmitted,
}

impl Outcome {
    /// True for [`Outcome::Applied`] and [`Outcome::Submitted`].
    pub fn changed_state(&self) -> bool {
        matches!(self, Outcome::Applied | Outcome::Submitted(_))
    }
}
