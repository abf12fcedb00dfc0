//! Feed interaction controller.
//!
//! The only writer of the entity collections. Every intent becomes at most
//! one collection update, followed by recomputation of the derived contact
//! list and a push to the presenter.
//!
//! Every operation is total. Stale ids and blank submissions are logged at
//! debug level and otherwise ignored; nothing here returns an error.

use crate::collections::Collections;
use crate::model::{ChatContact, ContactId, Group, GroupId, Post, PostId, Story, StoryId};
use crate::state::action::{Action, Outcome};
use crate::state::contact_filter::filter_contacts;
use crate::state::draft::PostText;
use crate::state::events::{FeedEvent, FeedSnapshot, Presenter};
use std::sync::Arc;
use tracing::{debug, info};

/// Owner of the session's collections, draft and contact filter.
#[derive(Debug)]
pub struct FeedController<P: Presenter> {
    collections: Collections,
    visible_contacts: Arc<[ChatContact]>,
    contact_filter: Arc<str>,
    draft: Arc<str>,
    presenter: P,
}

impl<P: Presenter> FeedController<P> {
    /// Take ownership of the session's collections.
    ///
    /// The presenter receives nothing until the first applied mutation; call
    /// [`FeedController::snapshot`] for the initial render.
    pub fn new(collections: Collections, presenter: P) -> Self {
        let visible_contacts = collections.contacts();
        Self {
            collections,
            visible_contacts,
            contact_filter: Arc::from(""),
            draft: Arc::from(""),
            presenter,
        }
    }

    // ===== Read accessors =====

    /// Ordered snapshot of all posts.
    pub fn posts(&self) -> Arc<[Post]> {
        self.collections.posts()
    }

    /// Ordered snapshot of all stories.
    pub fn stories(&self) -> Arc<[Story]> {
        self.collections.stories()
    }

    /// Ordered snapshot of all groups.
    pub fn groups(&self) -> Arc<[Group]> {
        self.collections.groups()
    }

    /// Contacts, optionally filtered by `filter` (see [`Self::filter_contacts`]).
    ///
    /// `None` returns the whole collection regardless of the stored filter.
    pub fn contacts(&self, filter: Option<&str>) -> Arc<[ChatContact]> {
        match filter {
            Some(query) => self.filter_contacts(query),
            None => self.collections.contacts(),
        }
    }

    /// Contacts matching the stored filter.
    pub fn visible_contacts(&self) -> Arc<[ChatContact]> {
        Arc::clone(&self.visible_contacts)
    }

    /// Case-insensitive display-name match, computed fresh from the canonical list.
    pub fn filter_contacts(&self, query: &str) -> Arc<[ChatContact]> {
        filter_contacts(&self.collections.contacts(), query)
    }

    /// Current composer draft.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Current contact filter query.
    pub fn contact_filter(&self) -> &str {
        &self.contact_filter
    }

    /// Current collections value.
    pub fn collections(&self) -> &Collections {
        &self.collections
    }

    /// Everything a renderer needs, as one immutable value.
    pub fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot::new(
            self.collections.clone(),
            Arc::clone(&self.visible_contacts),
            Arc::clone(&self.contact_filter),
            Arc::clone(&self.draft),
        )
    }

    /// Read access to the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presenter, for presenter-local state such as
    /// dismissing notices. Collections are not reachable through it.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    // ===== Dispatch =====

    /// Apply one intent.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        match action {
            Action::Like(id) => applied_or_ignored(self.like(&id)),
            Action::ViewStory(id) => applied_or_ignored(self.view_story(&id)),
            Action::JoinGroup(id) => applied_or_ignored(self.join_group(&id)),
            Action::OpenContact(id) => applied_or_ignored(self.open_contact(&id)),
            Action::AdjustUnread { contact, delta } => {
                applied_or_ignored(self.update_unread_count(&contact, delta))
            }
            Action::ComposeDraft(text) => {
                self.compose_draft(text);
                Outcome::Applied
            }
            Action::SubmitPost(text) => submitted(self.submit_post(&text)),
            Action::SubmitDraft => submitted(self.submit_draft()),
            Action::SetContactFilter(query) => {
                self.set_contact_filter(query);
                Outcome::Applied
            }
        }
    }

    // ===== Entity mutations =====

    /// Add one like. Returns `false` if the post id is unknown.
    pub fn like(&mut self, id: &PostId) -> bool {
        let next = self.collections.increment_likes(id);
        let Some(post) = next.post(id) else {
            debug!(post_id = %id, "Ignoring like for unknown post");
            return false;
        };

        let event = FeedEvent::PostLiked {
            post_id: id.clone(),
            author: post.author().name().to_string(),
            likes: post.stats().likes,
        };
        info!(post_id = %id, likes = post.stats().likes, "Post liked");

        self.replace_collections(next);
        self.notify(event);
        true
    }

    /// Open a story. Returns `false` if the story id is unknown.
    ///
    /// Re-opening a viewed story changes nothing but is still announced.
    pub fn view_story(&mut self, id: &StoryId) -> bool {
        let next = self.collections.mark_story_viewed(id);
        let Some(story) = next.story(id) else {
            debug!(story_id = %id, "Ignoring view for unknown story");
            return false;
        };

        let event = FeedEvent::StoryViewed {
            story_id: id.clone(),
            user_name: story.user_name().to_string(),
        };
        info!(story_id = %id, "Story viewed");

        self.replace_collections(next);
        self.notify(event);
        true
    }

    /// Announce a join request. Returns `false` if the group id is unknown.
    pub fn join_group(&mut self, id: &GroupId) -> bool {
        let Some(group) = self.collections.mark_group_joined(id) else {
            debug!(group_id = %id, "Ignoring join for unknown group");
            return false;
        };

        let event = FeedEvent::GroupJoinRequested {
            group_id: id.clone(),
            name: group.name().to_string(),
        };
        info!(group_id = %id, "Group join requested");

        self.notify(event);
        true
    }

    /// Add `delta` to a contact's unread count. Returns `false` if the id is unknown.
    pub fn update_unread_count(&mut self, id: &ContactId, delta: i64) -> bool {
        let next = self.collections.update_unread_count(id, delta);
        let Some(contact) = next.contact(id) else {
            debug!(contact_id = %id, delta, "Ignoring unread update for unknown contact");
            return false;
        };

        let event = FeedEvent::UnreadCountChanged {
            contact_id: id.clone(),
            display_name: contact.display_name().to_string(),
            unread: contact.unread_count(),
        };
        debug!(contact_id = %id, unread = contact.unread_count(), "Unread count updated");

        self.replace_collections(next);
        self.notify(event);
        true
    }

    /// Open a chat: clear the contact's unread count.
    pub fn open_contact(&mut self, id: &ContactId) -> bool {
        let unread = self
            .collections
            .contact(id)
            .map_or(0, ChatContact::unread_count);
        self.update_unread_count(id, -i64::from(unread))
    }

    // ===== Draft and filter =====

    /// Replace the composer draft. The draft never becomes part of the posts.
    pub fn compose_draft(&mut self, text: impl Into<String>) {
        self.draft = Arc::from(text.into());
        self.notify(FeedEvent::DraftChanged);
    }

    /// Submit `text` as a post.
    ///
    /// Blank text (after trimming) is rejected: the draft stays as it is and
    /// no event is emitted. Otherwise the draft is cleared and exactly one
    /// [`FeedEvent::PostSubmitted`] is emitted. The post collection is never
    /// extended; persisting posts is someone else's job.
    pub fn submit_post(&mut self, text: &str) -> Option<PostText> {
        let Some(text) = PostText::new(text) else {
            debug!("Ignoring blank post submission");
            return None;
        };

        info!(chars = text.as_str().chars().count(), "Post submitted");
        self.draft = Arc::from("");
        self.notify(FeedEvent::PostSubmitted { text: text.clone() });
        Some(text)
    }

    /// Submit the current draft.
    pub fn submit_draft(&mut self) -> Option<PostText> {
        let draft = Arc::clone(&self.draft);
        self.submit_post(&draft)
    }

    /// Replace the contact filter and recompute the visible contacts.
    pub fn set_contact_filter(&mut self, query: impl Into<String>) {
        self.contact_filter = Arc::from(query.into());
        self.visible_contacts = self.filter_contacts(&self.contact_filter);

        let event = FeedEvent::ContactFilterChanged {
            query: self.contact_filter.to_string(),
            matches: self.visible_contacts.len(),
        };
        debug!(query = %self.contact_filter, matches = self.visible_contacts.len(), "Contact filter set");
        self.notify(event);
    }

    // ===== Internals =====

    fn replace_collections(&mut self, next: Collections) {
        self.collections = next;
        self.visible_contacts = self.filter_contacts(&self.contact_filter);
    }

    fn notify(&mut self, event: FeedEvent) {
        let snapshot = self.snapshot();
        self.presenter.present(&snapshot, &event);
    }
}

fn applied_or_ignored(applied: bool) -> Outcome {
    if applied {
        Outcome::Applied
    } else {
        Outcome::Ignored
    }
}

fn submitted(text: Option<PostText>) -> Outcome {
    match text {
        Some(text) => Outcome::Submitted(text),
        None => Outcome::NotSubmitted,
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
