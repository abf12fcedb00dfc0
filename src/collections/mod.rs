//! Entity collections with copy-on-write snapshots.
//!
//! Every collection is an `Arc<[T]>`. Readers clone the `Arc` and keep a
//! consistent view for as long as they like. Update operations never touch
//! the existing slices: they build a new slice for the one collection that
//! changes and share the other three with the previous value.
//!
//! Unknown ids are not errors here. An update naming an id that is not present
//! returns a value sharing every slice with `self`.

use crate::model::{ChatContact, ContactId, Group, GroupId, Post, PostId, SeedData, Story, StoryId};
use std::sync::Arc;

/// Point-in-time value of all four entity collections.
///
/// Cloning is four reference-count bumps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collections {
    posts: Arc<[Post]>,
    stories: Arc<[Story]>,
    groups: Arc<[Group]>,
    contacts: Arc<[ChatContact]>,
}

impl Collections {
    /// Build collections from owned vectors, preserving their order.
    pub fn new(
        posts: Vec<Post>,
        stories: Vec<Story>,
        groups: Vec<Group>,
        contacts: Vec<ChatContact>,
    ) -> Self {
        Self {
            posts: posts.into(),
            stories: stories.into(),
            groups: groups.into(),
            contacts: contacts.into(),
        }
    }

    /// Build collections from a seed dataset. The seed's user is not an entity.
    pub fn from_seed(seed: SeedData) -> Self {
        Self::new(seed.posts, seed.stories, seed.groups, seed.contacts)
    }

    // ===== Read accessors =====

    /// Ordered snapshot of all posts.
    pub fn posts(&self) -> Arc<[Post]> {
        Arc::clone(&self.posts)
    }

    /// Ordered snapshot of all stories.
    pub fn stories(&self) -> Arc<[Story]> {
        Arc::clone(&self.stories)
    }

    /// Ordered snapshot of all groups.
    pub fn groups(&self) -> Arc<[Group]> {
        Arc::clone(&self.groups)
    }

    /// Ordered snapshot of all chat contacts.
    pub fn contacts(&self) -> Arc<[ChatContact]> {
        Arc::clone(&self.contacts)
    }

    /// Look up a post by id.
    pub fn post(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id() == id)
    }

    /// Look up a story by id.
    pub fn story(&self, id: &StoryId) -> Option<&Story> {
        self.stories.iter().find(|s| s.id() == id)
    }

    /// Look up a group by id.
    pub fn group(&self, id: &GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id() == id)
    }

    /// Look up a contact by id.
    pub fn contact(&self, id: &ContactId) -> Option<&ChatContact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    /// True when every collection is the very same allocation as in `other`.
    ///
    /// A no-op update yields a value for which this holds.
    pub fn shares_storage_with(&self, other: &Collections) -> bool {
        Arc::ptr_eq(&self.posts, &other.posts)
            && Arc::ptr_eq(&self.stories, &other.stories)
            && Arc::ptr_eq(&self.groups, &other.groups)
            && Arc::ptr_eq(&self.contacts, &other.contacts)
    }

    // ===== Copy-on-write updates =====

    /// Add `delta` to a contact's unread count, clamping the result at zero.
    pub fn update_unread_count(&self, id: &ContactId, delta: i64) -> Self {
        Self {
            contacts: replace_one(&self.contacts, |c| c.id() == id, |c| {
                c.with_unread_delta(delta)
            }),
            ..self.clone()
        }
    }

    /// Add exactly one like to a post.
    pub fn increment_likes(&self, id: &PostId) -> Self {
        Self {
            posts: replace_one(&self.posts, |p| p.id() == id, Post::liked),
            ..self.clone()
        }
    }

    /// Mark a story viewed. Viewing an already viewed story changes nothing.
    pub fn mark_story_viewed(&self, id: &StoryId) -> Self {
        Self {
            stories: replace_one(
                &self.stories,
                |s| s.id() == id && !s.is_viewed(),
                Story::viewed,
            ),
            ..self.clone()
        }
    }

    /// Resolve the group a join request refers to.
    ///
    /// Membership is not modelled, so the collections never change. The
    /// returned group feeds the join notification; `None` means the id is
    /// stale and nothing should be announced.
    pub fn mark_group_joined(&self, id: &GroupId) -> Option<&Group> {
        self.group(id)
    }
}

/// Replace the first element matching `pred` with `update(element)`.
///
/// Returns the original `Arc` untouched when nothing matches.
fn replace_one<T, P, U>(items: &Arc<[T]>, pred: P, update: U) -> Arc<[T]>
where
    T: Clone,
    P: Fn(&T) -> bool,
    U: FnOnce(&T) -> T,
{
    let Some(idx) = items.iter().position(pred) else {
        return Arc::clone(items);
    };

    let mut next = items.to_vec();
    next[idx] = update(&items[idx]);
    next.into()
}

#[cfg(test)]
#[path = "collections_tests.rs"]
mod tests;
