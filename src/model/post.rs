//! Feed posts.

use super::identifiers::PostId;
use super::person::Person;

/// Engagement counters shown under a post.
///
/// Only `likes` has a mutation path (the controller's like). `comments` and
/// `shares` are display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PostStats {
    /// Number of likes.
    pub likes: u32,
    /// Number of comments.
    pub comments: u32,
    /// Number of shares.
    pub shares: u32,
}

impl PostStats {
    /// Create a stats triple.
    pub fn new(likes: u32, comments: u32, shares: u32) -> Self {
        Self {
            likes,
            comments,
            shares,
        }
    }
}

/// A map shown under a post: a place label and the rendered map image.
///
/// Location and image always travel together; a post has both or neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapAttachment {
    location: String,
    image_ref: String,
}

impl MapAttachment {
    /// Pair a location label with its map image reference.
    pub fn new(location: impl Into<String>, image_ref: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            image_ref: image_ref.into(),
        }
    }

    /// Human readable place name.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Opaque map image reference.
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }
}

/// A single feed post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: PostId,
    author: Person,
    timestamp_label: String,
    content: Option<String>,
    image_ref: Option<String>,
    map: Option<MapAttachment>,
    stats: PostStats,
    tagged_friends: Vec<Person>,
}

impl Post {
    /// Create a post with no body, no media, zero stats and nobody tagged.
    ///
    /// `timestamp_label` is opaque display text ("2 hrs ago"), not a clock value.
    pub fn new(id: PostId, author: Person, timestamp_label: impl Into<String>) -> Self {
        Self {
            id,
            author,
            timestamp_label: timestamp_label.into(),
            content: None,
            image_ref: None,
            map: None,
            stats: PostStats::default(),
            tagged_friends: Vec::new(),
        }
    }

    /// Set the text body.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Attach a photo.
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    /// Attach a map.
    pub fn with_map(mut self, map: MapAttachment) -> Self {
        self.map = Some(map);
        self
    }

    /// Seed the engagement counters.
    pub fn with_stats(mut self, stats: PostStats) -> Self {
        self.stats = stats;
        self
    }

    /// Tag friends, in display order.
    pub fn with_tagged_friends(mut self, friends: Vec<Person>) -> Self {
        self.tagged_friends = friends;
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> &PostId {
        &self.id
    }

    /// Who wrote the post.
    pub fn author(&self) -> &Person {
        &self.author
    }

    /// Opaque relative-time label.
    pub fn timestamp_label(&self) -> &str {
        &self.timestamp_label
    }

    /// Text body, if any.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Photo reference, if any.
    pub fn image_ref(&self) -> Option<&str> {
        self.image_ref.as_deref()
    }

    /// Map attachment, if any.
    pub fn map(&self) -> Option<&MapAttachment> {
        self.map.as_ref()
    }

    /// Engagement counters.
    pub fn stats(&self) -> PostStats {
        self.stats
    }

    /// Tagged friends in display order.
    pub fn tagged_friends(&self) -> &[Person] {
        &self.tagged_friends
    }

    /// "is with ..." suffix for the post header, or `None` if nobody is tagged.
    ///
    /// Up to two names are listed. With more than two tagged friends the rest
    /// are summarized: `is with A, B and 3 others`.
    pub fn tagged_friends_label(&self) -> Option<String> {
        const LISTED: usize = 2;

        if self.tagged_friends.is_empty() {
            return None;
        }

        let names = self
            .tagged_friends
            .iter()
            .take(LISTED)
            .map(Person::name)
            .collect::<Vec<_>>()
            .join(", ");

        let rest = self.tagged_friends.len().saturating_sub(LISTED);
        Some(match rest {
            0 => format!("is with {names}"),
            1 => format!("is with {names} and 1 other"),
            n => format!("is with {names} and {n} others"),
        })
    }

    /// Copy with exactly one more like.
    pub(crate) fn liked(&self) -> Self {
        let mut next = self.clone();
        next.stats.likes = next.stats.likes.saturating_add(1);
        next
    }
}
