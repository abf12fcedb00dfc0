//! Story tiles.

use super::identifiers::StoryId;
use super::person::initials;

/// A story tile in the rail.
///
/// `is_viewed` is monotonic: it only ever goes from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    id: StoryId,
    user_name: String,
    avatar_ref: String,
    story_image_ref: String,
    is_viewed: bool,
}

impl Story {
    /// Create an unviewed story.
    pub fn new(
        id: StoryId,
        user_name: impl Into<String>,
        avatar_ref: impl Into<String>,
        story_image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id,
            user_name: user_name.into(),
            avatar_ref: avatar_ref.into(),
            story_image_ref: story_image_ref.into(),
            is_viewed: false,
        }
    }

    /// Seed the story as already viewed.
    pub fn already_viewed(mut self) -> Self {
        self.is_viewed = true;
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> &StoryId {
        &self.id
    }

    /// Name of the story owner.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Opaque avatar reference.
    pub fn avatar_ref(&self) -> &str {
        &self.avatar_ref
    }

    /// Opaque story image reference.
    pub fn story_image_ref(&self) -> &str {
        &self.story_image_ref
    }

    /// Whether the signed-in user has opened this story.
    pub fn is_viewed(&self) -> bool {
        self.is_viewed
    }

    /// Avatar fallback text.
    pub fn initials(&self) -> String {
        initials(&self.user_name)
    }

    /// Copy marked as viewed.
    pub(crate) fn viewed(&self) -> Self {
        Self {
            is_viewed: true,
            ..self.clone()
        }
    }
}
