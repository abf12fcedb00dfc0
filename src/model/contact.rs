//! Chat contact shown in the rail's chat widget.

use super::identifiers::ContactId;
use super::person::initials;

/// A chat contact with presence and last-message preview.
///
/// # Invariants
/// - `unread_count` is unsigned and is only ever changed through
///   `Collections::update_unread_count`, which clamps at zero.
/// - `online` is a plain presence flag; there is no heartbeat behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatContact {
    id: ContactId,
    display_name: String,
    avatar_ref: String,
    online: bool,
    last_message: Option<String>,
    last_message_time: Option<String>,
    unread_count: u32,
}

impl ChatContact {
    /// Create a contact with no message preview and no unread messages.
    pub fn new(
        id: ContactId,
        display_name: impl Into<String>,
        avatar_ref: impl Into<String>,
        online: bool,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            avatar_ref: avatar_ref.into(),
            online,
            last_message: None,
            last_message_time: None,
            unread_count: 0,
        }
    }

    /// Attach a last-message preview and its opaque relative-time label.
    pub fn with_last_message(mut self, text: impl Into<String>, time: impl Into<String>) -> Self {
        self.last_message = Some(text.into());
        self.last_message_time = Some(time.into());
        self
    }

    /// Seed the unread counter.
    pub fn with_unread(mut self, unread_count: u32) -> Self {
        self.unread_count = unread_count;
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> &ContactId {
        &self.id
    }

    /// Name used for display and for contact filtering.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Opaque avatar reference.
    pub fn avatar_ref(&self) -> &str {
        &self.avatar_ref
    }

    /// Presence flag.
    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Last message text, if any.
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// Relative time label of the last message, if any.
    pub fn last_message_time(&self) -> Option<&str> {
        self.last_message_time.as_deref()
    }

    /// Number of unread messages.
    pub fn unread_count(&self) -> u32 {
        self.unread_count
    }

    /// Whether the unread badge should be shown.
    pub fn has_unread(&self) -> bool {
        self.unread_count > 0
    }

    /// Avatar fallback text.
    pub fn initials(&self) -> String {
        initials(&self.display_name)
    }

    /// Case-insensitive substring match against the display name only.
    ///
    /// `query_lower` must already be lowercased.
    pub(crate) fn name_matches(&self, query_lower: &str) -> bool {
        self.display_name.to_lowercase().contains(query_lower)
    }

    /// Copy with `delta` applied to the unread counter, clamped to `0..=u32::MAX`.
    pub(crate) fn with_unread_delta(&self, delta: i64) -> Self {
        let next = (i64::from(self.unread_count)).saturating_add(delta);
        let clamped = next.clamp(0, i64::from(u32::MAX));
        Self {
            unread_count: u32::try_from(clamped).unwrap_or(u32::MAX),
            ..self.clone()
        }
    }
}
