//! Entity identifier newtypes with smart constructors.
//!
//! All identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use std::fmt;

/// Error returned when an entity identifier fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidEntityId {
    /// The raw identifier was empty or whitespace-only.
    #[error("{kind} ID cannot be empty")]
    Empty {
        /// Which entity the identifier belongs to (e.g. "Post").
        kind: &'static str,
    },
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Smart constructor: rejects empty and whitespace-only ids.
            pub fn new(raw: impl Into<String>) -> Result<Self, InvalidEntityId> {
                let raw = raw.into();
                if raw.trim().is_empty() {
                    return Err(InvalidEntityId::Empty { kind: $kind });
                }
                Ok(Self(raw))
            }

            /// Borrow the raw identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

entity_id!(
    /// Identifier of a feed post (e.g. "1").
    PostId,
    "Post"
);

entity_id!(
    /// Identifier of a story tile (e.g. "s1").
    StoryId,
    "Story"
);

entity_id!(
    /// Identifier of a suggested group (e.g. "g1").
    GroupId,
    "Group"
);

entity_id!(
    /// Identifier of a chat contact (e.g. "u1").
    ContactId,
    "Contact"
);

// ===== Tests =====
