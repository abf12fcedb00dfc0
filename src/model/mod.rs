//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod contact;
pub mod error;
pub mod group;
pub mod identifiers;
pub mod key_action;
pub mod navigation;
pub mod person;
pub mod post;
pub mod seed;
pub mod story;

// Re-export for convenience
pub use contact::ChatContact;
pub use error::AppError;
pub use group::{AvatarStack, Group, MAX_VISIBLE_GROUP_AVATARS};
pub use identifiers::{ContactId, GroupId, InvalidEntityId, PostId, StoryId};
pub use key_action::KeyAction;
pub use navigation::{HeaderAction, HeaderNav, NavItem, NavSection, HEADER_ACTIONS};
pub use person::{Person, UserProfile};
pub use post::{MapAttachment, Post, PostStats};
pub use seed::SeedData;
pub use story::Story;
