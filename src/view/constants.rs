//! Layout dimension constants for TUI rendering.
//!
//! Region geometry comes from [`crate::layout`]; these are the row-level
//! details inside each region.

/// Terminal size assumed when the backend cannot report one.
pub const FALLBACK_TERMINAL_SIZE: (u16, u16) = (120, 40);

/// Blank rows between two cards in a scrolling column.
pub const CARD_GAP_ROWS: usize = 1;

/// Width of the avatar fallback plus its trailing space (`OL `).
pub const AVATAR_WIDTH: usize = 3;

/// Marker drawn before a story the user has not opened yet.
pub const UNVIEWED_MARKER: &str = "●";

/// Marker drawn before a story the user has already opened.
pub const VIEWED_MARKER: &str = "○";

/// Marker drawn per avatar in a group's avatar stack.
pub const GROUP_AVATAR_MARKER: &str = "◉";

/// Appended to text cut at the region edge.
pub const ELLIPSIS: &str = "…";
