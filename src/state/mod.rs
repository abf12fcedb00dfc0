//! Interaction state (pure).
//!
//! The feed controller owns the entity collections; the app state wraps it
//! with focus, selection, text input and scroll state. Nothing here touches
//! the terminal.

pub mod action;
pub mod app_state;
pub mod contact_filter;
pub mod controller;
pub mod draft;
pub mod events;
pub mod notice_board;
pub mod sidebar;
pub mod text_input;

// Re-export for convenience
pub use action::{Action, Outcome};
pub use app_state::{AppState, FocusPane, InputMode, Selection};
pub use contact_filter::filter_contacts;
pub use controller::FeedController;
pub use draft::PostText;
pub use events::{FeedEvent, FeedSnapshot, NullPresenter, Presenter, RecordingPresenter};
pub use notice_board::{NoticeBoard, DEFAULT_NOTICE_CAPACITY, MAX_NOTICE_CAPACITY};
pub use sidebar::{NavState, SidebarEntry};
pub use text_input::TextInput;
