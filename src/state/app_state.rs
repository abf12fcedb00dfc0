//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. The feed data
//! itself is owned by the [`FeedController`]; everything else here is
//! selection, focus, text input and scrolling, all changed by plain methods
//! that can be tested without a terminal.

use crate::collections::Collections;
use crate::layout::{Region, ScrollSlot, ScrollSlots};
use crate::model::{SeedData, UserProfile};
use crate::state::action::{Action, Outcome};
use crate::state::controller::FeedController;
use crate::state::notice_board::NoticeBoard;
use crate::state::sidebar::{NavState, SidebarEntry};
use crate::state::text_input::TextInput;
use tracing::debug;

// ===== FocusPane =====

/// Which widget has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Sidebar navigation.
    Sidebar,
    /// Post composer at the top of the feed.
    Composer,
    /// News feed posts.
    #[default]
    Feed,
    /// Stories widget in the rail.
    Stories,
    /// Suggested groups in the rail.
    Groups,
    /// Chat contacts in the rail.
    Contacts,
}

impl FocusPane {
    /// Focus cycle order.
    pub const CYCLE: [FocusPane; 6] = [
        FocusPane::Sidebar,
        FocusPane::Composer,
        FocusPane::Feed,
        FocusPane::Stories,
        FocusPane::Groups,
        FocusPane::Contacts,
    ];

    /// The region that contains this widget.
    pub fn region(self) -> Region {
        match self {
            FocusPane::Sidebar => Region::Sidebar,
            FocusPane::Composer | FocusPane::Feed => Region::Main,
            FocusPane::Stories | FocusPane::Groups | FocusPane::Contacts => Region::Rail,
        }
    }

    fn step(self, forward: bool) -> FocusPane {
        let len = Self::CYCLE.len();
        let idx = Self::CYCLE.iter().position(|p| *p == self).unwrap_or(0);
        let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
        Self::CYCLE[next]
    }
}

// ===== InputMode =====

/// What text field, if any, is receiving typed characters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are interpreted through the key bindings.
    #[default]
    Normal,
    /// Typing into the post composer.
    EditingDraft(TextInput),
    /// Typing into the chat search box.
    EditingFilter(TextInput),
}

impl InputMode {
    /// True while a text field is being edited.
    pub fn is_editing(&self) -> bool {
        !matches!(self, InputMode::Normal)
    }
}

// ===== Selection =====

/// Selected row of every list widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Index into the sidebar entries.
    pub sidebar: usize,
    /// Index into the posts.
    pub feed: usize,
    /// Index into the stories.
    pub story: usize,
    /// Index into the groups.
    pub group: usize,
    /// Index into the visible (filtered) contacts.
    pub contact: usize,
}

// ===== AppState =====

/// Root UI state.
#[derive(Debug)]
pub struct AppState {
    user: UserProfile,
    controller: FeedController<NoticeBoard>,

    /// Sidebar and header navigation.
    pub nav: NavState,

    /// Focused widget.
    pub focus: FocusPane,

    /// Current text input target.
    pub input_mode: InputMode,

    /// Selected row per widget.
    pub selection: Selection,

    /// Independent scroll offsets of the main column and the rail.
    pub scroll: ScrollSlots,

    /// Set when the selection moved and the view should scroll it into sight.
    pub follow_selection: bool,
}

impl AppState {
    /// Seed a session.
    pub fn new(seed: SeedData, notice_capacity: usize) -> Self {
        let user = seed.user.clone();
        let collections = Collections::from_seed(seed);
        Self {
            user,
            controller: FeedController::new(collections, NoticeBoard::new(notice_capacity)),
            nav: NavState::default(),
            focus: FocusPane::default(),
            input_mode: InputMode::Normal,
            selection: Selection::default(),
            scroll: ScrollSlots::new(),
            follow_selection: false,
        }
    }

    /// Signed-in user.
    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    /// The feed controller.
    pub fn controller(&self) -> &FeedController<NoticeBoard> {
        &self.controller
    }

    /// Notices pushed by the controller.
    pub fn notices(&self) -> &NoticeBoard {
        self.controller.presenter()
    }

    /// Apply a feed action, keeping selections valid afterwards.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let outcome = self.controller.dispatch(action);
        self.clamp_selection();
        outcome
    }

    // ===== Focus =====

    /// Focus a specific widget.
    pub fn focus_on(&mut self, pane: FocusPane) {
        self.focus = pane;
        self.follow_selection = true;
    }

    /// Move focus forward through [`FocusPane::CYCLE`].
    pub fn cycle_focus(&mut self) {
        self.focus_on(self.focus.step(true));
    }

    /// Move focus backward through [`FocusPane::CYCLE`].
    pub fn cycle_focus_back(&mut self) {
        self.focus_on(self.focus.step(false));
    }

    /// Scroll slot of the focused widget; `None` for the sidebar.
    pub fn focused_slot(&self) -> Option<ScrollSlot> {
        self.focus.region().scroll_slot()
    }

    // ===== Selection =====

    /// Number of rows in the focused widget.
    pub fn focused_len(&self) -> usize {
        match self.focus {
            FocusPane::Sidebar => self.nav.entries().len(),
            FocusPane::Composer => 1,
            FocusPane::Feed => self.controller.posts().len(),
            FocusPane::Stories => self.controller.stories().len(),
            FocusPane::Groups => self.controller.groups().len(),
            FocusPane::Contacts => self.controller.visible_contacts().len(),
        }
    }

    /// Selected row of the focused widget.
    pub fn focused_index(&self) -> usize {
        match self.focus {
            FocusPane::Sidebar => self.selection.sidebar,
            FocusPane::Composer => 0,
            FocusPane::Feed => self.selection.feed,
            FocusPane::Stories => self.selection.story,
            FocusPane::Groups => self.selection.group,
            FocusPane::Contacts => self.selection.contact,
        }
    }

    /// Select row `index` of the focused widget, clamped to its length.
    pub fn select(&mut self, index: usize) {
        let index = index.min(self.focused_len().saturating_sub(1));
        match self.focus {
            FocusPane::Sidebar => self.selection.sidebar = index,
            FocusPane::Composer => {}
            FocusPane::Feed => self.selection.feed = index,
            FocusPane::Stories => self.selection.story = index,
            FocusPane::Groups => self.selection.group = index,
            FocusPane::Contacts => self.selection.contact = index,
        }
        self.follow_selection = true;
    }

    /// Select the next row, stopping at the last one.
    pub fn select_next(&mut self) {
        self.select(self.focused_index().saturating_add(1));
    }

    /// Select the previous row, stopping at the first one.
    pub fn select_prev(&mut self) {
        self.select(self.focused_index().saturating_sub(1));
    }

    fn clamp_selection(&mut self) {
        let clamp = |i: usize, len: usize| i.min(len.saturating_sub(1));
        self.selection.sidebar = clamp(self.selection.sidebar, self.nav.entries().len());
        self.selection.feed = clamp(self.selection.feed, self.controller.posts().len());
        self.selection.story = clamp(self.selection.story, self.controller.stories().len());
        self.selection.group = clamp(self.selection.group, self.controller.groups().len());
        self.selection.contact = clamp(
            self.selection.contact,
            self.controller.visible_contacts().len(),
        );
    }

    // ===== Activation =====

    /// Like the selected post.
    pub fn like_selected(&mut self) -> Outcome {
        match self.controller.posts().get(self.selection.feed) {
            Some(post) => {
                let id = post.id().clone();
                self.dispatch(Action::Like(id))
            }
            None => Outcome::Ignored,
        }
    }

    /// Activate the selected row of the focused widget.
    ///
    /// Sidebar links become the active path, the Explore toggle flips, the
    /// composer opens for editing, posts are liked, stories viewed, groups
    /// joined and chats opened.
    pub fn activate(&mut self) -> Outcome {
        match self.focus {
            FocusPane::Sidebar => {
                match self.nav.entries().get(self.selection.sidebar).copied() {
                    Some(SidebarEntry::Nav(item)) => self.nav.set_active_path(item.href),
                    Some(SidebarEntry::ExploreToggle) => self.toggle_explore(),
                    None => return Outcome::Ignored,
                }
                Outcome::Applied
            }
            FocusPane::Composer => {
                self.start_compose();
                Outcome::Applied
            }
            FocusPane::Feed => self.like_selected(),
            FocusPane::Stories => match self.controller.stories().get(self.selection.story) {
                Some(story) => {
                    let id = story.id().clone();
                    self.dispatch(Action::ViewStory(id))
                }
                None => Outcome::Ignored,
            },
            FocusPane::Groups => match self.controller.groups().get(self.selection.group) {
                Some(group) => {
                    let id = group.id().clone();
                    self.dispatch(Action::JoinGroup(id))
                }
                None => Outcome::Ignored,
            },
            FocusPane::Contacts => {
                match self.controller.visible_contacts().get(self.selection.contact) {
                    Some(contact) => {
                        let id = contact.id().clone();
                        self.dispatch(Action::OpenContact(id))
                    }
                    None => Outcome::Ignored,
                }
            }
        }
    }

    /// Expand or collapse the sidebar's Explore section.
    pub fn toggle_explore(&mut self) {
        self.nav.toggle_explore();
        self.clamp_selection();
    }

    // ===== Text input =====

    /// Start typing into the composer, continuing the current draft.
    pub fn start_compose(&mut self) {
        self.focus = FocusPane::Composer;
        self.input_mode = InputMode::EditingDraft(TextInput::with_text(self.controller.draft()));
        self.follow_selection = true;
    }

    /// Start typing into the chat search box, continuing the current filter.
    pub fn start_contact_filter(&mut self) {
        self.focus = FocusPane::Contacts;
        self.input_mode =
            InputMode::EditingFilter(TextInput::with_text(self.controller.contact_filter()));
        self.follow_selection = true;
    }

    /// Apply an edit to the active text field and forward the new text.
    ///
    /// No-op outside text input.
    pub fn edit_input(&mut self, edit: impl FnOnce(TextInput) -> TextInput) {
        match std::mem::take(&mut self.input_mode) {
            InputMode::Normal => {}
            InputMode::EditingDraft(input) => {
                let input = edit(input);
                let changed = input.text() != self.controller.draft();
                let text = input.text().to_string();
                self.input_mode = InputMode::EditingDraft(input);
                if changed {
                    self.dispatch(Action::ComposeDraft(text));
                }
            }
            InputMode::EditingFilter(input) => {
                let input = edit(input);
                let changed = input.text() != self.controller.contact_filter();
                let text = input.text().to_string();
                self.input_mode = InputMode::EditingFilter(input);
                if changed {
                    self.dispatch(Action::SetContactFilter(text));
                    self.selection.contact = 0;
                }
            }
        }
    }

    /// Confirm the active text field.
    ///
    /// The composer submits its draft and closes only when the submission
    /// was accepted; the chat search box simply closes, keeping its filter.
    pub fn submit_input(&mut self) -> Outcome {
        match self.input_mode {
            InputMode::Normal => Outcome::Ignored,
            InputMode::EditingDraft(_) => {
                let outcome = self.dispatch(Action::SubmitDraft);
                if outcome.changed_state() {
                    self.input_mode = InputMode::Normal;
                }
                outcome
            }
            InputMode::EditingFilter(_) => {
                self.input_mode = InputMode::Normal;
                Outcome::Applied
            }
        }
    }

    /// Leave text input (keeping the text), or outside text input clear
    /// the contact filter and then the latest notice.
    pub fn cancel(&mut self) {
        if self.input_mode.is_editing() {
            self.input_mode = InputMode::Normal;
            return;
        }
        if !self.controller.contact_filter().is_empty() {
            self.dispatch(Action::SetContactFilter(String::new()));
            return;
        }
        debug!("Dismissing latest notice");
        self.controller.presenter_mut().dismiss();
    }

    // ===== Scrolling =====

    /// Scroll the focused region by `delta` rows. The sidebar does not scroll.
    pub fn scroll_focused(&mut self, delta: isize) {
        if let Some(slot) = self.focused_slot() {
            self.scroll.scroll_by(slot, delta);
            self.follow_selection = false;
        }
    }

    /// Select the first row and scroll the focused region to its top.
    pub fn jump_to_top(&mut self) {
        self.select(0);
        if let Some(slot) = self.focused_slot() {
            self.scroll.scroll_to(slot, 0);
        }
    }

    /// Select the last row and scroll the focused region to its end.
    ///
    /// The offset is clamped to the content height at render time.
    pub fn jump_to_bottom(&mut self) {
        self.select(usize::MAX);
        if let Some(slot) = self.focused_slot() {
            self.scroll.scroll_to(slot, usize::MAX);
        }
        self.follow_selection = false;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
