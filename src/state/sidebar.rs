//! Sidebar and header navigation state.

use crate::model::navigation::{sidebar_sections, SETTINGS_ITEM};
use crate::model::{HeaderNav, NavItem};

/// Default active sidebar path.
pub const DEFAULT_ACTIVE_PATH: &str = "/news-feed";

/// One selectable line of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEntry {
    /// A navigation link.
    Nav(NavItem),
    /// The Explore section's "See More..." / "See Less" toggle.
    ExploreToggle,
}

/// Selectable sidebar lines in display order.
pub fn sidebar_entries(explore_expanded: bool) -> Vec<SidebarEntry> {
    let mut entries = Vec::new();
    for section in sidebar_sections(explore_expanded) {
        entries.extend(section.items.into_iter().map(SidebarEntry::Nav));
        if section.has_expand_toggle {
            entries.push(SidebarEntry::ExploreToggle);
        }
    }
    entries.push(SidebarEntry::Nav(SETTINGS_ITEM));
    entries
}

/// Navigation state of the sidebar and header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    explore_expanded: bool,
    active_path: String,
    active_nav: HeaderNav,
}

impl NavState {
    /// Create navigation state.
    pub fn new(active_path: impl Into<String>, active_nav: HeaderNav, explore_expanded: bool) -> Self {
        Self {
            explore_expanded,
            active_path: active_path.into(),
            active_nav,
        }
    }

    /// Whether the Explore section shows its extra entries.
    pub fn explore_expanded(&self) -> bool {
        self.explore_expanded
    }

    /// Flip the Explore section.
    pub fn toggle_explore(&mut self) {
        self.explore_expanded = !self.explore_expanded;
    }

    /// Highlighted sidebar path.
    pub fn active_path(&self) -> &str {
        &self.active_path
    }

    /// Highlight a different sidebar path.
    pub fn set_active_path(&mut self, path: impl Into<String>) {
        self.active_path = path.into();
    }

    /// Highlighted header link.
    pub fn active_nav(&self) -> HeaderNav {
        self.active_nav
    }

    /// True when `item` is the highlighted sidebar entry.
    pub fn is_active(&self, item: &NavItem) -> bool {
        item.href == self.active_path
    }

    /// Selectable sidebar lines for the current expansion state.
    pub fn entries(&self) -> Vec<SidebarEntry> {
        sidebar_entries(self.explore_expanded)
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVE_PATH, HeaderNav::default(), false)
    }
}
