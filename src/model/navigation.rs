//! Static navigation menus for the sidebar and header.
//!
//! Targets are opaque paths; resolving them is the router's job, not ours.

/// One clickable navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Visible label.
    pub label: &'static str,
    /// Navigation target.
    pub href: &'static str,
}

const fn item(label: &'static str, href: &'static str) -> NavItem {
    NavItem { label, href }
}

const MAIN_ITEMS: &[NavItem] = &[
    item("News Feed", "/news-feed"),
    item("Messenger", "/messenger"),
    item("Watch", "/watch"),
    item("Marketplace", "/marketplace"),
];

const SHORTCUT_ITEMS: &[NavItem] = &[item("FarmVille 2", "/games/farmville2")];

const EXPLORE_ITEMS: &[NavItem] = &[
    item("Events", "/events"),
    item("Pages", "/pages"),
    item("Groups", "/groups"),
    item("Friend Lists", "/friends/lists"),
    item("Fundraisers", "/fundraisers"),
];

const EXPLORE_EXTRA_ITEMS: &[NavItem] = &[
    item("Memories", "/memories"),
    item("Saved", "/saved"),
    item("Weather", "/weather"),
    item("Ads Manager", "/ads/manager"),
    item("Blood Donations", "/blood-donations"),
];

const CREATE_ITEMS: &[NavItem] = &[
    item("Ad", "/create/ad"),
    item("Page", "/create/page"),
    item("Group", "/create/group"),
    item("Event", "/create/event"),
    item("Fundraiser", "/create/fundraiser"),
];

/// Settings entry pinned to the bottom of the sidebar.
pub const SETTINGS_ITEM: NavItem = item("Settings", "/settings");

/// A titled group of sidebar entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    /// Section heading; `None` for the untitled main section.
    pub title: Option<&'static str>,
    /// Entries in display order.
    pub items: Vec<NavItem>,
    /// Whether this section ends with the explore expand/collapse toggle.
    pub has_expand_toggle: bool,
}

/// Sidebar sections as rendered, given the explore expansion state.
///
/// The Explore section shows its extra entries only when expanded.
pub fn sidebar_sections(explore_expanded: bool) -> Vec<NavSection> {
    let mut explore = EXPLORE_ITEMS.to_vec();
    if explore_expanded {
        explore.extend_from_slice(EXPLORE_EXTRA_ITEMS);
    }

    vec![
        NavSection {
            title: None,
            items: MAIN_ITEMS.to_vec(),
            has_expand_toggle: false,
        },
        NavSection {
            title: Some("Shortcuts"),
            items: SHORTCUT_ITEMS.to_vec(),
            has_expand_toggle: false,
        },
        NavSection {
            title: Some("Explore"),
            items: explore,
            has_expand_toggle: true,
        },
        NavSection {
            title: Some("Create"),
            items: CREATE_ITEMS.to_vec(),
            has_expand_toggle: false,
        },
    ]
}

/// Label of the explore toggle for the given state.
pub fn explore_toggle_label(explore_expanded: bool) -> &'static str {
    if explore_expanded {
        "See Less"
    } else {
        "See More..."
    }
}

/// Centre links of the top header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderNav {
    /// Home feed.
    #[default]
    Home,
    /// Friend finder.
    Friends,
}

impl HeaderNav {
    /// All header links in display order.
    pub const ALL: [HeaderNav; 2] = [HeaderNav::Home, HeaderNav::Friends];

    /// Visible label.
    pub fn label(self) -> &'static str {
        match self {
            HeaderNav::Home => "Home",
            HeaderNav::Friends => "Find Friends",
        }
    }

    /// Navigation target.
    pub fn href(self) -> &'static str {
        match self {
            HeaderNav::Home => "/",
            HeaderNav::Friends => "/friends",
        }
    }

    /// Parse a config value (`"home"` or `"friends"`), case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "home" => Some(HeaderNav::Home),
            "friends" => Some(HeaderNav::Friends),
            _ => None,
        }
    }
}

/// Icon link on the right of the header, with an optional count badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderAction {
    /// Visible label.
    pub label: &'static str,
    /// Navigation target.
    pub href: &'static str,
    /// Pending count; `None` for links that never carry a badge.
    pub badge_count: Option<u32>,
}

/// Header actions in display order.
pub const HEADER_ACTIONS: [HeaderAction; 3] = [
    HeaderAction {
        label: "Messenger",
        href: "/messages",
        badge_count: Some(8),
    },
    HeaderAction {
        label: "Notifications",
        href: "/notifications",
        badge_count: Some(36),
    },
    HeaderAction {
        label: "Help",
        href: "/help",
        badge_count: None,
    },
];

/// Largest count shown verbatim on a badge.
pub const MAX_BADGE_COUNT: u32 = 99;

impl HeaderAction {
    /// Badge text for this action, if it has one to show.
    pub fn badge(&self) -> Option<String> {
        self.badge_count.and_then(badge_label)
    }
}

/// Badge text for a count: hidden at zero, `99+` past [`MAX_BADGE_COUNT`].
pub fn badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        n if n > MAX_BADGE_COUNT => Some(format!("{MAX_BADGE_COUNT}+")),
        n => Some(n.to_string()),
    }
}
