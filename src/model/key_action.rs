//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Selection within the focused widget
    /// Select the next item of the focused widget. Default: j/↓
    SelectNext,
    /// Select the previous item of the focused widget. Default: k/↑
    SelectPrev,

    // Scrolling of the focused region (Main or Rail)
    /// Scroll the focused region down by half a page. Default: Ctrl+d/Page Down
    PageDown,
    /// Scroll the focused region up by half a page. Default: Ctrl+u/Page Up
    PageUp,
    /// Jump to the top of the focused region. Default: g/Home
    ScrollToTop,
    /// Jump to the bottom of the focused region. Default: G/End
    ScrollToBottom,

    // Focus navigation
    /// Move focus to the next widget: Sidebar → Composer → Feed → Stories → Groups → Contacts. Default: Tab
    CycleFocus,
    /// Move focus to the previous widget. Default: Shift+Tab
    CycleFocusBack,
    /// Focus the sidebar navigation. Default: 0
    FocusSidebar,
    /// Focus the news feed. Default: 1
    FocusFeed,
    /// Focus the stories widget. Default: 2
    FocusStories,
    /// Focus the suggested groups widget. Default: 3
    FocusGroups,
    /// Focus the chat contacts widget. Default: 4
    FocusContacts,

    // Entity interaction
    /// Activate the selected item (like, view, join, open chat, edit draft). Default: Enter
    Activate,
    /// Like the selected post regardless of focus. Default: l
    Like,

    // Text input
    /// Start editing the post draft. Default: i
    StartCompose,
    /// Start editing the contact filter. Default: /
    StartContactFilter,
    /// Leave text input, or clear the contact filter when not typing. Default: Esc
    Cancel,

    // Chrome
    /// Expand or collapse the sidebar's Explore section. Default: e
    ToggleExplore,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
