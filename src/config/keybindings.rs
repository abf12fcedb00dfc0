//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. Typed characters inside a text
/// field never reach the bindings; see the view's key handling.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };
        let none = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;
        let shift = KeyModifiers::SHIFT;

        // Selection
        bind(KeyCode::Char('j'), none, KeyAction::SelectNext);
        bind(KeyCode::Char('k'), none, KeyAction::SelectPrev);
        bind(KeyCode::Down, none, KeyAction::SelectNext);
        bind(KeyCode::Up, none, KeyAction::SelectPrev);

        // Scrolling of the focused region
        bind(KeyCode::Char('d'), ctrl, KeyAction::PageDown);
        bind(KeyCode::Char('u'), ctrl, KeyAction::PageUp);
        bind(KeyCode::PageDown, none, KeyAction::PageDown);
        bind(KeyCode::PageUp, none, KeyAction::PageUp);
        bind(KeyCode::Char('g'), none, KeyAction::ScrollToTop);
        bind(KeyCode::Home, none, KeyAction::ScrollToTop);
        bind(KeyCode::Char('G'), shift, KeyAction::ScrollToBottom);
        bind(KeyCode::End, none, KeyAction::ScrollToBottom);

        // Focus switching
        bind(KeyCode::Tab, none, KeyAction::CycleFocus);
        bind(KeyCode::BackTab, shift, KeyAction::CycleFocusBack);
        bind(KeyCode::Char('0'), none, KeyAction::FocusSidebar);
        bind(KeyCode::Char('1'), none, KeyAction::FocusFeed);
        bind(KeyCode::Char('2'), none, KeyAction::FocusStories);
        bind(KeyCode::Char('3'), none, KeyAction::FocusGroups);
        bind(KeyCode::Char('4'), none, KeyAction::FocusContacts);

        // Entity interaction
        bind(KeyCode::Enter, none, KeyAction::Activate);
        bind(KeyCode::Char(' '), none, KeyAction::Activate);
        bind(KeyCode::Char('l'), none, KeyAction::Like);

        // Text input
        bind(KeyCode::Char('i'), none, KeyAction::StartCompose);
        bind(KeyCode::Char('/'), none, KeyAction::StartContactFilter);
        bind(KeyCode::Esc, none, KeyAction::Cancel);

        // Chrome
        bind(KeyCode::Char('e'), none, KeyAction::ToggleExplore);

        // Application controls
        bind(KeyCode::Char('q'), none, KeyAction::Quit);
        bind(KeyCode::Char('c'), ctrl, KeyAction::Quit);

        Self { bindings }
    }
}
