//! Acceptance Test Harness for TUI testing
//!
//! Wraps `TuiApp<TestBackend>` with methods that read like user actions:
//! press a key, type some text, look at the screen.

use crate::config::KeyBindings;
use crate::model::SeedData;
use crate::state::{AppState, DEFAULT_NOTICE_CAPACITY};
use crate::view::{ColorConfig, TuiApp, ViewOptions};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Trailing spaces and empty lines are removed to keep snapshots clean.
pub(crate) fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct DashboardHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl DashboardHarness {
    /// Demo dataset on a 120x40 terminal.
    pub fn demo() -> Self {
        Self::demo_with_size(120, 40)
    }

    /// Demo dataset on a terminal of the given size.
    pub fn demo_with_size(width: u16, height: u16) -> Self {
        let seed = SeedData::demo().expect("demo seed is valid");
        Self::with_state(AppState::new(seed, DEFAULT_NOTICE_CAPACITY), width, height)
    }

    /// Any prepared state on a terminal of the given size, without colors.
    pub fn with_state(state: AppState, width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("TestBackend never fails");
        let options = ViewOptions {
            colors: ColorConfig::fixed(false),
            ..ViewOptions::default()
        };
        let app = TuiApp::new_for_test(terminal, state, KeyBindings::default(), options);
        Self { app, running: true }
    }

    /// Send a single key event
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping early if one quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            let mods = if ch.is_uppercase() {
                KeyModifiers::SHIFT
            } else {
                KeyModifiers::NONE
            };
            if self.send_key_with_mods(KeyCode::Char(ch), mods) {
                break;
            }
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Resize the terminal as the event loop would on a resize event.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.terminal_mut().backend_mut().resize(width, height);
        self.app.handle_resize_test(width, height);
    }

    /// Render the current frame to a string
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Symbol of one rendered cell (call after rendering).
    pub fn cell(&self, x: u16, y: u16) -> String {
        self.app.terminal().backend().buffer()[(x, y)]
            .symbol()
            .to_string()
    }
}
