//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod feed;
pub mod header;
pub mod helpers;
mod layout;
pub mod rail;
pub mod sidebar;
mod styles;

pub use layout::{render_layout, Columns};
pub use styles::{ColorConfig, FeedStyles};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::layout::{CellSize, DashboardLayout, LayoutConstants, Region, ScrollSlot};
use crate::model::KeyAction;
use crate::state::{text_input, AppState, FocusPane};
use crate::view::constants::FALLBACK_TERMINAL_SIZE;
use crate::view::feed::feed_column;
use crate::view::helpers::region_area;
use crate::view::layout::rail_inner;
use crate::view::rail::rail_column;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Rendering options resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Region dimensions in pixels.
    pub layout: LayoutConstants,
    /// Pixel size of one terminal cell.
    pub cell_size: CellSize,
    /// Whether to draw with colors.
    pub colors: ColorConfig,
}

impl ViewOptions {
    /// Options from the resolved configuration.
    pub fn from_config(config: &ResolvedConfig, no_color: bool) -> Self {
        Self {
            layout: config.layout,
            cell_size: config.cell_size,
            colors: ColorConfig::from_env_and_args(no_color),
        }
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            layout: LayoutConstants::default(),
            cell_size: CellSize::default(),
            colors: ColorConfig::from_env_and_args(false),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    options: ViewOptions,
    styles: FeedStyles,
    /// Region geometry in cells for the current terminal size.
    cells: DashboardLayout,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, options: ViewOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            app_state,
            KeyBindings::default(),
            options,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws only after input or
    /// a resize; there is nothing to animate while idle.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        info!("Quit requested");
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    self.handle_resize(width, height);
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        options: ViewOptions,
    ) -> Self {
        let (width, height) = match terminal.size() {
            Ok(size) if size.width > 0 && size.height > 0 => (size.width, size.height),
            _ => FALLBACK_TERMINAL_SIZE,
        };
        let cells = cell_layout(&options, width, height);

        Self {
            terminal,
            app_state,
            key_bindings,
            styles: FeedStyles::with_color_config(options.colors),
            options,
            cells,
        }
    }

    /// Current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // An open text field takes every other key
        if self.app_state.input_mode.is_editing() {
            self.handle_text_key(key);
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "Key action");

        let page = self.page_rows();
        let state = &mut self.app_state;
        match action {
            KeyAction::Quit => return true,

            KeyAction::SelectNext => state.select_next(),
            KeyAction::SelectPrev => state.select_prev(),

            KeyAction::PageDown => state.scroll_focused(page),
            KeyAction::PageUp => state.scroll_focused(-page),
            KeyAction::ScrollToTop => state.jump_to_top(),
            KeyAction::ScrollToBottom => state.jump_to_bottom(),

            KeyAction::CycleFocus => state.cycle_focus(),
            KeyAction::CycleFocusBack => state.cycle_focus_back(),
            KeyAction::FocusSidebar => state.focus_on(FocusPane::Sidebar),
            KeyAction::FocusFeed => state.focus_on(FocusPane::Feed),
            KeyAction::FocusStories => state.focus_on(FocusPane::Stories),
            KeyAction::FocusGroups => state.focus_on(FocusPane::Groups),
            KeyAction::FocusContacts => state.focus_on(FocusPane::Contacts),

            KeyAction::Activate => {
                state.activate();
            }
            KeyAction::Like => {
                state.like_selected();
            }

            KeyAction::StartCompose => state.start_compose(),
            KeyAction::StartContactFilter => state.start_contact_filter(),
            KeyAction::Cancel => state.cancel(),

            KeyAction::ToggleExplore => state.toggle_explore(),
        }

        false
    }

    /// Keys while a text field is open: editing, Enter to confirm, Esc to leave.
    fn handle_text_key(&mut self, key: KeyEvent) {
        let state = &mut self.app_state;
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.edit_input(|input| text_input::insert_char(input, ch));
            }
            KeyCode::Backspace => state.edit_input(text_input::backspace),
            KeyCode::Delete => state.edit_input(text_input::delete),
            KeyCode::Left => state.edit_input(text_input::cursor_left),
            KeyCode::Right => state.edit_input(text_input::cursor_right),
            KeyCode::Home => state.edit_input(text_input::cursor_home),
            KeyCode::End => state.edit_input(text_input::cursor_end),
            KeyCode::Enter => {
                state.submit_input();
            }
            KeyCode::Esc => state.cancel(),
            _ => {}
        }
    }

    /// Recompute region geometry for a new terminal size.
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "Terminal resized");
        self.cells = cell_layout(&self.options, width, height);
        self.app_state.follow_selection = true;
    }

    /// Half the visible rows of the focused region, at least one.
    fn page_rows(&self) -> isize {
        let rows = match self.app_state.focused_slot() {
            Some(ScrollSlot::Main) => self.cells.region(Region::Main).height,
            Some(ScrollSlot::Rail) => self.cells.region(Region::Rail).height,
            None => 0,
        };
        isize::try_from(rows / 2).unwrap_or(isize::MAX).max(1)
    }

    fn frame_area(&self) -> Rect {
        let (width, height) = self.cells.viewport();
        Rect::new(
            0,
            0,
            u16::try_from(width).unwrap_or(u16::MAX),
            u16::try_from(height).unwrap_or(u16::MAX),
        )
    }

    /// Render one frame.
    ///
    /// Both columns are laid out first so that scroll offsets can be
    /// clamped to their content and the selection brought into view.
    fn draw(&mut self) -> Result<(), TuiError> {
        let frame_area = self.frame_area();
        let main_area = region_area(self.cells.region(Region::Main), frame_area);
        let rail_area = rail_inner(region_area(self.cells.region(Region::Rail), frame_area));

        let columns = Columns {
            main: feed_column(&self.app_state, &self.styles, usize::from(main_area.width)),
            rail: rail_column(&self.app_state, &self.styles, usize::from(rail_area.width)),
        };
        self.sync_scroll(
            &columns,
            usize::from(main_area.height),
            usize::from(rail_area.height),
        );

        let state = &self.app_state;
        let cells = &self.cells;
        let styles = &self.styles;
        self.terminal
            .draw(|frame| render_layout(frame, state, cells, &columns, styles))?;

        Ok(())
    }

    fn sync_scroll(&mut self, columns: &Columns, main_rows: usize, rail_rows: usize) {
        let state = &mut self.app_state;

        if std::mem::take(&mut state.follow_selection) {
            if let Some(slot) = state.focused_slot() {
                let (column, rows) = match slot {
                    ScrollSlot::Main => (&columns.main, main_rows),
                    ScrollSlot::Rail => (&columns.rail, rail_rows),
                };
                if let Some(span) = column.anchor(state.focus, state.focused_index()) {
                    state.scroll.ensure_visible(slot, span.start, span.end, rows);
                }
            }
        }

        state
            .scroll
            .clamp(ScrollSlot::Main, columns.main.len(), main_rows);
        state
            .scroll
            .clamp(ScrollSlot::Rail, columns.rail.len(), rail_rows);
    }

    // ===== Test-only accessors =====

    /// Create a TuiApp over any backend (test-only constructor)
    #[cfg(test)]
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        options: ViewOptions,
    ) -> Self {
        Self::with_terminal(terminal, app_state, key_bindings, options)
    }

    /// Handle a single key event (test-only accessor)
    #[cfg(test)]
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Handle a resize event (test-only accessor)
    #[cfg(test)]
    pub(crate) fn handle_resize_test(&mut self, width: u16, height: u16) {
        self.handle_resize(width, height)
    }

    /// Render one frame (test-only accessor)
    #[cfg(test)]
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    #[cfg(test)]
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Get mutable reference to terminal (test-only accessor)
    #[cfg(test)]
    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

/// Pixel layout for a `width` x `height` cell terminal, converted to cells.
fn cell_layout(options: &ViewOptions, width: u16, height: u16) -> DashboardLayout {
    let cell = options.cell_size;
    options
        .layout
        .compute(
            u32::from(width) * cell.width.max(1),
            u32::from(height) * cell.height.max(1),
        )
        .to_cells(cell)
}

/// Take over the terminal, run the dashboard until quit, and restore the
/// terminal even when the loop fails.
pub fn run_with_state(app_state: AppState, options: ViewOptions) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, options)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_app_tests.rs"]
mod tests;
