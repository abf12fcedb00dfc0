//! Left navigation sidebar.

use crate::model::navigation::{explore_toggle_label, sidebar_sections, SETTINGS_ITEM};
use crate::model::UserProfile;
use crate::state::{AppState, FocusPane};
use crate::view::helpers::truncate_to_width;
use crate::view::styles::FeedStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Sidebar widget: the user's profile entry followed by the nav sections.
pub struct Sidebar<'a> {
    state: &'a AppState,
    styles: &'a FeedStyles,
}

impl<'a> Sidebar<'a> {
    /// Create a sidebar over the current state.
    pub fn new(state: &'a AppState, styles: &'a FeedStyles) -> Self {
        Self { state, styles }
    }

    /// Sidebar lines plus the row of the selected entry.
    fn lines(&self, width: usize) -> (Vec<Line<'static>>, usize) {
        let nav = &self.state.nav;
        let focused = self.state.focus == FocusPane::Sidebar;
        let selected = self.state.selection.sidebar;

        let mut lines = vec![user_line(self.state.user(), self.styles, width), Line::default()];
        let mut entry = 0;
        let mut selected_row = 0;

        let mut push_entry = |lines: &mut Vec<Line<'static>>, text: &str, active: bool| {
            let mut style = if active {
                self.styles.active
            } else {
                Style::default()
            };
            if focused && entry == selected {
                style = style.patch(self.styles.selected);
                selected_row = lines.len();
            }
            let marker = if active { "▸ " } else { "  " };
            let text = truncate_to_width(&format!("{marker}{text}"), width);
            lines.push(Line::from(Span::styled(text, style)));
            entry += 1;
        };

        for section in sidebar_sections(nav.explore_expanded()) {
            if let Some(title) = section.title {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    truncate_to_width(title, width),
                    self.styles.heading,
                )));
            }
            for item in &section.items {
                push_entry(&mut lines, item.label, nav.is_active(item));
            }
            if section.has_expand_toggle {
                push_entry(&mut lines, explore_toggle_label(nav.explore_expanded()), false);
            }
        }

        lines.push(Line::default());
        push_entry(&mut lines, SETTINGS_ITEM.label, nav.is_active(&SETTINGS_ITEM));

        (lines, selected_row)
    }
}

fn user_line(user: &UserProfile, styles: &FeedStyles, width: usize) -> Line<'static> {
    let text = truncate_to_width(&format!("{} {}", user.person().initials(), user.name()), width);
    Line::from(Span::styled(text, styles.emphasis))
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.state.focus == FocusPane::Sidebar {
            self.styles.focused_border
        } else {
            self.styles.border
        };
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(border_style);
        let inner = block.inner(area);

        let (lines, selected_row) = self.lines(usize::from(inner.width));

        // The sidebar has no scroll slot; it only shifts to keep the selection visible.
        let height = usize::from(inner.height);
        let offset = if height > 0 && selected_row >= height {
            selected_row + 1 - height
        } else {
            0
        };

        Paragraph::new(lines)
            .block(block)
            .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0))
            .render(area, buf);
    }
}
