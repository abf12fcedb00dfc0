//! Top header bar above the feed column.

use crate::model::{HeaderNav, HEADER_ACTIONS};
use crate::state::AppState;
use crate::view::helpers::truncate_to_width;
use crate::view::styles::FeedStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Placeholder text of the (inert) global search box.
pub const SEARCH_PLACEHOLDER: &str = "[ Search Facebook ]";

/// Key hints shown when there is no notice.
pub const KEY_HINTS: &str = "Tab focus  Enter open  l like  i post  / search  Esc back  q quit";

/// Header widget: search box, Home / Find Friends links, the signed-in user,
/// the Messenger / Notifications / Help actions, and below them the latest
/// notice.
pub struct Header<'a> {
    state: &'a AppState,
    styles: &'a FeedStyles,
}

impl<'a> Header<'a> {
    /// Create a header over the current state.
    pub fn new(state: &'a AppState, styles: &'a FeedStyles) -> Self {
        Self { state, styles }
    }

    fn nav_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled("f ", self.styles.heading),
            Span::styled(SEARCH_PLACEHOLDER, self.styles.dim),
            Span::raw("  "),
        ];
        for nav in HeaderNav::ALL {
            let style = if nav == self.state.nav.active_nav() {
                self.styles.active
            } else {
                self.styles.dim
            };
            spans.push(Span::styled(nav.label(), style));
            spans.push(Span::raw("  "));
        }
        let user = self.state.user();
        spans.push(Span::styled(
            format!("{} {}", user.person().initials(), user.name()),
            self.styles.emphasis,
        ));
        for action in HEADER_ACTIONS {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(action.label, self.styles.dim));
            if let Some(badge) = action.badge() {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(badge, self.styles.badge));
            }
        }
        Line::from(spans)
    }

    fn notice_line(&self, width: usize) -> Line<'static> {
        match self.state.notices().latest() {
            Some(notice) => Line::from(Span::styled(
                truncate_to_width(notice, width),
                self.styles.notice,
            )),
            None => Line::from(Span::styled(
                truncate_to_width(KEY_HINTS, width),
                self.styles.dim,
            )),
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(self.styles.border);
        let width = usize::from(block.inner(area).width);

        Paragraph::new(vec![self.nav_line(), self.notice_line(width)])
            .block(block)
            .render(area, buf);
    }
}
