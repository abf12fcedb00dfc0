//! Dashboard frame rendering.
//!
//! Regions are painted lowest stacking level first, each over a cleared
//! area, so that wherever two regions overlap the higher one wins.

use crate::layout::{DashboardLayout, Region, ScrollSlot};
use crate::state::AppState;
use crate::view::header::Header;
use crate::view::helpers::{region_area, ColumnContent};
use crate::view::sidebar::Sidebar;
use crate::view::styles::FeedStyles;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Content of the two scrolling columns, built before the frame is drawn.
pub struct Columns {
    /// Composer and posts.
    pub main: ColumnContent,
    /// Stories, groups and contacts.
    pub rail: ColumnContent,
}

/// Cell area of the rail's text (inside its left border). The main column
/// has no border.
pub fn rail_inner(area: Rect) -> Rect {
    rail_block(false, &FeedStyles::default()).inner(area)
}

fn rail_block(focused: bool, styles: &FeedStyles) -> Block<'static> {
    Block::default().borders(Borders::LEFT).border_style(if focused {
        styles.focused_border
    } else {
        styles.border
    })
}

/// Render every region of `cells` into the frame.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    cells: &DashboardLayout,
    columns: &Columns,
    styles: &FeedStyles,
) {
    let frame_area = frame.area();

    for (region, rect) in cells.paint_order() {
        let area = region_area(rect, frame_area);
        if area.is_empty() {
            continue;
        }
        frame.render_widget(Clear, area);

        match region {
            Region::Main => render_column(
                frame,
                area,
                &columns.main,
                state.scroll.offset(ScrollSlot::Main),
                None,
            ),
            Region::Header => frame.render_widget(Header::new(state, styles), area),
            Region::Rail => render_column(
                frame,
                area,
                &columns.rail,
                state.scroll.offset(ScrollSlot::Rail),
                Some(rail_block(state.focus.region() == Region::Rail, styles)),
            ),
            Region::Sidebar => frame.render_widget(Sidebar::new(state, styles), area),
        }
    }
}

fn render_column(
    frame: &mut Frame,
    area: Rect,
    column: &ColumnContent,
    offset: usize,
    block: Option<Block<'static>>,
) {
    let mut paragraph = Paragraph::new(column.lines().to_vec())
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
    if let Some(block) = block {
        paragraph = paragraph.block(block);
    }
    frame.render_widget(paragraph, area);
}
