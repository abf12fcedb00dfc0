//! Text measuring and column building shared by the region widgets.

use crate::layout::RegionRect;
use crate::state::{FocusPane, TextInput};
use crate::view::constants::ELLIPSIS;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
};
use std::ops::Range;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max_width` terminal columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - ELLIPSIS.width();
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(ELLIPSIS);
    out
}

/// Greedy word wrap to `width` columns.
///
/// Words wider than a whole line are hard-split. Always returns at least one
/// line, so an empty text still takes one row.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
        } else {
            for ch in word.chars() {
                let w = ch.width().unwrap_or(0);
                if current_width + w > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += w;
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Spans for an input field: text before the cursor, the cursor cell, the rest.
pub fn input_spans(input: &TextInput, text_style: Style, cursor_style: Style) -> Vec<Span<'static>> {
    let before: String = input.text().chars().take(input.cursor()).collect();
    let mut rest = input.text().chars().skip(input.cursor());
    let under_cursor = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
    let after: String = rest.collect();

    vec![
        Span::styled(before, text_style),
        Span::styled(under_cursor, cursor_style),
        Span::styled(after, text_style),
    ]
}

/// Cell rectangle of a layout region, clipped to the frame.
pub fn region_area(rect: RegionRect, frame_area: Rect) -> Rect {
    let clamp = |v: u32| u16::try_from(v).unwrap_or(u16::MAX);
    Rect::new(clamp(rect.x), clamp(rect.y), clamp(rect.width), clamp(rect.height))
        .intersection(frame_area)
}

// ===== ColumnContent =====

/// Lines of a scrolling column plus the rows each selectable item occupies.
#[derive(Debug, Default)]
pub struct ColumnContent {
    lines: Vec<Line<'static>>,
    anchors: Vec<(FocusPane, usize, Range<usize>)>,
}

impl ColumnContent {
    /// Empty column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append lines that belong to no selectable item.
    pub fn push_lines(&mut self, lines: impl IntoIterator<Item = Line<'static>>) {
        self.lines.extend(lines);
    }

    /// Append one blank row.
    pub fn push_blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Append the lines of item `index` of `pane`.
    ///
    /// When `highlight` is set every line of the item gets `style` patched in.
    pub fn push_item(
        &mut self,
        pane: FocusPane,
        index: usize,
        lines: Vec<Line<'static>>,
        highlight: Option<Style>,
    ) {
        let start = self.lines.len();
        match highlight {
            Some(style) => self
                .lines
                .extend(lines.into_iter().map(|line| line.patch_style(style))),
            None => self.lines.extend(lines),
        }
        self.anchors.push((pane, index, start..self.lines.len()));
    }

    /// Rows occupied by item `index` of `pane`.
    pub fn anchor(&self, pane: FocusPane, index: usize) -> Option<Range<usize>> {
        self.anchors
            .iter()
            .find(|(p, i, _)| *p == pane && *i == index)
            .map(|(_, _, rows)| rows.clone())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Rendered lines.
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Consume into the rendered lines.
    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.lines
    }
}
