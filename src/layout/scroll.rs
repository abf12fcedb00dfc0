//! Independent scroll offsets for the main column and the rail.

/// A region that scrolls on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollSlot {
    /// The feed column.
    Main,
    /// The utility rail.
    Rail,
}

/// Scroll offsets (in rows) for both scrollable regions.
///
/// Each slot is changed only through its own key; the sidebar and header
/// have no slot and never scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollSlots {
    main: usize,
    rail: usize,
}

impl ScrollSlots {
    /// Both slots at the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offset of `slot`.
    pub fn offset(&self, slot: ScrollSlot) -> usize {
        match slot {
            ScrollSlot::Main => self.main,
            ScrollSlot::Rail => self.rail,
        }
    }

    fn offset_mut(&mut self, slot: ScrollSlot) -> &mut usize {
        match slot {
            ScrollSlot::Main => &mut self.main,
            ScrollSlot::Rail => &mut self.rail,
        }
    }

    /// Move `slot` by `delta` rows, saturating at zero.
    pub fn scroll_by(&mut self, slot: ScrollSlot, delta: isize) {
        let offset = self.offset_mut(slot);
        *offset = if delta.is_negative() {
            offset.saturating_sub(delta.unsigned_abs())
        } else {
            offset.saturating_add(delta.unsigned_abs())
        };
    }

    /// Jump `slot` to `offset`.
    pub fn scroll_to(&mut self, slot: ScrollSlot, offset: usize) {
        *self.offset_mut(slot) = offset;
    }

    /// Clamp `slot` so that a viewport of `viewport_rows` never runs past
    /// `content_rows`.
    pub fn clamp(&mut self, slot: ScrollSlot, content_rows: usize, viewport_rows: usize) {
        let max = content_rows.saturating_sub(viewport_rows);
        let offset = self.offset_mut(slot);
        *offset = (*offset).min(max);
    }

    /// Scroll `slot` the minimum amount needed to show rows `top..bottom`.
    ///
    /// When the span is taller than the viewport its top row wins.
    pub fn ensure_visible(&mut self, slot: ScrollSlot, top: usize, bottom: usize, viewport_rows: usize) {
        let offset = self.offset_mut(slot);
        if viewport_rows == 0 {
            return;
        }
        if top < *offset {
            *offset = top;
        } else if bottom > *offset + viewport_rows {
            *offset = bottom.saturating_sub(viewport_rows).min(top);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_start_at_top() {
        let slots = ScrollSlots::new();
        assert_eq!(slots.offset(ScrollSlot::Main), 0);
        assert_eq!(slots.offset(ScrollSlot::Rail), 0);
    }

    #[test]
    fn scrolling_main_leaves_rail_alone() {
        let mut slots = ScrollSlots::new();
        slots.scroll_by(ScrollSlot::Main, 12);
        assert_eq!(slots.offset(ScrollSlot::Main), 12);
        assert_eq!(slots.offset(ScrollSlot::Rail), 0);
    }

    #[test]
    fn scrolling_rail_leaves_main_alone() {
        let mut slots = ScrollSlots::new();
        slots.scroll_to(ScrollSlot::Main, 5);
        slots.scroll_by(ScrollSlot::Rail, 3);
        slots.scroll_by(ScrollSlot::Rail, -1);
        assert_eq!(slots.offset(ScrollSlot::Main), 5);
        assert_eq!(slots.offset(ScrollSlot::Rail), 2);
    }

    #[test]
    fn scroll_up_saturates_at_zero() {
        let mut slots = ScrollSlots::new();
        slots.scroll_by(ScrollSlot::Main, -10);
        assert_eq!(slots.offset(ScrollSlot::Main), 0);
    }

    #[test]
    fn clamp_limits_to_last_page() {
        let mut slots = ScrollSlots::new();
        slots.scroll_to(ScrollSlot::Rail, 100);
        slots.clamp(ScrollSlot::Rail, 40, 10);
        assert_eq!(slots.offset(ScrollSlot::Rail), 30);
    }

    #[test]
    fn clamp_to_zero_when_content_fits() {
        let mut slots = ScrollSlots::new();
        slots.scroll_to(ScrollSlot::Main, 7);
        slots.clamp(ScrollSlot::Main, 5, 10);
        assert_eq!(slots.offset(ScrollSlot::Main), 0);
    }

    #[test]
    fn ensure_visible_scrolls_down_just_enough() {
        let mut slots = ScrollSlots::new();
        slots.ensure_visible(ScrollSlot::Main, 20, 25, 10);
        assert_eq!(slots.offset(ScrollSlot::Main), 15);
    }

    #[test]
    fn ensure_visible_scrolls_up_to_top_row() {
        let mut slots = ScrollSlots::new();
        slots.scroll_to(ScrollSlot::Main, 30);
        slots.ensure_visible(ScrollSlot::Main, 4, 8, 10);
        assert_eq!(slots.offset(ScrollSlot::Main), 4);
    }

    #[test]
    fn ensure_visible_is_noop_when_already_visible() {
        let mut slots = ScrollSlots::new();
        slots.scroll_to(ScrollSlot::Main, 10);
        slots.ensure_visible(ScrollSlot::Main, 12, 15, 10);
        assert_eq!(slots.offset(ScrollSlot::Main), 10);
    }

    #[test]
    fn tall_span_shows_its_top() {
        let mut slots = ScrollSlots::new();
        slots.ensure_visible(ScrollSlot::Main, 20, 50, 10);
        assert_eq!(slots.offset(ScrollSlot::Main), 20);
    }
}
