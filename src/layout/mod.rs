//! Dashboard layout composer (pure geometry).
//!
//! Turns a viewport size into four fixed region rectangles. The sidebar, rail
//! and header sizes are constants; the main column takes whatever width is
//! left. Regions are described in pixels; the terminal shell converts them
//! to cells with [`RegionRect::to_cells`].

pub mod scroll;

pub use scroll::{ScrollSlot, ScrollSlots};

use std::fmt;
use tracing::warn;

/// Default sidebar width in pixels.
pub const DEFAULT_SIDEBAR_WIDTH: u32 = 224;
/// Default rail width in pixels.
pub const DEFAULT_RAIL_WIDTH: u32 = 288;
/// Default header height in pixels.
pub const DEFAULT_HEADER_HEIGHT: u32 = 60;

// ===== Region =====

/// One of the four fixed dashboard regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// Left navigation column, full height.
    Sidebar,
    /// Top bar between sidebar and rail.
    Header,
    /// Scrolling feed column.
    Main,
    /// Right utility column below the header.
    Rail,
}

impl Region {
    /// All regions in paint order (lowest stacking level first).
    pub const PAINT_ORDER: [Region; 4] = [Region::Main, Region::Header, Region::Rail, Region::Sidebar];

    /// Stacking level. Higher values are drawn over lower ones.
    pub fn z_index(self) -> u8 {
        match self {
            Region::Sidebar => 30,
            Region::Rail => 20,
            Region::Header => 10,
            Region::Main => 0,
        }
    }

    /// The scroll slot this region owns, if it scrolls at all.
    pub fn scroll_slot(self) -> Option<ScrollSlot> {
        match self {
            Region::Main => Some(ScrollSlot::Main),
            Region::Rail => Some(ScrollSlot::Rail),
            Region::Sidebar | Region::Header => None,
        }
    }

    /// Lowercase name used in layout descriptions.
    pub fn name(self) -> &'static str {
        match self {
            Region::Sidebar => "sidebar",
            Region::Header => "header",
            Region::Main => "main",
            Region::Rail => "rail",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ===== RegionRect =====

/// Axis-aligned rectangle with a stacking level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionRect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width, possibly zero.
    pub width: u32,
    /// Height, possibly zero.
    pub height: u32,
    /// Stacking level.
    pub z: u8,
}

impl RegionRect {
    /// Right edge (exclusive).
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// True when the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True when `(x, y)` lies inside the rectangle.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// True when the two rectangles share any area.
    pub fn intersects(&self, other: &RegionRect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Convert pixel geometry to cell geometry.
    ///
    /// Edges are floored independently so that regions which tile in pixels
    /// also tile in cells. A zero cell dimension is treated as one.
    pub fn to_cells(&self, cell: CellSize) -> RegionRect {
        let cw = cell.width.max(1);
        let ch = cell.height.max(1);
        let left = self.x / cw;
        let top = self.y / ch;
        RegionRect {
            x: left,
            y: top,
            width: self.right() / cw - left,
            height: self.bottom() / ch - top,
            z: self.z,
        }
    }
}

impl fmt::Display for RegionRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={} y={} w={} h={} z={}",
            self.x, self.y, self.width, self.height, self.z
        )
    }
}

/// Size of one terminal cell in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    /// Cell width in pixels.
    pub width: u32,
    /// Cell height in pixels.
    pub height: u32,
}

impl CellSize {
    /// Create a cell size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::new(8, 16)
    }
}

// ===== LayoutConstants =====

/// The three fixed dimensions of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConstants {
    /// Sidebar width.
    pub sidebar_width: u32,
    /// Rail width.
    pub rail_width: u32,
    /// Header height.
    pub header_height: u32,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            rail_width: DEFAULT_RAIL_WIDTH,
            header_height: DEFAULT_HEADER_HEIGHT,
        }
    }
}

impl LayoutConstants {
    /// Smallest viewport width that leaves the main column non-empty.
    pub fn min_width(&self) -> u32 {
        self.sidebar_width.saturating_add(self.rail_width).saturating_add(1)
    }

    /// Smallest viewport height that leaves the main column non-empty.
    pub fn min_height(&self) -> u32 {
        self.header_height.saturating_add(1)
    }

    /// Compute the layout for a `width` x `height` viewport.
    ///
    /// Sizes that do not fit saturate at zero instead of going negative;
    /// the result is then [degenerate](DashboardLayout::is_degenerate).
    pub fn compute(&self, width: u32, height: u32) -> DashboardLayout {
        let fixed_width = self.sidebar_width.saturating_add(self.rail_width);
        let main_width = width.saturating_sub(fixed_width);
        let body_height = height.saturating_sub(self.header_height);

        let sidebar = RegionRect {
            x: 0,
            y: 0,
            width: self.sidebar_width,
            height,
            z: Region::Sidebar.z_index(),
        };
        let header = RegionRect {
            x: self.sidebar_width,
            y: 0,
            width: main_width,
            height: self.header_height,
            z: Region::Header.z_index(),
        };
        let main = RegionRect {
            x: self.sidebar_width,
            y: self.header_height,
            width: main_width,
            height: body_height,
            z: Region::Main.z_index(),
        };
        let rail = RegionRect {
            x: width.saturating_sub(self.rail_width),
            y: self.header_height,
            width: self.rail_width,
            height: body_height,
            z: Region::Rail.z_index(),
        };

        let layout = DashboardLayout {
            viewport: (width, height),
            sidebar,
            header,
            main,
            rail,
        };

        if layout.is_degenerate() {
            warn!(
                width,
                height,
                min_width = self.min_width(),
                min_height = self.min_height(),
                "Viewport too small for dashboard layout"
            );
        }

        layout
    }
}

/// Compute the layout with the default constants (224 / 288 / 60).
pub fn compute_layout(width: u32, height: u32) -> DashboardLayout {
    LayoutConstants::default().compute(width, height)
}

// ===== DashboardLayout =====

/// Four region rectangles for one viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    viewport: (u32, u32),
    sidebar: RegionRect,
    header: RegionRect,
    main: RegionRect,
    rail: RegionRect,
}

impl DashboardLayout {
    /// Viewport `(width, height)` this layout was computed for.
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Rectangle of one region.
    pub fn region(&self, region: Region) -> RegionRect {
        match region {
            Region::Sidebar => self.sidebar,
            Region::Header => self.header,
            Region::Main => self.main,
            Region::Rail => self.rail,
        }
    }

    /// Regions with their rectangles, lowest stacking level first.
    pub fn paint_order(&self) -> impl Iterator<Item = (Region, RegionRect)> + '_ {
        Region::PAINT_ORDER.into_iter().map(|r| (r, self.region(r)))
    }

    /// The region drawn on top at `(x, y)`, if any.
    pub fn topmost_at(&self, x: u32, y: u32) -> Option<Region> {
        self.paint_order()
            .filter(|(_, rect)| rect.contains(x, y))
            .max_by_key(|(_, rect)| rect.z)
            .map(|(region, _)| region)
    }

    /// True when the main column has no area left.
    pub fn is_degenerate(&self) -> bool {
        self.main.is_empty()
    }

    /// True when no two regions share area.
    pub fn non_overlapping(&self) -> bool {
        let rects: Vec<RegionRect> = self.paint_order().map(|(_, r)| r).collect();
        rects
            .iter()
            .enumerate()
            .all(|(i, a)| rects[i + 1..].iter().all(|b| !a.intersects(b)))
    }

    /// Every region converted to cell geometry.
    pub fn to_cells(&self, cell: CellSize) -> DashboardLayout {
        let (w, h) = self.viewport;
        DashboardLayout {
            viewport: (w / cell.width.max(1), h / cell.height.max(1)),
            sidebar: self.sidebar.to_cells(cell),
            header: self.header.to_cells(cell),
            main: self.main.to_cells(cell),
            rail: self.rail.to_cells(cell),
        }
    }

    /// Multi-line text description, one region per line in paint order.
    pub fn describe(&self) -> String {
        let (w, h) = self.viewport;
        let mut out = format!("viewport {w}x{h}\n");
        for (region, rect) in self.paint_order() {
            out.push_str(&format!("{:<8} {rect}\n", region.name()));
        }
        out
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
