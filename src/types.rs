use core::ops::Range;

/// One of the two virtualized axes of a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Row,
    Col,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Row, Axis::Col];
}

/// Scroll position and size of the scroll region, as reported by the host surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub scroll_top: u64,
    pub scroll_left: u64,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn scroll(&self, axis: Axis) -> u64 {
        match axis {
            Axis::Row => self.scroll_top,
            Axis::Col => self.scroll_left,
        }
    }

    pub fn extent(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.height,
            Axis::Col => self.width,
        }
    }
}

/// Full virtual size of the scrollable content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub width: u64,
    pub height: u64,
}

/// Position of the rendered region inside the scrollable content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Origin {
    pub left: u64,
    pub top: u64,
}

/// The rendered index range of one axis and the pixel positions of its edges.
///
/// `first_offset` is the visible size of every entry before `first_idx`, `last_offset_end`
/// the visible size of every entry before `last_idx`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub first_idx: usize,
    pub first_offset: u64,
    pub last_idx: usize, // exclusive
    pub last_offset_end: u64,
}

impl WindowState {
    pub fn range(&self) -> Range<usize> {
        self.first_idx..self.last_idx
    }

    pub fn is_empty(&self) -> bool {
        self.first_idx >= self.last_idx
    }

    pub fn contains(&self, index: usize) -> bool {
        self.first_idx <= index && index < self.last_idx
    }

    /// Pixel extent covered by the window.
    pub fn span(&self) -> u64 {
        self.last_offset_end.saturating_sub(self.first_offset)
    }
}

/// Placement information handed to the surface for every rendered cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellFrame {
    pub row: usize,
    pub col: usize,
    /// Current column width estimate; the cell must not be laid out narrower.
    pub min_width: u32,
    /// Current row height estimate; the cell must not be laid out shorter.
    pub min_height: u32,
    /// `true` for cells in a header row or header column.
    pub header: bool,
}

/// What a controller handler did to the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderOutcome {
    /// The table has no data; the content region was emptied.
    Cleared,
    /// The current window already covers the viewport; the surface was not touched.
    Skipped,
    /// The window was recomputed and re-rendered.
    Rendered { cells: usize },
}

impl RenderOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}
