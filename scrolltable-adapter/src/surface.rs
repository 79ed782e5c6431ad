use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use scrolltable::{Axis, CellFrame, Extent, Origin, Surface, Viewport};

/// Fixed-pitch text metrics used to lay out headless cells.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextMetrics {
    pub char_width: u32,
    pub line_height: u32,
    /// Horizontal padding on each side of a cell.
    pub padding_x: u32,
    /// Vertical padding above and below a cell.
    pub padding_y: u32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 7,
            line_height: 13,
            padding_x: 2,
            padding_y: 1,
        }
    }
}

impl TextMetrics {
    /// Natural `(width, height)` of preformatted text: no wrapping, one line per `\n`.
    pub fn text_size(&self, text: &str) -> (u32, u32) {
        let mut lines = 0u32;
        let mut widest = 0u32;
        for line in text.split('\n') {
            lines += 1;
            widest = widest.max(line.chars().count() as u32);
        }
        (
            widest
                .saturating_mul(self.char_width)
                .saturating_add(2 * self.padding_x),
            lines
                .saturating_mul(self.line_height)
                .saturating_add(2 * self.padding_y),
        )
    }
}

/// A rendered cell node. Render callbacks write their text into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadlessCell {
    frame: CellFrame,
    text: String,
}

impl HeadlessCell {
    fn new(frame: CellFrame) -> Self {
        Self {
            frame,
            text: String::new(),
        }
    }

    pub fn frame(&self) -> CellFrame {
        self.frame
    }

    pub fn is_header(&self) -> bool {
        self.frame.header
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Laid-out `(width, height)`: the natural text size, but never below the frame minimums.
    pub fn layout_size(&self, metrics: &TextMetrics) -> (u32, u32) {
        let (w, h) = metrics.text_size(&self.text);
        (w.max(self.frame.min_width), h.max(self.frame.min_height))
    }
}

impl fmt::Write for HeadlessCell {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadlessRow {
    pub index: usize,
    pub cells: Vec<HeadlessCell>,
}

/// An in-memory surface: a scroll region with a viewport, and a content region holding the
/// rendered rows.
///
/// Layout follows table semantics: a row is as tall as its tallest cell and a column as wide
/// as its widest rendered cell.
#[derive(Clone, Debug, Default)]
pub struct HeadlessSurface {
    metrics: TextMetrics,
    mounted: bool,
    viewport: Viewport,
    extent: Extent,
    origin: Origin,
    rows: Vec<HeadlessRow>,
    mutations: u64,
}

impl HeadlessSurface {
    /// Creates an unmounted surface with a `width` × `height` viewport scrolled to the origin.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport {
                width,
                height,
                ..Viewport::default()
            },
            ..Self::default()
        }
    }

    pub fn with_metrics(mut self, metrics: TextMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &TextMetrics {
        &self.metrics
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Resizes the viewport and re-clamps the scroll position.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport.width = width;
        self.viewport.height = height;
        self.scroll_to(self.viewport.scroll_top, self.viewport.scroll_left);
    }

    /// Scrolls the viewport, clamped to the content extent like a native scroll container.
    pub fn scroll_to(&mut self, top: u64, left: u64) {
        let max_top = self
            .extent
            .height
            .saturating_sub(self.viewport.height as u64);
        let max_left = self.extent.width.saturating_sub(self.viewport.width as u64);
        self.viewport.scroll_top = top.min(max_top);
        self.viewport.scroll_left = left.min(max_left);
    }

    pub fn content_extent(&self) -> Extent {
        self.extent
    }

    pub fn region_origin(&self) -> Origin {
        self.origin
    }

    pub fn rows(&self) -> &[HeadlessRow] {
        &self.rows
    }

    /// Number of mutating calls received so far.
    pub fn mutations(&self) -> u64 {
        self.mutations
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).sum()
    }

    pub fn row(&self, index: usize) -> Option<&HeadlessRow> {
        let pos = self
            .rows
            .binary_search_by_key(&index, |r| r.index)
            .ok()?;
        self.rows.get(pos)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&HeadlessCell> {
        let row = self.row(row)?;
        let pos = row
            .cells
            .binary_search_by_key(&col, |c| c.frame.col)
            .ok()?;
        row.cells.get(pos)
    }

    fn row_height(&self, index: usize) -> Option<u32> {
        self.row(index)?
            .cells
            .iter()
            .map(|c| c.layout_size(&self.metrics).1)
            .max()
    }

    fn col_width(&self, index: usize) -> Option<u32> {
        self.rows
            .iter()
            .filter_map(|r| {
                let pos = r.cells.binary_search_by_key(&index, |c| c.frame.col).ok()?;
                r.cells.get(pos)
            })
            .map(|c| c.layout_size(&self.metrics).0)
            .max()
    }
}

impl Surface for HeadlessSurface {
    type Node = HeadlessCell;

    fn mount(&mut self) {
        debug_assert!(!self.mounted, "HeadlessSurface mounted twice");
        self.mounted = true;
        self.rows.clear();
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear_content(&mut self) {
        self.mutations += 1;
        self.rows.clear();
    }

    fn set_content_extent(&mut self, extent: Extent) {
        self.mutations += 1;
        self.extent = extent;
    }

    fn place_region(&mut self, origin: Origin) {
        self.mutations += 1;
        self.origin = origin;
    }

    fn push_row(&mut self, row: usize) {
        self.mutations += 1;
        debug_assert!(
            self.rows.last().is_none_or(|r| r.index < row),
            "rows must be pushed in ascending order"
        );
        self.rows.push(HeadlessRow {
            index: row,
            cells: Vec::new(),
        });
    }

    fn push_cell(&mut self, frame: CellFrame) -> &mut HeadlessCell {
        self.mutations += 1;
        if self.rows.last().is_none_or(|r| r.index != frame.row) {
            self.rows.push(HeadlessRow {
                index: frame.row,
                cells: Vec::new(),
            });
        }
        let last = self.rows.len() - 1;
        let cells = &mut self.rows[last].cells;
        cells.push(HeadlessCell::new(frame));
        let pos = cells.len() - 1;
        &mut cells[pos]
    }

    fn measure(&self, axis: Axis, index: usize) -> Option<u32> {
        match axis {
            Axis::Row => self.row_height(index),
            Axis::Col => self.col_width(index),
        }
    }
}
