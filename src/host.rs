use crate::{Axis, CellFrame, Extent, Origin, Viewport};

/// A snapshot of the table to display.
///
/// The engine only reads from it. The row count is `row_visibilities().len()` and the column
/// count is `col_visibilities().len()`; a snapshot with either slice empty means "no data".
pub trait TableData {
    type Cell: ?Sized;
    /// The surface node a cell is rendered into (see [`Surface::Node`]).
    type Target: ?Sized;
    type Error;

    fn row_visibilities(&self) -> &[bool];
    fn col_visibilities(&self) -> &[bool];

    /// Returns `None` if the grid is smaller than its visibility arrays.
    fn cell(&self, row: usize, col: usize) -> Option<&Self::Cell>;

    /// Populates `target` with the content of `cell`.
    ///
    /// Must run synchronously and must not touch scroll position or layout of the table.
    fn render_cell(&self, cell: &Self::Cell, target: &mut Self::Target)
    -> Result<(), Self::Error>;

    fn visibilities(&self, axis: Axis) -> &[bool] {
        match axis {
            Axis::Row => self.row_visibilities(),
            Axis::Col => self.col_visibilities(),
        }
    }

    fn is_empty(&self) -> bool {
        self.row_visibilities().is_empty() || self.col_visibilities().is_empty()
    }
}

/// The UI region a table is mounted into.
///
/// A surface owns a scroll region and, inside it, an absolutely positioned content region.
/// The engine drives it in two phases per cycle: first every mutating call, then
/// [`Surface::measure`] through a shared reference only.
pub trait Surface {
    type Node: ?Sized;

    /// Creates the scroll region and content region. Called once, by
    /// [`crate::ScrollTable::new`].
    fn mount(&mut self);

    /// Current scroll position and size of the scroll region.
    fn viewport(&self) -> Viewport;

    /// Removes all previously rendered rows.
    fn clear_content(&mut self);

    /// Sizes the scrollable content to the full virtual extent of the table.
    fn set_content_extent(&mut self, extent: Extent);

    /// Positions the rendered region inside the scrollable content.
    fn place_region(&mut self, origin: Origin);

    /// Starts a new rendered row; subsequent cells belong to it.
    fn push_row(&mut self, row: usize);

    /// Appends a cell to the current row and returns the node to render into.
    fn push_cell(&mut self, frame: CellFrame) -> &mut Self::Node;

    /// Laid-out size of a rendered row (its height) or column (its width).
    ///
    /// Returns `None` if the index was not part of the last render.
    fn measure(&self, axis: Axis, index: usize) -> Option<u32>;
}
