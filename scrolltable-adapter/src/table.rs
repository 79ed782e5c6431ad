use alloc::string::ToString;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt;

use scrolltable::TableData;

use crate::HeadlessCell;

/// A cell render callback.
pub type RenderCell<C, T, E> = Arc<dyn Fn(&C, &mut T) -> Result<(), E> + Send + Sync>;

/// A table snapshot backed by row vectors.
///
/// All rows and columns are visible unless hidden explicitly. The column count is the length
/// of the longest row; shorter rows are a caller error that surfaces as
/// `GridError::MissingCell` when one of their missing cells comes into view.
///
/// This type is cheap to clone apart from the cells themselves: the render callback is stored
/// in an `Arc`.
pub struct VecTable<C, T: ?Sized = HeadlessCell, E = Infallible> {
    cells: Vec<Vec<C>>,
    row_visibilities: Vec<bool>,
    col_visibilities: Vec<bool>,
    render: RenderCell<C, T, E>,
}

impl<C, T: ?Sized, E> VecTable<C, T, E> {
    pub fn new(
        cells: Vec<Vec<C>>,
        render: impl Fn(&C, &mut T) -> Result<(), E> + Send + Sync + 'static,
    ) -> Self {
        let cols = cells.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            row_visibilities: vec![true; cells.len()],
            col_visibilities: vec![true; cols],
            cells,
            render: Arc::new(render),
        }
    }

    pub fn with_row_visibilities(mut self, visibilities: Vec<bool>) -> Self {
        self.row_visibilities = visibilities;
        self
    }

    pub fn with_col_visibilities(mut self, visibilities: Vec<bool>) -> Self {
        self.col_visibilities = visibilities;
        self
    }

    pub fn row_count(&self) -> usize {
        self.row_visibilities.len()
    }

    pub fn col_count(&self) -> usize {
        self.col_visibilities.len()
    }

    pub fn rows(&self) -> &[Vec<C>] {
        &self.cells
    }

    /// Returns `false` if `row` is out of bounds.
    pub fn set_row_visible(&mut self, row: usize, visible: bool) -> bool {
        match self.row_visibilities.get_mut(row) {
            Some(v) => {
                *v = visible;
                true
            }
            None => false,
        }
    }

    /// Returns `false` if `col` is out of bounds.
    pub fn set_col_visible(&mut self, col: usize, visible: bool) -> bool {
        match self.col_visibilities.get_mut(col) {
            Some(v) => {
                *v = visible;
                true
            }
            None => false,
        }
    }

    /// Appends a visible row, widening the table if the row is longer than the others.
    pub fn push_row(&mut self, row: Vec<C>) {
        if row.len() > self.col_visibilities.len() {
            self.col_visibilities.resize(row.len(), true);
        }
        self.cells.push(row);
        self.row_visibilities.push(true);
    }
}

impl<C: fmt::Display> VecTable<C> {
    /// A table whose cells render their `Display` text into headless cells.
    pub fn from_display(cells: Vec<Vec<C>>) -> Self {
        Self::new(cells, |cell: &C, target: &mut HeadlessCell| {
            target.set_text(cell.to_string());
            Ok(())
        })
    }
}

impl<C, T: ?Sized, E> TableData for VecTable<C, T, E> {
    type Cell = C;
    type Target = T;
    type Error = E;

    fn row_visibilities(&self) -> &[bool] {
        &self.row_visibilities
    }

    fn col_visibilities(&self) -> &[bool] {
        &self.col_visibilities
    }

    fn cell(&self, row: usize, col: usize) -> Option<&C> {
        self.cells.get(row)?.get(col)
    }

    fn render_cell(&self, cell: &C, target: &mut T) -> Result<(), E> {
        (self.render)(cell, target)
    }
}

impl<C: Clone, T: ?Sized, E> Clone for VecTable<C, T, E> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            row_visibilities: self.row_visibilities.clone(),
            col_visibilities: self.col_visibilities.clone(),
            render: Arc::clone(&self.render),
        }
    }
}

impl<C, T: ?Sized, E> fmt::Debug for VecTable<C, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VecTable")
            .field("rows", &self.row_visibilities.len())
            .field("cols", &self.col_visibilities.len())
            .finish_non_exhaustive()
    }
}
