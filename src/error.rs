//! Errors surfaced by a render cycle.
//!
//! An empty or absent table is not an error; it puts the controller in the `Empty` state.

/// A render cycle was aborted.
///
/// `E` is the error type of the table's cell render callback.
#[derive(Debug, thiserror::Error)]
pub enum GridError<E> {
    /// The grid has fewer physical rows or cells than its visibility arrays claim.
    #[error("cell ({row}, {col}) is missing from the grid")]
    MissingCell { row: usize, col: usize },

    /// The cell render callback failed.
    #[error("rendering cell ({row}, {col}) failed")]
    Render {
        row: usize,
        col: usize,
        #[source]
        source: E,
    },
}

impl<E> GridError<E> {
    /// Row and column of the cell that aborted the cycle.
    pub fn cell(&self) -> (usize, usize) {
        match self {
            Self::MissingCell { row, col } | Self::Render { row, col, .. } => (*row, *col),
        }
    }
}
