use crate::Axis;

pub const DEFAULT_ROW_HEIGHT: u32 = 15;
pub const DEFAULT_COL_WIDTH: u32 = 50;
pub const DEFAULT_BUFFER: u32 = 500;
pub const DEFAULT_HEADER_ROWS: usize = 1;
pub const DEFAULT_HEADER_COLS: usize = 0;

/// Configuration for [`crate::ScrollTable`].
///
/// The initial estimates should be on the small side: an estimate that is too large makes
/// the first render materialize too few rows, and learned sizes never shrink.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Estimated height of a row before it has been rendered.
    pub initial_row_height: u32,
    /// Estimated width of a column before it has been rendered.
    pub initial_col_width: u32,
    /// Pixels rendered above and below the viewport.
    pub row_buffer: u32,
    /// Pixels rendered left and right of the viewport.
    pub col_buffer: u32,
    pub header_rows: usize,
    pub header_cols: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_row_height: DEFAULT_ROW_HEIGHT,
            initial_col_width: DEFAULT_COL_WIDTH,
            row_buffer: DEFAULT_BUFFER,
            col_buffer: DEFAULT_BUFFER,
            header_rows: DEFAULT_HEADER_ROWS,
            header_cols: DEFAULT_HEADER_COLS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_row_height(mut self, height: u32) -> Self {
        self.initial_row_height = height;
        self
    }

    pub fn with_initial_col_width(mut self, width: u32) -> Self {
        self.initial_col_width = width;
        self
    }

    /// Sets both buffers at once.
    pub fn with_buffer(mut self, row_buffer: u32, col_buffer: u32) -> Self {
        self.row_buffer = row_buffer;
        self.col_buffer = col_buffer;
        self
    }

    pub fn with_row_buffer(mut self, buffer: u32) -> Self {
        self.row_buffer = buffer;
        self
    }

    pub fn with_col_buffer(mut self, buffer: u32) -> Self {
        self.col_buffer = buffer;
        self
    }

    pub fn with_headers(mut self, header_rows: usize, header_cols: usize) -> Self {
        self.header_rows = header_rows;
        self.header_cols = header_cols;
        self
    }

    pub fn initial_size(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.initial_row_height,
            Axis::Col => self.initial_col_width,
        }
    }

    pub fn buffer(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.row_buffer,
            Axis::Col => self.col_buffer,
        }
    }

    pub fn header_count(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.header_rows,
            Axis::Col => self.header_cols,
        }
    }

    pub fn is_header(&self, row: usize, col: usize) -> bool {
        row < self.header_rows || col < self.header_cols
    }
}
