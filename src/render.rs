use crate::{
    Axis, CellFrame, Config, Extent, GridError, Origin, SizeModel, Surface, TableData,
    WindowState,
};

/// Proof that a render cycle has finished mutating the surface.
///
/// Only [`render`] creates it and only [`crate::measure`] consumes it, so measuring can
/// never interleave with mutation.
#[derive(Debug)]
#[must_use = "a rendered frame must be measured to learn cell sizes"]
pub struct Rendered {
    rows: WindowState,
    cols: WindowState,
    cells: usize,
}

impl Rendered {
    pub fn rows(&self) -> WindowState {
        self.rows
    }

    pub fn cols(&self) -> WindowState {
        self.cols
    }

    /// Number of cells handed to the render callback.
    pub fn cells(&self) -> usize {
        self.cells
    }
}

/// Materializes the visible cells of the current windows into `surface`.
///
/// The content region is always sized to the full virtual extent, and the rendered region
/// is placed at the leading edges of the windows. Hidden rows and columns produce no nodes.
pub fn render<S, D>(
    surface: &mut S,
    model: &SizeModel,
    config: &Config,
    data: &D,
) -> Result<Rendered, GridError<D::Error>>
where
    S: Surface,
    D: TableData<Target = S::Node> + ?Sized,
{
    let rows = model.axis(Axis::Row);
    let cols = model.axis(Axis::Col);
    let row_window = rows.window();
    let col_window = cols.window();

    surface.clear_content();
    surface.set_content_extent(Extent {
        width: cols.total_size(),
        height: rows.total_size(),
    });
    surface.place_region(Origin {
        left: col_window.first_offset,
        top: row_window.first_offset,
    });

    let mut cells = 0usize;
    for (row, height) in rows.visible_entries(row_window.range()) {
        surface.push_row(row);
        for (col, width) in cols.visible_entries(col_window.range()) {
            let cell = data
                .cell(row, col)
                .ok_or(GridError::MissingCell { row, col })?;
            let target = surface.push_cell(CellFrame {
                row,
                col,
                min_width: width,
                min_height: height,
                header: config.is_header(row, col),
            });
            data.render_cell(cell, target)
                .map_err(|source| GridError::Render { row, col, source })?;
            cells += 1;
        }
    }

    vdebug!(
        rows_first = row_window.first_idx,
        rows_last = row_window.last_idx,
        cols_first = col_window.first_idx,
        cols_last = col_window.last_idx,
        cells,
        "render"
    );

    Ok(Rendered {
        rows: row_window,
        cols: col_window,
        cells,
    })
}
