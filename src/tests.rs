use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 16
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start))
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Boom;

/// A grid of `(row, col)` cells that renders each cell as `"row,col"`.
#[derive(Debug)]
struct TestTable {
    cells: Vec<Vec<(usize, usize)>>,
    rows: Vec<bool>,
    cols: Vec<bool>,
    fail_at: Option<(usize, usize)>,
}

impl TestTable {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: (0..rows)
                .map(|r| (0..cols).map(|c| (r, c)).collect())
                .collect(),
            rows: vec![true; rows],
            cols: vec![true; cols],
            fail_at: None,
        }
    }
}

impl TableData for TestTable {
    type Cell = (usize, usize);
    type Target = String;
    type Error = Boom;

    fn row_visibilities(&self) -> &[bool] {
        &self.rows
    }

    fn col_visibilities(&self) -> &[bool] {
        &self.cols
    }

    fn cell(&self, row: usize, col: usize) -> Option<&(usize, usize)> {
        self.cells.get(row)?.get(col)
    }

    fn render_cell(&self, cell: &(usize, usize), target: &mut String) -> Result<(), Boom> {
        if self.fail_at == Some(*cell) {
            return Err(Boom);
        }
        target.push_str(&format!("{},{}", cell.0, cell.1));
        Ok(())
    }
}

#[derive(Debug, Default)]
struct TestRow {
    index: usize,
    cells: Vec<(CellFrame, String)>,
}

/// Records every mutation; a laid-out row/column is as large as its estimate or its
/// configured natural size, whichever is larger.
#[derive(Debug, Default)]
struct TestSurface {
    viewport: Viewport,
    mounted: usize,
    mutations: usize,
    extent: Extent,
    origin: Origin,
    rows: Vec<TestRow>,
    natural_heights: HashMap<usize, u32>,
    natural_widths: HashMap<usize, u32>,
}

impl TestSurface {
    fn with_viewport(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport {
                width,
                height,
                ..Viewport::default()
            },
            ..Self::default()
        }
    }

    fn rendered_rows(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.index).collect()
    }

    fn rendered_cols(&self) -> Vec<usize> {
        self.rows
            .first()
            .map(|r| r.cells.iter().map(|(f, _)| f.col).collect())
            .unwrap_or_default()
    }
}

impl Surface for TestSurface {
    type Node = String;

    fn mount(&mut self) {
        self.mounted += 1;
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
        self.rows.push(TestRow {
            index: row,
            cells: Vec::new(),
        });
    }

    fn push_cell(&mut self, frame: CellFrame) -> &mut String {
        self.mutations += 1;
        let row = self.rows.last_mut().expect("push_cell before push_row");
        row.cells.push((frame, String::new()));
        &mut row.cells.last_mut().expect("just pushed").1
    }

    fn measure(&self, axis: Axis, index: usize) -> Option<u32> {
        match axis {
            Axis::Row => {
                let row = self.rows.iter().find(|r| r.index == index)?;
                let min = row.cells.first()?.0.min_height;
                Some(min.max(self.natural_heights.get(&index).copied().unwrap_or(0)))
            }
            Axis::Col => {
                let (frame, _) = self
                    .rows
                    .first()?
                    .cells
                    .iter()
                    .find(|(f, _)| f.col == index)?;
                Some(
                    frame
                        .min_width
                        .max(self.natural_widths.get(&index).copied().unwrap_or(0)),
                )
            }
        }
    }
}

fn sum_visible_before(axis: &AxisState, end: usize) -> u64 {
    (0..end).map(|i| axis.visible_size(i)).sum()
}

fn assert_axis_consistent(axis: &AxisState) {
    let w = axis.window();
    assert!(
        w.first_idx <= w.last_idx && w.last_idx <= axis.len(),
        "window out of bounds: {w:?} (len={})",
        axis.len()
    );
    assert_eq!(axis.total_size(), sum_visible_before(axis, axis.len()));
    assert_eq!(w.first_offset, sum_visible_before(axis, w.first_idx));
    assert_eq!(w.last_offset_end, sum_visible_before(axis, w.last_idx));
}

fn visible_axis(count: usize, initial_size: u32) -> AxisState {
    let mut axis = AxisState::new(initial_size);
    axis.grow_to(count);
    for i in 0..count {
        axis.set_visibility(i, true);
    }
    axis
}

#[test]
fn initial_window_selects_rows_until_viewport_is_covered() {
    let config = Config::new().with_initial_row_height(15).with_buffer(0, 0);
    let mut t = ScrollTable::new(TestSurface::with_viewport(200, 40), config);
    let data = TestTable::new(3, 2);

    let out = t.on_data_changed(Some(&data)).unwrap();
    assert_eq!(out, RenderOutcome::Rendered { cells: 6 });
    assert_eq!(t.state(), TableState::Populated);
    assert_eq!(
        t.model().window(Axis::Row),
        WindowState {
            first_idx: 0,
            first_offset: 0,
            last_idx: 3,
            last_offset_end: 45,
        }
    );
    assert_eq!(t.model().window(Axis::Col).range(), 0..2);
    assert_eq!(t.model().window(Axis::Col).last_offset_end, 100);
    assert_eq!(
        t.surface().extent,
        Extent {
            width: 100,
            height: 45
        }
    );
    assert_eq!(t.surface().origin, Origin::default());
    assert_eq!(t.surface().mounted, 1);
    assert_eq!(t.surface().rows[1].cells[1].1, "1,1");
}

#[test]
fn size_estimates_only_grow() {
    let mut axis = visible_axis(1, 15);
    assert_eq!(axis.grow_estimate(0, 30), 15);
    assert_eq!(axis.size(0), Some(30));
    assert_eq!(axis.total_size(), 30);

    assert_eq!(axis.grow_estimate(0, 20), 0);
    assert_eq!(axis.size(0), Some(30));
    assert_eq!(axis.total_size(), 30);
}

#[test]
fn hiding_row_before_window_shifts_window_offsets() {
    let mut axis = visible_axis(10, 15);
    let w = compute_window(&axis, 50, 20, 0, axis.window());
    axis.set_window(w);
    assert_eq!(
        w,
        WindowState {
            first_idx: 3,
            first_offset: 45,
            last_idx: 5,
            last_offset_end: 75,
        }
    );

    assert!(axis.set_visibility(0, false));
    assert_eq!(axis.total_size(), 135);
    assert_eq!(axis.window().first_offset, 30);
    assert_eq!(axis.window().last_offset_end, 60);
    assert_axis_consistent(&axis);

    // Already hidden: no-op.
    assert!(!axis.set_visibility(0, false));
    assert_eq!(axis.total_size(), 135);
}

#[test]
fn hiding_column_before_window_shifts_column_offsets() {
    let mut model = SizeModel::new(&Config::default());
    model.grow_to(1, 20);
    model.apply_visibilities(Axis::Row, &[true]);
    model.apply_visibilities(Axis::Col, &[true; 20]);
    let w = compute_window(model.axis(Axis::Col), 400, 100, 0, model.window(Axis::Col));
    model.set_window(Axis::Col, w);
    assert_eq!(w.first_idx, 8);
    assert_eq!(w.first_offset, 400);

    model.set_visibility(Axis::Col, 2, false);
    assert_eq!(model.window(Axis::Col).first_offset, 350);
    assert_eq!(model.total_size(Axis::Col), 950);
    assert_axis_consistent(model.axis(Axis::Col));
    // Rows are untouched.
    assert_eq!(model.total_size(Axis::Row), 15);
}

#[test]
fn appended_rows_start_hidden_with_default_estimate() {
    let mut model = SizeModel::new(&Config::default());
    model.grow_to(2, 1);
    model.apply_visibilities(Axis::Row, &[true, true]);
    model.grow_estimate(Axis::Row, 0, 40);

    model.grow_to(3, 1);
    assert_eq!(model.len(Axis::Row), 3);
    assert_eq!(model.size(Axis::Row, 2), Some(DEFAULT_ROW_HEIGHT));
    assert!(!model.is_visible(Axis::Row, 2));
    assert_eq!(model.size(Axis::Row, 0), Some(40));
    assert_eq!(model.total_size(Axis::Row), 40 + DEFAULT_ROW_HEIGHT as u64);

    // Counts never decrease.
    model.grow_to(1, 1);
    assert_eq!(model.len(Axis::Row), 3);
}

#[test]
fn shorter_snapshot_hides_trailing_rows() {
    let mut axis = AxisState::new(10);
    assert_eq!(axis.apply_visibilities(&[true, true, true]), 3);
    assert_eq!(axis.apply_visibilities(&[true]), 2);
    assert_eq!(axis.len(), 3);
    assert_eq!(axis.total_size(), 10);
    assert_axis_consistent(&axis);
}

#[test]
fn repeated_viewport_events_do_not_touch_surface() {
    let mut t = ScrollTable::new(TestSurface::with_viewport(300, 100), Config::default());
    let data = TestTable::new(1000, 20);
    t.on_data_changed(Some(&data)).unwrap();
    let mutations = t.surface().mutations;
    let renders = t.render_count();

    assert_eq!(t.on_scrolled(Some(&data)).unwrap(), RenderOutcome::Skipped);
    assert_eq!(
        t.on_viewport_resized(Some(&data)).unwrap(),
        RenderOutcome::Skipped
    );
    assert_eq!(t.on_scrolled(Some(&data)).unwrap(), RenderOutcome::Skipped);
    assert_eq!(t.surface().mutations, mutations);
    assert_eq!(t.render_count(), renders);
}

#[test]
fn scrolling_out_of_window_renders_only_new_window() {
    let config = Config::new()
        .with_initial_row_height(10)
        .with_buffer(50, 0);
    let mut t = ScrollTable::new(TestSurface::with_viewport(100, 100), config);
    let data = TestTable::new(1000, 1);
    t.on_data_changed(Some(&data)).unwrap();
    assert_eq!(t.model().window(Axis::Row).range(), 0..15);

    t.surface_mut().viewport.scroll_top = 5000;
    assert_eq!(
        t.on_scrolled(Some(&data)).unwrap(),
        RenderOutcome::Rendered { cells: 20 }
    );
    let w = t.model().window(Axis::Row);
    assert_eq!(w.range(), 495..515);
    assert_eq!(w.first_offset, 4950);
    assert_eq!(t.surface().origin.top, 4950);
    assert_eq!(t.surface().rendered_rows(), (495..515).collect::<Vec<_>>());
    assert_eq!(t.surface().extent.height, 10_000);

    // Still inside the rendered window.
    t.surface_mut().viewport.scroll_top = 5010;
    assert!(t.on_scrolled(Some(&data)).unwrap().is_skipped());

    // Back to the top.
    t.surface_mut().viewport.scroll_top = 0;
    t.on_scrolled(Some(&data)).unwrap();
    assert_eq!(t.model().window(Axis::Row).range(), 0..15);
}

#[test]
fn window_at_end_of_axis_covers_any_later_scroll() {
    let config = Config::new().with_initial_row_height(10).with_buffer(0, 0);
    let mut t = ScrollTable::new(TestSurface::with_viewport(100, 100), config);
    let data = TestTable::new(50, 1);
    t.on_data_changed(Some(&data)).unwrap();

    t.surface_mut().viewport.scroll_top = 400;
    t.on_scrolled(Some(&data)).unwrap();
    let w = t.model().window(Axis::Row);
    assert_eq!(w.last_idx, 50);
    assert!(covers(w, 50, 420, 100));
    t.surface_mut().viewport.scroll_top = 450;
    assert!(t.on_scrolled(Some(&data)).unwrap().is_skipped());
}

#[test]
fn hidden_entries_are_not_rendered_and_headers_are_tagged() {
    let config = Config::new().with_headers(1, 1);
    let mut t = ScrollTable::new(TestSurface::with_viewport(500, 500), config);
    let mut data = TestTable::new(4, 4);
    data.rows[1] = false;
    data.cols[0] = false;

    assert_eq!(
        t.on_data_changed(Some(&data)).unwrap(),
        RenderOutcome::Rendered { cells: 9 }
    );
    let s = t.surface();
    assert_eq!(s.rendered_rows(), vec![0, 2, 3]);
    assert_eq!(s.rendered_cols(), vec![1, 2, 3]);
    assert_eq!(s.extent.height, 3 * DEFAULT_ROW_HEIGHT as u64);
    assert_eq!(s.extent.width, 3 * DEFAULT_COL_WIDTH as u64);

    let header: Vec<bool> = s.rows[0].cells.iter().map(|(f, _)| f.header).collect();
    assert_eq!(header, vec![true, true, true]);
    let body: Vec<bool> = s.rows[1].cells.iter().map(|(f, _)| f.header).collect();
    assert_eq!(body, vec![false, false, false]);

    // Showing row 1 again re-renders it.
    data.rows[1] = true;
    t.on_data_changed(Some(&data)).unwrap();
    assert_eq!(t.surface().rendered_rows(), vec![0, 1, 2, 3]);
}

#[test]
fn measured_sizes_grow_totals_and_persist_across_data_changes() {
    let mut surface = TestSurface::with_viewport(500, 500);
    surface.natural_heights.insert(0, 40);
    surface.natural_widths.insert(1, 120);
    let mut t = ScrollTable::new(surface, Config::default());
    let mut data = TestTable::new(5, 2);

    t.on_data_changed(Some(&data)).unwrap();
    assert_eq!(t.model().size(Axis::Row, 0), Some(40));
    assert_eq!(t.model().size(Axis::Col, 1), Some(120));
    assert_eq!(t.last_measured(), Measured { height: 25, width: 70 });
    assert_eq!(
        t.content_extent(),
        Extent {
            width: 170,
            height: 40 + 4 * 15
        }
    );
    assert_eq!(t.surface().extent, t.content_extent());
    assert_axis_consistent(t.model().axis(Axis::Row));
    assert_axis_consistent(t.model().axis(Axis::Col));

    // A smaller natural size later does not shrink the learned estimate.
    t.surface_mut().natural_heights.insert(0, 20);
    data = TestTable::new(6, 2);
    t.on_data_changed(Some(&data)).unwrap();
    assert_eq!(t.model().size(Axis::Row, 0), Some(40));
    assert_eq!(t.model().len(Axis::Row), 6);
    assert_eq!(t.surface().rows[0].cells[0].0.min_height, 40);
    assert_eq!(t.last_measured(), Measured::default());
}

#[test]
fn missing_cell_is_reported() {
    let mut t = ScrollTable::new(TestSurface::with_viewport(500, 500), Config::default());
    let mut data = TestTable::new(3, 2);
    data.cells.truncate(2);

    let err = t.on_data_changed(Some(&data)).unwrap_err();
    assert!(matches!(err, GridError::MissingCell { row: 2, col: 0 }));
    assert_eq!(err.cell(), (2, 0));
}

#[test]
fn render_error_aborts_cycle_and_next_event_rerenders() {
    let mut t = ScrollTable::new(TestSurface::with_viewport(500, 500), Config::default());
    let mut data = TestTable::new(3, 2);
    data.fail_at = Some((1, 0));

    let err = t.on_data_changed(Some(&data)).unwrap_err();
    match err {
        GridError::Render { row, col, source } => {
            assert_eq!((row, col), (1, 0));
            assert_eq!(source, Boom);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(t.render_count(), 0);
    assert_axis_consistent(t.model().axis(Axis::Row));

    data.fail_at = None;
    assert_eq!(
        t.on_scrolled(Some(&data)).unwrap(),
        RenderOutcome::Rendered { cells: 6 }
    );
    assert_eq!(t.render_count(), 1);
    assert!(t.on_scrolled(Some(&data)).unwrap().is_skipped());
}

#[test]
fn empty_snapshot_resets_to_empty_state() {
    let mut t = ScrollTable::new(TestSurface::with_viewport(500, 500), Config::default());
    assert_eq!(t.state(), TableState::Empty);

    let data = TestTable::new(3, 2);
    t.on_data_changed(Some(&data)).unwrap();
    assert_eq!(t.state(), TableState::Populated);

    assert_eq!(
        t.on_data_changed(None::<&TestTable>).unwrap(),
        RenderOutcome::Cleared
    );
    assert_eq!(t.state(), TableState::Empty);
    assert_eq!(t.model().len(Axis::Row), 0);
    assert_eq!(t.model().window(Axis::Row), WindowState::default());
    assert_eq!(t.surface().extent, Extent::default());
    assert!(t.surface().rows.is_empty());
    assert!(t.on_scrolled(Some(&data)).unwrap().is_skipped());

    // No columns is "no data" as well.
    let no_cols = TestTable::new(3, 0);
    assert_eq!(
        t.on_data_changed(Some(&no_cols)).unwrap(),
        RenderOutcome::Cleared
    );

    // A reset table starts from fresh estimates.
    t.on_data_changed(Some(&data)).unwrap();
    assert_eq!(t.model().total_size(Axis::Row), 3 * DEFAULT_ROW_HEIGHT as u64);
}

#[test]
fn populated_table_without_snapshot_skips_viewport_events() {
    let mut t = ScrollTable::new(TestSurface::with_viewport(500, 500), Config::default());
    let data = TestTable::new(3, 2);
    t.on_data_changed(Some(&data)).unwrap();
    t.surface_mut().viewport.scroll_top = 10_000;
    assert!(t.on_scrolled(None::<&TestTable>).unwrap().is_skipped());
    assert_eq!(t.render_count(), 1);
}

#[test]
fn offset_of_walks_from_nearest_window_edge() {
    let mut axis = visible_axis(100, 10);
    axis.set_visibility(3, false);
    let w = compute_window(&axis, 500, 50, 0, axis.window());
    axis.set_window(w);

    for i in [0usize, 3, 4, 40, w.first_idx, w.last_idx, 99, 100] {
        assert_eq!(axis.offset_of(i), Some(sum_visible_before(&axis, i)), "i={i}");
    }
    assert_eq!(axis.offset_of(101), None);
}

#[test]
fn visible_entries_skip_hidden_and_clamp_range() {
    let mut axis = visible_axis(5, 7);
    axis.set_visibility(1, false);
    axis.grow_estimate(2, 9);
    let got: Vec<(usize, u32)> = axis.visible_entries(0..10).collect();
    assert_eq!(got, vec![(0, 7), (2, 9), (3, 7), (4, 7)]);
    assert_eq!(axis.visible_entries(6..8).count(), 0);
}

#[test]
fn hidden_entry_growth_does_not_change_totals() {
    let mut axis = visible_axis(3, 10);
    axis.set_visibility(1, false);
    assert_eq!(axis.grow_estimate(1, 25), 15);
    assert_eq!(axis.total_size(), 20);
    assert!(axis.set_visibility(1, true));
    assert_eq!(axis.total_size(), 45);
    assert_axis_consistent(&axis);
}

#[test]
fn out_of_bounds_updates_are_ignored() {
    let mut axis = visible_axis(2, 10);
    assert!(!axis.set_visibility(5, false));
    assert_eq!(axis.grow_estimate(5, 100), 0);
    assert_eq!(axis.total_size(), 20);
}

#[test]
fn randomized_operations_preserve_invariants() {
    let mut rng = Lcg::new(0x5eed);
    for _round in 0..40 {
        let mut axis = AxisState::new(rng.gen_range_u32(1, 20));
        let mut prev_sizes: Vec<u32> = Vec::new();
        for _ in 0..200 {
            match rng.gen_range_usize(0, 4) {
                0 => {
                    let len = axis.len();
                    axis.grow_to(len + rng.gen_range_usize(0, 5));
                }
                1 if !axis.is_empty() => {
                    let i = rng.gen_range_usize(0, axis.len());
                    axis.set_visibility(i, rng.gen_bool());
                }
                2 if !axis.is_empty() => {
                    let i = rng.gen_range_usize(0, axis.len());
                    axis.grow_estimate(i, rng.gen_range_u32(0, 60));
                }
                _ => {
                    if !axis.is_empty() {
                        let scroll = rng.gen_range_u64(0, axis.total_size() + 100);
                        let view = rng.gen_range_u32(0, 200);
                        let buffer = rng.gen_range_u32(0, 100);
                        let next = compute_window(&axis, scroll, view, buffer, axis.window());
                        axis.set_window(next);
                    }
                }
            }

            assert_axis_consistent(&axis);
            for (i, &prev) in prev_sizes.iter().enumerate() {
                assert!(axis.size(i).unwrap() >= prev, "size of {i} shrank");
            }
            prev_sizes = (0..axis.len()).map(|i| axis.size(i).unwrap()).collect();
        }
    }
}

#[test]
fn incremental_window_matches_search_from_start() {
    let mut rng = Lcg::new(42);
    let mut axis = AxisState::new(10);
    axis.grow_to(500);
    for i in 0..500 {
        axis.set_visibility(i, rng.gen_range_u32(0, 4) != 0);
        axis.grow_estimate(i, rng.gen_range_u32(1, 80));
    }
    let total = axis.total_size();

    for _ in 0..300 {
        let scroll = rng.gen_range_u64(0, total + 1);
        let view = rng.gen_range_u32(1, 400);
        let buffer = rng.gen_range_u32(0, 300);

        let seeded = compute_window(&axis, scroll, view, buffer, axis.window());
        let fresh = compute_window(&axis, scroll, view, buffer, WindowState::default());
        assert_eq!(seeded.first_offset, fresh.first_offset);
        assert_eq!(seeded.last_offset_end, fresh.last_offset_end);
        let a: Vec<usize> = axis.visible_entries(seeded.range()).map(|(i, _)| i).collect();
        let b: Vec<usize> = axis.visible_entries(fresh.range()).map(|(i, _)| i).collect();
        assert_eq!(a, b);

        assert!(seeded.first_offset as i128 <= (scroll as i128 - buffer as i128).max(0));
        assert!(
            seeded.last_offset_end >= scroll + view as u64 + buffer as u64
                || seeded.last_idx == axis.len()
        );
        axis.set_window(seeded);
    }
}

#[test]
fn randomized_controller_cycles_keep_model_consistent() {
    let mut rng = Lcg::new(7);
    let mut surface = TestSurface::with_viewport(400, 300);
    for i in 0..200 {
        surface
            .natural_heights
            .insert(i, rng.gen_range_u32(5, 60));
    }
    for i in 0..30 {
        surface.natural_widths.insert(i, rng.gen_range_u32(20, 200));
    }
    let mut t = ScrollTable::new(surface, Config::new().with_buffer(100, 100));
    let mut data = TestTable::new(200, 30);

    for step in 0..300 {
        if step % 25 == 0 {
            let r = rng.gen_range_usize(0, 200);
            data.rows[r] = !data.rows[r];
            let c = rng.gen_range_usize(0, 30);
            data.cols[c] = !data.cols[c];
            t.on_data_changed(Some(&data)).unwrap();
        } else {
            let height = t.model().total_size(Axis::Row);
            let width = t.model().total_size(Axis::Col);
            let v = &mut t.surface_mut().viewport;
            v.scroll_top = rng.gen_range_u64(0, height + 1);
            v.scroll_left = rng.gen_range_u64(0, width + 1);
            t.on_scrolled(Some(&data)).unwrap();
        }
        assert_axis_consistent(t.model().axis(Axis::Row));
        assert_axis_consistent(t.model().axis(Axis::Col));
        assert!(t.is_viewport_covered());

        // Every rendered row is inside the row window and visible.
        let w = t.model().window(Axis::Row);
        for r in t.surface().rendered_rows() {
            assert!(w.contains(r) && data.rows[r]);
        }
    }
}
