use alloc::vec::Vec;
use core::ops::Range;

use crate::{Axis, Config, WindowState};

/// Size estimates and visibility flags of one axis, plus its running total and window.
///
/// Entries are append-only and estimates only grow. `total_size` and the window offsets are
/// maintained incrementally on every change instead of being recomputed.
#[derive(Clone, Debug)]
pub struct AxisState {
    sizes: Vec<u32>,
    visible: Vec<bool>,
    total: u64,
    window: WindowState,
    initial_size: u32,
}

/// A lightweight, serializable copy of an axis.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisSnapshot {
    pub sizes: Vec<u32>,
    pub visible: Vec<bool>,
    pub total_size: u64,
    pub window: WindowState,
}

impl AxisState {
    pub fn new(initial_size: u32) -> Self {
        Self {
            sizes: Vec::new(),
            visible: Vec::new(),
            total: 0,
            window: WindowState::default(),
            initial_size,
        }
    }

    pub fn reset(&mut self) {
        self.sizes.clear();
        self.visible.clear();
        self.total = 0;
        self.window = WindowState::default();
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn initial_size(&self) -> u32 {
        self.initial_size
    }

    pub fn size(&self, index: usize) -> Option<u32> {
        self.sizes.get(index).copied()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Space the entry occupies: its size if visible, otherwise zero.
    pub fn visible_size(&self, index: usize) -> u64 {
        if self.is_visible(index) {
            self.sizes[index] as u64
        } else {
            0
        }
    }

    pub fn total_size(&self) -> u64 {
        self.total
    }

    pub fn window(&self) -> WindowState {
        self.window
    }

    pub(crate) fn set_window(&mut self, window: WindowState) {
        debug_assert!(window.first_idx <= window.last_idx && window.last_idx <= self.len());
        self.window = window;
    }

    /// Visible entries in `range` with their current size.
    pub fn visible_entries(&self, range: Range<usize>) -> impl Iterator<Item = (usize, u32)> + '_ {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        self.sizes[start..end]
            .iter()
            .zip(&self.visible[start..end])
            .enumerate()
            .filter_map(move |(i, (&size, &visible))| visible.then_some((start + i, size)))
    }

    /// Pixel position of the leading edge of `index` within the full virtual extent.
    ///
    /// Walks from the nearest window edge, so it is cheap for indexes close to the window.
    pub fn offset_of(&self, index: usize) -> Option<u64> {
        if index > self.len() {
            return None;
        }
        let w = self.window;
        let offset = if index >= w.last_idx {
            w.last_offset_end + (w.last_idx..index).map(|i| self.visible_size(i)).sum::<u64>()
        } else if index >= w.first_idx {
            w.first_offset + (w.first_idx..index).map(|i| self.visible_size(i)).sum::<u64>()
        } else {
            w.first_offset - (index..w.first_idx).map(|i| self.visible_size(i)).sum::<u64>()
        };
        Some(offset)
    }

    /// Appends default-size, hidden entries up to `count`. Never removes entries.
    pub fn grow_to(&mut self, count: usize) {
        let cur = self.len();
        if count <= cur {
            return;
        }
        vtrace!(from = cur, to = count, "AxisState::grow_to");
        self.sizes.resize(count, self.initial_size);
        self.visible.resize(count, false);
    }

    /// Sets the visibility of one entry. Returns whether the flag changed.
    ///
    /// Entries before the window shift both window edges; entries inside it shift the end.
    pub fn set_visibility(&mut self, index: usize, visible: bool) -> bool {
        let Some(flag) = self.visible.get_mut(index) else {
            vwarn!(index, len = self.sizes.len(), "set_visibility: out-of-bounds index");
            return false;
        };
        if *flag == visible {
            return false;
        }
        *flag = visible;

        let size = self.sizes[index] as u64;
        let w = &mut self.window;
        if visible {
            self.total += size;
            if index < w.first_idx {
                w.first_offset += size;
            }
            if index < w.last_idx {
                w.last_offset_end += size;
            }
        } else {
            self.total -= size;
            if index < w.first_idx {
                w.first_offset -= size;
            }
            if index < w.last_idx {
                w.last_offset_end -= size;
            }
        }
        true
    }

    /// Grows the estimate of `index` to `measured` if that is larger. Returns the growth.
    ///
    /// A hidden entry only records its new size; it occupies no space yet.
    pub fn grow_estimate(&mut self, index: usize, measured: u32) -> u32 {
        let Some(cur) = self.sizes.get_mut(index) else {
            vwarn!(index, len = self.visible.len(), "grow_estimate: out-of-bounds index");
            return 0;
        };
        if measured <= *cur {
            return 0;
        }
        let delta = measured - *cur;
        *cur = measured;

        if self.visible[index] {
            let d = delta as u64;
            self.total += d;
            let w = &mut self.window;
            if index < w.first_idx {
                w.first_offset += d;
            }
            if index < w.last_idx {
                w.last_offset_end += d;
            }
        }
        delta
    }

    /// Grows the axis to `flags.len()` and applies every flag. Returns how many changed.
    ///
    /// Entries past the end of `flags` are hidden: rows are never deleted, so a shorter
    /// snapshot simply stops showing them.
    pub fn apply_visibilities(&mut self, flags: &[bool]) -> usize {
        self.grow_to(flags.len());
        let mut changed = 0usize;
        for index in 0..self.len() {
            let visible = flags.get(index).copied().unwrap_or(false);
            if self.set_visibility(index, visible) {
                changed += 1;
            }
        }
        changed
    }

    pub fn snapshot(&self) -> AxisSnapshot {
        AxisSnapshot {
            sizes: self.sizes.clone(),
            visible: self.visible.clone(),
            total_size: self.total,
            window: self.window,
        }
    }
}

/// Per-axis size estimates for a table.
#[derive(Clone, Debug)]
pub struct SizeModel {
    rows: AxisState,
    cols: AxisState,
}

impl SizeModel {
    pub fn new(config: &Config) -> Self {
        Self {
            rows: AxisState::new(config.initial_row_height),
            cols: AxisState::new(config.initial_col_width),
        }
    }

    /// Clears both axes: counts, totals, windows and offsets.
    pub fn reset(&mut self) {
        vdebug!("SizeModel::reset");
        self.rows.reset();
        self.cols.reset();
    }

    /// `true` while either axis has no entries (the table is in its "no data" state).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }

    pub fn axis(&self, axis: Axis) -> &AxisState {
        match axis {
            Axis::Row => &self.rows,
            Axis::Col => &self.cols,
        }
    }

    pub(crate) fn axis_mut(&mut self, axis: Axis) -> &mut AxisState {
        match axis {
            Axis::Row => &mut self.rows,
            Axis::Col => &mut self.cols,
        }
    }

    pub fn len(&self, axis: Axis) -> usize {
        self.axis(axis).len()
    }

    pub fn total_size(&self, axis: Axis) -> u64 {
        self.axis(axis).total_size()
    }

    pub fn window(&self, axis: Axis) -> WindowState {
        self.axis(axis).window()
    }

    pub fn size(&self, axis: Axis, index: usize) -> Option<u32> {
        self.axis(axis).size(index)
    }

    pub fn is_visible(&self, axis: Axis, index: usize) -> bool {
        self.axis(axis).is_visible(index)
    }

    pub fn grow_to(&mut self, row_count: usize, col_count: usize) {
        self.rows.grow_to(row_count);
        self.cols.grow_to(col_count);
    }

    pub fn set_visibility(&mut self, axis: Axis, index: usize, visible: bool) -> bool {
        self.axis_mut(axis).set_visibility(index, visible)
    }

    pub fn grow_estimate(&mut self, axis: Axis, index: usize, measured: u32) -> u32 {
        self.axis_mut(axis).grow_estimate(index, measured)
    }

    pub fn apply_visibilities(&mut self, axis: Axis, flags: &[bool]) -> usize {
        self.axis_mut(axis).apply_visibilities(flags)
    }

    pub(crate) fn set_window(&mut self, axis: Axis, window: WindowState) {
        self.axis_mut(axis).set_window(window);
    }

    pub fn snapshot(&self, axis: Axis) -> AxisSnapshot {
        self.axis(axis).snapshot()
    }
}
