//! Incremental window search.
//!
//! The search is seeded from the previous window rather than from index 0, so its cost is
//! proportional to the scroll distance instead of the table size.

use crate::{AxisState, WindowState};

/// Recomputes the rendered window of one axis.
///
/// The new window starts at the last entry whose leading edge is at or before
/// `scroll_pos - buffer_extent` and ends at the first entry boundary at or past
/// `scroll_pos + viewport_extent + buffer_extent` (or the end of the axis).
///
/// `previous` must be consistent with `axis` (offsets matching its visible sizes). Pass
/// `WindowState::default()` to search from the start.
pub fn compute_window(
    axis: &AxisState,
    scroll_pos: u64,
    viewport_extent: u32,
    buffer_extent: u32,
    previous: WindowState,
) -> WindowState {
    let count = axis.len();
    if count == 0 {
        return WindowState::default();
    }
    debug_assert!(previous.first_idx < count || previous.first_idx == 0);

    let mut first_idx = previous.first_idx;
    let mut first_offset = previous.first_offset;
    let lower = scroll_pos as i128 - buffer_extent as i128;

    // Contract the lower bound towards the viewport.
    while (first_offset as i128) < lower && first_idx < count - 1 {
        first_offset += axis.visible_size(first_idx);
        first_idx += 1;
    }
    // Expand it back over entries that reach into the buffer.
    while (first_offset as i128) > lower && first_idx > 0 {
        first_idx -= 1;
        first_offset -= axis.visible_size(first_idx);
    }

    let upper = scroll_pos
        .saturating_add(viewport_extent as u64)
        .saturating_add(buffer_extent as u64);
    let mut last_idx = first_idx;
    let mut last_offset_end = first_offset;
    while last_offset_end < upper && last_idx < count {
        last_offset_end += axis.visible_size(last_idx);
        last_idx += 1;
    }

    vtrace!(
        scroll_pos,
        viewport_extent,
        from_first = previous.first_idx,
        first_idx,
        last_idx,
        "compute_window"
    );

    WindowState {
        first_idx,
        first_offset,
        last_idx,
        last_offset_end,
    }
}

/// Whether `window` already covers `[scroll_pos, scroll_pos + viewport_extent]`.
///
/// A window that reaches the end of the axis covers any viewport below its start.
pub fn covers(window: WindowState, count: usize, scroll_pos: u64, viewport_extent: u32) -> bool {
    window.first_offset <= scroll_pos
        && (window.last_offset_end >= scroll_pos.saturating_add(viewport_extent as u64)
            || window.last_idx == count)
}
