use crate::{Axis, Rendered, SizeModel, Surface};

/// Growth learned by one measurement pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measured {
    /// Total growth of row estimates.
    pub height: u64,
    /// Total growth of column estimates.
    pub width: u64,
}

/// Reads back the laid-out size of every rendered row and column and grows the estimates.
///
/// One query per row and one per column. Smaller measurements than the current estimate
/// are ignored, so re-measuring already learned entries is a no-op.
pub fn measure<S: Surface + ?Sized>(
    surface: &S,
    model: &mut SizeModel,
    rendered: Rendered,
) -> Measured {
    let mut out = Measured::default();
    if rendered.cells() == 0 {
        return out;
    }
    out.height = measure_axis(surface, model, Axis::Row, rendered.rows().range());
    out.width = measure_axis(surface, model, Axis::Col, rendered.cols().range());
    vtrace!(height = out.height, width = out.width, "measure");
    out
}

fn measure_axis<S: Surface + ?Sized>(
    surface: &S,
    model: &mut SizeModel,
    axis: Axis,
    range: core::ops::Range<usize>,
) -> u64 {
    let mut grown = 0u64;
    for index in range {
        if !model.is_visible(axis, index) {
            continue;
        }
        match surface.measure(axis, index) {
            Some(size) => grown += model.grow_estimate(axis, index, size) as u64,
            None => {
                vwarn!(?axis, index, "measure: rendered entry has no layout");
            }
        }
    }
    grown
}
