//! A headless virtualized table engine.
//!
//! Tables with millions of rows and columns freeze a UI if they are materialized at once.
//! This crate renders only the window of cells around the viewport and learns row heights
//! and column widths as they are rendered:
//!
//! - every row/column starts with a small size estimate
//! - after each render, rendered rows/columns are measured and their estimates grow (they
//!   never shrink, so the table stabilizes as the user scrolls)
//! - the next window is searched from the previous one, so scrolling costs proportional to
//!   the scroll distance, not the table size
//! - scroll/resize events that stay inside the rendered window are skipped entirely
//!
//! It is UI-agnostic. A host is expected to provide:
//! - a [`Surface`]: scroll region, content region, cell nodes and a measure query
//! - a [`TableData`] snapshot: cells, row/column visibility flags and a cell render callback
//!
//! For a ready-made in-memory host (headless surface, table snapshot, data feed), see the
//! `scrolltable-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod controller;
mod error;
mod host;
mod measure;
mod model;
mod render;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use config::{
    Config, DEFAULT_BUFFER, DEFAULT_COL_WIDTH, DEFAULT_HEADER_COLS, DEFAULT_HEADER_ROWS,
    DEFAULT_ROW_HEIGHT,
};
pub use controller::{ScrollTable, TableState};
pub use error::GridError;
pub use host::{Surface, TableData};
pub use measure::{Measured, measure};
pub use model::{AxisSnapshot, AxisState, SizeModel};
pub use render::{Rendered, render};
pub use types::{Axis, CellFrame, Extent, Origin, RenderOutcome, Viewport, WindowState};
pub use window::{compute_window, covers};
