//! Host utilities for the `scrolltable` crate.
//!
//! The `scrolltable` crate is UI-agnostic: it drives a [`scrolltable::Surface`] and reads a
//! [`scrolltable::TableData`] snapshot. This crate provides small, framework-neutral pieces
//! to host it without a real UI:
//!
//! - [`HeadlessSurface`]: an in-memory scroll region with table layout and measurement
//! - [`VecTable`]: a table snapshot backed by row vectors
//! - [`Feed`]: a pull-on-notify feed that collapses bursts of data changes
//!
//! They are useful for tests, benchmarks and text-mode frontends.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod feed;
mod surface;
mod table;


pub use feed::Feed;
pub use surface::{HeadlessCell, HeadlessRow, HeadlessSurface, TextMetrics};
pub use table::{RenderCell, VecTable};
