// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=folio_grid --heading-base-level=0

//! Folio Grid: renderer-agnostic virtualized grid layout.
//!
//! This crate computes everything a host UI needs to render a large, uniform
//! grid of cards without realizing every item:
//!
//! - [`resolve_columns`]: how many columns fit a container, given a minimum
//!   item width, a gap, and a column cap. Never returns zero.
//!   [`ColumnResolver`] wraps it for hosts that observe container resizes.
//! - [`compute_window`]: which index range `[start, end)` must be realized for
//!   a scroll offset and viewport height, with whole-row overscan and the total
//!   height of the virtual grid.
//! - [`position_of`] and [`GridGeometry`]: the absolute, non-overlapping
//!   rectangle of every index in row-major order.
//! - [`VirtualGrid`]: a small controller that owns a [`GridConfig`], the
//!   observed [`Viewport`], and a cached [`GridLayout`], and turns host
//!   [`GridInput`]s (resize and scroll notifications) into a [`GridFrame`] of
//!   positioned nodes.
//!
//! Every function here is pure and total: malformed inputs (zero items, an
//! unmeasured container, negative scroll from an overscroll bounce) are
//! clamped to safe values rather than reported as errors.
//!
//! This crate deliberately does **not** know about widgets, display trees, or
//! any particular UI framework. Host frameworks are responsible for:
//!
//! - Owning the items and deciding their order (filtering and sorting happen
//!   before the items reach the grid).
//! - Forwarding resize and scroll notifications as [`GridInput`]s.
//! - Inserting the returned cells at their rectangles inside a scroll container
//!   sized to [`GridFrame::content_size`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use folio_grid::{GridConfig, GridInput, VirtualGrid};
//!
//! let names: Vec<String> = (0..1000).map(|i| format!("Character {i}")).collect();
//!
//! let mut grid = VirtualGrid::new(GridConfig::default(), names.len());
//! grid.apply(GridInput::Resize(Size::new(1200.0, 800.0)));
//! grid.apply(GridInput::Scroll(2960.0));
//!
//! let frame = grid.frame(&names, |name, _index| name.clone());
//! assert_eq!(grid.columns().get(), 4);
//! assert!(!frame.is_empty());
//! assert!(frame.cells.iter().all(|cell| cell.rect.y0 < frame.total_height()));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math in `kurbo`.
//! - `serde`: derives `Serialize`/`Deserialize` for [`GridConfig`] and
//!   [`ColumnPolicy`].
//! - `tracing`: emits `tracing` events (target `folio_grid`) when the column
//!   count changes and when a window is recomputed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

#[macro_use]
mod macros;

mod columns;
mod config;
mod frame;
mod grid;
mod position;
mod util;
mod viewport;
mod window;

pub use columns::{ColumnPolicy, ColumnResolver, item_width_for, resolve_columns};
pub use config::{GridConfig, MIN_ITEM_HEIGHT};
pub use frame::{GridFrame, PositionedCell};
pub use grid::{GridLayout, ScrollAlign, VirtualGrid};
pub use position::{GridGeometry, position_of};
pub use viewport::{GridInput, Viewport};
pub use window::{VisibleWindow, WindowInput, compute_window, max_scroll_offset};
