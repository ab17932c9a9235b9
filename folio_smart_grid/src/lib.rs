// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=folio_smart_grid --heading-base-level=0

//! Folio Smart Grid: decide whether a collection is worth virtualizing.
//!
//! Virtualization has a fixed cost (measurement, absolute positioning, scroll
//! bookkeeping) that only pays off once a collection is large enough. This
//! crate makes that decision in one place and routes each render to exactly
//! one path:
//!
//! 1. [`RenderStrategy::Loading`] while data is loading,
//! 2. [`RenderStrategy::Empty`] for a loaded, empty collection,
//! 3. [`RenderStrategy::Virtual`] when `len > threshold`,
//! 4. [`RenderStrategy::Regular`] otherwise.
//!
//! Thresholds are configuration, not computation: [`ThresholdTable`] holds
//! one value per [`ContentDensity`], so cheap text rows can stay in normal
//! flow far longer than image-heavy cards.
//!
//! Rendering itself stays with the host through the [`GridRenderer`] trait;
//! the virtualized path usually drives a [`folio_grid::VirtualGrid`].
//!
//! ## Example
//!
//! ```rust
//! use folio_smart_grid::{ContentDensity, GridRenderer, SmartGrid, ThresholdTable};
//!
//! struct Labels;
//!
//! impl GridRenderer<&str> for Labels {
//!     type Node = String;
//!
//!     fn loading(&mut self) -> String {
//!         "loading…".into()
//!     }
//!
//!     fn empty(&mut self) -> Option<String> {
//!         Some("no worlds yet".into())
//!     }
//!
//!     fn regular(&mut self, items: &[&str]) -> String {
//!         format!("flow of {}", items.len())
//!     }
//!
//!     fn virtualized(&mut self, items: &[&str]) -> String {
//!         format!("virtual over {}", items.len())
//!     }
//! }
//!
//! let worlds = ["Aerith", "Brume", "Calder"];
//! let grid = SmartGrid::for_density(&worlds, ContentDensity::Rich, &ThresholdTable::DEFAULT);
//! assert_eq!(grid.render(&mut Labels), "flow of 3");
//!
//! let none: [&str; 0] = [];
//! assert_eq!(SmartGrid::new(&none, 20).render(&mut Labels), "no worlds yet");
//! assert_eq!(SmartGrid::new(&worlds, 2).loading(true).render(&mut Labels), "loading…");
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to `folio_grid`.
//! - `serde`: derives `Serialize`/`Deserialize` for [`ContentDensity`] and
//!   [`ThresholdTable`].
//! - `tracing`: emits a `tracing` event (target `folio_smart_grid`) for every
//!   strategy selection.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

#[macro_use]
mod macros;

mod density;
mod smart_grid;
mod strategy;

pub use density::{ContentDensity, ThresholdTable};
pub use smart_grid::{GridRenderer, SmartGrid};
pub use strategy::{RenderStrategy, select_strategy};
