// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render output of a virtualized grid pass.

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::VisibleWindow;

/// A host node placed at an absolute position inside the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedCell<N> {
    /// Index of the item in the caller's collection.
    pub index: usize,
    /// Rectangle the node occupies, relative to the top-left of the grid content.
    pub rect: Rect,
    /// Whatever the caller's render callback produced for this item.
    pub node: N,
}

/// The realized part of a grid, ready to be inserted into a scroll container.
///
/// Hosts size the scrollable content to [`content_size`](Self::content_size)
/// and place every cell absolutely at its `rect`.
#[derive(Debug, Clone, PartialEq)]
pub struct GridFrame<N> {
    /// Window the cells were realized from.
    pub window: VisibleWindow,
    /// Realized cells in index order.
    pub cells: Vec<PositionedCell<N>>,
    /// Width spanned by one full row.
    pub content_width: f64,
}

impl<N> GridFrame<N> {
    /// Height of the whole virtual grid.
    #[must_use]
    pub const fn total_height(&self) -> f64 {
        self.window.total_height
    }

    /// Size of the scrollable content.
    #[must_use]
    pub fn content_size(&self) -> Size {
        Size::new(self.content_width, self.window.total_height)
    }

    /// Returns `true` if no cells were realized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over the realized nodes in index order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.cells.iter().map(|cell| &cell.node)
    }
}
