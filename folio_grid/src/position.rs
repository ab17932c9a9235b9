// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-major mapping from item indices to absolute cell positions.

use core::num::NonZeroUsize;

use kurbo::{Point, Rect, Size};

use crate::columns::item_width_for;
use crate::config::MIN_ITEM_HEIGHT;
use crate::util::non_negative;

/// Returns the top-left corner of item `index` in grid coordinates.
///
/// `x` is the item's `left` offset and `y` its `top` offset:
/// `top = (index / columns) * (item_height + gap)` and
/// `left = (index % columns) * (item_width + gap)`.
#[must_use]
pub fn position_of(
    index: usize,
    columns: NonZeroUsize,
    item_width: f64,
    item_height: f64,
    gap: f64,
) -> Point {
    let row = index / columns.get();
    let col = index % columns.get();
    Point::new(
        col as f64 * (item_width + gap),
        row as f64 * (item_height + gap),
    )
}

/// Resolved geometry of one grid layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    columns: NonZeroUsize,
    item_width: f64,
    item_height: f64,
    gap: f64,
}

impl GridGeometry {
    /// Creates geometry from explicit values.
    ///
    /// Widths and gaps are clamped to be non-negative and `item_height` to at
    /// least [`MIN_ITEM_HEIGHT`].
    #[must_use]
    pub fn new(columns: NonZeroUsize, item_width: f64, item_height: f64, gap: f64) -> Self {
        Self {
            columns,
            item_width: non_negative(item_width),
            item_height: non_negative(item_height).max(MIN_ITEM_HEIGHT),
            gap: non_negative(gap),
        }
    }

    /// Creates geometry where `columns` items and their gaps exactly fill
    /// `container_width`.
    #[must_use]
    pub fn fill_width(
        container_width: f64,
        columns: NonZeroUsize,
        item_height: f64,
        gap: f64,
    ) -> Self {
        Self::new(
            columns,
            item_width_for(container_width, columns, gap),
            item_height,
            gap,
        )
    }

    /// Returns the column count.
    #[must_use]
    pub const fn columns(&self) -> NonZeroUsize {
        self.columns
    }

    /// Returns the width of every item.
    #[must_use]
    pub const fn item_width(&self) -> f64 {
        self.item_width
    }

    /// Returns the height of every item.
    #[must_use]
    pub const fn item_height(&self) -> f64 {
        self.item_height
    }

    /// Returns the gap between neighboring items.
    #[must_use]
    pub const fn gap(&self) -> f64 {
        self.gap
    }

    /// Returns the size of every item.
    #[must_use]
    pub fn item_size(&self) -> Size {
        Size::new(self.item_width, self.item_height)
    }

    /// Vertical distance between the tops of consecutive rows.
    #[must_use]
    pub fn row_height(&self) -> f64 {
        self.item_height + self.gap
    }

    /// Returns the row containing `index`.
    #[must_use]
    pub const fn row_of(&self, index: usize) -> usize {
        index / self.columns.get()
    }

    /// Returns the column containing `index`.
    #[must_use]
    pub const fn column_of(&self, index: usize) -> usize {
        index % self.columns.get()
    }

    /// Returns the number of rows needed for `len` items.
    #[must_use]
    pub const fn row_count(&self, len: usize) -> usize {
        len.div_ceil(self.columns.get())
    }

    /// Returns the top-left corner of item `index`.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Point {
        position_of(
            index,
            self.columns,
            self.item_width,
            self.item_height,
            self.gap,
        )
    }

    /// Returns the rectangle occupied by item `index`.
    #[must_use]
    pub fn cell_rect(&self, index: usize) -> Rect {
        Rect::from_origin_size(self.position_of(index), self.item_size())
    }

    /// Total scrollable height of `len` items, without a trailing gap.
    #[must_use]
    pub fn total_height(&self, len: usize) -> f64 {
        let rows = self.row_count(len) as f64;
        (rows * self.row_height() - self.gap).max(0.0)
    }

    /// Width spanned by a full row, without a trailing gap.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        let columns = self.columns.get() as f64;
        (columns * (self.item_width + self.gap) - self.gap).max(0.0)
    }
}
