// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A controller that owns one mounted grid's configuration and viewport.

use alloc::vec::Vec;
use core::num::NonZeroUsize;

use kurbo::Rect;

use crate::{
    ColumnResolver, GridConfig, GridFrame, GridGeometry, GridInput, PositionedCell, Viewport,
    VisibleWindow, WindowInput, compute_window, max_scroll_offset,
};

/// Alignment mode when scrolling a specific index into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Align the top of the item's row with the top of the viewport.
    Start,
    /// Center the item's row within the viewport.
    Center,
    /// Align the bottom of the item's row with the bottom of the viewport.
    End,
    /// Move just enough to make the item fully visible, preferring the
    /// smallest change from the current scroll offset.
    Nearest,
}

/// Geometry and visible window of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Column count and cell dimensions.
    pub geometry: GridGeometry,
    /// Items to realize and the grid's total height.
    pub window: VisibleWindow,
}

impl GridLayout {
    /// Iterates over the realized indices and the rectangles they occupy.
    pub fn cells(&self) -> impl Iterator<Item = (usize, Rect)> + use<> {
        let geometry = self.geometry;
        self.window
            .indices()
            .map(move |index| (index, geometry.cell_rect(index)))
    }
}

/// Controller for a virtualized grid over a dense index strip `0..item_count`.
///
/// This type:
/// - stores the sanitized [`GridConfig`], item count, and [`Viewport`],
/// - resolves the column count through a [`ColumnResolver`] whenever the
///   container is resized,
/// - caches the last computed [`GridLayout`] until an input changes it,
/// - realizes the visible items into a [`GridFrame`] through a caller-supplied
///   render callback.
///
/// Every recomputation runs in the same order: columns, then geometry, then
/// the visible window, then positions. The controller never reads or mutates
/// the caller's items beyond handing them to the render callback.
#[derive(Debug, Clone)]
pub struct VirtualGrid {
    config: GridConfig,
    item_count: usize,
    columns: ColumnResolver,
    viewport: Viewport,

    dirty: bool,
    last_layout: GridLayout,
}

impl VirtualGrid {
    /// Creates a grid over `item_count` items in an unmeasured container.
    #[must_use]
    pub fn new(config: GridConfig, item_count: usize) -> Self {
        let config = config.sanitized();
        let columns = ColumnResolver::new(config.columns, config.gap);
        let geometry =
            GridGeometry::fill_width(0.0, columns.columns(), config.item_height, config.gap);
        Self {
            config,
            item_count,
            columns,
            viewport: Viewport::new(),
            dirty: true,
            last_layout: GridLayout {
                geometry,
                window: VisibleWindow::EMPTY,
            },
        }
    }

    /// Returns the sanitized configuration.
    #[must_use]
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: GridConfig) {
        let config = config.sanitized();
        if config == self.config {
            return;
        }
        gdebug!(?config, "grid configuration changed");
        self.columns.set_policy(config.columns, config.gap);
        self.config = config;
        self.dirty = true;
    }

    /// Returns the number of items in the grid.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Sets the number of items in the grid.
    pub fn set_item_count(&mut self, item_count: usize) {
        if item_count != self.item_count {
            self.item_count = item_count;
            self.dirty = true;
        }
    }

    /// Returns the observed viewport state.
    #[must_use]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the current column count.
    #[must_use]
    pub const fn columns(&self) -> NonZeroUsize {
        self.columns.columns()
    }

    /// Applies a host resize or scroll observation.
    ///
    /// Returns `true` if the layout must be recomputed.
    pub fn apply(&mut self, input: GridInput) -> bool {
        let mut changed = self.viewport.apply(input);
        if let GridInput::Resize(size) = input {
            changed |= self.columns.observe_width(size.width).is_some();
        }
        gtrace!(?input, changed, "grid input");
        self.dirty |= changed;
        changed
    }

    /// Applies a burst of inputs in order.
    ///
    /// Inputs carry absolute values, so only the final size and the final
    /// scroll offset matter. Returns `true` if any of them changed the layout.
    pub fn apply_all<I>(&mut self, inputs: I) -> bool
    where
        I: IntoIterator<Item = GridInput>,
    {
        inputs
            .into_iter()
            .fold(false, |changed, input| self.apply(input) | changed)
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.viewport.scroll_offset()
    }

    /// Sets the scroll offset.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.apply(GridInput::Scroll(offset));
    }

    /// Adjusts the scroll offset by `delta`.
    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll_offset(self.viewport.scroll_offset() + delta);
    }

    /// Viewport height used for layout: the measured height, or the
    /// configured fallback while the container is unmeasured.
    #[must_use]
    pub fn effective_viewport_height(&self) -> f64 {
        if self.viewport.is_measured() {
            self.viewport.height()
        } else {
            self.config.fallback_viewport_height
        }
    }

    /// Geometry for the current container width and column count.
    #[must_use]
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::fill_width(
            self.viewport.width(),
            self.columns.columns(),
            self.config.item_height,
            self.config.gap,
        )
    }

    /// Computes or returns the cached layout.
    #[must_use]
    pub fn layout(&mut self) -> GridLayout {
        if self.dirty {
            let geometry = self.geometry();
            let window = compute_window(WindowInput {
                item_count: self.item_count,
                columns: geometry.columns(),
                item_height: geometry.item_height(),
                gap: geometry.gap(),
                viewport_height: self.viewport.height(),
                scroll_offset: self.viewport.scroll_offset(),
                overscan_rows: self.config.overscan_rows,
                fallback_viewport_height: self.config.fallback_viewport_height,
            });
            self.last_layout = GridLayout { geometry, window };
            self.dirty = false;
        }
        self.last_layout
    }

    /// Computes or returns the cached visible window.
    #[must_use]
    pub fn visible_window(&mut self) -> VisibleWindow {
        self.layout().window
    }

    /// Convenience iterator over realized indices and their rectangles.
    pub fn visible_cells(&mut self) -> impl Iterator<Item = (usize, Rect)> + use<> {
        self.layout().cells()
    }

    /// Realizes the visible part of `items`.
    ///
    /// `render_item` is called exactly once per realized index, in index order,
    /// and each result is wrapped with the rectangle it must be placed at. If
    /// `items.len()` differs from the current item count, the count is updated
    /// first.
    pub fn frame<T, N, F>(&mut self, items: &[T], mut render_item: F) -> GridFrame<N>
    where
        F: FnMut(&T, usize) -> N,
    {
        self.set_item_count(items.len());
        let layout = self.layout();
        let cells: Vec<PositionedCell<N>> = items[layout.window.indices()]
            .iter()
            .zip(layout.window.indices())
            .map(|(item, index)| PositionedCell {
                index,
                rect: layout.geometry.cell_rect(index),
                node: render_item(item, index),
            })
            .collect();
        GridFrame {
            window: layout.window,
            cells,
            content_width: layout.geometry.content_width(),
        }
    }

    /// Largest scroll offset that keeps the viewport inside the content.
    #[must_use]
    pub fn max_scroll_offset(&self) -> f64 {
        max_scroll_offset(
            self.geometry().total_height(self.item_count),
            self.effective_viewport_height(),
        )
    }

    /// Clamps the stored scroll offset so the viewport stays within the content.
    ///
    /// Window computation already clamps internally; this is for hosts that
    /// also want to hard-cap their own scroll position.
    pub fn clamp_scroll_to_content(&mut self) {
        let max = self.max_scroll_offset();
        if self.viewport.scroll_offset() > max {
            self.set_scroll_offset(max);
        }
    }

    /// Returns `true` if item `index` lies fully inside the viewport.
    #[must_use]
    pub fn is_index_fully_visible(&self, index: usize) -> bool {
        if index >= self.item_count {
            return false;
        }
        let rect = self.geometry().cell_rect(index);
        let top = self.viewport.scroll_offset();
        let bottom = top + self.effective_viewport_height();
        rect.y0 >= top && rect.y1 <= bottom
    }

    /// Returns `true` if item `index` overlaps the viewport at all.
    #[must_use]
    pub fn is_index_partially_visible(&self, index: usize) -> bool {
        if index >= self.item_count {
            return false;
        }
        let rect = self.geometry().cell_rect(index);
        let top = self.viewport.scroll_offset();
        let bottom = top + self.effective_viewport_height();
        rect.y1 > top && rect.y0 < bottom
    }

    /// Scrolls so that item `index` is brought into view using the given alignment.
    ///
    /// Indices past the end are clamped to the last item; on an empty grid the
    /// offset resets to zero. The resulting offset is clamped to the content.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) {
        if self.item_count == 0 {
            self.set_scroll_offset(0.0);
            return;
        }
        let rect = self.geometry().cell_rect(index.min(self.item_count - 1));
        let viewport = self.effective_viewport_height();
        let current = self.viewport.scroll_offset();

        let offset = match align {
            ScrollAlign::Start => rect.y0,
            ScrollAlign::End => rect.y1 - viewport,
            ScrollAlign::Center => (rect.y0 + rect.y1) / 2.0 - viewport / 2.0,
            ScrollAlign::Nearest => {
                if rect.y0 >= current && rect.y1 <= current + viewport {
                    current
                } else if rect.y0 < current {
                    rect.y0
                } else {
                    rect.y1 - viewport
                }
            }
        };

        self.set_scroll_offset(offset.clamp(0.0, self.max_scroll_offset()));
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::num::NonZeroUsize;

    use kurbo::{Rect, Size};

    use super::{ScrollAlign, VirtualGrid};
    use crate::{ColumnPolicy, GridConfig, GridInput};

    fn mounted(item_count: usize) -> VirtualGrid {
        let mut grid = VirtualGrid::new(GridConfig::default(), item_count);
        grid.apply(GridInput::Resize(Size::new(1200.0, 800.0)));
        grid
    }

    #[test]
    fn resize_resolves_columns_before_window() {
        let mut grid = VirtualGrid::new(GridConfig::default(), 1000);
        assert_eq!(grid.columns().get(), 1);

        assert!(grid.apply(GridInput::Resize(Size::new(1200.0, 800.0))));
        assert_eq!(grid.columns().get(), 4);

        let layout = grid.layout();
        assert_eq!(layout.geometry.columns().get(), 4);
        assert_eq!(layout.geometry.item_width(), 288.0);
        assert_eq!(layout.window.start, 0);
        assert_eq!(layout.window.end, 36);
    }

    #[test]
    fn unmeasured_container_still_renders_one_column() {
        let mut grid = VirtualGrid::new(GridConfig::default(), 50);
        let layout = grid.layout();
        assert_eq!(layout.geometry.columns().get(), 1);
        assert_eq!(layout.geometry.item_width(), 0.0);
        // Fallback viewport of 800: 3 rows + 1 guard + 5 overscan.
        assert_eq!(layout.window.indices(), 0..9);
    }

    #[test]
    fn scroll_moves_the_window() {
        let mut grid = mounted(1000);
        grid.set_scroll_offset(20.0 * 296.0);
        let window = grid.visible_window();
        assert_eq!(window.start, 15 * 4);
        assert_eq!(window.end, 29 * 4);

        grid.scroll_by(-20.0 * 296.0);
        assert_eq!(grid.visible_window().start, 0);
    }

    #[test]
    fn burst_of_inputs_is_last_write_wins() {
        let mut bursty = mounted(1000);
        let changed = bursty.apply_all([
            GridInput::Scroll(100.0),
            GridInput::Resize(Size::new(600.0, 500.0)),
            GridInput::Scroll(9_000.0),
            GridInput::Resize(Size::new(1200.0, 800.0)),
            GridInput::Scroll(2_960.0),
        ]);
        assert!(changed);

        let mut direct = mounted(1000);
        direct.set_scroll_offset(2_960.0);
        assert_eq!(bursty.layout(), direct.layout());
    }

    #[test]
    fn unchanged_inputs_do_not_dirty_the_layout() {
        let mut grid = mounted(100);
        let _ = grid.layout();
        assert!(!grid.apply(GridInput::Resize(Size::new(1200.0, 800.0))));
        assert!(!grid.apply(GridInput::Scroll(0.0)));
        // Width change inside the same column band still changes geometry.
        assert!(grid.apply(GridInput::Resize(Size::new(1210.0, 800.0))));
        assert_eq!(grid.columns().get(), 4);
        assert_eq!(grid.layout().geometry.item_width(), (1210.0 - 48.0) / 4.0);
    }

    #[test]
    fn frame_renders_each_visible_item_once() {
        let items: Vec<u32> = (0..100).collect();
        let mut grid = VirtualGrid::new(GridConfig::default(), 0);
        grid.apply(GridInput::Resize(Size::new(1200.0, 800.0)));

        let mut calls = 0;
        let frame = grid.frame(&items, |item, index| {
            calls += 1;
            assert_eq!(*item as usize, index);
            *item * 10
        });

        assert_eq!(grid.item_count(), 100);
        assert_eq!(calls, 36);
        assert_eq!(frame.cells.len(), 36);
        assert_eq!(frame.cells[5].index, 5);
        assert_eq!(frame.cells[5].node, 50);
        assert_eq!(frame.cells[5].rect, Rect::new(304.0, 296.0, 592.0, 576.0));
        assert_eq!(frame.content_size(), Size::new(1200.0, 25.0 * 296.0 - 16.0));
        assert_eq!(frame.nodes().count(), 36);
    }

    #[test]
    fn empty_collection_renders_nothing() {
        let items: [u8; 0] = [];
        let mut grid = mounted(10);
        let frame = grid.frame(&items, |_, _| ());
        assert!(frame.is_empty());
        assert_eq!(frame.total_height(), 0.0);
        assert_eq!(grid.visible_cells().count(), 0);
    }

    #[test]
    fn clamp_scroll_to_content_caps_offset() {
        // 10 items in 4 columns: 3 rows, 872px of content, 800px viewport.
        let mut grid = mounted(10);
        grid.set_scroll_offset(500.0);
        grid.clamp_scroll_to_content();
        assert_eq!(grid.scroll_offset(), 72.0);

        // Content shorter than the viewport clamps to zero.
        let mut grid = mounted(4);
        grid.set_scroll_offset(50.0);
        grid.clamp_scroll_to_content();
        assert_eq!(grid.scroll_offset(), 0.0);
    }

    #[test]
    fn scroll_to_index_alignment_behaves_as_expected() {
        let mut grid = mounted(1000);

        // Index 40 is the first cell of row 10 → top at 2960.
        grid.scroll_to_index(40, ScrollAlign::Start);
        assert_eq!(grid.scroll_offset(), 2960.0);

        grid.scroll_to_index(41, ScrollAlign::End);
        assert_eq!(grid.scroll_offset(), 2960.0 + 280.0 - 800.0);

        grid.scroll_to_index(42, ScrollAlign::Center);
        assert_eq!(grid.scroll_offset(), 2960.0 + 140.0 - 400.0);

        let before = grid.scroll_offset();
        grid.scroll_to_index(43, ScrollAlign::Nearest);
        assert_eq!(grid.scroll_offset(), before);

        // Past the end: clamped to the last item and the last page.
        grid.scroll_to_index(5_000, ScrollAlign::Start);
        assert_eq!(grid.scroll_offset(), grid.max_scroll_offset());
    }

    #[test]
    fn visibility_queries_follow_scroll() {
        let mut grid = mounted(100);
        assert!(grid.is_index_fully_visible(0));
        assert!(grid.is_index_fully_visible(7));
        assert!(!grid.is_index_fully_visible(8));
        assert!(grid.is_index_partially_visible(8));
        assert!(!grid.is_index_partially_visible(12));
        assert!(!grid.is_index_partially_visible(100));

        grid.set_scroll_offset(300.0);
        assert!(!grid.is_index_partially_visible(0));
        assert!(grid.is_index_partially_visible(12));
    }

    #[test]
    fn fixed_columns_ignore_container_width() {
        let config = GridConfig {
            columns: ColumnPolicy::Fixed(NonZeroUsize::new(3).unwrap()),
            ..GridConfig::default()
        };
        let mut grid = VirtualGrid::new(config, 30);
        grid.apply(GridInput::Resize(Size::new(1200.0, 800.0)));
        assert_eq!(grid.columns().get(), 3);
        assert_eq!(grid.layout().geometry.item_width(), (1200.0 - 32.0) / 3.0);

        grid.set_config(GridConfig::default());
        assert_eq!(grid.columns().get(), 4);
    }
}
