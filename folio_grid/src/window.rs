// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible window computation over a row-major grid.

use core::num::NonZeroUsize;
use core::ops::Range;

use crate::config::MIN_ITEM_HEIGHT;
use crate::util::{ceil_to_usize, floor_to_usize, non_negative};

/// Inputs to [`compute_window`].
///
/// Every field is clamped before use, so any combination of values produces a
/// valid [`VisibleWindow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowInput {
    /// Number of items in the collection.
    pub item_count: usize,
    /// Number of columns per row.
    pub columns: NonZeroUsize,
    /// Height of every item.
    pub item_height: f64,
    /// Gap between rows.
    pub gap: f64,
    /// Measured viewport height. `0.0` means "not measured yet".
    pub viewport_height: f64,
    /// Current scroll offset from the top of the grid.
    pub scroll_offset: f64,
    /// Whole rows realized before and after the visible rows.
    pub overscan_rows: usize,
    /// Viewport height used while `viewport_height` is `0.0`.
    pub fallback_viewport_height: f64,
}

/// The slice of a grid that must be realized, plus the grid's full height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleWindow {
    /// First realized index (inclusive).
    pub start: usize,
    /// One past the last realized index (exclusive).
    pub end: usize,
    /// Height of the whole grid, all rows included, without a trailing gap.
    pub total_height: f64,
}

impl VisibleWindow {
    /// An empty window over an empty grid.
    pub const EMPTY: Self = Self {
        start: 0,
        end: 0,
        total_height: 0.0,
    };

    /// Returns `true` if no items are realized.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of realized items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Realized indices as a range.
    #[must_use]
    pub const fn indices(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Realized rows as a range, for a grid with `columns` columns.
    #[must_use]
    pub const fn rows(&self, columns: NonZeroUsize) -> Range<usize> {
        self.start / columns.get()..self.end.div_ceil(columns.get())
    }

    /// Returns `true` if `index` is realized.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }
}

/// Largest scroll offset that keeps the viewport inside the content.
#[must_use]
pub fn max_scroll_offset(total_height: f64, viewport_height: f64) -> f64 {
    (non_negative(total_height) - non_negative(viewport_height)).max(0.0)
}

/// Computes which items of a row-major grid must be realized.
///
/// With `row_height = item_height + gap`:
///
/// - the scroll offset is clamped to `[0, total_height - viewport]`, so an
///   overscroll bounce never asks for rows past the end,
/// - `first = floor(scroll / row_height)` and
///   `last = first + ceil(viewport / row_height) + 1`, the extra row covering
///   a partially visible trailing row,
/// - overscan widens both edges by whole rows, clamped to the grid,
/// - rows convert back to indices as `start = start_row * columns` and
///   `end = min(end_row * columns, item_count)`.
///
/// An unmeasured viewport (`viewport_height == 0.0`) is replaced by
/// `fallback_viewport_height`; even when both are zero the first row is
/// realized.
#[must_use]
pub fn compute_window(input: WindowInput) -> VisibleWindow {
    let item_count = input.item_count;
    if item_count == 0 {
        return VisibleWindow::EMPTY;
    }

    let columns = input.columns.get();
    let gap = non_negative(input.gap);
    let item_height = non_negative(input.item_height).max(MIN_ITEM_HEIGHT);
    let row_height = item_height + gap;

    let total_rows = item_count.div_ceil(columns);
    let total_height = (total_rows as f64 * row_height - gap).max(0.0);

    let measured = non_negative(input.viewport_height);
    let viewport = if measured > 0.0 {
        measured
    } else {
        non_negative(input.fallback_viewport_height)
    };
    let scroll = non_negative(input.scroll_offset).min(max_scroll_offset(total_height, viewport));

    let first_visible_row = floor_to_usize(scroll / row_height).min(total_rows - 1);
    let last_visible_row = first_visible_row
        .saturating_add(ceil_to_usize(viewport / row_height))
        .saturating_add(1);

    let start_row = first_visible_row.saturating_sub(input.overscan_rows);
    let end_row = last_visible_row
        .saturating_add(input.overscan_rows)
        .min(total_rows);

    let start = start_row.saturating_mul(columns).min(item_count);
    let end = end_row.saturating_mul(columns).min(item_count);

    gtrace!(
        item_count,
        columns,
        scroll,
        viewport,
        start,
        end,
        "computed visible window"
    );

    VisibleWindow {
        start,
        end,
        total_height,
    }
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroUsize;

    use proptest::prelude::*;

    use super::{VisibleWindow, WindowInput, compute_window, max_scroll_offset};

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn input(item_count: usize, columns: usize, scroll_offset: f64) -> WindowInput {
        WindowInput {
            item_count,
            columns: nz(columns),
            item_height: 280.0,
            gap: 16.0,
            viewport_height: 800.0,
            scroll_offset,
            overscan_rows: 5,
            fallback_viewport_height: 800.0,
        }
    }

    #[test]
    fn top_of_large_grid() {
        let window = compute_window(input(1000, 4, 0.0));
        assert_eq!(window.start, 0);
        // 3 visible rows + 1 partial guard + 5 overscan = 9 rows → 36 items.
        assert_eq!(window.end, 36);
        assert!(window.end >= 32);
        assert_eq!(window.total_height, 250.0 * 296.0 - 16.0);
    }

    #[test]
    fn empty_grid_yields_empty_window() {
        assert_eq!(compute_window(input(0, 4, 0.0)), VisibleWindow::EMPTY);
        assert_eq!(compute_window(input(0, 4, 5000.0)), VisibleWindow::EMPTY);
    }

    #[test]
    fn middle_of_grid_overscans_both_edges() {
        // Scroll to the top of row 20.
        let window = compute_window(input(1000, 4, 20.0 * 296.0));
        assert_eq!(window.start, 15 * 4);
        assert_eq!(window.end, (20 + 3 + 1 + 5) * 4);
        assert_eq!(window.rows(nz(4)), 15..29);
    }

    #[test]
    fn unmeasured_viewport_uses_fallback() {
        let mut unmeasured = input(1000, 1, 0.0);
        unmeasured.viewport_height = 0.0;
        let window = compute_window(unmeasured);
        assert_eq!(window.start, 0);
        assert_eq!(window.end, 3 + 1 + 5);

        // No fallback either: the first row is still realized.
        unmeasured.fallback_viewport_height = 0.0;
        unmeasured.overscan_rows = 0;
        let window = compute_window(unmeasured);
        assert_eq!(window.indices(), 0..1);
    }

    #[test]
    fn overscroll_is_clamped_to_last_page() {
        let total = compute_window(input(100, 4, 0.0)).total_height;
        let max = max_scroll_offset(total, 800.0);

        let at_end = compute_window(input(100, 4, max));
        let bounced = compute_window(input(100, 4, max + 10_000.0));
        assert_eq!(at_end, bounced);
        assert_eq!(bounced.end, 100);
        assert!(!bounced.is_empty());

        // Negative bounce at the top behaves like offset zero.
        assert_eq!(
            compute_window(input(100, 4, -120.0)),
            compute_window(input(100, 4, 0.0))
        );
    }

    #[test]
    fn partial_last_row_is_capped_at_item_count() {
        let window = compute_window(input(10, 4, 0.0));
        assert_eq!(window.indices(), 0..10);
        assert_eq!(window.len(), 10);
        assert_eq!(window.total_height, 3.0 * 296.0 - 16.0);
        assert!(window.contains(9));
        assert!(!window.contains(10));
    }

    #[test]
    fn degenerate_item_height_does_not_divide_by_zero() {
        let mut degenerate = input(50, 2, 0.0);
        degenerate.item_height = 0.0;
        degenerate.gap = 0.0;
        let window = compute_window(degenerate);
        assert!(window.end <= 50);
        assert!(window.start <= window.end);
        assert_eq!(window.total_height, 25.0);
    }

    fn arb_input() -> impl Strategy<Value = WindowInput> {
        (
            0_usize..5_000,
            1_usize..10,
            1.0_f64..600.0,
            0.0_f64..48.0,
            0.0_f64..2_000.0,
            -500.0_f64..2_000_000.0,
            0_usize..10,
        )
            .prop_map(
                |(item_count, columns, item_height, gap, viewport_height, scroll_offset, overscan_rows)| {
                    WindowInput {
                        item_count,
                        columns: nz(columns),
                        item_height,
                        gap,
                        viewport_height,
                        scroll_offset,
                        overscan_rows,
                        fallback_viewport_height: 800.0,
                    }
                },
            )
    }

    proptest! {
        #[test]
        fn window_stays_in_bounds(input in arb_input()) {
            let window = compute_window(input);
            prop_assert!(window.start <= window.end);
            prop_assert!(window.end <= input.item_count);
            prop_assert!(window.total_height >= 0.0);
            if input.item_count > 0 {
                prop_assert!(!window.is_empty());
            }
        }

        #[test]
        fn window_covers_every_intersecting_row(input in arb_input()) {
            let window = compute_window(input);
            let row_height = input.item_height + input.gap;
            let viewport = if input.viewport_height > 0.0 {
                input.viewport_height
            } else {
                input.fallback_viewport_height
            };
            // The host's raw offset, including overscroll past either end.
            let scroll = input.scroll_offset;
            let columns = input.columns.get();
            let total_rows = input.item_count.div_ceil(columns);
            for row in 0..total_rows {
                let top = row as f64 * row_height;
                let bottom = top + input.item_height;
                if bottom > scroll && top < scroll + viewport {
                    let first = row * columns;
                    let last = ((row + 1) * columns).min(input.item_count) - 1;
                    prop_assert!(window.contains(first), "row {} start not realized", row);
                    prop_assert!(window.contains(last), "row {} end not realized", row);
                }
            }
        }

        #[test]
        fn window_starts_and_ends_on_row_boundaries(input in arb_input()) {
            let window = compute_window(input);
            let columns = input.columns.get();
            prop_assert_eq!(window.start % columns, 0);
            prop_assert!(
                window.end.is_multiple_of(columns) || window.end == input.item_count
            );
        }

        #[test]
        fn window_is_deterministic(input in arb_input()) {
            prop_assert_eq!(compute_window(input), compute_window(input));
        }
    }
}
