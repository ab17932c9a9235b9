// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column resolution for responsive grids.
//!
//! [`resolve_columns`] is the pure core: it picks the largest column count that
//! keeps every column at least `min_item_width` wide, bounded to
//! `1..=max_columns`. [`ColumnResolver`] wraps it for hosts that observe
//! container resizes and only want to hear about widths that change the
//! column count.

use core::num::NonZeroUsize;

use crate::util::{floor_to_usize, non_negative};

/// How a grid decides its column count.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnPolicy {
    /// Always use this many columns, regardless of container width.
    Fixed(NonZeroUsize),
    /// Fit as many columns as possible, each at least `min_item_width` wide,
    /// up to `max_columns`.
    Responsive {
        /// Minimum width of a single column in logical pixels.
        min_item_width: f64,
        /// Upper bound on the number of columns. `0` is treated as `1`.
        max_columns: usize,
    },
}

impl ColumnPolicy {
    /// Resolves the column count for a container of the given width.
    #[must_use]
    pub fn columns_for(&self, container_width: f64, gap: f64) -> NonZeroUsize {
        match *self {
            Self::Fixed(columns) => columns,
            Self::Responsive {
                min_item_width,
                max_columns,
            } => resolve_columns(container_width, min_item_width, max_columns, gap),
        }
    }
}

impl Default for ColumnPolicy {
    fn default() -> Self {
        Self::Responsive {
            min_item_width: 280.0,
            max_columns: 4,
        }
    }
}

/// Returns the number of columns that fit `container_width`.
///
/// The candidate is `floor((container_width - gap) / (min_item_width + gap))`,
/// clamped into `1..=max_columns`. A container that is too narrow (or not yet
/// measured, with width `0.0`) still yields a single column.
///
/// Inputs are clamped rather than rejected: negative or NaN widths and gaps
/// count as zero and `max_columns == 0` behaves like `1`. If both
/// `min_item_width` and `gap` are zero, every column fits and the result is
/// `max_columns`.
#[must_use]
pub fn resolve_columns(
    container_width: f64,
    min_item_width: f64,
    max_columns: usize,
    gap: f64,
) -> NonZeroUsize {
    let max_columns = max_columns.max(1);
    let container_width = non_negative(container_width);
    let min_item_width = non_negative(min_item_width);
    let gap = non_negative(gap);

    let stride = min_item_width + gap;
    let candidate = if stride > 0.0 {
        floor_to_usize((container_width - gap) / stride)
    } else {
        max_columns
    };

    NonZeroUsize::new(candidate.clamp(1, max_columns)).unwrap_or(NonZeroUsize::MIN)
}

/// Width of a single item when `columns` share `container_width` with `gap`
/// between neighbors.
///
/// The result is `(container_width - (columns - 1) * gap) / columns`, clamped
/// to be non-negative.
#[must_use]
pub fn item_width_for(container_width: f64, columns: NonZeroUsize, gap: f64) -> f64 {
    let columns = columns.get() as f64;
    let gutters = (columns - 1.0) * non_negative(gap);
    non_negative((non_negative(container_width) - gutters) / columns)
}

/// Resize-observation wrapper around a [`ColumnPolicy`].
///
/// Hosts feed every measured container width into
/// [`observe_width`](Self::observe_width); only widths that change the resolved
/// column count are reported back, so downstream layout can skip work when a
/// resize does not cross a column boundary.
#[derive(Debug, Clone)]
pub struct ColumnResolver {
    policy: ColumnPolicy,
    gap: f64,
    width: f64,
    columns: NonZeroUsize,
}

impl ColumnResolver {
    /// Creates a resolver for an unmeasured (zero-width) container.
    #[must_use]
    pub fn new(policy: ColumnPolicy, gap: f64) -> Self {
        let gap = non_negative(gap);
        Self {
            policy,
            gap,
            width: 0.0,
            columns: policy.columns_for(0.0, gap),
        }
    }

    /// Returns the column policy.
    #[must_use]
    pub const fn policy(&self) -> ColumnPolicy {
        self.policy
    }

    /// Returns the gap between columns.
    #[must_use]
    pub const fn gap(&self) -> f64 {
        self.gap
    }

    /// Returns the last observed container width.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Returns the current column count.
    #[must_use]
    pub const fn columns(&self) -> NonZeroUsize {
        self.columns
    }

    /// Returns the current item width derived from the observed width.
    #[must_use]
    pub fn item_width(&self) -> f64 {
        item_width_for(self.width, self.columns, self.gap)
    }

    /// Records a new container width.
    ///
    /// Returns `Some(columns)` if the column count changed, `None` otherwise.
    pub fn observe_width(&mut self, width: f64) -> Option<NonZeroUsize> {
        self.width = non_negative(width);
        self.refresh()
    }

    /// Replaces the policy and gap, re-resolving against the last observed width.
    ///
    /// Returns `Some(columns)` if the column count changed.
    pub fn set_policy(&mut self, policy: ColumnPolicy, gap: f64) -> Option<NonZeroUsize> {
        self.policy = policy;
        self.gap = non_negative(gap);
        self.refresh()
    }

    fn refresh(&mut self) -> Option<NonZeroUsize> {
        let columns = self.policy.columns_for(self.width, self.gap);
        if columns == self.columns {
            return None;
        }
        gdebug!(
            from = self.columns.get(),
            to = columns.get(),
            width = self.width,
            "column count changed"
        );
        self.columns = columns;
        Some(columns)
    }
}
