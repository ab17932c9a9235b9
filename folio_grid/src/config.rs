// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-supplied grid configuration.

use crate::ColumnPolicy;
use crate::util::non_negative;

/// Smallest row extent the engine will lay out, in logical pixels.
pub const MIN_ITEM_HEIGHT: f64 = 1.0;

/// Configuration for a [`VirtualGrid`](crate::VirtualGrid).
///
/// All values are in logical pixels except `overscan_rows`, which counts whole
/// rows. Nothing here is validated eagerly; [`GridConfig::sanitized`] clamps
/// each field to a usable value and the grid always works from the sanitized
/// form.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// How the column count is chosen.
    pub columns: ColumnPolicy,
    /// Height of every item.
    pub item_height: f64,
    /// Gap between neighboring items, both horizontally and vertically.
    pub gap: f64,
    /// Extra rows realized before and after the visible rows.
    pub overscan_rows: usize,
    /// Viewport height assumed while the container has not been measured yet.
    pub fallback_viewport_height: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: ColumnPolicy::default(),
            item_height: 280.0,
            gap: 16.0,
            overscan_rows: 5,
            fallback_viewport_height: 800.0,
        }
    }
}

impl GridConfig {
    /// Returns a copy with every field clamped to a usable value.
    ///
    /// - `item_height` is at least [`MIN_ITEM_HEIGHT`].
    /// - `gap` and `fallback_viewport_height` are finite and non-negative.
    /// - a responsive `max_columns` of `0` becomes `1` and a negative or NaN
    ///   `min_item_width` becomes `0.0`.
    ///
    /// Infinite extents are a host bug: debug builds assert on them, release
    /// builds clamp them like any other out-of-range value.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        debug_assert!(
            !self.item_height.is_infinite(),
            "item_height must not be infinite"
        );
        debug_assert!(!self.gap.is_infinite(), "gap must not be infinite");
        debug_assert!(
            !self.fallback_viewport_height.is_infinite(),
            "fallback_viewport_height must not be infinite"
        );
        let columns = match self.columns {
            ColumnPolicy::Fixed(n) => ColumnPolicy::Fixed(n),
            ColumnPolicy::Responsive {
                min_item_width,
                max_columns,
            } => ColumnPolicy::Responsive {
                min_item_width: non_negative(min_item_width),
                max_columns: max_columns.max(1),
            },
        };
        if let ColumnPolicy::Responsive { min_item_width, .. } = self.columns {
            debug_assert!(
                !min_item_width.is_infinite(),
                "min_item_width must not be infinite"
            );
        }
        Self {
            columns,
            item_height: non_negative(self.item_height).max(MIN_ITEM_HEIGHT),
            gap: non_negative(self.gap),
            overscan_rows: self.overscan_rows,
            fallback_viewport_height: non_negative(self.fallback_viewport_height),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use core::num::NonZeroUsize;

    use super::GridConfig;
    use crate::ColumnPolicy;

    #[test]
    fn partial_document_keeps_defaults() {
        let config: GridConfig = serde_json::from_str(r#"{"gap": 8.0}"#).unwrap();
        assert_eq!(
            config,
            GridConfig {
                gap: 8.0,
                ..GridConfig::default()
            }
        );
    }

    #[test]
    fn empty_document_is_the_default() {
        let config: GridConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn fixed_columns_load_from_json() {
        let config: GridConfig =
            serde_json::from_str(r#"{"columns": {"Fixed": 3}, "overscan_rows": 2}"#).unwrap();
        assert_eq!(config.columns, ColumnPolicy::Fixed(NonZeroUsize::new(3).unwrap()));
        assert_eq!(config.overscan_rows, 2);
        assert_eq!(config.item_height, GridConfig::default().item_height);
    }

    #[test]
    fn zero_fixed_columns_are_rejected() {
        assert!(serde_json::from_str::<GridConfig>(r#"{"columns": {"Fixed": 0}}"#).is_err());
    }

    #[test]
    fn config_survives_json() {
        let config = GridConfig {
            columns: ColumnPolicy::Responsive {
                min_item_width: 200.0,
                max_columns: 6,
            },
            item_height: 120.0,
            gap: 4.0,
            overscan_rows: 1,
            fallback_viewport_height: 600.0,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<GridConfig>(&json).unwrap(), config);
    }
}
