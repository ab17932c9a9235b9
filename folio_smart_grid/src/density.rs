// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Virtualization thresholds keyed by how expensive each item is to render.

/// Relative per-item render cost of a collection.
///
/// Cheap rows tolerate many more simultaneously mounted nodes than
/// image-heavy, animated cards before frame time degrades, so each density
/// gets its own virtualization threshold in a [`ThresholdTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ContentDensity {
    /// Plain text rows, such as folder listings.
    Compact,
    /// Regular cards with a title, a summary, and a few badges, such as
    /// entity and template cards.
    #[default]
    Standard,
    /// Cards with cover images and hover animations, such as world cards.
    Rich,
}

impl ContentDensity {
    /// All densities, from cheapest to most expensive.
    pub const ALL: [Self; 3] = [Self::Compact, Self::Standard, Self::Rich];
}

/// Item counts above which a collection is virtualized, one per [`ContentDensity`].
///
/// A collection is virtualized when `len > threshold`; a collection of exactly
/// `threshold` items still uses the flow layout. The table is plain data:
/// hosts start from [`ThresholdTable::DEFAULT`] and override entries (or load
/// the whole table with the `serde` feature) without touching the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThresholdTable {
    /// Threshold for [`ContentDensity::Compact`].
    pub compact: usize,
    /// Threshold for [`ContentDensity::Standard`].
    pub standard: usize,
    /// Threshold for [`ContentDensity::Rich`].
    pub rich: usize,
}

impl ThresholdTable {
    /// Thresholds tuned for the default card designs.
    pub const DEFAULT: Self = Self {
        compact: 200,
        standard: 50,
        rich: 20,
    };

    /// Returns the threshold for `density`.
    #[must_use]
    pub const fn get(&self, density: ContentDensity) -> usize {
        match density {
            ContentDensity::Compact => self.compact,
            ContentDensity::Standard => self.standard,
            ContentDensity::Rich => self.rich,
        }
    }

    /// Returns a copy with the threshold for `density` replaced.
    #[must_use]
    pub const fn with(mut self, density: ContentDensity, threshold: usize) -> Self {
        match density {
            ContentDensity::Compact => self.compact = threshold,
            ContentDensity::Standard => self.standard = threshold,
            ContentDensity::Rich => self.rich = threshold,
        }
        self
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}
