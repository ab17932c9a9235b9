// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render strategy decision.

/// Which rendering path a grid takes for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderStrategy {
    /// Data is still loading; show the loading placeholder.
    Loading,
    /// Loaded, but there are no items; show the empty-state placeholder.
    Empty,
    /// Few enough items to let the host lay out all of them directly.
    Regular,
    /// Too many items: realize only the visible window.
    Virtual,
}

impl RenderStrategy {
    /// Returns `true` for the two paths that render items.
    #[must_use]
    pub const fn renders_items(self) -> bool {
        matches!(self, Self::Regular | Self::Virtual)
    }
}

/// Chooses the rendering path for a collection of `len` items.
///
/// Loading takes precedence over empty, and empty over content. Among content
/// paths, `len > threshold` selects [`RenderStrategy::Virtual`]; anything up to
/// and including `threshold` selects [`RenderStrategy::Regular`].
#[must_use]
pub const fn select_strategy(len: usize, threshold: usize, is_loading: bool) -> RenderStrategy {
    if is_loading {
        RenderStrategy::Loading
    } else if len == 0 {
        RenderStrategy::Empty
    } else if len > threshold {
        RenderStrategy::Virtual
    } else {
        RenderStrategy::Regular
    }
}
