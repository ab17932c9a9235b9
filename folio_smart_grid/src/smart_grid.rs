// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing a collection to exactly one rendering path.

use crate::{ContentDensity, RenderStrategy, ThresholdTable, select_strategy};

/// Host-side rendering for the four paths a [`SmartGrid`] can take.
///
/// The grid never inspects items; it only decides which of these methods to
/// call. Implementations typically render [`regular`](Self::regular) as a
/// flow layout of every item and [`virtualized`](Self::virtualized) by driving
/// a [`folio_grid::VirtualGrid`] and inserting its [`folio_grid::GridFrame`].
pub trait GridRenderer<T> {
    /// Rendered output, for example a node in the host's view tree.
    type Node;

    /// Placeholder shown while the collection is loading.
    fn loading(&mut self) -> Self::Node;

    /// Placeholder shown for a loaded, empty collection.
    ///
    /// Returning `None` (the default) means there is no empty state; the
    /// empty collection is then handed to [`regular`](Self::regular).
    fn empty(&mut self) -> Option<Self::Node> {
        None
    }

    /// Renders every item through the host's normal layout.
    fn regular(&mut self, items: &[T]) -> Self::Node;

    /// Renders the collection through the virtualization pipeline.
    fn virtualized(&mut self, items: &[T]) -> Self::Node;
}

/// Chooses between placeholder, flow-layout, and virtualized rendering.
///
/// A `SmartGrid` is a stateless view over one render's inputs. It owns no
/// geometry; the decision is [`select_strategy`] over the item count, the
/// threshold, and the loading flag.
#[derive(Debug, Clone, Copy)]
pub struct SmartGrid<'a, T> {
    items: &'a [T],
    threshold: usize,
    is_loading: bool,
}

impl<'a, T> SmartGrid<'a, T> {
    /// Creates a grid that virtualizes above `threshold` items.
    #[must_use]
    pub const fn new(items: &'a [T], threshold: usize) -> Self {
        Self {
            items,
            threshold,
            is_loading: false,
        }
    }

    /// Creates a grid whose threshold comes from `table` for `density`.
    #[must_use]
    pub const fn for_density(
        items: &'a [T],
        density: ContentDensity,
        table: &ThresholdTable,
    ) -> Self {
        Self::new(items, table.get(density))
    }

    /// Sets whether the collection is still loading.
    #[must_use]
    pub const fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    /// Returns the items.
    #[must_use]
    pub const fn items(&self) -> &'a [T] {
        self.items
    }

    /// Returns the virtualization threshold.
    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    /// Returns whether the collection is loading.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Returns the path [`render`](Self::render) will take.
    #[must_use]
    pub const fn strategy(&self) -> RenderStrategy {
        select_strategy(self.items.len(), self.threshold, self.is_loading)
    }

    /// Renders through exactly one of the renderer's methods.
    pub fn render<R>(&self, renderer: &mut R) -> R::Node
    where
        R: GridRenderer<T>,
    {
        let strategy = self.strategy();
        strace!(
            ?strategy,
            len = self.items.len(),
            threshold = self.threshold,
            "selected render strategy"
        );
        match strategy {
            RenderStrategy::Loading => renderer.loading(),
            RenderStrategy::Empty => renderer
                .empty()
                .unwrap_or_else(|| renderer.regular(self.items)),
            RenderStrategy::Regular => renderer.regular(self.items),
            RenderStrategy::Virtual => renderer.virtualized(self.items),
        }
    }
}
