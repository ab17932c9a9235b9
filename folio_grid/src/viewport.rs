// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-observed viewport state and the inputs that mutate it.

use kurbo::Size;

use crate::util::non_negative;

/// An observation reported by the host environment.
///
/// Hosts subscribe to their platform's resize and scroll notifications and
/// forward each one as a [`GridInput`]. Inputs carry absolute values, so a
/// burst of them can be applied in order and only the last one of each kind
/// matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridInput {
    /// The scroll container was measured at this size.
    Resize(Size),
    /// The scroll container scrolled to this vertical offset.
    Scroll(f64),
}

/// Measured container size and scroll position of one mounted grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    size: Size,
    scroll_offset: f64,
}

impl Viewport {
    /// Creates an unmeasured viewport scrolled to the top.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            size: Size::ZERO,
            scroll_offset: 0.0,
        }
    }

    /// Returns the measured container size. Zero until the first resize.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Returns the measured container width.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.size.width
    }

    /// Returns the measured container height.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.size.height
    }

    /// Returns `true` once the container has reported a non-zero height.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.size.height > 0.0
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Records a new container size. Returns `true` if it changed.
    pub fn set_size(&mut self, size: Size) -> bool {
        let size = Size::new(non_negative(size.width), non_negative(size.height));
        if size == self.size {
            return false;
        }
        self.size = size;
        true
    }

    /// Records a new scroll offset. Returns `true` if it changed.
    ///
    /// Negative offsets from an overscroll bounce are stored as `0.0`.
    pub fn set_scroll_offset(&mut self, offset: f64) -> bool {
        let offset = non_negative(offset);
        if offset == self.scroll_offset {
            return false;
        }
        self.scroll_offset = offset;
        true
    }

    /// Applies one host input. Returns `true` if the viewport changed.
    pub fn apply(&mut self, input: GridInput) -> bool {
        match input {
            GridInput::Resize(size) => self.set_size(size),
            GridInput::Scroll(offset) => self.set_scroll_offset(offset),
        }
    }
}
