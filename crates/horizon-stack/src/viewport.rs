//! The scrollable window onto the stack's content.
//!
//! The viewport only keeps geometry: where it is scrolled to, how large it
//! is, how large the content behind it is, and the content inset the host
//! reserves at its edges. Scroll physics belong to the platform.

use horizon_stack_core::logging::targets;
use horizon_stack_core::{EdgeInsets, Point, Rect, Size};

use crate::geometry::Axis;

/// Scroll geometry of a stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    offset: Point,
    size: Size,
    content_size: Size,
    content_inset: EdgeInsets,
    indicator_flashes: u32,
}

impl Viewport {
    pub fn new(size: Size) -> Self {
        Self {
            offset: Point::ZERO,
            size,
            content_size: Size::ZERO,
            content_inset: EdgeInsets::ZERO,
            indicator_flashes: 0,
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Current scroll offset.
    pub fn offset(&self) -> Point {
        self.offset
    }

    pub(crate) fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Size of everything that can be scrolled into view.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Update the content size, pulling the offset back if the content
    /// shrank underneath it. Returns whether the offset moved.
    pub(crate) fn set_content_size(&mut self, size: Size, axis: Axis) -> bool {
        self.content_size = size;
        let position = axis.position(self.offset);
        let min = -axis.leading_inset(self.content_inset);
        let max = (axis.main(size) - axis.main(self.size) + axis.trailing_inset(self.content_inset))
            .max(min);
        if position > max {
            self.offset = axis.with_position(self.offset, max);
            return true;
        }
        false
    }

    /// Space the host reserves around the content.
    pub fn content_inset(&self) -> EdgeInsets {
        self.content_inset
    }

    pub(crate) fn set_content_inset(&mut self, inset: EdgeInsets) {
        self.content_inset = inset;
    }

    /// The visible region in content coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.offset, self.size)
    }

    /// Largest offset along `axis` that still keeps the viewport filled.
    pub fn max_offset(&self, axis: Axis) -> f32 {
        (axis.main(self.content_size) - axis.main(self.size)).max(0.0)
    }

    /// Clamp `value` to `0..=max_offset(axis)`.
    pub fn clamp_offset(&self, axis: Axis, value: f32) -> f32 {
        value.clamp(0.0, self.max_offset(axis))
    }

    /// The smallest scroll that brings `rect` fully into view along `axis`.
    ///
    /// A rect already in view leaves the offset unchanged. A rect longer than
    /// the viewport is aligned to its leading edge.
    pub fn offset_to_reveal(&self, rect: Rect, axis: Axis) -> Point {
        let current = axis.position(self.offset);
        let visible = axis.main(self.size);
        let leading = axis.position(rect.origin);
        let trailing = leading + axis.main(rect.size);

        let target = if leading < current || trailing - leading > visible {
            leading
        } else if trailing > current + visible {
            trailing - visible
        } else {
            current
        };

        axis.with_position(self.offset, self.clamp_offset(axis, target))
    }

    // =========================================================================
    // Scroll Indicators
    // =========================================================================

    /// Briefly show the scroll indicators.
    pub fn flash_scroll_indicators(&mut self) {
        self.indicator_flashes += 1;
        tracing::trace!(
            target: targets::HOST,
            flashes = self.indicator_flashes,
            "flashing scroll indicators"
        );
    }

    /// How many times the indicators were flashed.
    pub fn indicator_flash_count(&self) -> u32 {
        self.indicator_flashes
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}
