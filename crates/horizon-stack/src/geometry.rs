//! Axis handling and sizing primitives.
//!
//! The stack lays rows out edge-to-edge along its [`Axis`]. Everything that
//! needs to read or build a size "along the axis" goes through the helpers
//! here so that vertical and horizontal stacks share one code path.

use horizon_stack_core::{EdgeInsets, Point, Size};
use serde::{Deserialize, Serialize};

/// The stacking (and scrolling) direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Rows are arranged left to right.
    Horizontal,
    /// Rows are arranged top to bottom.
    #[default]
    Vertical,
}

impl Axis {
    /// Get the cross (perpendicular) axis.
    #[inline]
    pub fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Get the component of a size that runs along this axis.
    #[inline]
    pub fn main(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Get the component of a size that runs across this axis.
    #[inline]
    pub fn cross_extent(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    /// Create a size from main and cross axis values.
    #[inline]
    pub fn make_size(self, main: f32, cross: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// Get the coordinate of a point along this axis.
    #[inline]
    pub fn position(self, point: Point) -> f32 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    /// Replace the coordinate of a point along this axis.
    #[inline]
    pub fn with_position(self, point: Point, value: f32) -> Point {
        match self {
            Axis::Horizontal => Point::new(value, point.y),
            Axis::Vertical => Point::new(point.x, value),
        }
    }

    /// Inset on the leading edge along this axis (top or left).
    #[inline]
    pub fn leading_inset(self, insets: EdgeInsets) -> f32 {
        match self {
            Axis::Horizontal => insets.left,
            Axis::Vertical => insets.top,
        }
    }

    /// Inset on the trailing edge along this axis (bottom or right).
    #[inline]
    pub fn trailing_inset(self, insets: EdgeInsets) -> f32 {
        match self {
            Axis::Horizontal => insets.right,
            Axis::Vertical => insets.bottom,
        }
    }

    /// Total inset along this axis.
    #[inline]
    pub fn main_insets(self, insets: EdgeInsets) -> f32 {
        self.leading_inset(insets) + self.trailing_inset(insets)
    }

    /// Total inset across this axis.
    #[inline]
    pub fn cross_insets(self, insets: EdgeInsets) -> f32 {
        self.cross().main_insets(insets)
    }
}

/// The answer a content unit gives when asked for its preferred size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeSpec {
    /// Pin the extent along the stack axis to an exact value.
    Fixed(f32),
    /// Measure the content once against the available cross extent, then pin
    /// the measured value.
    FitLayout,
}

/// How strongly a dimension is held while measuring fitting size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FittingPriority {
    /// The dimension may grow or shrink to the content's natural extent.
    #[default]
    Low,
    /// The dimension must equal the target extent.
    Required,
}

/// Size hints a content view reports for intrinsic layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeHint {
    /// The preferred size for the content to display optimally.
    pub preferred: Size,

    /// The minimum acceptable size. If `None`, the content has no minimum
    /// constraint (can shrink to zero).
    pub minimum: Option<Size>,

    /// The maximum size the content should be. If `None`, the content has no
    /// maximum constraint (can grow indefinitely).
    pub maximum: Option<Size>,
}

impl Default for SizeHint {
    fn default() -> Self {
        Self {
            preferred: Size::ZERO,
            minimum: None,
            maximum: None,
        }
    }
}

impl SizeHint {
    /// Create a new size hint with the specified preferred size.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: None,
            maximum: None,
        }
    }

    /// Create a size hint with explicit width and height.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    /// Set the minimum size.
    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Set the maximum size.
    pub fn with_maximum(mut self, maximum: Size) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Get the effective minimum size (returns zero if not set).
    pub fn effective_minimum(&self) -> Size {
        self.minimum.unwrap_or(Size::ZERO)
    }

    /// Get the effective maximum size (returns a very large size if not set).
    pub fn effective_maximum(&self) -> Size {
        self.maximum.unwrap_or(Size::new(f32::MAX, f32::MAX))
    }

    /// Constrain a size to be within the minimum and maximum bounds.
    pub fn constrain(&self, size: Size) -> Size {
        let min = self.effective_minimum();
        let max = self.effective_maximum();

        Size::new(
            size.width.clamp(min.width, max.width.max(min.width)),
            size.height.clamp(min.height, max.height.max(min.height)),
        )
    }
}

/// A fixed extent the stack pinned on a row's content along an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeConstraint {
    /// The axis the extent was measured along.
    pub axis: Axis,
    /// The pinned extent.
    pub extent: f32,
}

impl SizeConstraint {
    pub fn new(axis: Axis, extent: f32) -> Self {
        Self {
            axis,
            extent: extent.max(0.0),
        }
    }

    /// The pinned extent if it applies to `axis`.
    #[inline]
    pub fn extent_along(&self, axis: Axis) -> Option<f32> {
        (self.axis == axis).then_some(self.extent)
    }
}

/// The single constraint tying the stack's cross extent to the viewport.
///
/// A vertical stack is as wide as its viewport and grows downward; a
/// horizontal stack is as tall as its viewport and grows to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisConstraint {
    /// Stack width equals viewport width.
    WidthMatchesViewport,
    /// Stack height equals viewport height.
    HeightMatchesViewport,
}

impl AxisConstraint {
    /// Build the constraint for a stacking axis.
    pub fn for_axis(axis: Axis) -> Self {
        match axis {
            Axis::Vertical => AxisConstraint::WidthMatchesViewport,
            Axis::Horizontal => AxisConstraint::HeightMatchesViewport,
        }
    }

    /// The cross extent the constraint imposes given a viewport size.
    pub fn cross_extent(self, viewport: Size) -> f32 {
        match self {
            AxisConstraint::WidthMatchesViewport => viewport.width,
            AxisConstraint::HeightMatchesViewport => viewport.height,
        }
    }
}
