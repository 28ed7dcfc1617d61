//! Row separator decoration.
//!
//! A [`Separator`] is the thin divider drawn along a row's trailing edge. It
//! owns its color, thickness and visibility. Where it sits is decided by the
//! row, which knows the stacking axis and the separator insets.
//!
//! # Example
//!
//! ```
//! use horizon_stack::prelude::*;
//!
//! let separator = Separator::new()
//!     .with_color(Color::from_rgb8(200, 200, 200))
//!     .with_thickness(2.0);
//!
//! assert!(separator.is_visible());
//! assert_eq!(separator.thickness(), 2.0);
//! ```

use horizon_stack_core::{Color, EdgeInsets, Rect};

use crate::config::defaults;
use crate::geometry::Axis;

/// A divider drawn at the trailing edge of a row.
#[derive(Debug, Clone, PartialEq)]
pub struct Separator {
    /// The line color.
    color: Color,

    /// The line thickness in points.
    thickness: f32,

    /// Hidden by the stack's separator policy.
    hidden: bool,

    /// Opacity, tied to the owning row's hidden state.
    alpha: f32,
}

impl Default for Separator {
    fn default() -> Self {
        Self::new()
    }
}

impl Separator {
    /// Create a visible separator with the default color and thickness.
    pub fn new() -> Self {
        Self {
            color: defaults::SEPARATOR_COLOR,
            thickness: defaults::SEPARATOR_THICKNESS,
            hidden: false,
            alpha: 1.0,
        }
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// Get the line color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the line color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Set color using builder pattern.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Get the line thickness.
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Set the line thickness.
    pub fn set_thickness(&mut self, thickness: f32) {
        self.thickness = thickness.max(defaults::MIN_SEPARATOR_THICKNESS);
    }

    /// Set thickness using builder pattern.
    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.set_thickness(thickness);
        self
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Whether the separator policy hides this separator.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Current opacity.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub(crate) fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    /// Whether the separator would actually be drawn.
    pub fn is_visible(&self) -> bool {
        !self.hidden && self.alpha > 0.0
    }

    /// The rectangle the separator covers inside `row_frame`.
    ///
    /// The separator runs along `run_axis` and hugs the trailing edge across
    /// it: the bottom edge for a horizontal run, the right edge for a
    /// vertical one. Only the insets parallel to the run apply.
    pub fn frame_in(&self, row_frame: Rect, run_axis: Axis, insets: EdgeInsets) -> Rect {
        match run_axis {
            Axis::Horizontal => Rect::new(
                row_frame.left() + insets.left,
                row_frame.bottom() - self.thickness,
                (row_frame.width() - insets.horizontal()).max(0.0),
                self.thickness,
            ),
            Axis::Vertical => Rect::new(
                row_frame.right() - self.thickness,
                row_frame.top() + insets.top,
                self.thickness,
                (row_frame.height() - insets.vertical()).max(0.0),
            ),
        }
    }
}
