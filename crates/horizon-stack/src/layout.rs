//! Linear arrangement of rows.
//!
//! Rows sit edge-to-edge along the stack axis with no spacing between them.
//! Across the axis every row spans the full viewport extent, so a single
//! [`AxisConstraint`] decides the cross size for all rows at once.

use horizon_stack_core::{Rect, Size};

use crate::geometry::{Axis, AxisConstraint};
use crate::row::{Row, RowId};

/// Result of one arrangement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arrangement {
    /// Frame of every row, in order.
    pub frames: Vec<(RowId, Rect)>,
    /// Total size of the laid-out rows.
    pub content_size: Size,
}

impl Arrangement {
    /// Frame assigned to `row`.
    pub fn frame_of(&self, row: RowId) -> Option<Rect> {
        self.frames
            .iter()
            .find(|(id, _)| *id == row)
            .map(|(_, frame)| *frame)
    }
}

/// Places rows along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackLayout {
    axis: Axis,
    constraint: AxisConstraint,
    cross_extent: f32,
}

impl StackLayout {
    /// Create a layout for `axis` inside a viewport of `viewport` size.
    pub fn new(axis: Axis, viewport: Size) -> Self {
        let constraint = AxisConstraint::for_axis(axis);
        Self {
            axis,
            constraint,
            cross_extent: constraint.cross_extent(viewport),
        }
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The constraint tying the rows' cross extent to the viewport.
    #[inline]
    pub fn constraint(&self) -> AxisConstraint {
        self.constraint
    }

    /// Extent every row gets across the axis.
    #[inline]
    pub fn cross_extent(&self) -> f32 {
        self.cross_extent
    }

    /// Lay out `rows` in order starting at the content origin.
    pub fn arrange<'a>(&self, rows: impl IntoIterator<Item = &'a Row>) -> Arrangement {
        let mut frames = Vec::new();
        let mut main_pos: f32 = 0.0;

        for row in rows {
            let main_size = row.main_extent(self.axis, self.cross_extent);
            let rect = match self.axis {
                Axis::Horizontal => Rect::new(main_pos, 0.0, main_size, self.cross_extent),
                Axis::Vertical => Rect::new(0.0, main_pos, self.cross_extent, main_size),
            };
            frames.push((row.id(), rect));
            main_pos += main_size;
        }

        Arrangement {
            frames,
            content_size: self.axis.make_size(main_pos, self.cross_extent),
        }
    }
}
