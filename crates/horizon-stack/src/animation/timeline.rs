//! Everything the stack is currently animating.
//!
//! The timeline only stores transitions and their targets. The stack
//! advances it and applies the interpolated values to rows and the viewport,
//! since only the stack can reach both.

use horizon_stack_core::{Point, Rect};

use super::animator::{Completion, RowTransition};
use super::transition::Transition;
use crate::row::RowId;

/// Frames moving from their previous positions to the latest layout.
pub(crate) struct LayoutTransition {
    pub(crate) transition: Transition,
    /// Where each row was shown when the transition started.
    pub(crate) from: Vec<(RowId, Rect)>,
    pub(crate) completion: Option<Completion>,
}

impl std::fmt::Debug for LayoutTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutTransition")
            .field("transition", &self.transition)
            .field("rows", &self.from.len())
            .field("has_completion", &self.completion.is_some())
            .finish()
    }
}

/// The viewport offset moving towards a scroll target.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScrollTransition {
    pub(crate) transition: Transition,
    pub(crate) from: Point,
    pub(crate) to: Point,
}

impl ScrollTransition {
    pub(crate) fn offset_at(&self, progress: f32) -> Point {
        self.from.lerp(self.to, progress)
    }
}

#[derive(Debug, Default)]
pub(crate) struct Timeline {
    pub(crate) rows: Vec<RowTransition>,
    pub(crate) layouts: Vec<LayoutTransition>,
    pub(crate) scroll: Option<ScrollTransition>,
}

impl Timeline {
    /// Whether nothing is animating.
    pub(crate) fn is_idle(&self) -> bool {
        self.rows.is_empty() && self.layouts.is_empty() && self.scroll.is_none()
    }

    /// Pull out the transition running on `row`, if any.
    pub(crate) fn take_row(&mut self, row: RowId) -> Option<RowTransition> {
        let position = self.rows.iter().position(|t| t.row == row)?;
        Some(self.rows.remove(position))
    }

    pub(crate) fn is_row_animating(&self, row: RowId) -> bool {
        self.rows.iter().any(|t| t.row == row)
    }

    /// Stop tracking `row` in every layout transition.
    pub(crate) fn forget_row(&mut self, row: RowId) {
        for layout in &mut self.layouts {
            layout.from.retain(|(id, _)| *id != row);
        }
    }
}
