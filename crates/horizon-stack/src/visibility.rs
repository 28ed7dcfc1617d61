//! Row visibility relative to the viewport.
//!
//! Every layout pass and every scroll re-classifies each row. Only a few
//! transitions between classifications are reported to the observer:
//!
//! | previous    | current     | reported       |
//! |-------------|-------------|----------------|
//! | `Offscreen` | `Partial`   | became visible |
//! | `Hidden`    | `Partial`   | became visible |
//! | `Hidden`    | `Entire`    | became visible |
//! | `Partial`   | `Offscreen` | became hidden  |
//! | `Partial`   | `Hidden`    | became hidden  |
//! | `Entire`    | `Hidden`    | became hidden  |
//!
//! Everything else is silent, including the first classification of a new
//! row and the removal of a row.

use horizon_stack_core::Rect;

/// Where a row stands relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowVisibility {
    /// The row is explicitly hidden.
    Hidden,
    /// The row does not intersect the viewport.
    Offscreen,
    /// The row intersects the viewport but is not fully inside it.
    Partial,
    /// The row is fully inside the viewport.
    Entire,
    /// The row is no longer part of the stack.
    Removed,
}

impl RowVisibility {
    /// Classify a row from its hidden flag, its frame and the viewport bounds.
    pub fn classify(hidden: bool, frame: Rect, bounds: Rect) -> Self {
        if hidden {
            RowVisibility::Hidden
        } else if !frame.intersects(&bounds) {
            RowVisibility::Offscreen
        } else if bounds.contains_rect(&frame) {
            RowVisibility::Entire
        } else {
            RowVisibility::Partial
        }
    }

    /// Whether any part of the row is on screen.
    pub fn is_visible(self) -> bool {
        matches!(self, RowVisibility::Partial | RowVisibility::Entire)
    }
}

/// A reportable change in a row's visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    BecameVisible,
    BecameHidden,
}

/// The change to report for a `previous` to `current` transition, if any.
pub fn visibility_change(previous: RowVisibility, current: RowVisibility) -> Option<VisibilityChange> {
    use RowVisibility::*;

    match (previous, current) {
        (Offscreen, Partial) | (Hidden, Partial) | (Hidden, Entire) => {
            Some(VisibilityChange::BecameVisible)
        }
        (Partial, Offscreen) | (Partial, Hidden) | (Entire, Hidden) => {
            Some(VisibilityChange::BecameHidden)
        }
        _ => None,
    }
}
