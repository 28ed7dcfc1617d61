//! Outward notifications from a stack.

use horizon_stack_core::{Point, Size};

use crate::row::RowId;
use crate::stack::Stack;
use crate::visibility::RowVisibility;

/// Receives scroll, visibility and layout notifications from a [`Stack`].
///
/// All methods have empty defaults. Notifications are delivered
/// synchronously from inside the stack operation that caused them; the
/// stack passed in is readable but cannot be mutated from a callback.
pub trait StackObserver {
    /// The viewport offset changed.
    fn did_scroll(&mut self, _stack: &Stack, _offset: Point) {}

    /// A row moved from hidden or offscreen into view.
    fn row_became_visible(
        &mut self,
        _stack: &Stack,
        _row: RowId,
        _index: usize,
        _state: RowVisibility,
    ) {
    }

    /// A row left the viewport or was hidden.
    fn row_became_hidden(
        &mut self,
        _stack: &Stack,
        _row: RowId,
        _index: usize,
        _state: RowVisibility,
    ) {
    }

    /// A layout pass finished.
    fn did_update_layout(&mut self, _stack: &Stack) {}

    /// The content size differs from the one seen by the previous pass.
    fn content_size_changed(&mut self, _stack: &Stack, _old: Size, _new: Size) {}
}
