//! Scrolling and touch handling.

use horizon_stack_core::Point;
use horizon_stack_core::logging::targets;

use super::Stack;
use crate::animation::easing::{Curve, Easing};
use crate::animation::timeline::ScrollTransition;
use crate::animation::transition::Transition;
use crate::row::RowId;

/// Where a row should end up when scrolled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPosition {
    /// Scroll as little as needed to show the whole row.
    #[default]
    Automatic,
    /// Center the row in the viewport.
    Middle,
    /// Align the row's leading edge with the viewport's.
    Initial,
    /// Align the row's trailing edge with the viewport's.
    Final,
}

/// Phase of a touch sequence delivered to [`Stack::handle_touch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

impl Stack {
    // =========================================================================
    // Scrolling
    // =========================================================================

    /// Scroll so that `row` sits at `position`.
    ///
    /// Explicit positions are clamped so the viewport never scrolls past the
    /// content. Unknown rows are ignored.
    pub fn scroll_to_row(&mut self, row: RowId, position: ScrollPosition, animated: bool) {
        let Some(frame) = self.rows.get(row).map(|found| found.frame()) else {
            tracing::trace!(target: targets::STACK, ?row, "scroll target is not in the stack");
            return;
        };
        let axis = self.config.axis;
        let offset = self.viewport.offset();
        let origin = axis.position(frame.origin);
        let extent = axis.main(frame.size);
        let visible = axis.main(self.viewport.size());

        let leading = match position {
            ScrollPosition::Automatic => None,
            ScrollPosition::Middle => Some(origin - (visible - extent) / 2.0),
            ScrollPosition::Initial => Some(origin),
            ScrollPosition::Final => Some(origin - (visible - extent)),
        };
        let target = match leading {
            Some(leading) => {
                axis.with_position(offset, self.viewport.clamp_offset(axis, leading))
            }
            None => self.viewport.offset_to_reveal(frame, axis),
        };

        tracing::debug!(target: targets::STACK, ?row, ?position, x = target.x, y = target.y, "scrolling to row");
        self.set_content_offset(target, animated);
    }

    /// Scroll to the row at `index`.
    pub fn scroll_to_index(&mut self, index: usize, position: ScrollPosition, animated: bool) {
        if let Some(row) = self.order.get(index).copied() {
            self.scroll_to_row(row, position, animated);
        }
    }

    /// Scroll to the start of the content, revealing the leading inset.
    pub fn scroll_to_top(&mut self, animated: bool) {
        let axis = self.config.axis;
        let leading = -axis.leading_inset(self.viewport.content_inset());
        let target = axis.with_position(self.viewport.offset(), leading);
        self.set_content_offset(target, animated);
    }

    /// Scroll to the end of the content, revealing the trailing inset.
    ///
    /// Content that already fits the viewport is not scrolled.
    pub fn scroll_to_bottom(&mut self, animated: bool) {
        let axis = self.config.axis;
        let end = axis.main(self.viewport.content_size()) - axis.main(self.viewport.size())
            + axis.trailing_inset(self.viewport.content_inset());
        if end > 0.0 {
            let target = axis.with_position(self.viewport.offset(), end);
            self.set_content_offset(target, animated);
        }
    }

    /// Scroll to `offset`.
    ///
    /// An animated scroll runs on the timeline and replaces any scroll still
    /// in flight; a direct one cancels it.
    pub fn set_content_offset(&mut self, offset: Point, animated: bool) {
        if animated {
            let transition = Transition::new(
                self.config.animation.scroll_duration(),
                Curve::Eased(Easing::EaseInOut),
            );
            self.timeline.scroll = Some(ScrollTransition {
                transition,
                from: self.viewport.offset(),
                to: offset,
            });
        } else {
            self.timeline.scroll = None;
            self.apply_content_offset(offset);
        }
    }

    pub(super) fn apply_content_offset(&mut self, offset: Point) {
        self.viewport.set_offset(offset);
        self.notify(|observer, stack| observer.did_scroll(stack, offset));
        self.dispatch_visibility();
    }

    // =========================================================================
    // Touch Handling
    // =========================================================================

    /// Feed one phase of a touch at `location` in viewport coordinates.
    ///
    /// Returns whether the touch was taken by a row; for
    /// [`TouchPhase::Ended`], whether it completed a tap.
    pub fn handle_touch(&mut self, phase: TouchPhase, location: Point) -> bool {
        let offset = self.viewport.offset();
        let point = Point::new(location.x + offset.x, location.y + offset.y);

        match phase {
            TouchPhase::Began => {
                let Some(id) = self.row_at_point(point) else {
                    return false;
                };
                self.touched_row = Some(id);
                if let Some(row) = self.rows.get_mut(id) {
                    row.touch_began();
                }
                true
            }
            TouchPhase::Moved => {
                let Some(row) = self.touched_row.and_then(|id| self.rows.get_mut(id)) else {
                    return false;
                };
                let inside = row.frame().contains(point);
                row.touch_moved(inside);
                true
            }
            TouchPhase::Ended => {
                let Some(row) = self.touched_row.take().and_then(|id| self.rows.get_mut(id)) else {
                    return false;
                };
                let inside = row.frame().contains(point);
                row.touch_ended(inside)
            }
            TouchPhase::Cancelled => {
                let Some(row) = self.touched_row.take().and_then(|id| self.rows.get_mut(id)) else {
                    return false;
                };
                row.touch_cancelled();
                true
            }
        }
    }
}
