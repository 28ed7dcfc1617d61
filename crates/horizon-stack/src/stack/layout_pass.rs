//! Layout passes, sizing requests and visibility dispatch.

use horizon_stack_core::logging::{span_names, targets};
use horizon_stack_core::{EdgeInsets, PerfSpan, Size};

use super::Stack;
use crate::geometry::Axis;
use crate::layout::StackLayout;
use crate::row::RowId;
use crate::visibility::{RowVisibility, VisibilityChange, visibility_change};

impl Stack {
    /// Lay out every row now.
    pub fn layout(&mut self) {
        self.layout_pass();
    }

    /// Position rows, update the content size and dispatch visibility.
    pub(super) fn layout_pass(&mut self) {
        let _perf = PerfSpan::new(span_names::LAYOUT_PASS);

        let layout = StackLayout::new(self.config.axis, self.viewport.size());
        let arrangement = layout.arrange(self.order.iter().filter_map(|id| self.rows.get(*id)));

        for (id, frame) in &arrangement.frames {
            let tracked = self
                .timeline
                .layouts
                .iter()
                .any(|transition| transition.from.iter().any(|(row, _)| row == id));
            if let Some(row) = self.rows.get_mut(*id) {
                row.set_frame(*frame);
                if !tracked {
                    row.set_presentation_frame(*frame);
                }
            }
        }

        let old = self.cached_content_size;
        let new = arrangement.content_size;
        let pulled_back = self.viewport.set_content_size(new, self.config.axis);
        self.cached_content_size = new;

        tracing::trace!(
            target: targets::STACK,
            rows = arrangement.frames.len(),
            width = new.width,
            height = new.height,
            "layout pass"
        );

        if !old.approx_eq(&new) {
            self.notify(|observer, stack| observer.content_size_changed(stack, old, new));
        }
        if pulled_back {
            let offset = self.viewport.offset();
            tracing::debug!(target: targets::STACK, ?offset, "content shrank under the offset");
            self.notify(|observer, stack| observer.did_scroll(stack, offset));
        }
        self.dispatch_visibility();
        self.notify(|observer, stack| observer.did_update_layout(stack));
    }

    /// Re-classify every row and report the transitions that matter.
    pub(super) fn dispatch_visibility(&mut self) {
        let bounds = self.viewport.bounds();
        let mut changes = Vec::new();

        for (index, id) in self.order.iter().enumerate() {
            let Some(row) = self.rows.get(*id) else {
                continue;
            };
            let current = RowVisibility::classify(row.is_hidden(), row.frame(), bounds);
            let previous = self.visibility_cache.insert(*id, current);
            if let Some(change) = previous.and_then(|previous| visibility_change(previous, current))
            {
                changes.push((*id, index, current, change));
            }
        }

        for (row, index, state, change) in changes {
            tracing::debug!(target: targets::VISIBILITY, ?row, index, ?state, ?change, "row visibility changed");
            match change {
                VisibilityChange::BecameVisible => self.notify(|observer, stack| {
                    observer.row_became_visible(stack, row, index, state)
                }),
                VisibilityChange::BecameHidden => self.notify(|observer, stack| {
                    observer.row_became_hidden(stack, row, index, state)
                }),
            }
        }
    }

    /// Ask one row's content for its size.
    pub(super) fn request_row_size(&mut self, id: RowId) {
        let Some(ctx) = self.row_context(id) else {
            return;
        };
        if let Some(row) = self.rows.get_mut(id) {
            row.request_size(&ctx);
        }
    }

    fn request_all_sizes(&mut self) {
        for id in self.order.clone() {
            self.request_row_size(id);
        }
    }

    // =========================================================================
    // Axis
    // =========================================================================

    /// Change the stacking direction.
    ///
    /// Every row re-places its separator and is asked for its size along
    /// the new axis.
    #[tracing::instrument(skip_all, target = "horizon_stack::stack", level = "debug", fields(axis = ?axis, animated = animated))]
    pub fn set_axis(&mut self, axis: Axis, animated: bool) {
        if self.config.axis == axis {
            return;
        }
        let frames = animated.then(|| self.capture_presentation());
        self.config.axis = axis;

        for id in self.order.clone() {
            let Some(ctx) = self.row_context(id) else {
                continue;
            };
            if let Some(row) = self.rows.get_mut(id) {
                row.set_axis(&ctx);
            }
        }

        self.layout_pass();
        if let Some(frames) = frames {
            let transition = self.layout_transition();
            self.begin_layout_transition(frames, transition, None);
        }
    }

    /// Flip between vertical and horizontal.
    pub fn toggle_axis(&mut self, animated: bool) {
        self.set_axis(self.config.axis.cross(), animated);
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Resize the viewport. Rows are sized again against the new extent.
    pub fn set_viewport_size(&mut self, size: Size) {
        if self.viewport.size() == size {
            return;
        }
        tracing::debug!(target: targets::STACK, width = size.width, height = size.height, "viewport resized");
        self.viewport.set_size(size);
        self.request_all_sizes();
        self.layout_pass();
    }

    /// Set the inset the host reserves around the content.
    pub fn set_content_inset(&mut self, inset: EdgeInsets) {
        self.viewport.set_content_inset(inset);
    }
}
