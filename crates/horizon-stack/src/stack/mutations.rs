//! Structural mutations: insert, remove, move, replace, hide, reload.

use horizon_stack_core::logging::targets;
use horizon_stack_core::{ContentId, EdgeInsets};

use super::{InsertLocation, Stack};
use crate::animation::animator::{Completion, TransitionEnd};
use crate::animation::easing::{Curve, Easing};
use crate::animation::transition::Transition;
use crate::content::Content;
use crate::row::{Row, RowId};

/// How a freshly created row first appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entrance {
    /// Fully shown at once.
    Immediate,
    /// Shown at zero opacity, then faded in.
    FadeIn,
    /// Hidden until something reveals it.
    Hidden,
}

impl Stack {
    // =========================================================================
    // Insertion
    // =========================================================================

    /// Insert a row for `content` at `location`.
    ///
    /// If the content unit is already in the stack, its old row is removed
    /// first, so the call moves the content rather than duplicating it.
    /// Returns `None` when `location` does not resolve.
    #[tracing::instrument(
        skip_all,
        target = "horizon_stack::stack",
        level = "debug",
        fields(location = ?location, animated = animated)
    )]
    pub fn insert(
        &mut self,
        content: Content,
        location: InsertLocation,
        animated: bool,
    ) -> Option<RowId> {
        let Some(index) = self.resolve_location(location) else {
            tracing::debug!(target: targets::STACK, ?location, "insert location did not resolve");
            return None;
        };
        let entrance = if animated {
            Entrance::FadeIn
        } else {
            Entrance::Immediate
        };
        Some(self.insert_at(content, index, entrance))
    }

    /// Insert a row for each content unit.
    ///
    /// At [`InsertLocation::Top`] the rows end up in the order given, with
    /// the first item closest to the top.
    pub fn insert_many(
        &mut self,
        contents: Vec<Content>,
        location: InsertLocation,
        animated: bool,
    ) -> Vec<RowId> {
        match location {
            InsertLocation::Top => {
                let mut ids: Vec<RowId> = contents
                    .into_iter()
                    .rev()
                    .filter_map(|content| self.insert(content, InsertLocation::Top, animated))
                    .collect();
                ids.reverse();
                ids
            }
            _ => contents
                .into_iter()
                .filter_map(|content| self.insert(content, location, animated))
                .collect(),
        }
    }

    /// Map a location to an index in `0..=row_count`.
    fn resolve_location(&self, location: InsertLocation) -> Option<usize> {
        let count = self.order.len();
        match location {
            InsertLocation::Top => Some(0),
            InsertLocation::Bottom => Some(count),
            InsertLocation::AtIndex(index) => (index <= count).then_some(index),
            InsertLocation::Before(anchor) => {
                self.row_for_content(anchor).and_then(|id| self.index_of(id))
            }
            InsertLocation::After(anchor) => self
                .row_for_content(anchor)
                .and_then(|id| self.index_of(id))
                .map(|index| (index + 1).min(count)),
            InsertLocation::BeforeView(anchor) => {
                self.row_for_view(anchor).and_then(|id| self.index_of(id))
            }
            InsertLocation::AfterView(anchor) => self
                .row_for_view(anchor)
                .and_then(|id| self.index_of(id))
                .map(|index| (index + 1).min(count)),
        }
    }

    fn insert_at(&mut self, content: Content, index: usize, entrance: Entrance) -> RowId {
        let mut index = index;
        if let Some(existing) = self.row_for_content(content.id()) {
            if self.index_of(existing).is_some_and(|old| old < index) {
                index -= 1;
            }
            tracing::debug!(
                target: targets::STACK,
                row = ?existing,
                content = content.id().as_u64(),
                "evicting row already hosting this content"
            );
            self.detach_row(existing);
        }
        let index = index.min(self.order.len());

        // Rows that were already on screen slide from here.
        let from = self.capture_presentation();

        let axis = self.config.axis;
        let config = &self.config;
        let id = self
            .rows
            .insert_with_key(|id| Row::new(id, content, config, axis));
        self.order.insert(index, id);
        tracing::debug!(target: targets::STACK, row = ?id, index, ?entrance, "row inserted");

        self.row_attached(id);
        self.request_row_size(id);
        self.apply_separator_policy();

        match entrance {
            Entrance::Immediate => self.layout_pass(),
            Entrance::Hidden => {
                if let Some(row) = self.rows.get_mut(id) {
                    row.set_hidden(true);
                    row.set_alpha(0.0);
                }
                self.layout_pass();
            }
            Entrance::FadeIn => {
                if let Some(row) = self.rows.get_mut(id) {
                    row.set_alpha(0.0);
                }
                self.start_row_transition(id, false, TransitionEnd::Complete(None), from);
            }
        }
        id
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Remove the row at `index`.
    ///
    /// Returns the id of the removed content, or `None` if `index` is out of
    /// range. When `animated`, the row fades out first and stays in the
    /// order, hidden, until the transition finishes.
    pub fn remove(&mut self, index: usize, animated: bool) -> Option<ContentId> {
        let Some(id) = self.order.get(index).copied() else {
            tracing::trace!(target: targets::STACK, index, count = self.order.len(), "remove index out of range");
            return None;
        };
        self.remove_row(id, animated)
    }

    /// Remove `row`. See [`remove`](Self::remove).
    #[tracing::instrument(skip_all, target = "horizon_stack::stack", level = "debug", fields(row = ?row, animated = animated))]
    pub fn remove_row(&mut self, row: RowId, animated: bool) -> Option<ContentId> {
        let found = self.rows.get_mut(row)?;
        let content = found.content_id()?;
        if found.is_removing() {
            tracing::trace!(target: targets::STACK, ?row, "row is already being removed");
            return Some(content);
        }
        found.mark_removing();

        if animated {
            let from = self.capture_presentation();
            self.start_row_transition(row, true, TransitionEnd::Detach, from);
        } else {
            self.detach_row(row);
        }
        Some(content)
    }

    /// Remove several rows. Unknown handles are skipped.
    pub fn remove_rows(&mut self, rows: &[RowId], animated: bool) -> Vec<ContentId> {
        rows.iter()
            .filter_map(|row| self.remove_row(*row, animated))
            .collect()
    }

    /// Remove every row.
    pub fn remove_all(&mut self, animated: bool) {
        let ids = self.order.clone();
        tracing::debug!(target: targets::STACK, count = ids.len(), animated, "removing all rows");
        for id in ids {
            self.remove_row(id, animated);
        }
    }

    /// Remove the row at `index` at once and hand its content back.
    pub fn take(&mut self, index: usize) -> Option<Content> {
        let id = self.order.get(index).copied()?;
        self.detach_row(id)
    }

    /// Take `id` out of the order and make it inert.
    ///
    /// A transition still running on the row is settled as interrupted
    /// first. The content is returned after the lifecycle hooks ran.
    pub(crate) fn detach_row(&mut self, id: RowId) -> Option<Content> {
        let pending = self
            .timeline
            .take_row(id)
            .map(|transition| transition.finish(self.rows.get_mut(id), false));

        let index = self.index_of(id);
        if let Some(index) = index {
            self.order.remove(index);
        }
        self.visibility_cache.remove(id);
        self.timeline.forget_row(id);
        if self.touched_row == Some(id) {
            self.touched_row = None;
        }

        let mut content = self.rows.remove(id).and_then(|mut row| row.detach());
        if let Some(content) = content.as_mut() {
            self.row_detached(id, content);
        }
        tracing::debug!(target: targets::STACK, row = ?id, ?index, "row detached");

        self.apply_separator_policy();
        self.layout_pass();

        match pending {
            Some(TransitionEnd::Complete(Some(completion))) => completion(false),
            Some(TransitionEnd::DetachThenReveal(next)) => self.reveal(next),
            _ => {}
        }
        content
    }

    // =========================================================================
    // Reordering
    // =========================================================================

    /// Move the row at `from` so that it ends up at `to`.
    ///
    /// Both indices must be in range. Returns whether anything moved.
    #[tracing::instrument(skip_all, target = "horizon_stack::stack", level = "debug", fields(from = from, to = to, animated = animated))]
    pub fn move_row(&mut self, from: usize, to: usize, animated: bool) -> bool {
        let count = self.order.len();
        if from >= count || to >= count {
            tracing::trace!(target: targets::STACK, from, to, count, "move index out of range");
            return false;
        }
        if from == to {
            return false;
        }

        let frames = animated.then(|| self.capture_presentation());
        let id = self.order.remove(from);
        self.order.insert(to, id);

        self.apply_separator_policy();
        self.layout_pass();
        if let Some(frames) = frames {
            let transition = self.layout_transition();
            self.begin_layout_transition(frames, transition, None);
        }
        true
    }

    /// Replace the row at `index` with a new row for `content`.
    ///
    /// Without animation the old row is removed and the new one inserted at
    /// the same index. With animation the new row is inserted hidden right
    /// after the old one, the old row fades out, and once it is detached the
    /// new row fades in. Returns the new row either way.
    #[tracing::instrument(skip_all, target = "horizon_stack::stack", level = "debug", fields(index = index, animated = animated))]
    pub fn replace(&mut self, index: usize, content: Content, animated: bool) -> Option<RowId> {
        let Some(old) = self.order.get(index).copied() else {
            tracing::trace!(target: targets::STACK, index, "replace index out of range");
            return None;
        };

        if !animated {
            self.detach_row(old);
            let index = index.min(self.order.len());
            return Some(self.insert_at(content, index, Entrance::Immediate));
        }

        let new = self.insert_at(content, index + 1, Entrance::Hidden);
        let fading = self
            .rows
            .get_mut(old)
            .filter(|row| !row.is_removing())
            .map(Row::mark_removing)
            .is_some();

        if fading {
            let from = self.capture_presentation();
            self.start_row_transition(old, true, TransitionEnd::DetachThenReveal(new), from);
        } else {
            // The old row is gone already, evicted or on its way out.
            self.reveal(new);
        }
        Some(new)
    }

    // =========================================================================
    // Hide / Show
    // =========================================================================

    /// Hide or show the row at `index`.
    ///
    /// Does nothing, and does not call `completion`, if the row is already in
    /// the requested state.
    pub fn set_hidden(
        &mut self,
        index: usize,
        hidden: bool,
        animated: bool,
        completion: Option<Completion>,
    ) {
        let Some(id) = self.order.get(index).copied() else {
            tracing::trace!(target: targets::STACK, index, "set_hidden index out of range");
            return;
        };
        self.set_row_hidden(id, hidden, animated, completion);
    }

    /// Hide or show `row`. See [`set_hidden`](Self::set_hidden).
    #[tracing::instrument(skip_all, target = "horizon_stack::stack", level = "debug", fields(row = ?row, hidden = hidden, animated = animated))]
    pub fn set_row_hidden(
        &mut self,
        row: RowId,
        hidden: bool,
        animated: bool,
        completion: Option<Completion>,
    ) {
        let Some(found) = self.rows.get(row) else {
            return;
        };
        if found.is_removing() {
            tracing::trace!(target: targets::STACK, ?row, "ignoring visibility change on a row being removed");
            return;
        }
        if found.is_hidden() == hidden {
            return;
        }

        if animated {
            let from = self.capture_presentation();
            self.start_row_transition(row, hidden, TransitionEnd::Complete(completion), from);
            return;
        }

        if let Some(previous) = self.timeline.take_row(row) {
            self.finish_row_transition(previous, false);
        }
        if let Some(found) = self.rows.get_mut(row) {
            found.set_hidden(hidden);
            found.set_alpha(if hidden { 0.0 } else { 1.0 });
        }
        self.layout_pass();
        if let Some(completion) = completion {
            completion(true);
        }
    }

    /// Hide or show several rows. Out-of-range indexes are skipped.
    pub fn set_rows_hidden(&mut self, indexes: &[usize], hidden: bool, animated: bool) {
        let ids: Vec<RowId> = indexes
            .iter()
            .filter_map(|index| self.order.get(*index).copied())
            .collect();
        for id in ids {
            self.set_row_hidden(id, hidden, animated, None);
        }
    }

    /// Fade a hidden row in.
    pub(crate) fn reveal(&mut self, row: RowId) {
        if !self.is_row_hidden(row) {
            return;
        }
        let from = self.capture_presentation();
        self.start_row_transition(row, false, TransitionEnd::Complete(None), from);
    }

    // =========================================================================
    // Reload
    // =========================================================================

    /// Reload the rows at `indexes`.
    ///
    /// Each row's content gets its reload hook, if it has one, and is asked
    /// for its size again. One layout pass follows; `completion` fires when
    /// it settles.
    pub fn reload(&mut self, indexes: &[usize], animated: bool, completion: Option<Completion>) {
        let ids: Vec<RowId> = indexes
            .iter()
            .filter_map(|index| self.order.get(*index).copied())
            .collect();
        self.reload_rows(&ids, animated, completion);
    }

    /// Reload every row.
    pub fn reload_all(&mut self, animated: bool, completion: Option<Completion>) {
        let ids = self.order.clone();
        self.reload_rows(&ids, animated, completion);
    }

    #[tracing::instrument(skip_all, target = "horizon_stack::stack", level = "debug", fields(count = ids.len(), animated = animated))]
    fn reload_rows(&mut self, ids: &[RowId], animated: bool, completion: Option<Completion>) {
        let frames = animated.then(|| self.capture_presentation());

        for id in ids {
            let Some(ctx) = self.row_context(*id) else {
                continue;
            };
            let Some(row) = self.rows.get_mut(*id) else {
                continue;
            };
            match row.content_mut().and_then(Content::reloadable) {
                Some(reloadable) => reloadable.reload_content(&ctx, animated),
                None => {
                    tracing::trace!(target: targets::STACK, row = ?id, "content has no reload capability")
                }
            }
            row.request_size(&ctx);
        }

        self.layout_pass();
        match frames {
            Some(frames) => {
                let transition = self.layout_transition();
                self.begin_layout_transition(frames, transition, completion);
            }
            None => {
                if let Some(completion) = completion {
                    completion(true);
                }
            }
        }
    }

    // =========================================================================
    // Row Geometry
    // =========================================================================

    /// Set the insets of one row.
    pub fn set_row_insets(&mut self, row: RowId, insets: EdgeInsets) {
        let Some(found) = self.rows.get_mut(row) else {
            return;
        };
        found.set_insets(insets);
        self.request_row_size(row);
        self.layout_pass();
    }

    /// Set the insets of the rows at `indexes`.
    pub fn set_rows_insets(&mut self, indexes: &[usize], insets: EdgeInsets) {
        let ids: Vec<RowId> = indexes
            .iter()
            .filter_map(|index| self.order.get(*index).copied())
            .collect();
        for id in &ids {
            if let Some(row) = self.rows.get_mut(*id) {
                row.set_insets(insets);
            }
            self.request_row_size(*id);
        }
        self.layout_pass();
    }

    /// Set the insets of every row, and of rows added later.
    pub fn set_default_row_insets(&mut self, insets: EdgeInsets) {
        self.config.row_insets = insets;
        let indexes: Vec<usize> = (0..self.order.len()).collect();
        self.set_rows_insets(&indexes, insets);
    }

    /// Set the padding of one row.
    pub fn set_row_padding(&mut self, row: RowId, padding: EdgeInsets) {
        let Some(found) = self.rows.get_mut(row) else {
            return;
        };
        found.set_padding(padding);
        self.request_row_size(row);
        self.layout_pass();
    }

    /// Timing used for layout-only transitions.
    pub(super) fn layout_transition(&self) -> Transition {
        Transition::new(
            self.config.animation.layout_duration(),
            Curve::Eased(Easing::EaseInOut),
        )
    }
}
