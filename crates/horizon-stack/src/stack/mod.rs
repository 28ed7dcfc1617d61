//! The stack: an ordered, scrollable collection of rows.
//!
//! [`Stack`] owns every [`Row`] and the order they are laid out in. All
//! structural changes go through it: inserting, removing, moving, replacing,
//! hiding and reloading rows. After every change it re-derives positions,
//! re-applies the separator policy and runs a layout pass, which in turn
//! re-classifies row visibility and notifies the [`StackObserver`].
//!
//! # Degradation
//!
//! The API is total. An out-of-range index, an unknown row handle or an
//! anchor that is not in the stack turns the call into a no-op; methods that
//! return something return `None` or `false` in that case.
//!
//! # Animation
//!
//! Animated operations apply their structural effect immediately and
//! schedule the visual part on the stack's timeline, which only moves when
//! the host calls [`advance`](Stack::advance). An animated removal keeps the
//! row in the order, hidden, until its transition finishes.
//!
//! # Example
//!
//! ```
//! use horizon_stack::prelude::*;
//!
//! struct Label(ContentId, f32);
//!
//! impl ContentView for Label {
//!     fn id(&self) -> ContentId {
//!         self.0
//!     }
//!
//!     fn size_hint(&self) -> SizeHint {
//!         SizeHint::from_dimensions(100.0, self.1)
//!     }
//! }
//!
//! let mut stack = Stack::new(StackConfig::new().with_row_insets(EdgeInsets::ZERO));
//! let first = stack.insert(Content::view(Label(ContentId::next(), 44.0)), InsertLocation::Bottom, false);
//! let top = stack.insert(Content::view(Label(ContentId::next(), 20.0)), InsertLocation::Top, false);
//!
//! assert_eq!(stack.row_ids(), &[top.unwrap(), first.unwrap()]);
//! assert_eq!(stack.content_size().height, 64.0);
//! ```

mod animate;
mod layout_pass;
mod mutations;
mod scroll;

use horizon_stack_core::logging::targets;
use horizon_stack_core::{Color, ContentId, EdgeInsets, HostId, Point, Rect, Signal, Size};
use slotmap::{SecondaryMap, SlotMap};

use crate::animation::timeline::Timeline;
use crate::config::StackConfig;
use crate::content::{Content, RowContext};
use crate::geometry::Axis;
use crate::observer::StackObserver;
use crate::row::{Row, RowId};
use crate::viewport::Viewport;
use crate::visibility::RowVisibility;

pub use scroll::{ScrollPosition, TouchPhase};

/// Where a new row goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertLocation {
    /// Before the first row.
    Top,
    /// After the last row.
    Bottom,
    /// At an index in `0..=row_count`.
    AtIndex(usize),
    /// Before the row hosting this content unit.
    Before(ContentId),
    /// After the row hosting this content unit.
    After(ContentId),
    /// Before the row whose laid-out view has this id.
    BeforeView(ContentId),
    /// After the row whose laid-out view has this id.
    AfterView(ContentId),
}

/// Whether a row joined or left the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowChangeKind {
    Added,
    Removed,
}

/// Payload of [`Stack::row_changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowChange {
    pub row: RowId,
    /// The content unit the row hosts.
    pub content: ContentId,
    /// Whether the content is a controller rather than a bare view.
    pub is_controller: bool,
    pub kind: RowChangeKind,
}

/// An ordered, scrollable collection of rows.
pub struct Stack {
    config: StackConfig,
    rows: SlotMap<RowId, Row>,
    order: Vec<RowId>,

    viewport: Viewport,
    cached_content_size: Size,
    visibility_cache: SecondaryMap<RowId, RowVisibility>,

    observer: Option<Box<dyn StackObserver>>,
    timeline: Timeline,
    parent: Option<HostId>,
    touched_row: Option<RowId>,

    /// Emitted after a row is added to or removed from the order.
    pub row_changed: Signal<RowChange>,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new(StackConfig::default())
    }
}

impl Stack {
    /// Create an empty stack.
    pub fn new(config: StackConfig) -> Self {
        tracing::debug!(
            target: targets::STACK,
            axis = ?config.axis,
            viewport = ?config.viewport_size,
            "creating stack"
        );
        let viewport = Viewport::new(config.viewport_size);
        Self {
            config,
            rows: SlotMap::with_key(),
            order: Vec::new(),
            viewport,
            cached_content_size: Size::ZERO,
            visibility_cache: SecondaryMap::new(),
            observer: None,
            timeline: Timeline::default(),
            parent: None,
            touched_row: None,
            row_changed: Signal::new(),
        }
    }

    /// The configuration new rows are created from.
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// The stacking and scrolling direction.
    pub fn axis(&self) -> Axis {
        self.config.axis
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub(crate) fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Current scroll offset.
    pub fn content_offset(&self) -> Point {
        self.viewport.offset()
    }

    /// Size of the laid-out rows after the last layout pass.
    pub fn content_size(&self) -> Size {
        self.cached_content_size
    }

    /// The host this stack belongs to, if any.
    pub fn parent(&self) -> Option<HostId> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<HostId>) {
        self.parent = parent;
    }

    // =========================================================================
    // Observer
    // =========================================================================

    /// Install the observer, returning the previous one.
    pub fn set_observer(
        &mut self,
        observer: Box<dyn StackObserver>,
    ) -> Option<Box<dyn StackObserver>> {
        self.observer.replace(observer)
    }

    pub fn take_observer(&mut self) -> Option<Box<dyn StackObserver>> {
        self.observer.take()
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// Call into the observer with a read-only view of the stack.
    fn notify(&mut self, f: impl FnOnce(&mut dyn StackObserver, &Stack)) {
        let Some(mut observer) = self.observer.take() else {
            return;
        };
        f(observer.as_mut(), self);
        self.observer = Some(observer);
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    pub fn row_count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Row handles in layout order.
    pub fn row_ids(&self) -> &[RowId] {
        &self.order
    }

    /// Rows in layout order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.order.iter().filter_map(|id| self.rows.get(*id))
    }

    pub fn row(&self, row: RowId) -> Option<&Row> {
        self.rows.get(row)
    }

    pub fn row_mut(&mut self, row: RowId) -> Option<&mut Row> {
        self.rows.get_mut(row)
    }

    pub fn first_row(&self) -> Option<RowId> {
        self.order.first().copied()
    }

    pub fn last_row(&self) -> Option<RowId> {
        self.order.last().copied()
    }

    pub fn row_at(&self, index: usize) -> Option<RowId> {
        self.order.get(index).copied()
    }

    /// Position of `row` in the current order. `None` once it is detached.
    pub fn index_of(&self, row: RowId) -> Option<usize> {
        self.order.iter().position(|id| *id == row)
    }

    /// The row hosting the content unit with this id.
    pub fn row_for_content(&self, content: ContentId) -> Option<RowId> {
        self.order.iter().copied().find(|id| {
            self.rows
                .get(*id)
                .is_some_and(|row| row.content_id() == Some(content))
        })
    }

    /// The row whose laid-out view has this id.
    pub fn row_for_view(&self, view: ContentId) -> Option<RowId> {
        self.order.iter().copied().find(|id| {
            self.rows
                .get(*id)
                .is_some_and(|row| row.view_id() == Some(view))
        })
    }

    pub fn contains_content(&self, content: ContentId) -> bool {
        self.row_for_content(content).is_some()
    }

    /// The content hosted by `row`.
    pub fn content(&self, row: RowId) -> Option<&Content> {
        self.rows.get(row).and_then(Row::content)
    }

    pub fn content_mut(&mut self, row: RowId) -> Option<&mut Content> {
        self.rows.get_mut(row).and_then(Row::content_mut)
    }

    pub fn is_row_hidden(&self, row: RowId) -> bool {
        self.rows.get(row).is_some_and(Row::is_hidden)
    }

    /// Whether the row at `index` is hidden. `false` for an index out of range.
    pub fn is_hidden_at(&self, index: usize) -> bool {
        self.row_at(index).is_some_and(|row| self.is_row_hidden(row))
    }

    /// Classify `row` against the current viewport bounds.
    pub fn visibility(&self, row: RowId) -> RowVisibility {
        match self.rows.get(row) {
            Some(row) => {
                RowVisibility::classify(row.is_hidden(), row.frame(), self.viewport.bounds())
            }
            None => RowVisibility::Removed,
        }
    }

    /// The classification seen by the last visibility pass.
    pub fn last_visibility(&self, row: RowId) -> Option<RowVisibility> {
        self.visibility_cache.get(row).copied()
    }

    /// The first visible row containing `point`, in content coordinates.
    pub fn row_at_point(&self, point: Point) -> Option<RowId> {
        self.rows()
            .find(|row| !row.is_hidden() && row.frame().contains(point))
            .map(Row::id)
    }

    pub(crate) fn row_context(&self, row: RowId) -> Option<RowContext> {
        let found = self.rows.get(row)?;
        Some(RowContext {
            row,
            index: self.index_of(row),
            axis: self.config.axis,
            viewport_size: self.viewport.size(),
            content_insets: found.content_insets(),
        })
    }

    fn capture_presentation(&self) -> Vec<(RowId, Rect)> {
        self.rows()
            .map(|row| (row.id(), row.presentation_frame()))
            .collect()
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// Hide every separator, including those of rows added later.
    pub fn set_hide_separators(&mut self, hidden: bool) {
        self.config.separator.hidden = hidden;
        for row in self.rows.values_mut() {
            row.set_separator_hidden(hidden);
        }
        self.apply_separator_policy();
    }

    /// Hide or show one row's separator.
    pub fn set_row_separator_hidden(&mut self, row: RowId, hidden: bool) {
        let Some(found) = self.rows.get_mut(row) else {
            return;
        };
        found.set_separator_hidden(hidden);
        self.apply_separator_policy();
    }

    pub fn set_auto_hide_last_row_separator(&mut self, auto_hide: bool) {
        self.config.auto_hide_last_row_separator = auto_hide;
        self.apply_separator_policy();
    }

    pub fn set_separator_color(&mut self, color: Color) {
        self.config.separator.color = color;
        for row in self.rows.values_mut() {
            row.separator_mut().set_color(color);
        }
    }

    pub fn set_separator_thickness(&mut self, thickness: f32) {
        self.config.separator.thickness = thickness;
        for row in self.rows.values_mut() {
            row.separator_mut().set_thickness(thickness);
        }
    }

    pub fn set_separator_insets(&mut self, insets: EdgeInsets) {
        self.config.separator.insets = insets;
        for row in self.rows.values_mut() {
            row.set_separator_insets(insets);
        }
    }

    /// Background for rows added from now on.
    pub fn set_row_background_color(&mut self, color: Color) {
        self.config.row_background_color = color;
    }

    /// Highlight background for rows added from now on.
    pub fn set_row_highlight_color(&mut self, color: Color) {
        self.config.row_highlight_color = color;
    }

    /// Hide each row's separator if its own flag asks for it, or if it is
    /// the last row and the last-row rule is on.
    fn apply_separator_policy(&mut self) {
        let last = self.order.last().copied();
        let auto_hide = self.config.auto_hide_last_row_separator;
        for id in &self.order {
            if let Some(row) = self.rows.get_mut(*id) {
                row.apply_separator_policy(Some(*id) == last, auto_hide);
            }
        }
    }

    // =========================================================================
    // Hosting
    // =========================================================================

    fn row_attached(&mut self, id: RowId) {
        let parent = self.parent;
        let Some(content) = self.rows.get_mut(id).and_then(Row::content_mut) else {
            return;
        };
        if let (Some(host), Some(controller)) = (parent, content.as_controller_mut()) {
            controller.will_move_to_parent(Some(host));
            controller.did_move_to_parent(Some(host));
        }
        let change = RowChange {
            row: id,
            content: content.id(),
            is_controller: content.is_controller(),
            kind: RowChangeKind::Added,
        };
        self.row_changed.emit(change);
    }

    fn row_detached(&mut self, id: RowId, content: &mut Content) {
        if let (Some(_), Some(controller)) = (self.parent, content.as_controller_mut()) {
            controller.will_move_to_parent(None);
            controller.did_move_to_parent(None);
        }
        self.row_changed.emit(RowChange {
            row: id,
            content: content.id(),
            is_controller: content.is_controller(),
            kind: RowChangeKind::Removed,
        });
    }
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stack")
            .field("axis", &self.config.axis)
            .field("rows", &self.order.len())
            .field("viewport", &self.viewport)
            .field("content_size", &self.cached_content_size)
            .field("has_observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}
