//! Rows: one slot in the stack wrapping exactly one content unit.
//!
//! A [`Row`] frames its content with insets and padding, draws a
//! [`Separator`] at its trailing edge and resolves how large the content is
//! along the stack axis. Rows are created and owned by the
//! [`Stack`](crate::Stack); callers refer to them by [`RowId`].
//!
//! # Sizing
//!
//! When the content is a controller exposing [`RowSizing`](crate::RowSizing),
//! the row asks it for a [`SizeSpec`] whenever the axis, the viewport or the
//! content changes:
//!
//! - `None` leaves the content to intrinsic layout.
//! - `Fixed(v)` pins the content extent along the axis to `v`.
//! - `FitLayout` measures the content against the available cross extent and
//!   pins the measured value.
//!
//! # Signals
//!
//! - `tapped(RowId)`: a touch ended inside the row. Tap handling is only
//!   active while at least one slot is connected.

use horizon_stack_core::logging::targets;
use horizon_stack_core::{Color, ContentId, EdgeInsets, Rect, Signal, Size};
use slotmap::new_key_type;

use crate::config::StackConfig;
use crate::content::{Content, ContentView, RowContext};
use crate::geometry::{Axis, FittingPriority, SizeConstraint, SizeSpec};
use crate::separator::Separator;

new_key_type! {
    /// Handle to a row owned by a [`Stack`](crate::Stack).
    ///
    /// A handle stays valid for as long as the row is in the stack. After the
    /// row is removed, lookups with the handle return `None`.
    pub struct RowId;
}

/// Background colors of a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowAppearance {
    /// Background while idle.
    pub background_color: Color,
    /// Background while pressed.
    pub highlight_color: Color,
    /// Background currently shown.
    pub displayed_background: Color,
}

impl RowAppearance {
    fn new(background_color: Color, highlight_color: Color) -> Self {
        Self {
            background_color,
            highlight_color,
            displayed_background: background_color,
        }
    }
}

/// One slot in the stack.
pub struct Row {
    id: RowId,
    /// `None` once the row has been detached.
    content: Option<Content>,

    insets: EdgeInsets,
    padding: EdgeInsets,
    appearance: RowAppearance,
    highlighted: bool,

    hidden: bool,
    alpha: f32,
    removing: bool,

    separator: Separator,
    separator_axis: Axis,
    separator_insets: EdgeInsets,
    separator_hidden: bool,

    constraint: Option<SizeConstraint>,
    frame: Rect,
    presentation_frame: Rect,

    /// Emitted when a touch ends inside the row.
    pub tapped: Signal<RowId>,
}

impl Row {
    /// Build a row for `content`, copying the stack's current defaults.
    pub(crate) fn new(id: RowId, content: Content, config: &StackConfig, axis: Axis) -> Self {
        let separator = Separator::new()
            .with_color(config.separator.color)
            .with_thickness(config.separator.thickness);

        Self {
            id,
            content: Some(content),
            insets: config.row_insets,
            padding: config.row_padding,
            appearance: RowAppearance::new(
                config.row_background_color,
                config.row_highlight_color,
            ),
            highlighted: false,
            hidden: false,
            alpha: 1.0,
            removing: false,
            separator,
            separator_axis: axis.cross(),
            separator_insets: config.separator.insets,
            separator_hidden: config.separator.hidden,
            constraint: None,
            frame: Rect::ZERO,
            presentation_frame: Rect::ZERO,
            tapped: Signal::new(),
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// The hosted content, or `None` once detached.
    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> Option<&mut Content> {
        self.content.as_mut()
    }

    /// Identity of the hosted content unit.
    pub fn content_id(&self) -> Option<ContentId> {
        self.content.as_ref().map(Content::id)
    }

    /// Identity of the view being laid out.
    pub fn view_id(&self) -> Option<ContentId> {
        self.content.as_ref().map(Content::view_id)
    }

    /// Whether the row still hosts its content.
    pub fn is_attached(&self) -> bool {
        self.content.is_some()
    }

    /// Whether the row is fading out on its way to being detached.
    pub fn is_removing(&self) -> bool {
        self.removing
    }

    pub(crate) fn mark_removing(&mut self) {
        self.removing = true;
    }

    /// Release the content and make the row inert.
    pub(crate) fn detach(&mut self) -> Option<Content> {
        self.constraint = None;
        self.frame = Rect::ZERO;
        self.presentation_frame = Rect::ZERO;
        self.highlighted = false;
        self.tapped.disconnect_all();
        self.content.take()
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Margin around the content.
    pub fn insets(&self) -> EdgeInsets {
        self.insets
    }

    pub(crate) fn set_insets(&mut self, insets: EdgeInsets) {
        self.insets = insets;
    }

    /// Spacing between the insets and the content.
    pub fn padding(&self) -> EdgeInsets {
        self.padding
    }

    pub(crate) fn set_padding(&mut self, padding: EdgeInsets) {
        self.padding = padding;
    }

    /// Insets plus padding.
    pub fn content_insets(&self) -> EdgeInsets {
        self.insets + self.padding
    }

    /// The fixed extent currently pinned on the content, if any.
    pub fn size_constraint(&self) -> Option<SizeConstraint> {
        self.constraint
    }

    /// Frame in content coordinates after the last layout pass.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// Frame as currently shown while a layout transition is running.
    pub fn presentation_frame(&self) -> Rect {
        self.presentation_frame
    }

    pub(crate) fn set_presentation_frame(&mut self, frame: Rect) {
        self.presentation_frame = frame;
    }

    /// Frame of the content area.
    pub fn content_frame(&self) -> Rect {
        self.frame.inset_by(self.content_insets())
    }

    /// Frame of the separator.
    pub fn separator_frame(&self) -> Rect {
        self.separator
            .frame_in(self.frame, self.separator_axis, self.separator_insets)
    }

    /// Extent of the whole row along `axis`. Hidden rows collapse to zero.
    pub(crate) fn main_extent(&self, axis: Axis, cross_extent: f32) -> f32 {
        if self.hidden {
            return 0.0;
        }
        axis.main_insets(self.content_insets()) + self.content_extent(axis, cross_extent)
    }

    /// Extent of the content along `axis` inside a row `cross_extent` wide.
    ///
    /// A pinned constraint wins; otherwise the content is measured with the
    /// cross dimension required and the axis dimension free.
    pub fn content_extent(&self, axis: Axis, cross_extent: f32) -> f32 {
        if let Some(extent) = self.constraint.and_then(|c| c.extent_along(axis)) {
            return extent;
        }
        let Some(content) = self.content.as_ref() else {
            return 0.0;
        };
        let available = (cross_extent - axis.cross_insets(self.content_insets())).max(0.0);
        measure_along(content.content_view(), axis, available)
    }

    // =========================================================================
    // Sizing
    // =========================================================================

    /// Ask the content for its preferred size and apply the answer.
    pub(crate) fn request_size(&mut self, ctx: &RowContext) {
        let Some(content) = self.content.as_ref() else {
            return;
        };
        let Some(sizing) = content.sizing() else {
            tracing::trace!(target: targets::ROW, row = ?self.id, "content has no sizing capability");
            self.constraint = None;
            return;
        };

        let spec = sizing.preferred_size(ctx.axis, ctx);
        self.constraint = match spec {
            None => None,
            Some(SizeSpec::Fixed(extent)) => Some(SizeConstraint::new(ctx.axis, extent)),
            Some(SizeSpec::FitLayout) => {
                let measured = measure_along(
                    content.content_view(),
                    ctx.axis,
                    ctx.available_cross_extent(),
                );
                Some(SizeConstraint::new(ctx.axis, measured))
            }
        };

        tracing::trace!(
            target: targets::ROW,
            row = ?self.id,
            axis = ?ctx.axis,
            ?spec,
            extent = ?self.constraint.map(|c| c.extent),
            "applied preferred size"
        );
    }

    /// Re-place the separator for a new stack axis and re-request sizing.
    pub(crate) fn set_axis(&mut self, ctx: &RowContext) {
        self.separator_axis = ctx.axis.cross();
        self.request_size(ctx);
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Whether the row is hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hide or show the row. The separator fades with it.
    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
        self.separator.set_alpha(if hidden { 0.0 } else { 1.0 });
    }

    /// Current opacity of the row.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub(crate) fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    // =========================================================================
    // Separator
    // =========================================================================

    pub fn separator(&self) -> &Separator {
        &self.separator
    }

    pub fn separator_mut(&mut self) -> &mut Separator {
        &mut self.separator
    }

    /// Direction the separator runs in; always across the stack axis.
    pub fn separator_axis(&self) -> Axis {
        self.separator_axis
    }

    pub fn separator_insets(&self) -> EdgeInsets {
        self.separator_insets
    }

    pub fn set_separator_insets(&mut self, insets: EdgeInsets) {
        self.separator_insets = insets;
    }

    /// The row's own request to hide its separator.
    pub fn is_separator_hidden(&self) -> bool {
        self.separator_hidden
    }

    pub(crate) fn set_separator_hidden(&mut self, hidden: bool) {
        self.separator_hidden = hidden;
    }

    /// Combine the row's own flag with the last-row rule.
    pub(crate) fn apply_separator_policy(&mut self, is_last: bool, auto_hide_last: bool) {
        self.separator
            .set_hidden(self.separator_hidden || (is_last && auto_hide_last));
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    pub fn appearance(&self) -> &RowAppearance {
        &self.appearance
    }

    /// Set the idle background.
    pub fn set_background_color(&mut self, color: Color) {
        self.appearance.background_color = color;
        if !self.highlighted {
            self.appearance.displayed_background = color;
        }
    }

    /// Set the pressed background.
    pub fn set_highlight_color(&mut self, color: Color) {
        self.appearance.highlight_color = color;
        if self.highlighted {
            self.appearance.displayed_background = color;
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        let Some(content) = self.content.as_mut() else {
            return;
        };
        let Some(target) = content.content_view_mut().highlightable() else {
            return;
        };
        if highlighted && !target.is_highlightable() {
            return;
        }
        target.set_highlighted(highlighted, &mut self.appearance);
        self.highlighted = highlighted;
    }

    // =========================================================================
    // Touch Handling
    // =========================================================================

    /// Whether a completed touch would emit `tapped`.
    pub fn is_tap_enabled(&self) -> bool {
        self.tapped.is_connected()
            && self
                .content
                .as_ref()
                .is_some_and(|content| content.content_view().is_interaction_enabled())
    }

    pub(crate) fn touch_began(&mut self) {
        self.set_highlighted(true);
    }

    pub(crate) fn touch_moved(&mut self, inside: bool) {
        if self.highlighted != inside {
            self.set_highlighted(inside);
        }
    }

    pub(crate) fn touch_cancelled(&mut self) {
        if self.highlighted {
            self.set_highlighted(false);
        }
    }

    /// Finish a touch. Returns `true` if it counted as a tap.
    pub(crate) fn touch_ended(&mut self, inside: bool) -> bool {
        self.touch_cancelled();
        if !inside || !self.is_tap_enabled() {
            return false;
        }
        tracing::debug!(target: targets::ROW, row = ?self.id, "row tapped");
        self.tapped.emit(self.id);
        true
    }
}

impl std::fmt::Debug for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Row")
            .field("id", &self.id)
            .field("content", &self.content)
            .field("hidden", &self.hidden)
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}

/// Measure a view along `axis` with the cross dimension pinned to `available`.
fn measure_along(view: &dyn ContentView, axis: Axis, available: f32) -> f32 {
    match axis {
        Axis::Vertical => {
            view.fitting_size(
                Size::new(available, f32::MAX),
                FittingPriority::Required,
                FittingPriority::Low,
            )
            .height
        }
        Axis::Horizontal => {
            view.fitting_size(
                Size::new(f32::MAX, available),
                FittingPriority::Low,
                FittingPriority::Required,
            )
            .width
        }
    }
}
