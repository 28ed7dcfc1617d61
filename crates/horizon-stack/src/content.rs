//! Content units hosted by rows, and the optional capabilities they expose.
//!
//! A row hosts exactly one [`Content`]: either a [`ContentController`], which
//! owns a view and may opt into sizing, reloading and custom transitions, or a
//! bare [`ContentView`] laid out from its size hints alone.
//!
//! Capabilities are discovered per call site through accessor methods that
//! default to `None`, so a content unit implements only the hooks it needs:
//!
//! ```
//! use horizon_stack::prelude::*;
//!
//! struct Banner {
//!     id: ContentId,
//!     view: Label,
//! }
//!
//! struct Label {
//!     id: ContentId,
//! }
//!
//! impl ContentView for Label {
//!     fn id(&self) -> ContentId {
//!         self.id
//!     }
//!
//!     fn size_hint(&self) -> SizeHint {
//!         SizeHint::from_dimensions(200.0, 44.0)
//!     }
//! }
//!
//! impl RowSizing for Banner {
//!     fn preferred_size(&self, _axis: Axis, _ctx: &RowContext) -> Option<SizeSpec> {
//!         Some(SizeSpec::Fixed(120.0))
//!     }
//! }
//!
//! impl ContentController for Banner {
//!     fn id(&self) -> ContentId {
//!         self.id
//!     }
//!
//!     fn view(&self) -> &dyn ContentView {
//!         &self.view
//!     }
//!
//!     fn view_mut(&mut self) -> &mut dyn ContentView {
//!         &mut self.view
//!     }
//!
//!     fn sizing(&self) -> Option<&dyn RowSizing> {
//!         Some(self)
//!     }
//! }
//! ```

use std::fmt;
use std::time::Duration;

use horizon_stack_core::{ContentId, EdgeInsets, HostId, Size};

use crate::geometry::{Axis, FittingPriority, SizeHint, SizeSpec};
use crate::row::{RowAppearance, RowId};

/// A read-only snapshot of where a row sits, handed to content hooks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowContext {
    /// The row hosting the content.
    pub row: RowId,
    /// Position of the row in the stack, if it is attached.
    pub index: Option<usize>,
    /// The stack's current axis.
    pub axis: Axis,
    /// Size of the stack's viewport.
    pub viewport_size: Size,
    /// Row insets plus row padding.
    pub content_insets: EdgeInsets,
}

impl RowContext {
    /// Extent available to the content across the stack axis.
    pub fn available_cross_extent(&self) -> f32 {
        let cross = self.axis.cross_extent(self.viewport_size);
        (cross - self.axis.cross_insets(self.content_insets)).max(0.0)
    }
}

/// A presentational view hosted directly by a row or owned by a controller.
pub trait ContentView {
    /// Identity of this view.
    fn id(&self) -> ContentId;

    /// Size hints used for intrinsic layout.
    fn size_hint(&self) -> SizeHint {
        SizeHint::default()
    }

    /// Height the view needs at `width`, for content that wraps.
    fn height_for_width(&self, _width: f32) -> Option<f32> {
        None
    }

    /// Width the view needs at `height`, for content that wraps.
    fn width_for_height(&self, _height: f32) -> Option<f32> {
        None
    }

    /// Measure the view against a target size.
    ///
    /// A `Required` dimension comes back equal to the target. A `Low`
    /// dimension comes back at the view's natural extent, given the other
    /// dimension, and never larger than the target.
    fn fitting_size(
        &self,
        target: Size,
        horizontal: FittingPriority,
        vertical: FittingPriority,
    ) -> Size {
        let hint = self.size_hint();
        let natural = hint.constrain(hint.preferred);

        match (horizontal, vertical) {
            (FittingPriority::Required, FittingPriority::Required) => target,
            (FittingPriority::Required, FittingPriority::Low) => {
                let height = self
                    .height_for_width(target.width)
                    .unwrap_or(natural.height)
                    .min(target.height);
                Size::new(target.width, height)
            }
            (FittingPriority::Low, FittingPriority::Required) => {
                let width = self
                    .width_for_height(target.height)
                    .unwrap_or(natural.width)
                    .min(target.width);
                Size::new(width, target.height)
            }
            (FittingPriority::Low, FittingPriority::Low) => Size::new(
                natural.width.min(target.width),
                natural.height.min(target.height),
            ),
        }
    }

    /// Whether the view accepts touches. Taps on a row whose view does not are
    /// ignored.
    fn is_interaction_enabled(&self) -> bool {
        true
    }

    /// Highlight capability.
    fn highlightable(&mut self) -> Option<&mut dyn RowHighlightable> {
        None
    }
}

/// Lets a view react to its row being pressed.
pub trait RowHighlightable {
    /// Whether presses highlight the row at all.
    fn is_highlightable(&self) -> bool {
        true
    }

    /// Apply or clear the highlight. The default swaps the row background
    /// between its highlight and background colors.
    fn set_highlighted(&mut self, highlighted: bool, appearance: &mut RowAppearance) {
        appearance.displayed_background = if highlighted {
            appearance.highlight_color
        } else {
            appearance.background_color
        };
    }
}

/// Sizing capability: the content decides its extent along the stack axis.
pub trait RowSizing {
    /// Return `None` to defer to intrinsic layout.
    fn preferred_size(&self, axis: Axis, ctx: &RowContext) -> Option<SizeSpec>;
}

/// Reload capability, invoked by [`Stack::reload`](crate::Stack::reload).
pub trait ReloadableContent {
    fn reload_content(&mut self, ctx: &RowContext, animated: bool);
}

/// Timing of a row hide/show transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionInfo {
    /// Length of the transition after the delay.
    pub duration: Duration,
    /// Wait before the transition starts moving.
    pub delay: Duration,
    /// Spring damping ratio. Values below 1.0 overshoot.
    pub spring_damping: f32,
}

impl Default for TransitionInfo {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(250),
            delay: Duration::ZERO,
            spring_damping: 0.8,
        }
    }
}

/// Custom transition capability for row hide/show.
///
/// Hooks run in a fixed order: [`will_begin_transition`], then
/// [`animate_transition`] together with the row's own state change, then
/// [`did_end_transition`] once the timeline settles.
///
/// [`will_begin_transition`]: RowAnimatable::will_begin_transition
/// [`animate_transition`]: RowAnimatable::animate_transition
/// [`did_end_transition`]: RowAnimatable::did_end_transition
pub trait RowAnimatable {
    fn transition_info(&self) -> TransitionInfo {
        TransitionInfo::default()
    }

    fn will_begin_transition(&mut self, _to_hide: bool) {}

    fn animate_transition(&mut self, _to_hide: bool) {}

    fn did_end_transition(&mut self, _to_hide: bool) {}
}

/// A controller-like content unit that owns its view.
pub trait ContentController {
    /// Identity of this controller.
    fn id(&self) -> ContentId;

    /// The view the row lays out.
    fn view(&self) -> &dyn ContentView;

    fn view_mut(&mut self) -> &mut dyn ContentView;

    /// Sizing capability.
    fn sizing(&self) -> Option<&dyn RowSizing> {
        None
    }

    /// Reload capability.
    fn reloadable(&mut self) -> Option<&mut dyn ReloadableContent> {
        None
    }

    /// Custom transition capability.
    fn animatable(&mut self) -> Option<&mut dyn RowAnimatable> {
        None
    }

    /// Called before the controller joins or leaves a host.
    fn will_move_to_parent(&mut self, _parent: Option<HostId>) {}

    /// Called after the controller joined or left a host.
    fn did_move_to_parent(&mut self, _parent: Option<HostId>) {}
}

/// The content unit a row hosts.
pub enum Content {
    /// A controller and the view it owns.
    Controller(Box<dyn ContentController>),
    /// A bare view.
    View(Box<dyn ContentView>),
}

impl Content {
    /// Wrap a controller.
    pub fn controller(controller: impl ContentController + 'static) -> Self {
        Content::Controller(Box::new(controller))
    }

    /// Wrap a bare view.
    pub fn view(view: impl ContentView + 'static) -> Self {
        Content::View(Box::new(view))
    }

    /// Identity of the content unit: the controller's id, or the bare view's.
    pub fn id(&self) -> ContentId {
        match self {
            Content::Controller(controller) => controller.id(),
            Content::View(view) => view.id(),
        }
    }

    /// Identity of the view being laid out.
    pub fn view_id(&self) -> ContentId {
        self.content_view().id()
    }

    pub fn is_controller(&self) -> bool {
        matches!(self, Content::Controller(_))
    }

    pub fn as_controller(&self) -> Option<&dyn ContentController> {
        match self {
            Content::Controller(controller) => Some(controller.as_ref()),
            Content::View(_) => None,
        }
    }

    pub fn as_controller_mut(&mut self) -> Option<&mut dyn ContentController> {
        match self {
            Content::Controller(controller) => Some(controller.as_mut()),
            Content::View(_) => None,
        }
    }

    /// The view being laid out.
    pub fn content_view(&self) -> &dyn ContentView {
        match self {
            Content::Controller(controller) => controller.view(),
            Content::View(view) => view.as_ref(),
        }
    }

    pub fn content_view_mut(&mut self) -> &mut dyn ContentView {
        match self {
            Content::Controller(controller) => controller.view_mut(),
            Content::View(view) => view.as_mut(),
        }
    }

    pub(crate) fn sizing(&self) -> Option<&dyn RowSizing> {
        self.as_controller().and_then(|controller| controller.sizing())
    }

    pub(crate) fn reloadable(&mut self) -> Option<&mut dyn ReloadableContent> {
        self.as_controller_mut()
            .and_then(|controller| controller.reloadable())
    }

    pub(crate) fn animatable(&mut self) -> Option<&mut dyn RowAnimatable> {
        self.as_controller_mut()
            .and_then(|controller| controller.animatable())
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Controller(controller) => f
                .debug_tuple("Controller")
                .field(&controller.id())
                .finish(),
            Content::View(view) => f.debug_tuple("View").field(&view.id()).finish(),
        }
    }
}
