//! Horizon Stack - a scrollable, single-axis stack of rows.
//!
//! A [`Stack`] owns an ordered list of [`Row`]s. Each row hosts one content
//! unit (a [`ContentController`] or a bare [`ContentView`]), draws a
//! [`Separator`] along its trailing edge and can be hidden, shown, moved,
//! replaced or removed with or without animation. The stack lays its rows out
//! edge to edge along an [`Axis`], scrolls them through a viewport and tells a
//! [`StackObserver`] which rows enter and leave view.
//!
//! [`HostContainer`] wraps a stack the way a parent screen would: hosted
//! controllers become its children and see their parent hooks.
//!
//! # Driving the stack
//!
//! Nothing in this crate reads a clock or spawns threads. Animated operations
//! update the model at once and queue a transition on the stack's timeline;
//! the embedder calls [`Stack::advance`] once per frame with the elapsed time.
//!
//! # Logging
//!
//! Every subsystem logs through [`tracing`] under the targets in
//! [`horizon_stack_core::logging::targets`]. Install any subscriber to see
//! them, e.g. `RUST_LOG=horizon_stack::stack=debug`.

pub mod animation;
pub mod config;
pub mod content;
pub mod error;
pub mod geometry;
pub mod host;
pub mod layout;
pub mod observer;
pub mod prelude;
pub mod row;
pub mod separator;
pub mod stack;
pub mod viewport;
pub mod visibility;

pub use animation::Completion;
pub use config::{AnimationConfig, SeparatorConfig, StackConfig};
pub use content::{
    Content, ContentController, ContentView, ReloadableContent, RowAnimatable, RowContext,
    RowHighlightable, RowSizing, TransitionInfo,
};
pub use error::{StackError, StackResult};
pub use geometry::{Axis, AxisConstraint, FittingPriority, SizeConstraint, SizeHint, SizeSpec};
pub use host::{HostContainer, ViewportEvent};
pub use observer::StackObserver;
pub use row::{Row, RowAppearance, RowId};
pub use separator::Separator;
pub use stack::{
    InsertLocation, RowChange, RowChangeKind, ScrollPosition, Stack, TouchPhase,
};
pub use viewport::Viewport;
pub use visibility::{RowVisibility, VisibilityChange};

pub use horizon_stack_core::{Color, ContentId, EdgeInsets, HostId, Point, Rect, Signal, Size};

static_assertions::assert_impl_all!(RowId: Send, Sync, Copy);
static_assertions::assert_impl_all!(StackConfig: Send, Sync, Clone);
static_assertions::assert_impl_all!(RowChange: Send, Sync, Clone);
static_assertions::assert_impl_all!(Axis: Send, Sync, Copy);
