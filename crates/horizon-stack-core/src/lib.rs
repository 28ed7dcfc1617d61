//! Core types for Horizon Stack.
//!
//! This crate provides the foundation the stack engine is built on:
//!
//! - **Geometry**: [`Point`], [`Size`], [`Rect`], [`EdgeInsets`] and [`Color`]
//! - **Identity**: [`ContentId`] and [`HostId`] handles
//! - **Signal/Slot System**: [`Signal`] for synchronous change notification
//! - **Logging**: tracing targets and helpers in [`logging`]

pub mod id;
pub mod logging;
pub mod signal;
mod types;

pub use id::{ContentId, HostId};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
pub use types::{Color, EdgeInsets, ParseColorError, Point, Rect, Size};

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);
static_assertions::assert_impl_all!(ContentId: Send, Sync, Copy);
static_assertions::assert_impl_all!(Rect: Send, Sync, Copy);
