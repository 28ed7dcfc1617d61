//! Prelude module for Horizon Stack.
//!
//! ```ignore
//! use horizon_stack::prelude::*;
//! ```
//!
//! This provides access to:
//! - The stack and its host (`Stack`, `HostContainer`)
//! - Content traits (`ContentView`, `ContentController`, `RowSizing`, etc.)
//! - Rows and separators (`Row`, `RowId`, `Separator`)
//! - Geometry types (`Point`, `Size`, `Rect`, `EdgeInsets`, `Color`)

// ============================================================================
// Stack
// ============================================================================

pub use crate::host::{HostContainer, ViewportEvent};
pub use crate::stack::{
    InsertLocation, RowChange, RowChangeKind, ScrollPosition, Stack, TouchPhase,
};
pub use crate::config::StackConfig;
pub use crate::observer::StackObserver;
pub use crate::visibility::RowVisibility;

// ============================================================================
// Content
// ============================================================================

pub use crate::content::{
    Content, ContentController, ContentView, ReloadableContent, RowAnimatable, RowContext,
    RowHighlightable, RowSizing, TransitionInfo,
};

// ============================================================================
// Rows
// ============================================================================

pub use crate::animation::Completion;
pub use crate::row::{Row, RowAppearance, RowId};
pub use crate::separator::Separator;

// ============================================================================
// Geometry
// ============================================================================

pub use crate::geometry::{Axis, FittingPriority, SizeHint, SizeSpec};
pub use horizon_stack_core::{Color, ContentId, EdgeInsets, HostId, Point, Rect, Size};
