//! Animation support for the stack.
//!
//! - [`easing`]: easing functions and the damped spring curve
//! - [`transition`]: tick-driven progress of one transition
//! - [`animator`]: row hide/show transitions
//!
//! Nothing here reads a clock. The host calls
//! [`Stack::advance`](crate::Stack::advance) with the elapsed time, and every
//! running transition moves forward by that much.

pub mod animator;
pub mod easing;
pub(crate) mod timeline;
pub mod transition;

pub use animator::{Completion, RowAnimator};
pub use easing::{Curve, Easing, ease, spring};
pub use transition::{Transition, TransitionState};
