//! Logging facilities for Horizon Stack.
//!
//! Horizon Stack uses the `tracing` crate for instrumentation. To see logs,
//! you need to install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_stack=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Span names used throughout Horizon Stack for tracing.
pub mod span_names {
    /// A full layout pass over the stack.
    pub const LAYOUT_PASS: &str = "horizon_stack::layout_pass";
    /// One tick of the animation timeline.
    pub const TIMELINE: &str = "horizon_stack::timeline";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal emission.
    pub const SIGNAL: &str = "horizon_stack_core::signal";
    /// Structural mutations on the stack.
    pub const STACK: &str = "horizon_stack::stack";
    /// Row sizing and appearance.
    pub const ROW: &str = "horizon_stack::row";
    /// Row transitions and the animation timeline.
    pub const ANIMATION: &str = "horizon_stack::animation";
    /// Visibility classification.
    pub const VISIBILITY: &str = "horizon_stack::visibility";
    /// Host container relays.
    pub const HOST: &str = "horizon_stack::host";
    /// Configuration loading.
    pub const CONFIG: &str = "horizon_stack::config";
    /// Performance spans.
    pub const PERF: &str = "horizon_stack::perf";
}

/// A guard that keeps a performance span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_stack::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
