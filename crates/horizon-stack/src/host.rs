//! The outermost container owning a stack.
//!
//! A [`HostContainer`] plays the part of the parent in the content
//! object graph. Every controller hosted by one of its rows becomes a child
//! of the container for as long as the row exists, and sees the matching
//! `will_move_to_parent`/`did_move_to_parent` calls. Bare views are not
//! tracked.
//!
//! The container also turns raw viewport events into stack calls.

use std::sync::Arc;
use std::time::Duration;

use horizon_stack_core::logging::targets;
use horizon_stack_core::{ContentId, EdgeInsets, HostId, Point, Size};
use parking_lot::Mutex;

use crate::config::StackConfig;
use crate::stack::{RowChange, RowChangeKind, Stack, TouchPhase};

/// Low-level events reported by the platform viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    /// The user or the platform scrolled to an offset.
    Scrolled(Point),
    /// The viewport changed size.
    Resized(Size),
    /// The reserved area around the content changed.
    ContentInsetChanged(EdgeInsets),
    /// A touch phase at a point in viewport coordinates.
    Touch { phase: TouchPhase, location: Point },
}

/// Owns a [`Stack`] and the parent/child bookkeeping for its content.
pub struct HostContainer {
    id: HostId,
    stack: Stack,
    children: Arc<Mutex<Vec<ContentId>>>,
    automatically_flash_scroll_indicators: bool,
}

impl HostContainer {
    /// Create a container with an empty stack.
    pub fn new(config: StackConfig) -> Self {
        let id = HostId::next();
        let mut stack = Stack::new(config);
        stack.set_parent(Some(id));

        let children: Arc<Mutex<Vec<ContentId>>> = Arc::default();
        let tracked = Arc::clone(&children);
        stack.row_changed.connect(move |change: &RowChange| {
            if !change.is_controller {
                return;
            }
            let mut children = tracked.lock();
            match change.kind {
                RowChangeKind::Added => {
                    if !children.contains(&change.content) {
                        children.push(change.content);
                    }
                }
                RowChangeKind::Removed => children.retain(|child| *child != change.content),
            }
        });

        tracing::debug!(target: targets::HOST, host = id.as_u64(), "host container created");
        Self {
            id,
            stack,
            children,
            automatically_flash_scroll_indicators: false,
        }
    }

    /// Set whether the scroll indicators flash when the container appears.
    pub fn with_automatically_flash_scroll_indicators(mut self, flash: bool) -> Self {
        self.automatically_flash_scroll_indicators = flash;
        self
    }

    pub fn id(&self) -> HostId {
        self.id
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Controllers currently parented to this container, in the order they
    /// were added.
    pub fn children(&self) -> Vec<ContentId> {
        self.children.lock().clone()
    }

    pub fn is_child(&self, content: ContentId) -> bool {
        self.children.lock().contains(&content)
    }

    pub fn child_count(&self) -> usize {
        self.children.lock().len()
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    pub fn automatically_flash_scroll_indicators(&self) -> bool {
        self.automatically_flash_scroll_indicators
    }

    pub fn set_automatically_flash_scroll_indicators(&mut self, flash: bool) {
        self.automatically_flash_scroll_indicators = flash;
    }

    /// The container became visible.
    pub fn view_did_appear(&mut self) {
        if self.automatically_flash_scroll_indicators {
            self.stack.viewport_mut().flash_scroll_indicators();
        }
    }

    /// Relay a viewport event to the stack.
    ///
    /// Returns `true` for touches taken by a row (or, on
    /// [`TouchPhase::Ended`], completing a tap) and for every other event.
    pub fn handle_viewport_event(&mut self, event: ViewportEvent) -> bool {
        tracing::trace!(target: targets::HOST, ?event, "viewport event");
        match event {
            ViewportEvent::Scrolled(offset) => {
                self.stack.set_content_offset(offset, false);
                true
            }
            ViewportEvent::Resized(size) => {
                self.stack.set_viewport_size(size);
                true
            }
            ViewportEvent::ContentInsetChanged(inset) => {
                self.stack.set_content_inset(inset);
                true
            }
            ViewportEvent::Touch { phase, location } => self.stack.handle_touch(phase, location),
        }
    }

    /// Drive the stack's animations.
    pub fn advance(&mut self, dt: Duration) {
        self.stack.advance(dt);
    }
}

impl std::fmt::Debug for HostContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostContainer")
            .field("id", &self.id)
            .field("stack", &self.stack)
            .field("children", &self.child_count())
            .finish_non_exhaustive()
    }
}
