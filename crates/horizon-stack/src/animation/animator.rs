//! Row hide/show transitions.
//!
//! A [`RowAnimator`] runs exactly one transition. Executing it calls the
//! content's `will_begin_transition` hook, then starts the timed block: the
//! content's `animate_transition` hook and the row's own hidden-flag change
//! happen together, so both settle on the same curve. What comes back is a
//! [`RowTransition`] that the stack's timeline advances. When the timeline
//! finishes it, `did_end_transition` runs and the stack carries out the
//! [`TransitionEnd`].

use horizon_stack_core::logging::targets;

use super::easing::Curve;
use super::transition::Transition;
use crate::content::{Content, TransitionInfo};
use crate::row::{Row, RowId};

/// Callback fired once when an operation's transitions settle.
///
/// The flag is `false` when the transition was interrupted by a newer one.
pub type Completion = Box<dyn FnOnce(bool)>;

/// What the stack does once a row transition ends.
pub(crate) enum TransitionEnd {
    /// Fire the caller's completion, if any.
    Complete(Option<Completion>),
    /// Detach the row from the stack.
    Detach,
    /// Detach the row, then fade in its replacement.
    DetachThenReveal(RowId),
}

impl std::fmt::Debug for TransitionEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionEnd::Complete(completion) => f
                .debug_tuple("Complete")
                .field(&completion.is_some())
                .finish(),
            TransitionEnd::Detach => f.write_str("Detach"),
            TransitionEnd::DetachThenReveal(row) => {
                f.debug_tuple("DetachThenReveal").field(row).finish()
            }
        }
    }
}

/// Runs one hide/show transition for one row.
#[derive(Debug)]
pub struct RowAnimator {
    row: RowId,
    to_hidden: bool,
    fallback: TransitionInfo,
}

impl RowAnimator {
    /// `fallback` is the timing used when the content is not animatable.
    pub fn new(row: RowId, to_hidden: bool, fallback: TransitionInfo) -> Self {
        Self {
            row,
            to_hidden,
            fallback,
        }
    }

    /// Run the pre-hook and start the timed block.
    pub(crate) fn execute(self, row: &mut Row, on_end: TransitionEnd) -> RowTransition {
        let to_hidden = self.to_hidden;

        let info = match row.content_mut().and_then(Content::animatable) {
            Some(animatable) => {
                let info = animatable.transition_info();
                animatable.will_begin_transition(to_hidden);
                info
            }
            None => self.fallback,
        };

        if let Some(animatable) = row.content_mut().and_then(Content::animatable) {
            animatable.animate_transition(to_hidden);
        }
        row.set_hidden(to_hidden);

        // Hidden rows already sit at alpha 0; an interrupted fade resumes here.
        let from_alpha = row.alpha();
        let to_alpha = if to_hidden { 0.0 } else { 1.0 };
        row.set_alpha(from_alpha);

        tracing::debug!(
            target: targets::ANIMATION,
            row = ?self.row,
            to_hidden,
            duration_ms = info.duration.as_millis() as u64,
            damping = info.spring_damping,
            "row transition started"
        );

        RowTransition {
            row: self.row,
            to_hidden,
            from_alpha,
            to_alpha,
            transition: Transition::new(
                info.duration,
                Curve::Spring {
                    damping: info.spring_damping,
                },
            )
            .with_delay(info.delay),
            on_end,
        }
    }
}

/// A row transition in flight.
#[derive(Debug)]
pub(crate) struct RowTransition {
    pub(crate) row: RowId,
    to_hidden: bool,
    from_alpha: f32,
    to_alpha: f32,
    pub(crate) transition: Transition,
    on_end: TransitionEnd,
}

impl RowTransition {
    /// Show the row at `progress`.
    pub(crate) fn apply(&self, row: &mut Row, progress: f32) {
        row.set_alpha(self.from_alpha + (self.to_alpha - self.from_alpha) * progress);
    }

    /// Run the post-hook and hand back what the stack should do next.
    pub(crate) fn finish(self, row: Option<&mut Row>, finished: bool) -> TransitionEnd {
        if let Some(row) = row {
            if finished {
                row.set_alpha(self.to_alpha);
            }
            if let Some(animatable) = row.content_mut().and_then(Content::animatable) {
                animatable.did_end_transition(self.to_hidden);
            }
        }
        tracing::debug!(
            target: targets::ANIMATION,
            row = ?self.row,
            to_hidden = self.to_hidden,
            finished,
            "row transition ended"
        );
        self.on_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StackConfig;
    use crate::content::{ContentController, ContentView, RowAnimatable};
    use crate::geometry::Axis;
    use horizon_stack_core::ContentId;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Blank(ContentId);

    impl ContentView for Blank {
        fn id(&self) -> ContentId {
            self.0
        }
    }

    struct Fader {
        id: ContentId,
        view: Blank,
        log: Log,
    }

    impl RowAnimatable for Fader {
        fn transition_info(&self) -> TransitionInfo {
            TransitionInfo {
                duration: Duration::from_millis(400),
                delay: Duration::from_millis(100),
                spring_damping: 0.6,
            }
        }

        fn will_begin_transition(&mut self, to_hide: bool) {
            self.log.borrow_mut().push(format!("will_begin({to_hide})"));
        }

        fn animate_transition(&mut self, to_hide: bool) {
            self.log.borrow_mut().push(format!("animate({to_hide})"));
        }

        fn did_end_transition(&mut self, to_hide: bool) {
            self.log.borrow_mut().push(format!("did_end({to_hide})"));
        }
    }

    impl ContentController for Fader {
        fn id(&self) -> ContentId {
            self.id
        }

        fn view(&self) -> &dyn ContentView {
            &self.view
        }

        fn view_mut(&mut self) -> &mut dyn ContentView {
            &mut self.view
        }

        fn animatable(&mut self) -> Option<&mut dyn RowAnimatable> {
            Some(self)
        }
    }

    fn setup(content: Content) -> Row {
        Row::new(RowId::default(), content, &StackConfig::new(), Axis::Vertical)
    }

    #[test]
    fn test_hooks_run_in_order() {
        let log: Log = Rc::default();
        let mut row = setup(Content::controller(Fader {
            id: ContentId::next(),
            view: Blank(ContentId::next()),
            log: log.clone(),
        }));

        let running = RowAnimator::new(row.id(), true, TransitionInfo::default())
            .execute(&mut row, TransitionEnd::Detach);

        assert!(row.is_hidden());
        assert_eq!(*log.borrow(), vec!["will_begin(true)", "animate(true)"]);
        assert_eq!(running.transition.duration(), Duration::from_millis(400));
        assert_eq!(running.transition.delay(), Duration::from_millis(100));

        let end = running.finish(Some(&mut row), true);
        assert!(matches!(end, TransitionEnd::Detach));
        assert_eq!(
            *log.borrow(),
            vec!["will_begin(true)", "animate(true)", "did_end(true)"]
        );
        assert_eq!(row.alpha(), 0.0);
    }

    #[test]
    fn test_plain_content_uses_fallback_timing() {
        let mut row = setup(Content::view(Blank(ContentId::next())));
        let fallback = TransitionInfo {
            duration: Duration::from_millis(250),
            delay: Duration::ZERO,
            spring_damping: 1.0,
        };
        let running =
            RowAnimator::new(row.id(), true, fallback).execute(&mut row, TransitionEnd::Detach);
        assert_eq!(running.transition.duration(), Duration::from_millis(250));
        assert_eq!(running.transition.curve(), Curve::Spring { damping: 1.0 });
    }

    #[test]
    fn test_show_fades_in_from_hidden() {
        let mut row = setup(Content::view(Blank(ContentId::next())));
        row.set_hidden(true);
        row.set_alpha(0.0);

        let mut running = RowAnimator::new(row.id(), false, TransitionInfo::default())
            .execute(&mut row, TransitionEnd::Complete(None));
        assert!(!row.is_hidden());
        assert_eq!(row.alpha(), 0.0);

        let progress = running
            .transition
            .advance(Duration::from_millis(125))
            .progress();
        running.apply(&mut row, progress);
        assert!(row.alpha() > 0.0);

        running.finish(Some(&mut row), true);
        assert_eq!(row.alpha(), 1.0);
    }

    #[test]
    fn test_show_starts_from_current_alpha() {
        let mut row = setup(Content::view(Blank(ContentId::next())));
        let hide = RowAnimator::new(row.id(), true, TransitionInfo::default())
            .execute(&mut row, TransitionEnd::Complete(None));
        hide.apply(&mut row, 0.4);
        let partway = row.alpha();
        assert!(partway > 0.0);

        let show = RowAnimator::new(row.id(), false, TransitionInfo::default())
            .execute(&mut row, TransitionEnd::Complete(None));

        assert!((row.alpha() - partway).abs() < f32::EPSILON);
        show.finish(Some(&mut row), true);
        assert_eq!(row.alpha(), 1.0);
    }
}
