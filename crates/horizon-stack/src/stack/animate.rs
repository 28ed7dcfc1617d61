//! Driving the stack's timeline.

use std::time::Duration;

use horizon_stack_core::logging::{span_names, targets};
use horizon_stack_core::{PerfSpan, Rect};

use super::Stack;
use crate::animation::animator::{Completion, RowAnimator, RowTransition, TransitionEnd};
use crate::animation::timeline::LayoutTransition;
use crate::animation::transition::Transition;
use crate::row::RowId;

/// Upper bound on settle rounds in [`Stack::finish_animations`]; each round
/// may start follow-up transitions.
const MAX_FINISH_ROUNDS: usize = 32;

impl Stack {
    /// Move every running transition forward by `dt`.
    ///
    /// Completions and end actions run here, in the order their transitions
    /// finish: row transitions first, then layout transitions.
    pub fn advance(&mut self, dt: Duration) {
        if self.timeline.is_idle() {
            return;
        }
        let _perf = PerfSpan::new(span_names::TIMELINE);

        let mut finished_rows = Vec::new();
        let mut i = 0;
        while i < self.timeline.rows.len() {
            let running = &mut self.timeline.rows[i];
            let state = running.transition.advance(dt);
            if let Some(row) = self.rows.get_mut(running.row) {
                running.apply(row, state.progress());
            }
            if state.is_running() {
                i += 1;
            } else {
                finished_rows.push(self.timeline.rows.remove(i));
            }
        }

        let mut finished_layouts = Vec::new();
        let mut i = 0;
        while i < self.timeline.layouts.len() {
            let layout = &mut self.timeline.layouts[i];
            let state = layout.transition.advance(dt);
            let progress = state.progress();
            for (id, from) in &layout.from {
                if let Some(row) = self.rows.get_mut(*id) {
                    let target = row.frame();
                    row.set_presentation_frame(from.lerp(&target, progress));
                }
            }
            if state.is_running() {
                i += 1;
            } else {
                finished_layouts.push(self.timeline.layouts.remove(i));
            }
        }

        if let Some(scroll) = self.timeline.scroll.as_mut() {
            let state = scroll.transition.advance(dt);
            let offset = scroll.offset_at(state.progress());
            if !state.is_running() {
                self.timeline.scroll = None;
            }
            self.apply_content_offset(offset);
        }

        for transition in finished_rows {
            self.finish_row_transition(transition, true);
        }
        for layout in finished_layouts {
            if let Some(completion) = layout.completion {
                completion(true);
            }
        }
    }

    /// Jump every running transition to its end.
    pub fn finish_animations(&mut self) {
        for _ in 0..MAX_FINISH_ROUNDS {
            if self.timeline.is_idle() {
                return;
            }
            self.advance(Duration::MAX);
        }
        tracing::warn!(
            target: targets::ANIMATION,
            "transitions keep scheduling follow-ups; giving up settling the timeline"
        );
    }

    /// Whether any transition is still running.
    pub fn has_running_animations(&self) -> bool {
        !self.timeline.is_idle()
    }

    /// Whether `row` has a hide/show transition in flight.
    pub fn is_row_animating(&self, row: RowId) -> bool {
        self.timeline.is_row_animating(row)
    }

    /// Start a hide/show transition on `id`.
    ///
    /// `from` holds the frames rows were shown at before the change; the
    /// layout that follows slides them to their new frames on the same
    /// timing as the row transition.
    pub(super) fn start_row_transition(
        &mut self,
        id: RowId,
        to_hidden: bool,
        on_end: TransitionEnd,
        from: Vec<(RowId, Rect)>,
    ) {
        if let Some(previous) = self.timeline.take_row(id) {
            tracing::debug!(target: targets::ANIMATION, row = ?id, "interrupting running row transition");
            self.finish_row_transition(previous, false);
        }

        let fallback = self.config.animation.row_transition();
        let Some(row) = self.rows.get_mut(id) else {
            // Settling the previous transition detached the row.
            self.run_end_action(id, on_end, false);
            return;
        };
        let running = RowAnimator::new(id, to_hidden, fallback).execute(row, on_end);
        let timing = running.transition.clone();
        self.timeline.rows.push(running);

        self.layout_pass();
        self.begin_layout_transition(from, timing, None);
    }

    /// Run the post-hook of a transition and carry out its end action.
    pub(super) fn finish_row_transition(&mut self, transition: RowTransition, finished: bool) {
        let id = transition.row;
        let end = transition.finish(self.rows.get_mut(id), finished);
        self.run_end_action(id, end, finished);
    }

    fn run_end_action(&mut self, id: RowId, end: TransitionEnd, finished: bool) {
        match end {
            TransitionEnd::Complete(Some(completion)) => completion(finished),
            TransitionEnd::Complete(None) => {}
            TransitionEnd::Detach => {
                self.detach_row(id);
            }
            TransitionEnd::DetachThenReveal(next) => {
                self.detach_row(id);
                self.reveal(next);
            }
        }
    }

    /// Show rows at `from` and move them to their laid-out frames over
    /// `transition`.
    pub(super) fn begin_layout_transition(
        &mut self,
        from: Vec<(RowId, Rect)>,
        transition: Transition,
        completion: Option<Completion>,
    ) {
        let from: Vec<(RowId, Rect)> = from
            .into_iter()
            .filter(|(id, _)| self.rows.contains_key(*id))
            .collect();
        if from.is_empty() && completion.is_none() {
            return;
        }
        for (id, frame) in &from {
            if let Some(row) = self.rows.get_mut(*id) {
                row.set_presentation_frame(*frame);
            }
        }
        tracing::trace!(
            target: targets::ANIMATION,
            rows = from.len(),
            duration_ms = transition.duration().as_millis() as u64,
            "layout transition started"
        );
        self.timeline.layouts.push(LayoutTransition {
            transition,
            from,
            completion,
        });
    }
}
