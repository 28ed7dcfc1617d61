//! Tick-driven transition progress.

use std::time::Duration;

use super::easing::Curve;

/// Current state of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TransitionState {
    /// Still inside the start delay.
    #[default]
    Waiting,
    /// Transition is running.
    Running {
        /// Eased progress; may leave 0.0..=1.0 briefly on a spring.
        progress: f32,
    },
    /// The full duration has elapsed.
    Finished,
}

impl TransitionState {
    /// Check if a transition is still in progress.
    pub fn is_running(&self) -> bool {
        !matches!(self, TransitionState::Finished)
    }

    /// Get the eased progress.
    pub fn progress(&self) -> f32 {
        match self {
            TransitionState::Waiting => 0.0,
            TransitionState::Running { progress } => *progress,
            TransitionState::Finished => 1.0,
        }
    }
}

/// A transition animation controller.
///
/// Progress only moves when the owner calls [`advance`](Self::advance), so a
/// transition that is never advanced never finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Timing curve.
    curve: Curve,
    /// Duration of the transition, excluding the delay.
    duration: Duration,
    /// Wait before progress starts.
    delay: Duration,
    /// Time fed in so far.
    elapsed: Duration,
}

impl Transition {
    /// Create a transition.
    pub fn new(duration: Duration, curve: Curve) -> Self {
        Self {
            curve,
            duration,
            delay: Duration::ZERO,
            elapsed: Duration::ZERO,
        }
    }

    /// Set the start delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[inline]
    pub fn curve(&self) -> Curve {
        self.curve
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Feed elapsed time and return the new state.
    pub fn advance(&mut self, dt: Duration) -> TransitionState {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.state()
    }

    /// Jump to the end.
    pub fn finish(&mut self) -> TransitionState {
        self.elapsed = self.end();
        self.state()
    }

    /// Linear progress from 0.0 to 1.0, ignoring the curve.
    pub fn linear_progress(&self) -> f32 {
        let active = self.elapsed.saturating_sub(self.delay);
        if self.duration.is_zero() {
            return if self.elapsed >= self.delay { 1.0 } else { 0.0 };
        }
        (active.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Whether the full delay and duration have elapsed.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.end()
    }

    /// Delay plus duration, saturating at `Duration::MAX`.
    fn end(&self) -> Duration {
        self.delay.saturating_add(self.duration)
    }

    /// The current state.
    pub fn state(&self) -> TransitionState {
        if self.is_finished() {
            TransitionState::Finished
        } else if self.elapsed < self.delay {
            TransitionState::Waiting
        } else {
            TransitionState::Running {
                progress: self.curve.apply(self.linear_progress()),
            }
        }
    }
}
