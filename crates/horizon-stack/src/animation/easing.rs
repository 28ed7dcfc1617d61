//! Timing curves for stack transitions.
//!
//! A curve maps linear progress (0.0 to 1.0) to the fraction of the change
//! that should be visible. Row hide/show uses a damped spring; layout and
//! scroll transitions use a plain easing function.

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in-out (smooth start and end).
    #[default]
    EaseInOut,
}

/// Apply an easing function to a progress value.
///
/// # Example
///
/// ```
/// use horizon_stack::animation::{ease, Easing};
///
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
/// assert!(ease(Easing::EaseInOut, 0.25) < 0.25);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
    }
}

/// ln(1000): the spring envelope decays to 0.1% by the end of the duration.
const SETTLE_DECAY: f32 = 6.907_755;

/// Normalized response of a damped spring released from 0 towards 1.
///
/// `damping` is the damping ratio. Below 1.0 the spring overshoots and
/// oscillates before settling; at 1.0 and above it approaches without
/// overshooting. The stiffness is chosen so the motion has settled by
/// `t = 1.0`, where the result is exactly 1.0.
pub fn spring(t: f32, damping: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let zeta = damping.max(0.01);
    if zeta < 1.0 {
        let omega = SETTLE_DECAY / zeta;
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega * t).exp();
        1.0 - envelope * ((omega_d * t).cos() + (zeta * omega / omega_d) * (omega_d * t).sin())
    } else {
        // Critically damped: e^-w (1 + w) reaches 0.001 near w = 9.23.
        let omega = 9.233_6;
        1.0 - (-omega * t).exp() * (1.0 + omega * t)
    }
}

/// A timing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// A standard easing function.
    Eased(Easing),
    /// A damped spring with the given damping ratio.
    Spring { damping: f32 },
}

impl Default for Curve {
    fn default() -> Self {
        Curve::Eased(Easing::default())
    }
}

impl Curve {
    /// Map linear progress to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Curve::Eased(easing) => ease(easing, t),
            Curve::Spring { damping } => spring(t, damping),
        }
    }
}
