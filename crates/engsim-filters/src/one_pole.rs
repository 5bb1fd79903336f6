//! One-Pole Smoother
//!
//! Exponential smoothing toward a target: every tick the output moves a fixed
//! fraction of the remaining distance. The drivetrain uses it for all of its
//! "ease N% toward X" steps, with the coefficient either constant or read from
//! a response curve.

use engsim_curves::lerp;

/// One step of a one-pole low-pass filter.
///
/// Returns `previous + (target - previous) * coefficient`. A coefficient of 0
/// holds the previous value, 1 jumps straight to the target. The coefficient
/// is not clamped; values outside `[0,1]` overshoot or move away.
///
/// # Example
///
/// ```
/// use engsim_filters::one_pole;
///
/// let rpm = one_pole(800.0, 7000.0, 0.1);
/// assert!((rpm - 1420.0).abs() < 1e-9);
/// ```
#[inline]
pub fn one_pole(previous: f64, target: f64, coefficient: f64) -> f64 {
    lerp(previous, target, coefficient)
}

/// Stateful one-pole smoother with a fixed coefficient.
///
/// # Example
///
/// ```
/// use engsim_filters::OnePoleState;
///
/// let mut state = OnePoleState::new(0.5, 0.0);
/// state.step(1.0);
/// state.step(1.0);
/// assert!((state.value - 0.75).abs() < 1e-12);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OnePoleState {
    /// Fraction of the remaining distance covered per tick.
    pub coefficient: f64,
    /// Current output.
    pub value: f64,
    /// Value restored by [`crate::FilterState::reset`].
    pub initial: f64,
}

impl OnePoleState {
    /// Create a smoother starting at `initial`.
    pub fn new(coefficient: f64, initial: f64) -> Self {
        Self {
            coefficient,
            value: initial,
            initial,
        }
    }

    /// Advance one tick toward `target` and return the new output.
    #[inline]
    pub fn step(&mut self, target: f64) -> f64 {
        self.value = one_pole(self.value, target, self.coefficient);
        self.value
    }
}
