//! Multiplicative Decay
//!
//! Per-tick proportional loss, used for rolling friction (0.999), hard
//! braking (0.96) and the curve-driven engine braking factor.

/// Multiply `value` by `factor` once.
#[inline]
pub fn decay(value: f64, factor: f64) -> f64 {
    value * factor
}

/// Stateful decay with a fixed per-tick factor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DecayState {
    /// Factor applied per tick, normally in `(0, 1]`.
    pub factor: f64,
    /// Current value.
    pub value: f64,
    /// Value restored by [`crate::FilterState::reset`].
    pub initial: f64,
}

impl DecayState {
    /// Create a decay starting at `initial`.
    pub fn new(factor: f64, initial: f64) -> Self {
        Self {
            factor,
            value: initial,
            initial,
        }
    }

    /// Rolling friction of a coasting vehicle.
    pub fn coasting(initial: f64) -> Self {
        Self::new(0.999, initial)
    }

    /// Hard braking.
    pub fn braking(initial: f64) -> Self {
        Self::new(0.96, initial)
    }

    /// Advance one tick and return the new value.
    #[inline]
    pub fn step(&mut self) -> f64 {
        self.value = decay(self.value, self.factor);
        self.value
    }
}
