//! Filter State Types
//!
//! This module aggregates all filter state types for convenient access.

pub use crate::decay::DecayState;
pub use crate::one_pole::OnePoleState;

/// Filter trait for common filter operations.
pub trait FilterState: Copy + Clone + std::fmt::Debug {
    /// Reset the filter state to its initial value.
    fn reset(&mut self);
}

impl FilterState for OnePoleState {
    fn reset(&mut self) {
        self.value = self.initial;
    }
}

impl FilterState for DecayState {
    fn reset(&mut self) {
        self.value = self.initial;
    }
}
