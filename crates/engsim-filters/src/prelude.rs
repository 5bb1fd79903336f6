//! Prelude for the filters crate.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! # Example
//!
//! ```
//! use engsim_filters::prelude::*;
//!
//! let mut state = OnePoleState::new(0.2, 0.0);
//! state.step(1.0);
//! state.reset();
//! assert!(state.value.abs() < f64::EPSILON);
//! ```

pub use crate::decay::{DecayState, decay};
pub use crate::one_pole::{OnePoleState, one_pole};
pub use crate::state::FilterState;
