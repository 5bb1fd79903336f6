//! Per-Tick Filters for engsim
//!
//! This crate provides the small set of discrete-time filters the drivetrain
//! applies once per simulation tick.
//!
//! # Overview
//!
//! - **One-pole**: exponential smoothing toward a target
//!   ([`one_pole`], [`OnePoleState`])
//! - **Decay**: proportional per-tick loss ([`decay`], [`DecayState`])
//!
//! Both come as a pure function over plain values, which is what the
//! drivetrain calls, and as a small `Copy` state type for callers that keep
//! the filter output between ticks.
//!
//! # Tick Model
//!
//! Nothing here knows about time. One call is one tick; the caller owns the
//! cadence.
//!
//! # Example
//!
//! ```
//! use engsim_filters::prelude::*;
//!
//! let mut rpm = OnePoleState::new(0.03, 5000.0);
//! let mut speed = DecayState::coasting(100.0);
//!
//! for _ in 0..10 {
//!     rpm.step(800.0);
//!     speed.step();
//! }
//! assert!(rpm.value < 5000.0);
//! assert!(speed.value < 100.0);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod decay;
pub mod one_pole;
pub mod prelude;
pub mod state;

pub use decay::{DecayState, decay};
pub use one_pole::{OnePoleState, one_pole};
pub use state::*;
