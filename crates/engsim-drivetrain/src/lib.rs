//! Curve-driven drivetrain simulator
//!
//! This crate models an engine, clutch and gearbox driving a vehicle, one
//! fixed tick at a time. It aims for a convincing, responsive feel on screen
//! rather than physical accuracy: every nonlinearity is a tunable
//! [`engsim_curves::CubicBezier`] and every transient is a one-pole filter.
//!
//! - [`Drivetrain`]: configuration plus curves; `update(state, input) -> state`.
//! - [`Simulator`]: a drivetrain bundled with its current state.
//! - [`scenario`]: deterministic replay of scripted inputs.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod drivetrain;
pub mod error;
pub mod gear;
pub mod scenario;
pub mod simulator;
pub mod state;
pub mod units;

pub use config::{CurveSet, DrivetrainConfig};
pub use drivetrain::Drivetrain;
pub use error::{DrivetrainError, DrivetrainResult};
pub use gear::{Gear, ShiftIntent};
pub use scenario::{Scenario, ScenarioStep, TelemetryRecord, replay_scenario, run_scenario};
pub use simulator::Simulator;
pub use state::{DriverInput, DrivetrainState, GaugeReadout, Telemetry};
