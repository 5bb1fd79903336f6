//! Per-tick values: driver input, drivetrain state and telemetry outputs.

use serde::{Deserialize, Serialize};

use crate::gear::Gear;

/// Engagement below which the clutch counts as disengaged and gear changes
/// are allowed.
pub const CLUTCH_DISENGAGED_THRESHOLD: f64 = 0.05;

/// Everything that changes from one tick to the next.
///
/// A state is a plain value. [`crate::Drivetrain::update`] returns a new one
/// and leaves its argument untouched.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrivetrainState {
    pub gear: Gear,
    pub crankshaft_rpm: f64,
    pub drivetrain_rpm: f64,
    /// Signed road speed in km/h; negative in reverse.
    pub velocity: f64,
    /// Throttle seen on the last tick, `[0,1]`.
    pub throttle: f64,
    /// Effective clutch engagement from the last tick: 0 decoupled, 1 locked.
    pub clutch: f64,
}

impl DrivetrainState {
    /// True when the clutch is far enough out to change gear.
    pub fn is_clutch_disengaged(&self) -> bool {
        self.clutch < CLUTCH_DISENGAGED_THRESHOLD
    }
}

/// Raw driver controls for one tick.
///
/// `clutch_pedal` is pedal travel: 0 released (clutch engaged), 1 pressed to
/// the floor (clutch disengaged).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverInput {
    pub throttle: f64,
    pub clutch_pedal: f64,
    pub brake: bool,
}

impl DriverInput {
    pub fn new(throttle: f64, clutch_pedal: f64, brake: bool) -> Self {
        Self {
            throttle,
            clutch_pedal,
            brake,
        }
    }

    /// Pedals clamped into `[0,1]`, with NaN read as released.
    pub fn clamped(self) -> Self {
        Self {
            throttle: unit(self.throttle),
            clutch_pedal: unit(self.clutch_pedal),
            brake: self.brake,
        }
    }
}

fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// The `(effective_clutch, crankshaft_rpm, velocity)` triple handed to
/// display and transport collaborators after every tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub effective_clutch: f64,
    pub crankshaft_rpm: f64,
    pub velocity: f64,
}

impl Telemetry {
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.effective_clutch, self.crankshaft_rpm, self.velocity)
    }
}

impl From<&DrivetrainState> for Telemetry {
    fn from(state: &DrivetrainState) -> Self {
        Self {
            effective_clutch: state.clutch,
            crankshaft_rpm: state.crankshaft_rpm,
            velocity: state.velocity,
        }
    }
}

impl From<DrivetrainState> for Telemetry {
    fn from(state: DrivetrainState) -> Self {
        Self::from(&state)
    }
}

/// Gauge needle positions, both normalized to `[0,1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GaugeReadout {
    /// Crankshaft RPM over the rev ceiling.
    pub rpm: f64,
    /// Road speed magnitude over the top speed.
    pub velocity: f64,
}
