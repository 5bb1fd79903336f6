//! Mutable convenience wrapper for frame-loop callers.

use crate::config::DrivetrainConfig;
use crate::drivetrain::Drivetrain;
use crate::error::DrivetrainResult;
use crate::gear::{Gear, ShiftIntent};
use crate::state::{DriverInput, DrivetrainState, GaugeReadout, Telemetry};

/// One drivetrain plus its current state.
///
/// Suits callers that poll input once per frame and only want the telemetry
/// back. Callers that need to branch or replay state should use
/// [`Drivetrain`] directly.
#[derive(Debug, Clone)]
pub struct Simulator {
    drivetrain: Drivetrain,
    state: DrivetrainState,
}

impl Simulator {
    pub fn new(config: DrivetrainConfig) -> DrivetrainResult<Self> {
        Ok(Self::from_drivetrain(Drivetrain::new(config)?))
    }

    /// Start at the drivetrain's initial state.
    pub fn from_drivetrain(drivetrain: Drivetrain) -> Self {
        let state = drivetrain.initial_state();
        Self { drivetrain, state }
    }

    pub fn drivetrain(&self) -> &Drivetrain {
        &self.drivetrain
    }

    pub fn state(&self) -> &DrivetrainState {
        &self.state
    }

    /// Replace the current state, e.g. to start from a saved snapshot.
    pub fn set_state(&mut self, state: DrivetrainState) {
        self.state = state;
    }

    /// Back to the initial state.
    pub fn reset(&mut self) {
        self.state = self.drivetrain.initial_state();
    }

    /// Advance one tick and return the telemetry triple.
    pub fn update(&mut self, input: DriverInput) -> Telemetry {
        self.state = self.drivetrain.update(&self.state, input);
        Telemetry::from(&self.state)
    }

    /// Request `target`; returns the gear actually engaged.
    pub fn change_gear(&mut self, target: Gear) -> Gear {
        self.state = self.drivetrain.change_gear(&self.state, target);
        self.state.gear
    }

    /// Apply a shift event; returns the gear actually engaged.
    pub fn shift(&mut self, intent: ShiftIntent) -> Gear {
        self.state = self.drivetrain.shift(&self.state, intent);
        self.state.gear
    }

    pub fn gauges(&self) -> GaugeReadout {
        self.drivetrain.gauges(&self.state)
    }
}
