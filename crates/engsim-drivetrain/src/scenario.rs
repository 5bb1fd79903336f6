//! Scripted input replay.
//!
//! A [`Scenario`] is a list of input steps, each held for a number of ticks.
//! Replaying it yields one [`TelemetryRecord`] per tick, identical across runs
//! for identical inputs.
//!
//! ```yaml
//! initial_gear: 1
//! steps:
//!   - { throttle: 1.0, ticks: 300 }
//!   - { clutch_pedal: 1.0, shift: up }
//!   - { throttle: 1.0, ticks: 300 }
//! ```

use std::ops::ControlFlow;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::is_json;
use crate::drivetrain::Drivetrain;
use crate::error::{DrivetrainError, DrivetrainResult};
use crate::gear::{Gear, ShiftIntent};
use crate::simulator::Simulator;
use crate::state::{DriverInput, DrivetrainState};

fn one_tick() -> u32 {
    1
}

/// Inputs held for `ticks` consecutive updates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioStep {
    #[serde(default)]
    pub throttle: f64,
    #[serde(default)]
    pub clutch_pedal: f64,
    #[serde(default)]
    pub brake: bool,
    /// Attempted after the first tick of the step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<ShiftIntent>,
    #[serde(default = "one_tick")]
    pub ticks: u32,
}

impl ScenarioStep {
    pub fn input(&self) -> DriverInput {
        DriverInput::new(self.throttle, self.clutch_pedal, self.brake)
    }
}

/// A scripted drive.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub initial_gear: Gear,
    #[serde(default)]
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    pub fn from_yaml_str(yaml: &str) -> DrivetrainResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> DrivetrainResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a file, choosing JSON for `.json` and YAML otherwise.
    pub fn from_path(path: impl AsRef<Path>) -> DrivetrainResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        if is_json(path) {
            Self::from_json_str(&text)
        } else {
            Self::from_yaml_str(&text)
        }
    }

    /// Number of records a replay produces.
    pub fn total_ticks(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.ticks)).sum()
    }
}

/// One tick of replay output.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    /// 1-based tick number.
    pub tick: u64,
    pub gear: Gear,
    pub effective_clutch: f64,
    pub crankshaft_rpm: f64,
    pub drivetrain_rpm: f64,
    pub velocity: f64,
    pub rpm_fraction: f64,
    pub velocity_fraction: f64,
}

impl TelemetryRecord {
    fn capture(tick: u64, drivetrain: &Drivetrain, state: &DrivetrainState) -> Self {
        let gauges = drivetrain.gauges(state);
        Self {
            tick,
            gear: state.gear,
            effective_clutch: state.clutch,
            crankshaft_rpm: state.crankshaft_rpm,
            drivetrain_rpm: state.drivetrain_rpm,
            velocity: state.velocity,
            rpm_fraction: gauges.rpm,
            velocity_fraction: gauges.velocity,
        }
    }
}

/// Replay `scenario` on `drivetrain` from its initial state.
///
/// Collects every record; use [`replay_scenario`] to thin or stop early on
/// long scenarios. Fails only if the initial gear is outside the gearbox.
pub fn run_scenario(
    drivetrain: &Drivetrain,
    scenario: &Scenario,
) -> DrivetrainResult<Vec<TelemetryRecord>> {
    let mut records = Vec::new();
    replay_scenario(drivetrain, scenario, |record| {
        records.push(record);
        ControlFlow::Continue(())
    })?;
    Ok(records)
}

/// Replay `scenario`, handing each record to `on_tick` as it is produced.
///
/// Nothing is buffered. Returning [`ControlFlow::Break`] stops the replay
/// after that tick. Returns the number of ticks run.
pub fn replay_scenario<F>(
    drivetrain: &Drivetrain,
    scenario: &Scenario,
    mut on_tick: F,
) -> DrivetrainResult<u64>
where
    F: FnMut(TelemetryRecord) -> ControlFlow<()>,
{
    let top = drivetrain.top_gear();
    if scenario.initial_gear < Gear::REVERSE || scenario.initial_gear > top {
        return Err(DrivetrainError::GearOutOfRange {
            gear: scenario.initial_gear.position(),
            top: top.position(),
        });
    }

    let mut sim = Simulator::from_drivetrain(drivetrain.clone());
    sim.set_state(DrivetrainState {
        gear: scenario.initial_gear,
        ..drivetrain.initial_state()
    });

    let mut tick: u64 = 0;

    for (index, step) in scenario.steps.iter().enumerate() {
        let input = step.input();

        if step.ticks == 0 {
            if let Some(intent) = step.shift {
                sim.shift(intent);
            }
            continue;
        }

        for n in 0..step.ticks {
            sim.update(input);
            if let (0, Some(intent)) = (n, step.shift) {
                let before = sim.state().gear;
                let after = sim.shift(intent);
                if before == after {
                    debug!("Step {}: shift {:?} had no effect in gear {}", index, intent, before);
                }
            }
            tick += 1;
            if on_tick(TelemetryRecord::capture(tick, drivetrain, sim.state())).is_break() {
                debug!("Replay stopped by caller after {} ticks", tick);
                return Ok(tick);
            }
        }
    }

    Ok(tick)
}
