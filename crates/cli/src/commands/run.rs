//! Scenario replay command

use std::ops::ControlFlow;
use std::path::Path;

use anyhow::Result;
use engsim_drivetrain::{Scenario, replay_scenario};
use tracing::info;

use crate::commands::load_drivetrain;
use crate::error::CliError;
use crate::output;

/// Execute run command
pub fn execute(scenario_path: &Path, config: Option<&Path>, every: u64, json: bool) -> Result<()> {
    let drivetrain = load_drivetrain(config)?;

    let scenario =
        Scenario::from_path(scenario_path).map_err(|e| CliError::scenario(scenario_path, e))?;
    info!(
        "Replaying {} steps ({} ticks) from {}",
        scenario.steps.len(),
        scenario.total_ticks(),
        scenario_path.display()
    );

    let every = every.max(1);
    let mut selected = Vec::new();
    let mut last = None;
    replay_scenario(&drivetrain, &scenario, |record| {
        if record.tick % every == 0 {
            selected.push(record);
        }
        last = Some(record);
        ControlFlow::Continue(())
    })
    .map_err(|e| CliError::scenario(scenario_path, e))?;

    output::print_records(&selected, last.as_ref(), drivetrain.max_speed(), json)?;
    Ok(())
}
