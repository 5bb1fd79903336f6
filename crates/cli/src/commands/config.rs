//! Configuration commands

use std::path::Path;

use anyhow::Result;
use crate::commands::{ConfigCommands, load_config, load_drivetrain};
use crate::output;

/// Execute config command
pub fn execute(cmd: &ConfigCommands, json: bool) -> Result<()> {
    match cmd {
        ConfigCommands::Show { config } => show_config(config.as_deref(), json),
        ConfigCommands::Validate { path } => validate_config(path, json),
    }
}

fn show_config(path: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(path)?;
    output::print_config(&config, json)?;
    Ok(())
}

fn validate_config(path: &Path, json: bool) -> Result<()> {
    let drivetrain = load_drivetrain(Some(path))?;
    output::print_validation(path, &drivetrain, json)?;
    Ok(())
}
