//! Command implementations for engsimctl CLI

pub mod config;
pub mod curve;
pub mod run;

use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};
use engsim_drivetrain::{Drivetrain, DrivetrainConfig};
use tracing::debug;

use crate::error::CliError;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show {
        /// Configuration file (YAML, or JSON by extension); defaults if omitted
        #[arg(short, long, env = "ENGSIM_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Check a configuration file and build a drivetrain from it
    Validate {
        /// Configuration file (YAML, or JSON by extension)
        path: PathBuf,
    },
}

/// The four response curves of a drivetrain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CurveKind {
    /// Crankshaft RPM to spin-up rate
    Torque,
    /// Pedal travel to disengagement
    Clutch,
    /// Crankshaft RPM to engine-braking strength
    BrakeForce,
    /// Crankshaft RPM to drivetrain load
    Load,
}

impl CurveKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Torque => "torque",
            Self::Clutch => "clutch",
            Self::BrakeForce => "brake_force",
            Self::Load => "load",
        }
    }
}

/// Load `path`, or the stock vehicle when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<DrivetrainConfig, CliError> {
    match path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            DrivetrainConfig::from_path(path).map_err(|e| CliError::config(path, e))
        }
        None => {
            debug!("Using default configuration");
            Ok(DrivetrainConfig::default())
        }
    }
}

/// Load a configuration and build a drivetrain from it.
///
/// Build failures carry the file path when one was given.
pub fn load_drivetrain(path: Option<&Path>) -> Result<Drivetrain, CliError> {
    let config = load_config(path)?;
    Drivetrain::new(config).map_err(|e| match path {
        Some(path) => CliError::config(path, e),
        None => CliError::from(e),
    })
}
