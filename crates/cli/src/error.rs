//! Error types for engsimctl CLI

use std::path::PathBuf;

use engsim_drivetrain::DrivetrainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid configuration {}: {source}", .path.display())]
    InvalidConfiguration {
        path: PathBuf,
        #[source]
        source: DrivetrainError,
    },

    #[error("Invalid scenario {}: {source}", .path.display())]
    InvalidScenario {
        path: PathBuf,
        #[source]
        source: DrivetrainError,
    },

    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Drivetrain rejected configuration: {0}")]
    Drivetrain(#[from] DrivetrainError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl CliError {
    /// Wrap a config load failure, keeping I/O distinct from bad content.
    pub fn config(path: impl Into<PathBuf>, source: DrivetrainError) -> Self {
        match source {
            DrivetrainError::Io(source) => Self::Io {
                path: path.into(),
                source,
            },
            source => Self::InvalidConfiguration {
                path: path.into(),
                source,
            },
        }
    }

    /// Wrap a scenario load or replay failure.
    pub fn scenario(path: impl Into<PathBuf>, source: DrivetrainError) -> Self {
        match source {
            DrivetrainError::Io(source) => Self::Io {
                path: path.into(),
                source,
            },
            source => Self::InvalidScenario {
                path: path.into(),
                source,
            },
        }
    }

    /// Process exit code: 2 for bad input, 3 for I/O, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidConfiguration { .. }
            | Self::InvalidScenario { .. }
            | Self::Drivetrain(_) => 2,
            Self::Io { .. } => 3,
            Self::JsonError(_) | Self::YamlError(_) => 1,
        }
    }
}
