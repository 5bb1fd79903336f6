//! Error types for drivetrain construction and file loading.
//!
//! The per-tick simulation path is infallible; everything here is raised
//! while validating configuration or reading scenario files.

use engsim_curves::CurveError;
use thiserror::Error;

/// Errors raised while building a drivetrain or loading its inputs.
#[derive(Error, Debug)]
pub enum DrivetrainError {
    /// A configuration value is out of range or inconsistent.
    #[error("Invalid drivetrain configuration: {0}")]
    InvalidConfig(String),

    /// One of the four response curves failed to build.
    #[error("Invalid {name} curve: {source}")]
    Curve {
        /// Which curve ("torque", "clutch", "brake_force", "load").
        name: &'static str,
        /// Underlying construction error.
        #[source]
        source: CurveError,
    },

    /// A response curve cannot be looked up by x.
    #[error("The {0} curve is not monotonic in x")]
    NonMonotonicCurve(&'static str),

    /// A scenario names a gear the gearbox does not have.
    #[error("Gear {gear} is outside the gearbox range R..={top}")]
    GearOutOfRange {
        /// Requested gear.
        gear: i8,
        /// Highest forward gear.
        top: i8,
    },

    /// YAML parse or emit failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parse or emit failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for drivetrain operations.
pub type DrivetrainResult<T> = Result<T, DrivetrainError>;
