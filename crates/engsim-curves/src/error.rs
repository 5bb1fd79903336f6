//! Error types for curve construction.

use thiserror::Error;

/// Error type for curve operations.
///
/// Lookups never fail; every variant here is raised while building a curve
/// from its parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// A control, anchor or scale value is NaN or infinite.
    #[error("Curve parameter {name} is not finite: {value}")]
    NonFiniteParameter {
        /// Name of the offending parameter (e.g. "c1x", "by").
        name: &'static str,
        /// The invalid value.
        value: f64,
    },

    /// A scale factor is zero or negative.
    #[error("Curve scale {axis} must be positive, got {value}")]
    NonPositiveScale {
        /// Which axis ("x" or "y").
        axis: &'static str,
        /// The invalid value.
        value: f64,
    },

    /// The sampling step is outside `(0, 0.5]`.
    #[error("Curve accuracy {0} is outside the valid range (0, 0.5]")]
    InvalidAccuracy(f64),
}

/// Result alias for curve construction.
pub type CurveResult<T> = Result<T, CurveError>;
