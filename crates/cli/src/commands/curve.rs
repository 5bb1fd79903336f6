//! Curve sampling command

use std::path::Path;

use anyhow::Result;
use engsim_curves::{CubicBezier, CurveParams, CurveResult};
use engsim_drivetrain::DrivetrainError;
use serde::Serialize;

use crate::commands::{CurveKind, load_config};
use crate::error::CliError;
use crate::output;

/// One `(x, y)` point in engineering units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveSample {
    pub x: f64,
    pub y: f64,
}

/// Execute curve command
pub fn execute(kind: CurveKind, points: usize, config: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(config)?;
    let params = match kind {
        CurveKind::Torque => config.curves.torque,
        CurveKind::Clutch => config.curves.clutch,
        CurveKind::BrakeForce => config.curves.brake_force,
        CurveKind::Load => config.curves.load,
    };

    let samples = sample(&params, points).map_err(|source| {
        CliError::Drivetrain(DrivetrainError::Curve {
            name: kind.name(),
            source,
        })
    })?;

    output::print_curve(kind.name(), &params, &samples, json)?;
    Ok(())
}

/// `points` evenly spaced lookups across the curve's domain, endpoints included.
pub fn sample(params: &CurveParams, points: usize) -> CurveResult<Vec<CurveSample>> {
    let curve = CubicBezier::from_params(*params)?;
    let points = points.max(2);
    let last = (points - 1) as f64;

    Ok((0..points)
        .map(|i| {
            let x = params.scale_x * (i as f64 / last);
            CurveSample {
                x,
                y: curve.value_at(x),
            }
        })
        .collect())
}
