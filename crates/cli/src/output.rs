//! Output formatting for CLI responses

use std::path::Path;

use anyhow::Error;
use colored::*;
use engsim_curves::CurveParams;
use engsim_drivetrain::{Drivetrain, DrivetrainConfig, TelemetryRecord};
use serde_json::json;

use crate::commands::curve::CurveSample;
use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to format error as JSON: {}", e),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn error_type_name(error: &Error) -> &'static str {
    match error.downcast_ref::<CliError>() {
        Some(CliError::InvalidConfiguration { .. }) => "invalid_configuration",
        Some(CliError::InvalidScenario { .. }) => "invalid_scenario",
        Some(CliError::Io { .. }) => "io",
        Some(CliError::Drivetrain(_)) => "drivetrain",
        Some(CliError::JsonError(_)) => "json",
        Some(CliError::YamlError(_)) => "yaml",
        None => "unknown",
    }
}

/// Print replay records as a table or a JSON document.
///
/// `last` is the final record of the whole replay, shown in the summary even
/// when the selection skips it.
pub fn print_records(
    records: &[TelemetryRecord],
    last: Option<&TelemetryRecord>,
    max_speed: f64,
    json: bool,
) -> Result<(), CliError> {
    if json {
        let output = json!({
            "success": true,
            "max_speed": max_speed,
            "records": records,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{:>6}  {:>4}  {:>6}  {:>8}  {:>8}  {:>8}",
        "tick".bold(),
        "gear".bold(),
        "clutch".bold(),
        "rpm".bold(),
        "shaft".bold(),
        "km/h".bold()
    );
    for r in records {
        println!(
            "{:>6}  {:>4}  {:>6.3}  {:>8.1}  {:>8.1}  {:>8.2}",
            r.tick,
            r.gear.to_string(),
            r.effective_clutch,
            r.crankshaft_rpm,
            r.drivetrain_rpm,
            r.velocity
        );
    }

    match last {
        Some(r) => println!(
            "{} {} ticks, gear {}, {:.0} rpm ({:.0}%), {:.1} km/h ({:.0}% of {:.1})",
            "Finished:".green().bold(),
            r.tick,
            r.gear,
            r.crankshaft_rpm,
            r.rpm_fraction * 100.0,
            r.velocity,
            r.velocity_fraction * 100.0,
            max_speed
        ),
        None => println!("{}", "Scenario has no ticks".yellow()),
    }
    Ok(())
}

/// Print curve samples as a two-column table or a JSON document.
pub fn print_curve(
    name: &str,
    params: &CurveParams,
    samples: &[CurveSample],
    json: bool,
) -> Result<(), CliError> {
    if json {
        let output = json!({
            "success": true,
            "curve": name,
            "params": params,
            "samples": samples,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} {}", "Curve:".bold(), name.cyan());
    println!(
        "  c1 = ({}, {})  c2 = ({}, {})  anchors = ({}, {})  scale = ({}, {})",
        params.c1x,
        params.c1y,
        params.c2x,
        params.c2y,
        params.ay,
        params.by,
        params.scale_x,
        params.scale_y
    );
    println!("{:>10}  {:>10}", "x".bold(), "y".bold());
    for s in samples {
        println!("{:>10.4}  {:>10.4}", s.x, s.y);
    }
    Ok(())
}

/// Print a configuration as YAML or a JSON document.
pub fn print_config(config: &DrivetrainConfig, json: bool) -> Result<(), CliError> {
    if json {
        let output = json!({
            "success": true,
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", serde_yaml::to_string(config)?);
    }
    Ok(())
}

/// Report a configuration that built successfully.
pub fn print_validation(path: &Path, drivetrain: &Drivetrain, json: bool) -> Result<(), CliError> {
    if json {
        let output = json!({
            "success": true,
            "path": path.display().to_string(),
            "top_gear": drivetrain.top_gear().position(),
            "max_speed": drivetrain.max_speed(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} {} is valid",
            "✓".green(),
            path.display().to_string().bold()
        );
        println!("  Forward gears: {}", drivetrain.top_gear().position());
        println!("  Top speed: {:.1} km/h", drivetrain.max_speed());
    }
    Ok(())
}
