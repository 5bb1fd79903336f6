//! engsimctl - Drivetrain Simulator CLI
//!
//! Replays scripted driving scenarios, samples response curves and checks
//! vehicle configuration files.

#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::*;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "engsimctl")]
#[command(about = "Drivetrain simulator CLI - replay scenarios, sample curves, check configs")]
#[command(version)]
#[command(long_about = "
engsimctl drives the curve-based engine, clutch and gearbox simulator.
It replays scripted driver inputs tick by tick, samples the response curves
of a vehicle, and validates vehicle configuration files.

Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scenario file and print telemetry per tick
    Run {
        /// Scenario file (YAML, or JSON by extension)
        scenario: PathBuf,

        /// Vehicle configuration file; the stock vehicle if omitted
        #[arg(short, long, env = "ENGSIM_CONFIG")]
        config: Option<PathBuf>,

        /// Print only every Nth tick
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        every: u64,
    },

    /// Sample one of the vehicle's response curves
    Curve {
        /// Which curve
        #[arg(value_enum)]
        curve: CurveKind,

        /// Number of evenly spaced samples, endpoints included
        #[arg(short, long, default_value_t = 21, value_parser = clap::value_parser!(u16).range(2..))]
        points: u16,

        /// Vehicle configuration file; the stock vehicle if omitted
        #[arg(short, long, env = "ENGSIM_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("engsimctl={0},engsim_drivetrain={0}", log_level).into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(exit_code)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Run {
            scenario,
            config,
            every,
        } => commands::run::execute(scenario, config.as_deref(), *every, cli.json),
        Commands::Curve {
            curve,
            points,
            config,
        } => commands::curve::execute(*curve, usize::from(*points), config.as_deref(), cli.json),
        Commands::Config(cmd) => commands::config::execute(cmd, cli.json),
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    // --- Global flag parsing ---

    #[test]
    fn parse_run_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["engsimctl", "run", "drive.yaml"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        match &cli.command {
            Commands::Run { scenario, every, .. } => {
                assert_eq!(scenario, &PathBuf::from("drive.yaml"));
                assert_eq!(*every, 1);
            }
            _ => return Err("expected Run command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_global_json_flag_before_subcommand() -> TestResult {
        let cli = Cli::try_parse_from(["engsimctl", "--json", "run", "drive.yaml"])?;
        assert!(cli.json);
        Ok(())
    }

    #[test]
    fn parse_global_json_flag_after_subcommand() -> TestResult {
        let cli = Cli::try_parse_from(["engsimctl", "curve", "torque", "--json"])?;
        assert!(cli.json);
        Ok(())
    }

    #[test]
    fn parse_verbose_levels() -> TestResult {
        for (args, expected) in [
            (vec!["engsimctl", "config", "show"], 0),
            (vec!["engsimctl", "-v", "config", "show"], 1),
            (vec!["engsimctl", "-vv", "config", "show"], 2),
            (vec!["engsimctl", "-vvv", "config", "show"], 3),
        ] {
            let cli = Cli::try_parse_from(args)?;
            assert_eq!(cli.verbose, expected);
        }
        Ok(())
    }

    // --- Run command parsing ---

    #[test]
    fn parse_run_with_options() -> TestResult {
        let cli = Cli::try_parse_from([
            "engsimctl",
            "run",
            "drive.json",
            "--config",
            "car.yaml",
            "--every",
            "10",
        ])?;
        match &cli.command {
            Commands::Run {
                scenario,
                config,
                every,
            } => {
                assert_eq!(scenario, &PathBuf::from("drive.json"));
                assert_eq!(config.as_deref(), Some(std::path::Path::new("car.yaml")));
                assert_eq!(*every, 10);
            }
            _ => return Err("expected Run command".into()),
        }
        Ok(())
    }

    // --- Curve command parsing ---

    #[test]
    fn parse_curve_kinds() -> TestResult {
        for (arg, expected) in [
            ("torque", CurveKind::Torque),
            ("clutch", CurveKind::Clutch),
            ("brake-force", CurveKind::BrakeForce),
            ("load", CurveKind::Load),
        ] {
            let cli = Cli::try_parse_from(["engsimctl", "curve", arg])?;
            match &cli.command {
                Commands::Curve { curve, points, .. } => {
                    assert_eq!(*curve, expected);
                    assert_eq!(*points, 21);
                }
                _ => return Err("expected Curve command".into()),
            }
        }
        Ok(())
    }

    #[test]
    fn parse_curve_points() -> TestResult {
        let cli = Cli::try_parse_from(["engsimctl", "curve", "load", "--points", "5"])?;
        match &cli.command {
            Commands::Curve { points, .. } => assert_eq!(*points, 5),
            _ => return Err("expected Curve command".into()),
        }
        Ok(())
    }

    // --- Config command parsing ---

    #[test]
    fn parse_config_show() -> TestResult {
        let cli = Cli::try_parse_from(["engsimctl", "config", "show", "--config", "car.yaml"])?;
        match &cli.command {
            Commands::Config(ConfigCommands::Show { config }) => {
                assert_eq!(config.as_deref(), Some(std::path::Path::new("car.yaml")));
            }
            _ => return Err("expected Config Show command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_config_validate() -> TestResult {
        let cli = Cli::try_parse_from(["engsimctl", "config", "validate", "car.yaml"])?;
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Validate { .. })
        ));
        Ok(())
    }

    #[test]
    fn parse_completion_bash() -> TestResult {
        let cli = Cli::try_parse_from(["engsimctl", "completion", "bash"])?;
        assert!(matches!(cli.command, Commands::Completion { .. }));
        Ok(())
    }

    // --- Rejections ---

    #[test]
    fn reject_no_subcommand() {
        assert!(Cli::try_parse_from(["engsimctl"]).is_err());
    }

    #[test]
    fn reject_unknown_curve() {
        assert!(Cli::try_parse_from(["engsimctl", "curve", "boost"]).is_err());
    }

    #[test]
    fn reject_run_without_scenario() {
        assert!(Cli::try_parse_from(["engsimctl", "run"]).is_err());
    }

    #[test]
    fn reject_zero_every() {
        assert!(Cli::try_parse_from(["engsimctl", "run", "drive.yaml", "--every", "0"]).is_err());
    }

    #[test]
    fn reject_single_point() {
        assert!(Cli::try_parse_from(["engsimctl", "curve", "torque", "--points", "1"]).is_err());
    }

    #[test]
    fn reject_config_validate_without_path() {
        assert!(Cli::try_parse_from(["engsimctl", "config", "validate"]).is_err());
    }
}
