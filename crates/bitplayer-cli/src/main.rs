//! bitplayerctl - BitPlayer joystick and wiring tool
//!
//! Classifies joystick samples the way the board does, draws the direction
//! map for a calibration, and dry-runs the board glue against a simulated
//! platform.

#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use bitplayer_joystick::{Direction, DirectionClassifier};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{ConfigCommands, KeyArg, SampleArgs};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "bitplayerctl")]
#[command(about = "BitPlayer control CLI - classify joystick samples and check board wiring")]
#[command(version)]
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

    /// Board configuration file (JSON, or YAML by extension)
    #[arg(short, long, global = true, env = "BITPLAYER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a joystick sample into one of nine directions
    Classify {
        #[command(flatten)]
        sample: SampleArgs,
    },

    /// Check whether a sample is at a direction (exit code 1 when not)
    Check {
        #[command(flatten)]
        sample: SampleArgs,
        /// Direction to test, e.g. up-right, lower-left, center
        direction: Direction,
    },

    /// Draw the direction map over the raw analog range
    Map {
        /// Raw units between grid cells
        #[arg(short, long, default_value_t = 64)]
        step: u16,
    },

    /// Poll a simulated board with the stick and keys in a given state
    Simulate {
        /// Raw X reading
        #[arg(long, default_value_t = 500)]
        x: u16,
        /// Raw Y reading
        #[arg(long, default_value_t = 500)]
        y: u16,
        /// Keys held down
        #[arg(long, value_enum, value_delimiter = ',')]
        press: Vec<KeyArg>,
    },

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "bitplayerctl={log_level},bitplayer_board={log_level},bitplayer_joystick={log_level}"
                )
                .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            std::process::exit(exit_code);
        }
    }
}

/// Runs the command; `Ok(false)` means a `check` that did not match.
fn execute_command(cli: &Cli) -> Result<bool> {
    let config_path = cli.config.as_deref();

    match &cli.command {
        Commands::Config(cmd) => {
            commands::config::execute(cmd, config_path, cli.json)?;
            Ok(true)
        }
        Commands::Simulate { x, y, press } => {
            let config = commands::config::load_config(config_path)?;
            commands::simulate::execute(config, (*x, *y), press, cli.json)?;
            Ok(true)
        }
        Commands::Classify { sample } => {
            let classifier = classifier(cli)?;
            commands::joystick::classify(&classifier, sample, cli.json)?;
            Ok(true)
        }
        Commands::Check { sample, direction } => {
            let classifier = classifier(cli)?;
            commands::joystick::check(&classifier, sample, *direction, cli.json)
        }
        Commands::Map { step } => {
            let classifier = classifier(cli)?;
            commands::joystick::map(&classifier, *step, cli.json)?;
            Ok(true)
        }
    }
}

fn classifier(cli: &Cli) -> Result<DirectionClassifier, CliError> {
    let config = commands::config::load_config(cli.config.as_deref())?;
    DirectionClassifier::new(config.joystick)
        .map_err(|e| CliError::InvalidConfiguration(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn parse_classify_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["bitplayerctl", "classify", "300", "300"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
        assert!(matches!(
            cli.command,
            Commands::Classify {
                sample: SampleArgs {
                    x: 300,
                    y: 300,
                    raw: false
                }
            }
        ));
        Ok(())
    }

    #[test]
    fn parse_classify_negative_offsets() -> TestResult {
        let cli = Cli::try_parse_from(["bitplayerctl", "classify", "-300", "-250"])?;
        assert!(matches!(
            cli.command,
            Commands::Classify {
                sample: SampleArgs { x: -300, y: -250, .. }
            }
        ));
        Ok(())
    }

    #[test]
    fn parse_check_direction() -> TestResult {
        let cli = Cli::try_parse_from([
            "bitplayerctl",
            "--json",
            "check",
            "800",
            "800",
            "UpRight",
            "--raw",
        ])?;
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Commands::Check {
                sample: SampleArgs { raw: true, .. },
                direction: Direction::UpRight
            }
        ));
        Ok(())
    }

    #[test]
    fn parse_check_rejects_unknown_direction() {
        let result = Cli::try_parse_from(["bitplayerctl", "check", "1", "1", "north"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_simulate_keys() -> TestResult {
        let cli = Cli::try_parse_from([
            "bitplayerctl",
            "simulate",
            "--x",
            "900",
            "--press",
            "a,l",
        ])?;
        match cli.command {
            Commands::Simulate { x, y, press } => {
                assert_eq!((x, y), (900, 500));
                assert_eq!(press, vec![KeyArg::A, KeyArg::L]);
            }
            _ => return Err("expected simulate".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_verbose_and_config() -> TestResult {
        let cli = Cli::try_parse_from([
            "bitplayerctl",
            "-vv",
            "--config",
            "board.yaml",
            "map",
            "--step",
            "128",
        ])?;
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("board.yaml")));
        assert!(matches!(cli.command, Commands::Map { step: 128 }));
        Ok(())
    }

    #[test]
    fn parse_config_validate() -> TestResult {
        let cli = Cli::try_parse_from(["bitplayerctl", "config", "validate", "board.json"])?;
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Validate { .. })
        ));
        Ok(())
    }
}
