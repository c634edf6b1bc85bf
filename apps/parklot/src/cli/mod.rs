//! # Parklot CLI Module
//!
//! This module implements the CLI interface for Parklot.
//!
//! ## Available Commands
//!
//! - `run` - Start the interactive attendant menu (default)
//! - `fare` - Price a stay of a given number of hours
//! - `config` - Show the effective configuration

mod commands;

use crate::config::{self, Config};
use crate::error::AppError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Parklot - grid parking lot attendant
///
/// Check vehicles in and out of a fixed grid of spots and charge a fare
/// for each stay. All state lives in memory for the length of the session.
#[derive(Parser, Debug)]
#[command(name = "parklot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML config file (defaults to ./parklot.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of rows in the lot (overrides the config file)
    #[arg(long, global = true)]
    pub rows: Option<usize>,

    /// Number of spots per row (overrides the config file)
    #[arg(long, global = true)]
    pub cols: Option<usize>,

    /// Output results in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Start the interactive attendant menu
    Run,

    /// Price a stay of the given length
    Fare {
        /// Hours parked (fractional, may be negative)
        #[arg(long, allow_negative_numbers = true)]
        hours: f64,
    },

    /// Show the effective configuration
    Config,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Resolve the effective configuration for a parsed command line.
///
/// Returns the configuration together with the file it was read from.
pub fn load_config(cli: &Cli) -> Result<(Config, Option<PathBuf>), AppError> {
    let cwd = std::env::current_dir()?;
    let source = config::resolve_path(cli.config.as_deref(), &cwd);

    let config = match &source {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Config::from_file(path)?
        }
        None => Config::default(),
    }
    .with_overrides(cli.rows, cli.cols);

    config.validate()?;
    Ok((config, source))
}

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), AppError> {
    let (config, source) = load_config(&cli)?;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Fare { hours }) => cmd_fare(&config, json_mode, hours),
        Some(Commands::Config) => cmd_config(&config, source.as_deref(), json_mode),
        // No subcommand - run the menu by default
        Some(Commands::Run) | None => cmd_run(&config, json_mode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["parklot"]).expect("parse");
        assert_eq!(cli.command, None);
        assert!(!cli.json_mode);
    }

    #[test]
    fn fare_accepts_negative_hours() {
        let cli = Cli::try_parse_from(["parklot", "fare", "--hours", "-0.5"]).expect("parse");
        assert_eq!(cli.command, Some(Commands::Fare { hours: -0.5 }));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["parklot", "run", "--rows", "3", "--cols", "4", "-q"])
            .expect("parse");
        assert_eq!(cli.rows, Some(3));
        assert_eq!(cli.cols, Some(4));
        assert!(cli.quiet);
    }

    #[test]
    fn oversized_lot_rejected_before_building() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("lot.toml");
        std::fs::write(&path, "").expect("write");

        let cli = Cli::try_parse_from([
            "parklot",
            "-c",
            path.to_str().expect("utf8 path"),
            "--rows",
            "1000000",
            "--cols",
            "1000000",
        ])
        .expect("parse");
        assert!(matches!(load_config(&cli), Err(AppError::Config(_))));
    }

    #[test]
    fn clap_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
