//! tenorgrid - Command Line Operations for Tenor Tables and Time Grids
//!
//! # Commands
//!
//! - `tenorgrid show --table <file>` - Print a table as a matrix
//! - `tenorgrid value --table <file> -m <maturity> -t <termination>` - Query at grid offsets
//! - `tenorgrid value-at --table <file> -m <years> -t <years>` - Query at year fractions
//! - `tenorgrid grid --start <t0> --steps <n> --delta <dt>` - Build and combine time grids
//!
//! Configuration is read from `--config`, `TENORGRID_*` environment variables
//! and flags; `RUST_LOG` takes precedence over the configured log level.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod table_file;

pub use error::{CliError, Result};

use commands::grid::GridArgs;
use config::{build_config, CliArgs, CliConfig, LogLevel};

/// Tenor table and time grid CLI
#[derive(Parser)]
#[command(name = "tenorgrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a table with values divided by a unit
    Show {
        /// Path to table file (TOML)
        #[arg(long)]
        table: PathBuf,

        /// Divisor applied to every value
        #[arg(short, long)]
        unit: Option<f64>,
    },

    /// Query a table at integer maturity and termination offsets
    Value {
        /// Path to table file (TOML)
        #[arg(long)]
        table: PathBuf,

        /// Maturity offset in convention units
        #[arg(short, long, allow_hyphen_values = true)]
        maturity: i32,

        /// Termination offset from the maturity in convention units
        #[arg(short, long, allow_hyphen_values = true)]
        termination: i32,
    },

    /// Query a table at maturity and termination given in years
    ValueAt {
        /// Path to table file (TOML)
        #[arg(long)]
        table: PathBuf,

        /// Maturity in years from the reference date
        #[arg(short, long, allow_hyphen_values = true)]
        maturity: f64,

        /// Termination in years from the reference date
        #[arg(short, long, allow_hyphen_values = true)]
        termination: f64,
    },

    /// Build an equidistant time grid and combine it with other times
    Grid {
        /// First time
        #[arg(long, allow_hyphen_values = true)]
        start: f64,

        /// Number of steps
        #[arg(long)]
        steps: usize,

        /// Step length
        #[arg(long)]
        delta: f64,

        /// Tick size (defaults to the configured tick size)
        #[arg(long)]
        tick: Option<f64>,

        /// Shift applied to every time
        #[arg(long, allow_hyphen_values = true)]
        shift: Option<f64>,

        /// Comma-separated times to merge in
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        union_with: Vec<f64>,

        /// Comma-separated times to intersect with
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        intersect_with: Vec<f64>,

        /// Tick size of the merged and intersected times
        #[arg(long)]
        other_tick: Option<f64>,
    },
}

fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(command: Commands, config: &CliConfig) -> Result<String> {
    match command {
        Commands::Show { table, unit } => {
            commands::show::run(&table, unit.unwrap_or(config.default_unit))
        }
        Commands::Value {
            table,
            maturity,
            termination,
        } => commands::value::run(&table, maturity, termination),
        Commands::ValueAt {
            table,
            maturity,
            termination,
        } => commands::value::run_continuous(&table, maturity, termination),
        Commands::Grid {
            start,
            steps,
            delta,
            tick,
            shift,
            union_with,
            intersect_with,
            other_tick,
        } => commands::grid::run(&GridArgs {
            start,
            steps,
            delta,
            tick_size: tick.unwrap_or(config.default_tick_size),
            shift,
            union_with,
            intersect_with,
            other_tick_size: other_tick,
        }),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level,
        verbose: cli.verbose,
    };
    let config = build_config(&args).context("failed to load configuration")?;

    init_tracing(&config);
    info!(log_level = %config.log_level, "configuration loaded");

    let output = run(cli.command, &config)?;
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_grid_command() {
        let cli = Cli::try_parse_from([
            "tenorgrid",
            "--log-level",
            "debug",
            "grid",
            "--start",
            "-1",
            "--steps",
            "4",
            "--delta",
            "0.5",
            "--union-with",
            "0.1,0.2",
        ])
        .unwrap();

        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        match cli.command {
            Commands::Grid {
                start,
                steps,
                union_with,
                tick,
                ..
            } => {
                assert_eq!(start, -1.0);
                assert_eq!(steps, 4);
                assert_eq!(union_with, vec![0.1, 0.2]);
                assert_eq!(tick, None);
            }
            _ => panic!("Expected grid command"),
        }
    }

    #[test]
    fn test_run_uses_configured_tick() {
        let config = CliConfig {
            default_tick_size: 0.5,
            ..Default::default()
        };
        let out = run(
            Commands::Grid {
                start: 0.0,
                steps: 2,
                delta: 0.4,
                tick: None,
                shift: None,
                union_with: vec![],
                intersect_with: vec![],
                other_tick: None,
            },
            &config,
        )
        .unwrap();
        // 0.4 -> 0.5 and 0.8 -> 1 at tick 0.5
        assert_eq!(out, "TimeDiscretization [tick size 0.5]: [0, 0.5, 1]");
    }
}
