//! mcprice - command-line front end for the Monte Carlo option pricer.
//!
//! # Commands
//!
//! - `mcprice price [--config run.toml] [flags]` - Simulate paths and print
//!   call and put prices
//! - `mcprice check [--config run.toml] [flags]` - Validate and assemble a
//!   run without simulating
//!
//! Flags override the run file, which overrides the built-in defaults.
//! Log verbosity follows `RUST_LOG`, falling back to `--verbose`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod reporter;

pub use error::{CliError, Result};

/// Monte Carlo pricer for European, Asian and barrier options
#[derive(Parser)]
#[command(name = "mcprice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML run file with [parameters] and [run] tables
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate paths and print option prices
    Price(commands::price::PriceArgs),

    /// Validate a run configuration without simulating
    Check(config::RunArgs),
}

impl Cli {
    /// Filter used when `RUST_LOG` is unset. `--output log` needs `info` for
    /// the prices to be emitted at all.
    fn default_directive(&self) -> &'static str {
        let log_output = matches!(
            &self.command,
            Commands::Price(args) if args.output == commands::price::OutputFormat::Log
        );
        if self.verbose {
            "debug"
        } else if log_output {
            "info"
        } else {
            "warn"
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_directive()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    debug!(config = ?cli.config, "mcprice starting");

    let outcome = match cli.command {
        Commands::Price(args) => commands::price::run(cli.config.as_deref(), &args),
        Commands::Check(args) => commands::check::run(cli.config.as_deref(), &args),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "run failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
