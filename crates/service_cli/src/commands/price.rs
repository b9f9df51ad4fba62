//! Price command implementation
//!
//! Assembles the run, simulates every path and prints the prices.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use clap::{Args, ValueEnum};
use pricer_pricing::accumulators::{PriceReporter, TracingReporter};
use tracing::info;

use crate::config::RunArgs;
use crate::reporter::ConsoleReporter;
use crate::Result;

/// Where the final prices go.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text block on stdout
    #[default]
    Console,
    /// Structured `tracing` events
    Log,
}

/// Arguments of `mcprice price`.
#[derive(Args, Debug, Clone)]
pub struct PriceArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub output: OutputFormat,

    /// Print a running path count to stderr
    #[arg(long)]
    pub show_progress: bool,
}

/// Run the price command
pub fn run(config: Option<&Path>, args: &PriceArgs) -> Result<()> {
    let plan = super::resolve_plan(config, &args.run)?;
    info!(
        process = %plan.process,
        scheme = %plan.scheme,
        variates = %plan.variates,
        payoff = %plan.payoff,
        paths = plan.paths,
        steps = plan.steps,
        "starting pricing"
    );

    let reporter: Arc<dyn PriceReporter> = match args.output {
        OutputFormat::Console => Arc::new(ConsoleReporter::new(plan.params)),
        OutputFormat::Log => Arc::new(TracingReporter),
    };

    let parts = plan.simulator()?;
    let accumulator = plan.accumulator(parts.params, reporter)?;

    let mut builder = parts.builder;
    if args.show_progress {
        builder = builder.progress_observer(|count| {
            let mut stderr = std::io::stderr().lock();
            let _ = write!(stderr, "\rSimulation count: #{count}");
            let _ = stderr.flush();
        });
    }

    let report = builder.build()?.run(accumulator)?;
    if args.show_progress {
        eprintln!();
    }

    info!(
        call = report.call().price,
        put = report.put().price,
        "pricing complete"
    );
    Ok(())
}
