//! Check command implementation
//!
//! Resolves and assembles a run without simulating any path.

use std::path::Path;
use std::sync::Arc;

use pricer_pricing::accumulators::{NoopReporter, PriceReporter};

use crate::config::{RunArgs, RunPlan};
use crate::Result;

/// Run the check command
pub fn run(config: Option<&Path>, args: &RunArgs) -> Result<()> {
    let plan = super::resolve_plan(config, args)?;
    let parts = plan.simulator()?;
    let reporter: Arc<dyn PriceReporter> = Arc::new(NoopReporter);
    plan.accumulator(parts.params, reporter)?;
    parts.builder.build()?;

    print!("{}", summary(&plan));
    Ok(())
}

/// One line per resolved setting.
pub fn summary(plan: &RunPlan) -> String {
    let p = &plan.params;
    let mut lines = vec![
        "Configuration OK".to_string(),
        format!(
            "  parameters: S0 = {}, K = {}, T = {}, r = {}, vol = {}, q = {}",
            p.spot(),
            p.strike(),
            p.maturity(),
            p.rate(),
            p.volatility(),
            p.dividend()
        ),
        format!("  process:    {} (beta = {})", plan.process, p.beta()),
        format!("  scheme:     {}", plan.scheme),
        format!("  variates:   {}", plan.variates),
        format!("  payoff:     {}", plan.payoff),
    ];
    if let Some(barrier_type) = plan.barrier_type {
        lines.push(format!("  barrier:    {} at {}", barrier_type, p.barrier()));
    }
    lines.push(format!("  paths:      {}", plan.paths));
    lines.push(format!("  steps:      {}", plan.steps));
    lines.push(format!(
        "  seed:       {}",
        plan.seed.map_or_else(|| "entropy".to_string(), |s| s.to_string())
    ));
    lines.push(format!(
        "  threads:    {}",
        plan.threads
            .map_or_else(|| "global pool".to_string(), |t| t.to_string())
    ));
    lines.push(String::new());
    lines.join("\n")
}
