//! Run configuration: command-line overrides on top of an optional TOML file.
//!
//! ```toml
//! [parameters]
//! spot = 100.0
//! strike = 100.0
//! maturity = 1.0
//! rate = 0.05
//! volatility = 0.2
//! barrier = 120.0
//!
//! [run]
//! process = "gbm"
//! scheme = "euler"
//! variates = "polar"
//! payoff = "barrier"
//! barrier_type = "up-out"
//! paths = 200000
//! steps = 252
//! seed = 42
//! ```
//!
//! Every key is optional. Precedence: flag, then file, then default.

use std::path::Path;
use std::sync::Arc;

use clap::Args;
use pricer_core::types::{ConfigError, OptionType, ParameterSet};
use pricer_models::models::{ProcessKind, ProcessModel};
use pricer_pricing::accumulators::{Accumulator, BarrierType, PayoffKind, PriceReporter};
use pricer_pricing::discretisation::{Discretiser, SchemeKind};
use pricer_pricing::mc::{
    MonteCarloSimulator, MonteCarloSimulatorBuilder, SimulationConfig, DEFAULT_PROGRESS_INTERVAL,
};
use pricer_pricing::rng::VariateKind;
use serde::Deserialize;

use crate::{CliError, Result};

/// Default number of paths when neither flag nor file sets one.
pub const DEFAULT_PATHS: usize = 100_000;

/// Default number of time steps.
pub const DEFAULT_STEPS: usize = 252;

/// Run selection and parameter overrides shared by `price` and `check`.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Stochastic process (gbm, cev)
    #[arg(long)]
    pub process: Option<ProcessKind>,

    /// Discretisation scheme (euler, closed-form)
    #[arg(long)]
    pub scheme: Option<SchemeKind>,

    /// Normal variate generator (library, polar, box-muller)
    #[arg(long)]
    pub variates: Option<VariateKind>,

    /// Payoff (european, asian, barrier)
    #[arg(long)]
    pub payoff: Option<PayoffKind>,

    /// Barrier type for the barrier payoff (up-in, up-out, down-in, down-out)
    #[arg(long)]
    pub barrier_type: Option<BarrierType>,

    /// Number of Monte Carlo paths
    #[arg(short = 'n', long)]
    pub paths: Option<usize>,

    /// Number of time steps per path
    #[arg(long)]
    pub steps: Option<usize>,

    /// Master seed for reproducible variate streams
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run on a dedicated pool of this many threads
    #[arg(long)]
    pub threads: Option<usize>,

    /// Paths between progress notifications (0 disables)
    #[arg(long)]
    pub progress_interval: Option<usize>,

    /// Initial level S0
    #[arg(long)]
    pub spot: Option<f64>,

    /// Strike K
    #[arg(long)]
    pub strike: Option<f64>,

    /// Maturity T in years
    #[arg(long)]
    pub maturity: Option<f64>,

    /// Risk-free rate r
    #[arg(long)]
    pub rate: Option<f64>,

    /// Volatility σ
    #[arg(long)]
    pub volatility: Option<f64>,

    /// Dividend yield q
    #[arg(long)]
    pub dividend: Option<f64>,

    /// Barrier level H
    #[arg(long)]
    pub barrier: Option<f64>,

    /// CEV elasticity β
    #[arg(long)]
    pub beta: Option<f64>,

    /// Option kind recorded with the parameters (call, put)
    #[arg(long)]
    pub option_type: Option<OptionType>,
}

/// `[run]` table of the run file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunSection {
    /// Stochastic process.
    pub process: Option<ProcessKind>,
    /// Discretisation scheme.
    pub scheme: Option<SchemeKind>,
    /// Normal variate generator.
    pub variates: Option<VariateKind>,
    /// Payoff.
    pub payoff: Option<PayoffKind>,
    /// Barrier type.
    pub barrier_type: Option<BarrierType>,
    /// Number of paths.
    pub paths: Option<usize>,
    /// Number of time steps.
    pub steps: Option<usize>,
    /// Master seed.
    pub seed: Option<u64>,
    /// Dedicated pool size.
    pub threads: Option<usize>,
    /// Paths between progress notifications.
    pub progress_interval: Option<usize>,
}

/// Contents of a TOML run file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunFile {
    /// `[parameters]` table; missing keys take the defaults.
    pub parameters: Option<ParameterSet>,
    /// `[run]` table.
    pub run: RunSection,
}

impl RunFile {
    /// Reads and parses a run file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| CliError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Fully resolved run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunPlan {
    /// Validated parameter snapshot.
    pub params: ParameterSet,
    /// Stochastic process.
    pub process: ProcessKind,
    /// Discretisation scheme.
    pub scheme: SchemeKind,
    /// Normal variate generator.
    pub variates: VariateKind,
    /// Payoff.
    pub payoff: PayoffKind,
    /// Barrier type, required for the barrier payoff.
    pub barrier_type: Option<BarrierType>,
    /// Number of paths.
    pub paths: usize,
    /// Number of time steps.
    pub steps: usize,
    /// Master seed.
    pub seed: Option<u64>,
    /// Dedicated pool size.
    pub threads: Option<usize>,
    /// Paths between progress notifications.
    pub progress_interval: usize,
}

impl RunPlan {
    /// Merges flags over the file over the defaults and validates the
    /// parameter snapshot.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidParameter` for an out-of-range parameter
    /// - `ConfigError::MissingComponent("barrier level")` if the barrier
    ///   payoff is chosen while the barrier level is still zero
    pub fn resolve(file: RunFile, args: &RunArgs) -> std::result::Result<Self, ConfigError> {
        let mut builder = file.parameters.unwrap_or_default().into_builder();
        if let Some(v) = args.spot {
            builder = builder.spot(v);
        }
        if let Some(v) = args.strike {
            builder = builder.strike(v);
        }
        if let Some(v) = args.maturity {
            builder = builder.maturity(v);
        }
        if let Some(v) = args.rate {
            builder = builder.rate(v);
        }
        if let Some(v) = args.volatility {
            builder = builder.volatility(v);
        }
        if let Some(v) = args.dividend {
            builder = builder.dividend(v);
        }
        if let Some(v) = args.barrier {
            builder = builder.barrier(v);
        }
        if let Some(v) = args.beta {
            builder = builder.beta(v);
        }
        if let Some(v) = args.option_type {
            builder = builder.option_type(v);
        }

        let params = builder.build()?;
        let run = file.run;
        let payoff = args.payoff.or(run.payoff).unwrap_or_default();
        if payoff == PayoffKind::Barrier {
            if params.barrier() == 0.0 {
                return Err(ConfigError::MissingComponent("barrier level"));
            }
            if params.barrier() < 0.0 {
                return Err(ConfigError::invalid("barrier", "must be positive"));
            }
        }

        Ok(Self {
            params,
            process: args.process.or(run.process).unwrap_or_default(),
            scheme: args.scheme.or(run.scheme).unwrap_or_default(),
            variates: args.variates.or(run.variates).unwrap_or_default(),
            payoff,
            barrier_type: args.barrier_type.or(run.barrier_type),
            paths: args.paths.or(run.paths).unwrap_or(DEFAULT_PATHS),
            steps: args.steps.or(run.steps).unwrap_or(DEFAULT_STEPS),
            seed: args.seed.or(run.seed),
            threads: args.threads.or(run.threads),
            progress_interval: args
                .progress_interval
                .or(run.progress_interval)
                .unwrap_or(DEFAULT_PROGRESS_INTERVAL),
        })
    }

    /// Assembles the process, scheme and run configuration into a simulator
    /// builder.
    pub fn simulator(&self) -> std::result::Result<RunParts, ConfigError> {
        let params = Arc::new(self.params);
        let process = ProcessModel::new(self.process, params.clone());
        let discretiser = Discretiser::new(self.scheme, process, self.steps)?;

        let mut config = SimulationConfig::builder()
            .n_paths(self.paths)
            .optional_seed(self.seed)
            .progress_interval(self.progress_interval);
        if let Some(threads) = self.threads {
            config = config.num_threads(threads);
        }

        let builder = MonteCarloSimulator::builder()
            .config(config.build()?)
            .discretiser(discretiser)
            .variates(self.variates);
        Ok(RunParts { params, builder })
    }

    /// Builds the accumulator reporting to `reporter`.
    pub fn accumulator(
        &self,
        params: Arc<ParameterSet>,
        reporter: Arc<dyn PriceReporter>,
    ) -> std::result::Result<Accumulator, ConfigError> {
        Accumulator::new(self.payoff, self.barrier_type, params, reporter)
    }
}

/// Simulator builder plus the shared parameter snapshot it was built over.
pub struct RunParts {
    /// Snapshot shared by the process and the accumulator.
    pub params: Arc<ParameterSet>,
    /// Simulator builder, ready for an optional progress observer.
    pub builder: MonteCarloSimulatorBuilder,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: &str = r#"
        [parameters]
        spot = 95.0
        maturity = 1.0
        volatility = 0.25
        barrier = 120.0

        [run]
        process = "cev"
        scheme = "closed-form"
        variates = "box-muller"
        payoff = "barrier"
        barrier_type = "up-out"
        paths = 5000
        seed = 11
    "#;

    #[test]
    fn test_defaults_without_file_or_flags() {
        let plan = RunPlan::resolve(RunFile::default(), &RunArgs::default()).unwrap();
        assert_eq!(plan.params, ParameterSet::default());
        assert_eq!(plan.process, ProcessKind::Gbm);
        assert_eq!(plan.scheme, SchemeKind::Euler);
        assert_eq!(plan.variates, VariateKind::Library);
        assert_eq!(plan.payoff, PayoffKind::European);
        assert_eq!(plan.paths, DEFAULT_PATHS);
        assert_eq!(plan.steps, DEFAULT_STEPS);
        assert_eq!(plan.progress_interval, DEFAULT_PROGRESS_INTERVAL);
        assert_eq!(plan.seed, None);
    }

    #[test]
    fn test_file_values() {
        let file: RunFile = toml::from_str(SAMPLE).unwrap();
        let plan = RunPlan::resolve(file, &RunArgs::default()).unwrap();

        assert_relative_eq!(plan.params.spot(), 95.0);
        assert_relative_eq!(plan.params.volatility(), 0.25);
        // Keys absent from the file keep their defaults.
        assert_relative_eq!(plan.params.strike(), 100.0);
        assert_eq!(plan.process, ProcessKind::Cev);
        assert_eq!(plan.scheme, SchemeKind::ClosedForm);
        assert_eq!(plan.variates, VariateKind::BoxMuller);
        assert_eq!(plan.barrier_type, Some(BarrierType::UpOut));
        assert_eq!(plan.paths, 5000);
        assert_eq!(plan.seed, Some(11));
    }

    #[test]
    fn test_flags_override_file() {
        let file: RunFile = toml::from_str(SAMPLE).unwrap();
        let args = RunArgs {
            spot: Some(105.0),
            paths: Some(10),
            variates: Some(VariateKind::Polar),
            ..RunArgs::default()
        };
        let plan = RunPlan::resolve(file, &args).unwrap();

        assert_relative_eq!(plan.params.spot(), 105.0);
        assert_relative_eq!(plan.params.volatility(), 0.25);
        assert_eq!(plan.paths, 10);
        assert_eq!(plan.variates, VariateKind::Polar);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(toml::from_str::<RunFile>("[run]\npathz = 3\n").is_err());
        assert!(toml::from_str::<RunFile>("[run]\nscheme = \"milstein\"\n").is_err());
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let args = RunArgs {
            spot: Some(-1.0),
            ..RunArgs::default()
        };
        assert!(matches!(
            RunPlan::resolve(RunFile::default(), &args),
            Err(ConfigError::InvalidParameter { name: "spot", .. })
        ));
    }

    #[test]
    fn test_zero_steps_rejected_at_assembly() {
        let args = RunArgs {
            steps: Some(0),
            ..RunArgs::default()
        };
        let plan = RunPlan::resolve(RunFile::default(), &args).unwrap();
        assert!(matches!(
            plan.simulator(),
            Err(ConfigError::InvalidStepCount(0))
        ));
    }

    #[test]
    fn test_barrier_without_type_rejected_at_assembly() {
        let args = RunArgs {
            payoff: Some(PayoffKind::Barrier),
            barrier: Some(120.0),
            ..RunArgs::default()
        };
        let plan = RunPlan::resolve(RunFile::default(), &args).unwrap();
        let parts = plan.simulator().unwrap();
        let reporter: Arc<dyn PriceReporter> = Arc::new(pricer_pricing::accumulators::NoopReporter);
        assert!(matches!(
            plan.accumulator(parts.params, reporter),
            Err(ConfigError::MissingComponent("barrier type"))
        ));
    }

    #[test]
    fn test_barrier_payoff_requires_a_level() {
        let args = RunArgs {
            payoff: Some(PayoffKind::Barrier),
            barrier_type: Some(BarrierType::DownOut),
            ..RunArgs::default()
        };
        assert!(matches!(
            RunPlan::resolve(RunFile::default(), &args),
            Err(ConfigError::MissingComponent("barrier level"))
        ));

        let negative = RunArgs {
            barrier: Some(-5.0),
            ..args.clone()
        };
        assert!(matches!(
            RunPlan::resolve(RunFile::default(), &negative),
            Err(ConfigError::InvalidParameter { name: "barrier", .. })
        ));

        // A level from the run file is enough.
        let file: RunFile = toml::from_str("[parameters]\nbarrier = 80.0\n").unwrap();
        let plan = RunPlan::resolve(file, &args).unwrap();
        assert_relative_eq!(plan.params.barrier(), 80.0);
    }

    #[test]
    fn test_zero_barrier_allowed_for_other_payoffs() {
        let plan = RunPlan::resolve(RunFile::default(), &RunArgs::default()).unwrap();
        assert_eq!(plan.params.barrier(), 0.0);
    }
}
