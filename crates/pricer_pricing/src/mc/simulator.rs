//! Parallel path orchestration.
//!
//! [`MonteCarloSimulator`] drives one [`Discretiser`] with per-worker
//! [`VariateGenerator`](crate::rng::VariateGenerator) streams across a rayon
//! pool. Every path gets a private buffer of `NT + 1` levels. The finished
//! buffer is handed read-only to a path callback.
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──start/run──▶ Running ──all paths──▶ Complete
//!                        │
//!                        └─ non-finite level ──▶ Err (finish not invoked)
//! ```
//!
//! `start` and `run` consume the simulator, so a finished simulator cannot be
//! restarted.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use pricer_core::types::ConfigError;
use pricer_models::models::StochasticProcess;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::config::SimulationConfig;
use super::error::SimulationError;
use crate::accumulators::PathAccumulator;
use crate::discretisation::{Discretisation, Discretiser};
use crate::rng::{VariateFactory, VariateKind, VariateSource};

/// Callback receiving the number of completed paths.
pub type ProgressObserver = Arc<dyn Fn(usize) + Send + Sync>;

/// Monte Carlo path simulator.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use pricer_core::types::ParameterSet;
/// use pricer_models::models::{ProcessKind, ProcessModel};
/// use pricer_pricing::accumulators::{EuropeanAccumulator, NoopReporter};
/// use pricer_pricing::discretisation::{Discretiser, SchemeKind};
/// use pricer_pricing::mc::{MonteCarloSimulator, SimulationConfig};
/// use pricer_pricing::rng::VariateKind;
///
/// let params = Arc::new(ParameterSet::builder().maturity(1.0).build().unwrap());
/// let process = ProcessModel::new(ProcessKind::Gbm, params.clone());
///
/// let simulator = MonteCarloSimulator::builder()
///     .config(SimulationConfig::builder().n_paths(1_000).seed(42).build().unwrap())
///     .discretiser(Discretiser::new(SchemeKind::Euler, process, 50).unwrap())
///     .variates(VariateKind::Library)
///     .build()
///     .unwrap();
///
/// let result = simulator
///     .run(EuropeanAccumulator::new(params, Arc::new(NoopReporter)))
///     .unwrap();
/// assert_eq!(result.paths, 1_000);
/// ```
pub struct MonteCarloSimulator {
    config: SimulationConfig,
    discretiser: Discretiser,
    variates: VariateFactory,
    observer: Option<ProgressObserver>,
}

impl MonteCarloSimulator {
    /// Creates a new simulator builder.
    #[inline]
    pub fn builder() -> MonteCarloSimulatorBuilder {
        MonteCarloSimulatorBuilder::default()
    }

    /// Run configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The discretisation scheme.
    #[inline]
    pub fn discretiser(&self) -> &Discretiser {
        &self.discretiser
    }

    /// Factory handing out worker streams.
    #[inline]
    pub fn variate_factory(&self) -> &VariateFactory {
        &self.variates
    }

    /// Runs every path, passing each finished path to `on_path`, then calls
    /// `on_finish` once with the elapsed time.
    ///
    /// `on_path` runs concurrently on every worker.
    ///
    /// # Errors
    ///
    /// - `SimulationError::NonFiniteLevel` if any path reaches NaN or an
    ///   infinity; `on_finish` is then not invoked
    /// - `SimulationError::ThreadPool` if a dedicated pool was requested and
    ///   could not be built
    pub fn start<P, F, R>(self, on_path: P, on_finish: F) -> Result<R, SimulationError>
    where
        P: Fn(&[f64]) + Sync,
        F: FnOnce(Duration) -> R,
    {
        let elapsed = self.simulate(&on_path)?;
        Ok(on_finish(elapsed))
    }

    /// Runs every path through `accumulator` and finalises it.
    ///
    /// # Errors
    ///
    /// See [`start`](Self::start). On error the accumulator is dropped without
    /// being finalised.
    pub fn run<A: PathAccumulator>(self, accumulator: A) -> Result<A::Output, SimulationError> {
        let elapsed = self.simulate(&|path: &[f64]| accumulator.process_path(path))?;
        Ok(accumulator.post_process(elapsed))
    }

    fn simulate<P>(&self, on_path: &P) -> Result<Duration, SimulationError>
    where
        P: Fn(&[f64]) + Sync + ?Sized,
    {
        let n_paths = self.config.n_paths();
        debug!(
            paths = n_paths,
            steps = self.discretiser.mesh().n_steps(),
            process = self.discretiser.process().model_name(),
            scheme = self.discretiser.scheme_name(),
            variates = %self.variates.kind(),
            seed = ?self.variates.seed(),
            "Starting Monte Carlo simulation"
        );

        let start = Instant::now();
        let outcome = match self.config.num_threads() {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?;
                pool.install(|| self.simulate_paths(on_path))
            }
            None => self.simulate_paths(on_path),
        };
        let elapsed = start.elapsed();

        match outcome {
            Ok(()) => {
                info!(
                    paths = n_paths,
                    elapsed_secs = elapsed.as_secs_f64(),
                    "Monte Carlo simulation complete"
                );
                Ok(elapsed)
            }
            Err(err) => {
                warn!(error = %err, "Monte Carlo simulation aborted");
                Err(err)
            }
        }
    }

    fn simulate_paths<P>(&self, on_path: &P) -> Result<(), SimulationError>
    where
        P: Fn(&[f64]) + Sync + ?Sized,
    {
        let mesh = self.discretiser.mesh();
        let dt = mesh.step();
        let initial = self.discretiser.process().initial_condition();
        let interval = self.config.progress_interval();

        let streams = AtomicU64::new(0);
        let completed = AtomicUsize::new(0);

        (0..self.config.n_paths()).into_par_iter().try_for_each_init(
            || self.variates.create(streams.fetch_add(1, Ordering::Relaxed)),
            |rng, index| {
                let mut path = vec![0.0; mesh.len()];
                path[0] = initial;
                for j in 1..path.len() {
                    let z1 = rng.generate();
                    let z2 = rng.generate();
                    path[j] = self.discretiser.advance(path[j - 1], mesh[j - 1], dt, z1, z2);
                }

                if let Some(step) = path.iter().position(|level| !level.is_finite()) {
                    return Err(SimulationError::NonFiniteLevel { path: index, step });
                }

                on_path(&path);

                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                if interval > 0 && done % interval == 0 {
                    self.notify_progress(done);
                }
                Ok(())
            },
        )
    }

    fn notify_progress(&self, done: usize) {
        debug!(completed = done, total = self.config.n_paths(), "Simulation progress");
        if let Some(observer) = &self.observer {
            observer(done);
        }
    }
}

/// Builder for [`MonteCarloSimulator`].
///
/// The configuration and the discretiser are required. The variate kind
/// defaults to [`VariateKind::Library`]; the factory is seeded from the
/// configuration.
#[derive(Default)]
pub struct MonteCarloSimulatorBuilder {
    config: Option<SimulationConfig>,
    discretiser: Option<Discretiser>,
    variates: VariateKind,
    observer: Option<ProgressObserver>,
}

impl MonteCarloSimulatorBuilder {
    /// Sets the run configuration.
    #[inline]
    pub fn config(mut self, config: SimulationConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the discretisation scheme (which owns the process).
    #[inline]
    pub fn discretiser(mut self, discretiser: Discretiser) -> Self {
        self.discretiser = Some(discretiser);
        self
    }

    /// Sets the normal transform used by every worker.
    #[inline]
    pub fn variates(mut self, kind: VariateKind) -> Self {
        self.variates = kind;
        self
    }

    /// Registers a callback invoked every `progress_interval` paths.
    pub fn progress_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Builds the simulator.
    ///
    /// # Errors
    ///
    /// `ConfigError::MissingComponent` if the configuration or the
    /// discretiser was never supplied.
    pub fn build(self) -> Result<MonteCarloSimulator, ConfigError> {
        let config = self
            .config
            .ok_or(ConfigError::MissingComponent("simulation config"))?;
        let discretiser = self
            .discretiser
            .ok_or(ConfigError::MissingComponent("discretiser"))?;
        config.validate()?;

        let variates = VariateFactory::new(self.variates).with_optional_seed(config.seed());
        Ok(MonteCarloSimulator {
            config,
            discretiser,
            variates,
            observer: self.observer,
        })
    }
}
