//! Simulation run configuration.
//!
//! Only run-level settings live here. The scheme, its step count and the
//! process are supplied through the [`Discretiser`](crate::discretisation::Discretiser).

use pricer_core::types::ConfigError;

/// Default number of completed paths between progress notifications.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 10_000;

/// Immutable run configuration.
///
/// Use [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(100_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 100_000);
/// assert_eq!(config.seed(), Some(42));
/// assert_eq!(config.progress_interval(), 10_000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Optional master seed for reproducible streams.
    seed: Option<u64>,
    /// Paths between progress notifications; 0 disables them.
    progress_interval: usize,
    /// Size of a dedicated worker pool; `None` uses the global rayon pool.
    num_threads: Option<usize>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the optional master seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the progress interval (0 when disabled).
    #[inline]
    pub fn progress_interval(&self) -> usize {
        self.progress_interval
    }

    /// Returns the dedicated pool size, if any.
    #[inline]
    pub fn num_threads(&self) -> Option<usize> {
        self.num_threads
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0
    /// - `num_threads` is `Some(0)`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.num_threads == Some(0) {
            return Err(ConfigError::invalid("num_threads", "must be at least 1"));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// `n_paths` is required; everything else has a default.
#[derive(Clone, Debug)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    seed: Option<u64>,
    progress_interval: usize,
    num_threads: Option<usize>,
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self {
            n_paths: None,
            seed: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            num_threads: None,
        }
    }
}

impl SimulationConfigBuilder {
    /// Sets the number of simulation paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the master seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the master seed.
    #[inline]
    pub fn optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the number of completed paths between progress notifications.
    /// Zero disables progress reporting.
    #[inline]
    pub fn progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Runs on a dedicated pool of `num_threads` workers.
    #[inline]
    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingComponent` if `n_paths` was never set
    /// - see [`SimulationConfig::validate`]
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let n_paths = self
            .n_paths
            .ok_or(ConfigError::MissingComponent("path count"))?;

        let config = SimulationConfig {
            n_paths,
            seed: self.seed,
            progress_interval: self.progress_interval,
            num_threads: self.num_threads,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = SimulationConfig::builder().n_paths(10).build().unwrap();
        assert_eq!(config.n_paths(), 10);
        assert_eq!(config.seed(), None);
        assert_eq!(config.progress_interval(), DEFAULT_PROGRESS_INTERVAL);
        assert_eq!(config.num_threads(), None);
    }

    #[test]
    fn test_builder_overrides() {
        let config = SimulationConfig::builder()
            .n_paths(500)
            .seed(9)
            .progress_interval(0)
            .num_threads(2)
            .build()
            .unwrap();
        assert_eq!(config.seed(), Some(9));
        assert_eq!(config.progress_interval(), 0);
        assert_eq!(config.num_threads(), Some(2));
    }

    #[test]
    fn test_missing_path_count() {
        assert_eq!(
            SimulationConfig::builder().build(),
            Err(ConfigError::MissingComponent("path count"))
        );
    }

    #[test]
    fn test_zero_paths_rejected() {
        assert_eq!(
            SimulationConfig::builder().n_paths(0).build(),
            Err(ConfigError::InvalidPathCount(0))
        );
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(matches!(
            SimulationConfig::builder().n_paths(1).num_threads(0).build(),
            Err(ConfigError::InvalidParameter { name: "num_threads", .. })
        ));
    }
}
