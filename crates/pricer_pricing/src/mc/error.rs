//! Error types for the simulation engine.
//!
//! Configuration problems surface before any path is generated as
//! [`SimulationError::Config`]. The only mid-run failure is a non-finite level
//! in a finished path, which aborts the whole run.

use pricer_core::types::ConfigError;
use thiserror::Error;

/// Errors returned by [`MonteCarloSimulator`](super::MonteCarloSimulator).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Invalid configuration, detected before the run started.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A finished path contained NaN or an infinity.
    #[error("Non-finite level on path {path} at step {step}")]
    NonFiniteLevel {
        /// Zero-based index of the offending path.
        path: usize,
        /// Index of the first non-finite point in that path.
        step: usize,
    },

    /// The dedicated worker pool could not be built.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

impl From<rayon::ThreadPoolBuildError> for SimulationError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        SimulationError::ThreadPool(err.to_string())
    }
}
