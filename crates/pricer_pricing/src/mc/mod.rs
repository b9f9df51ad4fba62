//! Monte Carlo simulation engine.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloSimulator
//! ├── SimulationConfig  (path count, seed, progress, pool size)
//! ├── Discretiser       (scheme + process + time mesh)
//! ├── VariateFactory    (one seeded stream per worker)
//! └── PathAccumulator   (payoff sums, finalised once)
//! ```
//!
//! Paths are independent. Each is simulated into a private buffer by a rayon
//! worker, checked for non-finite levels, and handed to the path callback.
//! The finish callback runs once, after the parallel loop has joined.

pub mod config;
pub mod error;
pub mod simulator;

pub use config::{SimulationConfig, SimulationConfigBuilder, DEFAULT_PROGRESS_INTERVAL};
pub use error::SimulationError;
pub use simulator::{MonteCarloSimulator, MonteCarloSimulatorBuilder, ProgressObserver};
