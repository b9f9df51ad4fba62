//! Standard normal variate sources for path simulation.
//!
//! This module provides:
//! - [`VariateSource`]: the `generate() -> f64` contract
//! - [`LibraryNormal`]: `StdRng` with `rand_distr::StandardNormal`
//! - [`PolarMarsaglia`]: polar rejection method
//! - [`BoxMuller`]: Box-Muller transform (cosine branch)
//! - [`VariateFactory`]: builds one independently seeded [`VariateGenerator`]
//!   per simulation worker
//!
//! Generators are never shared between workers; each worker asks the factory
//! for its own stream.

pub mod box_muller;
pub mod factory;
pub mod polar;
pub mod prng;
pub mod source;

pub use box_muller::BoxMuller;
pub use factory::{VariateFactory, VariateGenerator, VariateKind};
pub use polar::PolarMarsaglia;
pub use prng::LibraryNormal;
pub use source::VariateSource;
