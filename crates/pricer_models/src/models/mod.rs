//! Stochastic processes driving the simulated underlying.
//!
//! - [`StochasticProcess`]: coefficient view of `dS = a dt + b dW`
//! - [`Lognormal`]: geometric Brownian motion
//! - [`ConstantElasticity`]: CEV, `b = σ S^β`
//! - [`ProcessModel`]: static dispatch over the above, selected by [`ProcessKind`]
//!
//! Every process reads a shared, immutable `Arc<ParameterSet>`.

pub mod cev;
pub mod lognormal;
pub mod model_enum;
pub mod process;

pub use cev::ConstantElasticity;
pub use lognormal::Lognormal;
pub use model_enum::{ProcessKind, ProcessModel};
pub use process::StochasticProcess;
