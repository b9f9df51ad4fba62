//! # Pricer Pricing (L3: Simulation Engine)
//!
//! Monte Carlo pricing of European, Asian and barrier options.
//!
//! This crate provides:
//! - Standard normal variate sources with per-worker seeded streams ([`rng`])
//! - Euler and exact lognormal discretisation over a uniform mesh ([`discretisation`])
//! - The parallel path simulator ([`mc`])
//! - Thread-safe payoff accumulators and price reporters ([`accumulators`])
//!
//! ## Usage Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pricer_core::types::ParameterSet;
//! use pricer_models::models::{ProcessKind, ProcessModel};
//! use pricer_pricing::accumulators::{Accumulator, NoopReporter, PayoffKind};
//! use pricer_pricing::discretisation::{Discretiser, SchemeKind};
//! use pricer_pricing::mc::{MonteCarloSimulator, SimulationConfig};
//! use pricer_pricing::rng::VariateKind;
//!
//! let params = Arc::new(ParameterSet::builder().maturity(1.0).build().unwrap());
//! let process = ProcessModel::new(ProcessKind::Gbm, params.clone());
//!
//! let simulator = MonteCarloSimulator::builder()
//!     .config(SimulationConfig::builder().n_paths(10_000).seed(1).build().unwrap())
//!     .discretiser(Discretiser::new(SchemeKind::ClosedForm, process, 1).unwrap())
//!     .variates(VariateKind::Polar)
//!     .build()
//!     .unwrap();
//!
//! let accumulator =
//!     Accumulator::new(PayoffKind::European, None, params, Arc::new(NoopReporter)).unwrap();
//! let report = simulator.run(accumulator).unwrap();
//!
//! assert_eq!(report.paths(), 10_000);
//! assert!(report.call().price > report.put().price);
//! ```
//!
//! ## Concurrency
//!
//! Paths run on a rayon pool. Path buffers and variate generators are private
//! to each worker; the accumulator's sums and the progress counter are the
//! only shared mutable state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod accumulators;
pub mod discretisation;
pub mod mc;
pub mod rng;
