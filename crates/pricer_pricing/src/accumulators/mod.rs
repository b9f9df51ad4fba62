//! Payoff accumulators.
//!
//! An accumulator folds every completed path into running payoff sums and,
//! once the run is over, turns them into discounted prices:
//!
//! - [`EuropeanAccumulator`]: terminal payoff
//! - [`AsianAccumulator`]: arithmetic and geometric path averages
//! - [`BarrierAccumulator`]: terminal payoff conditioned on the path extrema
//!
//! # Synchronisation
//!
//! `process_path` is called concurrently by the simulation workers. Every
//! variant guards its whole update (payoff sums and path count) with a single
//! `Mutex`. `post_process` takes the accumulator by value, so it runs after
//! every `process_path` borrow has ended and at most once.
//!
//! # Reporting
//!
//! Finalised results go to the [`PriceReporter`] supplied at construction.

pub mod accumulator;
pub mod asian;
pub mod barrier;
pub mod european;
pub mod report;
pub mod reporter;
pub mod traits;

pub use accumulator::{Accumulator, PayoffKind};
pub use asian::AsianAccumulator;
pub use barrier::{BarrierAccumulator, BarrierType};
pub use european::EuropeanAccumulator;
pub use report::{AsianResult, BarrierResult, EuropeanResult, PricingReport};
pub use reporter::{NoopReporter, PriceReporter, RecordingReporter, TracingReporter};
pub use traits::{LegSums, PathAccumulator, PriceEstimate};
