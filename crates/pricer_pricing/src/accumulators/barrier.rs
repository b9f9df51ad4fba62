//! Barrier-conditioned accumulator.
//!
//! The barrier is monitored discretely on the mesh points, initial level
//! included:
//!
//! - **Up-and-In**: pays if `max(path) >= H`
//! - **Up-and-Out**: pays if `max(path) < H`
//! - **Down-and-In**: pays if `min(path) <= H`
//! - **Down-and-Out**: pays if `min(path) > H`
//!
//! A path that does not pay still counts towards the average.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use pricer_core::types::{ConfigError, ParameterSet};

use super::report::{BarrierResult, PricingReport};
use super::reporter::PriceReporter;
use super::traits::{LegSums, PathAccumulator};

/// Barrier type enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BarrierType {
    /// Up-and-In: activates once the maximum reaches the barrier
    UpIn,
    /// Up-and-Out: deactivates once the maximum reaches the barrier
    UpOut,
    /// Down-and-In: activates once the minimum reaches the barrier
    DownIn,
    /// Down-and-Out: deactivates once the minimum reaches the barrier
    DownOut,
}

impl BarrierType {
    /// Returns true if this is an "up" barrier (uses path maximum).
    #[inline]
    pub fn is_up(&self) -> bool {
        matches!(self, BarrierType::UpIn | BarrierType::UpOut)
    }

    /// Returns true if this is an "in" barrier (knock-in).
    #[inline]
    pub fn is_in(&self) -> bool {
        matches!(self, BarrierType::UpIn | BarrierType::DownIn)
    }

    /// Whether a path with extrema `(min, max)` pays against `barrier`.
    #[inline]
    pub fn is_active(&self, min: f64, max: f64, barrier: f64) -> bool {
        match self {
            BarrierType::UpIn => max >= barrier,
            BarrierType::UpOut => max < barrier,
            BarrierType::DownIn => min <= barrier,
            BarrierType::DownOut => min > barrier,
        }
    }
}

impl FromStr for BarrierType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "up-in" | "up-and-in" => Ok(BarrierType::UpIn),
            "up-out" | "up-and-out" => Ok(BarrierType::UpOut),
            "down-in" | "down-and-in" => Ok(BarrierType::DownIn),
            "down-out" | "down-and-out" => Ok(BarrierType::DownOut),
            _ => Err(ConfigError::UnknownVariant {
                kind: "barrier type",
                name: s.to_string(),
                expected: "up-in, up-out, down-in, down-out",
            }),
        }
    }
}

impl fmt::Display for BarrierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarrierType::UpIn => write!(f, "up-in"),
            BarrierType::UpOut => write!(f, "up-out"),
            BarrierType::DownIn => write!(f, "down-in"),
            BarrierType::DownOut => write!(f, "down-out"),
        }
    }
}

/// Minimum and maximum of a non-empty path.
#[inline]
pub fn path_extrema(path: &[f64]) -> (f64, f64) {
    path.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        })
}

#[derive(Debug, Default)]
struct BarrierSums {
    call: LegSums,
    put: LegSums,
    count: usize,
}

/// Accumulates terminal call/put payoffs on paths that satisfy the barrier
/// condition.
pub struct BarrierAccumulator {
    params: Arc<ParameterSet>,
    barrier_type: BarrierType,
    barrier: f64,
    reporter: Arc<dyn PriceReporter>,
    sums: Mutex<BarrierSums>,
}

impl BarrierAccumulator {
    /// Creates an empty accumulator with the barrier level taken from
    /// `params.barrier()`.
    pub fn new(
        params: Arc<ParameterSet>,
        barrier_type: BarrierType,
        reporter: Arc<dyn PriceReporter>,
    ) -> Self {
        let barrier = params.barrier();
        Self {
            params,
            barrier_type,
            barrier,
            reporter,
            sums: Mutex::new(BarrierSums::default()),
        }
    }

    /// Knock condition.
    #[inline]
    pub fn barrier_type(&self) -> BarrierType {
        self.barrier_type
    }

    /// Barrier level H.
    #[inline]
    pub fn barrier(&self) -> f64 {
        self.barrier
    }
}

impl PathAccumulator for BarrierAccumulator {
    type Output = BarrierResult;

    fn process_path(&self, path: &[f64]) {
        let Some(&terminal) = path.last() else {
            return;
        };
        let (min, max) = path_extrema(path);
        let active = self.barrier_type.is_active(min, max, self.barrier);

        let mut sums = self.sums.lock().unwrap_or_else(PoisonError::into_inner);
        if active {
            sums.call.add(self.params.call_payoff(terminal));
            sums.put.add(self.params.put_payoff(terminal));
        }
        sums.count += 1;
    }

    fn post_process(self, elapsed: Duration) -> BarrierResult {
        let sums = self.sums.into_inner().unwrap_or_else(PoisonError::into_inner);
        let df = self.params.discount_factor();
        let result = BarrierResult {
            barrier_type: self.barrier_type,
            barrier: self.barrier,
            call: sums.call.estimate(sums.count, df),
            put: sums.put.estimate(sums.count, df),
            paths: sums.count,
            elapsed,
        };
        self.reporter.report(&PricingReport::Barrier(result));
        result
    }
}
