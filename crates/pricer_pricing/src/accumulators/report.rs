//! Finalised results handed to a [`PriceReporter`](super::PriceReporter).

use std::time::Duration;

use super::barrier::BarrierType;
use super::traits::PriceEstimate;

/// Terminal-payoff prices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EuropeanResult {
    /// Call price.
    pub call: PriceEstimate,
    /// Put price.
    pub put: PriceEstimate,
    /// Number of paths folded in.
    pub paths: usize,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

/// Path-average prices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsianResult {
    /// Call on the arithmetic average.
    pub call: PriceEstimate,
    /// Put on the arithmetic average.
    pub put: PriceEstimate,
    /// Call on the geometric average.
    pub geometric_call: PriceEstimate,
    /// Put on the geometric average.
    pub geometric_put: PriceEstimate,
    /// Number of paths folded in.
    pub paths: usize,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

/// Barrier-conditioned prices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarrierResult {
    /// Knock condition.
    pub barrier_type: BarrierType,
    /// Barrier level H.
    pub barrier: f64,
    /// Call price.
    pub call: PriceEstimate,
    /// Put price.
    pub put: PriceEstimate,
    /// Number of paths folded in, knocked out or not.
    pub paths: usize,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

/// Output of any accumulator variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PricingReport {
    /// European result.
    European(EuropeanResult),
    /// Asian result.
    Asian(AsianResult),
    /// Barrier result.
    Barrier(BarrierResult),
}

impl PricingReport {
    /// Call price (arithmetic for Asian).
    pub fn call(&self) -> PriceEstimate {
        match self {
            PricingReport::European(r) => r.call,
            PricingReport::Asian(r) => r.call,
            PricingReport::Barrier(r) => r.call,
        }
    }

    /// Put price (arithmetic for Asian).
    pub fn put(&self) -> PriceEstimate {
        match self {
            PricingReport::European(r) => r.put,
            PricingReport::Asian(r) => r.put,
            PricingReport::Barrier(r) => r.put,
        }
    }

    /// Number of paths folded in.
    pub fn paths(&self) -> usize {
        match self {
            PricingReport::European(r) => r.paths,
            PricingReport::Asian(r) => r.paths,
            PricingReport::Barrier(r) => r.paths,
        }
    }

    /// Wall-clock time of the run.
    pub fn elapsed(&self) -> Duration {
        match self {
            PricingReport::European(r) => r.elapsed,
            PricingReport::Asian(r) => r.elapsed,
            PricingReport::Barrier(r) => r.elapsed,
        }
    }

    /// Upper-case label used in console output.
    pub fn label(&self) -> &'static str {
        match self {
            PricingReport::European(_) => "EUROPEAN OPTION",
            PricingReport::Asian(_) => "ASIAN OPTION",
            PricingReport::Barrier(_) => "BARRIER OPTION",
        }
    }
}

impl From<EuropeanResult> for PricingReport {
    fn from(result: EuropeanResult) -> Self {
        PricingReport::European(result)
    }
}

impl From<AsianResult> for PricingReport {
    fn from(result: AsianResult) -> Self {
        PricingReport::Asian(result)
    }
}

impl From<BarrierResult> for PricingReport {
    fn from(result: BarrierResult) -> Self {
        PricingReport::Barrier(result)
    }
}
