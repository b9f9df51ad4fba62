//! Display collaborators that receive finalised prices.
//!
//! A reporter is handed to each accumulator at construction. The library
//! ships a no-op reporter, a recording reporter for tests, and a reporter
//! that emits `tracing` events. Console output lives in the CLI.

use std::sync::{Mutex, PoisonError};

use tracing::info;

use super::report::PricingReport;

/// Receives the result of a finalised accumulator.
pub trait PriceReporter: Send + Sync {
    /// Called once per run, from `post_process`.
    fn report(&self, report: &PricingReport);
}

/// Discards every report.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopReporter;

impl PriceReporter for NoopReporter {
    fn report(&self, _report: &PricingReport) {}
}

/// Keeps every report it receives.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use pricer_pricing::accumulators::{PriceReporter, RecordingReporter};
///
/// let recorder = Arc::new(RecordingReporter::default());
/// let shared: Arc<dyn PriceReporter> = recorder.clone();
/// assert!(recorder.reports().is_empty());
/// # drop(shared);
/// ```
#[derive(Debug, Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<PricingReport>>,
}

impl RecordingReporter {
    /// Snapshot of the reports received so far.
    pub fn reports(&self) -> Vec<PricingReport> {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Most recent report, if any.
    pub fn last(&self) -> Option<PricingReport> {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .copied()
    }
}

impl PriceReporter for RecordingReporter {
    fn report(&self, report: &PricingReport) {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*report);
    }
}

/// Logs final prices as structured `info!` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl PriceReporter for TracingReporter {
    fn report(&self, report: &PricingReport) {
        let elapsed_secs = report.elapsed().as_secs_f64();
        match report {
            PricingReport::European(r) => info!(
                call = r.call.price,
                call_se = r.call.std_error,
                put = r.put.price,
                put_se = r.put.std_error,
                paths = r.paths,
                elapsed_secs,
                "European option priced"
            ),
            PricingReport::Asian(r) => info!(
                call = r.call.price,
                put = r.put.price,
                geometric_call = r.geometric_call.price,
                geometric_put = r.geometric_put.price,
                paths = r.paths,
                elapsed_secs,
                "Asian option priced"
            ),
            PricingReport::Barrier(r) => info!(
                barrier_type = %r.barrier_type,
                barrier = r.barrier,
                call = r.call.price,
                put = r.put.price,
                paths = r.paths,
                elapsed_secs,
                "Barrier option priced"
            ),
        }
    }
}
