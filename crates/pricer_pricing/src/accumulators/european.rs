//! Terminal-payoff accumulator.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use pricer_core::types::ParameterSet;

use super::report::{EuropeanResult, PricingReport};
use super::reporter::PriceReporter;
use super::traits::{LegSums, PathAccumulator};

#[derive(Debug, Default)]
struct EuropeanSums {
    call: LegSums,
    put: LegSums,
    count: usize,
}

/// Accumulates `max(S_T - K, 0)` and `max(K - S_T, 0)` over the last point
/// of every path.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::time::Duration;
/// use pricer_core::types::ParameterSet;
/// use pricer_pricing::accumulators::{EuropeanAccumulator, NoopReporter, PathAccumulator};
///
/// let params = Arc::new(ParameterSet::builder().strike(100.0).rate(0.0).build().unwrap());
/// let acc = EuropeanAccumulator::new(params, Arc::new(NoopReporter));
/// acc.process_path(&[100.0, 110.0]);
/// acc.process_path(&[100.0, 90.0]);
///
/// let result = acc.post_process(Duration::ZERO);
/// assert_eq!(result.call.price, 5.0);
/// assert_eq!(result.put.price, 5.0);
/// ```
pub struct EuropeanAccumulator {
    params: Arc<ParameterSet>,
    reporter: Arc<dyn PriceReporter>,
    sums: Mutex<EuropeanSums>,
}

impl EuropeanAccumulator {
    /// Creates an empty accumulator.
    pub fn new(params: Arc<ParameterSet>, reporter: Arc<dyn PriceReporter>) -> Self {
        Self {
            params,
            reporter,
            sums: Mutex::new(EuropeanSums::default()),
        }
    }
}

impl PathAccumulator for EuropeanAccumulator {
    type Output = EuropeanResult;

    fn process_path(&self, path: &[f64]) {
        let Some(&terminal) = path.last() else {
            return;
        };
        let call = self.params.call_payoff(terminal);
        let put = self.params.put_payoff(terminal);

        let mut sums = self.sums.lock().unwrap_or_else(PoisonError::into_inner);
        sums.call.add(call);
        sums.put.add(put);
        sums.count += 1;
    }

    fn post_process(self, elapsed: Duration) -> EuropeanResult {
        let sums = self.sums.into_inner().unwrap_or_else(PoisonError::into_inner);
        let df = self.params.discount_factor();
        let result = EuropeanResult {
            call: sums.call.estimate(sums.count, df),
            put: sums.put.estimate(sums.count, df),
            paths: sums.count,
            elapsed,
        };
        self.reporter.report(&PricingReport::European(result));
        result
    }
}
