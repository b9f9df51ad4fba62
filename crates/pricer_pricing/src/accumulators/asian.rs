//! Path-average accumulator.
//!
//! Every point of the path, including the initial level, enters both the
//! arithmetic average `A = Σ S_i / n` and the geometric average
//! `G = exp(Σ ln S_i / n)`.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use pricer_core::types::ParameterSet;

use super::report::{AsianResult, PricingReport};
use super::reporter::PriceReporter;
use super::traits::{LegSums, PathAccumulator};

/// Arithmetic mean of the path.
#[inline]
pub fn arithmetic_average(path: &[f64]) -> f64 {
    path.iter().sum::<f64>() / path.len() as f64
}

/// Geometric mean of the path.
///
/// A path touching zero or below has a geometric mean of zero.
#[inline]
pub fn geometric_average(path: &[f64]) -> f64 {
    if path.iter().any(|&level| level <= 0.0) {
        return 0.0;
    }
    let log_sum: f64 = path.iter().map(|level| level.ln()).sum();
    (log_sum / path.len() as f64).exp()
}

#[derive(Debug, Default)]
struct AsianSums {
    call: LegSums,
    put: LegSums,
    geometric_call: LegSums,
    geometric_put: LegSums,
    count: usize,
}

/// Accumulates calls and puts struck against both path averages.
pub struct AsianAccumulator {
    params: Arc<ParameterSet>,
    reporter: Arc<dyn PriceReporter>,
    sums: Mutex<AsianSums>,
}

impl AsianAccumulator {
    /// Creates an empty accumulator.
    pub fn new(params: Arc<ParameterSet>, reporter: Arc<dyn PriceReporter>) -> Self {
        Self {
            params,
            reporter,
            sums: Mutex::new(AsianSums::default()),
        }
    }
}

impl PathAccumulator for AsianAccumulator {
    type Output = AsianResult;

    fn process_path(&self, path: &[f64]) {
        if path.is_empty() {
            return;
        }
        let avg = arithmetic_average(path);
        let geo = geometric_average(path);

        let mut sums = self.sums.lock().unwrap_or_else(PoisonError::into_inner);
        sums.call.add(self.params.call_payoff(avg));
        sums.put.add(self.params.put_payoff(avg));
        sums.geometric_call.add(self.params.call_payoff(geo));
        sums.geometric_put.add(self.params.put_payoff(geo));
        sums.count += 1;
    }

    fn post_process(self, elapsed: Duration) -> AsianResult {
        let sums = self.sums.into_inner().unwrap_or_else(PoisonError::into_inner);
        let df = self.params.discount_factor();
        let n = sums.count;
        let result = AsianResult {
            call: sums.call.estimate(n, df),
            put: sums.put.estimate(n, df),
            geometric_call: sums.geometric_call.estimate(n, df),
            geometric_put: sums.geometric_put.estimate(n, df),
            paths: n,
            elapsed,
        };
        self.reporter.report(&PricingReport::Asian(result));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulators::NoopReporter;
    use approx::assert_relative_eq;

    fn accumulator(strike: f64) -> AsianAccumulator {
        let params = ParameterSet::builder()
            .strike(strike)
            .rate(0.0)
            .build()
            .unwrap();
        AsianAccumulator::new(Arc::new(params), Arc::new(NoopReporter))
    }

    // ==========================================================
    // Averages
    // ==========================================================

    #[test]
    fn test_averages_of_constant_path() {
        let path = [42.0; 17];
        assert_relative_eq!(arithmetic_average(&path), 42.0, epsilon = 1e-12);
        assert_relative_eq!(geometric_average(&path), 42.0, epsilon = 1e-12);
    }

    #[test]
    fn test_geometric_below_arithmetic() {
        let path = [50.0, 100.0, 200.0];
        assert_relative_eq!(geometric_average(&path), 100.0, epsilon = 1e-10);
        assert_relative_eq!(arithmetic_average(&path), 350.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_geometric_of_non_positive_path_is_zero() {
        assert_eq!(geometric_average(&[100.0, -1.0, 50.0]), 0.0);
        assert_eq!(geometric_average(&[100.0, 0.0]), 0.0);
    }

    // ==========================================================
    // Accumulation
    // ==========================================================

    #[test]
    fn test_constant_path_prices() {
        let acc = accumulator(40.0);
        acc.process_path(&[50.0; 5]);
        let result = acc.post_process(Duration::ZERO);

        assert_relative_eq!(result.call.price, 10.0, epsilon = 1e-12);
        assert_relative_eq!(result.geometric_call.price, 10.0, epsilon = 1e-12);
        assert_eq!(result.put.price, 0.0);
        assert_eq!(result.geometric_put.price, 0.0);
        assert_eq!(result.paths, 1);
    }

    #[test]
    fn test_average_uses_every_point() {
        let acc = accumulator(100.0);
        // Terminal 100 is at the money, the average 110 is not.
        acc.process_path(&[100.0, 130.0, 100.0]);
        let result = acc.post_process(Duration::ZERO);
        assert_relative_eq!(result.call.price, 10.0, epsilon = 1e-12);
    }
}
