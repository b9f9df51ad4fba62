//! The accumulator contract and the running statistics shared by every
//! variant.

use std::time::Duration;

/// Reduces completed paths to discounted prices.
///
/// `process_path` is called concurrently from every simulation worker, so
/// implementors synchronise their own state. `post_process` consumes the
/// accumulator: it can run only once, and only after the caller has released
/// every shared borrow taken for `process_path`.
pub trait PathAccumulator: Sync {
    /// Result produced on finalise.
    type Output;

    /// Folds one completed path into the running sums.
    fn process_path(&self, path: &[f64]);

    /// Computes final prices from the sums and reports them.
    fn post_process(self, elapsed: Duration) -> Self::Output;
}

/// Running sum and sum of squares of one payoff leg.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LegSums {
    sum: f64,
    sum_sq: f64,
}

impl LegSums {
    /// Adds one payoff sample.
    #[inline]
    pub fn add(&mut self, payoff: f64) {
        self.sum += payoff;
        self.sum_sq += payoff * payoff;
    }

    /// Raw payoff sum.
    #[inline]
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Discounted mean and its standard error over `count` samples.
    ///
    /// The standard error uses the unbiased sample variance and is zero for
    /// a single sample.
    pub fn estimate(&self, count: usize, discount_factor: f64) -> PriceEstimate {
        if count == 0 {
            return PriceEstimate::default();
        }
        let n = count as f64;
        let mean = self.sum / n;
        let std_error = if count > 1 {
            let variance = ((self.sum_sq - n * mean * mean) / (n - 1.0)).max(0.0);
            (variance / n).sqrt()
        } else {
            0.0
        };
        PriceEstimate {
            price: discount_factor * mean,
            std_error: discount_factor * std_error,
        }
    }
}

/// Discounted Monte Carlo price with its standard error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PriceEstimate {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of `price`.
    pub std_error: f64,
}
