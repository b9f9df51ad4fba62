//! Console output for finished runs.

use std::fmt::Write as _;

use pricer_core::types::ParameterSet;
use pricer_pricing::accumulators::{PriceEstimate, PriceReporter, PricingReport};

/// Prints the option parameters and prices to stdout once a run finishes.
#[derive(Clone, Copy, Debug)]
pub struct ConsoleReporter {
    params: ParameterSet,
}

impl ConsoleReporter {
    /// Creates a reporter that echoes `params` alongside the prices.
    pub fn new(params: ParameterSet) -> Self {
        Self { params }
    }

    /// Renders `report` as the block printed to the console.
    pub fn render(&self, report: &PricingReport) -> String {
        let p = &self.params;
        let mut out = String::new();

        let _ = writeln!(out, "\n{}", report.label());
        let _ = writeln!(
            out,
            "Option parameters: S0 = {}, K = {}, vol = {}, T = {}, r = {}, q = {}",
            p.spot(),
            p.strike(),
            p.volatility(),
            p.maturity(),
            p.rate(),
            p.dividend()
        );
        if let PricingReport::Barrier(barrier) = report {
            let _ = writeln!(
                out,
                "Barrier: {} at {}",
                barrier.barrier_type, barrier.barrier
            );
        }
        let _ = writeln!(out, "Number of MC simulations = {}", report.paths());

        let _ = writeln!(
            out,
            "\nCall Price = {}, Put Price = {}",
            estimate(report.call()),
            estimate(report.put())
        );
        if let PricingReport::Asian(asian) = report {
            let _ = writeln!(
                out,
                "Call Price (Geometric Average) = {}, Put Price (Geometric Average) = {}",
                estimate(asian.geometric_call),
                estimate(asian.geometric_put)
            );
        }

        let _ = writeln!(
            out,
            "\nTime elapsed: {:.3}s",
            report.elapsed().as_secs_f64()
        );
        out
    }
}

impl PriceReporter for ConsoleReporter {
    fn report(&self, report: &PricingReport) {
        print!("{}", self.render(report));
    }
}

fn estimate(e: PriceEstimate) -> String {
    format!("{:.6} (± {:.6})", e.price, e.std_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use pricer_pricing::accumulators::{AsianResult, BarrierResult, BarrierType, EuropeanResult};

    fn leg(price: f64) -> PriceEstimate {
        PriceEstimate {
            price,
            std_error: 0.01,
        }
    }

    fn params() -> ParameterSet {
        ParameterSet::builder()
            .spot(100.0)
            .strike(95.0)
            .maturity(1.0)
            .barrier(120.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_european_block() {
        let report = PricingReport::from(EuropeanResult {
            call: leg(10.5),
            put: leg(3.25),
            paths: 1000,
            elapsed: Duration::from_millis(1500),
        });
        let text = ConsoleReporter::new(params()).render(&report);

        assert!(text.contains("EUROPEAN OPTION"));
        assert!(text.contains("S0 = 100, K = 95, vol = 0.3, T = 1, r = 0.08, q = 0"));
        assert!(text.contains("Number of MC simulations = 1000"));
        assert!(text.contains("Call Price = 10.500000 (± 0.010000)"));
        assert!(text.contains("Put Price = 3.250000"));
        assert!(text.contains("Time elapsed: 1.500s"));
        assert!(!text.contains("Barrier"));
        assert!(!text.contains("Geometric"));
    }

    #[test]
    fn test_asian_block_includes_geometric_legs() {
        let report = PricingReport::from(AsianResult {
            call: leg(6.0),
            put: leg(2.0),
            geometric_call: leg(5.5),
            geometric_put: leg(2.25),
            paths: 10,
            elapsed: Duration::ZERO,
        });
        let text = ConsoleReporter::new(params()).render(&report);

        assert!(text.contains("Call Price (Geometric Average) = 5.500000"));
        assert!(text.contains("Put Price (Geometric Average) = 2.250000"));
    }

    #[test]
    fn test_barrier_block_includes_level() {
        let report = PricingReport::from(BarrierResult {
            barrier_type: BarrierType::UpOut,
            barrier: 120.0,
            call: leg(1.0),
            put: leg(4.0),
            paths: 10,
            elapsed: Duration::ZERO,
        });
        let text = ConsoleReporter::new(params()).render(&report);

        assert!(text.contains(&format!("Barrier: {} at 120", BarrierType::UpOut)));
    }
}
