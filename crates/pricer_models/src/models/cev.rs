//! Constant elasticity of variance (CEV) process.
//!
//! ```text
//! dS = (r - q) S dt + σ S^β dW
//! ```
//!
//! β = 1 recovers geometric Brownian motion. For β < 1 the diffusion
//! derivative σ β S^(β-1) blows up as S → 0, so it is evaluated as
//! σ β / S^(1-β) on that branch.
//!
//! Levels must stay positive: `powf` of a negative level with a non-integer
//! exponent is NaN.

use std::sync::Arc;

use pricer_core::types::ParameterSet;

use super::process::StochasticProcess;

/// CEV process over a shared parameter snapshot.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use pricer_core::types::ParameterSet;
/// use pricer_models::models::{ConstantElasticity, StochasticProcess};
///
/// let params = Arc::new(ParameterSet::builder().volatility(0.2).beta(0.5).build().unwrap());
/// let cev = ConstantElasticity::new(params);
///
/// // σ S^β = 0.2 * sqrt(100)
/// assert!((cev.diffusion(100.0, 0.0) - 2.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct ConstantElasticity {
    params: Arc<ParameterSet>,
}

impl ConstantElasticity {
    /// Creates the process over `params`; β is read from `params.beta()`.
    pub fn new(params: Arc<ParameterSet>) -> Self {
        Self { params }
    }

    /// Elasticity exponent β.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.params.beta()
    }

    /// The shared parameter snapshot.
    #[inline]
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }
}

impl StochasticProcess for ConstantElasticity {
    #[inline]
    fn expiry(&self) -> f64 {
        self.params.maturity()
    }

    #[inline]
    fn initial_condition(&self) -> f64 {
        self.params.spot()
    }

    #[inline]
    fn drift(&self, level: f64, _time: f64) -> f64 {
        (self.params.rate() - self.params.dividend()) * level
    }

    #[inline]
    fn diffusion(&self, level: f64, _time: f64) -> f64 {
        self.params.volatility() * level.powf(self.beta())
    }

    #[inline]
    fn diffusion_derivative(&self, level: f64) -> f64 {
        let beta = self.beta();
        let vol = self.params.volatility();
        if beta > 1.0 {
            vol * beta * level.powf(beta - 1.0)
        } else {
            vol * beta / level.powf(1.0 - beta)
        }
    }

    fn model_name(&self) -> &'static str {
        "CEV"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Lognormal;
    use approx::assert_relative_eq;

    fn process(beta: f64) -> ConstantElasticity {
        let params = ParameterSet::builder()
            .rate(0.05)
            .dividend(0.0)
            .volatility(0.3)
            .beta(beta)
            .build()
            .unwrap();
        ConstantElasticity::new(Arc::new(params))
    }

    #[test]
    fn test_diffusion_power_law() {
        let cev = process(0.5);
        assert_relative_eq!(cev.diffusion(4.0, 0.0), 0.3 * 2.0, epsilon = 1e-12);
        assert_relative_eq!(cev.diffusion(100.0, 1.0), 0.3 * 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_derivative_above_unit_elasticity() {
        let cev = process(1.5);
        let s: f64 = 9.0;
        // σ β S^(β-1) = 0.3 * 1.5 * 3
        assert_relative_eq!(cev.diffusion_derivative(s), 0.3 * 1.5 * 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_derivative_below_unit_elasticity() {
        let cev = process(0.5);
        let s: f64 = 16.0;
        // σ β / S^(1-β) = 0.3 * 0.5 / 4
        assert_relative_eq!(cev.diffusion_derivative(s), 0.3 * 0.5 / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_both_branches_agree_with_power_rule() {
        for beta in [0.3, 0.9, 1.0, 1.2, 2.0] {
            let cev = process(beta);
            let s: f64 = 37.5;
            let analytic = 0.3 * beta * s.powf(beta - 1.0);
            assert_relative_eq!(cev.diffusion_derivative(s), analytic, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_unit_elasticity_matches_lognormal() {
        let params = Arc::new(
            ParameterSet::builder()
                .rate(0.04)
                .dividend(0.01)
                .volatility(0.2)
                .beta(1.0)
                .build()
                .unwrap(),
        );
        let cev = ConstantElasticity::new(params.clone());
        let gbm = Lognormal::new(params);

        for s in [0.5, 10.0, 250.0] {
            assert_relative_eq!(cev.drift(s, 0.0), gbm.drift(s, 0.0), epsilon = 1e-12);
            assert_relative_eq!(cev.diffusion(s, 0.0), gbm.diffusion(s, 0.0), epsilon = 1e-12);
            assert_relative_eq!(
                cev.diffusion_derivative(s),
                gbm.diffusion_derivative(s),
                epsilon = 1e-12
            );
        }
    }
}
