//! Exact lognormal sampler.
//!
//! ```text
//! S(t_n + Δ) = S0 · exp((r - σ²/2)(t_n + Δ) + σ √(t_n + Δ) Z)
//! ```
//!
//! Each call draws the marginal at `t_n + Δ` directly from `S0`; the current
//! level `xn` is not read. Consecutive points of a path are therefore
//! independent draws from their marginals rather than a Brownian bridge.

use pricer_core::types::ConfigError;
use pricer_models::models::{ProcessModel, StochasticProcess};

use super::mesh::TimeMesh;
use super::scheme::Discretisation;

/// Closed-form lognormal marginal sampler.
#[derive(Clone, Debug)]
pub struct ClosedForm {
    process: ProcessModel,
    mesh: TimeMesh,
    spot: f64,
    rate: f64,
    volatility: f64,
}

impl ClosedForm {
    /// Builds the scheme, capturing S0, r and σ from the process parameters.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidStepCount` if `n_steps` is 0.
    pub fn new(process: ProcessModel, n_steps: usize) -> Result<Self, ConfigError> {
        let mesh = TimeMesh::new(process.expiry(), n_steps)?;
        let params = *process.params();
        Ok(Self {
            process,
            mesh,
            spot: params.spot(),
            rate: params.rate(),
            volatility: params.volatility(),
        })
    }
}

impl Discretisation for ClosedForm {
    #[inline]
    fn advance(&self, _xn: f64, tn: f64, dt: f64, z1: f64, _z2: f64) -> f64 {
        let t = tn + dt;
        let alpha = 0.5 * self.volatility * self.volatility;
        self.spot * ((self.rate - alpha) * t + self.volatility * t.sqrt() * z1).exp()
    }

    #[inline]
    fn mesh(&self) -> &TimeMesh {
        &self.mesh
    }

    #[inline]
    fn process(&self) -> &ProcessModel {
        &self.process
    }

    fn scheme_name(&self) -> &'static str {
        "ClosedForm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::ParameterSet;
    use pricer_models::models::ProcessKind;
    use std::sync::Arc;

    fn scheme() -> ClosedForm {
        let params = ParameterSet::builder()
            .spot(100.0)
            .maturity(2.0)
            .rate(0.05)
            .volatility(0.2)
            .build()
            .unwrap();
        ClosedForm::new(ProcessModel::new(ProcessKind::Gbm, Arc::new(params)), 4).unwrap()
    }

    #[test]
    fn test_zero_variate_is_deterministic_growth() {
        let exact = scheme();
        let (tn, dt) = (0.5_f64, 0.5_f64);
        let expected = 100.0 * ((0.05 - 0.5 * 0.04) * (tn + dt)).exp();
        assert_relative_eq!(exact.advance(123.0, tn, dt, 0.0, 0.0), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_current_level_is_ignored() {
        let exact = scheme();
        let a = exact.advance(50.0, 1.0, 0.5, 0.7, 0.0);
        let b = exact.advance(150.0, 1.0, 0.5, 0.7, 0.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_mesh_spans_process_expiry() {
        let exact = scheme();
        assert_eq!(exact.mesh().len(), 5);
        assert_relative_eq!(exact.mesh().horizon(), 2.0, epsilon = 1e-12);
    }
}
