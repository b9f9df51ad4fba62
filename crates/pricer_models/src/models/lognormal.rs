//! Lognormal (geometric Brownian motion) process.
//!
//! ```text
//! dS = (r - q) S dt + σ S dW
//! ```
//!
//! The elasticity of the diffusion is exactly one, so ∂b/∂S = σ everywhere.

use std::sync::Arc;

use pricer_core::types::ParameterSet;

use super::process::StochasticProcess;

/// Geometric Brownian motion over a shared parameter snapshot.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use pricer_core::types::ParameterSet;
/// use pricer_models::models::{Lognormal, StochasticProcess};
///
/// let params = Arc::new(
///     ParameterSet::builder().rate(0.05).dividend(0.01).volatility(0.2).build().unwrap(),
/// );
/// let gbm = Lognormal::new(params);
///
/// assert!((gbm.drift(100.0, 0.0) - 4.0).abs() < 1e-12);
/// assert!((gbm.diffusion(100.0, 0.0) - 20.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct Lognormal {
    params: Arc<ParameterSet>,
}

impl Lognormal {
    /// Creates the process over `params`.
    pub fn new(params: Arc<ParameterSet>) -> Self {
        Self { params }
    }

    /// The shared parameter snapshot.
    #[inline]
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }
}

impl StochasticProcess for Lognormal {
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
        self.params.volatility() * level
    }

    #[inline]
    fn diffusion_derivative(&self, _level: f64) -> f64 {
        self.params.volatility()
    }

    fn model_name(&self) -> &'static str {
        "GBM"
    }
}
