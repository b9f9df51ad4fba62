//! Euler-Maruyama scheme.
//!
//! ```text
//! S_{n+1} = S_n + a(S_n, t_n) Δ + b(S_n, t_n) √Δ Z
//! ```

use pricer_core::types::ConfigError;
use pricer_models::models::{ProcessModel, StochasticProcess};

use super::mesh::TimeMesh;
use super::scheme::Discretisation;

/// Euler-Maruyama over any [`ProcessModel`].
#[derive(Clone, Debug)]
pub struct Euler {
    process: ProcessModel,
    mesh: TimeMesh,
}

impl Euler {
    /// Builds the scheme and its mesh over the process expiry.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidStepCount` if `n_steps` is 0.
    pub fn new(process: ProcessModel, n_steps: usize) -> Result<Self, ConfigError> {
        let mesh = TimeMesh::new(process.expiry(), n_steps)?;
        Ok(Self { process, mesh })
    }
}

impl Discretisation for Euler {
    #[inline]
    fn advance(&self, xn: f64, tn: f64, dt: f64, z1: f64, _z2: f64) -> f64 {
        xn + self.process.drift(xn, tn) * dt + self.process.diffusion(xn, tn) * dt.sqrt() * z1
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
        "Euler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::ParameterSet;
    use pricer_models::models::ProcessKind;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn scheme(kind: ProcessKind) -> Euler {
        let params = ParameterSet::builder()
            .maturity(1.0)
            .rate(0.05)
            .volatility(0.2)
            .beta(0.8)
            .build()
            .unwrap();
        Euler::new(ProcessModel::new(kind, Arc::new(params)), 12).unwrap()
    }

    #[test]
    fn test_zero_steps_rejected() {
        let process = ProcessModel::new(ProcessKind::Gbm, Arc::new(ParameterSet::default()));
        assert!(matches!(
            Euler::new(process, 0),
            Err(ConfigError::InvalidStepCount(0))
        ));
    }

    #[test]
    fn test_zero_variate_is_pure_drift() {
        let euler = scheme(ProcessKind::Gbm);
        let next = euler.advance(100.0, 0.0, 0.01, 0.0, 0.0);
        assert_relative_eq!(next, 100.0 + 0.05 * 100.0 * 0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_second_variate_ignored() {
        let euler = scheme(ProcessKind::Cev);
        let a = euler.advance(90.0, 0.5, 0.1, 0.3, -2.0);
        let b = euler.advance(90.0, 0.5, 0.1, 0.3, 5.0);
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_advance_linear_in_variate(
            xn in 1.0_f64..300.0,
            tn in 0.0_f64..1.0,
            dt in 1e-4_f64..0.5,
            z in -5.0_f64..5.0,
        ) {
            for kind in [ProcessKind::Gbm, ProcessKind::Cev] {
                let euler = scheme(kind);
                let process = euler.process();
                let residual = euler.advance(xn, tn, dt, z, 0.0) - xn - process.drift(xn, tn) * dt;
                let expected = process.diffusion(xn, tn) * dt.sqrt() * z;
                prop_assert!((residual - expected).abs() <= 1e-9 * (1.0 + xn));
            }
        }
    }
}
