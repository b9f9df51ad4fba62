//! Static dispatch enum for stochastic processes.
//!
//! `ProcessModel` wraps every concrete process so the simulation engine can
//! hold one by value and dispatch through `match` rather than a vtable.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use pricer_core::types::ParameterSet;
//! use pricer_models::models::{ProcessKind, ProcessModel, StochasticProcess};
//!
//! let params = Arc::new(ParameterSet::default());
//! let kind: ProcessKind = "cev".parse().unwrap();
//! let model = ProcessModel::new(kind, params);
//!
//! assert_eq!(model.model_name(), "CEV");
//! assert_eq!(model.initial_condition(), 100.0);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use pricer_core::types::{ConfigError, ParameterSet};

use super::cev::ConstantElasticity;
use super::lognormal::Lognormal;
use super::process::StochasticProcess;

/// Process selector, parsed from configuration or the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProcessKind {
    /// Geometric Brownian motion.
    #[default]
    Gbm,
    /// Constant elasticity of variance.
    Cev,
}

impl FromStr for ProcessKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gbm" | "lognormal" => Ok(ProcessKind::Gbm),
            "cev" => Ok(ProcessKind::Cev),
            _ => Err(ConfigError::UnknownVariant {
                kind: "process",
                name: s.to_string(),
                expected: "gbm, cev",
            }),
        }
    }
}

impl fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessKind::Gbm => write!(f, "gbm"),
            ProcessKind::Cev => write!(f, "cev"),
        }
    }
}

/// Enum of all supported processes.
#[derive(Clone, Debug)]
pub enum ProcessModel {
    /// Geometric Brownian motion.
    Lognormal(Lognormal),
    /// Constant elasticity of variance.
    ConstantElasticity(ConstantElasticity),
}

impl ProcessModel {
    /// Builds the process selected by `kind` over `params`.
    pub fn new(kind: ProcessKind, params: Arc<ParameterSet>) -> Self {
        match kind {
            ProcessKind::Gbm => ProcessModel::Lognormal(Lognormal::new(params)),
            ProcessKind::Cev => ProcessModel::ConstantElasticity(ConstantElasticity::new(params)),
        }
    }

    /// The selector this model was built from.
    pub fn kind(&self) -> ProcessKind {
        match self {
            ProcessModel::Lognormal(_) => ProcessKind::Gbm,
            ProcessModel::ConstantElasticity(_) => ProcessKind::Cev,
        }
    }

    /// The shared parameter snapshot.
    pub fn params(&self) -> &ParameterSet {
        match self {
            ProcessModel::Lognormal(m) => m.params(),
            ProcessModel::ConstantElasticity(m) => m.params(),
        }
    }
}

impl From<Lognormal> for ProcessModel {
    fn from(model: Lognormal) -> Self {
        ProcessModel::Lognormal(model)
    }
}

impl From<ConstantElasticity> for ProcessModel {
    fn from(model: ConstantElasticity) -> Self {
        ProcessModel::ConstantElasticity(model)
    }
}

impl StochasticProcess for ProcessModel {
    #[inline]
    fn expiry(&self) -> f64 {
        match self {
            ProcessModel::Lognormal(m) => m.expiry(),
            ProcessModel::ConstantElasticity(m) => m.expiry(),
        }
    }

    #[inline]
    fn initial_condition(&self) -> f64 {
        match self {
            ProcessModel::Lognormal(m) => m.initial_condition(),
            ProcessModel::ConstantElasticity(m) => m.initial_condition(),
        }
    }

    #[inline]
    fn drift(&self, level: f64, time: f64) -> f64 {
        match self {
            ProcessModel::Lognormal(m) => m.drift(level, time),
            ProcessModel::ConstantElasticity(m) => m.drift(level, time),
        }
    }

    #[inline]
    fn diffusion(&self, level: f64, time: f64) -> f64 {
        match self {
            ProcessModel::Lognormal(m) => m.diffusion(level, time),
            ProcessModel::ConstantElasticity(m) => m.diffusion(level, time),
        }
    }

    #[inline]
    fn diffusion_derivative(&self, level: f64) -> f64 {
        match self {
            ProcessModel::Lognormal(m) => m.diffusion_derivative(level),
            ProcessModel::ConstantElasticity(m) => m.diffusion_derivative(level),
        }
    }

    fn model_name(&self) -> &'static str {
        match self {
            ProcessModel::Lognormal(m) => m.model_name(),
            ProcessModel::ConstantElasticity(m) => m.model_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params() -> Arc<ParameterSet> {
        Arc::new(
            ParameterSet::builder()
                .spot(80.0)
                .maturity(1.5)
                .volatility(0.2)
                .beta(0.7)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("gbm".parse::<ProcessKind>().unwrap(), ProcessKind::Gbm);
        assert_eq!("GBM".parse::<ProcessKind>().unwrap(), ProcessKind::Gbm);
        assert_eq!("cev".parse::<ProcessKind>().unwrap(), ProcessKind::Cev);
        assert!(matches!(
            "heston".parse::<ProcessKind>(),
            Err(ConfigError::UnknownVariant { kind: "process", .. })
        ));
    }

    #[test]
    fn test_kind_display_parses_back() {
        for kind in [ProcessKind::Gbm, ProcessKind::Cev] {
            assert_eq!(kind.to_string().parse::<ProcessKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_dispatch_matches_concrete_model() {
        let params = params();
        let model = ProcessModel::new(ProcessKind::Cev, params.clone());
        let cev = ConstantElasticity::new(params);

        assert_eq!(model.kind(), ProcessKind::Cev);
        assert_eq!(model.model_name(), "CEV");
        assert_eq!(model.expiry(), 1.5);
        assert_eq!(model.initial_condition(), 80.0);
        assert_relative_eq!(model.diffusion(50.0, 0.0), cev.diffusion(50.0, 0.0));
        assert_relative_eq!(model.diffusion_derivative(50.0), cev.diffusion_derivative(50.0));
    }

    #[test]
    fn test_from_concrete() {
        let model: ProcessModel = Lognormal::new(params()).into();
        assert_eq!(model.kind(), ProcessKind::Gbm);
        assert_eq!(model.params().spot(), 80.0);
    }
}
