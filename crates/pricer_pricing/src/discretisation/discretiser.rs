//! Static dispatch over discretisation schemes.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::ConfigError;
use pricer_models::models::ProcessModel;

use super::closed_form::ClosedForm;
use super::euler::Euler;
use super::mesh::TimeMesh;
use super::scheme::Discretisation;

/// Scheme selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SchemeKind {
    /// Euler-Maruyama.
    #[default]
    Euler,
    /// Exact lognormal marginal sampler.
    ClosedForm,
}

impl FromStr for SchemeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euler" => Ok(SchemeKind::Euler),
            "closed-form" | "closedform" | "exact" => Ok(SchemeKind::ClosedForm),
            _ => Err(ConfigError::UnknownVariant {
                kind: "scheme",
                name: s.to_string(),
                expected: "euler, closed-form",
            }),
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemeKind::Euler => write!(f, "euler"),
            SchemeKind::ClosedForm => write!(f, "closed-form"),
        }
    }
}

/// Enum of all supported schemes.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use pricer_core::types::ParameterSet;
/// use pricer_models::models::{ProcessKind, ProcessModel};
/// use pricer_pricing::discretisation::{Discretisation, Discretiser, SchemeKind};
///
/// let process = ProcessModel::new(ProcessKind::Gbm, Arc::new(ParameterSet::default()));
/// let scheme = Discretiser::new(SchemeKind::Euler, process, 30).unwrap();
///
/// assert_eq!(scheme.mesh().len(), 31);
/// ```
#[derive(Clone, Debug)]
pub enum Discretiser {
    /// Euler-Maruyama.
    Euler(Euler),
    /// Exact lognormal marginal sampler.
    ClosedForm(ClosedForm),
}

impl Discretiser {
    /// Builds the scheme selected by `kind`.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidStepCount` if `n_steps` is 0.
    pub fn new(
        kind: SchemeKind,
        process: ProcessModel,
        n_steps: usize,
    ) -> Result<Self, ConfigError> {
        Ok(match kind {
            SchemeKind::Euler => Discretiser::Euler(Euler::new(process, n_steps)?),
            SchemeKind::ClosedForm => Discretiser::ClosedForm(ClosedForm::new(process, n_steps)?),
        })
    }

    /// The selector this scheme was built from.
    pub fn kind(&self) -> SchemeKind {
        match self {
            Discretiser::Euler(_) => SchemeKind::Euler,
            Discretiser::ClosedForm(_) => SchemeKind::ClosedForm,
        }
    }
}

impl Discretisation for Discretiser {
    #[inline]
    fn advance(&self, xn: f64, tn: f64, dt: f64, z1: f64, z2: f64) -> f64 {
        match self {
            Discretiser::Euler(s) => s.advance(xn, tn, dt, z1, z2),
            Discretiser::ClosedForm(s) => s.advance(xn, tn, dt, z1, z2),
        }
    }

    #[inline]
    fn mesh(&self) -> &TimeMesh {
        match self {
            Discretiser::Euler(s) => s.mesh(),
            Discretiser::ClosedForm(s) => s.mesh(),
        }
    }

    #[inline]
    fn process(&self) -> &ProcessModel {
        match self {
            Discretiser::Euler(s) => s.process(),
            Discretiser::ClosedForm(s) => s.process(),
        }
    }

    fn scheme_name(&self) -> &'static str {
        match self {
            Discretiser::Euler(s) => s.scheme_name(),
            Discretiser::ClosedForm(s) => s.scheme_name(),
        }
    }
}
