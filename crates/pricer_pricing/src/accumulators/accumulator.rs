//! Static dispatch over accumulator variants.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use pricer_core::types::{ConfigError, ParameterSet};

use super::asian::AsianAccumulator;
use super::barrier::{BarrierAccumulator, BarrierType};
use super::european::EuropeanAccumulator;
use super::report::PricingReport;
use super::reporter::PriceReporter;
use super::traits::PathAccumulator;

/// Payoff selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PayoffKind {
    /// Terminal payoff.
    #[default]
    European,
    /// Path-average payoff.
    Asian,
    /// Barrier-conditioned terminal payoff.
    Barrier,
}

impl FromStr for PayoffKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "european" => Ok(PayoffKind::European),
            "asian" => Ok(PayoffKind::Asian),
            "barrier" => Ok(PayoffKind::Barrier),
            _ => Err(ConfigError::UnknownVariant {
                kind: "payoff",
                name: s.to_string(),
                expected: "european, asian, barrier",
            }),
        }
    }
}

impl fmt::Display for PayoffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoffKind::European => write!(f, "european"),
            PayoffKind::Asian => write!(f, "asian"),
            PayoffKind::Barrier => write!(f, "barrier"),
        }
    }
}

/// Enum of all accumulator variants.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use pricer_core::types::ParameterSet;
/// use pricer_pricing::accumulators::{Accumulator, BarrierType, NoopReporter, PayoffKind};
///
/// let params = Arc::new(ParameterSet::builder().barrier(130.0).build().unwrap());
/// let acc = Accumulator::new(
///     PayoffKind::Barrier,
///     Some(BarrierType::UpOut),
///     params,
///     Arc::new(NoopReporter),
/// )
/// .unwrap();
/// assert_eq!(acc.kind(), PayoffKind::Barrier);
/// ```
pub enum Accumulator {
    /// Terminal payoff.
    European(EuropeanAccumulator),
    /// Path-average payoff.
    Asian(AsianAccumulator),
    /// Barrier-conditioned terminal payoff.
    Barrier(BarrierAccumulator),
}

impl Accumulator {
    /// Builds the accumulator selected by `kind`.
    ///
    /// # Errors
    ///
    /// `ConfigError::MissingComponent` if `kind` is `Barrier` and no barrier
    /// type was given.
    pub fn new(
        kind: PayoffKind,
        barrier_type: Option<BarrierType>,
        params: Arc<ParameterSet>,
        reporter: Arc<dyn PriceReporter>,
    ) -> Result<Self, ConfigError> {
        Ok(match kind {
            PayoffKind::European => {
                Accumulator::European(EuropeanAccumulator::new(params, reporter))
            }
            PayoffKind::Asian => Accumulator::Asian(AsianAccumulator::new(params, reporter)),
            PayoffKind::Barrier => {
                let barrier_type =
                    barrier_type.ok_or(ConfigError::MissingComponent("barrier type"))?;
                Accumulator::Barrier(BarrierAccumulator::new(params, barrier_type, reporter))
            }
        })
    }

    /// The selector this accumulator was built from.
    pub fn kind(&self) -> PayoffKind {
        match self {
            Accumulator::European(_) => PayoffKind::European,
            Accumulator::Asian(_) => PayoffKind::Asian,
            Accumulator::Barrier(_) => PayoffKind::Barrier,
        }
    }
}

impl PathAccumulator for Accumulator {
    type Output = PricingReport;

    #[inline]
    fn process_path(&self, path: &[f64]) {
        match self {
            Accumulator::European(a) => a.process_path(path),
            Accumulator::Asian(a) => a.process_path(path),
            Accumulator::Barrier(a) => a.process_path(path),
        }
    }

    fn post_process(self, elapsed: Duration) -> PricingReport {
        match self {
            Accumulator::European(a) => a.post_process(elapsed).into(),
            Accumulator::Asian(a) => a.post_process(elapsed).into(),
            Accumulator::Barrier(a) => a.post_process(elapsed).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulators::{NoopReporter, RecordingReporter};

    fn params() -> Arc<ParameterSet> {
        Arc::new(ParameterSet::builder().barrier(120.0).build().unwrap())
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("European".parse::<PayoffKind>().unwrap(), PayoffKind::European);
        assert_eq!("asian".parse::<PayoffKind>().unwrap(), PayoffKind::Asian);
        assert_eq!("barrier".parse::<PayoffKind>().unwrap(), PayoffKind::Barrier);
        assert!("lookback".parse::<PayoffKind>().is_err());
    }

    #[test]
    fn test_barrier_requires_type() {
        let result = Accumulator::new(PayoffKind::Barrier, None, params(), Arc::new(NoopReporter));
        assert!(matches!(
            result,
            Err(ConfigError::MissingComponent("barrier type"))
        ));
    }

    #[test]
    fn test_barrier_type_ignored_for_other_payoffs() {
        let acc = Accumulator::new(
            PayoffKind::Asian,
            Some(BarrierType::DownIn),
            params(),
            Arc::new(NoopReporter),
        )
        .unwrap();
        assert_eq!(acc.kind(), PayoffKind::Asian);
    }

    #[test]
    fn test_post_process_wraps_variant_report() {
        let recorder = Arc::new(RecordingReporter::default());
        for kind in [PayoffKind::European, PayoffKind::Asian, PayoffKind::Barrier] {
            let barrier_type = Some(BarrierType::UpIn);
            let acc = Accumulator::new(kind, barrier_type, params(), recorder.clone()).unwrap();
            acc.process_path(&[100.0, 125.0, 130.0]);
            let report = acc.post_process(Duration::ZERO);
            assert_eq!(report.paths(), 1);
            assert_eq!(recorder.last(), Some(report));
        }
        let labels: Vec<&str> = recorder.reports().iter().map(PricingReport::label).collect();
        assert_eq!(labels, ["EUROPEAN OPTION", "ASIAN OPTION", "BARRIER OPTION"]);
    }
}
