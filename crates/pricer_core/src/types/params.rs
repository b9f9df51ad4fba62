//! Option and process parameters.
//!
//! [`ParameterSet`] is the immutable bag of scalars every other component
//! reads: the stochastic processes, the discretisation schemes and the payoff
//! accumulators. It is built once through [`ParameterSetBuilder`], wrapped in
//! an `Arc`, and never mutated for the lifetime of a run.

use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;

/// Call or put.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Pays max(S - K, 0).
    #[default]
    Call,
    /// Pays max(K - S, 0).
    Put,
}

impl OptionType {
    /// Intrinsic value of this option kind at `level` for the given strike.
    #[inline]
    pub fn payoff(self, level: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (level - strike).max(0.0),
            OptionType::Put => (strike - level).max(0.0),
        }
    }
}

impl FromStr for OptionType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(ConfigError::UnknownVariant {
                kind: "option type",
                name: s.to_string(),
                expected: "call, put",
            }),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Immutable option/process parameter snapshot.
///
/// | Field | Symbol | Meaning |
/// |-------|--------|---------|
/// | `strike` | K | Strike price |
/// | `maturity` | T | Time to maturity in years |
/// | `rate` | r | Risk-free rate (annualised) |
/// | `volatility` | σ | Volatility (annualised) |
/// | `dividend` | q | Continuous dividend yield |
/// | `spot` | S0 | Initial level of the underlying |
/// | `barrier` | H | Barrier level |
/// | `beta` | β | CEV elasticity exponent |
/// | `scale` | | CEV scale factor (carried, not used by the dynamics) |
/// | `option_type` | | Call or put |
///
/// The default snapshot is the reference run: S0 = K = 100, T = 30,
/// σ = 0.3, r = 0.08, q = 0, β = 1.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionType, ParameterSet};
///
/// let params = ParameterSet::builder()
///     .spot(100.0)
///     .strike(95.0)
///     .maturity(1.0)
///     .rate(0.05)
///     .volatility(0.2)
///     .option_type(OptionType::Put)
///     .build()
///     .unwrap();
///
/// assert_eq!(params.strike(), 95.0);
/// assert!((params.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
/// assert_eq!(params.payoff(90.0), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParameterSet {
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    dividend: f64,
    spot: f64,
    barrier: f64,
    beta: f64,
    scale: f64,
    option_type: OptionType,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            strike: 100.0,
            maturity: 30.0,
            rate: 0.08,
            volatility: 0.3,
            dividend: 0.0,
            spot: 100.0,
            barrier: 0.0,
            beta: 1.0,
            scale: 0.0,
            option_type: OptionType::Call,
        }
    }
}

impl ParameterSet {
    /// Creates a builder seeded with the default snapshot.
    #[inline]
    pub fn builder() -> ParameterSetBuilder {
        ParameterSetBuilder::default()
    }

    /// Re-opens this snapshot as a builder, for overriding selected fields.
    #[inline]
    pub fn into_builder(self) -> ParameterSetBuilder {
        ParameterSetBuilder { params: self }
    }

    /// Strike price K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to maturity T in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Risk-free rate r.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Volatility σ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Dividend yield q.
    #[inline]
    pub fn dividend(&self) -> f64 {
        self.dividend
    }

    /// Initial level S0.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Barrier level H.
    #[inline]
    pub fn barrier(&self) -> f64 {
        self.barrier
    }

    /// CEV elasticity exponent β.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// CEV scale factor.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Option kind.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Discount factor to time zero, `exp(-r T)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Payoff of the configured option kind at `level`.
    #[inline]
    pub fn payoff(&self, level: f64) -> f64 {
        self.option_type.payoff(level, self.strike)
    }

    /// Call payoff `max(level - K, 0)`.
    #[inline]
    pub fn call_payoff(&self, level: f64) -> f64 {
        OptionType::Call.payoff(level, self.strike)
    }

    /// Put payoff `max(K - level, 0)`.
    #[inline]
    pub fn put_payoff(&self, level: f64) -> f64 {
        OptionType::Put.payoff(level, self.strike)
    }

    /// Validates the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` if:
    /// - any field is non-finite
    /// - `spot`, `strike` or `maturity` is not strictly positive
    /// - `volatility` is negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("strike", self.strike),
            ("maturity", self.maturity),
            ("rate", self.rate),
            ("volatility", self.volatility),
            ("dividend", self.dividend),
            ("spot", self.spot),
            ("barrier", self.barrier),
            ("beta", self.beta),
            ("scale", self.scale),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::invalid(name, format!("{} is not finite", value)));
            }
        }
        if self.spot <= 0.0 {
            return Err(ConfigError::invalid("spot", "must be positive"));
        }
        if self.strike <= 0.0 {
            return Err(ConfigError::invalid("strike", "must be positive"));
        }
        if self.maturity <= 0.0 {
            return Err(ConfigError::invalid("maturity", "must be positive"));
        }
        if self.volatility < 0.0 {
            return Err(ConfigError::invalid("volatility", "must be non-negative"));
        }
        Ok(())
    }
}

/// Builder for [`ParameterSet`].
///
/// Unset fields keep their [`Default`] values. Validation happens once, in
/// [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct ParameterSetBuilder {
    params: ParameterSet,
}

impl ParameterSetBuilder {
    /// Sets the strike price K.
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.params.strike = strike;
        self
    }

    /// Sets the time to maturity T in years.
    #[inline]
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.params.maturity = maturity;
        self
    }

    /// Sets the risk-free rate r.
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.params.rate = rate;
        self
    }

    /// Sets the volatility σ.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.params.volatility = volatility;
        self
    }

    /// Sets the dividend yield q.
    #[inline]
    pub fn dividend(mut self, dividend: f64) -> Self {
        self.params.dividend = dividend;
        self
    }

    /// Sets the initial level S0.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.params.spot = spot;
        self
    }

    /// Sets the barrier level H.
    #[inline]
    pub fn barrier(mut self, barrier: f64) -> Self {
        self.params.barrier = barrier;
        self
    }

    /// Sets the CEV elasticity exponent β.
    #[inline]
    pub fn beta(mut self, beta: f64) -> Self {
        self.params.beta = beta;
        self
    }

    /// Sets the CEV scale factor.
    #[inline]
    pub fn scale(mut self, scale: f64) -> Self {
        self.params.scale = scale;
        self
    }

    /// Sets the option kind.
    #[inline]
    pub fn option_type(mut self, option_type: OptionType) -> Self {
        self.params.option_type = option_type;
        self
    }

    /// Builds and validates the parameter set.
    ///
    /// # Errors
    ///
    /// See [`ParameterSet::validate`].
    pub fn build(self) -> Result<ParameterSet, ConfigError> {
        self.params.validate()?;
        Ok(self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_matches_reference_run() {
        let params = ParameterSet::default();
        assert_eq!(params.spot(), 100.0);
        assert_eq!(params.strike(), 100.0);
        assert_eq!(params.maturity(), 30.0);
        assert_eq!(params.volatility(), 0.3);
        assert_eq!(params.rate(), 0.08);
        assert_eq!(params.dividend(), 0.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let params = ParameterSet::builder()
            .strike(110.0)
            .barrier(130.0)
            .beta(0.5)
            .build()
            .unwrap();

        assert_eq!(params.strike(), 110.0);
        assert_eq!(params.barrier(), 130.0);
        assert_eq!(params.beta(), 0.5);
        // Untouched fields keep their defaults
        assert_eq!(params.spot(), 100.0);
    }

    #[test]
    fn test_into_builder_round_trip() {
        let base = ParameterSet::builder().rate(0.01).build().unwrap();
        let bumped = base.into_builder().volatility(0.25).build().unwrap();

        assert_eq!(bumped.rate(), 0.01);
        assert_eq!(bumped.volatility(), 0.25);
    }

    #[test]
    fn test_discount_factor() {
        let params = ParameterSet::builder()
            .rate(0.05)
            .maturity(2.0)
            .build()
            .unwrap();
        assert_relative_eq!(params.discount_factor(), (-0.1_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_payoffs() {
        let params = ParameterSet::builder().strike(100.0).build().unwrap();
        assert_eq!(params.call_payoff(120.0), 20.0);
        assert_eq!(params.call_payoff(80.0), 0.0);
        assert_eq!(params.put_payoff(80.0), 20.0);
        assert_eq!(params.put_payoff(120.0), 0.0);
        assert_eq!(params.payoff(120.0), 20.0);

        let put = params.into_builder().option_type(OptionType::Put).build().unwrap();
        assert_eq!(put.payoff(80.0), 20.0);
    }

    #[test]
    fn test_invalid_spot_rejected() {
        let result = ParameterSet::builder().spot(0.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "spot", .. })
        ));
    }

    #[test]
    fn test_negative_volatility_rejected() {
        let result = ParameterSet::builder().volatility(-0.1).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "volatility",
                ..
            })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = ParameterSet::builder().rate(f64::NAN).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "rate", .. })
        ));
    }

    #[test]
    fn test_option_type_from_str() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("PUT".parse::<OptionType>().unwrap(), OptionType::Put);
        assert!(matches!(
            "straddle".parse::<OptionType>(),
            Err(ConfigError::UnknownVariant { .. })
        ));
    }
}
