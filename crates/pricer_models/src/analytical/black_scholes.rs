//! Black-Scholes prices for European options with a continuous dividend
//! yield.
//!
//! ## Formulas
//!
//! **Call**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use num_traits::Float;
use pricer_core::types::{ConfigError, OptionType, ParameterSet};

use super::distributions::{lit, norm_cdf};

/// Below this expiry the price collapses to intrinsic value.
const EXPIRY_EPSILON: f64 = 1e-10;

/// Black-Scholes model for European option pricing.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K·exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes<T: Float> {
    spot: T,
    rate: T,
    dividend: T,
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// `ConfigError::InvalidParameter` if `spot` or `volatility` is not
    /// strictly positive.
    pub fn new(spot: T, rate: T, dividend: T, volatility: T) -> Result<Self, ConfigError> {
        if !(spot > T::zero()) {
            return Err(ConfigError::invalid("spot", "must be positive"));
        }
        if !(volatility > T::zero()) {
            return Err(ConfigError::invalid(
                "volatility",
                "must be positive for a closed-form price",
            ));
        }
        Ok(Self {
            spot,
            rate,
            dividend,
            volatility,
        })
    }

    /// Spot price S.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Risk-free rate r.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Dividend yield q.
    #[inline]
    pub fn dividend(&self) -> T {
        self.dividend
    }

    /// Volatility σ.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = lit::<T>(0.5);
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let carry =
            (self.rate - self.dividend + half * self.volatility * self.volatility) * expiry;
        ((self.spot / strike).ln() + carry) / vol_sqrt_t
    }

    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// European call price.
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        if expiry <= lit::<T>(EXPIRY_EPSILON) {
            return (self.spot - strike).max(T::zero());
        }
        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let df_r = (-self.rate * expiry).exp();
        let df_q = (-self.dividend * expiry).exp();
        self.spot * df_q * norm_cdf(d1) - strike * df_r * norm_cdf(d2)
    }

    /// European put price.
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        if expiry <= lit::<T>(EXPIRY_EPSILON) {
            return (strike - self.spot).max(T::zero());
        }
        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let df_r = (-self.rate * expiry).exp();
        let df_q = (-self.dividend * expiry).exp();
        strike * df_r * norm_cdf(-d2) - self.spot * df_q * norm_cdf(-d1)
    }

    /// Price of the given option kind.
    #[inline]
    pub fn price(&self, option_type: OptionType, strike: T, expiry: T) -> T {
        match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        }
    }
}

impl BlackScholes<f64> {
    /// Builds the model from a parameter snapshot (S0, r, q, σ).
    ///
    /// # Errors
    /// See [`BlackScholes::new`].
    pub fn from_params(params: &ParameterSet) -> Result<Self, ConfigError> {
        Self::new(
            params.spot(),
            params.rate(),
            params.dividend(),
            params.volatility(),
        )
    }
}
