//! Property tests for the parameter snapshot.

use approx::assert_relative_eq;
use pricer_core::types::{ConfigError, OptionType, ParameterSet};
use proptest::prelude::*;

fn valid_params() -> impl Strategy<Value = ParameterSet> {
    (
        1.0..500.0f64,
        1.0..500.0f64,
        0.01..30.0f64,
        -0.05..0.2f64,
        0.0..1.5f64,
        0.0..0.1f64,
    )
        .prop_map(|(spot, strike, maturity, rate, volatility, dividend)| {
            ParameterSet::builder()
                .spot(spot)
                .strike(strike)
                .maturity(maturity)
                .rate(rate)
                .volatility(volatility)
                .dividend(dividend)
                .build()
                .unwrap()
        })
}

proptest! {
    #[test]
    fn call_minus_put_is_forward_payoff(params in valid_params(), level in 0.0..1000.0f64) {
        let diff = params.call_payoff(level) - params.put_payoff(level);
        prop_assert!((diff - (level - params.strike())).abs() < 1e-9);
    }

    #[test]
    fn payoffs_are_non_negative(params in valid_params(), level in 0.0..1000.0f64) {
        prop_assert!(params.call_payoff(level) >= 0.0);
        prop_assert!(params.put_payoff(level) >= 0.0);
    }

    #[test]
    fn discount_factor_in_unit_interval_for_positive_rates(params in valid_params()) {
        let df = params.discount_factor();
        if params.rate() >= 0.0 {
            prop_assert!(df > 0.0 && df <= 1.0);
        } else {
            prop_assert!(df > 1.0);
        }
    }

    #[test]
    fn rebuilding_is_identity(params in valid_params()) {
        let rebuilt = params.into_builder().build().unwrap();
        prop_assert_eq!(rebuilt, params);
    }
}

#[test]
fn payoff_follows_option_type() {
    let put = ParameterSet::builder()
        .strike(100.0)
        .option_type(OptionType::Put)
        .build()
        .unwrap();
    assert_relative_eq!(put.payoff(80.0), 20.0);
    assert_eq!(put.payoff(120.0), 0.0);
}

#[test]
fn non_positive_maturity_rejected() {
    let err = ParameterSet::builder().maturity(0.0).build().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidParameter { name: "maturity", .. }));
}
