//! Closed-form prices used as references for the simulation engine.
//!
//! - [`BlackScholes`]: European call/put under lognormal dynamics with a
//!   continuous dividend yield
//! - [`norm_cdf`], [`norm_pdf`]: standard normal distribution functions

pub mod black_scholes;
pub mod distributions;

pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};
