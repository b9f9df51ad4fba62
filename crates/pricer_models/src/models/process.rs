//! StochasticProcess trait: the coefficient view of a one-factor SDE.
//!
//! A process is described by
//! ```text
//! dS = a(S, t) dt + b(S, t) dW,    S(0) = S0,   t in [0, T]
//! ```
//! where `a` is the drift and `b` the diffusion. Discretisation schemes only
//! ever see a process through this trait.

/// Coefficients of a one-factor stochastic differential equation.
///
/// Implementors are pure: every method is a function of its arguments and of
/// a read-only parameter snapshot. They are `Send + Sync` so one instance can
/// be read by every simulation worker at once.
pub trait StochasticProcess: Send + Sync {
    /// Time horizon T of the process (option expiry).
    fn expiry(&self) -> f64;

    /// Initial level S0.
    fn initial_condition(&self) -> f64;

    /// Drift coefficient a(S, t).
    fn drift(&self, level: f64, time: f64) -> f64;

    /// Diffusion coefficient b(S, t).
    fn diffusion(&self, level: f64, time: f64) -> f64;

    /// Derivative of the diffusion with respect to the level, ∂b/∂S.
    fn diffusion_derivative(&self, level: f64) -> f64;

    /// Drift adjusted by a market price of risk `lambda`:
    /// `a(S, t) - lambda * b(S, t) * ∂b/∂S`.
    #[inline]
    fn drift_corrected(&self, level: f64, time: f64, lambda: f64) -> f64 {
        self.drift(level, time)
            - lambda * self.diffusion(level, time) * self.diffusion_derivative(level)
    }

    /// Short name used in logs.
    fn model_name(&self) -> &'static str;
}
