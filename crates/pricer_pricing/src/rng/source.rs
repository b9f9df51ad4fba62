//! The variate-source contract.

/// A source of standard normal draws.
///
/// Implementors own private generator state and are driven through
/// `&mut self`, so one instance is never shared between workers. They are
/// `Send` so a worker thread can own one.
pub trait VariateSource: Send {
    /// Draws one standard normal variate.
    fn generate(&mut self) -> f64;
}
