//! The discretisation contract.

use pricer_models::models::ProcessModel;

use super::mesh::TimeMesh;

/// A one-step scheme for `dS = a dt + b dW` over a fixed [`TimeMesh`].
///
/// `advance` is stateless: the scheme's only fields are the process and the
/// mesh, both fixed at construction, so one instance serves every worker.
pub trait Discretisation: Send + Sync {
    /// Level at `tn + dt` given level `xn` at `tn` and two standard normal
    /// draws. The second draw is reserved for two-variate schemes.
    fn advance(&self, xn: f64, tn: f64, dt: f64, z1: f64, z2: f64) -> f64;

    /// The time mesh built at construction.
    fn mesh(&self) -> &TimeMesh;

    /// The process being discretised.
    fn process(&self) -> &ProcessModel;

    /// Short name used in logs.
    fn scheme_name(&self) -> &'static str;
}
