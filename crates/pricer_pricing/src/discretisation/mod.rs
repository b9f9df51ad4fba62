//! Time discretisation of one-factor processes.
//!
//! - [`TimeMesh`]: uniform grid of `NT + 1` points over [0, T]
//! - [`Discretisation`]: the `advance` / `mesh` contract
//! - [`Euler`]: Euler-Maruyama step
//! - [`ClosedForm`]: exact lognormal marginal sampler
//! - [`Discretiser`]: static dispatch, selected by [`SchemeKind`]

pub mod closed_form;
pub mod discretiser;
pub mod euler;
pub mod mesh;
pub mod scheme;

pub use closed_form::ClosedForm;
pub use discretiser::{Discretiser, SchemeKind};
pub use euler::Euler;
pub use mesh::TimeMesh;
pub use scheme::Discretisation;
