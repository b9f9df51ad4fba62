//! # pricer_core: Shared Foundation for the Monte Carlo Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - The immutable option/process parameter snapshot (`types::params`)
//! - The configuration error taxonomy (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use pricer_core::types::ParameterSet;
//!
//! // One snapshot, shared read-only by every component of a run
//! let params = Arc::new(ParameterSet::default());
//! assert_eq!(params.spot(), 100.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `ParameterSet` and `OptionType`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
