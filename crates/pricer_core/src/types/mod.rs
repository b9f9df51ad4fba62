//! Core parameter and error types.
//!
//! This module provides:
//! - `params`: The immutable [`ParameterSet`] shared by every pricing component
//! - `error`: [`ConfigError`], raised while a run is being assembled
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`ParameterSet`], [`ParameterSetBuilder`], [`OptionType`] from `params`
//! - [`ConfigError`] from `error`

pub mod error;
pub mod params;

// Re-export commonly used types at module level
pub use error::ConfigError;
pub use params::{OptionType, ParameterSet, ParameterSetBuilder};
