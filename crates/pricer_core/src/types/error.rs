//! Error types for structured error handling.
//!
//! This module provides:
//! - `ConfigError`: Errors raised while assembling a simulation run, before
//!   any path is generated

use thiserror::Error;

/// Configuration errors for the Monte Carlo pricer.
///
/// Every variant is raised synchronously at construction time. A run that
/// starts has, by construction, a valid configuration.
///
/// # Variants
/// - `InvalidPathCount`: Path count below one
/// - `InvalidStepCount`: Time step count below one
/// - `MissingComponent`: A builder was finished without a required component
/// - `UnknownVariant`: A variant name (process, scheme, ...) was not recognised
/// - `InvalidParameter`: A scalar parameter is outside its admissible range
///
/// # Examples
/// ```
/// use pricer_core::types::ConfigError;
///
/// let err = ConfigError::InvalidStepCount(0);
/// assert_eq!(format!("{}", err), "Invalid step count 0: must be at least 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Path count below one.
    #[error("Invalid path count {0}: must be at least 1")]
    InvalidPathCount(usize),

    /// Step count below one.
    #[error("Invalid step count {0}: must be at least 1")]
    InvalidStepCount(usize),

    /// A required component was never supplied to a builder.
    #[error("Missing component: {0}")]
    MissingComponent(&'static str),

    /// Variant name not recognised.
    #[error("Unknown {kind} '{name}' (expected one of: {expected})")]
    UnknownVariant {
        /// Which family of variants was being parsed.
        kind: &'static str,
        /// The rejected name.
        name: String,
        /// Comma separated list of accepted names.
        expected: &'static str,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },
}

impl ConfigError {
    /// Shorthand for [`ConfigError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
