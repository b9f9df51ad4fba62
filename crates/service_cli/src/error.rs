//! CLI error type.

use std::path::PathBuf;

use pricer_core::types::ConfigError;
use pricer_pricing::mc::SimulationError;
use thiserror::Error;

/// Errors surfaced at the command-line boundary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid parameters or component selection.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The simulation was aborted.
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// The run file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The run file is not valid TOML or has unknown keys.
    #[error("Invalid run file {}: {source}", path.display())]
    Toml {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
