//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod price;

use std::path::Path;

use tracing::debug;

use crate::config::{RunArgs, RunFile, RunPlan};
use crate::Result;

/// Loads the optional run file and merges `args` over it.
pub fn resolve_plan(config: Option<&Path>, args: &RunArgs) -> Result<RunPlan> {
    let file = match config {
        Some(path) => {
            debug!(path = %path.display(), "loading run file");
            RunFile::load(path)?
        }
        None => RunFile::default(),
    };
    Ok(RunPlan::resolve(file, args)?)
}
