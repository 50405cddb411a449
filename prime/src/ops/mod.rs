//! Core operations.
//!
//! This module contains the business logic for primelib commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod clean;
pub mod generate;

use std::path::Path;

use eyre::{Context, Result};
use primelib_codegen::{GeneratorTask, PlanContext, executable_from_env, orchestrator};
use primelib_config::Configuration;
use primelib_core::Verbosity;

pub use check::check;
pub use clean::clean;
pub use generate::generate;

/// Plan the tasks of a configuration, keeping only the selected ones.
fn planned_tasks(
    config: &Configuration,
    project_dir: &Path,
    verbosity: Verbosity,
    only: &[String],
) -> Result<Vec<GeneratorTask>> {
    let ctx = PlanContext::for_config(config, project_dir)
        .verbosity(verbosity)
        .executable(executable_from_env());
    let tasks = orchestrator::plan(config, &ctx).wrap_err("Failed to plan generators")?;
    let tasks = orchestrator::select(tasks, only)?;
    tracing::debug!(selected = tasks.len(), spec = %ctx.spec_path.display(), "resolved generators");
    Ok(tasks)
}

/// Path relative to `base` when possible, for display.
fn display_path(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}
