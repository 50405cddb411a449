//! Planning and execution of generator tasks.
//!
//! [`plan`] resolves a configuration into tasks (enabled presets first, then
//! enabled custom generators). An [`Orchestrator`] runs them one after the
//! other and collects a [`RunReport`].

mod plan;
mod report;
mod runner;

pub use plan::{PlanContext, custom_task, plan, select};
pub use report::{RunReport, TaskOutcome};
pub use runner::{FailurePolicy, Orchestrator};

use std::path::{Path, PathBuf};

/// `dir` made absolute against the current directory.
///
/// Backends may run from a different working directory, so relative project
/// paths must not reach them.
fn absolute_dir(dir: &Path) -> PathBuf {
    std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf())
}
