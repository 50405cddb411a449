//! Clean operation - remove previously generated files.

use eyre::Result;
use primelib_codegen::Orchestrator;
use primelib_config::PrimelibYaml;
use primelib_core::Verbosity;

use super::{display_path, planned_tasks};
use crate::reports::{CleanReport, CleanedDir};

/// Options for the clean operation.
pub struct CleanOptions<'a> {
    /// Task names or output names to clean, all when empty.
    pub only: &'a [String],
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
///
/// Deletes the files each output directory's manifest lists.
pub fn clean(primelib_yaml: &PrimelibYaml, opts: CleanOptions) -> Result<CleanReport> {
    let config = primelib_yaml.config();
    let project_dir = primelib_yaml.project_dir();
    let tasks = planned_tasks(config, project_dir, Verbosity::default(), opts.only)?;

    let orchestrator = Orchestrator::for_config(config, project_dir);
    let results = orchestrator.clean(&tasks, opts.dry_run)?;

    let dirs = tasks
        .iter()
        .zip(results)
        .map(|(task, (name, result))| {
            let output_dir = orchestrator.output_dir(task);
            CleanedDir {
                name,
                output_dir: display_path(&output_dir, project_dir),
                has_manifest: result.has_manifest(),
                deleted: result
                    .deleted
                    .iter()
                    .map(|p| display_path(p, &output_dir))
                    .collect(),
                skipped: result.skipped,
            }
        })
        .collect();

    Ok(CleanReport {
        dry_run: opts.dry_run,
        dirs,
    })
}
