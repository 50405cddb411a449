//! Generate operation - run every planned generator.

use eyre::{Context, Result};
use primelib_codegen::{FailurePolicy, Orchestrator, reconcile};
use primelib_config::PrimelibYaml;
use primelib_core::Verbosity;

use super::{display_path, planned_tasks};
use crate::reports::{GenerateReport, PreviewEntry, TaskLine};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Task names or output names to run, all when empty.
    pub only: &'a [String],
    pub policy: FailurePolicy,
    /// Whether to preview without running anything.
    pub dry_run: bool,
    pub verbosity: Verbosity,
}

/// Execute the generate operation.
pub fn generate(primelib_yaml: &PrimelibYaml, opts: GenerateOptions) -> Result<GenerateReport> {
    let config = primelib_yaml.config();
    let project_dir = primelib_yaml.project_dir();
    let tasks = planned_tasks(config, project_dir, opts.verbosity, opts.only)?;

    if tasks.is_empty() {
        return Ok(GenerateReport::Nothing);
    }

    let orchestrator = Orchestrator::for_config(config, project_dir).policy(opts.policy);

    if opts.dry_run {
        let mut entries = Vec::new();
        for task in &tasks {
            let options = orchestrator.options(task);
            let invocation = task
                .preview(&options)
                .wrap_err_with(|| format!("Invalid generator '{}'", task.name()))?;
            let stale = reconcile::plan(&options.output_directory)?;
            entries.push(PreviewEntry {
                name: task.name().to_string(),
                output_dir: display_path(&options.output_directory, project_dir),
                command: invocation.to_string(),
                stale_files: stale
                    .deleted
                    .iter()
                    .map(|p| display_path(p, &options.output_directory))
                    .collect(),
            });
        }
        return Ok(GenerateReport::Preview(entries));
    }

    let report = orchestrator.run(&tasks)?;
    let lines = report
        .outcomes
        .iter()
        .map(|outcome| TaskLine {
            name: outcome.name.clone(),
            output_dir: display_path(&outcome.output_dir, project_dir),
            error: outcome.error.as_ref().map(error_chain),
        })
        .collect();

    Ok(GenerateReport::Run(lines))
}

/// An error and its causes on one line.
fn error_chain(err: &primelib_codegen::Error) -> String {
    let mut parts = Vec::new();
    let mut current: Option<&dyn std::error::Error> = Some(err);
    while let Some(e) = current {
        parts.push(e.to_string());
        current = e.source();
    }
    parts.join(": ")
}
