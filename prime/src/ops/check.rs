//! Check operation - configuration validation.

use eyre::Result;
use primelib_config::PrimelibYaml;
use primelib_core::Verbosity;

use super::{display_path, planned_tasks};
use crate::reports::{CheckReport, TaskSummary};

/// Execute the check operation.
///
/// Parsing already validated the configuration; this resolves the tasks and
/// collects warnings about things that would make generation fail.
pub fn check(primelib_yaml: &PrimelibYaml) -> Result<CheckReport> {
    let config = primelib_yaml.config();
    let project_dir = primelib_yaml.project_dir();
    let tasks = planned_tasks(config, project_dir, Verbosity::default(), &[])?;

    let mut warnings = Vec::new();
    if tasks.is_empty() {
        warnings.push("no presets or generators are enabled".to_string());
    }
    let spec_path = config.spec.file_path(project_dir);
    if !spec_path.exists() {
        warnings.push(format!(
            "specification '{}' does not exist yet",
            display_path(&spec_path, project_dir)
        ));
    }

    let orchestrator = primelib_codegen::Orchestrator::for_config(config, project_dir);
    let tasks = tasks
        .iter()
        .map(|task| TaskSummary {
            name: task.name().to_string(),
            backend: task.backend().name().to_string(),
            output_dir: display_path(&orchestrator.output_dir(task), project_dir),
        })
        .collect();

    Ok(CheckReport {
        config_path: primelib_yaml.path().to_path_buf(),
        project: config.name.clone(),
        warnings,
        tasks,
    })
}
