use std::path::{Path, PathBuf};

use primelib_config::Configuration;

use crate::{
    GenerateOptions, GeneratorTask, ProcessRunner, ReconcileReport, Result, RunReport,
    SystemRunner, TaskOutcome, reconcile,
};

/// What to do with the remaining tasks once one fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failure.
    #[default]
    FailFast,
    /// Run every task and report all failures.
    Continue,
}

/// Runs generator tasks sequentially.
pub struct Orchestrator {
    runner: Box<dyn ProcessRunner>,
    policy: FailurePolicy,
    project_dir: PathBuf,
    output_root: PathBuf,
    per_target_dirs: bool,
}

impl Orchestrator {
    /// Orchestrator writing under `output_root`, spawning real processes.
    pub fn new(project_dir: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            runner: Box::new(SystemRunner),
            policy: FailurePolicy::default(),
            project_dir: project_dir.into(),
            output_root: output_root.into(),
            per_target_dirs: false,
        }
    }

    /// Orchestrator laid out for a configuration loaded from `project_dir`.
    pub fn for_config(config: &Configuration, project_dir: &Path) -> Self {
        let project_dir = super::absolute_dir(project_dir);
        let output_root = config.output_dir(&project_dir);
        Self::new(project_dir, output_root).per_target_dirs(config.multi_language())
    }

    /// Give each task its own subdirectory named after its output name.
    pub fn per_target_dirs(mut self, enabled: bool) -> Self {
        self.per_target_dirs = enabled;
        self
    }

    pub fn policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn runner(mut self, runner: impl ProcessRunner + 'static) -> Self {
        self.runner = Box::new(runner);
        self
    }

    /// Output directory of a task.
    pub fn output_dir(&self, task: &GeneratorTask) -> PathBuf {
        if self.per_target_dirs {
            self.output_root.join(task.output_name())
        } else {
            self.output_root.clone()
        }
    }

    pub fn options(&self, task: &GeneratorTask) -> GenerateOptions {
        GenerateOptions::new(self.output_dir(task), &self.project_dir)
    }

    /// Run the tasks in order.
    ///
    /// Under [`FailurePolicy::FailFast`] the first failure is returned,
    /// attributed to its task. Otherwise every task runs and failures are
    /// recorded in the report.
    pub fn run(&self, tasks: &[GeneratorTask]) -> Result<RunReport> {
        let mut report = RunReport::default();

        for task in tasks {
            let opts = self.options(task);
            let result = task.generate_with(&opts, self.runner.as_ref());

            match result {
                Ok(()) => {
                    tracing::info!(task = task.name(), "generated");
                }
                Err(err) if self.policy == FailurePolicy::FailFast => {
                    return Err(err.in_task(task.name()));
                }
                Err(err) => {
                    tracing::error!(task = task.name(), error = %err, "generation failed");
                    report.outcomes.push(TaskOutcome {
                        name: task.name().to_string(),
                        output_dir: opts.output_directory,
                        error: Some(err.in_task(task.name())),
                    });
                    continue;
                }
            }

            report.outcomes.push(TaskOutcome {
                name: task.name().to_string(),
                output_dir: opts.output_directory,
                error: None,
            });
        }

        Ok(report)
    }

    /// Reconcile each task's output directory without generating.
    ///
    /// With `dry_run` nothing is deleted.
    pub fn clean(
        &self,
        tasks: &[GeneratorTask],
        dry_run: bool,
    ) -> Result<Vec<(String, ReconcileReport)>> {
        tasks
            .iter()
            .map(|task| {
                let dir = self.output_dir(task);
                let report = if dry_run {
                    reconcile::plan(&dir)
                } else {
                    reconcile::reconcile(&dir)
                };
                report
                    .map(|r| (task.name().to_string(), r))
                    .map_err(|err| err.in_task(task.name()))
            })
            .collect()
    }
}
