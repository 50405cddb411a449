//! The unit of work: one target, one backend run.

use std::path::{Path, PathBuf};

use crate::{Backend, Invocation, ProcessRunner, Result, SystemRunner};

/// Where a task writes and which directory it runs from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Directory receiving the generated code.
    pub output_directory: PathBuf,
    /// Root of the project, the directory containing primelib.yaml.
    pub project_directory: PathBuf,
}

impl GenerateOptions {
    pub fn new(output_directory: impl Into<PathBuf>, project_directory: impl Into<PathBuf>) -> Self {
        Self {
            output_directory: output_directory.into(),
            project_directory: project_directory.into(),
        }
    }
}

/// A single generation target bound to a backend.
///
/// Tasks are immutable once built. They are produced by the preset adapter
/// or from custom generator entries, and consumed by the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorTask {
    name: String,
    output_name: String,
    backend: Backend,
}

impl GeneratorTask {
    pub fn new(
        name: impl Into<String>,
        output_name: impl Into<String>,
        backend: impl Into<Backend>,
    ) -> Self {
        Self {
            name: name.into(),
            output_name: output_name.into(),
            backend: backend.into(),
        }
    }

    /// Stable identifier, e.g. `python-httpclient`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Subdirectory used when a project has several targets.
    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    pub fn spec_path(&self) -> &Path {
        self.backend.spec_path()
    }

    pub fn extra_args(&self) -> &[String] {
        self.backend.extra_args()
    }

    /// Backend specific configuration, as JSON.
    pub fn backend_config(&self) -> serde_json::Value {
        self.backend.config_value()
    }

    /// Run the backend as a child process.
    pub fn generate(&self, opts: &GenerateOptions) -> Result<()> {
        self.generate_with(opts, &SystemRunner)
    }

    /// Run the backend through the given runner.
    ///
    /// Exactly one backend invocation happens per call, and stale output is
    /// reconciled first.
    pub fn generate_with(&self, opts: &GenerateOptions, runner: &dyn ProcessRunner) -> Result<()> {
        tracing::info!(
            task = %self.name,
            backend = self.backend.name(),
            output = %opts.output_directory.display(),
            "generating"
        );
        self.backend.generate(opts, runner)
    }

    /// The invocation [`generate`](Self::generate) would run.
    pub fn preview(&self, opts: &GenerateOptions) -> Result<Invocation> {
        self.backend.preview(opts)
    }
}
