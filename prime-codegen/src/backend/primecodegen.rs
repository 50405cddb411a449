//! primecodegen template backend.

use std::path::PathBuf;

use primelib_config::{Maintainer, Repository};
use primelib_core::Verbosity;
use serde::{Deserialize, Serialize};

use crate::{Error, GenerateOptions, Invocation, ProcessRunner, Result, reconcile};

pub const NAME: &str = "primecodegen";

/// Executable of the template engine.
pub const EXECUTABLE: &str = "primecodegen";

/// Settings mapped onto primecodegen flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PrimeCodeGenConfig {
    pub template_language: String,
    pub template_type: String,
    pub patches: Vec<String>,
    pub group_id: String,
    pub artifact_id: String,
    pub repository: Repository,
    pub maintainers: Vec<Maintainer>,
}

/// Invoker for the primecodegen template engine.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimeCodeGen {
    pub spec_path: PathBuf,
    pub args: Vec<String>,
    pub verbosity: Verbosity,
    pub config: PrimeCodeGenConfig,
}

impl PrimeCodeGen {
    pub fn new(spec_path: impl Into<PathBuf>, config: PrimeCodeGenConfig) -> Self {
        Self {
            spec_path: spec_path.into(),
            args: Vec::new(),
            verbosity: Verbosity::default(),
            config,
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn invocation(&self, opts: &GenerateOptions) -> Invocation {
        let config = &self.config;
        let mut invocation = Invocation::new(EXECUTABLE)
            .arg("openapi-generate")
            .flag("-i", self.spec_path.display().to_string())
            .flag("-g", &config.template_language)
            .flag("-t", &config.template_type)
            .flag("-o", opts.output_directory.display().to_string())
            .flag_if_set("--md-group-id", &config.group_id)
            .flag_if_set("--md-artifact-id", &config.artifact_id)
            .flag_if_set("--md-license-name", &config.repository.license_name)
            .flag_if_set("--md-license-url", &config.repository.license_url);

        for patch in &config.patches {
            invocation = invocation.flag("--patches", patch);
        }
        if let Some(level) = self.verbosity.backend_log_level() {
            invocation = invocation.flag("--log-level", level);
        }

        invocation
            .args(self.args.iter().cloned())
            .current_dir(&opts.project_directory)
    }

    /// Reconcile the output directory, then run the template engine once.
    pub fn generate(&self, opts: &GenerateOptions, runner: &dyn ProcessRunner) -> Result<()> {
        let output_dir = &opts.output_directory;

        reconcile::reconcile(output_dir)?;
        std::fs::create_dir_all(output_dir).map_err(|source| Error::CreateDir {
            path: output_dir.clone(),
            source,
        })?;

        tracing::debug!(
            language = %self.config.template_language,
            template = %self.config.template_type,
            "running {}", NAME
        );
        runner.run(&self.invocation(opts), NAME)
    }
}
