//! openapi-generator compatible backend.
//!
//! The backend reads its settings from a JSON configuration file. A file named
//! [`CONFIG_FILE_NAME`] in the output directory takes precedence over the
//! configuration derived from primelib.yaml, which is otherwise written to a
//! temporary file that lives exactly as long as the backend process.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use primelib_core::File;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::{Error, GenerateOptions, Invocation, ProcessRunner, Result, reconcile};

pub const NAME: &str = "openapi-generator";

/// User supplied configuration file, used instead of the derived one.
pub const CONFIG_FILE_NAME: &str = "openapi-generator.json";

/// Ignore file understood by the backend.
pub const IGNORE_FILE_NAME: &str = ".openapi-generator-ignore";

/// Executable used when no override is given.
pub const DEFAULT_EXECUTABLE: &str = "primecodegen";

/// Environment variable holding a whitespace separated executable override.
pub const EXECUTABLE_ENV: &str = "PRIMECODEGEN_BIN";

/// Generator names with this prefix use the template engine's own subcommand.
const PRIME_GENERATOR_PREFIX: &str = "primecodegen-";

/// Arguments used when the task has none.
pub const DEFAULT_ARGUMENTS: &[&str] = &[
    "--openapi-normalizer",
    "SIMPLIFY_ANYOF_STRING_AND_ENUM_STRING=true",
    "--openapi-normalizer",
    "SIMPLIFY_BOOLEAN_ENUM=true",
    "--openapi-normalizer",
    "SIMPLIFY_ONEOF_ANYOF=true",
    "--openapi-normalizer",
    "ADD_UNSIGNED_TO_INTEGER_WITH_INVALID_MAX_VALUE=true",
    "--openapi-normalizer",
    "REFACTOR_ALLOF_WITH_PROPERTIES_ONLY=true",
];

/// Every argument token a task may pass to the backend.
pub const ARGUMENT_ALLOW_LIST: &[&str] = &[
    "--skip-validate-spec",
    "--openapi-normalizer",
    "SIMPLIFY_ANYOF_STRING_AND_ENUM_STRING=true",
    "SIMPLIFY_ANYOF_STRING_AND_ENUM_STRING=false",
    "SIMPLIFY_BOOLEAN_ENUM=true",
    "SIMPLIFY_BOOLEAN_ENUM=false",
    "SIMPLIFY_ONEOF_ANYOF=true",
    "SIMPLIFY_ONEOF_ANYOF=false",
    "ADD_UNSIGNED_TO_INTEGER_WITH_INVALID_MAX_VALUE=true",
    "ADD_UNSIGNED_TO_INTEGER_WITH_INVALID_MAX_VALUE=false",
    "REFACTOR_ALLOF_WITH_PROPERTIES_ONLY=true",
    "REFACTOR_ALLOF_WITH_PROPERTIES_ONLY=false",
    "REF_AS_PARENT_IN_ALLOF=true",
    "REF_AS_PARENT_IN_ALLOF=false",
    "REMOVE_ANYOF_ONEOF_AND_KEEP_PROPERTIES_ONLY=true",
    "REMOVE_ANYOF_ONEOF_AND_KEEP_PROPERTIES_ONLY=false",
    "KEEP_ONLY_FIRST_TAG_IN_OPERATION=true",
    "KEEP_ONLY_FIRST_TAG_IN_OPERATION=false",
    "SET_TAGS_FOR_ALL_OPERATIONS=true",
    "SET_TAGS_FOR_ALL_OPERATIONS=false",
    "DISABLE_ALL=true",
];

/// Configuration file format read by openapi-generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct OpenApiGeneratorConfig {
    pub generator_name: String,
    pub invoker_package: String,
    pub api_package: String,
    pub model_package: String,
    pub enable_post_process_file: bool,
    pub global_property: IndexMap<String, serde_json::Value>,
    pub additional_properties: IndexMap<String, serde_json::Value>,
}

impl OpenApiGeneratorConfig {
    pub fn new(generator_name: impl Into<String>) -> Self {
        Self {
            generator_name: generator_name.into(),
            ..Default::default()
        }
    }

    /// Add an entry to `additionalProperties`.
    pub fn property(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.additional_properties
            .insert(key.to_string(), value.into());
        self
    }
}

/// Invoker for openapi-generator compatible executables.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenApiGenerator {
    pub spec_path: PathBuf,
    pub args: Vec<String>,
    /// Executable tokens, the first one is the program.
    pub executable: Vec<String>,
    /// Patterns written to the ignore file when none exists yet.
    pub ignore_files: Vec<String>,
    pub config: OpenApiGeneratorConfig,
}

impl OpenApiGenerator {
    pub fn new(spec_path: impl Into<PathBuf>, config: OpenApiGeneratorConfig) -> Self {
        Self {
            spec_path: spec_path.into(),
            args: Vec::new(),
            executable: vec![DEFAULT_EXECUTABLE.to_string()],
            ignore_files: Vec::new(),
            config,
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Use the given executable tokens. Empty input keeps the default.
    pub fn with_executable(mut self, executable: Vec<String>) -> Self {
        if !executable.is_empty() {
            self.executable = executable;
        }
        self
    }

    pub fn with_ignore_files(mut self, ignore_files: Vec<String>) -> Self {
        self.ignore_files = ignore_files;
        self
    }

    /// Subcommand understood by the executable for this generator.
    pub fn subcommand(&self) -> &'static str {
        if self.config.generator_name.starts_with(PRIME_GENERATOR_PREFIX) {
            "prime-generate"
        } else {
            "generate"
        }
    }

    /// The task's arguments, or the defaults when there are none.
    ///
    /// Fails on the first token outside [`ARGUMENT_ALLOW_LIST`].
    pub fn resolve_args(&self) -> Result<Vec<String>> {
        if self.args.is_empty() {
            return Ok(DEFAULT_ARGUMENTS.iter().map(|a| a.to_string()).collect());
        }

        for arg in &self.args {
            if !ARGUMENT_ALLOW_LIST.contains(&arg.as_str()) {
                return Err(Error::ArgumentNotAllowed {
                    backend: NAME,
                    argument: arg.clone(),
                });
            }
        }
        Ok(self.args.clone())
    }

    /// Path of the user supplied configuration file, if one exists.
    pub fn config_override(output_dir: &Path) -> Option<PathBuf> {
        let path = output_dir.join(CONFIG_FILE_NAME);
        path.is_file().then_some(path)
    }

    /// The configuration as written to the temporary file.
    pub fn rendered_config(&self) -> Result<String> {
        let mut config = self.config.clone();
        config.enable_post_process_file = true;
        serde_json::to_string_pretty(&config).map_err(|source| Error::SerializeConfig {
            backend: NAME,
            source,
        })
    }

    /// Build the invocation for a given configuration file.
    pub fn invocation(
        &self,
        opts: &GenerateOptions,
        config_file: &Path,
        args: Vec<String>,
    ) -> Invocation {
        let (program, prefix) = match self.executable.split_first() {
            Some((program, prefix)) => (program.as_str(), prefix),
            None => (DEFAULT_EXECUTABLE, &[][..]),
        };

        Invocation::new(program)
            .args(prefix.iter().cloned())
            .arg(self.subcommand())
            .flag("-e", "auto")
            .flag("-i", self.spec_path.display().to_string())
            .flag("-o", opts.output_directory.display().to_string())
            .flag("-c", config_file.display().to_string())
            .arg("--skip-validate-spec")
            .args(args)
            .only_path_env(std::env::var("PATH").ok())
            .config_file(config_file)
    }

    /// Resolve the invocation without writing anything.
    ///
    /// When no override exists the configuration path is a placeholder for
    /// the temporary file created at run time.
    pub fn preview(&self, opts: &GenerateOptions) -> Result<Invocation> {
        let args = self.resolve_args()?;
        let config_file = Self::config_override(&opts.output_directory)
            .unwrap_or_else(|| std::env::temp_dir().join(CONFIG_FILE_NAME));
        Ok(self.invocation(opts, &config_file, args))
    }

    /// Reconcile the output directory, then run the backend once.
    pub fn generate(&self, opts: &GenerateOptions, runner: &dyn ProcessRunner) -> Result<()> {
        let output_dir = &opts.output_directory;
        let args = self.resolve_args()?;

        reconcile::reconcile(output_dir)?;

        std::fs::create_dir_all(output_dir).map_err(|source| Error::CreateDir {
            path: output_dir.clone(),
            source,
        })?;
        self.write_ignore_file(output_dir)?;

        let config = ConfigFile::resolve(self, output_dir)?;
        let invocation = self.invocation(opts, config.path(), args);

        tracing::debug!(
            config = %config.path().display(),
            user_config = config.is_override(),
            "running {}", NAME
        );
        runner.run(&invocation, NAME)
    }

    fn write_ignore_file(&self, output_dir: &Path) -> Result<()> {
        if self.ignore_files.is_empty() {
            return Ok(());
        }

        let mut content = self.ignore_files.join("\n");
        content.push('\n');
        let path = output_dir.join(IGNORE_FILE_NAME);
        File::if_missing(&path, content)
            .write()
            .map_err(|source| Error::WriteFile { path, source })?;
        Ok(())
    }
}

/// Configuration handed to the backend process.
enum ConfigFile {
    /// Left untouched.
    Override(PathBuf),
    /// Removed when dropped.
    Temporary(NamedTempFile),
}

impl ConfigFile {
    fn resolve(generator: &OpenApiGenerator, output_dir: &Path) -> Result<Self> {
        if let Some(path) = OpenApiGenerator::config_override(output_dir) {
            return Ok(ConfigFile::Override(path));
        }

        let content = generator.rendered_config()?;
        let write_err = |source| Error::WriteConfig {
            backend: NAME,
            source,
        };
        let mut file = tempfile::Builder::new()
            .prefix("openapi-generator-")
            .suffix(".json")
            .tempfile()
            .map_err(write_err)?;
        file.write_all(content.as_bytes()).map_err(write_err)?;
        file.flush().map_err(write_err)?;
        Ok(ConfigFile::Temporary(file))
    }

    fn path(&self) -> &Path {
        match self {
            ConfigFile::Override(path) => path,
            ConfigFile::Temporary(file) => file.path(),
        }
    }

    fn is_override(&self) -> bool {
        matches!(self, ConfigFile::Override(_))
    }
}
