//! Configuration types and parsing for primelib.yaml files.

mod file;
mod parse;
mod validate;

use std::path::{Path, PathBuf};

pub use file::PrimelibYaml;
use serde::{Deserialize, Serialize};
pub use validate::ParseContext;

use crate::{Generator, Maintainer, Presets, Repository, Spec};

/// Conventional name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = "primelib.yaml";

/// Root configuration for primelib.yaml
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Configuration {
    /// Project name
    pub name: String,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub description: String,

    /// Output directory for the generated code, relative to the project
    #[serde(default)]
    pub output: String,

    #[serde(default)]
    pub repository: Repository,

    #[serde(default)]
    pub maintainers: Vec<Maintainer>,

    /// Fully customized generators
    #[serde(default)]
    pub generators: Vec<Generator>,

    /// Pre-configured generators for specific languages
    #[serde(default)]
    pub presets: Presets,

    #[serde(default)]
    pub spec: Spec,
}

impl Configuration {
    /// Custom generators that are switched on.
    pub fn enabled_generators(&self) -> impl Iterator<Item = &Generator> {
        self.generators.iter().filter(|g| g.enabled)
    }

    /// Number of tasks this configuration produces.
    pub fn task_count(&self) -> usize {
        self.presets.enabled_count() + self.enabled_generators().count()
    }

    pub fn has_generator(&self) -> bool {
        self.task_count() > 0
    }

    /// Whether output is split into one directory per target.
    pub fn multi_language(&self) -> bool {
        self.task_count() > 1
    }

    /// Root directory for generated code.
    pub fn output_dir(&self, project_dir: &Path) -> PathBuf {
        let output = Path::new(&self.output);
        if self.output.is_empty() {
            project_dir.to_path_buf()
        } else if output.is_absolute() {
            output.to_path_buf()
        } else {
            project_dir.join(output)
        }
    }
}
