use std::path::{Path, PathBuf};

use super::Configuration;
use crate::Result;

/// Represents a primelib.yaml file with both raw content and parsed configuration.
pub struct PrimelibYaml {
    path: PathBuf,
    project_dir: PathBuf,
    content: String,
    config: Configuration,
}

impl PrimelibYaml {
    /// Open and parse a primelib.yaml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Configuration::from_str_with_filename(&content, &filename)?;
        let project_dir = resolve_project_dir(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;

        Ok(Self {
            path,
            project_dir,
            content,
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute directory the configuration lives in; relative paths resolve against it.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }
}

/// Absolute parent directory of a configuration file path.
fn resolve_project_dir(path: &Path) -> std::io::Result<PathBuf> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::path::absolute(parent)
}
