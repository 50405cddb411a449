//! Where the OpenAPI specification comes from and how it is customized.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default path of the merged specification, relative to the project.
pub(crate) const DEFAULT_SPEC_FILE: &str = "openapi.yaml";

/// Default format of a specification source.
pub(crate) const DEFAULT_SOURCE_FORMAT: &str = "spec";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Spec {
    /// Path to the openapi specification file handed to the generators
    pub file: String,
    /// Directory where source specifications are stored
    pub sources_dir: String,
    /// One or multiple sources to specifications
    pub sources: Vec<SpecSource>,
    /// Format of the api specification
    #[serde(rename = "type")]
    pub kind: String,
    /// Overwrites for certain parts of the specification
    pub customization: Customization,
    /// Patches applied to the source specifications before merging
    pub input_patches: Vec<String>,
    /// Patches applied to the merged specification
    pub patches: Vec<String>,
}

impl Spec {
    /// URLs of all sources, in declaration order (empty for file sources).
    pub fn urls(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.url.as_str()).collect()
    }

    /// Directory holding the source specifications.
    pub fn sources_dir(&self, root: &Path) -> PathBuf {
        if self.sources_dir.is_empty() {
            return root.to_path_buf();
        }

        let dir = Path::new(&self.sources_dir);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            root.join(dir)
        }
    }

    /// Resolved path of the specification file.
    pub fn file_path(&self, root: &Path) -> PathBuf {
        let file = Path::new(&self.file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            root.join(file)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpecSource {
    pub file: String,
    pub url: String,
    pub format: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customization {
    pub title: String,
    pub summary: String,
    pub description: String,
    pub version: String,
    pub contact: CustomizationContact,
    pub license: CustomizationLicense,
    pub servers: Vec<CustomizationServer>,
    pub prune_operations: Vec<String>,
    pub prune_tags: Vec<String>,
    pub prune_schemas: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CustomizationContact {
    pub name: String,
    pub url: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CustomizationLicense {
    pub name: String,
    pub url: String,
    pub identifier: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CustomizationServer {
    pub url: String,
    pub description: String,
}
