//! Pre-configured generators for specific languages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Presets are pre-configured generators for specific languages
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Presets {
    pub go: GoLanguageOptions,
    pub java: JavaLanguageOptions,
    pub python: PythonLanguageOptions,
    pub csharp: CSharpLanguageOptions,
    pub typescript: TypescriptLanguageOptions,
}

/// Identifies one of the language presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Preset {
    Go,
    Java,
    Python,
    CSharp,
    Typescript,
}

impl Preset {
    /// All presets in the order tasks are planned.
    pub const ALL: [Preset; 5] = [
        Preset::Go,
        Preset::Java,
        Preset::Python,
        Preset::CSharp,
        Preset::Typescript,
    ];

    /// Key of the preset under `presets:` in primelib.yaml.
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Go => "go",
            Preset::Java => "java",
            Preset::Python => "python",
            Preset::CSharp => "csharp",
            Preset::Typescript => "typescript",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "go" | "golang" => Ok(Preset::Go),
            "java" => Ok(Preset::Java),
            "python" | "py" => Ok(Preset::Python),
            "csharp" | "c#" | "dotnet" => Ok(Preset::CSharp),
            "typescript" | "ts" => Ok(Preset::Typescript),
            _ => Err(format!(
                "unknown preset '{}', expected one of go, java, python, csharp, typescript",
                s
            )),
        }
    }
}

impl Presets {
    /// Whether the given preset is enabled.
    pub fn is_enabled(&self, preset: Preset) -> bool {
        match preset {
            Preset::Go => self.go.enabled,
            Preset::Java => self.java.enabled,
            Preset::Python => self.python.enabled,
            Preset::CSharp => self.csharp.enabled,
            Preset::Typescript => self.typescript.enabled,
        }
    }

    /// Enabled presets, in planning order.
    pub fn enabled(&self) -> impl Iterator<Item = Preset> + '_ {
        Preset::ALL.into_iter().filter(|p| self.is_enabled(*p))
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled().count()
    }

    /// Extra ignore patterns configured for the given preset.
    pub fn ignore_files(&self, preset: Preset) -> &[String] {
        match preset {
            Preset::Go => &self.go.ignore_files,
            Preset::Java => &self.java.ignore_files,
            Preset::Python => &self.python.ignore_files,
            Preset::CSharp => &self.csharp.ignore_files,
            Preset::Typescript => &self.typescript.ignore_files,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoLanguageOptions {
    pub enabled: bool,
    pub ignore_files: Vec<String>,
    #[serde(rename = "module")]
    pub module_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JavaLanguageOptions {
    pub enabled: bool,
    pub ignore_files: Vec<String>,
    pub group_id: String,
    pub artifact_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PythonLanguageOptions {
    pub enabled: bool,
    pub ignore_files: Vec<String>,
    pub pypi_package_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CSharpLanguageOptions {
    pub enabled: bool,
    pub ignore_files: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypescriptLanguageOptions {
    pub enabled: bool,
    pub ignore_files: Vec<String>,
    pub npm_org: String,
    pub npm_name: String,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_enabled_count_includes_csharp() {
        let presets = Presets {
            csharp: CSharpLanguageOptions {
                enabled: true,
                ..Default::default()
            },
            python: PythonLanguageOptions {
                enabled: true,
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(presets.enabled_count(), 2);
        assert_eq!(
            presets.enabled().collect::<Vec<_>>(),
            vec![Preset::Python, Preset::CSharp]
        );
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!(Preset::from_str("py").unwrap(), Preset::Python);
        assert_eq!(Preset::from_str("TypeScript").unwrap(), Preset::Typescript);
        assert!(Preset::from_str("cobol").is_err());
    }
}
