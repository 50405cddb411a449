//! Configuration parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Configuration, validate::ParseContext};
use crate::{
    Error, Result,
    error::SourceContext,
    spec::{DEFAULT_SOURCE_FORMAT, DEFAULT_SPEC_FILE},
};

impl FromStr for Configuration {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, super::CONFIG_FILE_NAME)
    }
}

impl Configuration {
    /// Parse a primelib.yaml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse a primelib.yaml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }

    /// Fill in fields that default to other fields.
    fn apply_defaults(&mut self) {
        if self.repository.name.is_empty() {
            self.repository.name = self.name.clone();
        }
        if self.repository.description.is_empty() {
            self.repository.description = self.summary.clone();
        }

        for source in &mut self.spec.sources {
            if source.format.is_empty() {
                source.format = DEFAULT_SOURCE_FORMAT.to_string();
            }
        }
        if self.spec.customization.title.is_empty() {
            self.spec.customization.title = self.name.clone();
        }
        if self.spec.file.is_empty() {
            self.spec.file = DEFAULT_SPEC_FILE.to_string();
        }
    }
}

/// Parse a configuration from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Configuration> {
    let source_ctx = SourceContext::new(content, filename);
    let mut config: Configuration =
        serde_yaml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    config.apply_defaults();

    ParseContext::new(content, filename).validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeneratorType;

    #[test]
    fn test_defaults_are_applied() {
        let config = Configuration::from_str(
            r#"
name: acme
summary: Acme public API
spec:
  sources:
    - url: https://acme.example/openapi.json
"#,
        )
        .unwrap();

        assert_eq!(config.repository.name, "acme");
        assert_eq!(config.repository.description, "Acme public API");
        assert_eq!(config.spec.file, "openapi.yaml");
        assert_eq!(config.spec.customization.title, "acme");
        assert_eq!(config.spec.sources[0].format, "spec");
    }

    #[test]
    fn test_explicit_values_win_over_defaults() {
        let config = Configuration::from_str(
            r#"
name: acme
repository:
  name: acme-sdks
  licenseName: MIT
  licenseURL: https://opensource.org/licenses/MIT
spec:
  file: merged.yaml
  customization:
    title: Acme
"#,
        )
        .unwrap();

        assert_eq!(config.repository.name, "acme-sdks");
        assert_eq!(config.repository.license_name, "MIT");
        assert_eq!(
            config.repository.license_url,
            "https://opensource.org/licenses/MIT"
        );
        assert_eq!(config.spec.file, "merged.yaml");
        assert_eq!(config.spec.customization.title, "Acme");
    }

    #[test]
    fn test_presets_and_generators() {
        let config = Configuration::from_str(
            r#"
name: acme
presets:
  python:
    enabled: true
    pypiPackageName: acme-sdk
    ignoreFiles: ["setup.cfg"]
  java:
    enabled: false
generators:
  - name: kotlin
    enabled: true
    type: openapi-generator
  - name: rust
    enabled: false
    type: primecodegen
"#,
        )
        .unwrap();

        assert_eq!(config.presets.python.pypi_package_name, "acme-sdk");
        assert_eq!(config.presets.python.ignore_files, vec!["setup.cfg"]);
        assert_eq!(config.generators[1].kind, GeneratorType::PrimeCodeGen);
        assert_eq!(config.task_count(), 2);
        assert!(config.has_generator());
        assert!(config.multi_language());
    }

    #[test]
    fn test_output_dir() {
        let root = Path::new("/work/acme");
        let mut config = Configuration::default();
        assert_eq!(config.output_dir(root), root);

        config.output = "sdks".to_string();
        assert_eq!(config.output_dir(root), root.join("sdks"));
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = Configuration::from_str("name: [unclosed\n").unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_name_is_a_parse_error() {
        let err = Configuration::from_str("summary: no name\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
