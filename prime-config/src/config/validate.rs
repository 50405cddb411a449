//! Validation context and utilities for configuration parsing.

use std::collections::HashSet;

use miette::SourceSpan;

use super::Configuration;
use crate::{Preset, Result, error::SourceContext};

/// Validation context that carries source information.
///
/// Errors produced here point back into the raw YAML, so the context keeps
/// the source around and knows how to locate keys in it.
#[derive(Debug, Clone)]
pub struct ParseContext {
    source: SourceContext,
}

impl ParseContext {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: SourceContext::new(src, filename),
        }
    }

    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Validate a parsed configuration (after defaults have been applied).
    pub fn validate(&self, config: &Configuration) -> Result<()> {
        self.validate_presets(config)?;
        self.validate_generators(config)
    }

    fn validate_presets(&self, config: &Configuration) -> Result<()> {
        let presets = &config.presets;
        for preset in presets.enabled() {
            let missing = match preset {
                Preset::Go if presets.go.module_name.is_empty() => Some("module"),
                Preset::Java if presets.java.group_id.is_empty() => Some("groupId"),
                Preset::Java if presets.java.artifact_id.is_empty() => Some("artifactId"),
                Preset::Python if presets.python.pypi_package_name.is_empty() => {
                    Some("pypiPackageName")
                }
                Preset::Typescript if presets.typescript.npm_name.is_empty() => Some("npmName"),
                _ => None,
            };

            if let Some(field) = missing {
                return Err(self.source.missing_preset_field(
                    preset.as_str(),
                    field,
                    self.find_key_span_after("presets", preset.as_str()),
                ));
            }
        }
        Ok(())
    }

    fn validate_generators(&self, config: &Configuration) -> Result<()> {
        let preset_outputs: HashSet<&str> = config.presets.enabled().map(|p| p.as_str()).collect();
        let mut seen = HashSet::new();

        for generator in &config.generators {
            if generator.name.trim().is_empty() {
                return Err(self.source.validation_error(
                    format!("{} generator without a name", generator.kind),
                    self.find_key_span_after("generators", "type"),
                ));
            }

            if !seen.insert(generator.name.as_str()) {
                return Err(self
                    .source
                    .duplicate_generator(&generator.name, self.find_name_span(&generator.name)));
            }

            if generator.enabled && preset_outputs.contains(generator.name.as_str()) {
                return Err(self.source.validation_error(
                    format!(
                        "generator '{}' writes to the same directory as the enabled '{}' preset",
                        generator.name, generator.name
                    ),
                    self.find_name_span(&generator.name),
                ));
            }
        }
        Ok(())
    }

    /// Find `key:` as a mapping key that appears after the `anchor:` key.
    pub fn find_key_span_after(&self, anchor: &str, key: &str) -> Option<SourceSpan> {
        let src = self.source.src();
        let start = find_key(src, anchor, 0).map(|pos| pos + anchor.len())?;
        find_key(src, key, start).map(|pos| SourceSpan::from((pos, key.len())))
    }

    /// Find the value of a `name: <value>` entry.
    pub fn find_name_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }
}

/// Byte offset of a line whose first token is `key:`, searching from `from`.
fn find_key(src: &str, key: &str, from: usize) -> Option<usize> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        if line_start < from {
            continue;
        }

        let trimmed = line.trim_start_matches([' ', '\t', '-']).trim_start();
        if trimmed.strip_prefix(key).is_some_and(|rest| rest.starts_with(':')) {
            return Some(line_start + (line.len() - trimmed.len()));
        }
    }
    None
}

/// Find the span of a generator name, quoted or not.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns = [
        format!("name: {}", name),
        format!("name: \"{}\"", name),
        format!("name: '{}'", name),
    ];

    // Later occurrences are the interesting ones for duplicates
    patterns
        .iter()
        .filter_map(|pattern| {
            src.rfind(pattern.as_str()).map(|pos| {
                let quote = usize::from(pattern.len() != name.len() + 6);
                pos + 6 + quote
            })
        })
        .max()
        .map(|start| SourceSpan::from((start, name.len())))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::Error;

    #[test]
    fn test_missing_python_package_name() {
        let src = "name: acme\npresets:\n  python:\n    enabled: true\n";
        let err = Configuration::from_str(src).unwrap_err();

        match *err {
            Error::MissingPresetField {
                preset,
                field,
                span,
                ..
            } => {
                assert_eq!(preset, "python");
                assert_eq!(field, "pypiPackageName");
                let span = span.expect("span should point at the preset");
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "python");
            }
            other => panic!("expected missing preset field, got {:?}", other),
        }
    }

    #[test]
    fn test_disabled_preset_is_not_validated() {
        let src = "name: acme\npresets:\n  java:\n    enabled: false\n";
        assert!(Configuration::from_str(src).is_ok());
    }

    #[test]
    fn test_duplicate_generator_names() {
        let src = r#"name: acme
generators:
  - name: kotlin
    type: openapi-generator
  - name: kotlin
    type: primecodegen
"#;
        let err = Configuration::from_str(src).unwrap_err();

        match *err {
            Error::DuplicateGenerator { name, span, .. } => {
                assert_eq!(name, "kotlin");
                let span = span.unwrap();
                assert_eq!(span.offset(), src.rfind("kotlin").unwrap());
            }
            other => panic!("expected duplicate generator, got {:?}", other),
        }
    }

    #[test]
    fn test_generator_without_name() {
        let src = "name: acme\ngenerators:\n  - type: primecodegen\n";
        let err = Configuration::from_str(src).unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_generator_clashing_with_preset_output() {
        let src = r#"name: acme
presets:
  python:
    enabled: true
    pypiPackageName: acme-sdk
generators:
  - name: python
    enabled: true
    type: openapi-generator
"#;
        let err = Configuration::from_str(src).unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_find_name_span_quoted() {
        let src = "generators:\n  - name: \"kotlin\"\n";
        let span = find_name_span(src, "kotlin").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "kotlin");
    }
}
