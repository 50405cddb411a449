use primelib_config::{Configuration, Preset, TypescriptLanguageOptions};

use crate::{GeneratorTask, PlanContext, backend::OpenApiGeneratorConfig};

const DEFAULT_IGNORE_FILES: &[&str] = &["README.md", ".gitignore", "git_push.sh", "docs/*"];

pub(super) fn task(config: &Configuration, ctx: &PlanContext) -> GeneratorTask {
    let options = &config.presets.typescript;
    let generator_config = OpenApiGeneratorConfig::new("typescript-fetch")
        .property("npmName", npm_name(options))
        .property("npmRepository", config.repository.url.as_str())
        .property("supportsES6", true);

    super::openapi_task(
        Preset::Typescript,
        generator_config,
        DEFAULT_IGNORE_FILES,
        config,
        ctx,
    )
}

/// Package name, scoped when an organization is configured.
fn npm_name(options: &TypescriptLanguageOptions) -> String {
    let org = options.npm_org.trim_start_matches('@');
    if org.is_empty() {
        options.npm_name.clone()
    } else {
        format!("@{}/{}", org, options.npm_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(org: &str, name: &str) -> TypescriptLanguageOptions {
        TypescriptLanguageOptions {
            npm_org: org.to_string(),
            npm_name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_npm_name() {
        assert_eq!(npm_name(&options("", "acme-sdk")), "acme-sdk");
        assert_eq!(npm_name(&options("acme", "sdk")), "@acme/sdk");
        assert_eq!(npm_name(&options("@acme", "sdk")), "@acme/sdk");
    }

    #[test]
    fn test_typescript_preset() {
        let mut config = Configuration::default();
        config.presets.typescript = options("acme", "sdk");

        let task = task(&config, &PlanContext::new("/work/acme"));

        assert_eq!(task.output_name(), "typescript");
        let value = task.backend_config();
        assert_eq!(value["generatorName"], "typescript-fetch");
        assert_eq!(value["additionalProperties"]["npmName"], "@acme/sdk");
        assert_eq!(value["additionalProperties"]["supportsES6"], true);
    }
}
