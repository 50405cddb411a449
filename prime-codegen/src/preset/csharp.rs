use primelib_config::{Configuration, Preset};

use crate::{GeneratorTask, PlanContext, backend::OpenApiGeneratorConfig};

const DEFAULT_IGNORE_FILES: &[&str] = &["README.md", ".gitignore", "git_push.sh", "docs/*"];

const TARGET_FRAMEWORK: &str = "net8.0";

pub(super) fn task(config: &Configuration, ctx: &PlanContext) -> GeneratorTask {
    let generator_config = OpenApiGeneratorConfig::new("csharp")
        .property("library", "httpclient")
        .property("packageName", config.repository.name.as_str())
        .property("packageVersion", "")
        .property("targetFramework", TARGET_FRAMEWORK);

    super::openapi_task(
        Preset::CSharp,
        generator_config,
        DEFAULT_IGNORE_FILES,
        config,
        ctx,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csharp_preset() {
        let mut config = Configuration {
            name: "acme".to_string(),
            ..Default::default()
        };
        config.repository.name = "Acme.Client".to_string();

        let task = task(&config, &PlanContext::new("/work/acme"));

        assert_eq!(task.name(), "csharp-httpclient");
        let value = task.backend_config();
        assert_eq!(value["generatorName"], "csharp");
        assert_eq!(value["additionalProperties"]["packageName"], "Acme.Client");
        assert_eq!(value["additionalProperties"]["targetFramework"], "net8.0");
    }
}
