use primelib_config::{Configuration, Preset};

use crate::{GeneratorTask, PlanContext, backend::PrimeCodeGenConfig};

pub(super) fn task(config: &Configuration, ctx: &PlanContext) -> GeneratorTask {
    let generator_config = PrimeCodeGenConfig {
        artifact_id: config.presets.go.module_name.clone(),
        ..Default::default()
    };
    super::primecodegen_task(Preset::Go, generator_config, config, ctx)
}

#[cfg(test)]
mod tests {
    use primelib_core::Verbosity;

    use super::*;
    use crate::{Backend, GenerateOptions};

    #[test]
    fn test_go_preset() {
        let mut config = Configuration::default();
        config.presets.go.module_name = "github.com/acme/acme-go".to_string();
        config.repository.license_name = "MIT".to_string();
        config.spec.patches = vec!["rename-ids".to_string()];
        let ctx = PlanContext::new("/work/acme").verbosity(Verbosity::Debug);

        let task = task(&config, &ctx);

        assert_eq!(task.name(), "go-httpclient");
        let Backend::PrimeCodeGen(generator) = task.backend() else {
            panic!("go uses primecodegen");
        };
        assert_eq!(generator.config.template_language, "go");
        assert_eq!(generator.config.template_type, "httpclient");
        assert_eq!(generator.verbosity, Verbosity::Debug);

        let invocation =
            task.preview(&GenerateOptions::new("/work/acme/go", "/work/acme")).unwrap();
        insta::assert_snapshot!(invocation.to_string(), @"primecodegen openapi-generate -i /work/acme/openapi.yaml -g go -t httpclient -o /work/acme/go --md-artifact-id github.com/acme/acme-go --md-license-name MIT --patches rename-ids --log-level debug");
    }
}
