use primelib_config::{Configuration, Preset};

use crate::{GeneratorTask, PlanContext, backend::PrimeCodeGenConfig};

pub(super) fn task(config: &Configuration, ctx: &PlanContext) -> GeneratorTask {
    let options = &config.presets.java;
    let generator_config = PrimeCodeGenConfig {
        group_id: options.group_id.clone(),
        artifact_id: options.artifact_id.clone(),
        ..Default::default()
    };
    super::primecodegen_task(Preset::Java, generator_config, config, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_preset() {
        let mut config = Configuration::default();
        config.presets.java.group_id = "io.acme".to_string();
        config.presets.java.artifact_id = "acme-sdk".to_string();

        let task = task(&config, &PlanContext::new("/work/acme"));

        assert_eq!(task.name(), "java-httpclient");
        assert_eq!(task.output_name(), "java");
        let value = task.backend_config();
        assert_eq!(value["templateLanguage"], "java");
        assert_eq!(value["groupId"], "io.acme");
        assert_eq!(value["artifactId"], "acme-sdk");
    }
}
