use primelib_config::{Configuration, Preset};

use crate::{GeneratorTask, PlanContext, backend::OpenApiGeneratorConfig};

const DEFAULT_IGNORE_FILES: &[&str] = &[
    "README.md",
    "tox.ini",
    ".travis.yml",
    "appveyor.yml",
    ".gitlab-ci.yml",
    ".gitignore",
    "git_push.sh",
    ".github/*",
    "docs/*",
];

pub(super) fn task(config: &Configuration, ctx: &PlanContext) -> GeneratorTask {
    let options = &config.presets.python;
    let generator_config = OpenApiGeneratorConfig::new("python")
        .property("library", "urllib3")
        .property("projectName", config.repository.name.as_str())
        .property("packageName", options.pypi_package_name.as_str())
        .property("packageUrl", config.repository.url.as_str())
        .property("packageVersion", "");

    super::openapi_task(
        Preset::Python,
        generator_config,
        DEFAULT_IGNORE_FILES,
        config,
        ctx,
    )
}

#[cfg(test)]
mod tests {
    use primelib_config::{PythonLanguageOptions, Repository};

    use super::*;
    use crate::Backend;

    #[test]
    fn test_python_preset() {
        let mut config = Configuration {
            name: "acme".to_string(),
            repository: Repository {
                name: "acme".to_string(),
                url: "https://github.com/acme/acme-python".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        config.presets.python = PythonLanguageOptions {
            enabled: true,
            ignore_files: vec!["setup.cfg".to_string()],
            pypi_package_name: "acme-sdk".to_string(),
        };

        let task = task(&config, &PlanContext::new("/work/acme"));

        assert_eq!(task.name(), "python-httpclient");
        assert_eq!(task.output_name(), "python");
        let Backend::OpenApiGenerator(generator) = task.backend() else {
            panic!("python uses openapi-generator");
        };
        assert_eq!(generator.config.generator_name, "python");
        assert_eq!(generator.ignore_files.len(), 10);
        assert_eq!(generator.ignore_files.last().unwrap(), "setup.cfg");

        let value = task.backend_config();
        let properties = &value["additionalProperties"];
        assert_eq!(properties["library"], "urllib3");
        assert_eq!(properties["projectName"], "acme");
        assert_eq!(properties["packageName"], "acme-sdk");
        assert_eq!(properties["packageUrl"], "https://github.com/acme/acme-python");
        assert_eq!(properties["packageVersion"], "");
    }
}
