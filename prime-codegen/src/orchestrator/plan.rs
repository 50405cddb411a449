use std::path::{Path, PathBuf};

use primelib_config::{Configuration, Generator, GeneratorType};
use primelib_core::Verbosity;

use crate::{
    Error, GeneratorTask, OpenApiGenerator, PrimeCodeGen, Result,
    backend::{OpenApiGeneratorConfig, PrimeCodeGenConfig, openapi_generator},
    preset,
};

/// Everything task construction needs besides the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanContext {
    /// Directory containing primelib.yaml.
    pub project_dir: PathBuf,
    /// Final specification handed to every backend.
    pub spec_path: PathBuf,
    pub verbosity: Verbosity,
    /// Executable tokens for the openapi-generator backend.
    pub executable: Vec<String>,
}

impl PlanContext {
    /// Context with the default specification location and executable.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        let project_dir = project_dir.into();
        Self {
            spec_path: project_dir.join("openapi.yaml"),
            project_dir,
            verbosity: Verbosity::default(),
            executable: vec![openapi_generator::DEFAULT_EXECUTABLE.to_string()],
        }
    }

    /// Context for a configuration loaded from `project_dir`.
    pub fn for_config(config: &Configuration, project_dir: &Path) -> Self {
        let project_dir = super::absolute_dir(project_dir);
        let spec_path = config.spec.file_path(&project_dir);
        Self::new(project_dir).spec_path(spec_path)
    }

    pub fn spec_path(mut self, spec_path: impl Into<PathBuf>) -> Self {
        self.spec_path = spec_path.into();
        self
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn executable(mut self, executable: Vec<String>) -> Self {
        if !executable.is_empty() {
            self.executable = executable;
        }
        self
    }
}

/// Resolve the configuration into tasks.
///
/// Enabled presets come first in their fixed order, then enabled custom
/// generators in file order.
pub fn plan(config: &Configuration, ctx: &PlanContext) -> Result<Vec<GeneratorTask>> {
    let mut tasks: Vec<GeneratorTask> = config
        .presets
        .enabled()
        .map(|p| preset::task(p, config, ctx))
        .collect();

    for generator in config.enabled_generators() {
        tasks.push(custom_task(generator, ctx)?);
    }

    tracing::debug!(
        tasks = tasks.len(),
        names = %tasks.iter().map(|t| t.name()).collect::<Vec<_>>().join(", "),
        "planned generator tasks"
    );
    Ok(tasks)
}

/// Build the task for a custom generator entry.
pub fn custom_task(generator: &Generator, ctx: &PlanContext) -> Result<GeneratorTask> {
    let invalid = |source| Error::InvalidBackendConfig {
        generator: generator.name.clone(),
        source,
    };
    let value = serde_json::Value::Object(generator.config.clone().into_iter().collect());

    let task = match generator.kind {
        GeneratorType::OpenApiGenerator => {
            let config: OpenApiGeneratorConfig = serde_json::from_value(value).map_err(invalid)?;
            let backend = OpenApiGenerator::new(&ctx.spec_path, config)
                .with_args(generator.arguments.clone())
                .with_executable(ctx.executable.clone());
            GeneratorTask::new(&generator.name, &generator.name, backend)
        }
        GeneratorType::PrimeCodeGen => {
            let config: PrimeCodeGenConfig = serde_json::from_value(value).map_err(invalid)?;
            let backend = PrimeCodeGen::new(&ctx.spec_path, config)
                .with_args(generator.arguments.clone())
                .with_verbosity(ctx.verbosity);
            GeneratorTask::new(&generator.name, &generator.name, backend)
        }
    };
    Ok(task)
}

/// Keep the tasks matching any selector by name or output name.
///
/// No selectors keeps every task. A selector matching nothing is an error.
pub fn select(tasks: Vec<GeneratorTask>, selectors: &[String]) -> Result<Vec<GeneratorTask>> {
    if selectors.is_empty() {
        return Ok(tasks);
    }

    let matches = |task: &GeneratorTask, selector: &str| {
        task.name() == selector || task.output_name() == selector
    };

    for selector in selectors {
        if !tasks.iter().any(|t| matches(t, selector)) {
            return Err(Error::UnknownTask {
                selector: selector.clone(),
                available: tasks
                    .iter()
                    .map(|t| t.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
    }

    Ok(tasks
        .into_iter()
        .filter(|t| selectors.iter().any(|s| matches(t, s)))
        .collect())
}

#[cfg(test)]
mod tests {
    use primelib_config::PythonLanguageOptions;

    use super::*;
    use crate::Backend;

    fn python_config() -> Configuration {
        let mut config = Configuration {
            name: "acme".to_string(),
            ..Default::default()
        };
        config.presets.python = PythonLanguageOptions {
            enabled: true,
            pypi_package_name: "acme-sdk".to_string(),
            ..Default::default()
        };
        config
    }

    fn custom(name: &str, kind: GeneratorType, config: serde_json::Value) -> Generator {
        Generator {
            enabled: true,
            name: name.to_string(),
            kind,
            arguments: Vec::new(),
            config: serde_json::from_value(config).unwrap(),
        }
    }

    #[test]
    fn test_relative_project_dir_becomes_absolute() {
        let mut config = python_config();
        config.spec.file = "openapi.yaml".to_string();

        let ctx = PlanContext::for_config(&config, Path::new("sub"));

        let cwd = std::env::current_dir().unwrap();
        assert_eq!(ctx.project_dir, cwd.join("sub"));
        assert_eq!(ctx.spec_path, cwd.join("sub").join("openapi.yaml"));
    }

    #[test]
    fn test_python_preset_plan() {
        let tasks = plan(&python_config(), &PlanContext::new("/work/acme")).unwrap();

        assert_eq!(tasks.len(), 1);
        let task = &tasks[0];
        assert_eq!(task.name(), "python-httpclient");
        assert_eq!(task.output_name(), "python");
        let value = task.backend_config();
        assert_eq!(value["additionalProperties"]["packageName"], "acme-sdk");
        assert_eq!(value["additionalProperties"]["library"], "urllib3");
    }

    #[test]
    fn test_plan_order() {
        let mut config = python_config();
        config.presets.go.enabled = true;
        config.presets.go.module_name = "github.com/acme/acme-go".to_string();
        config.presets.csharp.enabled = true;
        config.generators = vec![
            custom(
                "rust",
                GeneratorType::OpenApiGenerator,
                serde_json::json!({ "generatorName": "rust" }),
            ),
            Generator {
                enabled: false,
                ..custom("kotlin", GeneratorType::OpenApiGenerator, serde_json::json!({}))
            },
        ];

        let tasks = plan(&config, &PlanContext::new("/work/acme")).unwrap();
        let names: Vec<&str> = tasks.iter().map(|t| t.name()).collect();

        assert_eq!(
            names,
            vec!["go-httpclient", "python-httpclient", "csharp-httpclient", "rust"]
        );
        assert_eq!(tasks[3].output_name(), "rust");
    }

    #[test]
    fn test_custom_task_uses_context() {
        let mut generator = custom(
            "rust",
            GeneratorType::OpenApiGenerator,
            serde_json::json!({
                "generatorName": "rust",
                "additionalProperties": { "packageName": "acme" }
            }),
        );
        generator.arguments = vec!["--skip-validate-spec".to_string()];
        let ctx = PlanContext::new("/work/acme").executable(vec!["openapi-generator-cli".to_string()]);

        let task = custom_task(&generator, &ctx).unwrap();

        let Backend::OpenApiGenerator(backend) = task.backend() else {
            panic!("expected openapi-generator");
        };
        assert_eq!(backend.executable, vec!["openapi-generator-cli"]);
        assert_eq!(backend.args, vec!["--skip-validate-spec"]);
        assert_eq!(backend.spec_path, PathBuf::from("/work/acme/openapi.yaml"));
        assert_eq!(task.backend_config()["additionalProperties"]["packageName"], "acme");
    }

    #[test]
    fn test_custom_primecodegen_task() {
        let generator = custom(
            "kotlin",
            GeneratorType::PrimeCodeGen,
            serde_json::json!({ "templateLanguage": "kotlin", "templateType": "httpclient" }),
        );
        let ctx = PlanContext::new("/work/acme").verbosity(Verbosity::Trace);

        let task = custom_task(&generator, &ctx).unwrap();

        let Backend::PrimeCodeGen(backend) = task.backend() else {
            panic!("expected primecodegen");
        };
        assert_eq!(backend.config.template_language, "kotlin");
        assert_eq!(backend.verbosity, Verbosity::Trace);
    }

    #[test]
    fn test_custom_task_rejects_unknown_fields() {
        let generator = custom(
            "rust",
            GeneratorType::OpenApiGenerator,
            serde_json::json!({ "generatorNmae": "rust" }),
        );

        let err = custom_task(&generator, &PlanContext::new("/work/acme")).unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidBackendConfig { ref generator, .. } if generator == "rust"
        ));
    }

    #[test]
    fn test_select() {
        let mut config = python_config();
        config.presets.csharp.enabled = true;
        let tasks = plan(&config, &PlanContext::new("/work/acme")).unwrap();

        let selected = select(tasks.clone(), &["csharp".to_string()]).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name(), "csharp-httpclient");

        let selected = select(tasks.clone(), &["python-httpclient".to_string()]).unwrap();
        assert_eq!(selected[0].output_name(), "python");

        assert_eq!(select(tasks.clone(), &[]).unwrap().len(), 2);

        let err = select(tasks, &["ruby".to_string()]).unwrap_err();
        assert_eq!(err.to_string(), "unknown generator 'ruby'");
    }
}
