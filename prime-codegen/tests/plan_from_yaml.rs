//! Planning tasks from a primelib.yaml document.

use std::{path::Path, str::FromStr};

use primelib_codegen::{Orchestrator, PlanContext, orchestrator, testing::RecordingRunner};
use primelib_config::Configuration;

const CONFIG: &str = r#"
name: acme
output: sdk
repository:
  url: https://github.com/acme/acme-sdk
presets:
  python:
    enabled: true
    pypiPackageName: acme-sdk
  go:
    enabled: true
    module: github.com/acme/acme-go
generators:
  - name: rust
    enabled: true
    type: openapi-generator
    arguments: ["--openapi-normalizer", "DISABLE_ALL=true"]
    config:
      generatorName: rust
      additionalProperties:
        packageName: acme
"#;

#[test]
fn plans_presets_and_generators() {
    let config = Configuration::from_str(CONFIG).unwrap();
    let project = Path::new("/work/acme");
    let ctx = PlanContext::for_config(&config, project);

    let tasks = orchestrator::plan(&config, &ctx).unwrap();
    let names: Vec<&str> = tasks.iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["go-httpclient", "python-httpclient", "rust"]);

    let python = &tasks[1];
    assert_eq!(python.output_name(), "python");
    let value = python.backend_config();
    assert_eq!(value["additionalProperties"]["packageName"], "acme-sdk");
    assert_eq!(value["additionalProperties"]["library"], "urllib3");
    assert_eq!(value["additionalProperties"]["projectName"], "acme");

    let orchestrator = Orchestrator::for_config(&config, project);
    assert_eq!(
        orchestrator.output_dir(python),
        Path::new("/work/acme/sdk/python")
    );
}

#[test]
fn runs_every_task_once() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Configuration::from_str(CONFIG).unwrap();
    let ctx = PlanContext::for_config(&config, dir.path());
    let tasks = orchestrator::plan(&config, &ctx).unwrap();
    let runner = RecordingRunner::new();

    let report = Orchestrator::for_config(&config, dir.path())
        .runner(runner.clone())
        .run(&tasks)
        .unwrap();

    assert!(report.is_success());
    let recorded = runner.recorded();
    let backends: Vec<&str> = recorded.iter().map(|r| r.backend).collect();
    assert_eq!(
        backends,
        vec!["primecodegen", "openapi-generator", "openapi-generator"]
    );
    let rust = &recorded[2].invocation;
    assert!(rust.args.ends_with(&[
        "--openapi-normalizer".to_string(),
        "DISABLE_ALL=true".to_string()
    ]));
    assert!(dir.path().join("sdk/go").is_dir());
}
