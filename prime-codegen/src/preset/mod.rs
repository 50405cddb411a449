//! Language presets.
//!
//! Each preset is a pure function from project metadata to a configured
//! [`GeneratorTask`]. The python, csharp and typescript presets delegate to
//! the openapi-generator backend; go and java use primecodegen templates.

mod csharp;
mod go;
mod java;
mod python;
mod typescript;

use primelib_config::{Configuration, Preset};

use crate::{GeneratorTask, OpenApiGenerator, PlanContext, PrimeCodeGen, backend};

/// Template type shared by every preset.
const TEMPLATE_TYPE: &str = "httpclient";

/// Build the task for a preset.
pub fn task(preset: Preset, config: &Configuration, ctx: &PlanContext) -> GeneratorTask {
    match preset {
        Preset::Go => go::task(config, ctx),
        Preset::Java => java::task(config, ctx),
        Preset::Python => python::task(config, ctx),
        Preset::CSharp => csharp::task(config, ctx),
        Preset::Typescript => typescript::task(config, ctx),
    }
}

/// Task name of a preset, e.g. `python-httpclient`.
pub fn task_name(preset: Preset) -> String {
    format!("{}-{}", preset.as_str(), TEMPLATE_TYPE)
}

/// Ignore patterns for an openapi-generator preset: defaults first, then the
/// ones configured on the preset, without duplicates.
fn ignore_files(defaults: &[&str], configured: &[String]) -> Vec<String> {
    let mut patterns: Vec<String> = defaults.iter().map(|p| p.to_string()).collect();
    for pattern in configured {
        if !patterns.contains(pattern) {
            patterns.push(pattern.clone());
        }
    }
    patterns
}

fn openapi_task(
    preset: Preset,
    generator_config: backend::OpenApiGeneratorConfig,
    default_ignore: &[&str],
    config: &Configuration,
    ctx: &PlanContext,
) -> GeneratorTask {
    let ignore = ignore_files(default_ignore, config.presets.ignore_files(preset));
    let generator = OpenApiGenerator::new(&ctx.spec_path, generator_config)
        .with_executable(ctx.executable.clone())
        .with_ignore_files(ignore);
    GeneratorTask::new(task_name(preset), preset.as_str(), generator)
}

fn primecodegen_task(
    preset: Preset,
    mut generator_config: backend::PrimeCodeGenConfig,
    config: &Configuration,
    ctx: &PlanContext,
) -> GeneratorTask {
    generator_config.template_language = preset.as_str().to_string();
    generator_config.template_type = TEMPLATE_TYPE.to_string();
    generator_config.repository = config.repository.clone();
    generator_config.maintainers = config.maintainers.clone();
    generator_config.patches = config.spec.patches.clone();

    let generator =
        PrimeCodeGen::new(&ctx.spec_path, generator_config).with_verbosity(ctx.verbosity);
    GeneratorTask::new(task_name(preset), preset.as_str(), generator)
}
