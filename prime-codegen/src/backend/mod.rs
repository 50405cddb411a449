//! Backend invokers.
//!
//! A backend is an external code generation executable. Each invoker turns
//! its configuration into an [`Invocation`] and hands it to a
//! [`ProcessRunner`](crate::ProcessRunner):
//! - [`OpenApiGenerator`] - openapi-generator compatible CLI, JSON config file, allow-listed arguments
//! - [`PrimeCodeGen`] - primecodegen templates, configuration mapped onto flags

mod invocation;
pub mod openapi_generator;
pub mod primecodegen;

pub use invocation::Invocation;
pub use openapi_generator::{OpenApiGenerator, OpenApiGeneratorConfig};
pub use primecodegen::{PrimeCodeGen, PrimeCodeGenConfig};

use crate::{GenerateOptions, ProcessRunner, Result};

/// The backends a generator task can delegate to.
#[derive(Debug, Clone, PartialEq)]
pub enum Backend {
    OpenApiGenerator(OpenApiGenerator),
    PrimeCodeGen(PrimeCodeGen),
}

impl Backend {
    /// Stable identifier of the backend kind.
    pub fn name(&self) -> &'static str {
        match self {
            Backend::OpenApiGenerator(_) => openapi_generator::NAME,
            Backend::PrimeCodeGen(_) => primecodegen::NAME,
        }
    }

    pub fn spec_path(&self) -> &std::path::Path {
        match self {
            Backend::OpenApiGenerator(generator) => &generator.spec_path,
            Backend::PrimeCodeGen(generator) => &generator.spec_path,
        }
    }

    /// Free-form arguments appended to the invocation.
    pub fn extra_args(&self) -> &[String] {
        match self {
            Backend::OpenApiGenerator(generator) => &generator.args,
            Backend::PrimeCodeGen(generator) => &generator.args,
        }
    }

    /// Backend configuration as a JSON document.
    pub fn config_value(&self) -> serde_json::Value {
        let value = match self {
            Backend::OpenApiGenerator(generator) => serde_json::to_value(&generator.config),
            Backend::PrimeCodeGen(generator) => serde_json::to_value(&generator.config),
        };
        value.unwrap_or_default()
    }

    /// Build the invocation without touching the filesystem.
    pub fn preview(&self, opts: &GenerateOptions) -> Result<Invocation> {
        match self {
            Backend::OpenApiGenerator(generator) => generator.preview(opts),
            Backend::PrimeCodeGen(generator) => Ok(generator.invocation(opts)),
        }
    }

    pub fn generate(&self, opts: &GenerateOptions, runner: &dyn ProcessRunner) -> Result<()> {
        match self {
            Backend::OpenApiGenerator(generator) => generator.generate(opts, runner),
            Backend::PrimeCodeGen(generator) => generator.generate(opts, runner),
        }
    }
}

impl From<OpenApiGenerator> for Backend {
    fn from(generator: OpenApiGenerator) -> Self {
        Backend::OpenApiGenerator(generator)
    }
}

impl From<PrimeCodeGen> for Backend {
    fn from(generator: PrimeCodeGen) -> Self {
        Backend::PrimeCodeGen(generator)
    }
}
