// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Project configuration (`primelib.yaml`) for the primelib SDK generator.

mod config;
mod error;
mod generator;
mod presets;
mod repository;
mod spec;

pub use config::{CONFIG_FILE_NAME, Configuration, ParseContext, PrimelibYaml};
pub use error::{Error, Result, SourceContext};
pub use generator::{Generator, GeneratorType};
pub use presets::{
    CSharpLanguageOptions, GoLanguageOptions, JavaLanguageOptions, Preset, Presets,
    PythonLanguageOptions, TypescriptLanguageOptions,
};
pub use repository::{Maintainer, Repository};
pub use spec::{
    Customization, CustomizationContact, CustomizationLicense, CustomizationServer, Spec,
    SpecSource,
};
