//! Custom generator entries.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Backend kind a custom generator entry is executed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum GeneratorType {
    /// openapi-generator compatible CLI (`generate` / `prime-generate`)
    #[serde(rename = "openapi-generator")]
    OpenApiGenerator,
    /// primecodegen template engine (`openapi-generate`)
    #[serde(rename = "primecodegen")]
    PrimeCodeGen,
}

impl GeneratorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorType::OpenApiGenerator => "openapi-generator",
            GeneratorType::PrimeCodeGen => "primecodegen",
        }
    }
}

impl fmt::Display for GeneratorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully user-defined generator.
///
/// `config` is handed to the backend as its configuration payload and
/// `arguments` are appended to its command line.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Generator {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GeneratorType,
    #[serde(default)]
    pub arguments: Vec<String>,
    #[serde(default)]
    pub config: IndexMap<String, serde_json::Value>,
}
