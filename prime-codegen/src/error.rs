use std::{path::PathBuf, process::ExitStatus};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{backend} argument not allowed: {argument}")]
    #[diagnostic(
        code(primelib::argument_not_allowed),
        help("only normalizer and validation flags may be passed to {backend}")
    )]
    ArgumentNotAllowed {
        backend: &'static str,
        argument: String,
    },

    #[error("invalid configuration for generator '{generator}'")]
    #[diagnostic(code(primelib::invalid_backend_config))]
    InvalidBackendConfig {
        generator: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize {backend} configuration")]
    SerializeConfig {
        backend: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {backend} configuration")]
    WriteConfig {
        backend: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create output directory '{path}'")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read generated files manifest '{path}'")]
    #[diagnostic(code(primelib::read_manifest))]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to delete stale file '{path}'")]
    #[diagnostic(
        code(primelib::delete_file),
        help("files listed before this one were already removed")
    )]
    DeleteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start {backend} ('{program}')")]
    #[diagnostic(
        code(primelib::spawn),
        help("make sure '{program}' is installed and on PATH")
    )]
    Spawn {
        backend: &'static str,
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{backend} failed ('{program}' {status})")]
    #[diagnostic(code(primelib::process_failed))]
    ProcessFailed {
        backend: &'static str,
        program: String,
        status: ExitStatus,
    },

    #[error("unknown generator '{selector}'")]
    #[diagnostic(help("available generators: {available}"))]
    UnknownTask { selector: String, available: String },

    #[error("generator '{name}' failed")]
    Task {
        name: String,
        #[source]
        source: Box<Error>,
    },

    #[error("{} generator(s) failed: {}", names.len(), names.join(", "))]
    TasksFailed { names: Vec<String> },
}

impl Error {
    /// Attribute an error to the task that produced it.
    pub fn in_task(self, name: impl Into<String>) -> Self {
        Error::Task {
            name: name.into(),
            source: Box::new(self),
        }
    }

    /// Whether the error happened before any backend process was started.
    pub fn is_configuration_error(&self) -> bool {
        match self {
            Error::ArgumentNotAllowed { .. }
            | Error::InvalidBackendConfig { .. }
            | Error::SerializeConfig { .. }
            | Error::WriteConfig { .. }
            | Error::WriteFile { .. }
            | Error::CreateDir { .. }
            | Error::ReadManifest { .. }
            | Error::UnknownTask { .. } => true,
            Error::Task { source, .. } => source.is_configuration_error(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_error_keeps_source() {
        let err = Error::ArgumentNotAllowed {
            backend: "openapi-generator",
            argument: "--global-property".to_string(),
        }
        .in_task("python-httpclient");

        assert_eq!(err.to_string(), "generator 'python-httpclient' failed");
        assert!(err.is_configuration_error());

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(
            source.to_string(),
            "openapi-generator argument not allowed: --global-property"
        );
    }

    #[test]
    fn test_tasks_failed_lists_names() {
        let err = Error::TasksFailed {
            names: vec!["go-httpclient".to_string(), "java-httpclient".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "2 generator(s) failed: go-httpclient, java-httpclient"
        );
    }
}
