//! Process execution seam.
//!
//! Backends describe what to run as an [`Invocation`]; a [`ProcessRunner`]
//! decides how. [`SystemRunner`] spawns real processes, tests substitute a
//! recording runner.

use std::process::{Command, Stdio};

use crate::{Error, Invocation, Result};

/// Runs a backend invocation to completion.
pub trait ProcessRunner {
    /// Run the invocation and wait for it.
    ///
    /// `backend` names the backend in errors and logs.
    fn run(&self, invocation: &Invocation, backend: &'static str) -> Result<()>;
}

/// Spawns the invocation as a child process.
///
/// Arguments are passed directly, without a shell. Standard output and error
/// stream to the caller's terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation, backend: &'static str) -> Result<()> {
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if invocation.clear_env {
            command.env_clear();
        }
        command.envs(invocation.env.iter().map(|(k, v)| (k, v)));
        if let Some(dir) = &invocation.working_dir {
            command.current_dir(dir);
        }

        tracing::trace!(backend, command = %invocation, "spawning backend");

        let status = command.status().map_err(|source| Error::Spawn {
            backend,
            program: invocation.program.clone(),
            source,
        })?;

        if !status.success() {
            return Err(Error::ProcessFailed {
                backend,
                program: invocation.program.clone(),
                status,
            });
        }
        Ok(())
    }
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, invocation: &Invocation, backend: &'static str) -> Result<()> {
        (**self).run(invocation, backend)
    }
}

/// Executable tokens for the openapi-generator backend.
///
/// `value` is the content of the override variable, split on whitespace. An
/// unset or blank value yields the default executable.
pub fn resolve_executable(value: Option<&str>) -> Vec<String> {
    let tokens: Vec<String> = value
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if tokens.is_empty() {
        vec![crate::backend::openapi_generator::DEFAULT_EXECUTABLE.to_string()]
    } else {
        tokens
    }
}

/// [`resolve_executable`] applied to the process environment.
pub fn executable_from_env() -> Vec<String> {
    let value = std::env::var(crate::backend::openapi_generator::EXECUTABLE_ENV).ok();
    resolve_executable(value.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_executable() {
        assert_eq!(resolve_executable(None), vec!["primecodegen"]);
        assert_eq!(resolve_executable(Some("  ")), vec!["primecodegen"]);
        assert_eq!(
            resolve_executable(Some("java -jar /opt/openapi-generator-cli.jar")),
            vec!["java", "-jar", "/opt/openapi-generator-cli.jar"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_reports_exit_status() {
        let ok = Invocation::new("sh").args(["-c", "exit 0"]);
        SystemRunner.run(&ok, "test").unwrap();

        let failing = Invocation::new("sh").args(["-c", "exit 3"]);
        let err = SystemRunner.run(&failing, "test").unwrap_err();
        match err {
            Error::ProcessFailed { status, .. } => assert_eq!(status.code(), Some(3)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_clears_environment() {
        let invocation = Invocation::new("/bin/sh")
            .args(["-c", r#"test -z "$HOME""#])
            .only_path_env(None);

        SystemRunner.run(&invocation, "test").unwrap();
    }

    #[test]
    fn test_missing_executable() {
        let invocation = Invocation::new("primelib-definitely-not-installed");

        let err = SystemRunner.run(&invocation, "test").unwrap_err();

        assert!(matches!(err, Error::Spawn { .. }));
    }
}
