//! Test utilities for code that runs backends.
//!
//! Enabled with the `testing` feature.
//!
//! # Example
//!
//! ```ignore
//! use primelib_codegen::testing::RecordingRunner;
//!
//! let runner = RecordingRunner::new();
//! task.generate_with(&opts, &runner)?;
//! assert_eq!(runner.invocations().len(), 1);
//! ```

use std::sync::{Arc, Mutex};

use crate::{Error, Invocation, ProcessRunner, Result};

/// One captured backend run.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub backend: &'static str,
    pub invocation: Invocation,
    /// Content of the configuration file at the time of the run.
    pub config: Option<String>,
}

/// Records invocations instead of spawning processes.
///
/// Clones share the same record, so a clone can be handed to an
/// [`Orchestrator`](crate::Orchestrator) and inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    recorded: Arc<Mutex<Vec<Recorded>>>,
    failing: Arc<Vec<String>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every run whose output directory ends with one of `outputs`.
    pub fn failing_for<I, S>(outputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            recorded: Arc::default(),
            failing: Arc::new(outputs.into_iter().map(Into::into).collect()),
        }
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.recorded.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.recorded().into_iter().map(|r| r.invocation).collect()
    }

    fn should_fail(&self, invocation: &Invocation) -> bool {
        let output = invocation
            .args
            .iter()
            .position(|a| a == "-o")
            .and_then(|i| invocation.args.get(i + 1));
        output.is_some_and(|o| self.failing.iter().any(|f| o.ends_with(f.as_str())))
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation, backend: &'static str) -> Result<()> {
        let config = invocation
            .config_file
            .as_ref()
            .and_then(|path| std::fs::read_to_string(path).ok());
        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.push(Recorded {
                backend,
                invocation: invocation.clone(),
                config,
            });
        }

        if self.should_fail(invocation) {
            return Err(Error::Spawn {
                backend,
                program: invocation.program.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "simulated failure"),
            });
        }
        Ok(())
    }
}
