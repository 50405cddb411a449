use std::path::PathBuf;

use crate::{Error, Result};

/// Result of one executed task.
#[derive(Debug)]
pub struct TaskOutcome {
    pub name: String,
    pub output_dir: PathBuf,
    pub error: Option<Error>,
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcomes of a run, in execution order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<TaskOutcome>,
}

impl RunReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &TaskOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &TaskOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn is_success(&self) -> bool {
        self.failed().next().is_none()
    }

    /// Fail with [`Error::TasksFailed`] when any task failed.
    pub fn into_result(self) -> Result<Self> {
        let names: Vec<String> = self.failed().map(|o| o.name.clone()).collect();
        if names.is_empty() {
            Ok(self)
        } else {
            Err(Error::TasksFailed { names })
        }
    }
}
