//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// A generator that would run.
#[derive(Debug)]
pub struct TaskSummary {
    pub name: String,
    pub backend: String,
    pub output_dir: String,
}

/// Report data from configuration validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub project: String,
    /// Warning messages.
    pub warnings: Vec<String>,
    pub tasks: Vec<TaskSummary>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.success(&format!("{} is valid", self.config_path.display()));
        out.newline();
        out.key_value_indented("project", &self.project);

        let count = self.tasks.len();
        out.section(&format!(
            "{} generator{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for task in &self.tasks {
            out.list_item(&format!(
                "{} ({}) -> {}",
                task.name, task.backend, task.output_dir
            ));
        }
    }
}
