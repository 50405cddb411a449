//! Generate command report data structures.

use eyre::Result;

use super::output::{Output, Report};

/// One executed generator.
#[derive(Debug)]
pub struct TaskLine {
    pub name: String,
    pub output_dir: String,
    /// Error chain when the generator failed.
    pub error: Option<String>,
}

/// What a dry run would do for one generator.
#[derive(Debug)]
pub struct PreviewEntry {
    pub name: String,
    pub output_dir: String,
    /// Command line of the backend.
    pub command: String,
    /// Files reconciliation would remove first.
    pub stale_files: Vec<String>,
}

/// Report data from the generate command.
#[derive(Debug)]
pub enum GenerateReport {
    /// No generator was selected.
    Nothing,
    Run(Vec<TaskLine>),
    Preview(Vec<PreviewEntry>),
}

impl GenerateReport {
    pub fn failed(&self) -> Vec<&str> {
        match self {
            GenerateReport::Run(lines) => lines
                .iter()
                .filter(|l| l.error.is_some())
                .map(|l| l.name.as_str())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Fail when any generator failed.
    pub fn into_result(self) -> Result<()> {
        let failed: Vec<String> = self.failed().into_iter().map(str::to_string).collect();
        if failed.is_empty() {
            Ok(())
        } else {
            Err(primelib_codegen::Error::TasksFailed { names: failed }.into())
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            GenerateReport::Nothing => {
                out.warning("no presets or generators are enabled, nothing to generate");
            }
            GenerateReport::Run(lines) => {
                for line in lines {
                    let text = format!("{} -> {}", line.name, line.output_dir);
                    match &line.error {
                        None => out.success(&text),
                        Some(err) => {
                            out.failure(&text);
                            out.key_value_indented("error", err);
                        }
                    }
                }
                let failed = self.failed().len();
                out.newline();
                out.preformatted(&format!(
                    "{} generated, {} failed",
                    lines.len() - failed,
                    failed
                ));
            }
            GenerateReport::Preview(entries) => {
                for entry in entries {
                    out.section(&entry.name);
                    out.key_value_indented("output", &entry.output_dir);
                    out.key_value_indented("command", &entry.command);
                    if entry.stale_files.is_empty() {
                        out.key_value_indented("stale files", "none");
                    } else {
                        out.key_value_indented("stale files", &entry.stale_files.len().to_string());
                        for path in &entry.stale_files {
                            out.removed_item(path);
                        }
                    }
                    out.newline();
                }
            }
        }
    }
}
