//! Clean command report data structures.

use super::output::{Output, Report};

/// Result of cleaning one output directory.
#[derive(Debug)]
pub struct CleanedDir {
    pub name: String,
    pub output_dir: String,
    pub has_manifest: bool,
    /// Deleted files, relative to the output directory.
    pub deleted: Vec<String>,
    /// Manifest entries that were left alone.
    pub skipped: Vec<String>,
}

/// Report data from removing generated files.
#[derive(Debug)]
pub struct CleanReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    pub dirs: Vec<CleanedDir>,
}

impl CleanReport {
    /// Whether any files were deleted (or would be deleted in dry run).
    pub fn has_deletions(&self) -> bool {
        self.dirs.iter().any(|d| !d.deleted.is_empty())
    }
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        for dir in &self.dirs {
            for entry in &dir.skipped {
                out.warning(&format!("{}: kept manifest entry '{}'", dir.name, entry));
            }
        }

        if !self.has_deletions() {
            out.preformatted("No generated files found.");
            return;
        }

        let verb = if self.dry_run { "Would delete" } else { "Deleted" };
        for dir in self.dirs.iter().filter(|d| !d.deleted.is_empty()) {
            out.section(&format!("{} in {} ({})", verb, dir.output_dir, dir.name));
            for path in &dir.deleted {
                out.removed_item(path);
            }
        }

        let without_manifest: Vec<&str> = self
            .dirs
            .iter()
            .filter(|d| !d.has_manifest)
            .map(|d| d.name.as_str())
            .collect();
        if !without_manifest.is_empty() {
            out.newline();
            out.preformatted(&format!(
                "Never generated: {}",
                without_manifest.join(", ")
            ));
        }
    }
}
