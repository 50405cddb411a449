//! Removal of stale generated output.
//!
//! The backend records every file it produced in [`MANIFEST_PATH`]. Before the
//! next run those files are deleted so that output belonging to removed
//! schemas or operations does not linger. Files the backend never listed are
//! left alone.

use std::{
    io,
    path::{Component, Path, PathBuf},
};

use crate::{Error, Result, backend::openapi_generator};

/// Manifest of generated files, relative to the output directory.
pub const MANIFEST_PATH: &str = ".openapi-generator/FILES";

/// What a reconciliation did (or would do).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// The manifest that was read, `None` when there was none.
    pub manifest: Option<PathBuf>,
    /// Number of non-empty manifest entries.
    pub candidates: usize,
    /// Files removed, or to be removed when planning.
    pub deleted: Vec<PathBuf>,
    /// Entries that no longer exist on disk.
    pub missing: Vec<PathBuf>,
    /// Entries refused because they point outside the output directory, at a
    /// directory or at bookkeeping files.
    pub skipped: Vec<String>,
}

impl ReconcileReport {
    pub fn has_manifest(&self) -> bool {
        self.manifest.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty()
    }
}

/// Delete every file listed in the manifest of `output_dir`.
///
/// A missing manifest is not an error. Deletion stops at the first failure;
/// files removed before it stay removed.
pub fn reconcile(output_dir: &Path) -> Result<ReconcileReport> {
    let report = plan(output_dir)?;

    if report.has_manifest() {
        tracing::debug!(
            dir = %output_dir.display(),
            candidates = report.candidates,
            "reconciling generated output"
        );
    }

    for path in &report.deleted {
        match std::fs::remove_file(path) {
            Ok(()) => tracing::trace!(path = %path.display(), "deleted stale file"),
            // vanished between planning and removal
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(Error::DeleteFile {
                    path: path.clone(),
                    source,
                });
            }
        }
    }

    if report.has_manifest() {
        tracing::debug!(
            dir = %output_dir.display(),
            deleted = report.deleted.len(),
            missing = report.missing.len(),
            "reconciled generated output"
        );
    }
    Ok(report)
}

/// Work out what [`reconcile`] would delete, without deleting anything.
pub fn plan(output_dir: &Path) -> Result<ReconcileReport> {
    let manifest = output_dir.join(MANIFEST_PATH);
    let content = match std::fs::read_to_string(&manifest) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(dir = %output_dir.display(), "no generated files manifest");
            return Ok(ReconcileReport::default());
        }
        Err(source) => {
            return Err(Error::ReadManifest {
                path: manifest,
                source,
            });
        }
    };

    let mut report = ReconcileReport {
        manifest: Some(manifest),
        ..Default::default()
    };

    for line in content.split('\n') {
        let entry = line.trim_end_matches('\r');
        if entry.is_empty() {
            continue;
        }
        report.candidates += 1;

        let Some(relative) = entry_path(entry) else {
            tracing::warn!(entry, "ignoring manifest entry outside the output directory");
            report.skipped.push(entry.to_string());
            continue;
        };
        if is_protected(&relative) {
            tracing::debug!(entry, "keeping bookkeeping file");
            report.skipped.push(entry.to_string());
            continue;
        }

        let path = output_dir.join(relative);
        // symlink_metadata so a dangling link still counts as present
        match path.symlink_metadata() {
            Ok(meta) if meta.is_dir() => {
                tracing::warn!(entry, "ignoring manifest entry naming a directory");
                report.skipped.push(entry.to_string());
            }
            Ok(_) => report.deleted.push(path),
            Err(_) => report.missing.push(path),
        }
    }

    Ok(report)
}

/// The entry as a normalized path confined to the output directory.
///
/// `.` components are dropped; anything else but plain names is refused.
fn entry_path(entry: &str) -> Option<PathBuf> {
    let mut path = PathBuf::new();
    for component in Path::new(entry).components() {
        match component {
            Component::Normal(name) => path.push(name),
            Component::CurDir => {}
            _ => return None,
        }
    }
    (!path.as_os_str().is_empty()).then_some(path)
}

fn is_protected(path: &Path) -> bool {
    path == Path::new(MANIFEST_PATH)
        || path == Path::new(openapi_generator::IGNORE_FILE_NAME)
        || path == Path::new(openapi_generator::CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write(dir: &Path, path: &str, content: &str) {
        let path = dir.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_deletes_listed_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), MANIFEST_PATH, "a.py\nb.py\n\nc.py\n");
        write(dir.path(), "a.py", "a");
        write(dir.path(), "b.py", "b");
        write(dir.path(), "keep.py", "mine");

        let report = reconcile(dir.path()).unwrap();

        assert_eq!(report.candidates, 3);
        assert_eq!(
            report.deleted,
            vec![dir.path().join("a.py"), dir.path().join("b.py")]
        );
        assert_eq!(report.missing, vec![dir.path().join("c.py")]);
        assert!(!dir.path().join("a.py").exists());
        assert!(!dir.path().join("b.py").exists());
        assert!(dir.path().join("keep.py").exists());
        assert!(dir.path().join(MANIFEST_PATH).exists());
    }

    #[test]
    fn test_missing_manifest_is_noop() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.py", "a");

        let report = reconcile(dir.path()).unwrap();

        assert_eq!(report, ReconcileReport::default());
        assert!(dir.path().join("a.py").exists());
    }

    #[test]
    fn test_missing_output_directory_is_noop() {
        let dir = TempDir::new().unwrap();

        let report = reconcile(&dir.path().join("python")).unwrap();

        assert!(!report.has_manifest());
    }

    #[test]
    fn test_nested_entries_and_crlf() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), MANIFEST_PATH, "acme/api.py\r\nacme/models/pet.py\r\n");
        write(dir.path(), "acme/api.py", "");
        write(dir.path(), "acme/models/pet.py", "");

        let report = reconcile(dir.path()).unwrap();

        assert_eq!(report.deleted.len(), 2);
        assert!(dir.path().join("acme/models").is_dir());
        assert!(!dir.path().join("acme/models/pet.py").exists());
    }

    #[test]
    fn test_refuses_entries_outside_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("python");
        write(&output, MANIFEST_PATH, "../secret.txt\n/etc/hosts\nok.py\n");
        write(dir.path(), "secret.txt", "keep");
        write(&output, "ok.py", "");

        let report = reconcile(&output).unwrap();

        assert_eq!(report.skipped, vec!["../secret.txt", "/etc/hosts"]);
        assert_eq!(report.deleted, vec![output.join("ok.py")]);
        assert!(dir.path().join("secret.txt").exists());
    }

    #[test]
    fn test_keeps_bookkeeping_files() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            MANIFEST_PATH,
            ".openapi-generator-ignore\n.openapi-generator/FILES\nsetup.py\n",
        );
        write(dir.path(), ".openapi-generator-ignore", "docs/*\n");
        write(dir.path(), "setup.py", "");

        let report = reconcile(dir.path()).unwrap();

        assert_eq!(report.deleted, vec![dir.path().join("setup.py")]);
        assert!(dir.path().join(".openapi-generator-ignore").exists());
        assert!(dir.path().join(MANIFEST_PATH).exists());
    }

    #[test]
    fn test_dot_prefixed_manifest_entry_is_kept() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), MANIFEST_PATH, "./.openapi-generator/FILES\n./a.py\n");
        write(dir.path(), "a.py", "a");

        let report = reconcile(dir.path()).unwrap();

        assert_eq!(report.skipped, vec!["./.openapi-generator/FILES"]);
        assert_eq!(report.deleted, vec![dir.path().join("a.py")]);
        assert!(dir.path().join(MANIFEST_PATH).exists());
    }

    #[test]
    fn test_directory_entries_are_skipped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), MANIFEST_PATH, "docs\na.py\n.\n");
        write(dir.path(), "docs/Pet.md", "");
        write(dir.path(), "a.py", "a");

        let report = reconcile(dir.path()).unwrap();

        assert_eq!(report.skipped, vec!["docs", "."]);
        assert_eq!(report.deleted, vec![dir.path().join("a.py")]);
        assert!(dir.path().join("docs/Pet.md").exists());
    }

    #[test]
    fn test_plan_does_not_delete() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), MANIFEST_PATH, "a.py\n");
        write(dir.path(), "a.py", "a");

        let report = plan(dir.path()).unwrap();

        assert_eq!(report.deleted, vec![dir.path().join("a.py")]);
        assert!(dir.path().join("a.py").exists());
    }

    #[test]
    fn test_unreadable_manifest_is_an_error() {
        let dir = TempDir::new().unwrap();
        // a directory where the manifest should be
        fs::create_dir_all(dir.path().join(MANIFEST_PATH)).unwrap();

        let err = reconcile(dir.path()).unwrap_err();

        assert!(matches!(err, Error::ReadManifest { .. }));
    }
}
