//! Atomic report writer.
//!
//! 1. Compare the rendered content with the existing file; skip if identical.
//! 2. Write to `<path>.rlreport.tmp`.
//! 3. Rename to the final path (atomic on POSIX).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Outcome of writing the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped — existing content is identical.
    Unchanged { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

fn tmp_path(path: &Path) -> PathBuf {
    PathBuf::from(format!("{}.rlreport.tmp", path.display()))
}

/// Current content of `path`, or empty text when the file does not exist.
/// Every other read failure is returned.
pub fn read_existing_or_empty(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err).with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Write `content` to `path` unless it already holds exactly that content.
pub fn atomic_write(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult> {
    if path.exists() && read_existing_or_empty(path)? == content {
        tracing::debug!("unchanged: {}", path.display());
        return Ok(WriteResult::Unchanged {
            path: path.to_path_buf(),
        });
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let tmp = tmp_path(path);
    std::fs::write(&tmp, content).with_context(|| format!("failed to write {}", tmp.display()))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("failed to write {}", path.display()));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_new_file_and_leaves_no_tmp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("result.adoc");
        let res = atomic_write(&path, "hello", false).unwrap();
        assert_eq!(res, WriteResult::Written { path: path.clone() });
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn identical_content_is_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("result.adoc");
        std::fs::write(&path, "same").unwrap();
        let res = atomic_write(&path, "same", false).unwrap();
        assert_eq!(res, WriteResult::Unchanged { path });
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_existing_or_empty(&dir.path().join("absent.adoc")).unwrap(), "");
    }

    #[test]
    fn unreadable_existing_output_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("result.adoc");
        std::fs::create_dir(&path).unwrap();
        assert!(read_existing_or_empty(&path).is_err());
        assert!(atomic_write(&path, "new", true).is_err());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("result.adoc");
        let res = atomic_write(&path, "new", true).unwrap();
        assert_eq!(res, WriteResult::WouldWrite { path: path.clone() });
        assert!(!path.exists());
    }
}
