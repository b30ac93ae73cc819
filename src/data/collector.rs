// ============================================================
// Layer 4 — Directory Collector
// ============================================================
// Lists the DIRECT entries of a directory (no recursion),
// keeps regular files only, then applies the optional
// extension filter.
//
// Suffix handling:
//   "txt"  → ".txt"
//   ".txt" → ".txt"
//   ""     → no filter
//
// A file's extension is everything after the LAST dot of its
// name, so "a.tar.gz" has extension ".gz" and dotfiles such as
// ".bashrc" have none.
//
// The output keeps directory-iteration order. It is not sorted.
//
// Reference: Rust Book §9 (Error Handling)
//            std::fs::read_dir documentation

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::file_set::EligibleFileSet;
use crate::domain::traits::FileSource;

/// Collects eligible files from a single directory.
/// Implements the FileSource trait from Layer 3.
#[derive(Debug, Clone)]
pub struct DirectoryCollector {
    /// Directory whose direct children are scanned
    dir: PathBuf,

    /// Normalized extension filter, always with a leading '.'
    suffix: Option<String>,
}

impl DirectoryCollector {
    /// Create a collector for `dir`, optionally filtering by `suffix`.
    pub fn new(dir: impl Into<PathBuf>, suffix: Option<String>) -> Self {
        Self {
            dir: dir.into(),
            suffix: normalize_suffix(suffix.as_deref()),
        }
    }

    /// The normalized suffix filter, if one is active
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    fn matches_suffix(&self, path: &Path) -> bool {
        match &self.suffix {
            None => true,
            Some(wanted) => file_suffix(path).as_deref() == Some(wanted.as_str()),
        }
    }
}

impl FileSource for DirectoryCollector {
    fn collect(&self) -> Result<EligibleFileSet> {
        let mut files = Vec::new();

        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir.display()))?
        {
            let entry = entry
                .with_context(|| format!("Cannot list entry in '{}'", self.dir.display()))?;
            let path = entry.path();

            // is_file() follows symlinks, so a link to a regular file counts
            if !path.is_file() {
                tracing::trace!("Skipping non-file entry '{}'", path.display());
                continue;
            }

            if !self.matches_suffix(&path) {
                tracing::trace!("Skipping '{}': suffix does not match", path.display());
                continue;
            }

            files.push(path);
        }

        tracing::info!(
            "Collected {} eligible files from '{}'{}",
            files.len(),
            self.dir.display(),
            self.suffix()
                .map(|s| format!(" (suffix '{s}')"))
                .unwrap_or_default(),
        );

        Ok(EligibleFileSet::new(files))
    }
}

/// Normalize a user-supplied suffix to carry a leading '.'.
/// Empty input means "no filter".
pub fn normalize_suffix(suffix: Option<&str>) -> Option<String> {
    match suffix {
        None | Some("") => None,
        Some(s) if s.starts_with('.') => Some(s.to_string()),
        Some(s) => Some(format!(".{s}")),
    }
}

/// Extension of `path` including the leading '.', or None.
fn file_suffix(path: &Path) -> Option<String> {
    path.extension()
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}
