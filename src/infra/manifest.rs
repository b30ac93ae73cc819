// ============================================================
// Layer 6 — Fold Manifest Writer
// ============================================================
// Writes one plain-text manifest per fold into the output
// directory:
//
//   <savedirectory>/
//     fold-0-paths.txt
//     fold-1-paths.txt
//     ...
//
// Example manifest:
//   training
//   - data/a.txt
//   - data/b.txt
//
//   validation
//   - data/c.txt
//
// Existing manifests with the same name are overwritten
// (File::create truncates), so re-running with the same split
// reproduces identical files. The output directory itself
// is NOT created here.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::domain::fold::{Fold, Split};
use crate::domain::traits::SplitSink;

/// Writes `fold-{i}-paths.txt` files for a split.
#[derive(Debug, Clone)]
pub struct ManifestWriter {
    /// Directory receiving the manifests; must already exist
    dir: PathBuf,
}

impl ManifestWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of the manifest for fold `index`
    pub fn manifest_path(&self, index: usize) -> PathBuf {
        self.dir.join(fold_file_name(index))
    }
}

impl SplitSink for ManifestWriter {
    fn write(&self, split: &Split) -> Result<()> {
        if split.is_empty() {
            tracing::warn!("Split has no folds; nothing written to '{}'", self.dir.display());
            return Ok(());
        }

        for (i, fold) in split.iter().enumerate() {
            let path = self.manifest_path(i);
            write_manifest(&path, fold)
                .with_context(|| format!("Cannot write fold manifest '{}'", path.display()))?;
            tracing::debug!("Wrote '{}'", path.display());
        }

        tracing::info!(
            "Wrote {} fold manifests to '{}'",
            split.len(),
            self.dir.display()
        );
        Ok(())
    }
}

/// File name of the manifest for fold `index` (0-based)
pub fn fold_file_name(index: usize) -> String {
    format!("fold-{index}-paths.txt")
}

fn write_manifest(path: &Path, fold: &Fold) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    render_manifest(&mut out, fold)?;
    out.flush()?;
    Ok(())
}

/// Render one fold in manifest format into any writer.
///
/// Paths go through `Path::display`, so non-UTF-8 bytes become U+FFFD.
pub fn render_manifest<W: Write>(out: &mut W, fold: &Fold) -> std::io::Result<()> {
    writeln!(out, "training")?;
    for p in &fold.training {
        writeln!(out, "- {}", p.display())?;
    }

    writeln!(out)?;

    writeln!(out, "validation")?;
    for p in &fold.validation {
        writeln!(out, "- {}", p.display())?;
    }
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn single_fold_split() -> Split {
        Split::new(vec![Fold::new(
            vec![PathBuf::from("a"), PathBuf::from("b")],
            vec![PathBuf::from("c")],
        )])
    }

    #[test]
    fn test_fold_file_name() {
        assert_eq!(fold_file_name(0), "fold-0-paths.txt");
        assert_eq!(fold_file_name(12), "fold-12-paths.txt");
    }

    #[test]
    fn test_exact_manifest_format() {
        let tmp = TempDir::new().unwrap();
        ManifestWriter::new(tmp.path())
            .write(&single_fold_split())
            .unwrap();

        let text = fs::read_to_string(tmp.path().join("fold-0-paths.txt")).unwrap();
        assert_eq!(text, "training\n- a\n- b\n\nvalidation\n- c\n");
    }

    #[test]
    fn test_empty_sections_keep_headers() {
        let mut buf = Vec::new();
        render_manifest(&mut buf, &Fold::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "training\n\nvalidation\n");
    }

    #[test]
    fn test_empty_split_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        ManifestWriter::new(tmp.path()).write(&Split::default()).unwrap();
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_one_file_per_fold() {
        let tmp = TempDir::new().unwrap();
        let split = Split::new(vec![
            Fold::new(vec![PathBuf::from("a")], vec![PathBuf::from("b")]),
            Fold::new(vec![PathBuf::from("b")], vec![PathBuf::from("a")]),
        ]);
        ManifestWriter::new(tmp.path()).write(&split).unwrap();

        let second = fs::read_to_string(tmp.path().join("fold-1-paths.txt")).unwrap();
        assert_eq!(second, "training\n- b\n\nvalidation\n- a\n");
        assert!(!tmp.path().join("fold-2-paths.txt").exists());
    }

    #[test]
    fn test_rewrite_overwrites_without_accumulating() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("fold-0-paths.txt");
        fs::write(&path, "stale content that is much longer than the manifest\n").unwrap();

        let writer = ManifestWriter::new(tmp.path());
        writer.write(&single_fold_split()).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        writer.write(&single_fold_split()).unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, "training\n- a\n- b\n\nvalidation\n- c\n");
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_output_directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let writer = ManifestWriter::new(tmp.path().join("missing"));
        let err = writer.write(&single_fold_split()).unwrap_err();
        assert!(err.to_string().contains("Cannot write fold manifest"));
    }
}
