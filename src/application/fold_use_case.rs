// ============================================================
// Layer 2 — FoldUseCase
// ============================================================
// Runs one fold-generation pass, in order:
//
//   Step 1: Collect eligible files    (Layer 4 - data)
//   Step 2: Sample the folds          (Layer 4 - data)
//   Step 3: Write the fold manifests  (Layer 6 - infra)
//
// Any failure aborts the run. Manifests written before a
// failing write are left in place.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::data::{collector::DirectoryCollector, sampler::FoldSampler};
use crate::domain::fold::Split;
use crate::domain::traits::{FileSource, SplitSink};
use crate::infra::manifest::ManifestWriter;

// ─── Fold Configuration ──────────────────────────────────────────────────────
// Everything one run needs. Built from CLI args in Layer 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldConfig {
    pub source_dir:      PathBuf,
    pub output_dir:      PathBuf,
    pub folds:           usize,
    pub validation_size: usize,
    pub suffix:          Option<String>,
    pub seed:            Option<u64>,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            source_dir:      PathBuf::from("."),
            output_dir:      PathBuf::from("."),
            folds:           1,
            validation_size: 0,
            suffix:          None,
            seed:            None,
        }
    }
}

// ─── FoldUseCase ──────────────────────────────────────────────────────────────
pub struct FoldUseCase {
    config: FoldConfig,
}

impl FoldUseCase {
    pub fn new(config: FoldConfig) -> Self {
        Self { config }
    }

    /// Collect, sample and write using the file system.
    pub fn execute(&self) -> Result<Split> {
        let cfg = &self.config;

        tracing::info!(
            "Building {} fold(s) with {} validation file(s) each from '{}'",
            cfg.folds,
            cfg.validation_size,
            cfg.source_dir.display()
        );

        let collector = DirectoryCollector::new(&cfg.source_dir, cfg.suffix.clone());
        let writer    = ManifestWriter::new(&cfg.output_dir);
        self.run_with(&collector, &writer)
    }

    /// Run the pipeline against any source and sink.
    pub fn run_with(&self, source: &dyn FileSource, sink: &dyn SplitSink) -> Result<Split> {
        let cfg = &self.config;

        // ── Step 1: Collect ──────────────────────────────────────────────────
        let files = source.collect()?;
        if files.is_empty() {
            tracing::warn!("No eligible files found");
        }

        // ── Step 2: Sample ───────────────────────────────────────────────────
        let sampler = FoldSampler::new(cfg.folds, cfg.validation_size, cfg.seed);
        let split = sampler
            .sample(&files)
            .context("Cannot sample validation folds")?;

        // ── Step 3: Write ────────────────────────────────────────────────────
        sink.write(&split)?;

        Ok(split)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::error::SamplingError;
    use crate::domain::file_set::EligibleFileSet;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    struct FixedSource(Vec<PathBuf>);

    impl FileSource for FixedSource {
        fn collect(&self) -> Result<EligibleFileSet> {
            Ok(EligibleFileSet::new(self.0.clone()))
        }
    }

    #[derive(Default)]
    struct RecordingSink(RefCell<Vec<Split>>);

    impl SplitSink for RecordingSink {
        fn write(&self, split: &Split) -> Result<()> {
            self.0.borrow_mut().push(split.clone());
            Ok(())
        }
    }

    fn names(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("{i}.dat"))).collect()
    }

    #[test]
    fn test_pipeline_hands_split_to_sink() {
        let use_case = FoldUseCase::new(FoldConfig {
            folds: 3,
            validation_size: 2,
            seed: Some(1),
            ..FoldConfig::default()
        });
        let sink = RecordingSink::default();

        let split = use_case.run_with(&FixedSource(names(9)), &sink).unwrap();

        assert_eq!(split.len(), 3);
        assert_eq!(sink.0.borrow().as_slice(), &[split]);
    }

    #[test]
    fn test_sampling_failure_writes_nothing() {
        let use_case = FoldUseCase::new(FoldConfig {
            folds: 2,
            validation_size: 3,
            ..FoldConfig::default()
        });
        let sink = RecordingSink::default();

        let err = use_case.run_with(&FixedSource(names(5)), &sink).unwrap_err();

        assert_eq!(
            err.downcast_ref::<SamplingError>(),
            Some(&SamplingError::InsufficientFiles {
                requested: 6,
                available: 5
            })
        );
        assert!(sink.0.borrow().is_empty());
    }

    #[test]
    fn test_execute_end_to_end() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        for i in 0..10 {
            fs::write(src.path().join(format!("sample_{i}.wav")), b"x").unwrap();
        }
        fs::write(src.path().join("notes.md"), b"x").unwrap();

        let use_case = FoldUseCase::new(FoldConfig {
            source_dir: src.path().to_path_buf(),
            output_dir: out.path().to_path_buf(),
            folds: 2,
            validation_size: 3,
            suffix: Some("wav".to_string()),
            seed: Some(99),
        });
        let split = use_case.execute().unwrap();

        for (i, fold) in split.iter().enumerate() {
            assert_eq!(fold.training.len(), 7);
            assert_eq!(fold.validation.len(), 3);

            let text = fs::read_to_string(out.path().join(format!("fold-{i}-paths.txt"))).unwrap();
            assert!(text.starts_with("training\n"));
            assert!(text.contains("\n\nvalidation\n"));
            assert!(!text.contains("notes.md"));
            assert_eq!(text.lines().filter(|l| l.starts_with("- ")).count(), 10);
        }
    }

    #[test]
    fn test_execute_missing_source_dir() {
        let out = TempDir::new().unwrap();
        let use_case = FoldUseCase::new(FoldConfig {
            source_dir: out.path().join("nope"),
            output_dir: out.path().to_path_buf(),
            ..FoldConfig::default()
        });
        assert!(use_case.execute().is_err());
        assert!(!out.path().join("fold-0-paths.txt").exists());
    }
}
