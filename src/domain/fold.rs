// ============================================================
// Layer 3 — Fold and Split Domain Types
// ============================================================
// A Fold is one cross-validation iteration:
//   - validation: the files held out for this fold
//   - training:   every other eligible file
//
// Training is the COMPLEMENT of validation within the full
// eligible set, so it also contains files that are held out
// by other folds.
//
// A Split is the ordered list of folds produced by one run.
// Both are built once, never mutated, and dropped after the
// manifests are written.

use std::path::PathBuf;

/// One (training, validation) partition of the eligible files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fold {
    /// Files used for training in this fold
    pub training: Vec<PathBuf>,

    /// Files held out for validation in this fold
    pub validation: Vec<PathBuf>,
}

impl Fold {
    pub fn new(training: Vec<PathBuf>, validation: Vec<PathBuf>) -> Self {
        Self { training, validation }
    }
}

/// The ordered folds of one sampling run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Split {
    folds: Vec<Fold>,
}

impl Split {
    pub fn new(folds: Vec<Fold>) -> Self {
        Self { folds }
    }

    pub fn len(&self) -> usize {
        self.folds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folds.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fold> {
        self.folds.iter()
    }
}

impl<'a> IntoIterator for &'a Split {
    type Item = &'a Fold;
    type IntoIter = std::slice::Iter<'a, Fold>;

    fn into_iter(self) -> Self::IntoIter {
        self.folds.iter()
    }
}
