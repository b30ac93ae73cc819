// ============================================================
// Layer 3 — EligibleFileSet Domain Type
// ============================================================
// The files a run samples from, in the order the directory
// listing produced them. The order is platform-dependent and
// NOT sorted; sampling refers to files by their position here.

use std::path::PathBuf;

/// Ordered sequence of file paths eligible for fold sampling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EligibleFileSet {
    files: Vec<PathBuf>,
}

impl EligibleFileSet {
    /// Create a set from paths already in collection order
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.files
    }
}

impl From<Vec<PathBuf>> for EligibleFileSet {
    fn from(files: Vec<PathBuf>) -> Self {
        Self::new(files)
    }
}
