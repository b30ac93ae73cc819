// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to the file system only through
// these two traits:
//   - DirectoryCollector implements FileSource
//   - ManifestWriter     implements SplitSink
//
// Tests can swap in in-memory implementations without touching
// the use case.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::file_set::EligibleFileSet;
use crate::domain::fold::Split;

// ─── FileSource ───────────────────────────────────────────────────────────────
/// Any component that can produce the files eligible for sampling.
pub trait FileSource {
    /// Collect eligible files in source order.
    fn collect(&self) -> Result<EligibleFileSet>;
}

// ─── SplitSink ────────────────────────────────────────────────────────────────
/// Any component that can persist a finished split.
pub trait SplitSink {
    /// Persist every fold of `split`, replacing earlier output.
    fn write(&self, split: &Split) -> Result<()>;
}
