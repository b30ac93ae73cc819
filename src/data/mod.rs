// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the source directory and a finished
// Split:
//
//   source directory
//       │
//       ▼
//   DirectoryCollector  → lists eligible files
//       │
//       ▼
//   FoldSampler         → draws validation sets, builds folds
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Lists eligible files from a directory
pub mod collector;

/// Randomly partitions files into folds
pub mod sampler;

/// Invalid-argument errors raised by the sampler
pub mod error;
