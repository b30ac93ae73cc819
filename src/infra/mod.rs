// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Output side of the tool:
//
//   manifest.rs — writes one fold-{i}-paths.txt per fold
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Fold manifest writer
pub mod manifest;
