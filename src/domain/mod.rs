// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits describing what a fold split
// IS, independent of how files are found or written.
//
// Rules for this layer:
//   - NO file I/O
//   - NO randomness
//   - Only plain structs and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The ordered set of files eligible for sampling
pub mod file_set;

// One (training, validation) partition and the full split
pub mod fold;

// Core abstractions (traits) that other layers implement
pub mod traits;
