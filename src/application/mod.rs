// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the other layers for one run. No sampling math
// and no file formats live here, only workflow.
//
// Reference: Clean Architecture pattern

// The collect → sample → write workflow
pub mod fold_use_case;
