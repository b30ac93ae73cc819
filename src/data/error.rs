use thiserror::Error;

/// Invalid-argument errors raised before any random draw happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SamplingError {
    #[error("fold count must be at least 1")]
    NoFolds,
    #[error(
        "combined set size (N={requested}) of validation folds exceeds total number of eligible files (N={available})"
    )]
    InsufficientFiles { requested: usize, available: usize },
    #[error("combined validation size overflows: {folds} folds x {validation_size} files")]
    Overflow { folds: usize, validation_size: usize },
}
