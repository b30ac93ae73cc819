// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// Positional:
//   directory      — where eligible files are collected
//   savedirectory  — where fold-{i}-paths.txt files go
//
// Options:
//   -f/--folds            number of folds (default 1, ≥ 1)
//   -s/--suffix           keep only files with this extension
//   -v/--validation-size  validation files per fold (required)
//   --seed                fixed RNG seed for reproducible folds
//
// clap rejects a missing --validation-size before any I/O.

use clap::{builder::RangedU64ValueParser, Args};
use std::path::PathBuf;

use crate::application::fold_use_case::FoldConfig;

/// All arguments for one fold-generation run
#[derive(Args, Debug, Clone)]
pub struct FoldArgs {
    /// Base directory. Eligible files are collected from here
    pub directory: PathBuf,

    /// Directory where the fold text files are saved.
    /// Be aware: preexisting fold files are overwritten!
    pub savedirectory: PathBuf,

    /// Number of folds
    #[arg(
        short = 'f',
        long,
        default_value_t = 1,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub folds: usize,

    /// Keep only files with the given suffix (leading '.' optional)
    #[arg(short = 's', long)]
    pub suffix: Option<String>,

    /// Number of validation files in each fold
    #[arg(short = 'v', long = "validation-size")]
    pub validation_size: usize,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,
}

/// The application layer never sees clap types.
impl From<FoldArgs> for FoldConfig {
    fn from(a: FoldArgs) -> Self {
        FoldConfig {
            source_dir:      a.directory,
            output_dir:      a.savedirectory,
            folds:           a.folds,
            validation_size: a.validation_size,
            suffix:          a.suffix,
            seed:            a.seed,
        }
    }
}
