// ============================================================
// Layer 4 — Fold Sampler
// ============================================================
// Partitions the eligible files into K (training, validation)
// folds.
//
// Algorithm:
//   1. Draw folds × validation_size indices from [0, N) in ONE
//      uniform draw without replacement.
//   2. Slice the draw into `folds` contiguous chunks of
//      `validation_size`; chunk i is fold i's validation set.
//   3. Fold i's training set is every index NOT in chunk i.
//
// Because all chunks come from a single draw, the validation
// sets of different folds never overlap. Training sets DO
// contain files that other folds hold out.
//
// Each fold's paths are emitted in ascending eligible-set
// order, so the same seed always yields byte-identical output.
//
// Uses rand::seq::index::sample, which returns the drawn
// indices in random order.
//
// Reference: rand crate documentation (seq::index)

use rand::{rngs::StdRng, seq::index, Rng, SeedableRng};
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::data::error::SamplingError;
use crate::domain::file_set::EligibleFileSet;
use crate::domain::fold::{Fold, Split};

/// Sampling parameters for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldSampler {
    /// Number of folds to produce (must be ≥ 1)
    pub folds: usize,

    /// Files held out for validation in each fold
    pub validation_size: usize,

    /// Fixed RNG seed; None draws from the thread-local RNG
    pub seed: Option<u64>,
}

impl FoldSampler {
    pub fn new(folds: usize, validation_size: usize, seed: Option<u64>) -> Self {
        Self {
            folds,
            validation_size,
            seed,
        }
    }

    /// Sample a split using the configured random source.
    pub fn sample(&self, files: &EligibleFileSet) -> Result<Split, SamplingError> {
        match self.seed {
            Some(seed) => {
                tracing::debug!("Sampling with fixed seed {}", seed);
                let mut rng = StdRng::seed_from_u64(seed);
                sample_folds(files, self.folds, self.validation_size, &mut rng)
            }
            None => {
                let mut rng = rand::thread_rng();
                sample_folds(files, self.folds, self.validation_size, &mut rng)
            }
        }
    }
}

/// Randomly partition `files` into `folds` (training, validation) pairs.
///
/// # Errors
/// Returns [`SamplingError`] without drawing anything when `folds` is
/// zero or there are fewer than `folds * validation_size` files.
pub fn sample_folds<R: Rng + ?Sized>(
    files: &EligibleFileSet,
    folds: usize,
    validation_size: usize,
    rng: &mut R,
) -> Result<Split, SamplingError> {
    if folds == 0 {
        return Err(SamplingError::NoFolds);
    }

    let requested = folds
        .checked_mul(validation_size)
        .ok_or(SamplingError::Overflow {
            folds,
            validation_size,
        })?;

    let total = files.len();
    if total < requested {
        return Err(SamplingError::InsufficientFiles {
            requested,
            available: total,
        });
    }

    let drawn: Vec<usize> = if requested == 0 {
        Vec::new()
    } else {
        index::sample(rng, total, requested).into_vec()
    };

    let built: Vec<Fold> = (0..folds)
        .map(|i| {
            let held_out: BTreeSet<usize> = drawn[i * validation_size..(i + 1) * validation_size]
                .iter()
                .copied()
                .collect();

            let training = paths_for(files, (0..total).filter(|idx| !held_out.contains(idx)));
            let validation = paths_for(files, held_out.iter().copied());

            tracing::debug!(
                "Fold {}: {} training, {} validation",
                i,
                training.len(),
                validation.len(),
            );

            Fold::new(training, validation)
        })
        .collect();

    Ok(Split::new(built))
}

fn paths_for(files: &EligibleFileSet, indices: impl Iterator<Item = usize>) -> Vec<PathBuf> {
    let all = files.as_slice();
    indices.map(|idx| all[idx].clone()).collect()
}
