// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses command line arguments with clap and hands a
// FoldConfig to Layer 2. Printing the confirmation line is
// the only output this layer produces itself.
//
// Reference: Rust Book §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::FoldArgs;
use std::path::Path;

use crate::application::fold_use_case::FoldUseCase;

#[derive(Parser, Debug)]
#[command(
    name = "foldmake",
    version,
    about = "Partition a directory of files into randomized train/validation folds."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: FoldArgs,
}

impl Cli {
    /// Run the fold pipeline and report where the manifests went.
    pub fn run(self) -> Result<()> {
        let save_dir = self.args.savedirectory.clone();

        tracing::debug!("Parsed arguments: {:?}", self.args);

        FoldUseCase::new(self.args.into()).execute()?;

        println!("{}", confirmation_message(&save_dir));
        Ok(())
    }
}

/// Line printed after every fold manifest has been written
fn confirmation_message(save_dir: &Path) -> String {
    format!("Saved fold files to \"{}\"", save_dir.display())
}
