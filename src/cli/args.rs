//! Defines the command-line arguments for the sift CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::Parser;
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "sift",
    version,
    about = "Compile item filter rule sources into flat filter files."
)]
pub struct SiftArgs {
    /// The rule source file to compile.
    #[arg(required = true)]
    pub input: PathBuf,

    /// Where to write the compiled filter; defaults to standard output.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
