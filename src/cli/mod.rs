//! The sift command-line interface.
//!
//! A thin wrapper around the core's single entry point: read the source
//! document, run [`compile`](crate::compile), and write the result to the
//! requested destination or standard output. Any failure surfaces as a
//! rendered diagnostic and a non-zero exit status.

use std::fs;

use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::args::SiftArgs;
use crate::compiler::compile;

pub mod args;

/// The main entry point for the CLI.
pub fn run() -> Result<()> {
    let args = SiftArgs::parse();

    let source = fs::read_to_string(&args.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", args.input.display()))?;

    let compiled = compile(&source)?;

    match &args.output {
        Some(path) => fs::write(path, &compiled)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to write {}", path.display()))?,
        None => println!("{compiled}"),
    }

    Ok(())
}
