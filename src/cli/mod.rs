//! The ccdiff command-line interface.
//!
//! Wires the default toolchain, the shell command runner, and the stdout
//! reporter together, and turns the grand total of failures into the
//! process exit status: 0 on a clean run, 1 when any test failed, 2 on an
//! unrecoverable environment error.

use std::path::Path;
use std::process;

use clap::Parser;

use crate::cli::args::CcdiffArgs;
use crate::driver;
use crate::exec::ShellRunner;
use crate::toolchain::Toolchain;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = CcdiffArgs::parse();
    let toolchain = Toolchain::default();
    let mut reporter = output::Reporter::stdout();

    match driver::run(
        args.pattern.as_deref(),
        Path::new("."),
        &toolchain,
        &ShellRunner,
        &mut reporter,
    ) {
        Ok(0) => {}
        Ok(_) => process::exit(1),
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            process::exit(2);
        }
    }
}
