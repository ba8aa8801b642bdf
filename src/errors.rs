//! Unrecoverable environment errors.
//!
//! A failing compiler, linker, or test binary is never an error here: those
//! are ordinary [`StageResult`](crate::pipeline::StageResult) outcomes. This
//! type covers only the conditions that prevent the harness from running at
//! all, such as an unreadable test directory.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    /// The selection pattern or a suite directory could not be read.
    #[error("failed to read directory '{}'", path.display())]
    #[diagnostic(
        code(ccdiff::discovery),
        help("check that the path exists and is readable")
    )]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The scratch directory for build artifacts could not be created.
    #[error("failed to create scratch directory '{}'", path.display())]
    #[diagnostic(code(ccdiff::scratch))]
    Scratch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
