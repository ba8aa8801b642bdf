//! Command-line arguments for the `ccdiff` binary, via clap's derive API.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "ccdiff",
    version,
    about = "Differential test harness: compares a C compiler's codegen against a reference compiler by exit code."
)]
pub struct CcdiffArgs {
    /// Directory-selection pattern (`*` and `?` wildcards over immediate
    /// subdirectory names). Defaults to every immediate subdirectory.
    pub pattern: Option<String>,
}
