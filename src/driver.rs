//! Top-level driver: selection-pattern expansion and the grand total.
//!
//! A run covers a set of suite directories. With no pattern, every
//! immediate subdirectory of the root is a suite; a pattern narrows the set
//! with `*`/`?` wildcards over directory names. A pattern matching nothing
//! means zero suites ran, which is a clean (successful) outcome.

use std::path::{Path, PathBuf};

use termcolor::WriteColor;
use walkdir::WalkDir;

use crate::cli::output::Reporter;
use crate::errors::HarnessError;
use crate::exec::CommandRunner;
use crate::pipeline::Pipeline;
use crate::suite::run_suite;
use crate::toolchain::Toolchain;

/// Expands the selection pattern into the sorted list of matching suite
/// directories directly under `root`. `None` selects every subdirectory.
pub fn expand_selection(
    pattern: Option<&str>,
    root: &Path,
) -> Result<Vec<PathBuf>, HarnessError> {
    // Selections written shell-style with a trailing slash, like
    // `arrays/`, mean the same directory.
    let pattern = pattern.map_or("*", |p| p.trim_end_matches('/'));

    let mut dirs = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| HarnessError::ReadDir {
            path: root.to_path_buf(),
            source: e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("walkdir error")),
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if wildcard_match(pattern, &name) {
            dirs.push(entry.path().to_path_buf());
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Runs every selected suite and returns the grand total of failures.
///
/// The process exit status is the caller's concern; this function only
/// reports the count. A positive count must map to a non-zero exit.
pub fn run<R: CommandRunner, W: WriteColor>(
    pattern: Option<&str>,
    root: &Path,
    toolchain: &Toolchain,
    runner: &R,
    reporter: &mut Reporter<W>,
) -> Result<usize, HarnessError> {
    let dirs = expand_selection(pattern, root)?;
    if dirs.is_empty() {
        return Ok(0);
    }

    toolchain.prepare_scratch()?;
    let pipeline = Pipeline::new(runner, toolchain);

    let mut grand_total = 0;
    for dir in &dirs {
        let tally = run_suite(dir, &pipeline, reporter)?;
        grand_total += tally.failed;
    }
    reporter.grand_total(grand_total);
    Ok(grand_total)
}

/// Glob-style match over a single path component: `*` matches any run of
/// characters, `?` exactly one.
fn wildcard_match(pattern: &str, text: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();
    let (mut pi, mut ti) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;
    while ti < t.len() {
        if pi < p.len() && (p[pi] == '?' || p[pi] == t[ti]) {
            pi += 1;
            ti += 1;
        } else if pi < p.len() && p[pi] == '*' {
            backtrack = Some((pi, ti));
            pi += 1;
        } else if let Some((star_pi, star_ti)) = backtrack {
            // Let the last `*` absorb one more character and retry.
            pi = star_pi + 1;
            ti = star_ti + 1;
            backtrack = Some((star_pi, star_ti + 1));
        } else {
            return false;
        }
    }
    p[pi..].iter().all(|&c| c == '*')
}
