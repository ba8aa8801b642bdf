//! Per-directory suite execution.
//!
//! A suite is one directory of `.c` sources. Discovery is non-recursive;
//! files are sorted so the report order is deterministic. Tests must not
//! depend on the order they run in.

use std::path::Path;

use termcolor::WriteColor;
use walkdir::WalkDir;

use crate::cli::output::Reporter;
use crate::errors::HarnessError;
use crate::exec::CommandRunner;
use crate::pipeline::{Pipeline, TestCase};

/// Pass/fail counters for one directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteTally {
    pub passed: usize,
    pub failed: usize,
}

impl SuiteTally {
    fn record(&mut self, passed: bool) {
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

/// Finds all `.c` files directly inside `dir`, sorted by path.
pub fn discover_tests(dir: &Path) -> Result<Vec<TestCase>, HarnessError> {
    let mut sources = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| HarnessError::ReadDir {
            path: dir.to_path_buf(),
            source: e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("walkdir error")),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().map_or(false, |ext| ext == "c") {
            sources.push(entry.path().to_path_buf());
        }
    }
    sources.sort();
    Ok(sources.iter().map(|p| TestCase::from_source(p)).collect())
}

/// Runs every test in `dir` through the pipeline, printing one report line
/// per test and a summary, and returns the tally.
pub fn run_suite<R: CommandRunner, W: WriteColor>(
    dir: &Path,
    pipeline: &Pipeline<'_, R>,
    reporter: &mut Reporter<W>,
) -> Result<SuiteTally, HarnessError> {
    let cases = discover_tests(dir)?;

    reporter.suite_header(dir);
    let mut tally = SuiteTally::default();
    for case in &cases {
        let result = pipeline.evaluate(case);
        reporter.test_line(&case.name, &result);
        tally.record(result.passed());
    }
    reporter.suite_summary(&tally);
    Ok(tally)
}
