//! The single-test pipeline.
//!
//! One test case flows through four externally-visible stages, in strict
//! order and short-circuiting on the first failure:
//!
//! 1. build the source with the reference compiler
//! 2. run the reference binary to obtain the oracle exit code
//! 3. build the source with the compiler under test, then link
//! 4. run the candidate binary and compare exit codes
//!
//! Every stage outcome is an ordinary value; nothing in here can fail in
//! the `Result` sense. Exit-code equality is the whole oracle: test
//! programs encode their result in the value they return from `main`.

use std::path::{Path, PathBuf};

use crate::exec::CommandRunner;
use crate::toolchain::Toolchain;

/// One discovered test source file.
#[derive(Debug, Clone)]
pub struct TestCase {
    /// Path to the `.c` source.
    pub source: PathBuf,
    /// File stem, used as the display name and to derive scratch paths.
    pub name: String,
}

impl TestCase {
    pub fn from_source(source: &Path) -> Self {
        let name = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            source: source.to_path_buf(),
            name,
        }
    }
}

/// Terminal outcome of one test case. Exactly one is produced per case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageResult {
    /// Both toolchains agreed on the program's exit code.
    Success,
    /// The reference compiler rejected the source; no oracle exists.
    ReferenceBuildFailed,
    /// The compiler under test rejected the source.
    CandidateBuildFailed,
    /// The candidate's generated assembly did not link.
    LinkFailed,
    /// Both binaries ran but returned different exit codes.
    MismatchedExit { reference: i32, candidate: i32 },
}

impl StageResult {
    pub fn passed(&self) -> bool {
        matches!(self, StageResult::Success)
    }

    /// Verdict keyword printed in the per-test report line.
    pub fn label(&self) -> &'static str {
        match self {
            StageResult::Success => "PASS",
            StageResult::ReferenceBuildFailed => "REF FAIL",
            StageResult::CandidateBuildFailed => "BUILD FAIL",
            StageResult::LinkFailed => "LINK FAIL",
            StageResult::MismatchedExit { .. } => "FAIL",
        }
    }
}

/// Drives test cases through the build/run/compare sequence.
pub struct Pipeline<'a, R: CommandRunner> {
    runner: &'a R,
    toolchain: &'a Toolchain,
}

impl<'a, R: CommandRunner> Pipeline<'a, R> {
    pub fn new(runner: &'a R, toolchain: &'a Toolchain) -> Self {
        Self { runner, toolchain }
    }

    /// Evaluates one test case to its terminal [`StageResult`].
    ///
    /// Each toolchain invocation happens at most once per case; nothing is
    /// retried or reused across cases. Scratch artifacts are left in place
    /// after the run so a mismatch can be debugged against the binary that
    /// produced it.
    pub fn evaluate(&self, case: &TestCase) -> StageResult {
        if self.runner.run(&self.toolchain.reference_build_cmd(case)) != 0 {
            return StageResult::ReferenceBuildFailed;
        }

        // Any exit code is a valid oracle value, including non-zero.
        let reference = self.runner.run(&self.toolchain.reference_run_cmd(case));

        if self.runner.run(&self.toolchain.candidate_build_cmd(case)) != 0 {
            return StageResult::CandidateBuildFailed;
        }
        if self.runner.run(&self.toolchain.link_cmd(case)) != 0 {
            return StageResult::LinkFailed;
        }

        let candidate = self.runner.run(&self.toolchain.candidate_run_cmd(case));
        if reference == candidate {
            StageResult::Success
        } else {
            StageResult::MismatchedExit {
                reference,
                candidate,
            }
        }
    }
}
