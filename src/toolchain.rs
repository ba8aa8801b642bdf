//! Toolchain description and stage command construction.
//!
//! All knowledge of how the reference compiler, the compiler under test,
//! and the linker are invoked lives here, so the pipeline itself is nothing
//! but sequencing. Command lines are trusted, locally-constructed strings;
//! no escaping or validation is performed on them.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::HarnessError;
use crate::pipeline::TestCase;

/// The pair of compilers under comparison, plus the linker used to turn the
/// candidate's generated assembly into an executable.
#[derive(Debug, Clone)]
pub struct Toolchain {
    /// Trusted reference compiler, the behavioral oracle.
    pub reference_cc: String,
    /// Compiler under test; emits assembly on stdout.
    pub candidate_cc: String,
    /// Linker for the candidate's assembly output.
    pub linker: String,
    /// Extra linker flags; the candidate targets 32-bit code.
    pub link_flags: String,
    /// Directory receiving all transient build artifacts.
    pub scratch_dir: PathBuf,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            reference_cc: "gcc".to_string(),
            candidate_cc: "../build/compiler/jcc".to_string(),
            linker: "gcc".to_string(),
            link_flags: "-m32".to_string(),
            scratch_dir: env::temp_dir().join("ccdiff"),
        }
    }
}

impl Toolchain {
    /// Ensures the scratch directory exists before a run starts.
    pub fn prepare_scratch(&self) -> Result<(), HarnessError> {
        fs::create_dir_all(&self.scratch_dir).map_err(|source| HarnessError::Scratch {
            path: self.scratch_dir.clone(),
            source,
        })
    }

    /// Scratch path of the reference executable for one test.
    pub fn reference_binary(&self, case: &TestCase) -> PathBuf {
        self.scratch_dir.join(format!("{}.ref", case.name))
    }

    /// Scratch path of the assembly the candidate compiler generates.
    pub fn candidate_asm(&self, case: &TestCase) -> PathBuf {
        self.scratch_dir.join(format!("{}.s", case.name))
    }

    /// Scratch path of the linked candidate executable.
    pub fn candidate_binary(&self, case: &TestCase) -> PathBuf {
        self.scratch_dir.join(format!("{}.bin", case.name))
    }

    pub fn reference_build_cmd(&self, case: &TestCase) -> String {
        format!(
            "{} {} -o {}",
            self.reference_cc,
            case.source.display(),
            self.reference_binary(case).display()
        )
    }

    pub fn reference_run_cmd(&self, case: &TestCase) -> String {
        self.reference_binary(case).display().to_string()
    }

    /// The candidate compiler writes assembly to stdout; the command
    /// redirects it into the per-test scratch file.
    pub fn candidate_build_cmd(&self, case: &TestCase) -> String {
        format!(
            "{} {} > {}",
            self.candidate_cc,
            case.source.display(),
            self.candidate_asm(case).display()
        )
    }

    pub fn link_cmd(&self, case: &TestCase) -> String {
        format!(
            "{} {} {} -o {}",
            self.linker,
            self.link_flags,
            self.candidate_asm(case).display(),
            self.candidate_binary(case).display()
        )
    }

    pub fn candidate_run_cmd(&self, case: &TestCase) -> String {
        self.candidate_binary(case).display().to_string()
    }

    /// A toolchain writing artifacts under `scratch`, for fixtures and for
    /// callers that cannot share the temp-dir default.
    pub fn with_scratch_dir(mut self, scratch: impl AsRef<Path>) -> Self {
        self.scratch_dir = scratch.as_ref().to_path_buf();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Toolchain, TestCase) {
        let toolchain = Toolchain {
            reference_cc: "gcc".into(),
            candidate_cc: "jcc".into(),
            linker: "gcc".into(),
            link_flags: "-m32".into(),
            scratch_dir: PathBuf::from("/scratch"),
        };
        let case = TestCase::from_source(Path::new("arrays/nested_struct.c"));
        (toolchain, case)
    }

    #[test]
    fn reference_build_names_source_and_output() {
        let (tc, case) = fixture();
        assert_eq!(
            tc.reference_build_cmd(&case),
            "gcc arrays/nested_struct.c -o /scratch/nested_struct.ref"
        );
    }

    #[test]
    fn candidate_build_redirects_stdout_to_scratch_asm() {
        let (tc, case) = fixture();
        assert_eq!(
            tc.candidate_build_cmd(&case),
            "jcc arrays/nested_struct.c > /scratch/nested_struct.s"
        );
    }

    #[test]
    fn link_carries_the_32bit_flag() {
        let (tc, case) = fixture();
        assert_eq!(
            tc.link_cmd(&case),
            "gcc -m32 /scratch/nested_struct.s -o /scratch/nested_struct.bin"
        );
    }

    #[test]
    fn scratch_paths_are_isolated_per_test() {
        let (tc, _) = fixture();
        let a = TestCase::from_source(Path::new("suite/a.c"));
        let b = TestCase::from_source(Path::new("suite/b.c"));
        assert_ne!(tc.reference_binary(&a), tc.reference_binary(&b));
        assert_ne!(tc.candidate_binary(&a), tc.candidate_binary(&b));
        assert_ne!(tc.candidate_asm(&a), tc.candidate_asm(&b));
    }
}
