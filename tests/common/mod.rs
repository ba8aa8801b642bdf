//! Shared fixtures: an in-process scripted toolchain and suite-tree
//! builders, so harness scenarios run without real compilers.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use ccdiff::exec::CommandRunner;

/// Per-test scripted exit codes, one per pipeline stage.
#[derive(Debug, Clone, Copy)]
pub struct ScriptedBehavior {
    pub reference_build: i32,
    pub reference_exit: i32,
    pub candidate_build: i32,
    pub link: i32,
    pub candidate_exit: i32,
}

impl ScriptedBehavior {
    pub fn passing(exit: i32) -> Self {
        Self {
            reference_build: 0,
            reference_exit: exit,
            candidate_build: 0,
            link: 0,
            candidate_exit: exit,
        }
    }

    pub fn mismatching(reference: i32, candidate: i32) -> Self {
        Self {
            reference_exit: reference,
            candidate_exit: candidate,
            ..Self::passing(0)
        }
    }

    pub fn candidate_build_failing() -> Self {
        Self {
            candidate_build: 1,
            ..Self::passing(0)
        }
    }

    pub fn link_failing() -> Self {
        Self {
            link: 1,
            ..Self::passing(0)
        }
    }

    pub fn reference_build_failing() -> Self {
        Self {
            reference_build: 1,
            ..Self::passing(0)
        }
    }
}

/// A [`CommandRunner`] that answers stage commands from a script keyed by
/// test name, instead of spawning processes. Unscripted tests pass with
/// exit 0.
#[derive(Default)]
pub struct ScriptedToolchain {
    behaviors: HashMap<String, ScriptedBehavior>,
}

impl ScriptedToolchain {
    pub fn with(mut self, test_name: &str, behavior: ScriptedBehavior) -> Self {
        self.behaviors.insert(test_name.to_string(), behavior);
        self
    }

    fn behavior_for(&self, name: &str) -> ScriptedBehavior {
        self.behaviors
            .get(name)
            .copied()
            .unwrap_or_else(|| ScriptedBehavior::passing(0))
    }
}

impl CommandRunner for ScriptedToolchain {
    fn run(&self, command: &str) -> i32 {
        // Stage commands end in a scratch artifact path; its extension
        // identifies the stage and its stem the test.
        let artifact = Path::new(command.split_whitespace().last().unwrap_or(""));
        let name = artifact
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let behavior = self.behavior_for(&name);
        let bare_path = !command.contains(' ');
        match artifact.extension().and_then(|e| e.to_str()) {
            Some("ref") if bare_path => behavior.reference_exit,
            Some("ref") => behavior.reference_build,
            Some("s") => behavior.candidate_build,
            Some("bin") if bare_path => behavior.candidate_exit,
            Some("bin") => behavior.link,
            _ => 0,
        }
    }
}

/// Creates a suite directory under `root` holding one stub `.c` file per
/// name. The contents never get compiled; the scripted toolchain decides
/// every outcome.
pub fn make_suite(root: &Path, dir: &str, test_names: &[&str]) {
    let suite = root.join(dir);
    fs::create_dir_all(&suite).unwrap();
    for name in test_names {
        fs::write(suite.join(format!("{name}.c")), "int main() { return 0; }").unwrap();
    }
}
