//! Command execution.
//!
//! The harness only ever observes one thing about the toolchains and the
//! test binaries it drives: their exit status. [`CommandRunner`] is the seam
//! that makes the rest of the harness testable without spawning processes;
//! [`ShellRunner`] is the production implementation.

use std::process::{Command, Stdio};

/// Runs a command line and reports its exit code.
///
/// Implementations must not fail: a command that cannot even be launched is
/// reported as a non-zero exit code, the same as any other failing stage.
pub trait CommandRunner {
    fn run(&self, command: &str) -> i32;
}

/// Exit code reported when a command cannot be spawned at all, matching the
/// shell's own command-not-found status.
pub const SPAWN_FAILURE: i32 = 127;

/// Runs commands through `sh -c`, blocking until the child exits. Both
/// stdout and stderr are discarded; toolchain chatter never reaches the
/// report.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> i32 {
        let status = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(status) => exit_code(&status),
            Err(_) => SPAWN_FAILURE,
        }
    }
}

/// Extracts the exit code, encoding signal termination as a negative value
/// where the platform exposes it.
#[cfg(unix)]
fn exit_code(status: &std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    match status.code() {
        Some(code) => code,
        None => status.signal().map_or(SPAWN_FAILURE, |sig| -sig),
    }
}

#[cfg(not(unix))]
fn exit_code(status: &std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(SPAWN_FAILURE)
}
