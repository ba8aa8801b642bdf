//! Report rendering for the harness.
//!
//! All formatting and colorization lives here, wrapped around the plain
//! verdict data the pipeline and suite produce. The rest of the crate never
//! touches the terminal.

use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::pipeline::StageResult;
use crate::suite::SuiteTally;

/// Width of the `=` rules framing each suite.
const RULE_WIDTH: usize = 50;
/// Test names are padded with `.` to this many columns before the verdict.
const NAME_WIDTH: usize = RULE_WIDTH - 4;

/// Writes the human-readable run report.
pub struct Reporter<W: WriteColor> {
    out: W,
}

impl Reporter<StandardStream> {
    /// Reporter on stdout, colorized only when stdout is a terminal.
    pub fn stdout() -> Self {
        let choice = if atty::is(atty::Stream::Stdout) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Reporter {
            out: StandardStream::stdout(choice),
        }
    }
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(out: W) -> Self {
        Reporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Framed header naming the suite directory.
    pub fn suite_header(&mut self, dir: &Path) {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());
        self.rule();
        let _ = writeln!(self.out, "{:^width$}", name, width = RULE_WIDTH);
        self.rule();
    }

    /// One line per test: dot-padded name, then the verdict keyword.
    pub fn test_line(&mut self, name: &str, result: &StageResult) {
        let padded = format!("{:.<width$}", name, width = NAME_WIDTH);
        let _ = write!(self.out, "{}", padded);
        if result.passed() {
            let _ = writeln!(self.out, "{}", result.label());
        } else {
            self.in_red(|out| write!(out, "{}", result.label()));
            if let StageResult::MismatchedExit {
                reference,
                candidate,
            } = result
            {
                let _ = write!(self.out, " (ref={} got={})", reference, candidate);
            }
            let _ = writeln!(self.out);
        }
    }

    /// Closing rule plus pass/fail counts; zero counts are suppressed.
    pub fn suite_summary(&mut self, tally: &SuiteTally) {
        self.rule();
        if tally.passed > 0 {
            let _ = writeln!(self.out, "{} PASS", tally.passed);
        }
        if tally.failed > 0 {
            self.in_red(|out| writeln!(out, "{} FAIL", tally.failed));
        }
    }

    /// Final banner, printed only when at least one test failed.
    pub fn grand_total(&mut self, failures: usize) {
        if failures > 0 {
            self.in_red(|out| writeln!(out, "{} TOTAL FAILURES", failures));
        }
    }

    fn rule(&mut self) {
        let _ = writeln!(self.out, "{}", "=".repeat(RULE_WIDTH));
    }

    fn in_red<T>(&mut self, f: impl FnOnce(&mut W) -> std::io::Result<T>) {
        let _ = self.out.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
        let _ = f(&mut self.out);
        let _ = self.out.reset();
    }
}
