//! Exit codes and buffered command output

use std::fmt::Display;

use svtool_semver::Version;

/// Success, or a check that holds
pub const SUCCESS: i32 = 0;
/// A check that does not hold
pub const FALSE: i32 = 1;
/// Invalid input; the process-level rendering of -1
pub const FAILURE: i32 = 255;

/// What a command prints and how it exits
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub code: i32,
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

/// Commands short-circuit on invalid input with an error report
pub type Outcome = Result<Report, Report>;

impl Report {
    pub fn exit(code: i32) -> Self {
        Report {
            code,
            ..Default::default()
        }
    }

    /// A failed command with one message for standard error
    pub fn error(message: impl Display) -> Self {
        Report {
            code: FAILURE,
            stdout: Vec::new(),
            stderr: vec![message.to_string()],
        }
    }

    pub fn line(mut self, line: impl Display) -> Self {
        self.stdout.push(line.to_string());
        self
    }

    /// Print the buffered output and hand back the exit code
    pub fn emit(self) -> i32 {
        for line in &self.stdout {
            println!("{}", line);
        }
        for line in &self.stderr {
            eprintln!("{}", line);
        }
        self.code
    }
}

/// Collapse an outcome, successful or not, into its report
pub fn finish(outcome: Outcome) -> i32 {
    outcome.unwrap_or_else(|failure| failure).emit()
}

/// Parse a version argument; `ctx` names the argument in the error message
pub fn parse_version(input: &str, ctx: &str) -> Result<Version, Report> {
    Version::parse(input).map_err(|e| Report::error(format!("Failed to parse <{}> version; {}: '{}'", ctx, e, input)))
}
