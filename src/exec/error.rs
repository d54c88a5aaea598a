//! exec::error
//!
//! Failure taxonomy for command execution.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Result alias for executor and provider operations.
pub type ExecResult<T> = Result<T, ExecError>;

/// Errors from running the external tool.
///
/// The variants are disjoint: a process that never started is a
/// [`ExecError::Launch`], a process that ran and exited non-zero is a
/// [`ExecError::CommandFailed`], and a process killed at its deadline is a
/// [`ExecError::TimedOut`]. None of them is retried.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The executable could not be started.
    ///
    /// Covers a missing binary, missing execute permission, and an invalid
    /// working directory.
    #[error("failed to launch '{program}' in {dir}: {source}", dir = .cwd.display())]
    Launch {
        /// The program that was requested
        program: String,
        /// The working directory it was to run in
        cwd: PathBuf,
        /// The underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited with a non-zero status.
    #[error(
        "{program} {joined} failed ({status}): {diagnostic}",
        joined = .args.join(" "),
        status = describe_code(.code),
        diagnostic = .stderr.trim_end()
    )]
    CommandFailed {
        /// The program that ran
        program: String,
        /// The argument tokens it ran with
        args: Vec<String>,
        /// Exit code; `None` when the process was ended by a signal
        code: Option<i32>,
        /// Captured standard error
        stderr: String,
        /// Standard output captured before exit, kept for diagnostics
        stdout: String,
    },

    /// The process outlived its deadline and was killed.
    #[error("{program} did not finish within {timeout:?} and was killed")]
    TimedOut {
        /// The program that ran
        program: String,
        /// The deadline that expired
        timeout: Duration,
    },

    /// Reading a captured stream or waiting on the child failed.
    #[error("failed to capture output of '{program}': {source}")]
    Capture {
        /// The program that ran
        program: String,
        /// The underlying OS error
        #[source]
        source: std::io::Error,
    },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl ExecError {
    /// True when the process never started.
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, ExecError::Launch { .. })
    }

    /// True when the process was killed at its deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ExecError::TimedOut { .. })
    }

    /// The exit code of a failed command, if it exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ExecError::CommandFailed { code, .. } => *code,
            _ => None,
        }
    }

    /// Captured standard error of a failed command.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            ExecError::CommandFailed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}
