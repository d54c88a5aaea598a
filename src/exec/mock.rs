//! exec::mock
//!
//! In-memory executor for deterministic testing.
//!
//! # Design
//!
//! [`RecordingExecutor`] never spawns anything. It records every invocation
//! it receives and answers from a queue of scripted responses, falling back
//! to empty output once the queue is drained. Provider tests use it to check
//! the exact token sequence an operation builds.
//!
//! # Example
//!
//! ```
//! use gitcap::capabilities::{CommitOptions, VersionControl};
//! use gitcap::exec::mock::RecordingExecutor;
//! use gitcap::git::Git;
//!
//! let executor = RecordingExecutor::new();
//! executor.push_output("[main abc123] fix: bug\n");
//!
//! let git = Git::with_executor("/repo", executor.clone());
//! let out = git.commit("fix: bug", CommitOptions { all: true, ..Default::default() }).unwrap();
//!
//! assert_eq!(out, "[main abc123] fix: bug\n");
//! assert_eq!(executor.last_args(), vec!["commit", "-m", "fix: bug", "--all"]);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use super::error::{ExecError, ExecResult};
use super::invocation::Invocation;
use super::runner::CommandExecutor;

/// Recording executor for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingExecutor {
    inner: Arc<Mutex<RecordingInner>>,
}

#[derive(Debug, Default)]
struct RecordingInner {
    calls: Vec<Invocation>,
    responses: VecDeque<ExecResult<String>>,
}

impl RecordingExecutor {
    /// Create an executor with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RecordingInner> {
        // A poisoned lock only means another test thread panicked.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue a successful response.
    pub fn push_output(&self, stdout: impl Into<String>) {
        self.lock().responses.push_back(Ok(stdout.into()));
    }

    /// Queue a failure response.
    pub fn push_error(&self, error: ExecError) {
        self.lock().responses.push_back(Err(error));
    }

    /// Queue a non-zero exit with the given code and stderr.
    pub fn push_failure(&self, code: i32, stderr: impl Into<String>) {
        let error = ExecError::CommandFailed {
            program: "git".to_string(),
            args: Vec::new(),
            code: Some(code),
            stderr: stderr.into(),
            stdout: String::new(),
        };
        self.push_error(error);
    }

    /// Every invocation received so far, oldest first.
    pub fn calls(&self) -> Vec<Invocation> {
        self.lock().calls.clone()
    }

    /// Number of invocations received.
    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    /// Argument tokens of the most recent invocation; empty if none.
    pub fn last_args(&self) -> Vec<String> {
        self.lock()
            .calls
            .last()
            .map(|inv| inv.tokens().to_vec())
            .unwrap_or_default()
    }

    /// Forget recorded calls and pending responses.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.calls.clear();
        inner.responses.clear();
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&self, invocation: &Invocation) -> ExecResult<String> {
        let mut inner = self.lock();
        inner.calls.push(invocation.clone());
        inner.responses.pop_front().unwrap_or_else(|| Ok(String::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status() -> Invocation {
        Invocation::new("git", "/repo").arg("status")
    }

    #[test]
    fn records_and_replays_in_order() {
        let exec = RecordingExecutor::new();
        exec.push_output("first");
        exec.push_failure(1, "boom");

        assert_eq!(exec.execute(&status()).unwrap(), "first");
        let err = exec.execute(&status()).unwrap_err();
        assert_eq!(err.exit_code(), Some(1));
        assert_eq!(err.stderr(), Some("boom"));
        // Queue drained: empty output.
        assert_eq!(exec.execute(&status()).unwrap(), "");
        assert_eq!(exec.call_count(), 3);
    }

    #[test]
    fn clones_share_state() {
        let exec = RecordingExecutor::new();
        let clone = exec.clone();
        clone.execute(&status()).unwrap();
        assert_eq!(exec.last_args(), vec!["status"]);
    }

    #[test]
    fn reset_clears() {
        let exec = RecordingExecutor::new();
        exec.push_output("unused");
        exec.execute(&status()).unwrap();
        exec.reset();
        assert_eq!(exec.call_count(), 0);
        assert!(exec.last_args().is_empty());
        assert_eq!(exec.execute(&status()).unwrap(), "");
    }
}
