//! exec::asynchronous
//!
//! Process execution for callers already running on a tokio runtime.
//!
//! The spawn, drain and wait steps collapse into one await point:
//! `wait_with_output` reads both pipes concurrently while waiting. The
//! child is spawned with `kill_on_drop`, so a deadline that fires (or a
//! caller that drops the future) terminates the child rather than leaving
//! it running unobserved.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use super::error::{ExecError, ExecResult};
use super::invocation::Invocation;
use super::runner::finish;

/// Async counterpart of [`super::CommandExecutor`].
///
/// Same contract: stdout verbatim on a zero exit, [`ExecError`] otherwise.
#[async_trait]
pub trait AsyncCommandExecutor: Send + Sync {
    /// Run the invocation and return its captured standard output.
    async fn execute(&self, invocation: &Invocation) -> ExecResult<String>;
}

/// Executor backed by `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncProcessExecutor;

#[async_trait]
impl AsyncCommandExecutor for AsyncProcessExecutor {
    async fn execute(&self, invocation: &Invocation) -> ExecResult<String> {
        let program = invocation.program();
        debug!(
            program,
            args = ?invocation.tokens(),
            cwd = %invocation.cwd().display(),
            "spawning"
        );

        let mut command = Command::new(program);
        command
            .args(invocation.tokens())
            .current_dir(invocation.cwd())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        for (key, value) in invocation.env_overrides() {
            command.env(key, value);
        }

        let child = command.spawn().map_err(|source| ExecError::Launch {
            program: program.to_string(),
            cwd: invocation.cwd().to_path_buf(),
            source,
        })?;

        let output = match invocation.deadline() {
            None => child.wait_with_output().await,
            Some(timeout) => {
                let waited = tokio::time::timeout(timeout, child.wait_with_output()).await;
                match waited {
                    Ok(output) => output,
                    Err(_) => {
                        // Dropping the output future dropped the child, which
                        // kill_on_drop turns into a kill.
                        warn!(program, ?timeout, "deadline expired, killing child");
                        return Err(ExecError::TimedOut {
                            program: program.to_string(),
                            timeout,
                        });
                    }
                }
            }
        }
        .map_err(|source| ExecError::Capture {
            program: program.to_string(),
            source,
        })?;

        finish(
            invocation,
            output.status,
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        )
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    fn sh(script: &str) -> Invocation {
        Invocation::new("sh", std::env::temp_dir())
            .arg("-c")
            .arg(script)
    }

    #[tokio::test]
    async fn returns_stdout() {
        let out = AsyncProcessExecutor
            .execute(&sh("printf 'one\\ntwo\\n'"))
            .await
            .unwrap();
        assert_eq!(out, "one\ntwo\n");
    }

    #[tokio::test]
    async fn nonzero_exit_maps_to_command_failure() {
        let err = AsyncProcessExecutor
            .execute(&sh("printf boom >&2; exit 1"))
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), Some(1));
        assert_eq!(err.stderr(), Some("boom"));
    }

    #[tokio::test]
    async fn missing_program_is_launch_failure() {
        let inv = Invocation::new("/nonexistent/gitcap-test-binary", std::env::temp_dir());
        let err = AsyncProcessExecutor.execute(&inv).await.unwrap_err();
        assert!(err.is_launch_failure(), "got {err:?}");
    }

    #[tokio::test]
    async fn deadline_kills_child() {
        let inv = sh("sleep 5").timeout(Some(Duration::from_millis(100)));
        let started = Instant::now();
        let err = AsyncProcessExecutor.execute(&inv).await.unwrap_err();
        assert!(err.is_timeout(), "got {err:?}");
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[tokio::test]
    async fn background_grandchild_cannot_outlast_deadline() {
        let inv = sh("sleep 3 & echo started").timeout(Some(Duration::from_millis(200)));
        let started = Instant::now();
        let err = AsyncProcessExecutor.execute(&inv).await.unwrap_err();
        assert!(err.is_timeout(), "got {err:?}");
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn overflowing_deadline_runs_untimed() {
        let inv = sh("echo ok").timeout(Some(Duration::MAX));
        assert_eq!(AsyncProcessExecutor.execute(&inv).await.unwrap(), "ok\n");
    }
}
