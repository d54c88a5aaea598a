//! exec::runner
//!
//! Blocking process execution.
//!
//! # Stream draining
//!
//! A child that writes more than a pipe buffer to one stream blocks until
//! someone reads it. Waiting on the child while only reading the other
//! stream (or neither) deadlocks. Each stream therefore gets its own reader
//! thread, started right after spawn and drained after the child exits.
//!
//! # Deadlines
//!
//! A deadline bounds the whole call, not just the child. A background
//! grandchild that inherited the pipes keeps them open after the child
//! exits; if they are still open at the deadline the call times out and
//! the readers are abandoned.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::error::{ExecError, ExecResult};
use super::invocation::Invocation;

/// Poll interval while waiting on a child with a deadline.
const DEADLINE_POLL: Duration = Duration::from_millis(10);

/// Runs one [`Invocation`] to completion.
///
/// Implementations must return the child's standard output verbatim on a
/// zero exit and an [`ExecError`] otherwise. Providers are generic over
/// this trait so tests can substitute an in-memory executor.
pub trait CommandExecutor: Send + Sync {
    /// Run the invocation and return its captured standard output.
    fn execute(&self, invocation: &Invocation) -> ExecResult<String>;
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for &T {
    fn execute(&self, invocation: &Invocation) -> ExecResult<String> {
        (**self).execute(invocation)
    }
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for Box<T> {
    fn execute(&self, invocation: &Invocation) -> ExecResult<String> {
        (**self).execute(invocation)
    }
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for std::sync::Arc<T> {
    fn execute(&self, invocation: &Invocation) -> ExecResult<String> {
        (**self).execute(invocation)
    }
}

/// Executor that spawns a real OS process and blocks until it exits.
///
/// No shell is involved. Standard input is closed so that a tool waiting
/// on input sees EOF instead of hanging on the caller's terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl CommandExecutor for ProcessExecutor {
    fn execute(&self, invocation: &Invocation) -> ExecResult<String> {
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
            .stderr(Stdio::piped());
        for (key, value) in invocation.env_overrides() {
            command.env(key, value);
        }

        let mut child = command.spawn().map_err(|source| ExecError::Launch {
            program: program.to_string(),
            cwd: invocation.cwd().to_path_buf(),
            source,
        })?;

        // Overflowing deadlines are as good as none.
        let deadline = invocation
            .deadline()
            .and_then(|timeout| Instant::now().checked_add(timeout));

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match deadline {
            None => child.wait().map(Some),
            Some(deadline) => wait_until(&mut child, deadline),
        };

        let status = match status {
            Ok(Some(status)) => status,
            Ok(None) => {
                warn!(
                    program,
                    timeout = ?invocation.deadline(),
                    "deadline expired, killing child"
                );
                // Kill errors mean the child already exited; reaping below
                // still releases the handle.
                let _ = child.kill();
                let _ = child.wait();
                // Readers finish once every holder of the pipes exits.
                // Waiting here could block on a grandchild that inherited
                // them, so they are left to run out on their own.
                return Err(timed_out(invocation));
            }
            Err(source) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(ExecError::Capture {
                    program: program.to_string(),
                    source,
                });
            }
        };

        let stdout = collect(stdout, invocation, deadline)?;
        let stderr = collect(stderr, invocation, deadline)?;
        finish(invocation, status, stdout, stderr)
    }
}

/// Map an exit status and captured streams to the executor result.
pub(super) fn finish(
    invocation: &Invocation,
    status: ExitStatus,
    stdout: String,
    stderr: String,
) -> ExecResult<String> {
    if status.success() {
        return Ok(stdout);
    }

    debug!(
        program = invocation.program(),
        code = ?status.code(),
        "command exited unsuccessfully"
    );
    Err(ExecError::CommandFailed {
        program: invocation.program().to_string(),
        args: invocation.tokens().to_vec(),
        code: status.code(),
        stderr,
        stdout,
    })
}

/// Wait for the child, giving up at `deadline`.
///
/// Returns `Ok(None)` when the deadline passed with the child still running.
fn wait_until(child: &mut Child, deadline: Instant) -> std::io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(None);
        }
        thread::sleep(DEADLINE_POLL.min(deadline - now));
    }
}

type StreamReader = Receiver<std::io::Result<Vec<u8>>>;

/// Start a thread that reads `stream` to EOF and sends back what it read.
fn drain<R>(stream: Option<R>) -> Option<StreamReader>
where
    R: Read + Send + 'static,
{
    stream.map(|mut stream| {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut buf = Vec::new();
            let result = stream.read_to_end(&mut buf).map(|_| buf);
            // The receiver is gone once the caller stopped waiting.
            let _ = tx.send(result);
        });
        rx
    })
}

/// Receive what a reader thread read and decode it.
///
/// With a deadline, a stream still held open by a grandchild after the
/// child exited counts as a timeout.
fn collect(
    reader: Option<StreamReader>,
    invocation: &Invocation,
    deadline: Option<Instant>,
) -> ExecResult<String> {
    let Some(reader) = reader else {
        return Ok(String::new());
    };
    let received = match deadline {
        None => reader.recv().map_err(|_| RecvTimeoutError::Disconnected),
        Some(deadline) => reader.recv_timeout(deadline.saturating_duration_since(Instant::now())),
    };
    let bytes = match received {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => {
            warn!(
                program = invocation.program(),
                "output still open at deadline, abandoning readers"
            );
            return Err(timed_out(invocation));
        }
        Err(RecvTimeoutError::Disconnected) => Err(std::io::Error::other("stream reader panicked")),
    }
    .map_err(|source| ExecError::Capture {
        program: invocation.program().to_string(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn timed_out(invocation: &Invocation) -> ExecError {
    ExecError::TimedOut {
        program: invocation.program().to_string(),
        timeout: invocation.deadline().unwrap_or_default(),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Invocation {
        Invocation::new("sh", std::env::temp_dir())
            .arg("-c")
            .arg(script)
    }

    #[test]
    fn returns_stdout_verbatim() {
        let out = ProcessExecutor.execute(&sh("printf 'a\\n\\n  '")).unwrap();
        assert_eq!(out, "a\n\n  ");
    }

    #[test]
    fn nonzero_exit_is_command_failure() {
        let err = ProcessExecutor
            .execute(&sh("echo partial; echo boom >&2; exit 3"))
            .unwrap_err();
        match err {
            ExecError::CommandFailed {
                code,
                stderr,
                stdout,
                ..
            } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "boom\n");
                assert_eq!(stdout, "partial\n");
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn missing_program_is_launch_failure() {
        let inv = Invocation::new("/nonexistent/gitcap-test-binary", std::env::temp_dir());
        let err = ProcessExecutor.execute(&inv).unwrap_err();
        assert!(err.is_launch_failure(), "got {err:?}");
    }

    #[test]
    fn invalid_cwd_is_launch_failure() {
        let inv = Invocation::new("sh", "/nonexistent/gitcap-test-dir")
            .arg("-c")
            .arg("true");
        let err = ProcessExecutor.execute(&inv).unwrap_err();
        assert!(err.is_launch_failure(), "got {err:?}");
    }

    #[test]
    fn env_override_reaches_child() {
        let inv = sh("printf '%s' \"$GITCAP_MARKER\"").env("GITCAP_MARKER", "seen");
        assert_eq!(ProcessExecutor.execute(&inv).unwrap(), "seen");
    }

    #[test]
    fn deadline_kills_child() {
        let inv = sh("sleep 5").timeout(Some(Duration::from_millis(100)));
        let started = Instant::now();
        let err = ProcessExecutor.execute(&inv).unwrap_err();
        assert!(err.is_timeout(), "got {err:?}");
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn deadline_not_hit_returns_output() {
        let inv = sh("echo quick").timeout(Some(Duration::from_secs(10)));
        assert_eq!(ProcessExecutor.execute(&inv).unwrap(), "quick\n");
    }

    #[test]
    fn background_grandchild_cannot_outlast_deadline() {
        // The shell exits at once but `sleep` keeps both pipes open.
        let inv = sh("sleep 3 & echo started").timeout(Some(Duration::from_millis(200)));
        let started = Instant::now();
        let err = ProcessExecutor.execute(&inv).unwrap_err();
        assert!(err.is_timeout(), "got {err:?}");
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn overflowing_deadline_runs_untimed() {
        let inv = sh("echo ok").timeout(Some(Duration::MAX));
        assert_eq!(ProcessExecutor.execute(&inv).unwrap(), "ok\n");
    }

    #[test]
    fn background_grandchild_without_deadline_is_awaited() {
        let inv = sh("(sleep 1; echo late) & echo early");
        assert_eq!(ProcessExecutor.execute(&inv).unwrap(), "early\nlate\n");
    }
}
