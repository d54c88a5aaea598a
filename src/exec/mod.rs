//! exec
//!
//! The single doorway to the external tool.
//!
//! # Architecture
//!
//! Every provider operation reaches the tool through a [`CommandExecutor`].
//! No other module spawns processes. An operation builds an [`Invocation`]
//! (program, argument tokens, working directory), hands it to the executor,
//! and gets back the captured standard output or an [`ExecError`].
//!
//! # Invariants
//!
//! - Arguments are passed as a token vector; no shell is ever involved
//! - Both standard streams are drained while the child runs
//! - A non-zero exit is a [`ExecError::CommandFailed`], never success
//! - A spawn failure is a [`ExecError::Launch`], never a command failure
//! - A child that outlives its deadline is killed, then reported as
//!   [`ExecError::TimedOut`]
//!
//! # Example
//!
//! ```no_run
//! use gitcap::exec::{CommandExecutor, Invocation, ProcessExecutor};
//!
//! let invocation = Invocation::new("git", "/path/to/repo")
//!     .arg("status")
//!     .arg("--short");
//! let stdout = ProcessExecutor.execute(&invocation)?;
//! print!("{}", stdout);
//! # Ok::<(), gitcap::exec::ExecError>(())
//! ```

mod asynchronous;
mod error;
mod invocation;
pub mod mock;
mod runner;

pub use asynchronous::{AsyncCommandExecutor, AsyncProcessExecutor};
pub use error::{ExecError, ExecResult};
pub use invocation::{ExecSettings, Invocation};
pub use runner::{CommandExecutor, ProcessExecutor};
