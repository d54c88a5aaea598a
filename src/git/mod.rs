//! git
//!
//! The `git` CLI provider.
//!
//! # Architecture
//!
//! [`Git`] implements every trait in [`crate::capabilities`] by translating
//! each typed call into one token vector ([`args`]) and handing it to a
//! [`crate::exec::CommandExecutor`]. Output is returned as the tool printed
//! it.
//!
//! # Invariants
//!
//! - One call, one child process
//! - Token vectors are deterministic functions of the inputs
//! - No shell quoting anywhere: a commit message with quotes or spaces is
//!   one argument
//!
//! # Example
//!
//! ```no_run
//! use gitcap::capabilities::{BranchManage, CommitOptions, ResetOptions, VersionControl};
//! use gitcap::core::types::ResetMode;
//! use gitcap::git::Git;
//!
//! let git = Git::new("/path/to/repo");
//! git.add(&["src/lib.rs"])?;
//! git.commit("fix: bug", CommitOptions { all: true, ..Default::default() })?;
//! git.reset("HEAD~1", ResetOptions::mode(ResetMode::Soft))?;
//! # Ok::<(), gitcap::exec::ExecError>(())
//! ```

pub mod args;
mod provider;

pub use provider::Git;
