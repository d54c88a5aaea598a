//! gitcap - A capability-typed command surface over the git CLI
//!
//! gitcap exposes git's feature areas (branching, merging, rebasing,
//! tagging, stashing, diffing, blame, remotes, submodules, bisect, reflog,
//! archive, clean/prune, cherry-pick) as trait methods. Every call becomes
//! exactly one `git` subprocess and returns its raw standard output.
//!
//! # Architecture
//!
//! - [`capabilities`] - One trait per feature area, composed by supertraits
//! - [`exec`] - The single doorway to the external process
//! - [`git`] - The provider implementing every capability for `git`
//! - [`core`] - Strong types and configuration
//!
//! # Correctness Invariants
//!
//! 1. Arguments travel as token vectors; no shell ever reinterprets them
//! 2. Both output streams are drained while the child runs
//! 3. A non-zero exit is never reported as success
//! 4. Failure to launch is never reported as a command failure
//!
//! # Example
//!
//! ```no_run
//! use gitcap::capabilities::{Blame, Diff};
//! use gitcap::git::Git;
//!
//! fn history<P: Blame + Diff>(provider: &P) -> gitcap::exec::ExecResult<String> {
//!     provider.file_history("README.md")
//! }
//!
//! let git = Git::new(".");
//! print!("{}", history(&git)?);
//! # Ok::<(), gitcap::exec::ExecError>(())
//! ```

pub mod capabilities;
pub mod core;
pub mod exec;
pub mod git;
