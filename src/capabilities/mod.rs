//! capabilities
//!
//! Capability contracts for VCS providers.
//!
//! # Architecture
//!
//! Each feature area is its own trait. A provider implements the subset it
//! supports; callers bound their generics on the narrowest set they need.
//! A function that only reads history asks for `Blame + Diff` and can never
//! reach `push` or `reset`:
//!
//! ```
//! use gitcap::capabilities::{Blame, Diff};
//! use gitcap::exec::ExecResult;
//!
//! fn review<P: Blame + Diff>(provider: &P, path: &str) -> ExecResult<String> {
//!     let mut out = provider.blame(path)?;
//!     out.push_str(&provider.diff_head()?);
//!     Ok(out)
//! }
//! ```
//!
//! The same information is available at runtime through [`Capable`] and
//! [`CapabilitySet`].

mod options;
mod set;
mod traits;

pub use options::{CommitOptions, MergeOptions, PullOptions, PushOptions, ResetOptions};
pub use set::{Capability, CapabilitySet, Capable, MissingCapabilities};
pub use traits::{
    Archive, Bisect, Blame, BranchManage, BranchMerge, BranchRebase, CherryPick, Clean, Diff,
    Reflog, RemoteManage, Stash, SubmoduleManage, Tag, VersionControl,
};
