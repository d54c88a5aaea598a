//! capabilities::options
//!
//! Optional inputs for capability operations.
//!
//! Each struct's `Default` is the documented default of the operation:
//! every flag off and the reset mode `mixed`.

use crate::core::types::ResetMode;

/// Options for [`super::BranchManage::reset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetOptions {
    /// Reset mode, rendered as `--<mode>`.
    pub mode: ResetMode,
    /// Append `--keep`.
    pub keep: bool,
}

impl ResetOptions {
    /// Options with the given mode and `keep` off.
    pub fn mode(mode: ResetMode) -> Self {
        Self { mode, keep: false }
    }
}

/// Options for [`super::BranchMerge::merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Create a merge commit even when a fast-forward is possible.
    pub no_fast_forward: bool,
}

/// Options for [`super::VersionControl::commit`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitOptions {
    /// Stage modified and deleted tracked files first (`--all`).
    pub all: bool,
    /// Replace the tip commit (`--amend`).
    pub amend: bool,
}

/// Options for [`super::VersionControl::push`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PushOptions {
    /// Overwrite the remote ref (`--force`).
    pub force: bool,
    /// Push tags as well (`--tags`).
    pub tags: bool,
}

/// Options for [`super::VersionControl::pull`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PullOptions {
    /// Rebase instead of merging (`--rebase`).
    pub rebase: bool,
}
