//! capabilities::traits
//!
//! One trait per VCS feature area.
//!
//! # Composition
//!
//! - [`BranchMerge`] and [`BranchRebase`] each extend [`BranchManage`]
//!   independently: a backend may merge without rebasing or the reverse,
//!   but both need the branch primitives.
//! - [`VersionControl`] extends [`BranchManage`] and [`Tag`] and is the
//!   baseline every backend provides.
//! - The remaining traits stand alone; a backend opts into each one.
//!
//! Every operation returns the tool's raw standard output. Optional string
//! inputs that are `None` or empty produce no argument at all.

use crate::exec::ExecResult;

use super::options::{CommitOptions, MergeOptions, PullOptions, PushOptions, ResetOptions};

/// Branch lifecycle: checkout, reset, create, delete, rename, query.
pub trait BranchManage {
    /// Check out `target`, optionally creating `new_branch` there.
    fn checkout(&self, target: &str, new_branch: Option<&str>) -> ExecResult<String>;

    /// Reset the current branch to `commit`.
    fn reset(&self, commit: &str, options: ResetOptions) -> ExecResult<String>;

    /// Rename branch `old_name` to `new_name`.
    fn rename_branch(&self, old_name: &str, new_name: &str) -> ExecResult<String>;

    /// Create branch `name` at HEAD.
    fn branch(&self, name: &str) -> ExecResult<String>;

    /// Delete the fully merged branch `name`.
    fn delete_branch(&self, name: &str) -> ExecResult<String>;

    /// Name of the checked-out branch, as the tool prints it.
    fn current_branch(&self) -> ExecResult<String>;
}

/// Merging, on top of the branch primitives.
pub trait BranchMerge: BranchManage {
    /// Merge `branch` into the current branch.
    fn merge(&self, branch: &str, options: MergeOptions) -> ExecResult<String>;
}

/// Rebasing, on top of the branch primitives.
pub trait BranchRebase: BranchManage {
    /// Rebase the current branch onto `branch`.
    fn rebase(&self, branch: &str) -> ExecResult<String>;
}

/// Tagging commits.
pub trait Tag {
    /// Create lightweight tag `name` at `commit`.
    fn tag(&self, name: &str, commit: &str) -> ExecResult<String>;

    /// List all tags.
    fn list_tags(&self) -> ExecResult<String>;
}

/// The baseline every backend provides.
pub trait VersionControl: BranchManage + Tag {
    /// Clone `url` into `directory`, relative to the bound path.
    fn clone_repository(&self, url: &str, directory: &str) -> ExecResult<String>;

    /// Create an empty repository at the bound path.
    fn init(&self) -> ExecResult<String>;

    /// Stage the given pathspecs.
    fn add(&self, pathspecs: &[&str]) -> ExecResult<String>;

    /// Record a commit with `message`.
    fn commit(&self, message: &str, options: CommitOptions) -> ExecResult<String>;

    /// Push `branch` to `remote`.
    fn push(&self, remote: &str, branch: &str, options: PushOptions) -> ExecResult<String>;

    /// Pull `branch` from `remote`.
    fn pull(&self, remote: &str, branch: &str, options: PullOptions) -> ExecResult<String>;

    /// Working tree and index status.
    fn status(&self) -> ExecResult<String>;

    /// Commit log.
    fn log(&self) -> ExecResult<String>;
}

/// Archiving a tree.
pub trait Archive {
    /// Write `commit`'s tree to `output_file` in `format` (e.g. `tar`, `zip`).
    fn archive(&self, commit: &str, format: &str, output_file: &str) -> ExecResult<String>;
}

/// Binary search through history.
pub trait Bisect {
    /// Start a bisect between `start` and `end`, with optional extra
    /// good and bad revisions.
    fn bisect(
        &self,
        start: &str,
        end: &str,
        good: Option<&str>,
        bad: Option<&str>,
    ) -> ExecResult<String>;
}

/// Line attribution and per-file history.
pub trait Blame {
    /// Per-line attribution of `path`.
    fn blame(&self, path: &str) -> ExecResult<String>;

    /// History of `path`, following renames.
    fn file_history(&self, path: &str) -> ExecResult<String>;
}

/// Applying single commits.
pub trait CherryPick {
    /// Apply the change introduced by `commit` to the current branch.
    fn cherry_pick(&self, commit: &str) -> ExecResult<String>;
}

/// Removing untracked files and unreachable objects.
pub trait Clean {
    /// Remove untracked files; most configurations require `force`.
    fn clean(&self, force: bool) -> ExecResult<String>;

    /// Prune unreachable objects from the object database.
    fn prune(&self) -> ExecResult<String>;
}

/// Showing differences.
pub trait Diff {
    /// `diff` with caller-supplied option tokens, each passed as one argument.
    fn diff(&self, options: &[&str]) -> ExecResult<String>;

    /// Staged changes against HEAD.
    fn diff_cached(&self) -> ExecResult<String>;

    /// Working tree against HEAD.
    fn diff_head(&self) -> ExecResult<String>;

    /// Changes between two commits.
    fn diff_commits(&self, from: &str, to: &str) -> ExecResult<String>;
}

/// Reference logs.
pub trait Reflog {
    /// Show the reflog of HEAD.
    fn reflog(&self) -> ExecResult<String>;
}

/// Remote management.
pub trait RemoteManage {
    /// List remotes with their URLs.
    fn list_remotes(&self) -> ExecResult<String>;

    /// Add remote `name` at `url`.
    fn add_remote(&self, name: &str, url: &str) -> ExecResult<String>;

    /// Remove remote `name`.
    fn remove_remote(&self, name: &str) -> ExecResult<String>;
}

/// Stashing local changes.
pub trait Stash {
    /// Stash working tree and index changes.
    fn stash(&self) -> ExecResult<String>;

    /// Re-apply the latest stash without dropping it.
    fn stash_apply(&self) -> ExecResult<String>;
}

/// Submodule management.
pub trait SubmoduleManage {
    /// Add the repository at `url` as a submodule at `path`, optionally
    /// tracking `branch`.
    fn add_submodule(&self, url: &str, path: &str, branch: Option<&str>) -> ExecResult<String>;

    /// Initialize and update all submodules recursively.
    fn update_submodules(&self) -> ExecResult<String>;
}
