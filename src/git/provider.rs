//! git::provider
//!
//! The `git` provider.
//!
//! [`Git`] binds a repository working directory to an executor and
//! implements every capability trait. Each method builds its token vector
//! in [`super::args`], wraps it in an [`Invocation`] carrying the
//! provider's [`ExecSettings`], and returns whatever the executor returns.
//! Nothing is parsed, validated, or cached.

use std::path::Path;

use crate::capabilities::{
    Archive, Bisect, Blame, BranchManage, BranchMerge, BranchRebase, Capable, Capability,
    CapabilitySet, CherryPick, Clean, CommitOptions, Diff, MergeOptions, PullOptions, PushOptions,
    Reflog, RemoteManage, ResetOptions, Stash, SubmoduleManage, Tag, VersionControl,
};
use crate::core::config::Config;
use crate::core::types::RepoBinding;
use crate::exec::{CommandExecutor, ExecResult, ExecSettings, Invocation, ProcessExecutor};

use super::args;

/// A `git` command surface bound to one working directory.
///
/// Generic over the executor so tests can swap in
/// [`crate::exec::mock::RecordingExecutor`]. `Git` holds no mutable state;
/// it is `Send + Sync` whenever the executor is, and concurrent calls are
/// not serialized.
///
/// # Example
///
/// ```no_run
/// use gitcap::capabilities::{BranchManage, VersionControl};
/// use gitcap::git::Git;
///
/// let git = Git::new("/path/to/repo");
/// let branch = git.current_branch()?;
/// let status = git.status()?;
/// # Ok::<(), gitcap::exec::ExecError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Git<E = ProcessExecutor> {
    binding: RepoBinding,
    settings: ExecSettings,
    executor: E,
}

impl Git<ProcessExecutor> {
    /// Bind to `path`, running the `git` found on `PATH`.
    pub fn new(path: impl Into<RepoBinding>) -> Self {
        Self::with_executor(path, ProcessExecutor)
    }

    /// Bind to `path` using the executable, deadline and environment
    /// overrides from `config`.
    pub fn from_config(path: impl Into<RepoBinding>, config: &Config) -> Self {
        Self::with_executor(path, ProcessExecutor).settings(config.exec_settings())
    }
}

impl<E: CommandExecutor> Git<E> {
    /// Bind to `path` with a custom executor and default settings.
    pub fn with_executor(path: impl Into<RepoBinding>, executor: E) -> Self {
        Self {
            binding: path.into(),
            settings: ExecSettings::default(),
            executor,
        }
    }

    /// Replace the execution settings.
    pub fn settings(mut self, settings: ExecSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The bound working directory.
    pub fn path(&self) -> &Path {
        self.binding.path()
    }

    /// The execution settings in use.
    pub fn exec_settings(&self) -> &ExecSettings {
        &self.settings
    }

    /// The invocation this provider would run for `args`.
    pub fn invocation(&self, args: Vec<String>) -> Invocation {
        self.settings.invocation(self.binding.path(), args)
    }

    /// Run `git` with arbitrary tokens through the same executor.
    ///
    /// For subcommands no capability covers.
    pub fn run<I, S>(&self, args: I) -> ExecResult<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exec(args.into_iter().map(Into::into).collect())
    }

    /// Give `object` a human-readable name based on the nearest tag.
    pub fn describe(&self, object: &str) -> ExecResult<String> {
        self.exec(args::describe(object))
    }

    fn exec(&self, args: Vec<String>) -> ExecResult<String> {
        self.executor.execute(&self.invocation(args))
    }
}

impl<E: CommandExecutor> Capable for Git<E> {
    fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::with(Capability::ALL)
    }
}

impl<E: CommandExecutor> BranchManage for Git<E> {
    fn checkout(&self, target: &str, new_branch: Option<&str>) -> ExecResult<String> {
        self.exec(args::checkout(target, new_branch))
    }

    fn reset(&self, commit: &str, options: ResetOptions) -> ExecResult<String> {
        self.exec(args::reset(commit, options))
    }

    fn rename_branch(&self, old_name: &str, new_name: &str) -> ExecResult<String> {
        self.exec(args::rename_branch(old_name, new_name))
    }

    fn branch(&self, name: &str) -> ExecResult<String> {
        self.exec(args::branch(name))
    }

    fn delete_branch(&self, name: &str) -> ExecResult<String> {
        self.exec(args::delete_branch(name))
    }

    fn current_branch(&self) -> ExecResult<String> {
        self.exec(args::current_branch())
    }
}

impl<E: CommandExecutor> BranchMerge for Git<E> {
    fn merge(&self, branch: &str, options: MergeOptions) -> ExecResult<String> {
        self.exec(args::merge(branch, options))
    }
}

impl<E: CommandExecutor> BranchRebase for Git<E> {
    fn rebase(&self, branch: &str) -> ExecResult<String> {
        self.exec(args::rebase(branch))
    }
}

impl<E: CommandExecutor> Tag for Git<E> {
    fn tag(&self, name: &str, commit: &str) -> ExecResult<String> {
        self.exec(args::tag(name, commit))
    }

    fn list_tags(&self) -> ExecResult<String> {
        self.exec(args::list_tags())
    }
}

impl<E: CommandExecutor> VersionControl for Git<E> {
    fn clone_repository(&self, url: &str, directory: &str) -> ExecResult<String> {
        self.exec(args::clone_repository(url, directory))
    }

    fn init(&self) -> ExecResult<String> {
        self.exec(args::init())
    }

    fn add(&self, pathspecs: &[&str]) -> ExecResult<String> {
        self.exec(args::add(pathspecs))
    }

    fn commit(&self, message: &str, options: CommitOptions) -> ExecResult<String> {
        self.exec(args::commit(message, options))
    }

    fn push(&self, remote: &str, branch: &str, options: PushOptions) -> ExecResult<String> {
        self.exec(args::push(remote, branch, options))
    }

    fn pull(&self, remote: &str, branch: &str, options: PullOptions) -> ExecResult<String> {
        self.exec(args::pull(remote, branch, options))
    }

    fn status(&self) -> ExecResult<String> {
        self.exec(args::status())
    }

    fn log(&self) -> ExecResult<String> {
        self.exec(args::log())
    }
}

impl<E: CommandExecutor> Archive for Git<E> {
    fn archive(&self, commit: &str, format: &str, output_file: &str) -> ExecResult<String> {
        self.exec(args::archive(commit, format, output_file))
    }
}

impl<E: CommandExecutor> Bisect for Git<E> {
    fn bisect(
        &self,
        start: &str,
        end: &str,
        good: Option<&str>,
        bad: Option<&str>,
    ) -> ExecResult<String> {
        self.exec(args::bisect(start, end, good, bad))
    }
}

impl<E: CommandExecutor> Blame for Git<E> {
    fn blame(&self, path: &str) -> ExecResult<String> {
        self.exec(args::blame(path))
    }

    fn file_history(&self, path: &str) -> ExecResult<String> {
        self.exec(args::file_history(path))
    }
}

impl<E: CommandExecutor> CherryPick for Git<E> {
    fn cherry_pick(&self, commit: &str) -> ExecResult<String> {
        self.exec(args::cherry_pick(commit))
    }
}

impl<E: CommandExecutor> Clean for Git<E> {
    fn clean(&self, force: bool) -> ExecResult<String> {
        self.exec(args::clean(force))
    }

    fn prune(&self) -> ExecResult<String> {
        self.exec(args::prune())
    }
}

impl<E: CommandExecutor> Diff for Git<E> {
    fn diff(&self, options: &[&str]) -> ExecResult<String> {
        self.exec(args::diff(options))
    }

    fn diff_cached(&self) -> ExecResult<String> {
        self.exec(args::diff_cached())
    }

    fn diff_head(&self) -> ExecResult<String> {
        self.exec(args::diff_head())
    }

    fn diff_commits(&self, from: &str, to: &str) -> ExecResult<String> {
        self.exec(args::diff_commits(from, to))
    }
}

impl<E: CommandExecutor> Reflog for Git<E> {
    fn reflog(&self) -> ExecResult<String> {
        self.exec(args::reflog())
    }
}

impl<E: CommandExecutor> RemoteManage for Git<E> {
    fn list_remotes(&self) -> ExecResult<String> {
        self.exec(args::list_remotes())
    }

    fn add_remote(&self, name: &str, url: &str) -> ExecResult<String> {
        self.exec(args::add_remote(name, url))
    }

    fn remove_remote(&self, name: &str) -> ExecResult<String> {
        self.exec(args::remove_remote(name))
    }
}

impl<E: CommandExecutor> Stash for Git<E> {
    fn stash(&self) -> ExecResult<String> {
        self.exec(args::stash())
    }

    fn stash_apply(&self) -> ExecResult<String> {
        self.exec(args::stash_apply())
    }
}

impl<E: CommandExecutor> SubmoduleManage for Git<E> {
    fn add_submodule(&self, url: &str, path: &str, branch: Option<&str>) -> ExecResult<String> {
        self.exec(args::add_submodule(url, path, branch))
    }

    fn update_submodules(&self) -> ExecResult<String> {
        self.exec(args::update_submodules())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::exec::mock::RecordingExecutor;

    fn provider() -> (Git<RecordingExecutor>, RecordingExecutor) {
        let exec = RecordingExecutor::new();
        (Git::with_executor("/work/repo", exec.clone()), exec)
    }

    #[test]
    fn invocation_uses_binding_and_settings() {
        let (git, exec) = provider();
        let mut settings = ExecSettings::new("/opt/git/bin/git");
        settings.timeout = Some(Duration::from_secs(5));
        let git = git.settings(settings);

        git.status().unwrap();

        let calls = exec.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program(), "/opt/git/bin/git");
        assert_eq!(calls[0].cwd(), Path::new("/work/repo"));
        assert_eq!(calls[0].tokens(), ["status"]);
        assert_eq!(calls[0].deadline(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn output_returned_unchanged() {
        let (git, exec) = provider();
        exec.push_output("main\n");
        assert_eq!(git.current_branch().unwrap(), "main\n");
    }

    #[test]
    fn failure_propagates_without_output() {
        let (git, exec) = provider();
        exec.push_failure(1, "boom");
        let err = git.merge("topic", MergeOptions::default()).unwrap_err();
        assert_eq!(err.exit_code(), Some(1));
        assert_eq!(err.stderr(), Some("boom"));
    }

    #[test]
    fn run_passes_tokens_through() {
        let (git, exec) = provider();
        git.run(["rev-list", "--count", "HEAD"]).unwrap();
        assert_eq!(exec.last_args(), vec!["rev-list", "--count", "HEAD"]);
    }

    #[test]
    fn describe_is_inherent() {
        let (git, exec) = provider();
        git.describe("v1.2^{}").unwrap();
        assert_eq!(exec.last_args(), vec!["describe", "v1.2^{}"]);
    }

    #[test]
    fn advertises_every_capability() {
        let (git, _) = provider();
        assert_eq!(git.capabilities(), CapabilitySet::all());
    }

    #[test]
    fn provider_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Git>();
        assert_send_sync::<Git<RecordingExecutor>>();
    }
}
