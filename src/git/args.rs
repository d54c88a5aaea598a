//! git::args
//!
//! Argument construction for every provider operation.
//!
//! Each function maps typed inputs to the token vector handed to the
//! executor. They are pure and deterministic: the same inputs always give
//! the same tokens.
//!
//! # Rules
//!
//! - An optional string that is `None` or empty adds no token
//! - A flag adds its fixed token only when `true`
//! - Values are never quoted or escaped; each is exactly one token

use crate::capabilities::{CommitOptions, MergeOptions, PullOptions, PushOptions, ResetOptions};

/// Token accumulator for one command line.
#[derive(Debug, Default)]
struct Args(Vec<String>);

impl Args {
    fn new(subcommand: &str) -> Self {
        Self(vec![subcommand.to_string()])
    }

    fn arg(mut self, value: &str) -> Self {
        self.0.push(value.to_string());
        self
    }

    fn flag(mut self, enabled: bool, flag: &str) -> Self {
        if enabled {
            self.0.push(flag.to_string());
        }
        self
    }

    fn opt(mut self, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.0.push(value.to_string());
        }
        self
    }

    fn opt_with(mut self, flag: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.0.push(flag.to_string());
            self.0.push(value.to_string());
        }
        self
    }

    fn finish(self) -> Vec<String> {
        self.0
    }
}

// --- branch lifecycle ------------------------------------------------------

/// `checkout <target> [-b <new_branch>]`
pub fn checkout(target: &str, new_branch: Option<&str>) -> Vec<String> {
    Args::new("checkout")
        .arg(target)
        .opt_with("-b", new_branch)
        .finish()
}

/// `reset --<mode> <commit> [--keep]`
pub fn reset(commit: &str, options: ResetOptions) -> Vec<String> {
    Args::new("reset")
        .arg(options.mode.as_flag())
        .arg(commit)
        .flag(options.keep, "--keep")
        .finish()
}

/// `branch -m <old> <new>`
pub fn rename_branch(old_name: &str, new_name: &str) -> Vec<String> {
    Args::new("branch").arg("-m").arg(old_name).arg(new_name).finish()
}

/// `branch <name>`
pub fn branch(name: &str) -> Vec<String> {
    Args::new("branch").arg(name).finish()
}

/// `branch -d <name>`
pub fn delete_branch(name: &str) -> Vec<String> {
    Args::new("branch").arg("-d").arg(name).finish()
}

/// `rev-parse --abbrev-ref HEAD`
pub fn current_branch() -> Vec<String> {
    Args::new("rev-parse").arg("--abbrev-ref").arg("HEAD").finish()
}

/// `merge <branch> [--no-ff]`
pub fn merge(branch: &str, options: MergeOptions) -> Vec<String> {
    Args::new("merge")
        .arg(branch)
        .flag(options.no_fast_forward, "--no-ff")
        .finish()
}

/// `rebase <branch>`
pub fn rebase(branch: &str) -> Vec<String> {
    Args::new("rebase").arg(branch).finish()
}

// --- tags ------------------------------------------------------------------

/// `tag <name> <commit>`
pub fn tag(name: &str, commit: &str) -> Vec<String> {
    Args::new("tag").arg(name).arg(commit).finish()
}

/// `tag`
pub fn list_tags() -> Vec<String> {
    Args::new("tag").finish()
}

// --- baseline --------------------------------------------------------------

/// `clone <url> <directory>`
pub fn clone_repository(url: &str, directory: &str) -> Vec<String> {
    Args::new("clone").arg(url).arg(directory).finish()
}

/// `init`
pub fn init() -> Vec<String> {
    Args::new("init").finish()
}

/// `add <pathspec>...`
pub fn add(pathspecs: &[&str]) -> Vec<String> {
    pathspecs
        .iter()
        .fold(Args::new("add"), |args, path| args.arg(path))
        .finish()
}

/// `commit -m <message> [--all] [--amend]`; the message is one token however it is quoted.
pub fn commit(message: &str, options: CommitOptions) -> Vec<String> {
    Args::new("commit")
        .arg("-m")
        .arg(message)
        .flag(options.all, "--all")
        .flag(options.amend, "--amend")
        .finish()
}

/// `push <remote> <branch> [--force] [--tags]`
pub fn push(remote: &str, branch: &str, options: PushOptions) -> Vec<String> {
    Args::new("push")
        .arg(remote)
        .arg(branch)
        .flag(options.force, "--force")
        .flag(options.tags, "--tags")
        .finish()
}

/// `pull <remote> <branch> [--rebase]`
pub fn pull(remote: &str, branch: &str, options: PullOptions) -> Vec<String> {
    Args::new("pull")
        .arg(remote)
        .arg(branch)
        .flag(options.rebase, "--rebase")
        .finish()
}

/// `status`
pub fn status() -> Vec<String> {
    Args::new("status").finish()
}

/// `log`
pub fn log() -> Vec<String> {
    Args::new("log").finish()
}

/// `describe <object>`
pub fn describe(object: &str) -> Vec<String> {
    Args::new("describe").arg(object).finish()
}

// --- orthogonal groups -----------------------------------------------------

/// `archive --format=<format> --output=<file> <commit>`
pub fn archive(commit: &str, format: &str, output_file: &str) -> Vec<String> {
    Args::new("archive")
        .arg(&format!("--format={}", format))
        .arg(&format!("--output={}", output_file))
        .arg(commit)
        .finish()
}

/// `bisect start <start> <end> [<good>] [<bad>]`
pub fn bisect(start: &str, end: &str, good: Option<&str>, bad: Option<&str>) -> Vec<String> {
    Args::new("bisect")
        .arg("start")
        .arg(start)
        .arg(end)
        .opt(good)
        .opt(bad)
        .finish()
}

/// `blame <path>`
pub fn blame(path: &str) -> Vec<String> {
    Args::new("blame").arg(path).finish()
}

/// `log --follow <path>`
pub fn file_history(path: &str) -> Vec<String> {
    Args::new("log").arg("--follow").arg(path).finish()
}

/// `cherry-pick <commit>`
pub fn cherry_pick(commit: &str) -> Vec<String> {
    Args::new("cherry-pick").arg(commit).finish()
}

/// `clean [-f]`
pub fn clean(force: bool) -> Vec<String> {
    Args::new("clean").flag(force, "-f").finish()
}

/// `prune`
pub fn prune() -> Vec<String> {
    Args::new("prune").finish()
}

/// `diff <option>...`, skipping empty options.
pub fn diff(options: &[&str]) -> Vec<String> {
    options
        .iter()
        .filter(|opt| !opt.is_empty())
        .fold(Args::new("diff"), |args, opt| args.arg(opt))
        .finish()
}

/// `diff --cached`
pub fn diff_cached() -> Vec<String> {
    diff(&["--cached"])
}

/// `diff HEAD`
pub fn diff_head() -> Vec<String> {
    diff(&["HEAD"])
}

/// `diff <from> <to>`
pub fn diff_commits(from: &str, to: &str) -> Vec<String> {
    diff(&[from, to])
}

/// `reflog`
pub fn reflog() -> Vec<String> {
    Args::new("reflog").finish()
}

/// `remote -v`
pub fn list_remotes() -> Vec<String> {
    Args::new("remote").arg("-v").finish()
}

/// `remote add <name> <url>`
pub fn add_remote(name: &str, url: &str) -> Vec<String> {
    Args::new("remote").arg("add").arg(name).arg(url).finish()
}

/// `remote remove <name>`
pub fn remove_remote(name: &str) -> Vec<String> {
    Args::new("remote").arg("remove").arg(name).finish()
}

/// `stash`
pub fn stash() -> Vec<String> {
    Args::new("stash").finish()
}

/// `stash apply`
pub fn stash_apply() -> Vec<String> {
    Args::new("stash").arg("apply").finish()
}

/// `submodule add [-b <branch>] <url> <path>`
pub fn add_submodule(url: &str, path: &str, branch: Option<&str>) -> Vec<String> {
    // `submodule add` stops option parsing at the first positional, so the
    // branch flag has to precede the URL.
    Args::new("submodule")
        .arg("add")
        .opt_with("-b", branch)
        .arg(url)
        .arg(path)
        .finish()
}

/// `submodule update --init --recursive`
pub fn update_submodules() -> Vec<String> {
    Args::new("submodule")
        .arg("update")
        .arg("--init")
        .arg("--recursive")
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ResetMode;

    #[test]
    fn commit_all_without_amend() {
        let opts = CommitOptions {
            all: true,
            amend: false,
        };
        assert_eq!(commit("fix: bug", opts), ["commit", "-m", "fix: bug", "--all"]);
    }

    #[test]
    fn commit_message_with_quotes_is_one_token() {
        let args = commit(r#"say "hi" & exit"#, CommitOptions::default());
        assert_eq!(args, ["commit", "-m", r#"say "hi" & exit"#]);
    }

    #[test]
    fn reset_hard_keep() {
        let opts = ResetOptions {
            mode: ResetMode::Hard,
            keep: true,
        };
        assert_eq!(reset("abc123", opts), ["reset", "--hard", "abc123", "--keep"]);
    }

    #[test]
    fn reset_defaults_to_mixed() {
        assert_eq!(
            reset("HEAD~1", ResetOptions::default()),
            ["reset", "--mixed", "HEAD~1"]
        );
    }

    #[test]
    fn checkout_new_branch() {
        assert_eq!(checkout("main", None), ["checkout", "main"]);
        assert_eq!(checkout("main", Some("")), ["checkout", "main"]);
        assert_eq!(
            checkout("main", Some("feature")),
            ["checkout", "main", "-b", "feature"]
        );
    }

    #[test]
    fn branch_commands() {
        assert_eq!(branch("topic"), ["branch", "topic"]);
        assert_eq!(delete_branch("topic"), ["branch", "-d", "topic"]);
        assert_eq!(rename_branch("a", "b"), ["branch", "-m", "a", "b"]);
        assert_eq!(current_branch(), ["rev-parse", "--abbrev-ref", "HEAD"]);
    }

    #[test]
    fn merge_and_rebase() {
        assert_eq!(merge("topic", MergeOptions::default()), ["merge", "topic"]);
        assert_eq!(
            merge(
                "topic",
                MergeOptions {
                    no_fast_forward: true
                }
            ),
            ["merge", "topic", "--no-ff"]
        );
        assert_eq!(rebase("main"), ["rebase", "main"]);
    }

    #[test]
    fn push_and_pull_flags_in_order() {
        let both = PushOptions {
            force: true,
            tags: true,
        };
        assert_eq!(
            push("origin", "main", both),
            ["push", "origin", "main", "--force", "--tags"]
        );
        assert_eq!(
            pull("origin", "main", PullOptions { rebase: true }),
            ["pull", "origin", "main", "--rebase"]
        );
    }

    #[test]
    fn add_multiple_paths() {
        assert_eq!(
            add(&["a.txt", "dir with space/b.txt"]),
            ["add", "a.txt", "dir with space/b.txt"]
        );
    }

    #[test]
    fn archive_tokens() {
        assert_eq!(
            archive("v1.0", "zip", "out.zip"),
            ["archive", "--format=zip", "--output=out.zip", "v1.0"]
        );
    }

    #[test]
    fn bisect_optional_revisions() {
        assert_eq!(bisect("HEAD", "v1", None, None), ["bisect", "start", "HEAD", "v1"]);
        assert_eq!(
            bisect("HEAD", "v1", Some("abc"), Some("")),
            ["bisect", "start", "HEAD", "v1", "abc"]
        );
        assert_eq!(
            bisect("HEAD", "v1", None, Some("def")),
            ["bisect", "start", "HEAD", "v1", "def"]
        );
    }

    #[test]
    fn history_commands() {
        assert_eq!(blame("src/lib.rs"), ["blame", "src/lib.rs"]);
        assert_eq!(file_history("src/lib.rs"), ["log", "--follow", "src/lib.rs"]);
        assert_eq!(reflog(), ["reflog"]);
        assert_eq!(describe("HEAD"), ["describe", "HEAD"]);
    }

    #[test]
    fn clean_force_only_when_requested() {
        assert_eq!(clean(false), ["clean"]);
        assert_eq!(clean(true), ["clean", "-f"]);
        assert_eq!(prune(), ["prune"]);
    }

    #[test]
    fn diff_variants() {
        assert_eq!(diff(&[]), ["diff"]);
        assert_eq!(diff(&["", "--stat"]), ["diff", "--stat"]);
        assert_eq!(diff_cached(), ["diff", "--cached"]);
        assert_eq!(diff_head(), ["diff", "HEAD"]);
        assert_eq!(diff_commits("a1", "b2"), ["diff", "a1", "b2"]);
    }

    #[test]
    fn remote_commands() {
        assert_eq!(list_remotes(), ["remote", "-v"]);
        assert_eq!(
            add_remote("upstream", "https://example.com/r.git"),
            ["remote", "add", "upstream", "https://example.com/r.git"]
        );
        assert_eq!(remove_remote("upstream"), ["remote", "remove", "upstream"]);
    }

    #[test]
    fn stash_commands() {
        assert_eq!(stash(), ["stash"]);
        assert_eq!(stash_apply(), ["stash", "apply"]);
    }

    #[test]
    fn submodule_commands() {
        assert_eq!(
            add_submodule("../lib.git", "vendor/lib", None),
            ["submodule", "add", "../lib.git", "vendor/lib"]
        );
        assert_eq!(
            add_submodule("../lib.git", "vendor/lib", Some("stable")),
            ["submodule", "add", "-b", "stable", "../lib.git", "vendor/lib"]
        );
        assert_eq!(
            update_submodules(),
            ["submodule", "update", "--init", "--recursive"]
        );
    }

    #[test]
    fn baseline_commands() {
        assert_eq!(init(), ["init"]);
        assert_eq!(status(), ["status"]);
        assert_eq!(log(), ["log"]);
        assert_eq!(
            clone_repository("https://example.com/r.git", "r"),
            ["clone", "https://example.com/r.git", "r"]
        );
        assert_eq!(tag("v1", "HEAD"), ["tag", "v1", "HEAD"]);
        assert_eq!(list_tags(), ["tag"]);
        assert_eq!(cherry_pick("abc"), ["cherry-pick", "abc"]);
    }
}
