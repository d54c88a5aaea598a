//! exec::invocation
//!
//! The value handed to an executor: what to run, with which tokens, where.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// One request to run the external tool.
///
/// Built fresh for every call and consumed by the executor. Arguments are
/// an ordered token list passed to the OS as-is, so a token containing
/// spaces or quotes stays one argument.
///
/// # Example
///
/// ```
/// use gitcap::exec::Invocation;
///
/// let inv = Invocation::new("git", "/repo")
///     .arg("commit")
///     .arg("-m")
///     .arg("say \"hi\"")
///     .flag(true, "--all")
///     .flag(false, "--amend");
///
/// assert_eq!(inv.tokens(), ["commit", "-m", "say \"hi\"", "--all"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    cwd: PathBuf,
    env: BTreeMap<String, String>,
    timeout: Option<Duration>,
}

impl Invocation {
    /// Start an invocation of `program` in `cwd` with no arguments.
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            env: BTreeMap::new(),
            timeout: None,
        }
    }

    /// Append one token.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append every token in order.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append `flag` only when `enabled`.
    pub fn flag(mut self, enabled: bool, flag: &str) -> Self {
        if enabled {
            self.args.push(flag.to_string());
        }
        self
    }

    /// Set one environment override on top of the inherited environment.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Kill the child if it runs longer than `timeout`.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The program to run.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The argument tokens, in order.
    pub fn tokens(&self) -> &[String] {
        &self.args
    }

    /// The working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Environment overrides, sorted by key.
    pub fn env_overrides(&self) -> impl Iterator<Item = (&str, &str)> {
        self.env.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The deadline, if any.
    pub fn deadline(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Per-provider execution settings.
///
/// Every invocation a provider builds starts from these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecSettings {
    /// The executable name or path.
    pub program: String,
    /// Optional deadline applied to every call.
    pub timeout: Option<Duration>,
    /// Environment overrides applied to every call.
    pub env: BTreeMap<String, String>,
}

impl ExecSettings {
    /// Settings that run `program` with no deadline and no overrides.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            timeout: None,
            env: BTreeMap::new(),
        }
    }

    /// Build an invocation in `cwd` carrying these settings and `args`.
    pub fn invocation(&self, cwd: &Path, args: Vec<String>) -> Invocation {
        Invocation {
            program: self.program.clone(),
            args,
            cwd: cwd.to_path_buf(),
            env: self.env.clone(),
            timeout: self.timeout,
        }
    }
}

impl Default for ExecSettings {
    fn default() -> Self {
        Self::new("git")
    }
}
