//! core::types
//!
//! Strong types for the values providers pass to the tool.
//!
//! # Types
//!
//! - [`RepoBinding`] - The working directory a provider operates on
//! - [`ResetMode`] - The `git reset` mode, rendered as `--<mode>`
//!
//! # Examples
//!
//! ```
//! use gitcap::core::types::{RepoBinding, ResetMode};
//!
//! let binding = RepoBinding::new("/path/that/need/not/exist");
//! assert_eq!(binding.path().to_str(), Some("/path/that/need/not/exist"));
//!
//! let mode: ResetMode = "hard".parse().unwrap();
//! assert_eq!(mode.as_flag(), "--hard");
//! assert_eq!(ResetMode::default(), ResetMode::Mixed);
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid reset mode: {0} (expected soft, mixed, hard, merge or keep)")]
    InvalidResetMode(String),
}

/// The repository working directory a provider is bound to.
///
/// The path is opaque: nothing here checks that it exists or that it is
/// a repository. The tool reports that when a command runs.
///
/// # Invariants
///
/// - Immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoBinding {
    path: PathBuf,
}

impl RepoBinding {
    /// Bind to the given working directory.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The bound working directory.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AsRef<Path> for RepoBinding {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl From<&Path> for RepoBinding {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<&str> for RepoBinding {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<PathBuf> for RepoBinding {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

/// Mode for `git reset`.
///
/// Defaults to [`ResetMode::Mixed`], which is also git's own default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetMode {
    /// Move HEAD only.
    Soft,
    /// Move HEAD and reset the index.
    #[default]
    Mixed,
    /// Move HEAD, reset the index and the working tree.
    Hard,
    /// Reset, keeping unmerged entries.
    Merge,
    /// Reset, aborting if local changes would be lost.
    Keep,
}

impl ResetMode {
    /// The mode name as git spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResetMode::Soft => "soft",
            ResetMode::Mixed => "mixed",
            ResetMode::Hard => "hard",
            ResetMode::Merge => "merge",
            ResetMode::Keep => "keep",
        }
    }

    /// The command-line flag for this mode.
    pub fn as_flag(&self) -> &'static str {
        match self {
            ResetMode::Soft => "--soft",
            ResetMode::Mixed => "--mixed",
            ResetMode::Hard => "--hard",
            ResetMode::Merge => "--merge",
            ResetMode::Keep => "--keep",
        }
    }
}

impl fmt::Display for ResetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResetMode {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "soft" => Ok(ResetMode::Soft),
            "mixed" => Ok(ResetMode::Mixed),
            "hard" => Ok(ResetMode::Hard),
            "merge" => Ok(ResetMode::Merge),
            "keep" => Ok(ResetMode::Keep),
            other => Err(TypeError::InvalidResetMode(other.to_string())),
        }
    }
}
