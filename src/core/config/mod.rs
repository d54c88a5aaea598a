//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Two configuration scopes, one schema ([`FileConfig`]):
//! - **Global**: User-level settings
//! - **Repo**: Repository-level overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values (`git`, no timeout, no env overrides)
//! 2. Global config file
//! 3. Repo config file
//!
//! Environment overrides merge per key; the repo file wins on conflicts.
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$GITCAP_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitcap/config.toml`
//! 3. `~/.gitcap/config.toml`
//!
//! # Repo Config Location
//!
//! `<repo>/.git/gitcap/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use gitcap::core::config::Config;
//! use gitcap::git::Git;
//! use std::path::Path;
//!
//! let repo = Path::new("/path/to/repo");
//! let config = Config::load(Some(repo)).unwrap();
//! println!("running {}", config.executable());
//!
//! let git = Git::from_config(repo, &config);
//! ```

pub mod schema;

pub use schema::FileConfig;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::exec::ExecSettings;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
///
/// Accessor methods apply precedence rules: repo config overrides global
/// config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: FileConfig,
    /// Repository configuration (if a repo file was found)
    pub repo: Option<FileConfig>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the repo config file (if loaded)
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `repo_path` is provided, also loads repo-specific config.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or hold
    /// invalid values. Missing config files are not an error.
    pub fn load(repo_path: Option<&Path>) -> Result<Self, ConfigError> {
        let global = Self::global_config_path();
        Self::load_from(global.as_deref(), repo_path)
    }

    /// Load configuration from an explicit global file and repo.
    ///
    /// A `global_file` that does not exist is treated as absent.
    pub fn load_from(
        global_file: Option<&Path>,
        repo_path: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let (global, global_path) = match global_file.filter(|p| p.exists()) {
            Some(path) => (Self::read_config(path)?, Some(path.to_path_buf())),
            None => (FileConfig::default(), None),
        };

        let (repo, repo_path_found) = match repo_path {
            Some(repo) => {
                let path = Self::repo_config_path(repo);
                if path.exists() {
                    (Some(Self::read_config(&path)?), Some(path))
                } else {
                    (None, None)
                }
            }
            None => (None, None),
        };

        global.validate()?;
        if let Some(ref r) = repo {
            r.validate()?;
        }

        debug!(
            global = ?global_path,
            repo = ?repo_path_found,
            "loaded configuration"
        );

        Ok(Config {
            global,
            repo,
            global_path,
            repo_path: repo_path_found,
        })
    }

    /// Locate the global config file, if one exists.
    pub fn global_config_path() -> Option<PathBuf> {
        // 1. $GITCAP_CONFIG
        if let Ok(path) = std::env::var("GITCAP_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. $XDG_CONFIG_HOME/gitcap/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("gitcap/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. ~/.gitcap/config.toml
        dirs::home_dir()
            .map(|home| home.join(".gitcap/config.toml"))
            .filter(|path| path.exists())
    }

    /// The repo config path for the repository at `repo_path`.
    pub fn repo_config_path(repo_path: &Path) -> PathBuf {
        repo_path.join(".git/gitcap/config.toml")
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Get the executable to run.
    ///
    /// Defaults to "git" if not configured.
    pub fn executable(&self) -> &str {
        self.repo
            .as_ref()
            .and_then(|r| r.executable.as_deref())
            .or(self.global.executable.as_deref())
            .unwrap_or("git")
    }

    /// Get the per-command deadline.
    ///
    /// Defaults to no deadline if not configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.repo
            .as_ref()
            .and_then(|r| r.timeout_secs)
            .or(self.global.timeout_secs)
            .map(Duration::from_secs)
    }

    /// Get the merged environment overrides.
    pub fn env(&self) -> BTreeMap<String, String> {
        let mut env = self.global.env.clone();
        if let Some(repo) = &self.repo {
            env.extend(repo.env.clone());
        }
        env
    }

    /// Execution settings for a provider built from this configuration.
    pub fn exec_settings(&self) -> ExecSettings {
        ExecSettings {
            program: self.executable().to_string(),
            timeout: self.timeout(),
            env: self.env(),
        }
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded repo config file.
    pub fn repo_config_loaded_from(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }
}
