//! core::config::schema
//!
//! Configuration schema types.
//!
//! Global and repo files share one schema; every field is optional so a
//! repo file only needs the keys it overrides.
//!
//! # Validation
//!
//! Values are validated after parsing: the executable must not be blank
//! and the timeout must be positive.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Execution configuration (global or repo scope).
///
/// # Example
///
/// ```toml
/// executable = "/usr/local/bin/git"
/// timeout_secs = 120
///
/// [env]
/// GIT_TERMINAL_PROMPT = "0"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Executable name or path (default: "git")
    pub executable: Option<String>,

    /// Kill commands that run longer than this many seconds
    pub timeout_secs: Option<u64>,

    /// Environment overrides for every command
    pub env: BTreeMap<String, String>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(executable) = &self.executable {
            if executable.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "executable cannot be empty".to_string(),
                ));
            }
        }

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.env.keys().any(|k| k.is_empty() || k.contains('=')) {
            return Err(ConfigError::InvalidValue(
                "env keys must be non-empty and must not contain '='".to_string(),
            ));
        }

        Ok(())
    }
}
