//! Environment variable loading utilities
//!
//! Configuration overrides share a common prefix (`CODE_ANALYSIS_`); this
//! module reads them with fallbacks so a missing or malformed variable never
//! aborts startup.

use std::env;

/// Load an environment variable with a string default
pub fn load_env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Load an environment variable as a comma separated list
///
/// Items are trimmed and empty items are dropped. Returns `None` when the
/// variable is unset so callers can keep their existing value.
pub fn load_env_list(key: &str) -> Option<Vec<String>> {
    env::var(key).ok().map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
}

/// Builder for loading multiple environment variables with consistent prefix
#[derive(Debug)]
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    /// Create a new environment loader with the given prefix
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    /// Full variable name for a suffix, e.g. `CODE_ANALYSIS_SERVER_NAME`
    pub fn key(&self, suffix: &str) -> String {
        format!("{}_{}", self.prefix, suffix)
    }

    /// Load a string value with default
    pub fn load_string(&self, suffix: &str, default: &str) -> String {
        load_env_string(&self.key(suffix), default)
    }

    /// Load a comma separated list, `None` when unset
    pub fn load_list(&self, suffix: &str) -> Option<Vec<String>> {
        load_env_list(&self.key(suffix))
    }
}
