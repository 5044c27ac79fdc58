//! Configuration management for code-analysis
//!
//! Values are layered: built-in defaults, then `CODE_ANALYSIS_*` environment
//! variables, then an optional `code-analysis.yaml` file. The instruction
//! catalog itself is compiled in and never configurable.

use crate::common::env_loader::EnvLoader;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const ENV_PREFIX: &str = "CODE_ANALYSIS";
const CONFIG_FILENAME: &str = "code-analysis.yaml";

/// Default MCP server name reported during initialization
pub const DEFAULT_SERVER_NAME: &str = "ctroy-code-analysis";
/// Default URI scheme for full tool description resources
pub const DEFAULT_RESOURCE_SCHEME: &str = "ctroy";
/// Default URI collection for full tool description resources
pub const DEFAULT_RESOURCE_COLLECTION: &str = "tool-descriptions";
/// Build and cache directories skipped by directory listings
pub const DEFAULT_EXCLUDED_DIRECTORIES: &[&str] = &["__pycache__", "node_modules", "target"];

// Characters that would make a resource address ambiguous
const INVALID_ADDRESS_CHARS: [char; 3] = ['/', ':', ' '];

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file from disk
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        /// Path to the configuration file that could not be read
        path: PathBuf,
        /// Underlying I/O error that occurred during file reading
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML content from a configuration file
    #[error("Invalid YAML syntax in {path}:\n{source}\n\nHint: Check for proper indentation and YAML formatting")]
    YamlParse {
        /// Path to the configuration file with invalid YAML content
        path: PathBuf,
        /// Underlying YAML parsing error
        #[source]
        source: serde_yaml::Error,
    },

    /// Invalid configuration value for a specific field
    #[error("Invalid configuration value for '{field}': {value}\n{hint}")]
    InvalidValue {
        /// Name of the configuration field that has an invalid value
        field: String,
        /// The invalid value that was provided
        value: String,
        /// Helpful hint about how to fix the issue
        hint: String,
    },
}

/// Configuration settings for the code-analysis server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server name reported to MCP clients (default: "ctroy-code-analysis")
    pub server_name: String,
    /// Scheme of full description resource URIs (default: "ctroy")
    pub resource_scheme: String,
    /// Collection segment of full description resource URIs (default: "tool-descriptions")
    pub resource_collection: String,
    /// Directory names never descended into by directory listings
    pub excluded_directories: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_name: DEFAULT_SERVER_NAME.to_string(),
            resource_scheme: DEFAULT_RESOURCE_SCHEME.to_string(),
            resource_collection: DEFAULT_RESOURCE_COLLECTION.to_string(),
            excluded_directories: DEFAULT_EXCLUDED_DIRECTORIES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Create a new configuration instance with values loaded from:
    /// 1. YAML file (highest precedence)
    /// 2. Environment variables
    /// 3. Defaults (lowest precedence)
    ///
    /// Invalid layers are logged and skipped rather than failing startup.
    pub fn new() -> Self {
        let mut config = Self::default();

        config.apply_env_vars();
        if let Err(e) = config.validate() {
            tracing::warn!(
                "Ignoring invalid {}_* environment configuration: {}",
                ENV_PREFIX,
                e
            );
            config = Self::default();
        }

        match YamlConfig::load_or_default() {
            Ok(yaml_config) => {
                let mut candidate = config.clone();
                yaml_config.apply_to_config(&mut candidate);
                match candidate.validate() {
                    Ok(()) => config = candidate,
                    Err(e) => tracing::warn!(
                        "Invalid YAML configuration: {}. Continuing with environment variables and defaults.",
                        e
                    ),
                }
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load YAML configuration, falling back to env vars and defaults: {}",
                    e
                );
            }
        }

        config
    }

    /// Apply environment variable configuration to this config
    fn apply_env_vars(&mut self) {
        let loader = EnvLoader::new(ENV_PREFIX);

        self.server_name = loader.load_string("SERVER_NAME", &self.server_name);
        self.resource_scheme = loader.load_string("RESOURCE_SCHEME", &self.resource_scheme);
        self.resource_collection =
            loader.load_string("RESOURCE_COLLECTION", &self.resource_collection);
        if let Some(excluded) = loader.load_list("EXCLUDED_DIRECTORIES") {
            self.excluded_directories = excluded;
        }
    }

    /// Find the code-analysis.yaml configuration file
    ///
    /// The search order is:
    /// 1. Current working directory: `code-analysis.yaml`
    /// 2. `~/.config/code-analysis/code-analysis.yaml`
    /// 3. `~/code-analysis.yaml`
    pub fn find_yaml_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![PathBuf::from(CONFIG_FILENAME)];

        if let Some(home_dir) = dirs::home_dir() {
            search_paths.push(
                home_dir
                    .join(".config")
                    .join("code-analysis")
                    .join(CONFIG_FILENAME),
            );
            search_paths.push(home_dir.join(CONFIG_FILENAME));
        }

        let found = search_paths
            .iter()
            .find_map(|path| Self::check_config_file(path));
        if found.is_none() {
            tracing::debug!("No {} configuration file found", CONFIG_FILENAME);
        }
        found
    }

    /// Check if a configuration file exists and is readable
    pub fn check_config_file(config_path: &Path) -> Option<PathBuf> {
        match config_path.try_exists() {
            Ok(true) if config_path.is_file() => match std::fs::File::open(config_path) {
                Ok(_) => {
                    tracing::debug!("Found configuration file: {:?}", config_path);
                    Some(config_path.to_path_buf())
                }
                Err(e) => {
                    tracing::warn!(
                        "Configuration file {:?} exists but cannot be read: {}",
                        config_path,
                        e
                    );
                    None
                }
            },
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(
                    "Error checking for configuration file {:?}: {}",
                    config_path,
                    e
                );
                None
            }
        }
    }

    /// Validate the current configuration settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_address_segment(&self.resource_scheme, "resource_scheme")?;
        Self::validate_address_segment(&self.resource_collection, "resource_collection")?;

        if self.server_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server_name".to_string(),
                value: self.server_name.clone(),
                hint: "server_name cannot be empty".to_string(),
            });
        }

        for name in &self.excluded_directories {
            if name.is_empty() || name.contains('/') || name.contains('\\') {
                return Err(ConfigError::InvalidValue {
                    field: "excluded_directories".to_string(),
                    value: name.clone(),
                    hint: "excluded directories are plain directory names, not paths".to_string(),
                });
            }
        }

        Ok(())
    }

    fn validate_address_segment(value: &str, field: &str) -> Result<(), ConfigError> {
        if value.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                value: value.to_string(),
                hint: format!("{field} cannot be empty"),
            });
        }

        if let Some(ch) = value.chars().find(|ch| INVALID_ADDRESS_CHARS.contains(ch)) {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                value: value.to_string(),
                hint: format!("{field} contains invalid character '{ch}'"),
            });
        }

        Ok(())
    }

    /// Generate an example YAML configuration file content
    pub fn example_yaml_config() -> &'static str {
        r#"# code-analysis.yaml
# Configuration file for the code-analysis MCP server

# Name reported to MCP clients
server_name: "ctroy-code-analysis"

# Full tool descriptions are served at {resource_scheme}://{resource_collection}/{tool_name}
resource_scheme: "ctroy"
resource_collection: "tool-descriptions"

# Directory names skipped by draw_gridmat listings (hidden entries are always skipped)
excluded_directories:
  - __pycache__
  - node_modules
  - target
"#
    }
}

/// Configuration loaded from code-analysis.yaml file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YamlConfig {
    /// Server name reported to MCP clients
    pub server_name: Option<String>,
    /// Scheme of full description resource URIs
    pub resource_scheme: Option<String>,
    /// Collection segment of full description resource URIs
    pub resource_collection: Option<String>,
    /// Directory names skipped by directory listings
    pub excluded_directories: Option<Vec<String>>,
}

impl YamlConfig {
    /// Apply YAML configuration values to an existing Config
    /// YAML values take precedence over existing values
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(ref server_name) = self.server_name {
            config.server_name = server_name.clone();
        }
        if let Some(ref scheme) = self.resource_scheme {
            config.resource_scheme = scheme.clone();
        }
        if let Some(ref collection) = self.resource_collection {
            config.resource_collection = collection.clone();
        }
        if let Some(ref excluded) = self.excluded_directories {
            config.excluded_directories = excluded.clone();
        }
    }

    /// Load YAML configuration from a file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::info!("Loading YAML configuration from: {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::YamlParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Try to load YAML configuration, returning default if file not found
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Config::find_yaml_config_file() {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }
}
