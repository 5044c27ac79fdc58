//! Unified error handling for the code-analysis library
//!
//! Every fallible operation in the crate returns [`Result`]. Errors are
//! converted to protocol errors only at the MCP boundary, see
//! [`crate::mcp::error_handling`].

use crate::config::ConfigError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for the code-analysis library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodeAnalysisError {
    /// Reading a path from the filesystem failed
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        /// The path that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A directory listing was requested for something that is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Tool or prompt arguments were missing or malformed
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// No tool is registered under this name
    #[error("Unknown tool: {0}")]
    ToolNotFound(String),

    /// No prompt is registered under this name
    #[error("Prompt not found: {0}")]
    PromptNotFound(String),

    /// Template parsing or rendering failed
    #[error("Template error: {0}")]
    Template(String),

    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CodeAnalysisError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True when the error means the requested path does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CodeAnalysisError>;
