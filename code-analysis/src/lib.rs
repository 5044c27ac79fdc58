//! # code-analysis
//!
//! Code review tools for AI agents, served over the Model Context Protocol.
//!
//! ## Features
//!
//! - **Review tools**: five single-file reviews (comments, names, cohesion,
//!   performance, test coverage) and a directory execution-path diagram
//! - **Progressive disclosure**: tool listings carry one-line summaries; full
//!   descriptions are separate resources fetched on demand
//! - **Prompts**: a `prompt_*` twin for every tool, for code already in context
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use code_analysis::{Config, McpServer};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let server = McpServer::new(Config::new())?;
//!
//! for tool in server.tool_listing() {
//!     println!("{}: {}", tool.name, tool.description.unwrap_or_default());
//! }
//!
//! let args = serde_json::json!({ "filepath": "src/main.rs" });
//! let _result = server
//!     .invoke_tool("review_comments", args.as_object().cloned())
//!     .await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Instruction catalog: descriptions and review instructions per tool
pub mod catalog;

/// Shared utilities
pub mod common;

/// Response composition
pub mod composer;

/// Configuration management
pub mod config;

/// Error types
pub mod error;

/// Filesystem content loading
pub mod loader;

/// Model Context Protocol (MCP) server support
pub mod mcp;

/// Template engine and rendering
pub mod template;

pub use catalog::{CatalogEntry, ContentSource, InstructionCatalog};
pub use config::{Config, ConfigError};
pub use error::{CodeAnalysisError, Result};
pub use loader::{directory_tree, list_directory, read_file, DirectoryEntry, ListingOptions};
pub use mcp::{DisclosureGate, McpServer};
pub use template::{Template, TemplateEngine};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::catalog::{ContentSource, InstructionCatalog};
    pub use crate::config::Config;
    pub use crate::error::{CodeAnalysisError, Result};
    pub use crate::mcp::{DisclosureGate, McpServer, McpTool, ToolProvider, ToolRegistry};
}
