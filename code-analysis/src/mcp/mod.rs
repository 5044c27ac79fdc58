//! Model Context Protocol (MCP) server support
//!
//! This module serves the review tools, their prompts and the full-description
//! resources over MCP. The tool listing goes through a [`DisclosureGate`], so
//! agents see one-line summaries until they ask for more.

pub mod disclosure;
pub mod error_handling;
pub mod prompts;
pub mod resources;
pub mod server;
pub mod tool_registry;
pub mod tools;
pub mod types;

#[cfg(test)]
mod tests;

pub use disclosure::DisclosureGate;
pub use prompts::{PromptDefinition, PromptRegistry};
pub use resources::DescriptionResources;
pub use server::McpServer;
pub use tool_registry::{response_text, McpTool, ToolContext, ToolProvider, ToolRegistry};
pub use tools::register_review_tools;
