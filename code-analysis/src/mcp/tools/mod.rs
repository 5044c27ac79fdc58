//! MCP tools
//!
//! Every tool reads something from disk, then returns it wrapped together
//! with the review instructions from the catalog. Tools hold their catalog
//! entry, so dispatch by name reaches both handler and text in one lookup.
//!
//! - **review**: the five single-file review tools
//! - **gridmat**: the directory execution-path diagram tool

use crate::catalog::{ContentSource, InstructionCatalog};
use crate::mcp::tool_registry::ToolRegistry;
use rmcp::Error as McpError;

pub mod gridmat;
pub mod review;

pub use gridmat::DirectoryDiagramTool;
pub use review::FileReviewTool;

/// Register one tool per catalog entry, in catalog order
pub fn register_review_tools(registry: &mut ToolRegistry, catalog: &InstructionCatalog) {
    for entry in catalog.entries() {
        match entry.source {
            ContentSource::File => registry.register(FileReviewTool::new(*entry)),
            ContentSource::Directory => registry.register(DirectoryDiagramTool::new(*entry)),
        }
    }
}

/// Run filesystem work off the async executor
async fn load_blocking<T, F>(operation: &str, load: F) -> std::result::Result<T, McpError>
where
    T: Send + 'static,
    F: FnOnce() -> crate::Result<T> + Send + 'static,
{
    let result = tokio::task::spawn_blocking(load).await.map_err(|e| {
        McpError::internal_error(format!("{operation} did not complete: {e}"), None)
    })?;
    crate::mcp::error_handling::to_mcp_result(result, operation)
}
