//! Directory diagram tool
//!
//! `draw_gridmat` lists a directory tree and asks the agent to turn it into
//! an ASCII execution-path diagram.

use crate::catalog::CatalogEntry;
use crate::composer::compose_directory_review;
use crate::loader::{directory_tree, ListingOptions};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{schema_of, DirectoryArgs};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool returning a directory outline followed by diagram instructions
#[derive(Debug, Clone)]
pub struct DirectoryDiagramTool {
    entry: CatalogEntry,
}

impl DirectoryDiagramTool {
    /// Creates a tool for the given catalog entry
    pub fn new(entry: CatalogEntry) -> Self {
        Self { entry }
    }
}

#[async_trait]
impl McpTool for DirectoryDiagramTool {
    fn name(&self) -> &'static str {
        self.entry.name
    }

    fn description(&self) -> &'static str {
        self.entry.summary
    }

    fn schema(&self) -> serde_json::Value {
        schema_of::<DirectoryArgs>()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: DirectoryArgs = BaseToolImpl::parse_arguments(arguments)?;
        tracing::debug!("{} listing {}", self.entry.name, request.directory);

        let root = request.directory.clone();
        let options = ListingOptions::new(context.config.excluded_directories.clone());
        let listing =
            super::load_blocking(self.entry.name, move || directory_tree(root, &options)).await?;

        Ok(BaseToolImpl::create_success_response(
            compose_directory_review(&request.directory, &listing, self.entry.instructions),
        ))
    }
}
