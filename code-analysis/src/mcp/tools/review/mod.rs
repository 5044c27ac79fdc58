//! Single-file review tools
//!
//! `review_comments`, `review_names`, `review_cohesion`, `review_performance`
//! and `review_test_coverage` share one implementation and differ only in
//! their catalog entry.

use crate::catalog::CatalogEntry;
use crate::composer::compose_file_review;
use crate::loader::read_file;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{schema_of, FileArgs};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool returning a file's full text followed by review instructions
#[derive(Debug, Clone)]
pub struct FileReviewTool {
    entry: CatalogEntry,
}

impl FileReviewTool {
    /// Creates a tool for the given catalog entry
    pub fn new(entry: CatalogEntry) -> Self {
        Self { entry }
    }
}

#[async_trait]
impl McpTool for FileReviewTool {
    fn name(&self) -> &'static str {
        self.entry.name
    }

    fn description(&self) -> &'static str {
        self.entry.summary
    }

    fn schema(&self) -> serde_json::Value {
        schema_of::<FileArgs>()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        _context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: FileArgs = BaseToolImpl::parse_arguments(arguments)?;
        tracing::debug!("{} reading {}", self.entry.name, request.filepath);

        let path = request.filepath.clone();
        let content = super::load_blocking(self.entry.name, move || read_file(path)).await?;

        Ok(BaseToolImpl::create_success_response(compose_file_review(
            &request.filepath,
            &content,
            self.entry.instructions,
        )))
    }
}
