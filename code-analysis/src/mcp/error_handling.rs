//! Conversion of library errors into MCP protocol errors
//!
//! Failures caused by what the caller sent (bad paths, bad arguments,
//! unknown names) become `invalid_params` or `invalid_request`. Everything
//! else is an `internal_error`. The message always carries the library
//! error's text, so the offending path or name reaches the agent.

use crate::CodeAnalysisError;
use rmcp::Error as McpError;

impl From<CodeAnalysisError> for McpError {
    fn from(error: CodeAnalysisError) -> Self {
        let message = error.to_string();
        match error {
            CodeAnalysisError::Io { .. }
            | CodeAnalysisError::NotADirectory(_)
            | CodeAnalysisError::InvalidArguments(_)
            | CodeAnalysisError::PromptNotFound(_) => McpError::invalid_params(message, None),
            CodeAnalysisError::ToolNotFound(_) => McpError::invalid_request(message, None),
            _ => McpError::internal_error(message, None),
        }
    }
}

/// Convert a library result at the MCP boundary, logging failures
pub fn to_mcp_result<T>(result: crate::Result<T>, operation: &str) -> Result<T, McpError> {
    result.map_err(|e| {
        tracing::debug!("{} failed: {}", operation, e);
        McpError::from(e)
    })
}
