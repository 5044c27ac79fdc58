//! Request types for MCP operations

use serde::Deserialize;

/// Arguments of the single-file review tools and prompts
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct FileArgs {
    /// Path to the file to review
    pub filepath: String,
}

/// Arguments of the directory diagram tool and prompt
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct DirectoryArgs {
    /// Path to the directory to diagram
    pub directory: String,
}

/// JSON schema of an argument type, as exposed in tool listings
pub fn schema_of<T: schemars::JsonSchema>() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(T)).unwrap_or_else(|e| {
        tracing::warn!("Failed to serialize argument schema: {}", e);
        serde_json::json!({ "type": "object" })
    })
}
