//! Tool registry for MCP operations
//!
//! Tools register under their name and are dispatched by a single keyed
//! lookup. Registration order is kept, since clients may render the listing
//! exactly as presented.

use crate::config::Config;
use crate::error::CodeAnalysisError;
use indexmap::IndexMap;
use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent, Tool};
use rmcp::Error as McpError;
use std::sync::Arc;

/// Context shared by all tools during execution
#[derive(Debug, Clone, Default)]
pub struct ToolContext {
    /// Settings that influence tool behavior, such as listing exclusions
    pub config: Arc<Config>,
}

impl ToolContext {
    /// Create a new tool context
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

/// Trait defining the interface for all MCP tools
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool's name
    fn name(&self) -> &'static str;

    /// Get the description the tool registers with
    fn description(&self) -> &'static str;

    /// Get the tool's JSON schema for arguments
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments and context
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Anything that can list tools and dispatch calls to them
///
/// Implemented by [`ToolRegistry`] and by wrappers that transform its
/// listing, so the server can hold either.
#[async_trait::async_trait]
pub trait ToolProvider: Send + Sync {
    /// All tools in registration order
    fn list_tools(&self) -> Vec<Tool>;

    /// Check whether a tool with this exact name exists
    fn has_tool(&self, name: &str) -> bool;

    /// Dispatch a call to the named tool
    async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Registry for managing MCP tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: IndexMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: IndexMap::new(),
        }
    }

    /// Register a tool in the registry
    ///
    /// Registering a second tool under an existing name replaces the first
    /// and keeps its position.
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        let name = tool.name();
        if self.tools.insert(name.to_string(), Box::new(tool)).is_some() {
            tracing::warn!("Tool '{}' registered twice; keeping the later one", name);
        }
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// List all registered tool names
    pub fn list_tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    fn to_listing(tool: &dyn McpTool) -> Tool {
        let schema_map = match tool.schema() {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };

        Tool {
            name: tool.name().into(),
            description: Some(tool.description().into()),
            input_schema: Arc::new(schema_map),
            annotations: None,
        }
    }
}

#[async_trait::async_trait]
impl ToolProvider for ToolRegistry {
    fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|tool| Self::to_listing(tool.as_ref()))
            .collect()
    }

    fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        match self.get_tool(name) {
            Some(tool) => {
                tracing::debug!("Calling tool '{}'", name);
                tool.execute(arguments, context).await
            }
            None => Err(CodeAnalysisError::ToolNotFound(name.to_string()).into()),
        }
    }
}

/// Base implementation providing common utility methods for MCP tools
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed struct
    ///
    /// A missing or mistyped parameter is reported by name, before the tool
    /// touches the filesystem.
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<T, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| CodeAnalysisError::InvalidArguments(e.to_string()).into())
    }

    /// Create a success response with text content
    pub fn create_success_response<T: Into<String>>(content: T) -> CallToolResult {
        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent {
                    text: content.into(),
                }),
                None,
            )],
            is_error: Some(false),
        }
    }
}

/// Text of the first content item of a tool result
pub fn response_text(result: &CallToolResult) -> Option<&str> {
    result.content.first().and_then(|content| match &content.raw {
        RawContent::Text(text) => Some(text.text.as_str()),
        _ => None,
    })
}
