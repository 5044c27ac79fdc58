//! MCP server implementation for serving review tools, prompts and descriptions

use super::disclosure::DisclosureGate;
use super::error_handling::to_mcp_result;
use super::prompts::PromptRegistry;
use super::resources::DescriptionResources;
use super::tool_registry::{ToolContext, ToolProvider, ToolRegistry};
use super::tools::register_review_tools;
use crate::catalog::InstructionCatalog;
use crate::config::Config;
use crate::Result;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

/// MCP server for the code review tools
///
/// Holds only immutable state, so clones are cheap and requests never
/// contend with each other.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,
    tools: Arc<DisclosureGate<ToolRegistry>>,
    prompts: Arc<PromptRegistry>,
    resources: Arc<DescriptionResources>,
    /// Tool context containing shared state for tool execution
    pub tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a server with the built-in catalog
    ///
    /// # Errors
    ///
    /// Returns an error if a prompt template fails to parse.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_catalog(config, InstructionCatalog::global().clone())
    }

    /// Create a server serving the given catalog
    ///
    /// # Errors
    ///
    /// Returns [`crate::CodeAnalysisError::Config`] when the configuration
    /// fails validation.
    pub fn with_catalog(config: Config, catalog: InstructionCatalog) -> Result<Self> {
        config.validate()?;
        let config = Arc::new(config);
        let catalog = Arc::new(catalog);

        let mut registry = ToolRegistry::new();
        register_review_tools(&mut registry, &catalog);
        let prompts = PromptRegistry::from_catalog(&catalog)?;

        tracing::debug!(
            "Registered {} tools and {} prompts",
            registry.len(),
            prompts.len()
        );

        Ok(Self {
            tools: Arc::new(DisclosureGate::new(registry, catalog)),
            prompts: Arc::new(prompts),
            resources: Arc::new(DescriptionResources::from_config(&config)),
            tool_context: Arc::new(ToolContext::new(config.clone())),
            config,
        })
    }

    /// Configuration the server was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tool provider behind the listing
    pub fn tools(&self) -> &DisclosureGate<ToolRegistry> {
        &self.tools
    }

    /// Prompt registry
    pub fn prompts(&self) -> &PromptRegistry {
        &self.prompts
    }

    /// Resource address builder
    pub fn resources(&self) -> &DescriptionResources {
        &self.resources
    }

    fn instructions(&self) -> String {
        format!(
            "Code review tools for source files and directories. The tool list shows one-line summaries only; read {} for the full description of a tool before first use. Every tool has a matching prompt_* prompt for code that is already in context.",
            self.resources.uri_template()
        )
    }

    /// Server identity and capabilities reported on initialization
    pub fn server_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities {
                prompts: Some(PromptsCapability {
                    list_changed: Some(false),
                }),
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                resources: Some(ResourcesCapability {
                    subscribe: Some(false),
                    list_changed: Some(false),
                }),
                logging: None,
                completions: None,
                experimental: None,
            },
            server_info: Implementation {
                name: self.config.server_name.clone(),
                version: crate::VERSION.into(),
            },
            instructions: Some(self.instructions()),
        }
    }

    /// Tool listing with minimal descriptions, in registration order
    pub fn tool_listing(&self) -> Vec<Tool> {
        self.tools.list_tools()
    }

    /// Invoke a tool by name
    pub async fn invoke_tool(
        &self,
        name: &str,
        arguments: Option<serde_json::Map<String, Value>>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let result = self
            .tools
            .call_tool(name, arguments.unwrap_or_default(), &self.tool_context)
            .await;
        if let Err(e) = &result {
            tracing::warn!("Tool '{}' failed: {}", name, e.message);
        }
        result
    }

    /// Prompt listing
    pub fn prompt_listing(&self) -> Vec<Prompt> {
        self.prompts.list_prompts()
    }

    /// Render a prompt by name
    pub fn render_prompt(
        &self,
        name: &str,
        arguments: Option<&serde_json::Map<String, Value>>,
    ) -> std::result::Result<GetPromptResult, McpError> {
        let template_args = arguments
            .map(Self::json_map_to_string_map)
            .unwrap_or_default();
        let text = to_mcp_result(
            self.prompts.render_prompt(name, &template_args),
            "Prompt rendering",
        )?;

        Ok(GetPromptResult {
            description: self.prompts.get(name).map(|p| p.description().to_string()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::Text { text },
            }],
        })
    }

    /// One concrete description resource per registered tool
    pub fn resource_listing(&self) -> Vec<Resource> {
        self.tools
            .list_tools()
            .iter()
            .map(|tool| self.resources.resource(&tool.name, tool.description.as_deref()))
            .collect()
    }

    /// Full description for a tool name, or the unknown-tool sentinel
    pub fn describe(&self, tool_name: &str) -> Cow<'static, str> {
        self.tools.describe(tool_name)
    }

    /// Serve a description resource
    ///
    /// Addresses outside the description collection are not found. A
    /// well-formed address naming an unknown tool yields the sentinel text.
    pub fn read_description(&self, uri: &str) -> std::result::Result<ReadResourceResult, McpError> {
        match self.resources.parse(uri) {
            Some(tool_name) => Ok(self.resources.contents(uri, self.describe(tool_name))),
            None => Err(McpError::resource_not_found(
                format!(
                    "Resource '{}' does not match {}",
                    uri,
                    self.resources.uri_template()
                ),
                None,
            )),
        }
    }

    fn json_map_to_string_map(args: &serde_json::Map<String, Value>) -> HashMap<String, String> {
        args.iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), value)
            })
            .collect()
    }
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );
        Ok(self.server_info())
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_listing(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.invoke_tool(&request.name, request.arguments).await
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            prompts: self.prompt_listing(),
            next_cursor: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<GetPromptResult, McpError> {
        self.render_prompt(&request.name, request.arguments.as_ref())
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: self.resource_listing(),
            next_cursor: None,
        })
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult {
            resource_templates: vec![self.resources.template()],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        self.read_description(&request.uri)
    }

    fn get_info(&self) -> ServerInfo {
        self.server_info()
    }
}
