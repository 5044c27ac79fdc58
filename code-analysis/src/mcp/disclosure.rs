//! Progressive disclosure of tool descriptions
//!
//! The tool listing an agent sees up front carries only the one-line minimal
//! description of each tool. The full description stays reachable on demand
//! through the description resource. Both views are keyed by the registered
//! tool name, so neither duplicates the registration.

use super::tool_registry::{ToolContext, ToolProvider};
use crate::catalog::InstructionCatalog;
use rmcp::model::{CallToolResult, Tool};
use rmcp::Error as McpError;
use std::borrow::Cow;
use std::sync::Arc;

/// Wraps a tool provider and rewrites listed descriptions to their minimal form
///
/// Name, input schema and order come through untouched from the wrapped
/// provider. Calls are forwarded as-is.
pub struct DisclosureGate<P> {
    inner: P,
    catalog: Arc<InstructionCatalog>,
}

impl<P: ToolProvider> DisclosureGate<P> {
    /// Create a gate in front of `inner`
    pub fn new(inner: P, catalog: Arc<InstructionCatalog>) -> Self {
        Self { inner, catalog }
    }

    /// The wrapped provider
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// The catalog supplying minimal and full descriptions
    pub fn catalog(&self) -> &InstructionCatalog {
        &self.catalog
    }

    /// Full description for a tool name, or the unknown-tool sentinel
    pub fn describe(&self, name: &str) -> Cow<'static, str> {
        self.catalog.full_description(name)
    }

    fn minimize(&self, mut tool: Tool) -> Tool {
        let registered = tool.description.as_deref().unwrap_or_default();
        let fallback = if registered.is_empty() {
            &*tool.name
        } else {
            registered
        };
        let minimal = self
            .catalog
            .minimal_description_or(&tool.name, fallback)
            .to_string();
        tool.description = Some(minimal.into());
        tool
    }
}

#[async_trait::async_trait]
impl<P: ToolProvider> ToolProvider for DisclosureGate<P> {
    fn list_tools(&self) -> Vec<Tool> {
        self.inner
            .list_tools()
            .into_iter()
            .map(|tool| self.minimize(tool))
            .collect()
    }

    fn has_tool(&self, name: &str) -> bool {
        self.inner.has_tool(name)
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.inner.call_tool(name, arguments, context).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolRegistry};
    use crate::mcp::tools::register_review_tools;

    struct PlainTool {
        name: &'static str,
        description: &'static str,
    }

    #[async_trait::async_trait]
    impl McpTool for PlainTool {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            self.description
        }

        fn schema(&self) -> serde_json::Value {
            serde_json::json!({ "type": "object" })
        }

        async fn execute(
            &self,
            _arguments: serde_json::Map<String, serde_json::Value>,
            _context: &ToolContext,
        ) -> std::result::Result<CallToolResult, McpError> {
            Ok(BaseToolImpl::create_success_response(self.name))
        }
    }

    fn builtin_gate() -> DisclosureGate<ToolRegistry> {
        let catalog = Arc::new(InstructionCatalog::builtin());
        let mut registry = ToolRegistry::new();
        register_review_tools(&mut registry, &catalog);
        DisclosureGate::new(registry, catalog)
    }

    #[test]
    fn test_listing_uses_minimal_descriptions() {
        let gate = builtin_gate();
        let catalog = InstructionCatalog::builtin();

        let tools = gate.list_tools();
        assert_eq!(tools.len(), 6);
        for tool in &tools {
            assert_eq!(
                tool.description.as_deref(),
                catalog.minimal_description(&tool.name)
            );
        }
    }

    #[test]
    fn test_listing_never_exposes_full_descriptions() {
        let gate = builtin_gate();
        let catalog = InstructionCatalog::builtin();
        let full: Vec<&str> = catalog.entries().map(|e| e.full_description).collect();

        for tool in gate.list_tools() {
            let description = tool.description.unwrap_or_default();
            assert!(!full.contains(&&*description), "{}", tool.name);
        }
    }

    #[test]
    fn test_listing_preserves_names_schemas_and_order() {
        let gate = builtin_gate();
        let underlying = gate.inner().list_tools();
        let gated = gate.list_tools();

        assert_eq!(underlying.len(), gated.len());
        for (base, listed) in underlying.iter().zip(&gated) {
            assert_eq!(base.name, listed.name);
            assert_eq!(base.input_schema, listed.input_schema);
            assert_ne!(base.description, listed.description);
        }
    }

    #[test]
    fn test_unknown_tools_keep_registered_description() {
        let mut registry = ToolRegistry::new();
        registry.register(PlainTool {
            name: "custom",
            description: "A custom tool",
        });
        registry.register(PlainTool {
            name: "silent",
            description: "",
        });
        let gate = DisclosureGate::new(registry, Arc::new(InstructionCatalog::builtin()));

        let tools = gate.list_tools();
        assert_eq!(tools[0].description.as_deref(), Some("A custom tool"));
        assert_eq!(tools[1].description.as_deref(), Some("silent"));
    }

    #[test]
    fn test_describe_is_keyed_by_tool_name() {
        let gate = builtin_gate();
        for tool in gate.list_tools() {
            let full = gate.describe(&tool.name);
            assert_eq!(full, gate.catalog().full_description(&tool.name));
            assert!(!full.starts_with("Unknown tool"));
        }
        assert_eq!(gate.describe("bogus"), "Unknown tool: bogus");
    }

    #[tokio::test]
    async fn test_calls_pass_through() {
        let mut registry = ToolRegistry::new();
        registry.register(PlainTool {
            name: "custom",
            description: "A custom tool",
        });
        let gate = DisclosureGate::new(registry, Arc::new(InstructionCatalog::builtin()));

        assert!(gate.has_tool("custom"));
        let result = gate
            .call_tool("custom", serde_json::Map::new(), &ToolContext::default())
            .await
            .unwrap();
        assert_eq!(
            crate::mcp::tool_registry::response_text(&result),
            Some("custom")
        );
        assert!(gate
            .call_tool("other", serde_json::Map::new(), &ToolContext::default())
            .await
            .is_err());
    }
}
