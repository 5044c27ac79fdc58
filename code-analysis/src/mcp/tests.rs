//! Tests for MCP server functionality

use super::server::McpServer;
use super::tool_registry::response_text;
use crate::catalog::InstructionCatalog;
use crate::config::Config;
use crate::error::CodeAnalysisError;
use rmcp::model::{ErrorCode, PromptMessageContent, ResourceContents};
use rmcp::ServerHandler;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn server() -> McpServer {
    McpServer::new(Config::default()).unwrap()
}

fn arguments(value: serde_json::Value) -> Option<serde_json::Map<String, serde_json::Value>> {
    value.as_object().cloned()
}

fn resource_text(result: &rmcp::model::ReadResourceResult) -> &str {
    match &result.contents[0] {
        ResourceContents::TextResourceContents { text, .. } => text,
        other => panic!("unexpected resource contents: {other:?}"),
    }
}

#[tokio::test]
async fn test_mcp_server_creation() {
    let info = server().get_info();

    assert_eq!(info.server_info.name, "ctroy-code-analysis");
    assert_eq!(info.server_info.version, crate::VERSION);
    assert!(info.capabilities.tools.is_some());
    assert!(info.capabilities.prompts.is_some());
    assert!(info.capabilities.resources.is_some());
    assert!(info
        .instructions
        .unwrap()
        .contains("ctroy://tool-descriptions/{tool_name}"));
}

#[test]
fn test_server_name_comes_from_config() {
    let config = Config {
        server_name: "custom-review".to_string(),
        ..Config::default()
    };
    let server = McpServer::new(config).unwrap();
    assert_eq!(server.server_info().server_info.name, "custom-review");
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = Config {
        resource_scheme: "bad:scheme".to_string(),
        ..Config::default()
    };
    let result = McpServer::new(config);
    assert!(matches!(result, Err(CodeAnalysisError::Config(_))));
}

#[test]
fn test_tool_listing_is_minimal_and_ordered() {
    let server = server();
    let catalog = InstructionCatalog::global();

    let tools = server.tool_listing();
    let names: Vec<_> = tools.iter().map(|t| t.name.to_string()).collect();
    assert_eq!(names, catalog.names().collect::<Vec<_>>());

    for tool in &tools {
        let description = tool.description.as_deref().unwrap();
        assert_eq!(Some(description), catalog.minimal_description(&tool.name));
        assert!(catalog
            .entries()
            .all(|entry| entry.full_description != description));
    }
}

#[tokio::test]
async fn test_invoke_review_comments() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("x.py");
    fs::write(&path, "X").unwrap();

    let result = server()
        .invoke_tool(
            "review_comments",
            arguments(json!({ "filepath": path.to_string_lossy() })),
        )
        .await
        .unwrap();
    let text = response_text(&result).unwrap();

    assert!(text.contains("\nX\n"));
    assert!(text.contains("Superfluous comments"));
}

#[tokio::test]
async fn test_failed_invocation_leaves_server_usable() {
    let server = server();
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.py");
    let present = temp_dir.path().join("present.py");
    fs::write(&present, "ok = True").unwrap();

    let error = server
        .invoke_tool(
            "review_names",
            arguments(json!({ "filepath": missing.to_string_lossy() })),
        )
        .await
        .unwrap_err();
    assert!(error.message.contains("missing.py"));

    let result = server
        .invoke_tool(
            "review_names",
            arguments(json!({ "filepath": present.to_string_lossy() })),
        )
        .await
        .unwrap();
    assert!(response_text(&result).unwrap().contains("ok = True"));
}

#[tokio::test]
async fn test_invoke_without_arguments_is_invalid_params() {
    let error = server()
        .invoke_tool("review_cohesion", None)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
    assert!(error.message.contains("filepath"));
}

#[tokio::test]
async fn test_invoke_unknown_tool_is_hard_failure() {
    let error = server()
        .invoke_tool("review_everything", arguments(json!({ "filepath": "a" })))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::INVALID_REQUEST);
    assert!(error.message.contains("review_everything"));
}

#[test]
fn test_read_description_for_each_tool() {
    let server = server();
    for tool in server.tool_listing() {
        let uri = server.resources().uri(&tool.name);
        let result = server.read_description(&uri).unwrap();
        assert_eq!(
            resource_text(&result),
            InstructionCatalog::global().full_description(&tool.name)
        );
    }
}

#[test]
fn test_read_description_for_unknown_tool_is_sentinel() {
    let result = server()
        .read_description("ctroy://tool-descriptions/review_vibes")
        .unwrap();
    let text = resource_text(&result);
    assert_eq!(text, "Unknown tool: review_vibes");
}

#[test]
fn test_read_foreign_resource_is_not_found() {
    let error = server()
        .read_description("file:///etc/hosts")
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::RESOURCE_NOT_FOUND);
}

#[test]
fn test_resource_listing_matches_tools() {
    let server = server();
    let resources = server.resource_listing();
    let tools = server.tool_listing();

    assert_eq!(resources.len(), tools.len());
    for (resource, tool) in resources.iter().zip(&tools) {
        assert_eq!(resource.raw.uri, server.resources().uri(&tool.name));
    }
}

#[test]
fn test_render_prompt_has_no_filesystem_access() {
    let result = server()
        .render_prompt(
            "prompt_review_names",
            arguments(json!({ "filepath": "/nonexistent/dir/foo.py" })).as_ref(),
        )
        .unwrap();

    assert_eq!(result.messages.len(), 1);
    match &result.messages[0].content {
        PromptMessageContent::Text { text } => {
            assert!(text.contains("/nonexistent/dir/foo.py"));
            assert!(text.contains("Shadowed variables"));
        }
        other => panic!("unexpected prompt content: {other:?}"),
    }
    assert!(result.description.is_some());
}

#[test]
fn test_render_unknown_prompt_fails() {
    let error = server()
        .render_prompt(
            "prompt_unknown",
            arguments(json!({ "filepath": "a.py" })).as_ref(),
        )
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
}

#[test]
fn test_render_prompt_without_arguments_fails() {
    let error = server()
        .render_prompt("prompt_review_names", None)
        .unwrap_err();
    assert!(error.message.contains("filepath"));
}

#[test]
fn test_prompt_listing() {
    let prompts = server().prompt_listing();
    assert_eq!(prompts.len(), 6);
    assert!(prompts.iter().all(|p| p.name.starts_with("prompt_")));
}

#[test]
fn test_custom_resource_scheme() {
    let config = Config {
        resource_scheme: "acme".to_string(),
        resource_collection: "docs".to_string(),
        ..Config::default()
    };
    let server = McpServer::new(config).unwrap();

    let result = server.read_description("acme://docs/draw_gridmat").unwrap();
    assert_eq!(
        resource_text(&result),
        InstructionCatalog::global().full_description("draw_gridmat")
    );
    assert!(server
        .read_description("ctroy://tool-descriptions/draw_gridmat")
        .is_err());
}
