//! Local tool invocation

use crate::error::{CliError, CliResult};
use crate::exit_codes::EXIT_WARNING;
use crate::serve::build_server;
use code_analysis::mcp::response_text;
use code_analysis::{ContentSource, McpServer};

/// Argument name a tool expects its path under
pub fn path_argument(server: &McpServer, tool: &str) -> &'static str {
    server
        .tools()
        .catalog()
        .get(tool)
        .map(|entry| entry.source)
        .unwrap_or(ContentSource::File)
        .argument_name()
}

/// Invoke a tool and return its text response
pub async fn invoke(server: &McpServer, tool: &str, path: &str) -> CliResult<String> {
    let mut arguments = serde_json::Map::new();
    arguments.insert(
        path_argument(server, tool).to_string(),
        serde_json::Value::String(path.to_string()),
    );

    let result = server
        .invoke_tool(tool, Some(arguments))
        .await
        .map_err(|e| CliError::new(e.message.to_string(), EXIT_WARNING))?;

    response_text(&result)
        .map(str::to_string)
        .ok_or_else(|| CliError::new(format!("Tool '{tool}' returned no text"), EXIT_WARNING))
}

/// Run a tool locally and print the composed response
pub async fn run_tool_command(tool: &str, path: &str) -> CliResult<()> {
    let server = build_server()?;
    let text = invoke(&server, tool, path).await?;
    println!("{text}");
    Ok(())
}
