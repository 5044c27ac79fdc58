use anyhow::Result;
use colored::*;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Color, Modify, Style},
    Table, Tabled,
};

use crate::cli::{Cli, OutputFormat};
use crate::serve::build_server;
use code_analysis::McpServer;

#[derive(Tabled)]
struct ToolRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Argument")]
    argument: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// One tool as shown by `list`
#[derive(Debug, Serialize, PartialEq)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub argument: Option<String>,
    pub resource: String,
}

/// Tools in listing order, with minimal or full descriptions
pub fn collect_tool_infos(server: &McpServer, full: bool) -> Vec<ToolInfo> {
    server
        .tool_listing()
        .into_iter()
        .map(|tool| {
            let description = if full {
                server.describe(&tool.name).into_owned()
            } else {
                tool.description.as_deref().unwrap_or_default().to_string()
            };
            let argument = tool
                .input_schema
                .get("required")
                .and_then(|required| required.get(0))
                .and_then(|name| name.as_str())
                .map(str::to_string);

            ToolInfo {
                resource: server.resources().uri(&tool.name),
                name: tool.name.to_string(),
                description,
                argument,
            }
        })
        .collect()
}

pub fn run_list_command(format: OutputFormat, full: bool) -> Result<()> {
    let server = build_server().map_err(|e| anyhow::anyhow!(e.full_chain()))?;
    let tool_infos = collect_tool_infos(&server, full);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&tool_infos)?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&tool_infos)?;
            print!("{yaml}");
        }
        OutputFormat::Table => {
            display_table(&tool_infos, full);
        }
    }

    Ok(())
}

fn display_table(tool_infos: &[ToolInfo], full: bool) {
    if tool_infos.is_empty() {
        println!("No tools registered.");
        return;
    }

    let use_color = Cli::should_use_color();
    println!("{}", render_table(tool_infos, use_color));

    if use_color && !full {
        println!();
        println!(
            "  Use {} or {} for full descriptions",
            "--full".cyan(),
            "describe <tool>".cyan()
        );
    }
}

fn render_table(tool_infos: &[ToolInfo], use_color: bool) -> String {
    let rows: Vec<ToolRow> = tool_infos
        .iter()
        .map(|info| ToolRow {
            name: info.name.clone(),
            argument: info.argument.clone().unwrap_or_default(),
            description: info.description.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());

    if use_color {
        table.with(Modify::new(Rows::first()).with(Color::FG_BRIGHT_CYAN));
    }

    table.with(Modify::new(Rows::new(1..)).with(Alignment::left()));

    table.to_string()
}
