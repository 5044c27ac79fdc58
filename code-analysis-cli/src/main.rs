use std::process;

use clap::CommandFactory;
use code_analysis_cli::cli::{Cli, Commands};
use code_analysis_cli::error::handle_cli_result;
use code_analysis_cli::exit_codes::{EXIT_SUCCESS, EXIT_WARNING};
use code_analysis_cli::logging::{init_logging, log_level};
use code_analysis_cli::{completions, describe, list, prompt, run, serve};
use is_terminal::IsTerminal;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    // Fast path for help
    let Some(command) = cli.command else {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Failed to print help: {e}");
            process::exit(EXIT_WARNING);
        }
        process::exit(EXIT_SUCCESS);
    };

    let is_mcp_mode = matches!(command, Commands::Serve) && !std::io::stdin().is_terminal();
    init_logging(
        log_level(cli.quiet, cli.debug, cli.verbose, is_mcp_mode),
        is_mcp_mode,
    );

    let exit_code = match command {
        Commands::Serve => {
            tracing::info!("Starting MCP server");
            serve::run_server().await
        }
        Commands::List { format, full } => {
            tracing::debug!("Listing tools as {:?}", format);
            handle_cli_result(list::run_list_command(format, full).map_err(Into::into))
        }
        Commands::Describe { tool } => handle_cli_result(describe::run_describe_command(&tool)),
        Commands::Run { tool, path } => {
            tracing::debug!("Running {} on {}", tool, path);
            handle_cli_result(run::run_tool_command(&tool, &path).await)
        }
        Commands::Prompt { name, path } => {
            handle_cli_result(prompt::run_prompt_command(&name, &path))
        }
        Commands::Completion { shell } => {
            tracing::debug!("Generating completion for {:?}", shell);
            handle_cli_result(completions::print_completion(shell).map_err(Into::into))
        }
    };

    process::exit(exit_code);
}
