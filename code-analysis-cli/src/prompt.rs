//! Prompt rendering from the command line

use crate::error::{CliError, CliResult, IntoCliResult};
use crate::exit_codes::EXIT_WARNING;
use crate::serve::build_server;
use std::collections::HashMap;

/// Render a prompt for a path; no files are read
pub fn render(name: &str, path: &str) -> CliResult<String> {
    let server = build_server()?;
    let prompt = server
        .prompts()
        .get(name)
        .ok_or_else(|| CliError::new(format!("Prompt not found: {name}"), EXIT_WARNING))?;

    let arguments = HashMap::from([(prompt.argument_name().to_string(), path.to_string())]);
    prompt.render(&arguments).cli_general_error()
}

/// Print a rendered prompt
pub fn run_prompt_command(name: &str, path: &str) -> CliResult<()> {
    println!("{}", render(name, path)?);
    Ok(())
}
