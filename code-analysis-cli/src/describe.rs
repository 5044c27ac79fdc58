//! Full tool descriptions, as served from the description resources

use crate::error::CliResult;
use crate::serve::build_server;

/// Full description of a tool, or the unknown-tool sentinel
pub fn describe(tool: &str) -> CliResult<String> {
    let server = build_server()?;
    Ok(server.describe(tool).into_owned())
}

/// Print a tool's full description
pub fn run_describe_command(tool: &str) -> CliResult<()> {
    println!("{}", describe(tool)?);
    Ok(())
}
