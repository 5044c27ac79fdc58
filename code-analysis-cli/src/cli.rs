use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::io;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(name = "code-analysis")]
#[command(version)]
#[command(about = "An MCP server offering code review tools with progressive disclosure")]
#[command(long_about = "
code-analysis is an MCP (Model Context Protocol) server that hands AI agents
review instructions together with the code to review. Tool listings carry
one-line summaries; full descriptions are served as resources on demand.

Example usage:
  code-analysis serve                              # Run as MCP server
  code-analysis list                               # Show the tool listing
  code-analysis run review_names src/main.rs       # Run a tool locally
  code-analysis completion bash > ~/.bashrc.d/code-analysis
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server over stdio
    #[command(long_about = "
Runs code-analysis as an MCP server on stdin/stdout until the client closes
the connection or Ctrl-C is pressed. Logs go to ~/.code-analysis/mcp.log
when stdin is not a terminal, since stdout carries protocol messages.

Example:
  code-analysis serve
  # Or configure it in your agent's MCP settings
")]
    Serve,
    /// List the available tools
    #[command(long_about = "
Lists the tools exactly as MCP clients see them: name, one-line description
and argument. Use --full to show the full descriptions instead.

Output formats:
  table  - Formatted table (default)
  json   - JSON output for scripting
  yaml   - YAML output for scripting

Examples:
  code-analysis list
  code-analysis list --format json
  code-analysis list --full
")]
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Show full descriptions instead of minimal ones
        #[arg(long)]
        full: bool,
    },
    /// Print the full description of a tool
    Describe {
        /// Tool name, e.g. review_comments
        tool: String,
    },
    /// Run a tool locally and print its response
    #[command(long_about = "
Runs one tool the same way an MCP client would and prints the composed
response. The path is a file for the review_* tools and a directory for
draw_gridmat.

Examples:
  code-analysis run review_comments src/lib.rs
  code-analysis run draw_gridmat .
")]
    Run {
        /// Tool name
        tool: String,
        /// File or directory to pass to the tool
        path: String,
    },
    /// Render a prompt without reading any files
    Prompt {
        /// Prompt name, e.g. prompt_review_names
        name: String,
        /// Path substituted into the prompt
        path: String,
    },
    /// Generate shell completion scripts
    #[command(long_about = "
Generates shell completion scripts for various shells.

Examples:
  # Bash (add to ~/.bashrc or ~/.bash_profile)
  code-analysis completion bash > ~/.local/share/bash-completion/completions/code-analysis

  # Zsh (add to ~/.zshrc or a file in fpath)
  code-analysis completion zsh > ~/.zfunc/_code-analysis

  # Fish
  code-analysis completion fish > ~/.config/fish/completions/code-analysis.fish

  # PowerShell
  code-analysis completion powershell >> $PROFILE
")]
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }

    pub fn is_tty() -> bool {
        io::stdout().is_terminal()
    }

    pub fn should_use_color() -> bool {
        Self::is_tty() && std::env::var("NO_COLOR").is_err()
    }
}
