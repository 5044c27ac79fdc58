//! Command-line front end for the code-analysis review server
//!
//! The binary serves MCP over stdio and offers local commands to list,
//! describe, run and prompt the review tools.

pub mod cli;
pub mod completions;
pub mod describe;
pub mod error;
pub mod exit_codes;
pub mod list;
pub mod logging;
pub mod prompt;
pub mod run;
pub mod serve;
