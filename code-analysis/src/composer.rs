//! Response composition
//!
//! Tool output is a header line, the loaded content inside a Markdown code
//! fence, and the instruction text, in that order.

/// Opening and closing marker of the content block
pub const FENCE: &str = "```";

/// Header introducing file content, e.g. `File: src/app.py`
pub fn file_header(filepath: &str) -> String {
    format!("File: {filepath}")
}

/// Header introducing a directory listing
pub fn directory_header(directory: &str) -> String {
    format!("Directory structure of `{directory}`:")
}

/// Assemble the envelope sent back to the agent
///
/// Content and instructions are embedded verbatim; a fence inside the
/// content is not escaped.
pub fn compose(header: &str, content: &str, instructions: &str) -> String {
    format!("{header}\n{FENCE}\n{content}\n{FENCE}\n\n{instructions}")
}

/// Compose the response for a single-file review
pub fn compose_file_review(filepath: &str, content: &str, instructions: &str) -> String {
    compose(&file_header(filepath), content, instructions)
}

/// Compose the response for a directory diagram
pub fn compose_directory_review(directory: &str, listing: &str, instructions: &str) -> String {
    compose(&directory_header(directory), listing, instructions)
}
