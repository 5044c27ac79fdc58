//! Instruction catalog for the review tools
//!
//! Every tool has three pieces of static text: a one-line minimal description
//! shown in the tool listing, a full description served on demand as a
//! resource, and the instruction template appended to tool and prompt output.
//! The text lives in Markdown files next to this module and is embedded at
//! compile time.
//!
//! Lookups are exact, case-sensitive key matches. The catalog is built once and
//! never mutated, so it can be shared freely between requests.

use indexmap::IndexMap;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Tool name for comment review
pub const REVIEW_COMMENTS: &str = "review_comments";
/// Tool name for naming review
pub const REVIEW_NAMES: &str = "review_names";
/// Tool name for cohesion review
pub const REVIEW_COHESION: &str = "review_cohesion";
/// Tool name for performance review
pub const REVIEW_PERFORMANCE: &str = "review_performance";
/// Tool name for test coverage review
pub const REVIEW_TEST_COVERAGE: &str = "review_test_coverage";
/// Tool name for the execution-path diagram
pub const DRAW_GRIDMAT: &str = "draw_gridmat";

/// What a tool reads before composing its response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// The full text of a single file
    File,
    /// An indented listing of a directory tree
    Directory,
}

impl ContentSource {
    /// Name of the path argument tools and prompts of this kind accept
    pub fn argument_name(self) -> &'static str {
        match self {
            ContentSource::File => "filepath",
            ContentSource::Directory => "directory",
        }
    }
}

/// Static catalog data for one tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Tool name, unique within the catalog
    pub name: &'static str,
    /// Whether the tool reads a file or lists a directory
    pub source: ContentSource,
    /// Description the tool registers itself with
    pub summary: &'static str,
    /// One-line summary for the tool listing
    pub minimal_description: &'static str,
    /// Detailed description served through the description resource
    pub full_description: &'static str,
    /// Review instructions forwarded verbatim to the agent
    pub instructions: &'static str,
}

/// Sentinel returned when a description is requested for an unknown tool
pub fn unknown_tool_message(name: &str) -> String {
    format!("Unknown tool: {name}")
}

/// Immutable mapping from tool name to catalog entry
///
/// Iteration follows insertion order, which is also the order tools get
/// registered in.
#[derive(Debug, Clone, Default)]
pub struct InstructionCatalog {
    entries: IndexMap<&'static str, CatalogEntry>,
}

impl InstructionCatalog {
    /// Build a catalog from entries; a later entry replaces an earlier one of the same name
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.name, entry))
                .collect(),
        }
    }

    /// The six built-in review tools
    pub fn builtin() -> Self {
        Self::new([
            CatalogEntry {
                name: REVIEW_COMMENTS,
                source: ContentSource::File,
                summary: "Read a source file and return its contents with instructions to identify superfluous and misleading comments.",
                minimal_description: "Find superfluous and inaccurate comments",
                full_description: include_str!("descriptions/review_comments.md").trim_end(),
                instructions: include_str!("instructions/review_comments.md"),
            },
            CatalogEntry {
                name: REVIEW_NAMES,
                source: ContentSource::File,
                summary: "Read a source file and return its contents with instructions to identify unclear, mismatched, or shadowed names.",
                minimal_description: "Find unclear, mismatched, or shadowed names",
                full_description: include_str!("descriptions/review_names.md").trim_end(),
                instructions: include_str!("instructions/review_names.md"),
            },
            CatalogEntry {
                name: REVIEW_COHESION,
                source: ContentSource::File,
                summary: "Read a source file and return its contents with instructions to identify scattered related logic that should be colocated.",
                minimal_description: "Find scattered logic that should be colocated",
                full_description: include_str!("descriptions/review_cohesion.md").trim_end(),
                instructions: include_str!("instructions/review_cohesion.md"),
            },
            CatalogEntry {
                name: REVIEW_PERFORMANCE,
                source: ContentSource::File,
                summary: "Read a source file and return its contents with instructions to identify unnecessary computation and inefficient algorithms.",
                minimal_description: "Find inefficient algorithms and unnecessary work",
                full_description: include_str!("descriptions/review_performance.md").trim_end(),
                instructions: include_str!("instructions/review_performance.md"),
            },
            CatalogEntry {
                name: REVIEW_TEST_COVERAGE,
                source: ContentSource::File,
                summary: "Read a source file and return its contents with instructions to identify untested code paths and suggest missing tests.",
                minimal_description: "Find untested code paths and suggest tests",
                full_description: include_str!("descriptions/review_test_coverage.md")
                    .trim_end(),
                instructions: include_str!("instructions/review_test_coverage.md"),
            },
            CatalogEntry {
                name: DRAW_GRIDMAT,
                source: ContentSource::Directory,
                summary: "List a directory's file structure and return it with instructions to draw an ASCII execution-path diagram with emoji-coded entry points.",
                minimal_description: "Draw ASCII execution-path diagram of a directory",
                full_description: include_str!("descriptions/draw_gridmat.md").trim_end(),
                instructions: include_str!("instructions/draw_gridmat.md"),
            },
        ])
    }

    /// Process-wide built-in catalog, built on first use
    pub fn global() -> &'static Self {
        static CATALOG: OnceLock<InstructionCatalog> = OnceLock::new();
        CATALOG.get_or_init(Self::builtin)
    }

    /// Look up an entry by exact tool name
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    /// Check whether a tool name is in the catalog
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Minimal description for a catalogued tool
    pub fn minimal_description(&self, name: &str) -> Option<&'static str> {
        self.get(name).map(|entry| entry.minimal_description)
    }

    /// Minimal description, or `fallback` for tools the catalog does not know
    pub fn minimal_description_or<'a>(&self, name: &str, fallback: &'a str) -> &'a str {
        self.minimal_description(name).unwrap_or(fallback)
    }

    /// Full description, or the `Unknown tool: {name}` sentinel
    ///
    /// Never fails: description lookups are documentation, not a critical path.
    pub fn full_description(&self, name: &str) -> Cow<'static, str> {
        match self.get(name) {
            Some(entry) => Cow::Borrowed(entry.full_description),
            None => Cow::Owned(unknown_tool_message(name)),
        }
    }

    /// Instruction template for a catalogued tool
    pub fn instructions(&self, name: &str) -> Option<&'static str> {
        self.get(name).map(|entry| entry.instructions)
    }

    /// Entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    /// Tool names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Number of catalogued tools
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
