//! Content loading for review tools
//!
//! Two read-only views of the filesystem: the full text of a file, and an
//! indented outline of a directory tree. Nothing here caches or keeps state
//! between calls; every invocation reads the filesystem afresh.

use crate::error::{CodeAnalysisError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Indentation added per nesting level in directory outlines
pub const INDENT: &str = "  ";

/// Marker prefix for hidden entries
const HIDDEN_PREFIX: char = '.';

/// Read the full text of a file
///
/// No size limit is applied here.
pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| CodeAnalysisError::io(path, e))
}

/// One line of a directory outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Final path segment of the entry
    pub name: String,
    /// Whether the entry is a directory
    pub is_dir: bool,
    /// Nesting depth below the listing root; the root itself is depth 0
    pub depth: usize,
}

impl fmt::Display for DirectoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", INDENT.repeat(self.depth), self.name)?;
        if self.is_dir {
            write!(f, "/")?;
        }
        Ok(())
    }
}

/// Options controlling which entries a listing skips
#[derive(Debug, Clone, Default)]
pub struct ListingOptions {
    /// Directory names that are neither printed nor descended into
    pub excluded_directories: Vec<String>,
}

impl ListingOptions {
    /// Options skipping the given directory names
    pub fn new(excluded_directories: Vec<String>) -> Self {
        Self {
            excluded_directories,
        }
    }

    fn is_visible(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        if name.starts_with(HIDDEN_PREFIX) {
            return false;
        }
        // Links to directories are neither followed nor listed
        if entry.path_is_symlink() && entry.path().is_dir() {
            return false;
        }
        !(entry.file_type().is_dir()
            && self
                .excluded_directories
                .iter()
                .any(|excluded| excluded.as_str() == name))
    }
}

/// Outline name of an entry; the root keeps no trailing separator
fn outline_name(name: &str, depth: usize) -> String {
    if depth == 0 {
        name.trim_end_matches(std::path::is_separator).to_string()
    } else {
        name.to_string()
    }
}

/// Files sort before directories; each group is ordered by name
fn files_then_directories(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Enumerate a directory tree as outline entries
///
/// The root comes first at depth 0. Inside every directory its files are
/// listed first, then each subdirectory is descended into, both groups in
/// lexicographic order. Hidden entries and excluded directories are pruned
/// before descending. Symbolic links are not followed, and links to
/// directories are left out of the outline.
///
/// Fails when the root is missing, unreadable, or not a directory.
/// Unreadable descendants are skipped with a warning.
pub fn list_directory(
    root: impl AsRef<Path>,
    options: &ListingOptions,
) -> Result<Vec<DirectoryEntry>> {
    let root = root.as_ref();
    let metadata = std::fs::metadata(root).map_err(|e| CodeAnalysisError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(CodeAnalysisError::NotADirectory(root.to_path_buf()));
    }

    let walker = WalkDir::new(root)
        .sort_by(files_then_directories)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || options.is_visible(entry));

    let mut entries = Vec::new();
    for item in walker {
        match item {
            Ok(entry) => entries.push(DirectoryEntry {
                name: outline_name(&entry.file_name().to_string_lossy(), entry.depth()),
                is_dir: entry.file_type().is_dir(),
                depth: entry.depth(),
            }),
            Err(e) if e.depth() == 0 => {
                return Err(CodeAnalysisError::io(root, e.into()));
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
            }
        }
    }

    Ok(entries)
}

/// Render outline entries one per line
pub fn render_listing(entries: &[DirectoryEntry]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// List and render a directory tree in one step
pub fn directory_tree(root: impl AsRef<Path>, options: &ListingOptions) -> Result<String> {
    list_directory(root, options).map(|entries| render_listing(&entries))
}
