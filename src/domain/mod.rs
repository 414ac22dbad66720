//! Core types and fixed names shared across the crate.

use indexmap::IndexMap;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Manifest file read from the current working directory.
pub const MANIFEST_FILENAME: &str = ".codebase_filenames";

/// Consolidated document written to the current working directory.
pub const OUTPUT_FILENAME: &str = ".codebase_content";

/// The tool's own state files, always excluded no matter what the manifest says.
pub const BUILT_IN_IGNORES: &[&str] = &[MANIFEST_FILENAME, OUTPUT_FILENAME];

/// Width of the `=` separator line between document blocks.
pub const SEPARATOR_WIDTH: usize = 80;

/// First line of the rendered tree block.
pub const TREE_TITLE: &str = "Project Tree:";

/// A filtered view of the filesystem.
///
/// Directory children keep insertion order, which after the builder's sort is
/// directories-first, then lexicographic by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Directory(IndexMap<String, TreeNode>),
    File,
}

impl TreeNode {
    pub fn empty_dir() -> Self {
        TreeNode::Directory(IndexMap::new())
    }
}

/// Parsed `.codebase_filenames` content. Built once per run, immutable after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Files to concatenate into the output, in declaration order.
    pub included_files: Vec<PathBuf>,
    /// Glob patterns pruning the tree view, in declaration order.
    pub ignore_patterns: Vec<String>,
}

/// Outcome of a consolidation run that completed.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Per-file problems, in the order they were hit.
    pub warnings: Vec<Warning>,
    /// Number of included files that produced a block in the document.
    pub files_written: usize,
}

/// Fatal manifest problems. These abort the run before any output is written.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest file not found: {0}")]
    Missing(PathBuf),

    #[error("failed reading manifest {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest line {line} appears before any section marker: {text:?}")]
    LineOutsideSection { line: usize, text: String },
}

/// Non-fatal per-file problems collected during consolidation.
///
/// A warned-about file contributes zero blocks to the output; separators stay
/// balanced because header, content, and separator are skipped together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    FileNotFound { path: String },
    FileReadError { path: String, reason: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::FileNotFound { path } => write!(f, "File not found: {}", path),
            Warning::FileReadError { path, reason } => {
                write!(f, "Error processing file {}: {}", path, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_ignores_cover_both_state_files() {
        assert!(BUILT_IN_IGNORES.contains(&MANIFEST_FILENAME));
        assert!(BUILT_IN_IGNORES.contains(&OUTPUT_FILENAME));
    }

    #[test]
    fn test_warning_display_names_the_file() {
        let warn = Warning::FileNotFound { path: "src/gone.rs".to_string() };
        assert_eq!(warn.to_string(), "File not found: src/gone.rs");

        let warn = Warning::FileReadError {
            path: "img/logo.png".to_string(),
            reason: "stream did not contain valid UTF-8".to_string(),
        };
        assert!(warn.to_string().starts_with("Error processing file img/logo.png"));
    }
}
