//! Manifest file parsing.

use crate::domain::{Manifest, ManifestError, BUILT_IN_IGNORES};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const INCLUDED_MARKER: &str = "Included:";
const IGNORED_MARKER: &str = "Ignored from tree:";

#[derive(Clone, Copy)]
enum Section {
    Included,
    Ignored,
}

/// Read and parse the manifest file.
pub fn parse_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ManifestError::Missing(path.to_path_buf())
        } else {
            ManifestError::Io { path: path.to_path_buf(), source }
        }
    })?;
    parse_manifest_str(&content)
}

/// Parse manifest text.
///
/// Lines are trimmed; blank lines are skipped everywhere. A repeated marker
/// simply reactivates its section, accumulating into the same list. A
/// non-blank line before the first marker is malformed input and fails the
/// run. Entries in the included section that name one of the tool's own
/// state files are dropped silently.
pub fn parse_manifest_str(content: &str) -> Result<Manifest, ManifestError> {
    let mut section: Option<Section> = None;
    let mut included_files: Vec<PathBuf> = Vec::new();
    let mut ignore_patterns: Vec<String> = Vec::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if line == INCLUDED_MARKER {
            section = Some(Section::Included);
            continue;
        }
        if line == IGNORED_MARKER {
            section = Some(Section::Ignored);
            continue;
        }

        match section {
            None => {
                return Err(ManifestError::LineOutsideSection {
                    line: idx + 1,
                    text: line.to_string(),
                });
            }
            Some(Section::Included) => {
                if !BUILT_IN_IGNORES.contains(&line) {
                    included_files.push(PathBuf::from(line));
                }
            }
            Some(Section::Ignored) => {
                ignore_patterns.push(line.replace('\\', "/"));
            }
        }
    }

    Ok(Manifest { included_files, ignore_patterns })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_both_sections() {
        let manifest = parse_manifest_str(
            "Included:\nsrc/main.rs\nsrc/util.rs\n\nIgnored from tree:\n*.log\nbuild/*\n",
        )
        .expect("manifest");
        assert_eq!(
            manifest.included_files,
            vec![PathBuf::from("src/main.rs"), PathBuf::from("src/util.rs")]
        );
        assert_eq!(manifest.ignore_patterns, vec!["*.log", "build/*"]);
    }

    #[test]
    fn test_blank_lines_skipped_everywhere() {
        let manifest =
            parse_manifest_str("\nIncluded:\n\na.rs\n\n\nIgnored from tree:\n\n*.tmp\n\n")
                .expect("manifest");
        assert_eq!(manifest.included_files, vec![PathBuf::from("a.rs")]);
        assert_eq!(manifest.ignore_patterns, vec!["*.tmp"]);
    }

    #[test]
    fn test_built_in_names_dropped_from_included() {
        let manifest = parse_manifest_str(
            "Included:\n.codebase_filenames\nmain.rs\n.codebase_content\n",
        )
        .expect("manifest");
        assert_eq!(manifest.included_files, vec![PathBuf::from("main.rs")]);
    }

    #[test]
    fn test_backslash_patterns_normalized() {
        let manifest =
            parse_manifest_str("Ignored from tree:\nbuild\\*\ndocs\\api\\*.html\n").expect("manifest");
        assert_eq!(manifest.ignore_patterns, vec!["build/*", "docs/api/*.html"]);
    }

    #[test]
    fn test_line_before_any_marker_fails() {
        let err = parse_manifest_str("stray.rs\nIncluded:\nmain.rs\n").unwrap_err();
        match err {
            ManifestError::LineOutsideSection { line, text } => {
                assert_eq!(line, 1);
                assert_eq!(text, "stray.rs");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_repeated_markers_accumulate() {
        let manifest = parse_manifest_str(
            "Included:\na.rs\nIgnored from tree:\n*.log\nIncluded:\nb.rs\n",
        )
        .expect("manifest");
        assert_eq!(
            manifest.included_files,
            vec![PathBuf::from("a.rs"), PathBuf::from("b.rs")]
        );
        assert_eq!(manifest.ignore_patterns, vec!["*.log"]);
    }

    #[test]
    fn test_empty_manifest_yields_empty_lists() {
        let manifest = parse_manifest_str("").expect("manifest");
        assert!(manifest.included_files.is_empty());
        assert!(manifest.ignore_patterns.is_empty());
    }

    #[test]
    fn test_missing_manifest_file_is_distinct_error() {
        let tmp = TempDir::new().expect("tmp");
        let err = parse_manifest(&tmp.path().join(".codebase_filenames")).unwrap_err();
        assert!(matches!(err, ManifestError::Missing(_)));
    }

    #[test]
    fn test_manifest_read_from_disk() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join(".codebase_filenames");
        fs::write(&path, "Included:\nfoo.txt\n\nIgnored from tree:\n*.tmp\n").expect("write");

        let manifest = parse_manifest(&path).expect("manifest");
        assert_eq!(manifest.included_files, vec![PathBuf::from("foo.txt")]);
        assert_eq!(manifest.ignore_patterns, vec!["*.tmp"]);
    }
}
