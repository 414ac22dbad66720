//! Ignore-pattern matching against relative paths.

use crate::domain::BUILT_IN_IGNORES;
use crate::utils::normalize_path;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Decides whether a path relative to the scan root should be excluded.
///
/// Matching is full-string shell-glob over the forward-slash-normalized
/// relative path: `*` matches any run of characters including `/`, `?`
/// matches exactly one character, and `[...]` classes are supported. Matching
/// is case-sensitive on every platform so runs stay deterministic.
pub struct IgnoreMatcher {
    globs: GlobSet,
}

impl IgnoreMatcher {
    /// Build a matcher from the manifest's ignore patterns.
    ///
    /// Patterns that fail to parse as globs are warned about and skipped;
    /// they never match anything.
    pub fn new(patterns: &[String]) -> Self {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(e) => {
                    tracing::warn!("Skipping invalid ignore pattern {:?}: {}", pattern, e);
                }
            }
        }
        // An empty builder cannot fail; a builder of valid globs cannot either.
        let globs = builder.build().unwrap_or_else(|_| GlobSet::empty());
        Self { globs }
    }

    /// True if `rel_path` is one of the tool's own state files or matches any
    /// ignore pattern.
    pub fn should_ignore(&self, rel_path: &Path) -> bool {
        if let Some(name) = rel_path.file_name().and_then(|n| n.to_str()) {
            if BUILT_IN_IGNORES.contains(&name) {
                return true;
            }
        }

        let normalized = normalize_path(&rel_path.to_string_lossy());
        self.globs.is_match(&normalized)
    }
}
