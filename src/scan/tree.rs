//! Directory tree building with ignore-pattern pruning.

use crate::domain::TreeNode;
use crate::scan::IgnoreMatcher;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Walk the filesystem from `root` and build the filtered tree.
///
/// Ignored directories are pruned before descent: their contents are never
/// visited and never appear in the result. Ignored files are dropped
/// individually. A directory whose children were all filtered out still
/// appears, as an empty directory node.
///
/// Siblings are sorted directories-first, then lexicographically by name, so
/// the tree (and everything rendered from it) is identical across runs and
/// platforms. Unreadable directories are a run failure, not a silent skip.
pub fn generate_tree(root: &Path, matcher: &IgnoreMatcher) -> Result<TreeNode> {
    let mut children = IndexMap::new();
    walk(root, Path::new(""), matcher, &mut children)?;
    Ok(TreeNode::Directory(children))
}

fn walk(
    dir: &Path,
    rel_dir: &Path,
    matcher: &IgnoreMatcher,
    children: &mut IndexMap<String, TreeNode>,
) -> Result<()> {
    let mut entries: Vec<(bool, String, PathBuf)> = Vec::new();
    let read_dir = fs::read_dir(dir)
        .with_context(|| format!("Failed reading directory: {}", dir.display()))?;
    for entry in read_dir {
        let entry =
            entry.with_context(|| format!("Failed reading entry in: {}", dir.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed inspecting entry: {}", entry.path().display()))?;
        let name = entry.file_name().to_string_lossy().to_string();
        entries.push((file_type.is_dir(), name, entry.path()));
    }

    entries.sort_by(|a, b| {
        let dir_cmp = b.0.cmp(&a.0);
        if dir_cmp == std::cmp::Ordering::Equal {
            a.1.cmp(&b.1)
        } else {
            dir_cmp
        }
    });

    for (is_dir, name, path) in entries {
        let rel_path = rel_dir.join(&name);
        if matcher.should_ignore(&rel_path) {
            continue;
        }

        if is_dir {
            let mut sub = IndexMap::new();
            walk(&path, &rel_path, matcher, &mut sub)?;
            children.insert(name, TreeNode::Directory(sub));
        } else {
            children.insert(name, TreeNode::File);
        }
    }

    Ok(())
}
