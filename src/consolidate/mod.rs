//! Consolidation: orchestrates manifest parsing, tree building, rendering,
//! and the single-pass document write.

use crate::domain::{RunReport, Warning, SEPARATOR_WIDTH};
use crate::manifest::parse_manifest;
use crate::render::render_tree;
use crate::scan::{generate_tree, IgnoreMatcher};
use crate::utils::normalize_path;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Build the consolidated document.
///
/// The manifest is parsed first; a missing or malformed manifest aborts
/// before the output file is touched. The output file is opened exactly once
/// and written front to back: tree block, separator, then one block per
/// included file in manifest order. Per-file problems (missing on disk,
/// unreadable as UTF-8 text) are collected in the returned [`RunReport`]
/// and the file contributes no block at all, so separators stay balanced.
pub fn consolidate(root: &Path, manifest_path: &Path, output_path: &Path) -> Result<RunReport> {
    let manifest = parse_manifest(manifest_path)?;
    let matcher = IgnoreMatcher::new(&manifest.ignore_patterns);
    let tree = generate_tree(root, &matcher)?;
    let tree_lines = render_tree(&tree);

    let file = File::create(output_path)
        .with_context(|| format!("Failed creating output file: {}", output_path.display()))?;
    let mut out = BufWriter::new(file);

    write!(out, "{}\n\n", tree_lines.join("\n"))?;
    write_separator(&mut out)?;

    let mut report = RunReport::default();
    for included in &manifest.included_files {
        match append_file_block(&mut out, root, included)? {
            Ok(()) => report.files_written += 1,
            Err(warning) => report.warnings.push(warning),
        }
    }

    out.flush().with_context(|| {
        format!("Failed writing output file: {}", output_path.display())
    })?;
    Ok(report)
}

/// Write one included-file block, or return the warning explaining why the
/// file contributed nothing.
///
/// The content is read before the header is written, so a failed read leaves
/// no dangling header. The outer `Result` carries fatal output-write errors.
fn append_file_block(
    out: &mut impl Write,
    root: &Path,
    included: &Path,
) -> Result<std::result::Result<(), Warning>> {
    let display = normalize_path(&included.to_string_lossy());
    let path = root.join(included);

    if !path.exists() {
        return Ok(Err(Warning::FileNotFound { path: display }));
    }

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            return Ok(Err(Warning::FileReadError { path: display, reason: e.to_string() }));
        }
    };

    write!(out, "[FILE: {}]\n\n", display)?;
    out.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.write_all(b"\n")?;
    write_separator(out)?;
    Ok(Ok(()))
}

fn write_separator(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}\n", "=".repeat(SEPARATOR_WIDTH))?;
    Ok(())
}
