//! Manifest loading
//!
//! The manifest is a two-section line format: file paths under an
//! `Included:` marker, tree-pruning glob patterns under an
//! `Ignored from tree:` marker.

pub mod parser;

pub use parser::{parse_manifest, parse_manifest_str};
