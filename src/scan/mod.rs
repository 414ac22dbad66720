//! Filesystem scanning: ignore matching and tree building.

pub mod matcher;
pub mod tree;

pub use matcher::IgnoreMatcher;
pub use tree::generate_tree;
