//! Rendering the filtered tree as text.

pub mod tree;

pub use tree::render_tree;
