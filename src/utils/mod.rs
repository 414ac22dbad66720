//! Small shared helpers.

pub mod paths;

pub use paths::normalize_path;
