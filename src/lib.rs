//! codebase-consolidator: snapshot a codebase into one reviewable document
//!
//! Walks the project tree from the current working directory, prunes it
//! against the ignore patterns declared in `.codebase_filenames`, renders a
//! box-drawing tree diagram, and concatenates every whitelisted file into
//! `.codebase_content` for code review or LLM prompting.

pub mod cli;
pub mod consolidate;
pub mod domain;
pub mod manifest;
pub mod render;
pub mod scan;
pub mod utils;
