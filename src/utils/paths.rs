//! Path normalization

/// Convert host path separators to forward slashes so pattern matching and
/// document headers look the same on every platform.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_converts_backslashes() {
        assert_eq!(normalize_path("src\\sub\\file.rs"), "src/sub/file.rs");
        assert_eq!(normalize_path("src/sub/file.rs"), "src/sub/file.rs");
    }
}
