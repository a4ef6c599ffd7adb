//! Filename extraction from slash-delimited tool paths.

/// Return the last `/`-separated segment of `path`.
///
/// One leading `/` is stripped first. Trailing separators are not trimmed, so
/// `"src/"` yields `""`. An absent path yields `""`.
pub fn extract_filename(path: Option<&str>) -> &str {
    let Some(path) = path else {
        return "";
    };
    let normalized = path.strip_prefix('/').unwrap_or(path);
    normalized.rsplit('/').next().unwrap_or(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_level_file() {
        assert_eq!(extract_filename(Some("/App.jsx")), "App.jsx");
    }

    #[test]
    fn nested_path() {
        assert_eq!(
            extract_filename(Some("/src/components/ui/Button.tsx")),
            "Button.tsx"
        );
    }

    #[test]
    fn relative_path() {
        assert_eq!(extract_filename(Some("utils/helper.ts")), "helper.ts");
        assert_eq!(extract_filename(Some("README.md")), "README.md");
    }

    #[test]
    fn absent_and_empty() {
        assert_eq!(extract_filename(None), "");
        assert_eq!(extract_filename(Some("")), "");
        assert_eq!(extract_filename(Some("/")), "");
    }

    #[test]
    fn trailing_separator_yields_empty_segment() {
        assert_eq!(extract_filename(Some("/src/components/")), "");
    }

    #[test]
    fn only_one_leading_separator_is_stripped() {
        assert_eq!(extract_filename(Some("//double.ts")), "double.ts");
        assert_eq!(extract_filename(Some("//")), "");
    }
}
