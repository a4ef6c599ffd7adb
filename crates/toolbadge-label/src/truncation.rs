//! Display-width truncation for filenames.

use std::borrow::Cow;

/// Default display width for a filename inside a label.
pub const DEFAULT_MAX_FILENAME_LEN: usize = 30;

const ELLIPSIS: &str = "...";

/// Shorten `filename` to at most `max_len` characters, keeping its extension.
///
/// Names within the limit are returned unchanged. Otherwise the extension
/// (from the last `.` to the end) is kept and the stem is cut to make room for
/// `...`. When the extension leaves no room for any of the stem, the whole name
/// is cut flat to `max_len - 3` characters plus `...` and the extension is lost.
///
/// Lengths are counted in characters, never bytes.
pub fn truncate_filename(filename: &str, max_len: usize) -> Cow<'_, str> {
    if filename.chars().count() <= max_len {
        return Cow::Borrowed(filename);
    }

    let (stem, extension) = match filename.rfind('.') {
        Some(idx) => filename.split_at(idx),
        None => (filename, ""),
    };

    let reserved = extension.chars().count() + ELLIPSIS.len();
    let truncated = match max_len.checked_sub(reserved) {
        Some(available) if available > 0 => {
            format!("{}{}{}", take_chars(stem, available), ELLIPSIS, extension)
        }
        _ => format!(
            "{}{}",
            take_chars(filename, max_len.saturating_sub(ELLIPSIS.len())),
            ELLIPSIS
        ),
    };

    tracing::trace!(original = filename, %truncated, max_len, "Truncated filename");
    Cow::Owned(truncated)
}

/// Prefix of `s` holding at most `n` characters.
fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_truncation_when_within_limit() {
        assert_eq!(truncate_filename("App.jsx", 30), "App.jsx");
        let exact = "a".repeat(26) + ".tsx";
        assert_eq!(truncate_filename(&exact, 30), exact);
    }

    #[test]
    fn long_name_keeps_extension() {
        let result = truncate_filename("VeryLongComponentNameThatShouldBeTruncated.tsx", 30);
        // 30 - 4 (".tsx") - 3 ("...") = 23 characters of stem
        assert_eq!(result, "VeryLongComponentNameTh....tsx");
        assert_eq!(result.chars().count(), 30);
        assert!(result.contains("..."));
        assert!(result.ends_with(".tsx"));
    }

    #[test]
    fn name_without_extension() {
        let name = "x".repeat(40);
        let result = truncate_filename(&name, 30);
        assert_eq!(result, format!("{}...", "x".repeat(27)));
    }

    #[test]
    fn long_extension_falls_back_to_flat_cut() {
        // Extension of 41 chars leaves no room for the stem
        let name = format!("a.{}", "b".repeat(40));
        let result = truncate_filename(&name, 30);
        assert_eq!(result, format!("a.{}...", "b".repeat(25)));
        assert_eq!(result.chars().count(), 30);
    }

    #[test]
    fn zero_available_falls_back_to_flat_cut() {
        // 10 - 7 (".abcdef") - 3 = 0
        let result = truncate_filename("stem_is_long.abcdef", 10);
        assert_eq!(result, "stem_is...");
    }

    #[test]
    fn tiny_width_is_clamped() {
        assert_eq!(truncate_filename("abcdef", 3), "...");
        assert_eq!(truncate_filename("abcdef", 1), "...");
        assert_eq!(truncate_filename("abcdef", 0), "...");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let name = "é".repeat(35) + ".rs";
        let result = truncate_filename(&name, 30);
        assert_eq!(result, format!("{}....rs", "é".repeat(24)));
        assert_eq!(result.chars().count(), 30);
    }

    #[test]
    fn extension_is_taken_from_last_dot() {
        let result = truncate_filename("component.stories.test.fixture.tsx", 20);
        assert_eq!(result, "component.sto....tsx");
    }
}
