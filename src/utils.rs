//! Small string and path helpers shared by the scanner and renderer.
//!
//! This module provides:
//! - Character-based truncation with a trailing marker for summaries
//! - Article-extension stripping for titles and link targets
//! - Hidden-entry detection for the tree walker
//! - Root-relative path formatting with `/` separators
//! - Line-ending normalisation for article text

use std::borrow::Cow;
use std::path::{Component, Path};

/// Marker appended to a truncated summary.
pub const TRUNCATION_MARKER: &str = "...";

/// Keep at most `max` characters of `s`, appending [`TRUNCATION_MARKER`] when
/// anything was cut.
///
/// Counts `char`s, not bytes, so multi-byte text is never split mid-character.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_with_marker("short", 150), "short");
/// assert_eq!(truncate_with_marker("abcdef", 3), "abc...");
/// ```
pub fn truncate_with_marker(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}{}", &s[..cut], TRUNCATION_MARKER),
        None => s.to_string(),
    }
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
///
/// Borrows the input unchanged when it contains no `\r`.
pub fn normalize_newlines(s: &str) -> Cow<'_, str> {
    if s.contains('\r') {
        Cow::Owned(s.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(s)
    }
}

/// Remove a trailing article extension (e.g. `.md`) if present.
pub fn strip_article_extension<'a>(name: &'a str, extension: &str) -> &'a str {
    name.strip_suffix(extension).unwrap_or(name)
}

/// Names beginning with `.` are hidden and never visited.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Split a root-relative path into its normal segments.
pub fn path_segments(rel: &Path) -> Vec<String> {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

/// Join root-relative segments with `/` regardless of platform.
pub fn to_slash_path(rel: &Path) -> String {
    path_segments(rel).join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate_with_marker("Hello, world!", 150), "Hello, world!");
    }

    #[test]
    fn test_truncate_exact_length_untouched() {
        let s = "a".repeat(150);
        assert_eq!(truncate_with_marker(&s, 150), s);
    }

    #[test]
    fn test_truncate_long_string() {
        let s = "a".repeat(151);
        let result = truncate_with_marker(&s, 150);
        assert_eq!(result.chars().count(), 153);
        assert!(result.starts_with(&"a".repeat(150)));
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let s = "é".repeat(200);
        let result = truncate_with_marker(&s, 150);
        assert_eq!(result, format!("{}...", "é".repeat(150)));
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\nd"), "a\nb\nc\nd");
        assert!(matches!(normalize_newlines("plain\ntext"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_article_extension() {
        assert_eq!(strip_article_extension("20240301_story.md", ".md"), "20240301_story");
        assert_eq!(strip_article_extension("notes.txt", ".md"), "notes.txt");
        assert_eq!(
            strip_article_extension("news/en/bbc/20240301_story.md", ".md"),
            "news/en/bbc/20240301_story"
        );
    }

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(".git"));
        assert!(is_hidden(".draft.md"));
        assert!(!is_hidden("news"));
    }

    #[test]
    fn test_path_segments_and_slash_path() {
        let rel: PathBuf = ["news", "en", "bbc"].iter().collect();
        assert_eq!(path_segments(&rel), vec!["news", "en", "bbc"]);
        assert_eq!(to_slash_path(&rel), "news/en/bbc");
        assert_eq!(to_slash_path(Path::new("./en/bbc")), "en/bbc");
    }
}
