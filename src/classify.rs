//! Map a directory's root-relative path to a language/media pair.
//!
//! Two layouts are recognised, checked in this order:
//!
//! ```text
//! news/{language}/{media}/...   -> (LANGUAGE, MEDIA)
//! {language}/{media}/...        -> (LANGUAGE, MEDIA)
//! ```
//!
//! Directories with fewer than two segments are not classified and their
//! files never enter the structure.

/// Result of classifying one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub language_code: String,
    pub media_name: Option<String>,
}

/// Classify a directory from its ordered path segments.
///
/// `news_folder` is the literal first segment that marks the prefixed layout.
/// Returns `None` when there are fewer than two segments.
pub fn classify<S: AsRef<str>>(segments: &[S], news_folder: &str) -> Option<Classification> {
    let (lang, media) = match segments {
        [first, lang, media, ..] if first.as_ref() == news_folder => (lang, media),
        [lang, media, ..] => (lang, media),
        _ => return None,
    };
    Some(Classification {
        language_code: lang.as_ref().to_uppercase(),
        media_name: Some(media.as_ref().to_uppercase()),
    })
}
