//! Structural patching of the HTML template.
//!
//! A [`Region`] is an open tag, arbitrary content (any number of lines) and
//! the matching close tag. Splicing keeps both tags and the whitespace
//! directly inside them and replaces only the content between.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A named anchor pair in the template.
pub struct Region {
    pub name: &'static str,
    pattern: Regex,
}

impl Region {
    /// Build a region from the element name and its class attribute.
    ///
    /// Matching tolerates whitespace before `>` in both tags and is
    /// non-greedy, so the first close tag after the open tag ends the region.
    pub fn new(name: &'static str, element: &str, class: &str) -> Self {
        let pattern = format!(
            r#"(?s)(<{el} class="{class}"\s*>\s*).*?(\s*</{el}\s*>)"#,
            el = regex::escape(element),
            class = regex::escape(class),
        );
        Self {
            name,
            // Element and class are escaped, so the pattern is always valid.
            pattern: Regex::new(&pattern).unwrap(),
        }
    }

    pub fn is_present(&self, document: &str) -> bool {
        self.pattern.is_match(document)
    }
}

/// `<div class="language-showcase"> ... </div>`
pub static LANGUAGE_SHOWCASE: Lazy<Region> =
    Lazy::new(|| Region::new("language-showcase", "div", "language-showcase"));

/// `<ul class="news-list"> ... </ul>`
pub static NEWS_LIST: Lazy<Region> = Lazy::new(|| Region::new("news-list", "ul", "news-list"));

/// Replace the content of every occurrence of `region` with `fragment`.
///
/// Returns [`Error::RegionNotFound`] if the region does not occur. An empty
/// fragment collapses the region to its tags and inner whitespace.
pub fn splice_region(document: &str, region: &Region, fragment: &str) -> Result<String> {
    if !region.is_present(document) {
        return Err(Error::RegionNotFound(region.name));
    }
    let patched = region.pattern.replace_all(document, |caps: &Captures| {
        format!("{}{}{}", &caps[1], fragment, &caps[2])
    });
    Ok(patched.into_owned())
}
