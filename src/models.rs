//! Data models for scanned articles and their language/media groups.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Article`]: Metadata extracted from one article file
//! - [`Group`]: Articles sharing a language/media classification
//! - [`Structure`]: Every group found during one scan, keyed by group key
//!
//! All three serialize with serde so the scan result can be written out as a
//! JSON manifest alongside the HTML page.

use serde::Serialize;
use std::collections::BTreeMap;

/// One parsed article file.
///
/// Created during extraction and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// File name including the article extension.
    pub filename: String,
    /// First level-one heading, or the file stem when the file has none.
    pub title: String,
    /// `YYYY-MM-DD`, or the raw eight digits when they are not a calendar date.
    pub date: String,
    /// First line of the first blank-line-separated paragraph, possibly truncated.
    pub summary: String,
    /// Root-relative path with `/` separators.
    pub filepath: String,
}

/// A collection of articles sharing one language/media classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    /// Upper-cased language code, e.g. `EN`.
    pub language_code: String,
    /// Upper-cased media name, e.g. `BBC`.
    pub media_name: Option<String>,
    /// Root-relative path of the first directory that created this group.
    pub folder_path: String,
    pub articles: Vec<Article>,
}

impl Group {
    pub fn new(language_code: String, media_name: Option<String>, folder_path: String) -> Self {
        Self {
            language_code,
            media_name,
            folder_path,
            articles: Vec::new(),
        }
    }

    /// Label shown next to each article: `LANG - MEDIA`, or `LANG` alone.
    pub fn language_tag(&self) -> String {
        match &self.media_name {
            Some(media) => format!("{} - {}", self.language_code, media),
            None => self.language_code.clone(),
        }
    }
}

/// Build the composite group key for a classification.
pub fn group_key(language_code: &str, media_name: Option<&str>) -> String {
    match media_name {
        Some(media) => format!("{}_{}", language_code, media),
        None => language_code.to_string(),
    }
}

/// The full result of one traversal and extraction pass.
///
/// Groups are kept in a `BTreeMap` so iteration is already in ascending key
/// order, which is the order the news list is rendered in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Structure {
    groups: BTreeMap<String, Group>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the group for this classification, creating it on first use.
    ///
    /// An existing group keeps its original `folder_path`.
    pub fn group_mut(
        &mut self,
        language_code: &str,
        media_name: Option<&str>,
        folder_path: &str,
    ) -> &mut Group {
        self.groups
            .entry(group_key(language_code, media_name))
            .or_insert_with(|| {
                Group::new(
                    language_code.to_string(),
                    media_name.map(str::to_string),
                    folder_path.to_string(),
                )
            })
    }

    pub fn get(&self, key: &str) -> Option<&Group> {
        self.groups.get(key)
    }

    /// Iterate over `(key, group)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Group)> {
        self.groups.iter()
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of groups ("folders" in the run summary).
    pub fn folder_count(&self) -> usize {
        self.groups.len()
    }

    pub fn article_count(&self) -> usize {
        self.groups.values().map(|g| g.articles.len()).sum()
    }

    /// Sort every group's articles newest first.
    ///
    /// Dates compare as strings; equal dates keep their scan order.
    pub fn sort_articles(&mut self) {
        for group in self.groups.values_mut() {
            sort_by_date_desc(&mut group.articles);
        }
    }
}

pub(crate) fn sort_by_date_desc(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(filename: &str, date: &str) -> Article {
        Article {
            filename: filename.to_string(),
            title: filename.to_string(),
            date: date.to_string(),
            summary: String::new(),
            filepath: format!("news/en/bbc/{}", filename),
        }
    }

    #[test]
    fn test_group_key_with_and_without_media() {
        assert_eq!(group_key("EN", Some("BBC")), "EN_BBC");
        assert_eq!(group_key("EN", None), "EN");
    }

    #[test]
    fn test_language_tag() {
        let with_media = Group::new("EN".to_string(), Some("BBC".to_string()), "en/bbc".to_string());
        assert_eq!(with_media.language_tag(), "EN - BBC");

        let bare = Group::new("FR".to_string(), None, "fr".to_string());
        assert_eq!(bare.language_tag(), "FR");
    }

    #[test]
    fn test_group_mut_keeps_first_folder_path() {
        let mut structure = Structure::new();
        structure
            .group_mut("EN", Some("BBC"), "news/en/bbc")
            .articles
            .push(article("a.md", "2024-01-01"));
        structure
            .group_mut("EN", Some("BBC"), "en/bbc")
            .articles
            .push(article("b.md", "2024-01-02"));

        assert_eq!(structure.folder_count(), 1);
        assert_eq!(structure.article_count(), 2);
        let group = structure.get("EN_BBC").unwrap();
        assert_eq!(group.folder_path, "news/en/bbc");
    }

    #[test]
    fn test_iteration_is_key_ordered() {
        let mut structure = Structure::new();
        structure.group_mut("FR", Some("LEMONDE"), "fr/lemonde");
        structure.group_mut("EN", Some("BBC"), "en/bbc");
        structure.group_mut("DE", Some("DW"), "de/dw");

        let keys: Vec<&String> = structure.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["DE_DW", "EN_BBC", "FR_LEMONDE"]);
    }

    #[test]
    fn test_sort_articles_newest_first_and_stable() {
        let mut structure = Structure::new();
        let group = structure.group_mut("EN", Some("BBC"), "en/bbc");
        group.articles.push(article("old.md", "2023-12-31"));
        group.articles.push(article("first.md", "2024-02-01"));
        group.articles.push(article("second.md", "2024-02-01"));

        structure.sort_articles();

        let names: Vec<&str> = structure
            .get("EN_BBC")
            .unwrap()
            .articles
            .iter()
            .map(|a| a.filename.as_str())
            .collect();
        assert_eq!(names, vec!["first.md", "second.md", "old.md"]);
    }

    #[test]
    fn test_structure_serializes_as_map() {
        let mut structure = Structure::new();
        structure
            .group_mut("EN", Some("BBC"), "news/en/bbc")
            .articles
            .push(article("20240301_story.md", "2024-03-01"));

        let json = serde_json::to_value(&structure).unwrap();
        assert_eq!(json["EN_BBC"]["language_code"], "EN");
        assert_eq!(json["EN_BBC"]["media_name"], "BBC");
        assert_eq!(json["EN_BBC"]["articles"][0]["date"], "2024-03-01");
    }
}
