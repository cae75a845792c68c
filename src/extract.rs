//! Per-file metadata extraction: title, date and summary.
//!
//! Each rule is a separate function so it can be tested on its own:
//! - **Title**: first line of the form `# text` (a single `#`, whitespace, text)
//! - **Date**: first run of eight digits in the *file name*, read as `YYYYMMDD`
//! - **Summary**: first line after the first blank line in the content
//!
//! Content is matched with `\n` line endings; `\r\n` and lone `\r` are
//! normalised first.
//!
//! [`extract_article`] combines them and reads the file and its modification
//! time. Its errors are per-file; the caller logs and skips them.

use crate::config::Settings;
use crate::models::Article;
use crate::utils::{normalize_newlines, strip_article_extension, truncate_with_marker};
use chrono::{DateTime, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use std::time::SystemTime;
use tokio::fs;
use tracing::{debug, instrument};

static TITLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#\s+(.+)$").unwrap());
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{8}").unwrap());
static SUMMARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\n([^\n]+)").unwrap());

/// Whether a file name is an article: has the article extension and is not the readme.
pub fn is_article_file(name: &str, settings: &Settings) -> bool {
    name.ends_with(&settings.article_extension) && name != settings.readme_name
}

/// First level-one heading text, falling back to the file stem.
pub fn extract_title(content: &str, filename: &str, extension: &str) -> String {
    let content = normalize_newlines(content);
    TITLE_RE
        .captures(&content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| strip_article_extension(filename, extension).to_string())
}

/// Date encoded in the file name.
///
/// Returns `YYYY-MM-DD` for a valid calendar date, the raw eight digits when
/// they are not one, and `None` when the name has no eight-digit run.
pub fn date_from_filename(filename: &str) -> Option<String> {
    let digits = DATE_RE.find(filename)?.as_str();
    Some(match parse_compact_date(digits) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => digits.to_string(),
    })
}

fn parse_compact_date(digits: &str) -> Option<NaiveDate> {
    if !digits.is_ascii() {
        return None;
    }
    let year: i32 = digits.get(0..4)?.parse().ok()?;
    let month: u32 = digits.get(4..6)?.parse().ok()?;
    let day: u32 = digits.get(6..8)?.parse().ok()?;
    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Local calendar date of a modification time.
pub fn date_from_mtime(modified: SystemTime) -> String {
    DateTime::<Local>::from(modified).format("%Y-%m-%d").to_string()
}

/// First line following the first blank line, truncated to `max_chars`.
pub fn extract_summary(content: &str, max_chars: usize) -> String {
    let content = normalize_newlines(content);
    SUMMARY_RE
        .captures(&content)
        .and_then(|caps| caps.get(1))
        .map(|m| truncate_with_marker(m.as_str(), max_chars))
        .unwrap_or_default()
}

/// Read one article file and build its [`Article`].
///
/// `filepath` is the root-relative path recorded on the article.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn extract_article(
    path: &Path,
    filename: &str,
    filepath: String,
    settings: &Settings,
) -> std::io::Result<Article> {
    let content = fs::read_to_string(path).await?;

    let title = extract_title(&content, filename, &settings.article_extension);
    let date = match date_from_filename(filename) {
        Some(date) => date,
        None => date_from_mtime(fs::metadata(path).await?.modified()?),
    };
    let summary = extract_summary(&content, settings.summary_max_chars);

    debug!(%title, %date, "Extracted article");
    Ok(Article {
        filename: filename.to_string(),
        title,
        date,
        summary,
        filepath,
    })
}
