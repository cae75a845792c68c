//! One complete regeneration: scan, render, splice, write.
//!
//! [`update_index`] is the fallible core. [`run`] wraps it for the binary:
//! it prints the one-line outcome and reports success as a `bool`.
//!
//! The output page is written in a single call after every fragment has been
//! computed and the template patched, so any earlier failure leaves the
//! previous page untouched.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::outputs::html::{existing_languages, render_language_showcase, render_news_list};
use crate::outputs::json::write_structure;
use crate::outputs::template::{splice_region, LANGUAGE_SHOWCASE, NEWS_LIST};
use crate::scan::build_structure;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument, warn};

/// Counts reported after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    pub output: PathBuf,
    pub folders: usize,
    pub articles: usize,
}

/// Patch both regions of `template`.
///
/// A missing language-showcase region is logged and left alone; a missing
/// news-list region is an error.
pub fn render_document(template: &str, showcase_html: &str, news_list_html: &str) -> Result<String> {
    let document = match splice_region(template, &LANGUAGE_SHOWCASE, showcase_html) {
        Ok(document) => document,
        Err(Error::RegionNotFound(region)) => {
            warn!(region, "Template region not found; leaving it unchanged");
            template.to_string()
        }
        Err(e) => return Err(e),
    };
    splice_region(&document, &NEWS_LIST, news_list_html)
}

/// Rebuild the output page from the article tree and the template.
#[instrument(level = "info", skip_all, fields(output = %settings.output_path.display()))]
pub async fn update_index(settings: &Settings) -> Result<UpdateSummary> {
    let structure = build_structure(settings).await?;
    if structure.is_empty() {
        return Err(Error::NoArticles);
    }

    let news_list_html = render_news_list(&structure, &settings.article_extension);
    let languages = existing_languages(&structure);
    let showcase_html = render_language_showcase(&languages);
    info!(languages = ?languages, "Rendered fragments");

    let template = fs::read_to_string(&settings.template_path)
        .await
        .map_err(|source| Error::TemplateRead {
            path: settings.template_path.clone(),
            source,
        })?;
    let document = render_document(&template, &showcase_html, &news_list_html)?;

    fs::write(&settings.output_path, document)
        .await
        .map_err(|source| Error::OutputWrite {
            path: settings.output_path.clone(),
            source,
        })?;
    info!(path = %settings.output_path.display(), "Wrote index page");

    if let Some(json_path) = &settings.json_output {
        if let Err(e) = write_structure(&structure, json_path).await {
            error!(path = %json_path.display(), error = %e, "Failed to write JSON manifest");
        }
    }

    Ok(UpdateSummary {
        output: settings.output_path.clone(),
        folders: structure.folder_count(),
        articles: structure.article_count(),
    })
}

/// The one-line diagnostic printed when a run fails.
pub fn failure_line(output: &Path, cause: &impl Display) -> String {
    format!("Error updating {}: {}", output.display(), cause)
}

/// Run [`update_index`], print the outcome line and report success.
pub async fn run(settings: &Settings) -> bool {
    match update_index(settings).await {
        Ok(summary) => {
            println!(
                "Successfully updated {} with {} folders and {} articles",
                summary.output.display(),
                summary.folders,
                summary.articles
            );
            true
        }
        Err(Error::NoArticles) => {
            warn!("No articles found; output left unchanged");
            println!("No articles found in the project structure");
            false
        }
        Err(e) => {
            error!(error = %e, "Index update failed");
            println!("{}", failure_line(&settings.output_path, &e));
            false
        }
    }
}
