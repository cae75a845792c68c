//! Build the [`Structure`] for one run: walk, classify, extract.
//!
//! The structure is accumulated in a [`StructureBuilder`] owned by a single
//! call to [`build_structure`]; nothing is shared between runs.

use crate::classify::classify;
use crate::config::Settings;
use crate::error::Result;
use crate::extract::{extract_article, is_article_file};
use crate::models::Structure;
use crate::utils::{path_segments, to_slash_path};
use crate::walker::{DirListing, TreeWalker};
use tracing::{debug, error, info, instrument};

/// Accumulates groups and articles while the tree is scanned.
pub struct StructureBuilder<'a> {
    settings: &'a Settings,
    structure: Structure,
    failed: usize,
}

impl<'a> StructureBuilder<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            structure: Structure::new(),
            failed: 0,
        }
    }

    /// Add every article file of one directory.
    ///
    /// Unclassified directories and directories without article files are
    /// ignored. The group is created as soon as the directory has at least one
    /// article file, even if every file then fails to parse.
    pub async fn add_directory(&mut self, listing: &DirListing) {
        let article_files: Vec<&String> = listing
            .files
            .iter()
            .filter(|name| is_article_file(name, self.settings))
            .collect();
        if article_files.is_empty() {
            return;
        }

        let segments = path_segments(&listing.rel_path);
        let Some(class) = classify(&segments, &self.settings.news_folder) else {
            debug!(folder = %listing.rel_path.display(), "Unclassified directory; skipping");
            return;
        };

        let folder = to_slash_path(&listing.rel_path);
        self.structure
            .group_mut(&class.language_code, class.media_name.as_deref(), &folder);

        for name in article_files {
            let path = listing.path.join(name);
            let filepath = format!("{}/{}", folder, name);
            match extract_article(&path, name, filepath, self.settings).await {
                Ok(article) => {
                    self.structure
                        .group_mut(&class.language_code, class.media_name.as_deref(), &folder)
                        .articles
                        .push(article);
                }
                Err(e) => {
                    self.failed += 1;
                    error!(path = %path.display(), error = %e, "Error processing article; skipping");
                }
            }
        }
    }

    /// Number of article files that could not be parsed.
    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn finish(self) -> Structure {
        self.structure
    }
}

/// Scan `settings.root_dir` and return every classified group with its articles.
///
/// Fails only when the root itself cannot be walked.
#[instrument(level = "info", skip_all, fields(root = %settings.root_dir.display()))]
pub async fn build_structure(settings: &Settings) -> Result<Structure> {
    let walker = TreeWalker::new(&settings.root_dir)?;
    let mut builder = StructureBuilder::new(settings);

    for listing in walker {
        builder.add_directory(&listing).await;
    }

    let failed = builder.failed();
    let structure = builder.finish();
    info!(
        folders = structure.folder_count(),
        articles = structure.article_count(),
        failed,
        "Scanned article tree"
    );
    Ok(structure)
}
