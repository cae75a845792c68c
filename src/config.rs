//! Run settings: built-in defaults, an optional YAML file, then CLI overrides.
//!
//! The defaults reproduce the site's historical layout: articles under the
//! working directory, `index_template.html` in, `index.html` out.

use crate::cli::Cli;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory tree holding the articles
    pub root_dir: PathBuf,
    /// HTML skeleton containing the substitution regions
    pub template_path: PathBuf,
    /// Generated page, overwritten each run
    pub output_path: PathBuf,
    /// Suffix identifying article files
    pub article_extension: String,
    /// File name excluded even when it carries the article extension
    pub readme_name: String,
    /// First path segment of the `news/{lang}/{media}` layout
    pub news_folder: String,
    /// Summary length before the truncation marker is added
    pub summary_max_chars: usize,
    /// Optional JSON manifest of the scanned structure
    pub json_output: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            template_path: PathBuf::from("index_template.html"),
            output_path: PathBuf::from("index.html"),
            article_extension: ".md".to_string(),
            readme_name: "README.md".to_string(),
            news_folder: "news".to_string(),
            summary_max_chars: 150,
            json_output: None,
        }
    }
}

impl Settings {
    /// Parse settings from YAML text. Missing keys take their defaults.
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load settings from a YAML file.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let settings = Self::from_yaml(&text)?;
        info!("Loaded configuration");
        Ok(settings)
    }

    /// Resolve the final settings for a run from parsed CLI arguments.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let base = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    /// Apply explicitly given CLI flags on top of these settings.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(root) = &cli.root {
            self.root_dir = root.clone();
        }
        if let Some(template) = &cli.template {
            self.template_path = template.clone();
        }
        if let Some(output) = &cli.output {
            self.output_path = output.clone();
        }
        if let Some(json) = &cli.json_output {
            self.json_output = Some(json.clone());
        }
        self
    }
}
