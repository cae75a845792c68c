//! Command-line interface definitions for the news index generator.
//!
//! Every flag is optional. Running the binary with no arguments regenerates
//! `index.html` from `index_template.html` using the articles under the
//! current directory.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the news index generator.
///
/// # Examples
///
/// ```sh
/// # Historical behavior: scan ".", read index_template.html, write index.html
/// news_index
///
/// # Different tree and output, plus a JSON manifest of what was found
/// news_index --root site --output site/index.html --json-output site/news.json
///
/// # Settings from a YAML file, with one flag taking precedence
/// news_index --config news_index.yaml --template alt_template.html
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Root of the article tree
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// HTML template containing the language-showcase and news-list regions
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Output HTML page (overwritten)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the scanned structure as JSON to this path
    #[arg(short, long)]
    pub json_output: Option<PathBuf>,
}
