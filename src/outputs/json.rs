//! JSON manifest of the scanned structure.
//!
//! Written only when a manifest path is configured, after the HTML page. The
//! manifest holds the same groups and article order the page shows:
//!
//! ```text
//! {
//!   "EN_BBC": {
//!     "language_code": "EN",
//!     "media_name": "BBC",
//!     "folder_path": "news/en/bbc",
//!     "articles": [ { "filename": ..., "title": ..., "date": ..., ... } ]
//!   }
//! }
//! ```

use crate::error::{Error, Result};
use crate::models::Structure;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Serialize `structure` (articles newest first) as pretty JSON to `path`.
///
/// Missing parent directories are created.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_structure(structure: &Structure, path: &Path) -> Result<()> {
    let mut ordered = structure.clone();
    ordered.sort_articles();
    let json = serde_json::to_string_pretty(&ordered)?;

    let io_err = |source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(io_err)?;
    }
    fs::write(path, json).await.map_err(io_err)?;

    info!(groups = structure.folder_count(), "Wrote JSON manifest");
    Ok(())
}
