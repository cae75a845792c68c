//! Error types for a single index regeneration run.
//!
//! Only fatal conditions live here. Per-article extraction failures are
//! logged and skipped by the scanner and never reach the caller.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The article root is missing or could not be traversed.
    #[error("filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read template {}: {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write output {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A template anchor pair (open tag ... close tag) was not located.
    #[error("template region `{0}` not found")]
    RegionNotFound(&'static str),

    #[error("no articles found in the project structure")]
    NoArticles,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_not_found_message() {
        let err = Error::RegionNotFound("news-list");
        assert_eq!(err.to_string(), "template region `news-list` not found");
    }

    #[test]
    fn test_filesystem_error_names_path() {
        let err = Error::Filesystem {
            path: PathBuf::from("missing/root"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing/root"));
        assert!(msg.contains("gone"));
    }
}
