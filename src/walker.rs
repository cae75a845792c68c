//! Recursive directory walk yielding each directory with its file names.
//!
//! The root itself is never yielded, hidden entries (names starting with `.`)
//! are pruned, and siblings are visited in file-name order so two walks over
//! an unchanged tree produce the same sequence.
//!
//! Within a directory, files sort ahead of subdirectories. Every directory's
//! files therefore arrive from walkdir directly after the directory itself,
//! and a listing is complete as soon as the next directory starts.

use crate::error::{Error, Result};
use crate::utils::is_hidden;
use std::cmp::Ordering;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// One visited directory and the visible files directly inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirListing {
    /// Path relative to the walk root.
    pub rel_path: PathBuf,
    /// The walk root joined with `rel_path`, usable for opening files.
    pub path: PathBuf,
    /// Sorted file names.
    pub files: Vec<String>,
}

/// Lazy pre-order walk over every directory below `root`.
pub struct TreeWalker {
    root: PathBuf,
    inner: walkdir::FilterEntry<walkdir::IntoIter, fn(&DirEntry) -> bool>,
    current: Option<DirListing>,
}

fn visible(entry: &DirEntry) -> bool {
    entry.depth() == 0 || !is_hidden(&entry.file_name().to_string_lossy())
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Regular files, and symlinks that resolve to one.
fn is_file_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

impl TreeWalker {
    /// Start a walk. Fails with [`Error::Filesystem`] if `root` is not a readable directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let meta = fs::metadata(&root).map_err(|source| Error::Filesystem {
            path: root.clone(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(Error::Filesystem {
                path: root.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
            });
        }

        let inner = WalkDir::new(&root)
            .follow_links(false)
            .sort_by(files_first)
            .into_iter()
            .filter_entry(visible as fn(&DirEntry) -> bool);

        Ok(Self {
            root,
            inner,
            current: None,
        })
    }

    fn start_listing(&mut self, entry: &DirEntry) -> Option<DirListing> {
        let rel_path = entry.path().strip_prefix(&self.root).ok()?.to_path_buf();
        self.current.replace(DirListing {
            rel_path,
            path: entry.path().to_path_buf(),
            files: Vec::new(),
        })
    }
}

impl Iterator for TreeWalker {
    type Item = DirListing;

    fn next(&mut self) -> Option<DirListing> {
        loop {
            let entry = match self.inner.next() {
                Some(Ok(entry)) => entry,
                Some(Err(e)) => {
                    warn!(path = ?e.path(), error = %e, "Skipping unreadable entry");
                    continue;
                }
                None => return self.current.take(),
            };
            if entry.depth() == 0 {
                continue;
            }

            if entry.file_type().is_dir() {
                if let Some(done) = self.start_listing(&entry) {
                    debug!(path = %done.rel_path.display(), count = done.files.len(), "Visited directory");
                    return Some(done);
                }
                continue;
            }

            if !is_file_entry(&entry) {
                continue;
            }
            // Root-level files have no listing and are ignored.
            if let Some(current) = self.current.as_mut() {
                if entry.path().parent() == Some(current.path.as_path()) {
                    current
                        .files
                        .push(entry.file_name().to_string_lossy().into_owned());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_missing_root_is_filesystem_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        match TreeWalker::new(&missing) {
            Err(Error::Filesystem { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected filesystem error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_root_is_not_yielded_and_order_is_stable() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "top.md");
        touch(dir.path(), "news/en/bbc/b.md");
        touch(dir.path(), "news/en/bbc/a.md");
        touch(dir.path(), "fr/lemonde/c.md");

        let listings: Vec<DirListing> = TreeWalker::new(dir.path()).unwrap().collect();
        let dirs: Vec<String> = listings
            .iter()
            .map(|l| crate::utils::to_slash_path(&l.rel_path))
            .collect();
        assert_eq!(
            dirs,
            vec!["fr", "fr/lemonde", "news", "news/en", "news/en/bbc"]
        );

        let bbc = listings.last().unwrap();
        assert_eq!(bbc.files, vec!["a.md", "b.md"]);

        let again: Vec<DirListing> = TreeWalker::new(dir.path()).unwrap().collect();
        assert_eq!(listings, again);
    }

    #[test]
    fn test_hidden_entries_are_skipped() {
        let dir = tempdir().unwrap();
        touch(dir.path(), ".git/en/bbc/a.md");
        touch(dir.path(), "en/.drafts/a.md");
        touch(dir.path(), "en/bbc/.hidden.md");
        touch(dir.path(), "en/bbc/visible.md");

        let listings: Vec<DirListing> = TreeWalker::new(dir.path()).unwrap().collect();
        let dirs: Vec<String> = listings
            .iter()
            .map(|l| crate::utils::to_slash_path(&l.rel_path))
            .collect();
        assert_eq!(dirs, vec!["en", "en/bbc"]);
        assert_eq!(listings[1].files, vec!["visible.md"]);
    }

    #[test]
    fn test_files_are_listed_with_their_own_directory() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "en/bbc/z_late.md");
        touch(dir.path(), "en/bbc/archive/a_early.md");
        touch(dir.path(), "en/bbc/b.md");

        let listings: Vec<DirListing> = TreeWalker::new(dir.path()).unwrap().collect();
        let dirs: Vec<String> = listings
            .iter()
            .map(|l| crate::utils::to_slash_path(&l.rel_path))
            .collect();
        assert_eq!(dirs, vec!["en", "en/bbc", "en/bbc/archive"]);
        assert!(listings[0].files.is_empty());
        assert_eq!(listings[1].files, vec!["b.md", "z_late.md"]);
        assert_eq!(listings[2].files, vec!["a_early.md"]);
    }

    #[test]
    fn test_empty_root_yields_nothing() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "only_top.md");
        assert_eq!(TreeWalker::new(dir.path()).unwrap().count(), 0);
    }
}
