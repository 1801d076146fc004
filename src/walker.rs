//! Directory traversal that populates an index.
//!
//! Walks a directory tree depth-first and records every regular file
//! with its computed bucket key.

use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::index::{Index, Sourcefile};
use crate::Result;

/// Build an index by walking the tree rooted at `start_path`.
///
/// Every non-directory entry is recorded under its traversed path; the
/// bucket key is the traversed path itself, or `{bucket_root}/{path}`
/// when `bucket_root` is non-empty. Directories produce no record but
/// are descended into.
///
/// The walk is sequential and does not follow symlinks. It aborts on
/// the first traversal error (e.g. an unreadable directory) and a
/// partially built index is never returned.
pub fn build_from_root(bucket_root: &str, start_path: impl AsRef<Path>) -> Result<Index> {
    let mut index = Index::default();

    for entry in WalkDir::new(start_path.as_ref()).follow_links(false) {
        let entry = entry?;

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path().to_string_lossy().into_owned();
        let key = if bucket_root.is_empty() {
            path.clone()
        } else {
            format!("{bucket_root}/{path}")
        };

        debug!(%path, %key, "adding file to index");
        index.files.insert(path, Sourcefile { key });
    }

    Ok(index)
}
