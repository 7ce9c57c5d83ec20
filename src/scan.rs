//! Notebook discovery.
//!
//! Walks the notebooks directory depth-first with siblings sorted by
//! file name. That visits paths in lexicographic component order, the
//! same order as sorting the full list of paths, without collecting it
//! first.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::NOTEBOOK_EXTENSION;
use crate::error::{PagesError, Result};

/// Lazily yields every notebook file under `notebooks_root`.
///
/// Only files (or symlinks to files) with the `ipynb` extension are
/// yielded. A missing or unreadable directory produces an error item.
pub fn scan(notebooks_root: &Path) -> impl Iterator<Item = Result<PathBuf>> + use<> {
    let root = notebooks_root.to_path_buf();
    WalkDir::new(notebooks_root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => is_notebook(&entry).then(|| Ok(entry.into_path())),
            Err(source) => Some(Err(PagesError::Scan {
                path: root.clone(),
                source,
            })),
        })
}

/// Regular files and symlinks resolving to regular files count.
/// Symlinked directories are not descended into.
fn is_notebook(entry: &DirEntry) -> bool {
    let is_file = entry.file_type().is_file()
        || (entry.path_is_symlink() && entry.path().is_file());
    is_file
        && entry
            .path()
            .extension()
            .is_some_and(|ext| ext == NOTEBOOK_EXTENSION)
}
