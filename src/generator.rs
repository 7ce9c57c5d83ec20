//! Page generation run.
//!
//! Scans the notebooks directory once, classifies and titles each
//! notebook in scan order, and writes the tutorials and projects
//! listings. Per-notebook problems fall back to defaults; only scan and
//! write failures abort the run.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::notebook::{NotebookKind, classify, extract_title};
use crate::page::{Listing, write_listing};
use crate::scan::scan;

/// A discovered notebook after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookFile {
    /// Path as found by the scan.
    pub path: PathBuf,
    /// Listing it belongs to.
    pub kind: NotebookKind,
    /// Display title.
    pub title: String,
    /// Root-relative link with `/` separators.
    pub link: String,
}

/// Entry counts written by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RunSummary {
    /// Entries in the tutorials listing.
    pub tutorials: usize,
    /// Entries in the projects listing.
    pub projects: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} tutorials and {} projects.",
            self.tutorials, self.projects
        )
    }
}

/// Generates both listing pages for one root directory.
#[derive(Debug, Clone)]
pub struct PageGenerator {
    config: GeneratorConfig,
}

impl PageGenerator {
    /// Creates a generator for `config`.
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Discovers and classifies every notebook, in scan order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::PagesError::Scan`] if the notebooks
    /// directory cannot be walked.
    pub fn collect(&self) -> Result<Vec<NotebookFile>> {
        let notebooks_root = self.config.notebooks_root();
        tracing::info!(notebooks = %notebooks_root.display(), "scanning notebooks");

        scan(&notebooks_root)
            .map(|path| path.map(|path| self.describe(path, &notebooks_root)))
            .collect()
    }

    /// Splits notebooks into the tutorials and projects listings,
    /// preserving order within each.
    #[must_use]
    pub fn partition(notebooks: Vec<NotebookFile>) -> (Listing, Listing) {
        let mut tutorials = Listing::new(NotebookKind::Tutorial);
        let mut projects = Listing::new(NotebookKind::Project);

        for notebook in notebooks {
            let listing = match notebook.kind {
                NotebookKind::Tutorial => &mut tutorials,
                NotebookKind::Project => &mut projects,
            };
            listing.push(notebook.title, notebook.link);
        }

        (tutorials, projects)
    }

    /// Runs the full scan and writes both listings.
    ///
    /// # Errors
    ///
    /// Returns an error if the notebooks directory cannot be scanned or
    /// either output file cannot be written.
    pub fn run(&self) -> Result<RunSummary> {
        let notebooks = self.collect()?;
        let (tutorials, projects) = Self::partition(notebooks);

        for listing in [&tutorials, &projects] {
            let path = self.config.output_path(listing.kind);
            write_listing(listing, &path)?;
            tracing::info!(
                kind = %listing.kind,
                entries = listing.len(),
                path = %path.display(),
                "wrote listing"
            );
        }

        Ok(RunSummary {
            tutorials: tutorials.len(),
            projects: projects.len(),
        })
    }

    fn describe(&self, path: PathBuf, notebooks_root: &Path) -> NotebookFile {
        let kind = classify(&path, notebooks_root);
        let title = extract_title(&path);
        let link = relative_link(&path, self.config.root());
        tracing::debug!(%link, %kind, %title, "classified notebook");

        NotebookFile {
            path,
            kind,
            title,
            link,
        }
    }
}

/// `path` relative to `root`, with `\` separators normalized to `/`.
#[must_use]
pub fn relative_link(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.to_string_lossy().replace('\\', "/")
}
