//! Generator configuration
//!
//! The root directory is the only value that varies between runs; the
//! layout beneath it (notebooks folder, reserved projects folder, output
//! filenames) is fixed.

use std::path::{Path, PathBuf};

use crate::notebook::NotebookKind;

/// Default notebooks directory under the root.
pub const NOTEBOOKS_DIR: &str = "notebooks";

/// Reserved folder name that marks every notebook beneath it as a project.
pub const PROJECTS_DIR: &str = "projects";

/// Notebook file extension (without the dot).
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// Output filename for the tutorials listing.
pub const TUTORIALS_FILE: &str = "tutorials.qmd";

/// Output filename for the projects listing.
pub const PROJECTS_FILE: &str = "projects.qmd";

/// Layout and root for a single generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Root directory. Links are relative to it and outputs are written into it.
    pub root: PathBuf,

    /// Notebooks directory name, relative to `root`.
    pub notebooks_dir: String,

    /// Tutorials listing filename, relative to `root`.
    pub tutorials_file: String,

    /// Projects listing filename, relative to `root`.
    pub projects_file: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            notebooks_dir: NOTEBOOKS_DIR.to_string(),
            tutorials_file: TUTORIALS_FILE.to_string(),
            projects_file: PROJECTS_FILE.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration rooted at `root` with the fixed layout.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Absolute (or root-joined) path of the notebooks directory.
    #[must_use]
    pub fn notebooks_root(&self) -> PathBuf {
        self.root.join(&self.notebooks_dir)
    }

    /// Output path for the listing of the given kind.
    #[must_use]
    pub fn output_path(&self, kind: NotebookKind) -> PathBuf {
        let name = match kind {
            NotebookKind::Tutorial => &self.tutorials_file,
            NotebookKind::Project => &self.projects_file,
        };
        self.root.join(name)
    }

    /// Root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}
