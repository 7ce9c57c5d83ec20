//! Tutorial / project classification.

use std::fmt;
use std::path::{Component, Path};

use crate::config::PROJECTS_DIR;
use crate::notebook::{NotebookDocument, PROJECT_TAG, read_notebook};

/// Listing a notebook belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotebookKind {
    /// Default for everything not marked as a project.
    Tutorial,
    /// Under `projects/` or tagged `project`.
    Project,
}

impl NotebookKind {
    /// Heading used in the rendered listing.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Tutorial => "Tutorials",
            Self::Project => "Projects",
        }
    }

    /// Placeholder line for an empty listing.
    #[must_use]
    pub const fn empty_placeholder(self) -> &'static str {
        match self {
            Self::Tutorial => "No tutorials found.",
            Self::Project => "No projects found.",
        }
    }
}

impl fmt::Display for NotebookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tutorial => f.write_str("tutorial"),
            Self::Project => f.write_str("project"),
        }
    }
}

/// Classifies the notebook at `path`.
///
/// A notebook whose first component below `notebooks_root` is
/// `projects` is a project without its content being read. Otherwise
/// the file is parsed and classified by its tags; an unreadable or
/// unparseable file is a tutorial.
#[must_use]
pub fn classify(path: &Path, notebooks_root: &Path) -> NotebookKind {
    if in_projects_dir(path, notebooks_root) {
        return NotebookKind::Project;
    }

    read_notebook(path).map_or(NotebookKind::Tutorial, |doc| classify_document(&doc))
}

/// Tag-based rule on an already parsed document.
#[must_use]
pub fn classify_document(doc: &NotebookDocument) -> NotebookKind {
    if doc.has_tag(PROJECT_TAG) {
        NotebookKind::Project
    } else {
        NotebookKind::Tutorial
    }
}

fn in_projects_dir(path: &Path, notebooks_root: &Path) -> bool {
    path.strip_prefix(notebooks_root)
        .ok()
        .and_then(|rel| rel.components().next())
        .is_some_and(|first| matches!(first, Component::Normal(name) if name == PROJECTS_DIR))
}
