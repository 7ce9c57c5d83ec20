//! Notebook documents.
//!
//! Parsing is best-effort: [`read_notebook`] returns `None` for a file
//! that cannot be read or does not parse, and every caller treats that
//! as "document absent" rather than as an error. Field access goes
//! through small accessors with explicit defaults so that notebooks
//! with missing, `null`, or oddly typed fields still classify and
//! produce a title.

pub mod classify;
pub mod title;

use std::fs;
use std::path::Path;

use serde::de::Error as _;
use serde_json::{Map, Value};

pub use classify::{NotebookKind, classify};
pub use title::{extract_title, title_from_document};

/// Cell type whose first line may carry the notebook title.
pub const MARKDOWN_CELL: &str = "markdown";

/// Tag that marks a notebook outside `projects/` as a project.
pub const PROJECT_TAG: &str = "project";

/// A parsed notebook: any JSON object.
///
/// Fields are looked up on demand, each with its own default, so a
/// malformed `cells` entry never hides `metadata.tags` and vice versa.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotebookDocument {
    root: Map<String, Value>,
}

/// Borrowed view of one entry of `cells`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell<'a> {
    value: &'a Value,
}

impl NotebookDocument {
    /// Parses a notebook from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the text is not JSON, or is JSON
    /// whose top level is not an object.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str(text)? {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(serde_json::Error::custom("notebook is not a JSON object")),
        }
    }

    /// String tags from `metadata.tags`. A missing or non-object
    /// `metadata`, `null` or non-array tags, and non-string entries
    /// contribute nothing.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.root
            .get("metadata")
            .and_then(|metadata| metadata.get("tags"))
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }

    /// Whether `metadata.tags` contains `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().any(|t| t == tag)
    }

    /// Entries of `cells`. A missing or non-array `cells` has none.
    pub fn cells(&self) -> impl Iterator<Item = Cell<'_>> {
        self.root
            .get("cells")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .map(|value| Cell { value })
    }

    /// The first cell with `cell_type == "markdown"`, if any. Cells that
    /// are not objects or lack a string `cell_type` are skipped.
    #[must_use]
    pub fn first_markdown_cell(&self) -> Option<Cell<'_>> {
        self.cells()
            .find(|cell| cell.cell_type() == Some(MARKDOWN_CELL))
    }
}

impl<'a> Cell<'a> {
    /// `markdown`, `code`, `raw`, ... when present as a string.
    #[must_use]
    pub fn cell_type(&self) -> Option<&'a str> {
        self.value.get("cell_type").and_then(Value::as_str)
    }

    /// First source line.
    ///
    /// For an array source this is the first element (when it is a
    /// string). For a single-string source it is the text up to and
    /// including the first newline. Empty or missing sources have no
    /// first line.
    #[must_use]
    pub fn first_line(&self) -> Option<&'a str> {
        match self.value.get("source")? {
            Value::String(text) => text.split_inclusive('\n').next(),
            Value::Array(lines) => lines.first().and_then(Value::as_str),
            _ => None,
        }
    }
}

/// Reads and parses a notebook file.
///
/// Returns `None` if the file is missing, unreadable, not valid UTF-8,
/// or not a JSON object.
#[must_use]
pub fn read_notebook(path: &Path) -> Option<NotebookDocument> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "notebook unreadable, treating as absent");
            return None;
        }
    };

    match NotebookDocument::from_json(&text) {
        Ok(doc) => Some(doc),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "notebook unparseable, treating as absent");
            None
        }
    }
}
