//! Display title extraction.

use std::path::Path;

use crate::notebook::{NotebookDocument, read_notebook};

/// Title for the notebook at `path`.
///
/// Uses the heading on the first line of the first markdown cell, and
/// falls back to the file stem when the file does not parse, has no
/// markdown cell, or that line is not a heading. Always non-empty for
/// a path with a file name.
#[must_use]
pub fn extract_title(path: &Path) -> String {
    read_notebook(path)
        .as_ref()
        .and_then(title_from_document)
        .unwrap_or_else(|| file_stem(path))
}

/// Heading text from the first line of the first markdown cell.
///
/// Only that one line is inspected; a heading further down the cell or
/// in a later cell is ignored.
#[must_use]
pub fn title_from_document(doc: &NotebookDocument) -> Option<String> {
    let line = doc.first_markdown_cell()?.first_line()?.trim();
    let heading = line.strip_prefix('#')?;
    let title = heading.trim_start_matches('#').trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// File name without its extension.
fn file_stem(path: &Path) -> String {
    path.file_stem().map_or_else(
        || path.to_string_lossy().to_string(),
        |s| s.to_string_lossy().to_string(),
    )
}
