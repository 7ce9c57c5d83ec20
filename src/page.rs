//! Listing page generation.
//!
//! Renders a [`Listing`] to a Quarto page: a fixed front matter block,
//! a section heading, and one link bullet per notebook (or a placeholder
//! line when the listing is empty).

use std::fs;
use std::path::Path;

use crate::error::{PagesError, Result};
use crate::notebook::NotebookKind;

/// Output format declared in the front matter.
pub const PAGE_FORMAT: &str = "html";

/// One linked notebook in a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Display title.
    pub title: String,
    /// Root-relative link with `/` separators.
    pub link: String,
}

/// Ordered entries of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Which listing this is.
    pub kind: NotebookKind,
    /// Entries in scan order.
    pub entries: Vec<ListingEntry>,
}

impl Listing {
    /// Creates an empty listing.
    #[must_use]
    pub const fn new(kind: NotebookKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    /// Appends an entry, keeping insertion order.
    pub fn push(&mut self, title: impl Into<String>, link: impl Into<String>) {
        self.entries.push(ListingEntry {
            title: title.into(),
            link: link.into(),
        });
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the listing has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Renders the page for `listing` under `heading_title`.
#[must_use]
pub fn render(listing: &Listing, heading_title: &str) -> String {
    let mut lines = Vec::new();

    lines.push("---".to_string());
    lines.push(format!("title: {heading_title}"));
    lines.push(format!("format: {PAGE_FORMAT}"));
    lines.push("---".to_string());
    lines.push(String::new());

    lines.push(format!("## {heading_title}"));
    lines.push(String::new());

    if listing.is_empty() {
        lines.push(listing.kind.empty_placeholder().to_string());
    } else {
        for entry in &listing.entries {
            lines.push(format!("- [{}]({})", entry.title, entry.link));
        }
    }

    let mut page = lines.join("\n");
    page.push('\n');
    page
}

/// Renders `listing` under its kind's heading and writes it to `path`,
/// replacing any existing file.
///
/// # Errors
///
/// Returns [`PagesError::Write`] if the file cannot be written.
pub fn write_listing(listing: &Listing, path: &Path) -> Result<()> {
    let page = render(listing, listing.kind.heading());
    fs::write(path, page).map_err(|source| PagesError::Write {
        path: path.to_path_buf(),
        source,
    })
}
