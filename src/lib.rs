//! `notebook-pages` - listing pages for a notebooks directory
//!
//! Scans `notebooks/` for `.ipynb` files, sorts each into tutorials or
//! projects (by the reserved `projects/` folder or a `project` metadata
//! tag), takes a title from the first markdown heading, and writes
//! `tutorials.qmd` and `projects.qmd`.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod notebook;
pub mod observability;
pub mod page;
pub mod scan;
