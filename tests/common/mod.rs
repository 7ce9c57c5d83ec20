//! Shared integration-test harness: builds notebook trees in a temp
//! directory and runs the `notebook-pages` binary against them.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// A temporary site root with a `notebooks/` directory.
pub struct NotebookSite {
    dir: TempDir,
}

impl NotebookSite {
    /// Creates an empty site root containing an empty `notebooks/`.
    #[allow(clippy::missing_panics_doc)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join("notebooks")).expect("failed to create notebooks/");
        Self { dir }
    }

    /// Creates a site root without a `notebooks/` directory.
    #[allow(clippy::missing_panics_doc)]
    pub fn without_notebooks() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        Self { dir }
    }

    /// Root directory path.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a file at `rel` (relative to the root), creating parents.
    #[allow(clippy::missing_panics_doc)]
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().expect("path has parent"))
            .expect("failed to create parent dirs");
        fs::write(&path, content).expect("failed to write fixture");
        path
    }

    /// Writes a notebook whose first markdown cell starts with `heading`.
    pub fn notebook_with_heading(&self, rel: &str, heading: &str) -> PathBuf {
        let doc = serde_json::json!({
            "cells": [
                {"cell_type": "code", "source": ["print('hi')"]},
                {"cell_type": "markdown", "source": [heading, "\n", "Body text."]},
            ],
            "metadata": {},
            "nbformat": 4,
            "nbformat_minor": 5,
        });
        self.write(rel, &doc.to_string())
    }

    /// Reads a generated file at `rel`.
    #[allow(clippy::missing_panics_doc)]
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root().join(rel))
            .unwrap_or_else(|e| panic!("failed to read {rel}: {e}"))
    }

    /// Runs the binary with `--root <site>` plus `args`.
    pub fn run(&self, args: &[&str]) -> Output {
        let root = self.root().to_str().expect("non-UTF-8 temp path");
        let mut full = vec!["--root", root];
        full.extend_from_slice(args);
        spawn_command(&full)
    }

    /// Runs the binary with no arguments, using the site as working dir.
    #[allow(clippy::missing_panics_doc)]
    pub fn run_in_dir(&self) -> Output {
        Command::new(env!("CARGO_BIN_EXE_notebook-pages"))
            .current_dir(self.root())
            .env_remove("NOTEBOOK_PAGES_ROOT")
            .env_remove("NOTEBOOK_PAGES_LOG_LEVEL")
            .output()
            .expect("failed to run notebook-pages")
    }
}

/// Runs the binary with `args` and collects its output.
#[allow(clippy::missing_panics_doc)]
pub fn spawn_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_notebook-pages"))
        .args(args)
        .env_remove("NOTEBOOK_PAGES_ROOT")
        .env_remove("NOTEBOOK_PAGES_LOG_LEVEL")
        .output()
        .expect("failed to run notebook-pages")
}

/// Stdout as a trimmed string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
