//! CLI argument definitions
//!
//! Clap derive structs for `notebook-pages`. Every flag is optional; a
//! bare invocation regenerates the pages for the current directory.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Generate tutorial and project listing pages from a notebooks directory.
#[derive(Parser, Debug)]
#[command(name = "notebook-pages", author, version, about)]
pub struct Cli {
    /// Root directory containing `notebooks/`; the pages are written here.
    #[arg(long, default_value = ".", env = "NOTEBOOK_PAGES_ROOT")]
    pub root: PathBuf,

    /// Summary output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", env = "NOTEBOOK_PAGES_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for the run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `Wrote <n> tutorials and <m> projects.`
    #[default]
    Human,
    /// `{"tutorials":n,"projects":m}`
    Json,
}

// ============================================================================
// Tests
// ============================================================================
