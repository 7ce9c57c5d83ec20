//! Error types for `notebook-pages`
//!
//! Only run-level failures live here. Per-notebook read and parse
//! problems never become errors; they degrade to fallback values in
//! [`crate::notebook`].

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for the `notebook-pages` binary.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// I/O error (notebooks directory missing, output not writable)
    pub const IO_ERROR: i32 = 3;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for page generation.
#[derive(Debug, Error)]
pub enum PagesError {
    /// Walking the notebooks directory failed.
    #[error("failed to scan {}: {source}", path.display())]
    Scan {
        /// Directory being scanned
        path: PathBuf,
        /// Underlying walk error
        #[source]
        source: walkdir::Error,
    },

    /// Writing a generated listing failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Output file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PagesError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Scan { .. } | Self::Write { .. } => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `notebook-pages` operations.
pub type Result<T> = std::result::Result<T, PagesError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::IO_ERROR, 3);
    }

    #[test]
    fn test_write_error_exit_code() {
        let err = PagesError::Write {
            path: PathBuf::from("tutorials.qmd"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_write_error_display() {
        let err = PagesError::Write {
            path: PathBuf::from("out/projects.qmd"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("out/projects.qmd"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_scan_error_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("notebooks");
        let walk_err = walkdir::WalkDir::new(&missing)
            .into_iter()
            .find_map(std::result::Result::err)
            .expect("walking a missing directory yields an error");
        let err = PagesError::Scan {
            path: missing,
            source: walk_err,
        };
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
        assert!(err.to_string().contains("notebooks"));
    }

    #[test]
    fn test_json_error_exit_code() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PagesError = json_err.into();
        assert_eq!(err.exit_code(), ExitCode::ERROR);
    }
}
