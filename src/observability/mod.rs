//! Observability module
//!
//! Logging setup for the `notebook-pages` binary.

pub mod logging;

pub use logging::{LogFormat, init_logging};
