//! Generate command handler.

use crate::cli::args::{Cli, OutputFormat};
use crate::config::GeneratorConfig;
use crate::error::PagesError;
use crate::generator::{PageGenerator, RunSummary};

/// Regenerates both listing pages under `--root` and prints the summary.
///
/// # Errors
///
/// Returns an error if the notebooks directory cannot be scanned, an
/// output file cannot be written, or the JSON summary fails to serialize.
pub fn run(cli: &Cli) -> Result<(), PagesError> {
    tracing::debug!(root = %cli.root.display(), "generating notebook pages");

    let generator = PageGenerator::new(GeneratorConfig::new(&cli.root));
    let summary = generator.run()?;

    println!("{}", format_summary(&summary, cli.format)?);
    Ok(())
}

/// Formats the run summary for stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_summary(summary: &RunSummary, format: OutputFormat) -> Result<String, PagesError> {
    match format {
        OutputFormat::Human => Ok(summary.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(summary)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_human() {
        let summary = RunSummary {
            tutorials: 1,
            projects: 1,
        };
        assert_eq!(
            format_summary(&summary, OutputFormat::Human).unwrap(),
            "Wrote 1 tutorials and 1 projects."
        );
    }

    #[test]
    fn test_format_json() {
        let summary = RunSummary {
            tutorials: 4,
            projects: 2,
        };
        assert_eq!(
            format_summary(&summary, OutputFormat::Json).unwrap(),
            r#"{"tutorials":4,"projects":2}"#
        );
    }
}
