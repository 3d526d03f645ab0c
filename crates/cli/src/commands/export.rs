//! Report export command

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ValueEnum;
use tracing::info;

use alloc_compare_benchmarks::{io, markdown, ComparisonReport};

use crate::commands::CommandContext;
use crate::output::colors;

/// Artifact written by `export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportKind {
    /// Full report as JSON
    #[default]
    Json,
    /// Markdown summary table
    Markdown,
}

impl ExportKind {
    /// File name used when no output path is given
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Json => io::JSON_REPORT_FILE,
            Self::Markdown => io::SUMMARY_FILE,
        }
    }
}

/// Write the report to a file and print its path
pub fn export(ctx: &CommandContext, kind: ExportKind, output: Option<PathBuf>) -> Result<()> {
    let report = ctx.load_report()?;
    let path = write(&report, kind, output.as_deref(), &ctx.config.output.directory)?;

    info!(path = %path.display(), ?kind, "Report exported");
    println!("{} {}", colors::success("Wrote"), path.display());

    Ok(())
}

/// Write `report` as `kind`, to `output` or the default file in `output_dir`
pub fn write(
    report: &ComparisonReport,
    kind: ExportKind,
    output: Option<&Path>,
    output_dir: &Path,
) -> Result<PathBuf> {
    let path = io::output_path(output, output_dir, kind.default_file_name());

    match kind {
        ExportKind::Json => io::write_report(report, &path),
        ExportKind::Markdown => markdown::write_summary(report, &path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc_compare_application::ScoreEvaluator;
    use alloc_compare_benchmarks::{compare_stats, StatsFile};
    use alloc_compare_testing::fixtures::canonical_records;
    use tempfile::TempDir;

    fn sample_report() -> ComparisonReport {
        let stats = StatsFile {
            records: canonical_records(),
            skipped_rows: Vec::new(),
        };
        compare_stats("memory_stats.txt", stats, &ScoreEvaluator::default()).unwrap()
    }

    #[test]
    fn test_write_json_to_default_location() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("comparison");

        let path = write(&sample_report(), ExportKind::Json, None, &out).unwrap();

        assert_eq!(path, out.join(io::JSON_REPORT_FILE));
        let back = io::read_report(&path).unwrap();
        assert_eq!(back.comparison.best_strategy(), "First Fit");
    }

    #[test]
    fn test_write_markdown_to_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let explicit = temp_dir.path().join("summary.md");

        let path = write(
            &sample_report(),
            ExportKind::Markdown,
            Some(&explicit),
            temp_dir.path(),
        )
        .unwrap();

        assert_eq!(path, explicit);
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("## Best Performer"));
    }
}
