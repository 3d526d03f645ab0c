//! Markdown generation for comparison reports.

use std::fmt::{self, Write};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::io::ensure_parent_dir;
use crate::report::ComparisonReport;

/// Renders a report as a Markdown document.
pub fn generate_summary(report: &ComparisonReport) -> Result<String, fmt::Error> {
    let mut md = String::new();
    write_document(&mut md, report)?;
    Ok(md)
}

fn write_document(md: &mut impl Write, report: &ComparisonReport) -> fmt::Result {
    writeln!(md, "# Memory Allocation Algorithm Comparison")?;
    writeln!(md)?;
    writeln!(md, "- **Source:** `{}`", report.source)?;
    writeln!(
        md,
        "- **Generated:** {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(
        md,
        "- **Score:** (100 - fragmentation) x {} + success rate x {}",
        report.weights.fragmentation, report.weights.success_rate
    )?;
    writeln!(md)?;

    writeln!(
        md,
        "| Strategy | Allocated (bytes) | Free (bytes) | Fragmentation (%) | Success Rate (%) | Score |"
    )?;
    writeln!(md, "|---|---:|---:|---:|---:|---:|")?;
    for row in report.rows() {
        let name = if row.is_best {
            format!("**{}**", row.metrics.name())
        } else {
            row.metrics.name().to_string()
        };
        writeln!(
            md,
            "| {} | {} | {} | {:.1} | {:.1} | {:.1} |",
            name,
            row.metrics.allocated_bytes(),
            row.metrics.free_bytes(),
            row.metrics.fragmentation_percent(),
            row.metrics.success_rate_percent(),
            row.score
        )?;
    }
    writeln!(md)?;

    writeln!(md, "## Best Performer")?;
    writeln!(md)?;
    writeln!(
        md,
        "**{}** - Score: {:.1}",
        report.comparison.best_strategy(),
        report.comparison.best_score()
    )?;

    if !report.skipped_rows.is_empty() {
        writeln!(md)?;
        writeln!(md, "## Skipped Rows")?;
        writeln!(md)?;
        for row in &report.skipped_rows {
            writeln!(md, "- line {}: {} fields", row.line, row.fields)?;
        }
    }

    Ok(())
}

/// Writes the Markdown summary to `path`.
pub fn write_summary(report: &ComparisonReport, path: &Path) -> Result<PathBuf> {
    ensure_parent_dir(path)?;
    let summary = generate_summary(report).context("Failed to render summary")?;
    fs::write(path, summary)
        .with_context(|| format!("Failed to write summary: {}", path.display()))?;
    Ok(path.to_path_buf())
}
