//! Comparison report command

use anyhow::Result;
use serde::Serialize;

use alloc_compare_benchmarks::ComparisonReport;

use crate::commands::CommandContext;
use crate::output::{colors, JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};

const HEADERS: [&str; 7] = [
    "Strategy",
    "Allocated (bytes)",
    "Free (bytes)",
    "Fragmentation (%)",
    "Success Rate (%)",
    "Score",
    "Best",
];

/// One strategy as shown by the plain renderer
#[derive(Debug, Serialize)]
struct ScoreLine<'a> {
    strategy: &'a str,
    allocated_bytes: u64,
    free_bytes: u64,
    fragmentation_percent: String,
    success_rate_percent: String,
    score: String,
    best: bool,
}

/// Print the comparison for the configured input
pub fn show(ctx: &CommandContext) -> Result<()> {
    let report = ctx.load_report()?;

    match ctx.format {
        OutputFormat::Json => println!("{}", JsonFormatter::format(&report)?),
        OutputFormat::Plain => {
            println!("{}", render_plain(&report)?);
            println!();
            println!("{}", best_performer(&report));
        }
        OutputFormat::Table => {
            println!(
                "{}",
                colors::bold(&format!("Memory Allocation Comparison: {}", report.source))
            );
            println!();
            println!("{}", render_table(&report));
            println!();
            let banner = best_performer(&report);
            let mut lines = banner.lines();
            if let Some(title) = lines.next() {
                println!("{}", colors::bold(title));
            }
            for line in lines {
                println!("{}", colors::highlight(line));
            }
        }
    }

    Ok(())
}

/// Comparison table, one row per strategy in input order
pub fn render_table(report: &ComparisonReport) -> String {
    let rows: Vec<Vec<String>> = report
        .rows()
        .map(|row| {
            vec![
                row.metrics.name().to_string(),
                row.metrics.allocated_bytes().to_string(),
                row.metrics.free_bytes().to_string(),
                format!("{:.1}", row.metrics.fragmentation_percent()),
                format!("{:.1}", row.metrics.success_rate_percent()),
                format!("{:.1}", row.score),
                if row.is_best { "✓" } else { "-" }.to_string(),
            ]
        })
        .collect();

    TableFormatter::simple(&HEADERS, rows, 1)
}

/// Key/value rendering of every strategy
pub fn render_plain(report: &ComparisonReport) -> Result<String> {
    let lines: Vec<ScoreLine<'_>> = report
        .rows()
        .map(|row| ScoreLine {
            strategy: row.metrics.name(),
            allocated_bytes: row.metrics.allocated_bytes(),
            free_bytes: row.metrics.free_bytes(),
            fragmentation_percent: format!("{:.1}", row.metrics.fragmentation_percent()),
            success_rate_percent: format!("{:.1}", row.metrics.success_rate_percent()),
            score: format!("{:.1}", row.score),
            best: row.is_best,
        })
        .collect();

    PlainFormatter::format(&lines)
}

/// The best performer banner printed after the comparison
pub fn best_performer(report: &ComparisonReport) -> String {
    format!(
        "=== Best Performer ===\n{} - Score: {:.1}",
        report.comparison.best_strategy(),
        report.comparison.best_score()
    )
}
