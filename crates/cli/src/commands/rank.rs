//! Ranking command

use anyhow::Result;
use serde::Serialize;

use alloc_compare_benchmarks::ComparisonReport;

use crate::commands::CommandContext;
use crate::output::{JsonFormatter, OutputFormat, TableFormatter};

/// A strategy's position in the ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankEntry {
    pub rank: usize,
    pub strategy: String,
    pub score: f64,
}

/// Print strategies ordered by score, best first
pub fn show(ctx: &CommandContext) -> Result<()> {
    let report = ctx.load_report()?;
    let entries = ranking(&report);

    match ctx.format {
        OutputFormat::Json => println!("{}", JsonFormatter::format(&entries)?),
        OutputFormat::Plain => {
            for entry in &entries {
                println!("{}. {} {:.1}", entry.rank, entry.strategy, entry.score);
            }
        }
        OutputFormat::Table => {
            let rows = entries
                .iter()
                .map(|e| vec![format!("#{}", e.rank), e.strategy.clone(), format!("{:.1}", e.score)])
                .collect();
            println!("{}", TableFormatter::simple(&["Rank", "Strategy", "Score"], rows, 2));
        }
    }

    Ok(())
}

/// Ranking with 1-based positions; equal scores keep input order
pub fn ranking(report: &ComparisonReport) -> Vec<RankEntry> {
    report
        .comparison
        .ranking()
        .into_iter()
        .enumerate()
        .map(|(i, (strategy, score))| RankEntry {
            rank: i + 1,
            strategy: strategy.to_string(),
            score,
        })
        .collect()
}
