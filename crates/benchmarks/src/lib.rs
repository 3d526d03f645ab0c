//! Allocator Benchmark Statistics
//!
//! This crate reads the statistics written by the allocator benchmark, scores
//! them and writes the resulting comparison in several formats.
//!
//! ## Architecture
//!
//! - **io**: Reading `memory_stats.txt`; reading and writing JSON reports
//! - **report**: The `ComparisonReport` struct every output is rendered from
//! - **markdown**: Markdown generation for comparison reports
//! - **chart**: PNG/SVG dashboard rendering (feature `charts`)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use alloc_compare_application::ScoreEvaluator;
//! use alloc_compare_benchmarks::compare_file;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let report = compare_file(Path::new("memory_stats.txt"), &ScoreEvaluator::default())?;
//!     println!(
//!         "{} - Score: {:.1}",
//!         report.comparison.best_strategy(),
//!         report.comparison.best_score()
//!     );
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod io;
pub mod markdown;
pub mod report;

#[cfg(feature = "charts")]
pub mod chart;

use std::path::Path;

use alloc_compare_application::ScoreEvaluator;
use alloc_compare_domain::AppResult;
use tracing::{info, instrument};

pub use io::{SkippedRow, StatsFile};
pub use report::{ComparisonReport, ReportRow};

/// Reads a statistics file and scores it.
///
/// Rows with the wrong number of fields are skipped and listed in the report;
/// every other problem aborts with an error.
///
/// # Errors
///
/// - [`alloc_compare_domain::InputError`] when the file is missing or invalid
/// - [`alloc_compare_domain::ComparisonError`] when the records do not form a
///   complete comparison
#[instrument(skip_all, fields(path = %path.display()))]
pub fn compare_file(path: &Path, evaluator: &ScoreEvaluator) -> AppResult<ComparisonReport> {
    let stats = io::read_stats(path)?;
    compare_stats(path.display().to_string(), stats, evaluator)
}

/// Scores already-parsed statistics.
pub fn compare_stats(
    source: impl Into<String>,
    stats: StatsFile,
    evaluator: &ScoreEvaluator,
) -> AppResult<ComparisonReport> {
    let comparison = evaluator.evaluate(&stats.records)?;

    info!(
        strategies = comparison.len(),
        skipped = stats.skipped_rows.len(),
        best = %comparison.best_strategy(),
        "Comparison complete"
    );

    Ok(ComparisonReport::new(
        source,
        evaluator.weights(),
        stats,
        comparison,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc_compare_domain::{AppError, ComparisonError, InputError};
    use alloc_compare_testing::fixtures::{sample_stats_csv, write_stats_file, STATS_HEADER};

    #[test]
    fn test_compare_file() {
        let (_dir, path) = write_stats_file(&sample_stats_csv());

        let report = compare_file(&path, &ScoreEvaluator::default()).unwrap();

        assert_eq!(report.metrics.len(), 4);
        assert_eq!(report.comparison.best_strategy(), "First Fit");
        assert_eq!(report.source, path.display().to_string());
    }

    #[test]
    fn test_compare_file_missing() {
        let (dir, _path) = write_stats_file("");
        let missing = dir.path().join("absent.txt");

        let err = compare_file(&missing, &ScoreEvaluator::default()).unwrap_err();
        assert!(matches!(err, AppError::Input(InputError::FileNotFound(_))));
    }

    #[test]
    fn test_compare_file_incomplete_after_skipping() {
        let contents = format!(
            "{STATS_HEADER}\nFirst Fit,600,400,5.00,90.00\nBest Fit,550\n\
             Worst Fit,400,600,30.00,70.00\nNext Fit,580,420,10.00,85.00\n"
        );
        let (_dir, path) = write_stats_file(&contents);

        let err = compare_file(&path, &ScoreEvaluator::default()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Comparison(ComparisonError::IncompleteData {
                expected: 4,
                found: 3
            })
        ));
    }
}
