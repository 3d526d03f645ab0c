//! The comparison report produced from one statistics file.

use alloc_compare_application::ScoringWeights;
use alloc_compare_domain::{AlgorithmMetrics, ComparisonResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::io::{SkippedRow, StatsFile};

/// Raw metrics, their scores and the best performer for one input file.
///
/// This is the artifact every output (terminal table, JSON, Markdown, chart)
/// is rendered from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonReport {
    /// Path of the statistics file the report was built from.
    pub source: String,

    /// UTC timestamp when the report was built.
    pub generated_at: DateTime<Utc>,

    /// Weights used for the combined score.
    pub weights: ScoringWeights,

    /// Per-strategy metrics, in file order.
    pub metrics: Vec<AlgorithmMetrics>,

    /// Scores and best performer.
    pub comparison: ComparisonResult,

    /// Rows of the statistics file that were skipped.
    #[serde(default)]
    pub skipped_rows: Vec<SkippedRow>,
}

/// One strategy's line in a rendered report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRow<'a> {
    pub metrics: &'a AlgorithmMetrics,
    pub score: f64,
    pub is_best: bool,
}

impl ComparisonReport {
    /// Creates a report stamped with the current UTC time.
    pub fn new(
        source: impl Into<String>,
        weights: ScoringWeights,
        stats: StatsFile,
        comparison: ComparisonResult,
    ) -> Self {
        Self {
            source: source.into(),
            generated_at: Utc::now(),
            weights,
            metrics: stats.records,
            comparison,
            skipped_rows: stats.skipped_rows,
        }
    }

    /// Metrics of the best performer.
    pub fn best_metrics(&self) -> Option<&AlgorithmMetrics> {
        self.metrics
            .iter()
            .find(|m| m.name() == self.comparison.best_strategy())
    }

    /// Rows in file order, with their score and best-performer flag.
    pub fn rows(&self) -> impl Iterator<Item = ReportRow<'_>> {
        let best = self.comparison.best_strategy();
        self.metrics.iter().map(move |metrics| ReportRow {
            metrics,
            score: self.comparison.score_of(metrics.name()).unwrap_or_default(),
            is_best: metrics.name() == best,
        })
    }

    /// Converts the report to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Creates a report from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc_compare_application::ScoreEvaluator;
    use alloc_compare_testing::fixtures::canonical_records;

    fn sample_report() -> ComparisonReport {
        let records = canonical_records();
        let comparison = ScoreEvaluator::default().evaluate(&records).unwrap();
        ComparisonReport::new(
            "memory_stats.txt",
            ScoringWeights::default(),
            StatsFile {
                records,
                skipped_rows: vec![SkippedRow { line: 7, fields: 2 }],
            },
            comparison,
        )
    }

    #[test]
    fn test_rows_flag_single_best() {
        let report = sample_report();
        let rows: Vec<ReportRow<'_>> = report.rows().collect();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows.iter().filter(|r| r.is_best).count(), 1);
        assert!(rows[0].is_best);
        assert_eq!(report.best_metrics().unwrap().name(), "First Fit");
    }

    #[test]
    fn test_json_round_trip() {
        let report = sample_report();

        let json = report.to_json().unwrap();
        let back = ComparisonReport::from_json(&json).unwrap();

        assert_eq!(back.source, report.source);
        assert_eq!(back.generated_at, report.generated_at);
        assert_eq!(back.metrics.len(), 4);
        assert_eq!(back.comparison.best_strategy(), "First Fit");
        assert!((back.comparison.best_score() - report.comparison.best_score()).abs() < 1e-9);
        assert_eq!(back.skipped_rows, report.skipped_rows);
    }
}
