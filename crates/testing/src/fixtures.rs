//! Test fixtures for per-strategy metrics and statistics files.
//!
//! Fixed fixtures reproduce known comparisons; the `random_*` functions use
//! `fake` for values within the valid ranges.

use alloc_compare_domain::{AlgorithmMetrics, Strategy};
use fake::Fake;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Header line written by the benchmark program.
pub const STATS_HEADER: &str = "Algorithm,Allocated,Free,Fragmentation,SuccessRate";

/// Reference comparison with scores 92, 89, 70 and 87; First Fit wins.
pub fn reference_records() -> Vec<AlgorithmMetrics> {
    vec![
        create_test_metrics("FirstFit", 5.0, 90.0),
        create_test_metrics("BestFit", 20.0, 95.0),
        create_test_metrics("WorstFit", 30.0, 70.0),
        create_test_metrics("NextFit", 10.0, 85.0),
    ]
}

/// The same comparison using the benchmark's display names.
pub fn canonical_records() -> Vec<AlgorithmMetrics> {
    Strategy::all()
        .iter()
        .zip(reference_records())
        .map(|(strategy, record)| {
            AlgorithmMetrics::new(
                strategy.display_name(),
                record.allocated_bytes(),
                record.free_bytes(),
                record.fragmentation_percent(),
                record.success_rate_percent(),
            )
            .expect("fixture values are valid")
        })
        .collect()
}

/// Metrics for one strategy over a 1000 byte arena with 600 bytes allocated
pub fn create_test_metrics(name: &str, fragmentation: f64, success_rate: f64) -> AlgorithmMetrics {
    AlgorithmMetrics::new(name, 600, 400, fragmentation, success_rate)
        .expect("fixture values are valid")
}

/// Metrics with random in-range values
pub fn random_metrics(name: &str) -> AlgorithmMetrics {
    let allocated: u64 = (0u64..1000).fake();
    AlgorithmMetrics::new(
        name,
        allocated,
        1000 - allocated,
        (0.0f64..100.0).fake::<f64>(),
        (0.0f64..100.0).fake::<f64>(),
    )
    .expect("random values are in range")
}

/// One random record per canonical strategy
pub fn random_canonical_records() -> Vec<AlgorithmMetrics> {
    Strategy::all()
        .iter()
        .map(|s| random_metrics(s.display_name()))
        .collect()
}

/// Render records the way the benchmark program writes them
pub fn stats_csv(records: &[AlgorithmMetrics]) -> String {
    let mut out = String::from(STATS_HEADER);
    out.push('\n');
    for r in records {
        out.push_str(&format!(
            "{},{},{},{:.2},{:.2}\n",
            r.name(),
            r.allocated_bytes(),
            r.free_bytes(),
            r.fragmentation_percent(),
            r.success_rate_percent()
        ));
    }
    out
}

/// A complete statistics file for the canonical comparison
pub fn sample_stats_csv() -> String {
    stats_csv(&canonical_records())
}

/// Write `contents` to `memory_stats.txt` inside a fresh temporary directory.
///
/// The directory is removed when the returned guard drops.
pub fn write_stats_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("memory_stats.txt");
    fs::write(&path, contents).expect("write stats file");
    (dir, path)
}
