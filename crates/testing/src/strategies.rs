//! Property-based testing strategies.

use alloc_compare_domain::{AlgorithmMetrics, Strategy as AllocStrategy};
use proptest::prelude::*;

/// Any valid percentage, boundaries included
pub fn percent() -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(0.0),
        1 => Just(100.0),
        8 => 0.0f64..=100.0,
    ]
}

/// Metrics for a named strategy with arbitrary valid values
pub fn metrics_named(name: &'static str) -> impl Strategy<Value = AlgorithmMetrics> {
    (0u64..1_000_000, 0u64..1_000_000, percent(), percent()).prop_map(
        move |(allocated, free, fragmentation, success_rate)| {
            AlgorithmMetrics::new(name, allocated, free, fragmentation, success_rate)
                .expect("generated values are in range")
        },
    )
}

/// A complete canonical comparison: one record per strategy, in benchmark order
pub fn canonical_record_set() -> impl Strategy<Value = Vec<AlgorithmMetrics>> {
    let names: Vec<&'static str> = AllocStrategy::all()
        .iter()
        .map(|s| s.display_name())
        .collect();
    names
        .into_iter()
        .map(metrics_named)
        .collect::<Vec<_>>()
}
