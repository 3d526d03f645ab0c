//! Tests for record validation and comparison results
//!
//! Covers the percentage bounds of AlgorithmMetrics and the best-strategy
//! guarantees of ComparisonResult.

use alloc_compare_domain::{AlgorithmMetrics, ComparisonError, ComparisonResult, Strategy};
use indexmap::IndexMap;
use proptest::prelude::*;

// ============================================================================
// AlgorithmMetrics
// ============================================================================

#[test]
fn test_canonical_names_resolve_to_strategies() {
    for strategy in Strategy::all() {
        let metrics =
            AlgorithmMetrics::new(strategy.display_name(), 100, 900, 12.5, 80.0).unwrap();
        assert_eq!(metrics.strategy(), Some(*strategy));
    }
}

#[test]
fn test_unknown_strategy_names_are_kept() {
    let metrics = AlgorithmMetrics::new("Buddy", 100, 900, 12.5, 80.0).unwrap();
    assert_eq!(metrics.name(), "Buddy");
    assert_eq!(metrics.strategy(), None);
}

#[test]
fn test_out_of_range_error_names_strategy() {
    let err = AlgorithmMetrics::new("Best Fit", 0, 0, 10.0, 101.0).unwrap_err();
    assert_eq!(
        err,
        ComparisonError::OutOfRangeValue {
            strategy: "Best Fit".to_string(),
            field: "success rate",
            value: 101.0,
        }
    );
    assert_eq!(err.error_code(), "OUT_OF_RANGE_VALUE");
}

proptest! {
    #[test]
    fn prop_in_range_percentages_accepted(frag in 0.0f64..=100.0, succ in 0.0f64..=100.0) {
        let metrics = AlgorithmMetrics::new("First Fit", 1, 1, frag, succ).unwrap();
        prop_assert_eq!(metrics.fragmentation_percent(), frag);
        prop_assert_eq!(metrics.success_rate_percent(), succ);
    }

    #[test]
    fn prop_above_range_rejected(excess in 0.001f64..1.0e6) {
        prop_assert!(AlgorithmMetrics::new("First Fit", 1, 1, 100.0 + excess, 50.0).is_err());
        prop_assert!(AlgorithmMetrics::new("First Fit", 1, 1, 50.0, -excess).is_err());
    }
}

// ============================================================================
// ComparisonResult
// ============================================================================

proptest! {
    #[test]
    fn prop_best_strategy_is_a_key(values in prop::collection::vec(0.0f64..=100.0, 1..8)) {
        let scores: IndexMap<String, f64> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("s{i}"), *v))
            .collect();
        let result = ComparisonResult::from_scores(scores).unwrap();

        prop_assert!(result.scores().contains_key(result.best_strategy()));
        prop_assert!(values.iter().all(|v| *v <= result.best_score()));
        prop_assert_eq!(result.len(), values.len());
    }
}
