//! Tests for combined scoring and best-performer selection
//!
//! Covers the reference comparison, tie-breaking, incomplete input, and the
//! determinism and monotonicity properties of the score.

use alloc_compare_application::{ScoreEvaluator, ScoringWeights};
use alloc_compare_domain::ComparisonError;
use alloc_compare_testing::fixtures::*;
use alloc_compare_testing::strategies::{canonical_record_set, percent};
use alloc_compare_testing::MetricsBuilder;
use proptest::prelude::*;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_reference_comparison_scores() {
    // Arrange
    let evaluator = ScoreEvaluator::default();

    // Act
    let result = evaluator.evaluate(&reference_records()).unwrap();

    // Assert
    let scores: Vec<f64> = result.scores().values().copied().collect();
    for (actual, expected) in scores.iter().zip([92.0, 89.0, 70.0, 87.0]) {
        assert_close(*actual, expected);
    }
    assert_eq!(result.best_strategy(), "FirstFit");
    assert_eq!(result.best_index(), 0);
}

#[test]
fn test_canonical_names_are_score_keys() {
    let result = ScoreEvaluator::default()
        .evaluate(&canonical_records())
        .unwrap();

    let keys: Vec<&str> = result.scores().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["First Fit", "Best Fit", "Worst Fit", "Next Fit"]);
    assert_eq!(result.best_strategy(), "First Fit");
}

#[test]
fn test_tie_resolves_to_first_in_input_order() {
    // Arrange - Best Fit and Next Fit score identically and above the rest
    let records = vec![
        create_test_metrics("First Fit", 50.0, 50.0),
        create_test_metrics("Best Fit", 10.0, 90.0),
        create_test_metrics("Worst Fit", 60.0, 40.0),
        create_test_metrics("Next Fit", 10.0, 90.0),
    ];

    // Act
    let result = ScoreEvaluator::default().evaluate(&records).unwrap();

    // Assert
    assert_eq!(result.best_strategy(), "Best Fit");

    // Reversing the tied pair flips the winner
    let mut swapped = records.clone();
    swapped.swap(1, 3);
    let result = ScoreEvaluator::default().evaluate(&swapped).unwrap();
    assert_eq!(result.best_strategy(), "Next Fit");
}

#[test]
fn test_three_of_four_records_is_incomplete() {
    let mut records = canonical_records();
    records.pop();

    let err = ScoreEvaluator::default().evaluate(&records).unwrap_err();

    assert_eq!(
        err,
        ComparisonError::IncompleteData {
            expected: 4,
            found: 3
        }
    );
}

#[test]
fn test_five_records_is_rejected() {
    let mut records = canonical_records();
    records.push(create_test_metrics("Buddy", 0.0, 100.0));

    assert!(matches!(
        ScoreEvaluator::default().evaluate(&records),
        Err(ComparisonError::IncompleteData { expected: 4, found: 5 })
    ));
}

#[test]
fn test_weights_change_winner() {
    // Worst Fit has low fragmentation but a poor success rate
    let records = vec![
        MetricsBuilder::new("First Fit").with_fragmentation(40.0).with_success_rate(90.0).build(),
        MetricsBuilder::new("Best Fit").with_fragmentation(40.0).with_success_rate(85.0).build(),
        MetricsBuilder::new("Worst Fit").with_fragmentation(0.0).with_success_rate(75.0).build(),
        MetricsBuilder::new("Next Fit").with_fragmentation(50.0).with_success_rate(80.0).build(),
    ];

    let default_best = ScoreEvaluator::default().evaluate(&records).unwrap();
    assert_eq!(default_best.best_strategy(), "Worst Fit");

    let success_only = ScoreEvaluator::builder()
        .weights(ScoringWeights::new(0.0, 1.0).unwrap())
        .build()
        .unwrap()
        .evaluate(&records)
        .unwrap();
    assert_eq!(success_only.best_strategy(), "First Fit");
}

#[test]
fn test_random_comparisons_stay_in_range() {
    let evaluator = ScoreEvaluator::default();
    for _ in 0..50 {
        let result = evaluator.evaluate(&random_canonical_records()).unwrap();
        for score in result.scores().values() {
            assert!((0.0..=100.0).contains(score));
        }
    }
}

proptest! {
    #[test]
    fn prop_complete_input_yields_four_scores(records in canonical_record_set()) {
        let result = ScoreEvaluator::default().evaluate(&records).unwrap();

        prop_assert_eq!(result.len(), 4);
        prop_assert!(records.iter().any(|r| r.name() == result.best_strategy()));
        prop_assert!(result.scores().values().all(|s| *s <= result.best_score()));
    }

    #[test]
    fn prop_evaluate_is_deterministic(records in canonical_record_set()) {
        let evaluator = ScoreEvaluator::default();
        prop_assert_eq!(evaluator.evaluate(&records), evaluator.evaluate(&records));
    }

    #[test]
    fn prop_lower_fragmentation_never_lowers_score(
        a in percent(),
        b in percent(),
        success in percent(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let evaluator = ScoreEvaluator::default();

        let better = create_test_metrics("First Fit", low, success);
        let worse = create_test_metrics("First Fit", high, success);

        prop_assert!(evaluator.score(&better) >= evaluator.score(&worse));
    }

    #[test]
    fn prop_higher_success_rate_never_lowers_score(
        a in percent(),
        b in percent(),
        fragmentation in percent(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let evaluator = ScoreEvaluator::default();

        let better = create_test_metrics("First Fit", fragmentation, high);
        let worse = create_test_metrics("First Fit", fragmentation, low);

        prop_assert!(evaluator.score(&better) >= evaluator.score(&worse));
    }

    #[test]
    fn prop_scores_within_bounds(fragmentation in percent(), success in percent()) {
        let score = ScoreEvaluator::default()
            .score(&create_test_metrics("First Fit", fragmentation, success));
        prop_assert!((-1e-9..=100.0 + 1e-9).contains(&score));
    }
}
