//! Application layer for the allocator comparison
//!
//! This crate holds the scoring logic that turns validated per-strategy metrics
//! into a ranked comparison.
//!
//! ## Modules
//!
//! - `scoring` - Weighted scoring and best-performer selection
//!
//! ## Usage
//!
//! ```rust
//! use alloc_compare_application::ScoreEvaluator;
//! use alloc_compare_domain::AlgorithmMetrics;
//!
//! let records = vec![
//!     AlgorithmMetrics::new("First Fit", 600, 400, 5.0, 90.0).unwrap(),
//!     AlgorithmMetrics::new("Best Fit", 550, 450, 20.0, 95.0).unwrap(),
//!     AlgorithmMetrics::new("Worst Fit", 400, 600, 30.0, 70.0).unwrap(),
//!     AlgorithmMetrics::new("Next Fit", 580, 420, 10.0, 85.0).unwrap(),
//! ];
//!
//! let result = ScoreEvaluator::default().evaluate(&records).unwrap();
//! assert_eq!(result.best_strategy(), "First Fit");
//! ```

pub mod scoring;

// Re-export commonly used types
pub use scoring::{
    ScoreEvaluator, ScoreEvaluatorBuilder, ScoreEvaluatorConfig, ScoringWeights,
    DEFAULT_FRAGMENTATION_WEIGHT, DEFAULT_SUCCESS_RATE_WEIGHT,
};
