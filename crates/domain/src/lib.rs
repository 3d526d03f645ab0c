//! Allocator Comparison Domain Types
//!
//! This crate provides the core domain model for comparing memory allocation
//! strategies from benchmark statistics.
//!
//! ## Architecture
//!
//! - **strategy**: The catalogue of placement strategies (First/Best/Worst/Next Fit)
//! - **metrics**: Validated per-strategy statistics from one benchmark run
//! - **comparison**: Combined scores and the best performer
//! - **errors**: Error types for loading, validating and scoring
//!
//! ## Usage
//!
//! ```rust
//! use alloc_compare_domain::{AlgorithmMetrics, Strategy};
//!
//! let metrics = AlgorithmMetrics::new("First Fit", 600, 400, 5.0, 90.0).unwrap();
//! assert_eq!(metrics.strategy(), Some(Strategy::FirstFit));
//! ```

#![warn(clippy::all)]

pub mod comparison;
pub mod errors;
pub mod metrics;
pub mod strategy;

// Re-export commonly used types
pub use comparison::ComparisonResult;
pub use errors::{AppError, AppResult, ComparisonError, InputError};
pub use metrics::AlgorithmMetrics;
pub use strategy::{Strategy, UnknownStrategy, CANONICAL_STRATEGY_COUNT};
