//! Testing utilities for the allocator comparison
//!
//! This crate provides:
//! - Fixtures for per-strategy metrics and statistics files
//! - A builder for custom `AlgorithmMetrics`
//! - Property-based testing strategies
//!
//! # Examples
//!
//! ```
//! use alloc_compare_testing::{fixtures::*, builders::*};
//!
//! let records = reference_records();
//! assert_eq!(records.len(), 4);
//!
//! let metrics = MetricsBuilder::new("Best Fit")
//!     .with_fragmentation(12.5)
//!     .build();
//! assert_eq!(metrics.fragmentation_percent(), 12.5);
//! ```

pub mod builders;
pub mod fixtures;
pub mod strategies;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;

// Re-export testing dependencies for convenience
pub use fake;
pub use proptest;
