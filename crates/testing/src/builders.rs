//! Fluent builder for constructing test metrics.

use alloc_compare_domain::{AlgorithmMetrics, ComparisonError};

/// Builder for creating AlgorithmMetrics test instances
#[derive(Clone)]
pub struct MetricsBuilder {
    name: String,
    allocated_bytes: u64,
    free_bytes: u64,
    fragmentation_percent: f64,
    success_rate_percent: f64,
}

impl MetricsBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            allocated_bytes: 500,
            free_bytes: 500,
            fragmentation_percent: 0.0,
            success_rate_percent: 100.0,
        }
    }

    pub fn with_allocated(mut self, bytes: u64) -> Self {
        self.allocated_bytes = bytes;
        self
    }

    pub fn with_free(mut self, bytes: u64) -> Self {
        self.free_bytes = bytes;
        self
    }

    pub fn with_fragmentation(mut self, percent: f64) -> Self {
        self.fragmentation_percent = percent;
        self
    }

    pub fn with_success_rate(mut self, percent: f64) -> Self {
        self.success_rate_percent = percent;
        self
    }

    pub fn try_build(self) -> Result<AlgorithmMetrics, ComparisonError> {
        AlgorithmMetrics::new(
            self.name,
            self.allocated_bytes,
            self.free_bytes,
            self.fragmentation_percent,
            self.success_rate_percent,
        )
    }

    /// Build the metrics, panicking on invalid values
    pub fn build(self) -> AlgorithmMetrics {
        self.try_build().expect("builder values must be valid metrics")
    }
}
