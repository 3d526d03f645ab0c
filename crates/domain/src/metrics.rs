//! Per-strategy statistics produced by one benchmark run.

use crate::errors::ComparisonError;
use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};

/// Lower bound of a percentage metric.
pub const PERCENT_MIN: f64 = 0.0;

/// Upper bound of a percentage metric.
pub const PERCENT_MAX: f64 = 100.0;

/// Statistics for a single allocation strategy.
///
/// Values are validated on construction and cannot be changed afterwards, so any
/// `AlgorithmMetrics` in hand has percentages within `[0, 100]`.
///
/// # Example
///
/// ```rust
/// use alloc_compare_domain::metrics::AlgorithmMetrics;
///
/// let metrics = AlgorithmMetrics::new("First Fit", 600, 400, 5.0, 90.0).unwrap();
/// assert_eq!(metrics.name(), "First Fit");
/// assert!(AlgorithmMetrics::new("First Fit", 600, 400, 105.0, 90.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAlgorithmMetrics")]
pub struct AlgorithmMetrics {
    name: String,
    allocated_bytes: u64,
    free_bytes: u64,
    fragmentation_percent: f64,
    success_rate_percent: f64,
}

impl AlgorithmMetrics {
    /// Validate and build a record.
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::EmptyName`] for a blank name and
    /// [`ComparisonError::OutOfRangeValue`] when a percentage is outside `[0, 100]`
    /// or not finite.
    pub fn new(
        name: impl Into<String>,
        allocated_bytes: u64,
        free_bytes: u64,
        fragmentation_percent: f64,
        success_rate_percent: f64,
    ) -> Result<Self, ComparisonError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ComparisonError::EmptyName);
        }

        check_percent(&name, "fragmentation", fragmentation_percent)?;
        check_percent(&name, "success rate", success_rate_percent)?;

        Ok(Self {
            name,
            allocated_bytes,
            free_bytes,
            fragmentation_percent,
            success_rate_percent,
        })
    }

    /// Strategy name as it appeared in the input.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bytes held by allocated blocks.
    pub fn allocated_bytes(&self) -> u64 {
        self.allocated_bytes
    }

    /// Bytes held by free blocks.
    pub fn free_bytes(&self) -> u64 {
        self.free_bytes
    }

    /// Total bytes under management.
    pub fn total_bytes(&self) -> u64 {
        self.allocated_bytes.saturating_add(self.free_bytes)
    }

    /// External fragmentation, in percent.
    pub fn fragmentation_percent(&self) -> f64 {
        self.fragmentation_percent
    }

    /// Share of allocation requests satisfied, in percent.
    pub fn success_rate_percent(&self) -> f64 {
        self.success_rate_percent
    }

    /// The catalogue strategy this record names, if any.
    pub fn strategy(&self) -> Option<Strategy> {
        Strategy::from_name(&self.name)
    }
}

fn check_percent(strategy: &str, field: &'static str, value: f64) -> Result<(), ComparisonError> {
    if value.is_finite() && (PERCENT_MIN..=PERCENT_MAX).contains(&value) {
        Ok(())
    } else {
        Err(ComparisonError::OutOfRangeValue {
            strategy: strategy.to_string(),
            field,
            value,
        })
    }
}

/// Unvalidated wire form of [`AlgorithmMetrics`]
#[derive(Debug, Deserialize)]
struct RawAlgorithmMetrics {
    name: String,
    allocated_bytes: u64,
    free_bytes: u64,
    fragmentation_percent: f64,
    success_rate_percent: f64,
}

impl TryFrom<RawAlgorithmMetrics> for AlgorithmMetrics {
    type Error = ComparisonError;

    fn try_from(raw: RawAlgorithmMetrics) -> Result<Self, Self::Error> {
        Self::new(
            raw.name,
            raw.allocated_bytes,
            raw.free_bytes,
            raw.fragmentation_percent,
            raw.success_rate_percent,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_name() {
        let metrics = AlgorithmMetrics::new("  Best Fit ", 10, 990, 0.0, 100.0).unwrap();
        assert_eq!(metrics.name(), "Best Fit");
        assert_eq!(metrics.strategy(), Some(Strategy::BestFit));
        assert_eq!(metrics.total_bytes(), 1000);
    }

    #[test]
    fn test_rejects_blank_name() {
        assert_eq!(
            AlgorithmMetrics::new("   ", 0, 0, 0.0, 0.0),
            Err(ComparisonError::EmptyName)
        );
    }

    #[test]
    fn test_rejects_out_of_range_percentages() {
        let err = AlgorithmMetrics::new("Next Fit", 0, 0, -0.5, 50.0).unwrap_err();
        assert!(matches!(
            err,
            ComparisonError::OutOfRangeValue { field: "fragmentation", .. }
        ));

        let err = AlgorithmMetrics::new("Next Fit", 0, 0, 10.0, 100.01).unwrap_err();
        assert!(matches!(
            err,
            ComparisonError::OutOfRangeValue { field: "success rate", .. }
        ));

        assert!(AlgorithmMetrics::new("Next Fit", 0, 0, f64::NAN, 50.0).is_err());
    }

    #[test]
    fn test_accepts_boundaries() {
        assert!(AlgorithmMetrics::new("Worst Fit", 0, 0, 0.0, 0.0).is_ok());
        assert!(AlgorithmMetrics::new("Worst Fit", 0, 0, 100.0, 100.0).is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok = r#"{"name":"First Fit","allocated_bytes":600,"free_bytes":400,
            "fragmentation_percent":5.0,"success_rate_percent":90.0}"#;
        let metrics: AlgorithmMetrics = serde_json::from_str(ok).unwrap();
        assert_eq!(metrics.allocated_bytes(), 600);

        let bad = r#"{"name":"First Fit","allocated_bytes":600,"free_bytes":400,
            "fragmentation_percent":500.0,"success_rate_percent":90.0}"#;
        assert!(serde_json::from_str::<AlgorithmMetrics>(bad).is_err());
    }
}
