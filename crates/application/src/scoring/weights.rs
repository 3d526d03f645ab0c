//! Weights blending fragmentation and success rate into one score

use alloc_compare_domain::ComparisonError;
use serde::{Deserialize, Serialize};

/// Default weight of the inverted fragmentation term.
pub const DEFAULT_FRAGMENTATION_WEIGHT: f64 = 0.4;

/// Default weight of the success rate term.
pub const DEFAULT_SUCCESS_RATE_WEIGHT: f64 = 0.6;

/// Allowed deviation of the weight sum from 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Linear weighting of the two scored metrics.
///
/// `score = (100 - fragmentation_percent) * weights.fragmentation
///     + success_rate_percent * weights.success_rate`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight applied to `100 - fragmentation_percent`
    pub fragmentation: f64,
    /// Weight applied to `success_rate_percent`
    pub success_rate: f64,
}

impl ScoringWeights {
    pub fn new(fragmentation: f64, success_rate: f64) -> Result<Self, ComparisonError> {
        let weights = Self {
            fragmentation,
            success_rate,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Check that both weights are finite, non-negative and sum to 1.
    ///
    /// A unit sum keeps every score within `[0, 100]`.
    pub fn validate(&self) -> Result<(), ComparisonError> {
        for (label, weight) in [
            ("fragmentation", self.fragmentation),
            ("success rate", self.success_rate),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ComparisonError::InvalidWeights(format!(
                    "{label} weight must be a non-negative number, got {weight}"
                )));
            }
        }

        let sum = self.fragmentation + self.success_rate;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ComparisonError::InvalidWeights(format!(
                "weights must sum to 1, got {sum}"
            )));
        }

        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            fragmentation: DEFAULT_FRAGMENTATION_WEIGHT,
            success_rate: DEFAULT_SUCCESS_RATE_WEIGHT,
        }
    }
}
