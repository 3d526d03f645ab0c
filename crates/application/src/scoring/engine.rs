//! Score Evaluator - combined performance scoring
//!
//! The evaluator blends each strategy's fragmentation and success rate into a
//! single score and picks the best performer of a complete comparison.

use crate::scoring::weights::ScoringWeights;
use alloc_compare_domain::{
    AlgorithmMetrics, ComparisonError, ComparisonResult, CANONICAL_STRATEGY_COUNT,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Score evaluator configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreEvaluatorConfig {
    /// Weighting of the scored metrics
    pub weights: ScoringWeights,
    /// Number of strategy records a comparison must contain
    pub expected_strategies: usize,
}

impl Default for ScoreEvaluatorConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            expected_strategies: CANONICAL_STRATEGY_COUNT,
        }
    }
}

impl ScoreEvaluatorConfig {
    pub fn validate(&self) -> Result<(), ComparisonError> {
        self.weights.validate()?;
        if self.expected_strategies == 0 {
            return Err(ComparisonError::InvalidExpectedCount);
        }
        Ok(())
    }
}

/// Computes combined scores and selects the best strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreEvaluator {
    config: ScoreEvaluatorConfig,
}

impl ScoreEvaluator {
    /// Create an evaluator, validating its configuration
    pub fn new(config: ScoreEvaluatorConfig) -> Result<Self, ComparisonError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn builder() -> ScoreEvaluatorBuilder {
        ScoreEvaluatorBuilder::new()
    }

    pub fn config(&self) -> &ScoreEvaluatorConfig {
        &self.config
    }

    pub fn weights(&self) -> ScoringWeights {
        self.config.weights
    }

    /// Combined score of a single record, in `[0, 100]`
    pub fn score(&self, metrics: &AlgorithmMetrics) -> f64 {
        let weights = self.config.weights;
        (100.0 - metrics.fragmentation_percent()) * weights.fragmentation
            + metrics.success_rate_percent() * weights.success_rate
    }

    /// Score every record and pick the best performer.
    ///
    /// Ties go to the record that appears first.
    ///
    /// # Errors
    ///
    /// - [`ComparisonError::IncompleteData`] when the record count differs from
    ///   the expected number of strategies
    /// - [`ComparisonError::DuplicateStrategy`] when a strategy appears twice
    #[instrument(skip(self, records), fields(records = records.len()))]
    pub fn evaluate(&self, records: &[AlgorithmMetrics]) -> Result<ComparisonResult, ComparisonError> {
        if records.len() != self.config.expected_strategies {
            return Err(ComparisonError::IncompleteData {
                expected: self.config.expected_strategies,
                found: records.len(),
            });
        }

        let mut seen = HashSet::with_capacity(records.len());
        let mut scores = IndexMap::with_capacity(records.len());

        for record in records {
            if !seen.insert(identity_key(record)) {
                return Err(ComparisonError::DuplicateStrategy(record.name().to_string()));
            }

            let score = self.score(record);
            debug!(strategy = %record.name(), score, "Scored strategy");
            scores.insert(record.name().to_string(), score);
        }

        // expected_strategies >= 1, so scores is non-empty here
        let result = ComparisonResult::from_scores(scores).ok_or(ComparisonError::IncompleteData {
            expected: self.config.expected_strategies,
            found: 0,
        })?;

        debug!(
            best = %result.best_strategy(),
            score = result.best_score(),
            "Selected best strategy"
        );

        Ok(result)
    }
}

impl Default for ScoreEvaluator {
    fn default() -> Self {
        Self {
            config: ScoreEvaluatorConfig::default(),
        }
    }
}

/// Two records name the same strategy when they resolve to the same catalogue
/// entry, or, for unknown strategies, share a case-insensitive name.
fn identity_key(record: &AlgorithmMetrics) -> String {
    match record.strategy() {
        Some(strategy) => strategy.display_name().to_string(),
        None => record.name().to_lowercase(),
    }
}

/// Builder for ScoreEvaluator
pub struct ScoreEvaluatorBuilder {
    config: ScoreEvaluatorConfig,
}

impl ScoreEvaluatorBuilder {
    pub fn new() -> Self {
        Self {
            config: ScoreEvaluatorConfig::default(),
        }
    }

    pub fn config(mut self, config: ScoreEvaluatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn weights(mut self, weights: ScoringWeights) -> Self {
        self.config.weights = weights;
        self
    }

    pub fn expected_strategies(mut self, count: usize) -> Self {
        self.config.expected_strategies = count;
        self
    }

    pub fn build(self) -> Result<ScoreEvaluator, ComparisonError> {
        ScoreEvaluator::new(self.config)
    }
}

impl Default for ScoreEvaluatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
