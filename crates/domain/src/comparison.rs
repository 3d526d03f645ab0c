//! Outcome of scoring a set of strategies against each other.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::ComparisonError;

/// Combined scores for every strategy and the best performer.
///
/// Scores keep the order of the records they were computed from. The best
/// strategy is always the first maximal score key, also after deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawComparisonResult")]
pub struct ComparisonResult {
    scores: IndexMap<String, f64>,
    best_strategy: String,
}

impl ComparisonResult {
    /// Build a result from ordered scores, picking the first maximal entry as best.
    ///
    /// Returns `None` when `scores` is empty.
    pub fn from_scores(scores: IndexMap<String, f64>) -> Option<Self> {
        let mut best: Option<(&String, f64)> = None;
        for (name, &score) in &scores {
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((name, score)),
            }
        }

        let best_strategy = best?.0.clone();
        Some(Self {
            scores,
            best_strategy,
        })
    }

    /// Scores per strategy, in input order.
    pub fn scores(&self) -> &IndexMap<String, f64> {
        &self.scores
    }

    /// Name of the highest-scoring strategy.
    pub fn best_strategy(&self) -> &str {
        &self.best_strategy
    }

    /// Score of the best strategy.
    pub fn best_score(&self) -> f64 {
        self.scores
            .get(&self.best_strategy)
            .copied()
            .unwrap_or_default()
    }

    /// Position of the best strategy in input order.
    pub fn best_index(&self) -> usize {
        self.scores
            .get_index_of(&self.best_strategy)
            .unwrap_or_default()
    }

    pub fn score_of(&self, name: &str) -> Option<f64> {
        self.scores.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Strategies ordered by descending score; equal scores keep input order.
    pub fn ranking(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .scores
            .iter()
            .map(|(name, score)| (name.as_str(), *score))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

/// Unvalidated wire form of [`ComparisonResult`]
#[derive(Debug, Deserialize)]
struct RawComparisonResult {
    scores: IndexMap<String, f64>,
    best_strategy: String,
}

impl TryFrom<RawComparisonResult> for ComparisonResult {
    type Error = ComparisonError;

    fn try_from(raw: RawComparisonResult) -> Result<Self, Self::Error> {
        let result = Self::from_scores(raw.scores).ok_or_else(|| {
            ComparisonError::InconsistentResult("no scores recorded".to_string())
        })?;

        if result.best_strategy != raw.best_strategy {
            return Err(ComparisonError::InconsistentResult(format!(
                "best strategy '{}' does not match highest score '{}'",
                raw.best_strategy, result.best_strategy
            )));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(entries: &[(&str, f64)]) -> IndexMap<String, f64> {
        entries
            .iter()
            .map(|(name, score)| (name.to_string(), *score))
            .collect()
    }

    #[test]
    fn test_from_scores_picks_maximum() {
        let result =
            ComparisonResult::from_scores(scores(&[("a", 1.0), ("b", 3.0), ("c", 2.0)])).unwrap();
        assert_eq!(result.best_strategy(), "b");
        assert_eq!(result.best_score(), 3.0);
        assert_eq!(result.best_index(), 1);
    }

    #[test]
    fn test_from_scores_first_maximum_wins() {
        let result =
            ComparisonResult::from_scores(scores(&[("a", 5.0), ("b", 7.0), ("c", 7.0)])).unwrap();
        assert_eq!(result.best_strategy(), "b");
    }

    #[test]
    fn test_from_scores_empty() {
        assert!(ComparisonResult::from_scores(IndexMap::new()).is_none());
    }

    #[test]
    fn test_ranking_is_stable() {
        let result = ComparisonResult::from_scores(scores(&[
            ("a", 2.0),
            ("b", 9.0),
            ("c", 2.0),
            ("d", 4.0),
        ]))
        .unwrap();
        let names: Vec<&str> = result.ranking().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_serialization_preserves_order() {
        let result =
            ComparisonResult::from_scores(scores(&[("z", 1.0), ("a", 2.0)])).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.find("\"z\"").unwrap() < json.find("\"a\"").unwrap());

        let back: ComparisonResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_deserialize_rejects_unknown_best_strategy() {
        let json = r#"{"scores":{"First Fit":92.0,"Best Fit":89.0},"best_strategy":"Buddy"}"#;
        let err = serde_json::from_str::<ComparisonResult>(json).unwrap_err();
        assert!(err.to_string().contains("Buddy"));
    }

    #[test]
    fn test_deserialize_rejects_non_maximal_best_strategy() {
        let json = r#"{"scores":{"First Fit":92.0,"Best Fit":89.0},"best_strategy":"Best Fit"}"#;
        assert!(serde_json::from_str::<ComparisonResult>(json).is_err());

        let empty = r#"{"scores":{},"best_strategy":"First Fit"}"#;
        assert!(serde_json::from_str::<ComparisonResult>(empty).is_err());
    }
}
