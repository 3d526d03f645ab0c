//! The catalogue of allocation strategies compared by the benchmark.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of strategies in a canonical comparison.
pub const CANONICAL_STRATEGY_COUNT: usize = 4;

/// Placement strategies exercised by the allocator benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    FirstFit,
    BestFit,
    WorstFit,
    NextFit,
}

impl Strategy {
    /// All strategies in benchmark order.
    pub fn all() -> &'static [Strategy] {
        &[Self::FirstFit, Self::BestFit, Self::WorstFit, Self::NextFit]
    }

    /// Name as written by the benchmark program.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FirstFit => "First Fit",
            Self::BestFit => "Best Fit",
            Self::WorstFit => "Worst Fit",
            Self::NextFit => "Next Fit",
        }
    }

    /// Position in benchmark order.
    pub fn index(&self) -> usize {
        match self {
            Self::FirstFit => 0,
            Self::BestFit => 1,
            Self::WorstFit => 2,
            Self::NextFit => 3,
        }
    }

    /// Resolve a free-form strategy name.
    ///
    /// Case, whitespace, dashes and underscores are ignored, so `First Fit`,
    /// `FirstFit`, `first-fit` and `first_fit` all resolve to [`Strategy::FirstFit`].
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "firstfit" => Some(Self::FirstFit),
            "bestfit" => Some(Self::BestFit),
            "worstfit" => Some(Self::WorstFit),
            "nextfit" => Some(Self::NextFit),
            _ => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a name matches no known strategy
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown allocation strategy: {0}")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}
