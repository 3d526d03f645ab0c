//! CLI commands

pub mod chart;
pub mod export;
pub mod rank;
pub mod report;

use std::path::PathBuf;

use alloc_compare_application::ScoreEvaluator;
use alloc_compare_benchmarks::{compare_file, ComparisonReport};
use alloc_compare_common::AppConfig;
use anyhow::Result;
use tracing::debug;

use crate::output::{colors, OutputFormat};

/// Context passed to all commands
pub struct CommandContext {
    pub config: AppConfig,
    pub input: PathBuf,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// `input` and `format` override the configured values when given.
    pub fn new(config: AppConfig, input: Option<PathBuf>, format: Option<OutputFormat>) -> Result<Self> {
        let format = match format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.format).ok_or_else(|| {
                anyhow::anyhow!("Invalid output format '{}'", config.output.format)
            })?,
        };
        let input = input.unwrap_or_else(|| config.input.path.clone());

        Ok(Self {
            config,
            input,
            format,
        })
    }

    /// Evaluator built from the scoring configuration
    pub fn evaluator(&self) -> Result<ScoreEvaluator> {
        Ok(ScoreEvaluator::new(self.config.evaluator_config()?)?)
    }

    /// Load and score the input file
    pub fn load_report(&self) -> Result<ComparisonReport> {
        debug!(input = %self.input.display(), "Loading statistics");
        let report = compare_file(&self.input, &self.evaluator()?)?;

        for row in &report.skipped_rows {
            eprintln!("{} {}", colors::warning("Warning:"), row.to_error());
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_uses_config_defaults() {
        let ctx = CommandContext::new(AppConfig::default(), None, None).unwrap();

        assert_eq!(ctx.input, PathBuf::from("memory_stats.txt"));
        assert_eq!(ctx.format, OutputFormat::Table);
    }

    #[test]
    fn test_context_overrides() {
        let ctx = CommandContext::new(
            AppConfig::default(),
            Some(PathBuf::from("stats.csv")),
            Some(OutputFormat::Json),
        )
        .unwrap();

        assert_eq!(ctx.input, PathBuf::from("stats.csv"));
        assert_eq!(ctx.format, OutputFormat::Json);
    }

    #[test]
    fn test_evaluator_follows_config() {
        let mut config = AppConfig::default();
        config.scoring.fragmentation_weight = 0.5;
        config.scoring.success_rate_weight = 0.5;

        let ctx = CommandContext::new(config, None, None).unwrap();
        assert_eq!(ctx.evaluator().unwrap().weights().fragmentation, 0.5);
    }
}
