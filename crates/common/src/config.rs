//! Configuration management for the comparison tools.
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. `config/default.toml` (optional)
//! 3. An explicit file passed on the command line (required when given)
//! 4. Environment variables prefixed with `ALLOC_COMPARE__`
//!
//! ## Example Configuration
//!
//! ```toml
//! [input]
//! path = "memory_stats.txt"
//! expected_strategies = 4
//!
//! [scoring]
//! fragmentation_weight = 0.4
//! success_rate_weight = 0.6
//!
//! [output]
//! format = "table"
//! colored = true
//! directory = "comparison"
//!
//! [telemetry]
//! log_level = "warn"
//! ```

use std::path::{Path, PathBuf};

use alloc_compare_application::{
    ScoreEvaluatorConfig, ScoringWeights, DEFAULT_FRAGMENTATION_WEIGHT,
    DEFAULT_SUCCESS_RATE_WEIGHT,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Prefix of environment variable overrides, e.g.
/// `ALLOC_COMPARE__SCORING__FRAGMENTATION_WEIGHT=0.5`.
pub const ENV_PREFIX: &str = "ALLOC_COMPARE";

const DEFAULT_CONFIG_FILE: &str = "config/default";
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_FORMATS: [&str; 3] = ["table", "json", "plain"];

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub input: InputConfig,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
    pub telemetry: TelemetryConfig,
}

/// Where the statistics come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Statistics file written by the benchmark program
    pub path: PathBuf,

    /// Number of strategy records a complete file contains
    pub expected_strategies: usize,
}

/// Score weighting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub fragmentation_weight: f64,
    pub success_rate_weight: f64,
}

/// Rendering and export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Terminal format: table, json or plain
    pub format: String,

    /// Colour terminal output
    pub colored: bool,

    /// Directory for exported reports and charts
    pub directory: PathBuf,

    /// Chart width in pixels
    pub chart_width: u32,

    /// Chart height in pixels
    pub chart_height: u32,
}

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Enable JSON logging format
    pub json_logging: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("memory_stats.txt"),
            expected_strategies: 4,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            fragmentation_weight: DEFAULT_FRAGMENTATION_WEIGHT,
            success_rate_weight: DEFAULT_SUCCESS_RATE_WEIGHT,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "table".to_string(),
            colored: true,
            directory: PathBuf::from("comparison"),
            chart_width: 1080,
            chart_height: 720,
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json_logging: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default file, `explicit` and the environment.
    ///
    /// # Errors
    ///
    /// Fails when `explicit` is given but missing, when a source does not parse,
    /// or when the merged configuration is invalid.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.input.expected_strategies == 0 {
            anyhow::bail!("Expected strategy count must be greater than 0");
        }

        self.weights()
            .context("Invalid scoring configuration")?;

        if !VALID_FORMATS.contains(&self.output.format.to_lowercase().as_str()) {
            anyhow::bail!(
                "Invalid output format '{}'. Must be one of: {}",
                self.output.format,
                VALID_FORMATS.join(", ")
            );
        }

        if self.output.chart_width == 0 || self.output.chart_height == 0 {
            anyhow::bail!("Chart dimensions must be greater than 0");
        }

        if !VALID_LOG_LEVELS.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.telemetry.log_level,
                VALID_LOG_LEVELS.join(", ")
            );
        }

        Ok(())
    }

    /// Scoring weights, validated
    pub fn weights(&self) -> Result<ScoringWeights> {
        Ok(ScoringWeights::new(
            self.scoring.fragmentation_weight,
            self.scoring.success_rate_weight,
        )?)
    }

    /// Settings for the score evaluator
    pub fn evaluator_config(&self) -> Result<ScoreEvaluatorConfig> {
        let config = ScoreEvaluatorConfig {
            weights: self.weights()?,
            expected_strategies: self.input.expected_strategies,
        };
        config.validate()?;
        Ok(config)
    }

    /// The effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
