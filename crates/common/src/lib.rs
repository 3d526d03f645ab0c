//! Shared plumbing for the allocator comparison tools.
//!
//! - Layered configuration (defaults, files, environment)
//! - Tracing subscriber setup

pub mod config;
pub mod telemetry;

pub use crate::config::{AppConfig, InputConfig, OutputConfig, ScoringConfig, TelemetryConfig, ENV_PREFIX};
pub use crate::telemetry::init_tracing;

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
