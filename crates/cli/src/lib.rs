//! Allocator comparison CLI library
//!
//! Command implementations and output formatting for the `alloc-compare`
//! binary.

pub mod commands;
pub mod output;

pub use commands::CommandContext;
pub use output::{JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};

/// Re-export common types
pub use anyhow::{Context, Result};
