//! Error types for the allocator comparison domain.
//!
//! Errors are split by the stage that raises them: [`InputError`] while reading the
//! statistics file, [`ComparisonError`] while validating records and scoring them.
//! [`AppError`] unifies both for callers that drive the whole pipeline.

use std::path::PathBuf;

/// Top-level application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Reading or parsing the statistics file failed
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Validating or scoring the records failed
    #[error("Comparison error: {0}")]
    Comparison(#[from] ComparisonError),
}

impl AppError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Comparison(e) => e.error_code(),
        }
    }
}

/// Errors raised while reading the statistics file
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The statistics file does not exist
    #[error("'{}' not found", .0.display())]
    FileNotFound(PathBuf),

    /// A row does not have the expected number of columns
    #[error("Malformed row on line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A field could not be parsed into its column type
    #[error("Invalid {field} on line {line}: '{value}'")]
    InvalidField {
        line: u64,
        field: &'static str,
        value: String,
    },

    /// A well-formed row failed record validation
    #[error("Invalid record on line {line}: {source}")]
    InvalidRecord {
        line: u64,
        #[source]
        source: ComparisonError,
    },

    /// Underlying I/O failure
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input
    #[error("CSV error: {0}")]
    Csv(String),
}

impl InputError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound(_) => "FILE_NOT_FOUND",
            Self::MalformedRow { .. } => "MALFORMED_ROW",
            Self::InvalidField { .. } => "INVALID_FIELD",
            Self::InvalidRecord { source, .. } => source.error_code(),
            Self::Io { .. } => "IO_ERROR",
            Self::Csv(_) => "CSV_ERROR",
        }
    }

    /// Whether processing may continue past this error.
    ///
    /// Only malformed rows are skipped; everything else aborts the load.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MalformedRow { .. })
    }
}

/// Errors raised while validating and scoring per-strategy records
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComparisonError {
    /// The input does not hold the expected number of strategy records
    #[error("Incomplete data: expected {expected} strategy records, found {found}")]
    IncompleteData { expected: usize, found: usize },

    /// A percentage lies outside [0, 100] or is not finite
    #[error("{field} for '{strategy}' out of range: {value} not in [0, 100]")]
    OutOfRangeValue {
        strategy: String,
        field: &'static str,
        value: f64,
    },

    /// The same strategy appears more than once
    #[error("Duplicate strategy: {0}")]
    DuplicateStrategy(String),

    /// A record has no strategy name
    #[error("Strategy name must not be empty")]
    EmptyName,

    /// Scoring weights violate their constraints
    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(String),

    /// Expected strategy count must be at least one
    #[error("Expected strategy count must be greater than 0")]
    InvalidExpectedCount,

    /// Stored scores and best strategy disagree
    #[error("Inconsistent comparison: {0}")]
    InconsistentResult(String),
}

impl ComparisonError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::IncompleteData { .. } => "INCOMPLETE_DATA",
            Self::OutOfRangeValue { .. } => "OUT_OF_RANGE_VALUE",
            Self::DuplicateStrategy(_) => "DUPLICATE_STRATEGY",
            Self::EmptyName => "EMPTY_NAME",
            Self::InvalidWeights(_) => "INVALID_WEIGHTS",
            Self::InvalidExpectedCount => "INVALID_EXPECTED_COUNT",
            Self::InconsistentResult(_) => "INCONSISTENT_RESULT",
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
