//! I/O operations for allocator statistics.
//!
//! This module reads the `memory_stats.txt` file written by the allocator
//! benchmark and reads/writes comparison reports.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use alloc_compare_domain::{AlgorithmMetrics, InputError};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::report::ComparisonReport;

/// Default statistics file written by the benchmark program.
pub const DEFAULT_STATS_FILE: &str = "memory_stats.txt";

/// Default directory for exported reports.
pub const DEFAULT_OUTPUT_DIR: &str = "comparison";

/// Default JSON report file name.
pub const JSON_REPORT_FILE: &str = "comparison.json";

/// Default Markdown summary file name.
pub const SUMMARY_FILE: &str = "comparison.md";

/// Default chart file name.
pub const CHART_FILE: &str = "comparison.png";

/// Number of columns in a statistics row.
pub const STATS_COLUMNS: usize = 5;

/// A data row dropped because it did not have [`STATS_COLUMNS`] fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based line number in the statistics file
    pub line: u64,
    /// Number of fields the row had
    pub fields: usize,
}

impl SkippedRow {
    /// The row as a reportable error
    pub fn to_error(&self) -> InputError {
        InputError::MalformedRow {
            line: self.line,
            expected: STATS_COLUMNS,
            found: self.fields,
        }
    }
}

/// Parsed content of a statistics file
#[derive(Debug, Clone, PartialEq)]
pub struct StatsFile {
    /// Valid records, in file order
    pub records: Vec<AlgorithmMetrics>,
    /// Rows skipped for having the wrong number of fields
    pub skipped_rows: Vec<SkippedRow>,
}

/// Reads and parses a statistics file.
///
/// # Errors
///
/// - [`InputError::FileNotFound`] when `path` does not exist
/// - any error from [`parse_stats`]
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_stats(path: &Path) -> Result<StatsFile, InputError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::FileNotFound(path.to_path_buf()),
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    parse_stats(BufReader::new(file))
}

/// Parses statistics from any reader.
///
/// The first line is a header and is skipped. Rows with a field count other than
/// five are skipped and reported in [`StatsFile::skipped_rows`]. Fields are
/// trimmed; blank lines are ignored.
///
/// # Errors
///
/// - [`InputError::InvalidField`] when a numeric field does not parse
/// - [`InputError::InvalidRecord`] when a percentage is out of range or the name is blank
/// - [`InputError::Csv`] when the reader fails
pub fn parse_stats<R: Read>(reader: R) -> Result<StatsFile, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let header_len = reader
        .headers()
        .map_err(|e| InputError::Csv(e.to_string()))?
        .len();
    if header_len != STATS_COLUMNS {
        warn!(
            fields = header_len,
            expected = STATS_COLUMNS,
            "Unexpected header in statistics file"
        );
    }

    let mut records = Vec::new();
    let mut skipped_rows = Vec::new();

    for row in reader.records() {
        let row = row.map_err(|e| InputError::Csv(e.to_string()))?;
        let line = row.position().map_or(0, |p| p.line());

        if row.len() != STATS_COLUMNS {
            let skipped = SkippedRow {
                line,
                fields: row.len(),
            };
            warn!(error = %skipped.to_error(), "Skipping row");
            skipped_rows.push(skipped);
            continue;
        }

        let record = AlgorithmMetrics::new(
            &row[0],
            parse_field(&row[1], line, "allocated bytes")?,
            parse_field(&row[2], line, "free bytes")?,
            parse_field(&row[3], line, "fragmentation")?,
            parse_field(&row[4], line, "success rate")?,
        )
        .map_err(|source| InputError::InvalidRecord { line, source })?;

        debug!(line, strategy = %record.name(), "Parsed statistics row");
        records.push(record);
    }

    Ok(StatsFile {
        records,
        skipped_rows,
    })
}

fn parse_field<T: std::str::FromStr>(
    value: &str,
    line: u64,
    field: &'static str,
) -> Result<T, InputError> {
    value.parse().map_err(|_| InputError::InvalidField {
        line,
        field,
        value: value.to_string(),
    })
}

/// Writes a comparison report as pretty JSON.
///
/// Parent directories are created as needed.
pub fn write_report(report: &ComparisonReport, path: &Path) -> Result<PathBuf> {
    ensure_parent_dir(path)?;

    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, report)
        .with_context(|| "Failed to serialize comparison report")?;

    writer.flush()?;

    Ok(path.to_path_buf())
}

/// Reads a comparison report from a JSON file.
pub fn read_report(path: &Path) -> Result<ComparisonReport> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse comparison report from: {}", path.display()))
}

/// Resolves an output path, defaulting to `file_name` inside `output_dir`.
pub fn output_path(explicit: Option<&Path>, output_dir: &Path, file_name: &str) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| output_dir.join(file_name))
}

/// Creates the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}
