//! Parser for `go test -cover` style reports
//!
//! Each record is a tab-separated line:
//!
//! ```text
//! ok  	github.com/org/repo/pkg	0.012s	coverage: 85.5% of statements
//! ```
//!
//! Field 1 is the identifier and field 3 holds the percentage. Lines with
//! fewer than four fields (headers, `[no test files]`, blank lines, test log
//! output) are skipped without being decoded, so stray non-UTF-8 bytes in
//! them are harmless. Records are decoded lossily.
//!
//! The percentage is isolated by trimming *character classes*, not literal
//! prefixes: every trailing character from `"% of statements"` and every
//! leading character from `"coverage: "` is stripped. This is deliberately
//! kept as-is; text like `[no statements]` survives the trim and fails to
//! parse.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::core::models::{CoverageMap, is_valid_percentage};
use crate::core::ports::CoverageSource;
use crate::error::GateError;

/// Field separator within a record
const SEPARATOR: char = '\t';

/// Field separator as a raw byte
const SEPARATOR_BYTE: u8 = b'\t';

/// Line terminator of the report
const NEWLINE: u8 = b'\n';

/// Minimum number of fields for a line to be a record
const MIN_FIELDS: usize = 4;

/// Characters trimmed from the start of the percentage field
const LEADING_TRIM: &str = "coverage: ";

/// Characters trimmed from the end of the percentage field
const TRAILING_TRIM: &str = "% of statements";

/// Why a record line was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordError {
    /// Identifier of the rejected record
    pub id: String,
    /// Raw percentage field
    pub field: String,
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid coverage percentage {:?} for {}", self.field, self.id)
    }
}

/// Extract the percentage from a `coverage: N% of statements` field
///
/// Returns `None` when the trimmed text is not a float.
#[must_use]
pub fn parse_percentage(field: &str) -> Option<f64> {
    field
        .trim_end_matches(|c| TRAILING_TRIM.contains(c))
        .trim_start_matches(|c| LEADING_TRIM.contains(c))
        .parse()
        .ok()
}

/// Parse a single report line
///
/// Returns `None` for lines that are not records, otherwise the identifier
/// and its percentage (or why the percentage was rejected).
#[must_use]
pub fn parse_line(line: &str) -> Option<Result<(&str, f64), RecordError>> {
    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let id = fields[1];
    let field = fields[3];
    let record = match parse_percentage(field) {
        Some(percentage) if is_valid_percentage(percentage) => Ok((id, percentage)),
        _ => Err(RecordError {
            id: id.to_string(),
            field: field.to_string(),
        }),
    };
    Some(record)
}

/// Whether raw line bytes carry enough tab-separated fields to be a record
fn has_record_fields(line: &[u8]) -> bool {
    line.iter().filter(|&&b| b == SEPARATOR_BYTE).count() + 1 >= MIN_FIELDS
}

/// Parse a whole report into a coverage mapping
///
/// `origin` is only used in error messages. The first bad record aborts the
/// read; later records for the same identifier replace earlier ones.
pub fn parse_report<R: BufRead>(reader: R, origin: &Path) -> Result<CoverageMap, GateError> {
    let mut coverage = CoverageMap::new();
    let mut skipped = 0usize;

    for (index, line) in reader.split(NEWLINE).enumerate() {
        let mut line =
            line.map_err(|e| GateError::malformed(origin, format!("line {}: {e}", index + 1)))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        if !has_record_fields(&line) {
            skipped += 1;
            continue;
        }

        let line = String::from_utf8_lossy(&line);
        match parse_line(&line) {
            Some(Ok((id, percentage))) => {
                if let Some(previous) = coverage.insert(id, percentage) {
                    log::debug!("{id} reported again: {previous} replaced by {percentage}");
                }
            },
            Some(Err(err)) => {
                return Err(GateError::malformed(origin, format!("line {}: {err}", index + 1)));
            },
            None => skipped += 1,
        }
    }

    log::debug!(
        "parsed {} coverage record(s) from {} ({skipped} non-record line(s) skipped)",
        coverage.len(),
        origin.display()
    );
    Ok(coverage)
}

/// Coverage report file produced by `go test -cover`
#[derive(Debug, Clone)]
pub struct GoCoverReport {
    path: PathBuf,
}

impl GoCoverReport {
    /// Create a source reading `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CoverageSource for GoCoverReport {
    fn location(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<CoverageMap, GateError> {
        let file = File::open(&self.path).map_err(|source| GateError::NotFound {
            path: self.path.clone(),
            source,
        })?;
        parse_report(BufReader::new(file), &self.path)
    }
}
