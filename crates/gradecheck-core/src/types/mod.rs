//! # Core Type Definitions
//!
//! This module contains the data types shared by the reader and the classifier:
//! - Parsed input (`Row`, `Table`)
//! - Classification output (`Verdict`)
//! - Error types (`GradeError`)
//!
//! Rows are immutable once parsed. A row is read once, classified, and dropped.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// ROW
// =============================================================================

/// One student's numeric record, parsed from one input line.
///
/// Values keep the order of the tokens on the source line. The length is
/// whatever the line held; positional meaning is applied by
/// [`StudentRecord`](crate::classifier::StudentRecord).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row(Vec<f64>);

impl Row {
    /// Create a row from already-parsed values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// All values, in source order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Value at a position, if the row is long enough.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Number of values on the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a row with no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<f64>> for Row {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

// =============================================================================
// TABLE
// =============================================================================

/// The full input: N rows, in the order they were read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    /// Parsed rows. Length equals the declared count.
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a table from rows.
    #[must_use]
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the declared count was zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

// =============================================================================
// VERDICT
// =============================================================================

/// Outcome of classifying one row.
///
/// Renders as `PASS X.Y` (final grade at one decimal place) or `FAIL`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// The student passes with the given final grade.
    Pass(f64),
    /// Any passing condition was not met.
    Fail,
}

impl Verdict {
    /// True for `Pass`.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass(_))
    }

    /// The final grade, present only on `Pass`.
    #[must_use]
    pub fn final_grade(&self) -> Option<f64> {
        match self {
            Verdict::Pass(grade) => Some(*grade),
            Verdict::Fail => None,
        }
    }

    /// The final grade as printed: one decimal place, present only on `Pass`.
    #[must_use]
    pub fn rounded_grade(&self) -> Option<f64> {
        self.final_grade()
            .map(|grade| round_tenths(grade).and_then(|d| d.to_f64()).unwrap_or(grade))
    }

    /// The bare label, without the grade.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Pass(_) => "PASS",
            Verdict::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass(grade) => match round_tenths(*grade) {
                Some(rounded) => write!(f, "PASS {}", rounded),
                // Non-finite or out of decimal range.
                None => write!(f, "PASS {:.1}", grade),
            },
            Verdict::Fail => f.write_str("FAIL"),
        }
    }
}

/// Round a grade to one decimal place.
///
/// Rounds the shortest decimal form of the value (`6.35`, not the binary
/// `6.3499...`) with midpoints away from zero, so `6.35` becomes `6.4`.
/// The result always carries exactly one fractional digit.
///
/// Returns `None` when the value has no decimal form in range.
#[must_use]
pub fn round_tenths(grade: f64) -> Option<Decimal> {
    if !grade.is_finite() {
        return None;
    }
    let mut rounded = Decimal::from_str(&grade.to_string())
        .ok()?
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);
    Some(rounded)
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while reading or grading a table.
///
/// - Any error aborts processing; there is no per-row recovery
/// - Line numbers are 1-based and count the header as line 1
#[derive(Debug, Error)]
pub enum GradeError {
    /// The header line does not start with a non-negative integer.
    #[error("Malformed row count on line {line}")]
    MalformedCount { line: usize },

    /// A data token could not be parsed as a decimal number.
    #[error("Malformed number {token:?} on line {line}")]
    MalformedNumber { line: usize, token: String },

    /// The stream ended before the declared number of rows was read.
    #[error("Insufficient input: expected {expected} rows, found {found}")]
    InsufficientInput { expected: usize, found: usize },

    /// A data line holds fewer values than a student record needs.
    #[error("Row on line {line} has {found} values, at least {required} required")]
    ShortRow {
        line: usize,
        found: usize,
        required: usize,
    },

    /// A grading policy failed validation.
    #[error("Invalid grading policy: {0}")]
    InvalidPolicy(String),

    /// A policy or report could not be serialized or deserialized.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for GradeError {
    fn from(err: std::io::Error) -> Self {
        GradeError::IoError(err.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================
