//! # Report
//!
//! Serializable per-row results and run totals.

use crate::Verdict;
use serde::{Deserialize, Serialize};

/// One classified row, in a form suitable for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    /// 1-based row index (not the input line number).
    pub row: usize,
    /// `"PASS"` or `"FAIL"`.
    pub verdict: String,
    /// Final grade rounded to one decimal place, present only on a pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_grade: Option<f64>,
}

impl ReportLine {
    /// Build the report line for a verdict.
    #[must_use]
    pub fn new(row: usize, verdict: &Verdict) -> Self {
        Self {
            row,
            verdict: verdict.label().to_string(),
            final_grade: verdict.rounded_grade(),
        }
    }
}

/// Totals for a completed (or aborted) run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Rows classified.
    pub rows: usize,
    /// Rows that passed.
    pub passed: usize,
    /// Rows that failed.
    pub failed: usize,
}

impl Summary {
    /// Create an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one verdict.
    pub fn record(&mut self, verdict: &Verdict) {
        self.rows += 1;
        if verdict.is_pass() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }
}
