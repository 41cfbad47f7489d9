//! # Grade Classifier
//!
//! Pure decision function from one record to a [`Verdict`].
//!
//! A student passes when ALL of the following hold:
//! - exam, project and final grade reach their thresholds
//! - participation reaches its minimum
//! - homework reaches the full count, or sits in the band
//!   `[min_homework, full_homework)` with an accepted sufficiency flag
//!
//! The classifier carries no state between calls. NaN scores fail every
//! comparison and therefore never pass.

use crate::policy::GradingPolicy;
use crate::primitives::RECORD_WIDTH;
use crate::{GradeError, Row, Verdict};

// =============================================================================
// STUDENT RECORD
// =============================================================================

/// Positional view of a row.
///
/// The three count fields are truncated toward zero. Out-of-range values
/// saturate and NaN becomes 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentRecord {
    /// Participation count (index 0).
    pub participation: i64,
    /// Homework count (index 1).
    pub homework: i64,
    /// Homework sufficiency flag, expected 0, 1 or 2 (index 2).
    pub homework_sufficient: i64,
    /// Exam score (index 3).
    pub exam: f64,
    /// Project score (index 4).
    pub project: f64,
}

impl StudentRecord {
    /// Extract a record from the first five values of a row.
    ///
    /// Returns `GradeError::ShortRow` if the row holds fewer than five values.
    /// Values past the fifth are ignored.
    pub fn from_row(row: &Row, line: usize) -> Result<Self, GradeError> {
        match *row.values() {
            [participation, homework, homework_sufficient, exam, project, ..] => Ok(Self {
                participation: participation as i64,
                homework: homework as i64,
                homework_sufficient: homework_sufficient as i64,
                exam,
                project,
            }),
            _ => Err(GradeError::ShortRow {
                line,
                found: row.len(),
                required: RECORD_WIDTH,
            }),
        }
    }
}

// =============================================================================
// CLASSIFIER
// =============================================================================

/// Weighted final grade under a policy.
#[must_use]
pub fn final_grade(policy: &GradingPolicy, exam: f64, project: f64) -> f64 {
    policy.exam_weight * exam + policy.project_weight * project
}

/// Applies a [`GradingPolicy`] to student records.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    policy: GradingPolicy,
}

impl Classifier {
    /// Create a classifier for a policy.
    #[must_use]
    pub fn new(policy: GradingPolicy) -> Self {
        Self { policy }
    }

    /// The policy in effect.
    #[must_use]
    pub fn policy(&self) -> &GradingPolicy {
        &self.policy
    }

    /// Classify one record.
    #[must_use]
    pub fn classify(&self, record: &StudentRecord) -> Verdict {
        let policy = &self.policy;
        let grade = final_grade(policy, record.exam, record.project);

        let passes = record.exam >= policy.min_exam
            && record.project >= policy.min_project
            && grade >= policy.min_final_grade
            && record.participation >= policy.min_participation
            && self.homework_ok(record);

        if passes {
            Verdict::Pass(grade)
        } else {
            Verdict::Fail
        }
    }

    /// Extract the record from a row and classify it.
    pub fn classify_row(&self, row: &Row, line: usize) -> Result<Verdict, GradeError> {
        StudentRecord::from_row(row, line).map(|record| self.classify(&record))
    }

    fn homework_ok(&self, record: &StudentRecord) -> bool {
        let policy = &self.policy;
        let homework = record.homework;

        if homework < policy.min_homework {
            return false;
        }
        homework >= policy.full_homework
            || (homework < policy.full_homework && policy.accepts_flag(record.homework_sufficient))
    }
}

/// Classify a record under the fixed default policy.
#[must_use]
pub fn classify(record: &StudentRecord) -> Verdict {
    Classifier::default().classify(record)
}

// =============================================================================
// TESTS
// =============================================================================
