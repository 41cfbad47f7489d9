//! # Grading Policy
//!
//! The thresholds and weights the classifier applies to every record.
//!
//! `GradingPolicy::default()` is the fixed policy from [`crate::primitives`].
//! Every field may be omitted from a serialized policy and falls back to
//! that default, so a partial document only overrides what it names.

use crate::GradeError;
use crate::primitives::{
    EXAM_WEIGHT, FULL_HOMEWORK, MIN_HOMEWORK, MIN_PARTICIPATION, PASS_THRESHOLD, PROJECT_WEIGHT,
    SUFFICIENCY_FLAGS,
};
use serde::{Deserialize, Serialize};

/// Weights and thresholds of the pass/fail decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradingPolicy {
    /// Weight of the exam score in the final grade.
    pub exam_weight: f64,
    /// Weight of the project score in the final grade.
    pub project_weight: f64,
    /// Minimum exam score.
    pub min_exam: f64,
    /// Minimum project score.
    pub min_project: f64,
    /// Minimum weighted final grade.
    pub min_final_grade: f64,
    /// Minimum participation count.
    pub min_participation: i64,
    /// Homework count below which a student never passes.
    pub min_homework: i64,
    /// Homework count that passes regardless of the sufficiency flag.
    pub full_homework: i64,
    /// Flag values accepted for homework counts in `[min_homework, full_homework)`.
    pub sufficiency_flags: Vec<i64>,
}

impl Default for GradingPolicy {
    fn default() -> Self {
        Self {
            exam_weight: EXAM_WEIGHT,
            project_weight: PROJECT_WEIGHT,
            min_exam: PASS_THRESHOLD,
            min_project: PASS_THRESHOLD,
            min_final_grade: PASS_THRESHOLD,
            min_participation: MIN_PARTICIPATION,
            min_homework: MIN_HOMEWORK,
            full_homework: FULL_HOMEWORK,
            sufficiency_flags: SUFFICIENCY_FLAGS.to_vec(),
        }
    }
}

impl GradingPolicy {
    /// Check that the policy can be applied.
    ///
    /// Rejects:
    /// - non-finite or negative weights
    /// - non-finite score thresholds
    /// - a homework band where `min_homework > full_homework`
    pub fn validate(&self) -> Result<(), GradeError> {
        for (name, weight) in [
            ("exam_weight", self.exam_weight),
            ("project_weight", self.project_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(GradeError::InvalidPolicy(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, weight
                )));
            }
        }

        for (name, threshold) in [
            ("min_exam", self.min_exam),
            ("min_project", self.min_project),
            ("min_final_grade", self.min_final_grade),
        ] {
            if !threshold.is_finite() {
                return Err(GradeError::InvalidPolicy(format!(
                    "{} must be finite, got {}",
                    name, threshold
                )));
            }
        }

        if self.min_homework > self.full_homework {
            return Err(GradeError::InvalidPolicy(format!(
                "min_homework ({}) exceeds full_homework ({})",
                self.min_homework, self.full_homework
            )));
        }

        Ok(())
    }

    /// Whether a sufficiency flag is one of the accepted values.
    #[must_use]
    pub fn accepts_flag(&self, flag: i64) -> bool {
        self.sufficiency_flags.contains(&flag)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        assert!(GradingPolicy::default().validate().is_ok());
    }

    #[test]
    fn default_policy_matches_primitives() {
        let policy = GradingPolicy::default();
        assert_eq!(policy.exam_weight, 0.7);
        assert_eq!(policy.project_weight, 0.3);
        assert_eq!(policy.min_final_grade, 5.5);
        assert_eq!(policy.min_participation, 8);
        assert_eq!(policy.sufficiency_flags, vec![1, 2]);
    }

    #[test]
    fn validate_rejects_negative_weight() {
        let policy = GradingPolicy {
            exam_weight: -0.1,
            ..GradingPolicy::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(GradeError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn validate_rejects_nan_threshold() {
        let policy = GradingPolicy {
            min_project: f64::NAN,
            ..GradingPolicy::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(GradeError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn validate_rejects_inverted_homework_band() {
        let policy = GradingPolicy {
            min_homework: 6,
            full_homework: 5,
            ..GradingPolicy::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(GradeError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn accepts_flag_checks_membership() {
        let policy = GradingPolicy::default();
        assert!(!policy.accepts_flag(0));
        assert!(policy.accepts_flag(1));
        assert!(policy.accepts_flag(2));
        assert!(!policy.accepts_flag(3));
    }
}
