//! # Grading Primitives
//!
//! Compiled-in constants of the fixed grading policy.
//!
//! [`GradingPolicy::default`](crate::policy::GradingPolicy) is built from these
//! values, so a run without a policy file grades exactly by this table:
//!
//! | Condition          | Requirement                                   |
//! |--------------------|-----------------------------------------------|
//! | exam               | >= 5.5                                        |
//! | project            | >= 5.5                                        |
//! | final grade        | 0.7 * exam + 0.3 * project >= 5.5             |
//! | participation      | >= 8                                          |
//! | homework           | >= 5, or 3..5 with sufficiency flag 1 or 2    |

/// Weight of the exam score in the final grade.
pub const EXAM_WEIGHT: f64 = 0.7;

/// Weight of the project score in the final grade.
pub const PROJECT_WEIGHT: f64 = 0.3;

/// Minimum exam, project and final grade for a pass.
pub const PASS_THRESHOLD: f64 = 5.5;

/// Minimum participation count for a pass.
pub const MIN_PARTICIPATION: i64 = 8;

/// Homework count below which a student never passes.
pub const MIN_HOMEWORK: i64 = 3;

/// Homework count that passes without the sufficiency flag.
pub const FULL_HOMEWORK: i64 = 5;

/// Sufficiency flag values that rescue a homework count in `[MIN_HOMEWORK, FULL_HOMEWORK)`.
pub const SUFFICIENCY_FLAGS: [i64; 2] = [1, 2];

/// Number of leading values a row needs to form a student record.
pub const RECORD_WIDTH: usize = 5;
