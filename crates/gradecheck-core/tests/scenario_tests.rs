//! # Scenario Tests
//!
//! End-to-end checks of reader + classifier on complete inputs.
//!
//! ## Groups
//! - S0: Reference scenario
//! - S1: Threshold boundaries
//! - S2: Rounding of the rendered grade
//! - S3: Input errors

use gradecheck_core::{Classifier, GradeError, TableReader, Verdict};

/// Run a whole input through the reader and classifier, rendering each verdict.
fn grade(input: &str) -> Result<Vec<String>, GradeError> {
    let classifier = Classifier::default();
    let reader = TableReader::new(input.as_bytes())?;
    let mut output = Vec::new();

    for (index, row) in reader.enumerate() {
        output.push(classifier.classify_row(&row?, index + 2)?.to_string());
    }
    Ok(output)
}

// =============================================================================
// S0: REFERENCE SCENARIO
// =============================================================================

mod s0_reference {
    use super::*;

    /// S0.1: Two students, one short on participation.
    #[test]
    fn pass_then_fail() {
        let output = grade("2\n8 5 0 6.0 7.0\n7 5 0 6.0 7.0\n").expect("grade");
        assert_eq!(output, vec!["PASS 6.3", "FAIL"]);
    }

    /// S0.2: Re-running the same input gives the same output.
    #[test]
    fn rerun_is_identical() {
        let input = "3\n8 5 0 6.0 7.0\n9 3 2 8.0 5.5\n10 2 1 9.0 9.0\n";
        assert_eq!(grade(input).expect("first"), grade(input).expect("second"));
    }

    /// S0.3: Zero declared rows produce no output.
    #[test]
    fn empty_table() {
        assert!(grade("0\n").expect("grade").is_empty());
    }
}

// =============================================================================
// S1: THRESHOLD BOUNDARIES
// =============================================================================

mod s1_boundaries {
    use super::*;

    /// S1.1: Every threshold exactly met.
    #[test]
    fn exact_thresholds_pass() {
        assert_eq!(grade("1\n8 5 0 5.5 5.5\n").expect("grade"), vec!["PASS 5.5"]);
    }

    /// S1.2: Homework 3 without a sufficiency flag fails.
    #[test]
    fn homework_three_flag_zero_fails() {
        assert_eq!(grade("1\n8 3 0 6.0 7.0\n").expect("grade"), vec!["FAIL"]);
    }

    /// S1.3: Homework 3 with flag 1 passes.
    #[test]
    fn homework_three_flag_one_passes() {
        assert_eq!(grade("1\n8 3 1 6.0 7.0\n").expect("grade"), vec!["PASS 6.3"]);
    }

    /// S1.4: Fractional counts truncate before comparison.
    #[test]
    fn fractional_participation_truncates() {
        assert_eq!(grade("1\n7.99 5 0 6.0 7.0\n").expect("grade"), vec!["FAIL"]);
        assert_eq!(grade("1\n8.01 4.9 1.9 6.0 7.0\n").expect("grade"), vec!["PASS 6.3"]);
    }

    /// S1.5: Scores just under 5.5 fail.
    #[test]
    fn exam_just_under_threshold_fails() {
        assert_eq!(grade("1\n8 5 0 5.49 10\n").expect("grade"), vec!["FAIL"]);
    }
}

// =============================================================================
// S2: ROUNDING
// =============================================================================

mod s2_rounding {
    use super::*;

    /// S2.1: A grade printed as 6.55 by shortest repr is 6.549999... in binary.
    #[test]
    fn below_midpoint_rounds_down() {
        assert_eq!(grade("1\n8 5 0 5.5 9.0\n").expect("grade"), vec!["PASS 6.5"]);
    }

    /// S2.2: 0.7 * 6.5 + 0.3 * 6.0 prints as 6.35 and rounds up.
    #[test]
    fn decimal_midpoint_rounds_up() {
        assert_eq!(grade("1\n8 5 0 6.5 6.0\n").expect("grade"), vec!["PASS 6.4"]);
    }

    /// S2.3: An exactly representable midpoint (7.25) rounds away from zero.
    #[test]
    fn exact_midpoint_rounds_up() {
        assert_eq!(grade("1\n8 5 0 8.0 5.5\n").expect("grade"), vec!["PASS 7.3"]);
    }

    /// S2.3b: Mixed midpoints in one run all round half-up.
    #[test]
    fn midpoints_round_half_up_per_row() {
        let input = "4\n8 5 0 6.5 6.0\n8 5 0 8.0 5.5\n8 5 0 7.5 6.0\n8 5 0 6.0 7.0\n";
        assert_eq!(
            grade(input).expect("grade"),
            vec!["PASS 6.4", "PASS 7.3", "PASS 7.1", "PASS 6.3"]
        );
    }

    /// S2.4: Whole grades keep one decimal digit.
    #[test]
    fn whole_grade_keeps_decimal() {
        assert_eq!(grade("1\n8 5 0 10 10\n").expect("grade"), vec!["PASS 10.0"]);
    }

    #[test]
    fn verdict_value_is_unrounded() {
        let classifier = Classifier::default();
        let row = gradecheck_core::parse_row("8 5 0 6.0 7.0", 2).expect("parse");
        let verdict = classifier.classify_row(&row, 2).expect("classify");
        assert_eq!(verdict, Verdict::Pass(0.7 * 6.0 + 0.3 * 7.0));
    }
}

// =============================================================================
// S3: INPUT ERRORS
// =============================================================================

mod s3_errors {
    use super::*;

    /// S3.1: Header is not an integer.
    #[test]
    fn malformed_count() {
        assert!(matches!(
            grade("many\n8 5 0 6.0 7.0\n"),
            Err(GradeError::MalformedCount { line: 1 })
        ));
    }

    /// S3.2: A data token is not a number.
    #[test]
    fn malformed_number() {
        assert!(matches!(
            grade("1\n8 5 0 six 7.0\n"),
            Err(GradeError::MalformedNumber { line: 2, .. })
        ));
    }

    /// S3.3: Fewer data lines than declared.
    #[test]
    fn insufficient_input() {
        assert!(matches!(
            grade("2\n8 5 0 6.0 7.0\n"),
            Err(GradeError::InsufficientInput {
                expected: 2,
                found: 1
            })
        ));
    }

    /// S3.4: A row too short to index through position 4.
    #[test]
    fn short_row() {
        assert!(matches!(
            grade("1\n8 5 0 6.0\n"),
            Err(GradeError::ShortRow { line: 2, found: 4, .. })
        ));
    }

    /// S3.5: A blank data line is a malformed number with an empty token.
    #[test]
    fn blank_data_line() {
        assert!(matches!(
            grade("2\n\n8 5 0 6.0 7.0\n"),
            Err(GradeError::MalformedNumber { line: 2, ref token }) if token.is_empty()
        ));
    }
}
