//! # Gradecheck
//!
//! Library surface of the Gradecheck binary: CLI definition and commands.
//! The grading logic itself lives in `gradecheck-core`.

pub mod cli;
