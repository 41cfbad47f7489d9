//! # Gradecheck CLI Module
//!
//! This module implements the CLI interface for Gradecheck.
//!
//! ## Available Commands
//!
//! - `grade` - Read a table and print one verdict per row (default)
//! - `policy` - Print the effective grading policy

mod commands;

use clap::{Parser, Subcommand};
use gradecheck_core::GradeError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Gradecheck - PASS/FAIL grade classifier
///
/// Reads a row count followed by one line of scores per student and prints
/// `PASS <grade>` or `FAIL` for each, in input order.
#[derive(Parser, Debug)]
#[command(name = "gradecheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (per-row verdicts on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read the table from a file instead of standard input
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// TOML file overriding the default grading policy
    #[arg(short, long, global = true)]
    pub policy: Option<PathBuf>,

    /// Output in JSON format (one object per row)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Grade every row of the input table
    Grade,

    /// Print the effective grading policy
    Policy,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), GradeError> {
    let policy = load_policy(cli.policy.as_deref())?;

    match cli.command {
        Some(Commands::Policy) => cmd_policy(&policy, cli.json_mode),
        Some(Commands::Grade) | None => cmd_grade(cli.input.as_deref(), policy, cli.json_mode),
    }
}
