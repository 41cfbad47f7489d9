//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use gradecheck_core::{
    Classifier, GradeError, GradingPolicy, ReportLine, Summary, TableReader, Verdict,
};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE LIMITS
// =============================================================================

/// Maximum size of a policy file (64 KiB).
///
/// A policy is a handful of scalar fields; anything larger is not a policy.
const MAX_POLICY_FILE_SIZE: u64 = 64 * 1024;

/// Validate file path before opening.
///
/// Canonicalizes the path and ensures it names a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, GradeError> {
    let canonical = path.canonicalize().map_err(|e| {
        GradeError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(GradeError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), GradeError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| GradeError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(GradeError::InvalidPolicy(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

// =============================================================================
// POLICY LOADING
// =============================================================================

/// Load the grading policy.
///
/// `None` yields the fixed default policy. A file is parsed as TOML; any
/// field it omits keeps its default value. The result is validated.
pub fn load_policy(path: Option<&Path>) -> Result<GradingPolicy, GradeError> {
    let Some(path) = path else {
        return Ok(GradingPolicy::default());
    };

    let path = validate_file_path(path)?;
    validate_file_size(&path, MAX_POLICY_FILE_SIZE)?;

    let text = std::fs::read_to_string(&path)
        .map_err(|e| GradeError::IoError(format!("Cannot read policy file: {}", e)))?;
    let policy = parse_policy(&text)?;

    tracing::info!("Loaded grading policy from {}", path.display());
    Ok(policy)
}

/// Parse and validate a TOML policy document.
pub fn parse_policy(text: &str) -> Result<GradingPolicy, GradeError> {
    let policy: GradingPolicy =
        toml::from_str(text).map_err(|e| GradeError::InvalidPolicy(e.to_string()))?;
    policy.validate()?;
    Ok(policy)
}

// =============================================================================
// GRADE COMMAND
// =============================================================================

/// Open the table source: a file if given, standard input otherwise.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, GradeError> {
    match path {
        Some(path) => {
            let path = validate_file_path(path)?;
            let file = File::open(&path).map_err(|e| {
                GradeError::IoError(format!("Cannot open '{}': {}", path.display(), e))
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Read, classify and emit one line per row.
///
/// Each verdict is written as soon as its row is classified. On error,
/// lines already written stay written and no line is emitted for the
/// failing row.
pub fn grade_stream<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    classifier: &Classifier,
    json_mode: bool,
) -> Result<Summary, GradeError> {
    let reader = TableReader::new(input)?;
    tracing::debug!("Declared rows: {}", reader.declared_rows());

    let mut summary = Summary::new();
    for (index, row) in reader.enumerate() {
        let line = index + 2;
        let verdict = classifier.classify_row(&row?, line)?;
        tracing::debug!(line, verdict = %verdict, "Classified row");

        write_verdict(output, index + 1, &verdict, json_mode)?;
        summary.record(&verdict);
    }

    Ok(summary)
}

fn write_verdict<W: Write>(
    output: &mut W,
    row: usize,
    verdict: &Verdict,
    json_mode: bool,
) -> Result<(), GradeError> {
    if json_mode {
        let record = serde_json::to_string(&ReportLine::new(row, verdict))
            .map_err(|e| GradeError::SerializationError(e.to_string()))?;
        writeln!(output, "{}", record)?;
    } else {
        writeln!(output, "{}", verdict)?;
    }
    Ok(())
}

/// Grade the input table and print verdicts to stdout.
pub fn cmd_grade(
    input: Option<&Path>,
    policy: GradingPolicy,
    json_mode: bool,
) -> Result<(), GradeError> {
    let classifier = Classifier::new(policy);
    let reader = open_input(input)?;

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());

    let result = grade_stream(reader, &mut output, &classifier, json_mode);
    output.flush()?;

    let summary = result?;
    tracing::info!(
        rows = summary.rows,
        passed = summary.passed,
        failed = summary.failed,
        "Grading complete"
    );
    Ok(())
}

// =============================================================================
// POLICY COMMAND
// =============================================================================

/// Render a policy as TOML, or pretty JSON in JSON mode.
pub fn render_policy(policy: &GradingPolicy, json_mode: bool) -> Result<String, GradeError> {
    if json_mode {
        serde_json::to_string_pretty(policy)
            .map_err(|e| GradeError::SerializationError(e.to_string()))
    } else {
        toml::to_string_pretty(policy).map_err(|e| GradeError::SerializationError(e.to_string()))
    }
}

/// Print the effective grading policy.
pub fn cmd_policy(policy: &GradingPolicy, json_mode: bool) -> Result<(), GradeError> {
    let rendered = render_policy(policy, json_mode)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered.trim_end())?;
    Ok(())
}
