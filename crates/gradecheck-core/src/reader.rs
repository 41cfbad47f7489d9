//! # Table Reader
//!
//! Turns line-oriented text into rows of numbers.
//!
//! ```text
//! N                  <- header: first token is the row count, rest discarded
//! 8 5 0 6.0 7.0      <- row 1: whitespace-separated decimal tokens
//! ...
//! 7 5 0 6.0 7.0      <- row N
//! ```
//!
//! - Exactly N data lines are consumed; anything after them is never read
//! - Tokens keep their source order
//! - Rows are yielded one at a time so callers can emit output per row
//! - Bytes that are not UTF-8 decode to U+FFFD and then fail as numbers

use crate::{GradeError, Row, Table};
use std::io::BufRead;

/// Line number of the header.
const HEADER_LINE: usize = 1;

/// Streaming reader over a row-count header and N data lines.
///
/// Yields `Ok(Row)` for each data line, then `None`. If the stream ends
/// early or a line fails to parse, yields that one error and then `None`.
pub struct TableReader<R> {
    input: R,
    buf: Vec<u8>,
    declared: usize,
    read: usize,
    failed: bool,
}

impl<R: BufRead> TableReader<R> {
    /// Read the header line and prepare to stream the declared rows.
    ///
    /// Returns `GradeError::MalformedCount` if the input is empty or the
    /// header does not start with a non-negative integer.
    pub fn new(input: R) -> Result<Self, GradeError> {
        let mut reader = Self {
            input,
            buf: Vec::new(),
            declared: 0,
            read: 0,
            failed: false,
        };

        let header = reader
            .read_line()?
            .ok_or(GradeError::MalformedCount { line: HEADER_LINE })?;
        reader.declared = parse_count(&header)?;

        Ok(reader)
    }

    /// Row count declared by the header.
    #[must_use]
    pub fn declared_rows(&self) -> usize {
        self.declared
    }

    /// Rows successfully read so far.
    #[must_use]
    pub fn rows_read(&self) -> usize {
        self.read
    }

    /// Input line number of the next data line.
    #[must_use]
    pub fn next_line_number(&self) -> usize {
        HEADER_LINE + self.read + 1
    }

    /// Read one line, decoding invalid UTF-8 lossily. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, GradeError> {
        self.buf.clear();
        if self.input.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

impl<R: BufRead> Iterator for TableReader<R> {
    type Item = Result<Row, GradeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.read >= self.declared {
            return None;
        }

        let line_no = self.next_line_number();
        let result = match self.read_line() {
            Ok(Some(line)) => parse_row(&line, line_no),
            Ok(None) => Err(GradeError::InsufficientInput {
                expected: self.declared,
                found: self.read,
            }),
            Err(e) => Err(e),
        };

        match result {
            Ok(_) => self.read += 1,
            Err(_) => self.failed = true,
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, Some(self.declared.saturating_sub(self.read)))
        }
    }
}

/// Read a whole table: header plus exactly N rows.
pub fn read_table<R: BufRead>(reader: R) -> Result<Table, GradeError> {
    let rows = TableReader::new(reader)?.collect::<Result<Vec<_>, _>>()?;
    Ok(Table::new(rows))
}

/// Parse the row count from the header line.
///
/// Only the first whitespace-separated token is considered.
pub fn parse_count(header: &str) -> Result<usize, GradeError> {
    header
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<usize>().ok())
        .ok_or(GradeError::MalformedCount { line: HEADER_LINE })
}

/// Parse one data line into a row.
///
/// Leading and trailing whitespace is ignored and runs of whitespace act as
/// a single separator. A blank line is a `MalformedNumber` with an empty token.
pub fn parse_row(line: &str, line_no: usize) -> Result<Row, GradeError> {
    if line.trim().is_empty() {
        return Err(GradeError::MalformedNumber {
            line: line_no,
            token: String::new(),
        });
    }

    line.split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| GradeError::MalformedNumber {
                    line: line_no,
                    token: token.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Row::new)
}

// =============================================================================
// TESTS
// =============================================================================
