//! Best-of-K averaging
//!
//! For every student row, pick the numeric scores inside a 1-based inclusive
//! column range, keep the K highest and average them.

use crate::error::{GradeError, GradeResult};
use crate::types::{CellValue, ProcessedRow, ProcessedSheet, Row, Sheet, RESULT_COLUMN_HEADER};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::debug;

/// Leading decimal literal of a text cell ("85", "-1.5e2", ".5")
fn score_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid score regex")
    })
}

/// Leading integer of a form field ("6", " 8", "2.5" -> 2)
fn integer_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?\d+").expect("valid integer regex"))
}

//==============================================================================
// Parameters
//==============================================================================

/// Validated column range and best-of count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestOfParams {
    /// First score column, 1-based (1 = column A)
    pub start_column: u32,
    /// Last score column, 1-based, inclusive
    pub end_column: u32,
    /// How many of the highest scores to average
    pub best_of: u32,
}

impl Default for BestOfParams {
    fn default() -> Self {
        Self {
            start_column: 6,
            end_column: 8,
            best_of: 2,
        }
    }
}

impl BestOfParams {
    /// Validate raw parameters.
    ///
    /// All three must be positive and the range must not be inverted.
    pub fn new(start_column: i64, end_column: i64, best_of: i64) -> GradeResult<Self> {
        let positive = |n: i64| u32::try_from(n).ok().filter(|n| *n > 0);

        let (Some(start_column), Some(end_column), Some(best_of)) =
            (positive(start_column), positive(end_column), positive(best_of))
        else {
            return Err(GradeError::InvalidParameters);
        };

        if start_column > end_column {
            return Err(GradeError::InvalidRange);
        }

        Ok(Self {
            start_column,
            end_column,
            best_of,
        })
    }

    /// Validate parameters typed into a form.
    ///
    /// Each field is read by its leading integer, so "6", " 6" and "6.9" all
    /// mean column 6. Blank or non-numeric fields are rejected.
    pub fn from_form(start_column: &str, end_column: &str, best_of: &str) -> GradeResult<Self> {
        let parse = |field: &str| -> GradeResult<i64> {
            integer_literal()
                .find(field.trim_start())
                .and_then(|m| m.as_str().parse::<i64>().ok())
                .ok_or(GradeError::InvalidParameters)
        };

        Self::new(parse(start_column)?, parse(end_column)?, parse(best_of)?)
    }

    /// Zero-based half-open index range of the score columns
    fn indices(&self) -> std::ops::Range<usize> {
        (self.start_column as usize - 1)..(self.end_column as usize)
    }
}

//==============================================================================
// Scoring
//==============================================================================

/// Read a cell as a score.
///
/// Numbers pass through. Text is read by its leading decimal literal after
/// any leading whitespace, so "85" and "85 (late)" both score 85. Blank
/// cells, booleans and text without a leading number are not scores.
pub fn parse_score(cell: &CellValue) -> Option<f64> {
    let value = match cell {
        CellValue::Number(n) => *n,
        CellValue::Text(s) => score_literal()
            .find(s.trim_start())
            .and_then(|m| m.as_str().parse::<f64>().ok())?,
        CellValue::Empty | CellValue::Bool(_) => return None,
    };

    value.is_finite().then_some(value)
}

/// Round to two decimal places, ties away from zero (8.125 -> 8.13)
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Average of the `best_of` highest scores in the row's score columns.
///
/// Columns past the end of the row are ignored. Returns 0 when the range
/// holds no scores.
pub fn best_of_average(row: &[CellValue], params: &BestOfParams) -> f64 {
    let range = params.indices();
    let end = range.end.min(row.len());
    let start = range.start.min(end);

    let mut scores: Vec<f64> = row[start..end].iter().filter_map(parse_score).collect();
    scores.sort_by(|a, b| b.total_cmp(a));
    scores.truncate(params.best_of as usize);

    if scores.is_empty() {
        return 0.0;
    }

    let average = scores.iter().sum::<f64>() / scores.len() as f64;
    round_to_cents(average)
}

/// Compute the best-of average for every data row of a sheet.
///
/// Rows are padded with blank cells to the sheet width so the appended
/// result always sits under the appended header.
pub fn process_sheet(sheet: &Sheet, params: &BestOfParams) -> GradeResult<ProcessedSheet> {
    if sheet.row_count() < 2 {
        return Err(GradeError::InsufficientRows);
    }

    let width = sheet.width();

    let mut headers: Vec<String> = sheet
        .header()
        .map(|h| h.iter().map(ToString::to_string).collect())
        .unwrap_or_default();
    headers.resize(width, String::new());
    headers.push(RESULT_COLUMN_HEADER.to_string());

    let rows = sheet
        .data_rows()
        .iter()
        .map(|row| {
            let mut original_row: Row = row.clone();
            original_row.resize(width, CellValue::Empty);
            ProcessedRow {
                best_of_average: best_of_average(row, params),
                original_row,
            }
        })
        .collect::<Vec<_>>();

    debug!(
        rows = rows.len(),
        start = params.start_column,
        end = params.end_column,
        best_of = params.best_of,
        "processed sheet"
    );

    Ok(ProcessedSheet { headers, rows })
}
