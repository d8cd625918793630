//! Quiz Grader - best-of averages for Excel gradebooks
//!
//! Reads the first worksheet of a `.xlsx` gradebook, averages each student's
//! highest scores within a column range, and writes the sheet back with a
//! `Best Pop quiz Result` column appended.
//!
//! # Example
//!
//! ```no_run
//! use quiz_grader::core::{export_results, grade_workbook, BestOfParams};
//!
//! let upload = std::fs::read("grades.xlsx")?;
//! let params = BestOfParams::new(6, 8, 2)?;
//! let results = grade_workbook(&upload, &params)?;
//!
//! for row in &results.rows {
//!     println!("{:?} -> {}", row.original_row.first(), row.best_of_average);
//! }
//!
//! std::fs::write("pop_quiz_results.xlsx", export_results(&results)?)?;
//! # Ok::<(), quiz_grader::error::GradeError>(())
//! ```

pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;

// Re-export commonly used types
pub use error::{GradeError, GradeResult};
pub use types::{CellValue, ProcessedRow, ProcessedSheet, Row, Sheet};
