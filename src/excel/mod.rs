//! Gradebook import/export
//!
//! - Import: first worksheet of an .xlsx → [`Sheet`](crate::types::Sheet)
//! - Export: headers + rows → single-sheet .xlsx ("Results")

mod exporter;
mod importer;

pub use exporter::ResultsExporter;
pub use importer::GradebookImporter;

use crate::error::{GradeError, GradeResult};

/// Download name of the augmented workbook
pub const RESULTS_FILE_NAME: &str = "pop_quiz_results.xlsx";

/// Worksheet name used for exported results
pub const RESULTS_SHEET_NAME: &str = "Results";

/// MIME type of an Office Open XML spreadsheet
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Accept a file as a gradebook when its name ends in `.xlsx` or its
/// declared content type is the xlsx MIME type.
pub fn check_file_type(file_name: &str, content_type: Option<&str>) -> GradeResult<()> {
    let has_extension = file_name.to_ascii_lowercase().ends_with(".xlsx");
    let has_mime = content_type.is_some_and(|ct| ct.eq_ignore_ascii_case(XLSX_CONTENT_TYPE));

    if has_extension || has_mime {
        Ok(())
    } else {
        Err(GradeError::InvalidFileType)
    }
}

/// Convert a 0-based column index to its spreadsheet letter (0 → A, 26 → AA)
pub fn column_letter(index: usize) -> String {
    let mut result = String::new();
    let mut idx = index;

    loop {
        let remainder = idx % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }

    result
}
