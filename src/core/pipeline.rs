//! Upload → process → download, end to end

use crate::core::best_of::{process_sheet, BestOfParams};
use crate::error::{GradeError, GradeResult};
use crate::excel::{GradebookImporter, ResultsExporter};
use crate::types::ProcessedSheet;

/// Read the first worksheet of an uploaded workbook and grade every row
pub fn grade_workbook(bytes: &[u8], params: &BestOfParams) -> GradeResult<ProcessedSheet> {
    let sheet = GradebookImporter::from_bytes(bytes).import()?;
    process_sheet(&sheet, params)
}

/// Serialize graded results to .xlsx bytes
pub fn export_results(results: &ProcessedSheet) -> GradeResult<Vec<u8>> {
    if results.is_empty() || results.headers.is_empty() {
        return Err(GradeError::NoData);
    }
    ResultsExporter::from_processed(results).to_bytes()
}
