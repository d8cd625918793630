//! Results exporter - headers + rows → Excel (.xlsx)

use super::RESULTS_SHEET_NAME;
use crate::error::{GradeError, GradeResult};
use crate::types::{CellValue, ProcessedSheet, Row};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;
use tracing::debug;

/// Writes a single "Results" worksheet: a bold header row, then data rows
pub struct ResultsExporter {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl ResultsExporter {
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// Exporter for a processed sheet, average appended to each row
    #[must_use]
    pub fn from_processed(sheet: &ProcessedSheet) -> Self {
        Self::new(
            sheet.headers.clone(),
            sheet.rows.iter().map(|r| r.to_output_row()).collect(),
        )
    }

    /// Serialize the workbook in memory (for downloads)
    pub fn to_bytes(&self) -> GradeResult<Vec<u8>> {
        let mut workbook = self.build()?;
        workbook
            .save_to_buffer()
            .map_err(|e| GradeError::Export(format!("Failed to serialize workbook: {}", e)))
    }

    /// Write the workbook to disk
    pub fn save(&self, output_path: &Path) -> GradeResult<()> {
        let mut workbook = self.build()?;
        workbook
            .save(output_path)
            .map_err(|e| GradeError::Export(format!("Failed to save Excel file: {}", e)))?;
        debug!(path = %output_path.display(), rows = self.rows.len(), "saved workbook");
        Ok(())
    }

    fn build(&self) -> GradeResult<Workbook> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(RESULTS_SHEET_NAME)
            .map_err(|e| GradeError::Export(format!("Failed to set worksheet name: {}", e)))?;

        let header_format = Format::new().set_bold();
        for (col, header) in self.headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            worksheet
                .write_string_with_format(0, column_number(col)?, header, &header_format)
                .map_err(|e| GradeError::Export(e.to_string()))?;
        }

        for (i, row) in self.rows.iter().enumerate() {
            let row_num = u32::try_from(i + 1)
                .map_err(|_| GradeError::Export("too many rows for a worksheet".to_string()))?;
            for (col, cell) in row.iter().enumerate() {
                write_cell(worksheet, row_num, column_number(col)?, cell)?;
            }
        }

        Ok(workbook)
    }
}

fn column_number(index: usize) -> GradeResult<u16> {
    u16::try_from(index)
        .map_err(|_| GradeError::Export("too many columns for a worksheet".to_string()))
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &CellValue) -> GradeResult<()> {
    let result = match cell {
        CellValue::Empty => return Ok(()),
        CellValue::Text(s) if s.is_empty() => return Ok(()),
        CellValue::Text(s) => worksheet.write_string(row, col, s),
        CellValue::Number(n) => worksheet.write_number(row, col, *n),
        CellValue::Bool(b) => worksheet.write_boolean(row, col, *b),
    };
    result
        .map(|_| ())
        .map_err(|e| GradeError::Export(e.to_string()))
}
