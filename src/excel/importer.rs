//! Gradebook importer - Excel (.xlsx) → Sheet

use crate::error::{GradeError, GradeResult};
use crate::types::{CellValue, Row, Sheet};
use calamine::{Data, Range, Reader, Xlsx};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Reads the first worksheet of an uploaded workbook
pub struct GradebookImporter {
    bytes: Vec<u8>,
}

impl GradebookImporter {
    /// Importer over an in-memory upload
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Importer over a file on disk
    pub fn open<P: AsRef<Path>>(path: P) -> GradeResult<Self> {
        Ok(Self::from_bytes(std::fs::read(path)?))
    }

    /// Import the first worksheet. Other worksheets are ignored.
    pub fn import(&self) -> GradeResult<Sheet> {
        let mut workbook = Xlsx::new(Cursor::new(self.bytes.as_slice()))
            .map_err(|e| GradeError::Workbook(e.to_string()))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| GradeError::Workbook("workbook has no worksheets".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| GradeError::Workbook(e.to_string()))?;

        let sheet = Self::range_to_sheet(&range);
        debug!(
            sheet = %sheet_name,
            rows = sheet.row_count(),
            width = sheet.width(),
            "imported worksheet"
        );
        Ok(sheet)
    }

    /// Lay the used range out on absolute columns (index 0 = column A),
    /// starting from the first used row.
    fn range_to_sheet(range: &Range<Data>) -> Sheet {
        if range.is_empty() {
            return Sheet::default();
        }
        let left_pad = range.start().map(|(_, col)| col as usize).unwrap_or(0);

        let mut rows: Vec<Row> = range
            .rows()
            .map(|cells| {
                let mut row: Row = vec![CellValue::Empty; left_pad];
                row.extend(cells.iter().map(Self::convert_cell));
                while row.last().is_some_and(CellValue::is_empty) {
                    row.pop();
                }
                row
            })
            .collect();

        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }

        Sheet::new(rows)
    }

    fn convert_cell(cell: &Data) -> CellValue {
        match cell {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Bool(b) => CellValue::Bool(*b),
            // Dates keep their serial number, as a spreadsheet shows them unformatted
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Text(e.to_string()),
        }
    }
}
