use serde::{Deserialize, Serialize};
use std::fmt;

/// Header appended to every processed sheet
pub const RESULT_COLUMN_HEADER: &str = "Best Pop quiz Result";

//==============================================================================
// Cells and rows
//==============================================================================

/// A single spreadsheet cell
///
/// Cells are heterogeneous: a gradebook row usually mixes names (text) with
/// scores (numbers), and any cell may be blank.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

/// Ordered, positionally indexed cells. Index 0 is spreadsheet column A.
pub type Row = Vec<CellValue>;

//==============================================================================
// Sheets
//==============================================================================

/// The first worksheet of an uploaded workbook, header row first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Rows after the header
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row in the sheet
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

//==============================================================================
// Processed output
//==============================================================================

/// A data row plus its derived best-of average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRow {
    pub original_row: Row,
    pub best_of_average: f64,
}

impl ProcessedRow {
    /// The row as it is written back out: original cells, then the average
    pub fn to_output_row(&self) -> Row {
        let mut row = self.original_row.clone();
        row.push(CellValue::Number(self.best_of_average));
        row
    }
}

/// Result of one processing run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProcessedSheet {
    /// Original header cells followed by [`RESULT_COLUMN_HEADER`]
    pub headers: Vec<String>,
    pub rows: Vec<ProcessedRow>,
}

impl ProcessedSheet {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn averages(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|r| r.best_of_average)
    }
}
