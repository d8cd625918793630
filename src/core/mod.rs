//! Grading engine: best-of averaging, end-to-end pipeline, reports

pub mod best_of;
pub mod pipeline;
pub mod report;

pub use best_of::{best_of_average, parse_score, process_sheet, round_to_cents, BestOfParams};
pub use pipeline::{export_results, grade_workbook};
pub use report::{GradeReport, ReportSummary};
