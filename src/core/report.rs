//! Machine-readable grading report (.yaml / .json)

use crate::core::best_of::{round_to_cents, BestOfParams};
use crate::error::{GradeError, GradeResult};
use crate::types::{ProcessedRow, ProcessedSheet};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Class-level figures over all graded rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub students: usize,
    /// Students with at least one score in range (average above zero)
    pub graded: usize,
    pub class_average: f64,
    pub highest: f64,
    pub lowest: f64,
}

impl ReportSummary {
    pub fn from_results(results: &ProcessedSheet) -> Self {
        let students = results.rows.len();
        let graded = results.averages().filter(|avg| *avg > 0.0).count();

        if students == 0 {
            return Self {
                students,
                graded,
                class_average: 0.0,
                highest: 0.0,
                lowest: 0.0,
            };
        }

        let sum: f64 = results.averages().sum();
        let class_average = round_to_cents(sum / students as f64);
        let highest = results.averages().fold(f64::MIN, f64::max);
        let lowest = results.averages().fold(f64::MAX, f64::min);

        Self {
            students,
            graded,
            class_average,
            highest,
            lowest,
        }
    }
}

/// Full record of one grading run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeReport {
    /// RFC 3339 timestamp
    pub generated_at: String,
    pub source: String,
    pub params: BestOfParams,
    pub summary: ReportSummary,
    pub headers: Vec<String>,
    pub rows: Vec<ProcessedRow>,
}

impl GradeReport {
    pub fn new(source: impl Into<String>, params: BestOfParams, results: &ProcessedSheet) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            source: source.into(),
            params,
            summary: ReportSummary::from_results(results),
            headers: results.headers.clone(),
            rows: results.rows.clone(),
        }
    }

    /// Write as YAML or JSON, chosen by the file extension
    pub fn write(&self, path: &Path) -> GradeResult<()> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let content = match extension.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::to_string(self)?,
            Some("json") => serde_json::to_string_pretty(self)?,
            _ => {
                return Err(GradeError::Export(format!(
                    "Unsupported report format '{}'. Use .yaml or .json",
                    path.display()
                )))
            }
        };

        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn results(averages: &[f64]) -> ProcessedSheet {
        ProcessedSheet {
            headers: vec!["Name".to_string(), "Best Pop quiz Result".to_string()],
            rows: averages
                .iter()
                .map(|avg| ProcessedRow {
                    original_row: vec!["student".into()],
                    best_of_average: *avg,
                })
                .collect(),
        }
    }

    #[test]
    fn test_summary() {
        let summary = ReportSummary::from_results(&results(&[8.0, 0.0, 9.5]));
        assert_eq!(summary.students, 3);
        assert_eq!(summary.graded, 2);
        assert_eq!(summary.class_average, 5.83);
        assert_eq!(summary.highest, 9.5);
        assert_eq!(summary.lowest, 0.0);
    }

    #[test]
    fn test_summary_empty() {
        let summary = ReportSummary::from_results(&ProcessedSheet::default());
        assert_eq!(summary.students, 0);
        assert_eq!(summary.highest, 0.0);
    }

    #[test]
    fn test_write_yaml_and_json() {
        let dir = TempDir::new().unwrap();
        let report = GradeReport::new("grades.xlsx", BestOfParams::default(), &results(&[8.0]));

        let yaml_path = dir.path().join("report.yaml");
        report.write(&yaml_path).unwrap();
        let yaml = fs::read_to_string(&yaml_path).unwrap();
        assert!(yaml.contains("source: grades.xlsx"));
        assert!(yaml.contains("best_of_average: 8.0"));

        let json_path = dir.path().join("report.json");
        report.write(&json_path).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(parsed["params"]["start_column"], 6);
        assert_eq!(parsed["summary"]["students"], 1);
    }

    #[test]
    fn test_write_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let report = GradeReport::new("grades.xlsx", BestOfParams::default(), &results(&[8.0]));
        let err = report.write(&dir.path().join("report.txt")).unwrap_err();
        assert!(matches!(err, GradeError::Export(_)));
    }
}
