use thiserror::Error;

pub type GradeResult<T> = Result<T, GradeError>;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("Invalid file type. Please upload a .xlsx file.")]
    InvalidFileType,

    #[error("Please upload an Excel file first.")]
    MissingFile,

    #[error("Please enter valid, positive numbers for all fields.")]
    InvalidParameters,

    #[error("Start column index cannot be greater than the end column index.")]
    InvalidRange,

    #[error("Excel file must have a header row and at least one data row.")]
    InsufficientRows,

    #[error("No data available to download.")]
    NoData,

    #[error("Upload exceeds the size limit.")]
    UploadTooLarge,

    #[error("Failed to read upload: {0}")]
    Upload(String),

    #[error("Failed to read workbook: {0}")]
    Workbook(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GradeError {
    /// True when the user can fix the problem by correcting their input
    /// (wrong file, bad parameters, unreadable workbook).
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            GradeError::Export(_) | GradeError::Io(_) | GradeError::Yaml(_) | GradeError::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            GradeError::InvalidRange.to_string(),
            "Start column index cannot be greater than the end column index."
        );
        assert_eq!(
            GradeError::InsufficientRows.to_string(),
            "Excel file must have a header row and at least one data row."
        );
        assert_eq!(
            GradeError::Workbook("zip header".to_string()).to_string(),
            "Failed to read workbook: zip header"
        );
    }

    #[test]
    fn test_user_error_classification() {
        assert!(GradeError::InvalidFileType.is_user_error());
        assert!(GradeError::InvalidParameters.is_user_error());
        assert!(GradeError::Workbook("bad".to_string()).is_user_error());
        assert!(GradeError::UploadTooLarge.is_user_error());
        assert!(!GradeError::Export("disk full".to_string()).is_user_error());
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert!(!GradeError::from(io).is_user_error());
    }
}
