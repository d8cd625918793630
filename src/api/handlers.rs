//! API request handlers

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::{export_results, grade_workbook, BestOfParams};
use crate::error::{GradeError, GradeResult};
use crate::excel::{check_file_type, RESULTS_FILE_NAME, XLSX_CONTENT_TYPE};
use crate::types::ProcessedRow;

use super::server::AppState;

const INDEX_HTML: &str = include_str!("index.html");

/// Standard API response wrapper
#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

/// User mistakes are 400s carrying the message shown in the error banner
/// (413 for oversized uploads); anything else is a 500.
fn error_response(error: GradeError) -> Response {
    let status = if matches!(error, GradeError::UploadTooLarge) {
        StatusCode::PAYLOAD_TOO_LARGE
    } else if error.is_user_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    warn!(%status, error = %error, "request rejected");
    (status, Json(ApiResponse::<()>::err(error.to_string()))).into_response()
}

//==============================================================================
// Info endpoints
//==============================================================================

#[derive(Serialize, Deserialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiInfoResponse {
    pub name: String,
    pub version: String,
    pub endpoints: Vec<EndpointInfo>,
}

fn endpoint(path: &str, method: &str, description: &str) -> EndpointInfo {
    EndpointInfo {
        path: path.to_string(),
        method: method.to_string(),
        description: description.to_string(),
    }
}

/// GET / - Upload page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/v1 - Endpoint listing
pub async fn api_info(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(ApiInfoResponse {
        name: "Quiz Grader".to_string(),
        version: state.version.clone(),
        endpoints: vec![
            endpoint("/", "GET", "Upload page"),
            endpoint("/health", "GET", "Health check endpoint"),
            endpoint("/version", "GET", "Get server version"),
            endpoint(
                "/api/v1/process",
                "POST",
                "Calculate best-of averages for an uploaded .xlsx (multipart)",
            ),
            endpoint(
                "/api/v1/download",
                "POST",
                "Calculate and download pop_quiz_results.xlsx (multipart)",
            ),
        ],
    }))
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
    }))
}

#[derive(Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
    }))
}

//==============================================================================
// Grading endpoints
//==============================================================================

/// Fields of the upload form
#[derive(Debug)]
pub struct GradeUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub params: BestOfParams,
}

fn upload_error(e: MultipartError) -> GradeError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        GradeError::UploadTooLarge
    } else {
        GradeError::Upload(e.body_text())
    }
}

/// Read the multipart form: `file`, `start_column`, `end_column`, `best_of`.
///
/// Checks run in the order the page reports them: missing file, file type,
/// then parameters.
async fn read_upload(mut multipart: Multipart) -> GradeResult<GradeUpload> {
    let mut file: Option<(String, Option<String>, Vec<u8>)> = None;
    let mut start_column = String::new();
    let mut end_column = String::new();
    let mut best_of = String::new();

    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(upload_error)?;
                // Browsers send an empty part when nothing was picked
                if !file_name.is_empty() || !bytes.is_empty() {
                    file = Some((file_name, content_type, bytes.to_vec()));
                }
            }
            "start_column" => start_column = field.text().await.map_err(upload_error)?,
            "end_column" => end_column = field.text().await.map_err(upload_error)?,
            "best_of" => best_of = field.text().await.map_err(upload_error)?,
            _ => {}
        }
    }

    let (file_name, content_type, bytes) = file.ok_or(GradeError::MissingFile)?;
    check_file_type(&file_name, content_type.as_deref())?;
    let params = BestOfParams::from_form(&start_column, &end_column, &best_of)?;

    Ok(GradeUpload {
        file_name,
        bytes,
        params,
    })
}

/// Process response
#[derive(Serialize, Deserialize)]
pub struct ProcessResponse {
    pub file_name: String,
    pub params: BestOfParams,
    pub headers: Vec<String>,
    pub rows: Vec<ProcessedRow>,
}

/// POST /api/v1/process - Grade an uploaded workbook and return the table
pub async fn process(multipart: Multipart) -> Response {
    let upload = match read_upload(multipart).await {
        Ok(upload) => upload,
        Err(e) => return error_response(e),
    };

    match grade_workbook(&upload.bytes, &upload.params) {
        Ok(results) => {
            info!(
                file = %upload.file_name,
                rows = results.rows.len(),
                "processed upload"
            );
            Json(ApiResponse::ok(ProcessResponse {
                file_name: upload.file_name,
                params: upload.params,
                headers: results.headers,
                rows: results.rows,
            }))
            .into_response()
        }
        Err(e) => error_response(e),
    }
}

/// POST /api/v1/download - Grade an uploaded workbook and return it as .xlsx
pub async fn download(multipart: Multipart) -> Response {
    let result = async {
        let upload = read_upload(multipart).await?;
        let results = grade_workbook(&upload.bytes, &upload.params)?;
        let bytes = export_results(&results)?;
        info!(
            file = %upload.file_name,
            rows = results.rows.len(),
            size = bytes.len(),
            "exported results"
        );
        Ok::<_, GradeError>(bytes)
    }
    .await;

    match result {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", RESULTS_FILE_NAME),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
