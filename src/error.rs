use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid pipeline output: crew returned no task outputs")]
    InvalidPipelineOutput,

    #[error("missing validation report: no task output contained a parseable ```json block")]
    MissingValidationReport,

    #[error("pipeline failed: {0:#}")]
    Pipeline(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ValidatorError>;

/// Every failure surfaces as a generic 500 carrying its description.
impl IntoResponse for ValidatorError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
