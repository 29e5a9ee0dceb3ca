use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::enhancement::parser::ParseError;
use crate::extract::ExtractionError;
use crate::llm_client::LlmError;
use crate::render::RenderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The wire shape is a flat `{"error": "<message>"}` object; missing/invalid
/// uploads and unreadable documents are client errors, everything else is a
/// server error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Text extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Enhancement parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Upstream failure: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Upstream(format!("language model: {e}"))
    }
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        AppError::Upstream(format!("pdf renderer: {e}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Input(msg) => {
                tracing::warn!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::Extraction(e) => {
                tracing::warn!("Extraction failed: {e}");
                (
                    StatusCode::BAD_REQUEST,
                    "Failed to extract text from PDF".to_string(),
                )
            }
            AppError::Parse(e) => {
                tracing::error!("Model response unparseable: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Enhancement parsing failed: {e}"),
                )
            }
            AppError::Upstream(msg) => {
                tracing::error!("Upstream failure: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Upstream failure: {msg}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
